//! Fee calculation service.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, FixedOffset, Weekday};
use log::debug;

use super::errors::FeeError;
use super::model::BillableBlock;
use crate::constants::{DAILY_FEE_CAP, HOLIDAY_DATE_FORMAT};
use crate::holidays::{HolidayCalendar, HolidayProvider};
use crate::pricing::{PriceBlockProvider, PriceLookupTable};
use crate::vehicles::VehicleListProvider;

/// Computes the daily fee for a vehicle given its entry times.
#[async_trait]
pub trait FeeServiceTrait: Send + Sync {
    /// Total fee for a non-empty set of entries on a single calendar day.
    async fn calculate_fee(
        &self,
        vehicle_type: &str,
        entries: &[DateTime<FixedOffset>],
    ) -> Result<u32, FeeError>;
}

/// Fee calculator over injected vehicle, price-block, and holiday sources.
///
/// The vehicle registry and price table are built once at construction and
/// read-only afterwards; only the holiday calendar mutates, under its own
/// lock, so the service is safe to share across concurrent requests.
pub struct FeeService {
    registry: HashMap<String, bool>,
    prices: PriceLookupTable,
    holidays: HolidayCalendar,
}

impl FeeService {
    pub fn new(
        vehicles: &dyn VehicleListProvider,
        holiday_provider: Arc<dyn HolidayProvider>,
        price_blocks: &dyn PriceBlockProvider,
    ) -> Self {
        let registry = vehicles
            .vehicles()
            .into_iter()
            .map(|v| (v.vehicle_type, v.toll_free))
            .collect();

        Self {
            registry,
            prices: PriceLookupTable::build(price_blocks.price_blocks()),
            holidays: HolidayCalendar::new(holiday_provider),
        }
    }

    fn is_single_day(entries: &[DateTime<FixedOffset>]) -> bool {
        let days: HashSet<String> = entries
            .iter()
            .map(|e| e.format(HOLIDAY_DATE_FORMAT).to_string())
            .collect();
        days.len() == 1
    }

    /// Drop weekend entries, then holiday entries. The holiday fetch is
    /// skipped entirely when nothing survives the weekend filter.
    async fn billable_entries(
        &self,
        entries: &[DateTime<FixedOffset>],
    ) -> Result<Vec<DateTime<FixedOffset>>, FeeError> {
        let weekday_entries: Vec<DateTime<FixedOffset>> = entries
            .iter()
            .copied()
            .filter(|e| !matches!(e.weekday(), Weekday::Sat | Weekday::Sun))
            .collect();

        let Some(first) = weekday_entries.first() else {
            return Ok(weekday_entries);
        };

        // All entries share one calendar day, hence one year.
        let holidays = self.holidays.holidays_for(first.year()).await?;
        Ok(weekday_entries
            .into_iter()
            .filter(|e| !holidays.contains(&e.format(HOLIDAY_DATE_FORMAT).to_string()))
            .collect())
    }
}

#[async_trait]
impl FeeServiceTrait for FeeService {
    async fn calculate_fee(
        &self,
        vehicle_type: &str,
        entries: &[DateTime<FixedOffset>],
    ) -> Result<u32, FeeError> {
        if !Self::is_single_day(entries) {
            return Err(FeeError::MultiDayEntries);
        }

        let toll_free = *self
            .registry
            .get(vehicle_type)
            .ok_or_else(|| FeeError::UnknownVehicle(vehicle_type.to_string()))?;
        if toll_free {
            debug!("vehicle type {} is toll-free", vehicle_type);
            return Ok(0);
        }

        let mut billable = self.billable_entries(entries).await?;
        if billable.is_empty() {
            return Ok(0);
        }
        billable.sort_unstable();

        // Blocks slide with the entries: each one is anchored at the first
        // entry it admits, not at a fixed wall-clock grid.
        let mut blocks: Vec<BillableBlock> = Vec::new();
        for entry in billable {
            let price = self.prices.price_for(&entry);
            match blocks.last_mut().filter(|block| block.admits(entry)) {
                Some(block) => block.observe(price),
                None => {
                    let mut block = BillableBlock::open_at(entry);
                    block.observe(price);
                    blocks.push(block);
                }
            }
        }

        let total: u32 = blocks.iter().map(|block| block.price).sum();
        Ok(total.min(DAILY_FEE_CAP))
    }
}
