//! Per-year holiday cache.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::info;
use tokio::sync::Mutex;

use super::errors::HolidayError;
use super::provider::HolidayProvider;

/// Lazily populated, per-year set of exempt calendar dates.
///
/// Keying by year means a long-running process self-manages the rollover
/// into a new year; without it, stale data would be cached until restart.
/// Once a year is populated it is immutable and reused for the process
/// lifetime.
pub struct HolidayCalendar {
    provider: Arc<dyn HolidayProvider>,
    years: Mutex<HashMap<i32, Arc<HashSet<String>>>>,
}

impl HolidayCalendar {
    pub fn new(provider: Arc<dyn HolidayProvider>) -> Self {
        Self {
            provider,
            years: Mutex::new(HashMap::new()),
        }
    }

    /// Holidays for `year`, fetching from the provider on first request.
    ///
    /// The lock is held across the fetch, so concurrent callers for a cold
    /// year wait on the single in-flight request instead of racing. A failed
    /// fetch leaves the year uncached, making the next request retry rather
    /// than serving an empty set.
    pub async fn holidays_for(&self, year: i32) -> Result<Arc<HashSet<String>>, HolidayError> {
        let mut years = self.years.lock().await;
        if let Some(holidays) = years.get(&year) {
            return Ok(Arc::clone(holidays));
        }

        info!("populating holiday cache for year {}", year);
        let dates = self.provider.fetch(year).await?;
        let holidays: Arc<HashSet<String>> = Arc::new(dates.into_iter().collect());
        years.insert(year, Arc::clone(&holidays));

        Ok(holidays)
    }
}
