//! Price block and lookup table models.

use chrono::{DateTime, TimeZone, Timelike};

use crate::constants::MINUTES_PER_DAY;

/// A pricing breakpoint: the toll becomes `price` at minute-of-day `start`
/// and holds until the next defined start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBlock {
    /// Minute of the day, 0..=1439.
    pub start: u16,
    /// Price in effect from `start`, in whole currency units.
    pub price: u32,
}

impl PriceBlock {
    pub fn new(start: u16, price: u32) -> Self {
        Self { start, price }
    }

    /// Convenience constructor taking a wall-clock hour and minute.
    pub fn at(hour: u16, minute: u16, price: u32) -> Self {
        Self::new(hour * 60 + minute, price)
    }
}

/// Dense price table with exactly one entry per minute of the day.
///
/// Always fully populated: minutes before the earliest block default to 0,
/// and the last block's price carries through to midnight.
#[derive(Debug, Clone)]
pub struct PriceLookupTable {
    prices: [u32; MINUTES_PER_DAY],
}

impl PriceLookupTable {
    /// Expand sparse blocks into the dense table.
    ///
    /// Blocks may arrive unsorted and may share a `start`; the sort is
    /// stable, so among duplicate starts the last given block wins.
    pub fn build(mut blocks: Vec<PriceBlock>) -> Self {
        blocks.sort_by_key(|block| block.start);

        let mut prices = [0u32; MINUTES_PER_DAY];
        let mut current = 0u32;
        let mut next = 0usize;
        for (minute, slot) in prices.iter_mut().enumerate() {
            while next < blocks.len() && usize::from(blocks[next].start) <= minute {
                current = blocks[next].price;
                next += 1;
            }
            *slot = current;
        }

        Self { prices }
    }

    /// Price in effect at the given minute of the day.
    pub fn price_at_minute(&self, minute: usize) -> u32 {
        self.prices[minute % MINUTES_PER_DAY]
    }

    /// Price in effect at an entry time. Only the time of day matters.
    pub fn price_for<Tz: TimeZone>(&self, entry: &DateTime<Tz>) -> u32 {
        self.price_at_minute((entry.hour() * 60 + entry.minute()) as usize)
    }
}
