//! Billable block model.

use chrono::{DateTime, Duration, FixedOffset};

/// A maximal run of entries within a sliding 60-minute window, priced at
/// the maximum of its members. Exists only for one fee computation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BillableBlock {
    pub end: DateTime<FixedOffset>,
    pub price: u32,
}

impl BillableBlock {
    /// Open a new block anchored at the given entry time.
    pub fn open_at(start: DateTime<FixedOffset>) -> Self {
        Self {
            end: start + Duration::hours(1),
            price: 0,
        }
    }

    /// Whether an entry joins this block. An entry exactly at `end` does
    /// not: it opens a new block.
    pub fn admits(&self, entry: DateTime<FixedOffset>) -> bool {
        entry < self.end
    }

    /// Record an entry's price, keeping the block maximum.
    pub fn observe(&mut self, price: u32) {
        self.price = self.price.max(price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn entry_at_exact_end_opens_a_new_block() {
        let block = BillableBlock::open_at(ts("2025-06-03T10:00:00+02:00"));
        assert!(block.admits(ts("2025-06-03T10:59:59+02:00")));
        assert!(!block.admits(ts("2025-06-03T11:00:00+02:00")));
    }

    #[test]
    fn observe_keeps_the_maximum_price() {
        let mut block = BillableBlock::open_at(ts("2025-06-03T10:00:00+02:00"));
        block.observe(8);
        block.observe(18);
        block.observe(13);
        assert_eq!(block.price, 18);
    }
}
