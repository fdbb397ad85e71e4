/// Minutes in a calendar day; the price lookup table has one slot per minute.
pub const MINUTES_PER_DAY: usize = 1440;

/// Maximum total fee chargeable for a single calendar day.
pub const DAILY_FEE_CAP: u32 = 60;

/// Canonical format for holiday and entry dates.
pub const HOLIDAY_DATE_FORMAT: &str = "%Y-%m-%d";
