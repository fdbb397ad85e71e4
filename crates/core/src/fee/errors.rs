//! Fee calculation error types.

use thiserror::Error;

use crate::holidays::HolidayError;

/// Errors that can occur while computing a fee.
///
/// All failures are terminal for the request: no retries, no partial fees.
#[derive(Error, Debug)]
pub enum FeeError {
    #[error("entry timestamps span more than one calendar day")]
    MultiDayEntries,

    #[error("unknown vehicle type: {0}")]
    UnknownVehicle(String),

    #[error("holiday lookup failed: {0}")]
    Holiday(#[from] HolidayError),
}
