//! Core error types for the toll calculator.

use thiserror::Error;

use crate::fee::FeeError;
use crate::holidays::HolidayError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the toll calculator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fee calculation failed: {0}")]
    Fee(#[from] FeeError),

    #[error("Holiday lookup failed: {0}")]
    Holiday(#[from] HolidayError),
}
