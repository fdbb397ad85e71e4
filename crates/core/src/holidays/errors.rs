//! Holiday lookup error types.

use thiserror::Error;

/// Errors that can occur while fetching public holidays.
#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("invalid holiday date: {0}")]
    InvalidDate(String),

    #[error("failed to decode holiday response: {0}")]
    Decode(String),
}
