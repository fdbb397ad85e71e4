//! Holiday provider capability.

use async_trait::async_trait;

use super::errors::HolidayError;

/// Source of public holidays for a given year.
///
/// Dates are returned as `YYYY-MM-DD` strings; implementations must reject
/// anything else at the boundary rather than letting malformed dates leak
/// into the cache.
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    async fn fetch(&self, year: i32) -> Result<Vec<String>, HolidayError>;
}
