//! Public holiday lookups.
//!
//! Holidays come from an external provider and are cached per year for the
//! process lifetime. The [`HolidayCalendar`] guards the cache with a mutex
//! held across the fetch, so a cold year is fetched at most once even under
//! concurrent callers.

pub mod calendar;
pub mod dagsmart;
pub mod errors;
pub mod provider;

#[cfg(test)]
mod calendar_tests;

pub use calendar::HolidayCalendar;
pub use dagsmart::DagsmartProvider;
pub use errors::HolidayError;
pub use provider::HolidayProvider;
