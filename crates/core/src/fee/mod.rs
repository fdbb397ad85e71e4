//! Daily congestion-fee calculation.
//!
//! The service validates that all entries fall on one calendar day, applies
//! vehicle and weekend/holiday exemptions, groups the remaining entries into
//! sliding 60-minute blocks, prices each block at the maximum of its
//! members, and caps the daily total.

pub mod errors;
pub mod model;
pub mod service;


pub use errors::FeeError;
pub use service::{FeeService, FeeServiceTrait};
