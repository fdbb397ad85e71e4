//! Core engine for computing daily congestion-toll fees.
//!
//! The engine is a pure function of its inputs plus a lazily populated
//! in-memory holiday cache. Collaborators (vehicle list, price blocks,
//! holiday lookups) are injected through capability traits so the fee
//! service never depends on their concrete implementations.

pub mod constants;
pub mod errors;
pub mod fee;
pub mod holidays;
pub mod pricing;
pub mod vehicles;

pub use errors::{Error, Result};
