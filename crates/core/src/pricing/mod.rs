//! Per-minute toll pricing.
//!
//! A sparse set of [`PriceBlock`] breakpoints is expanded once, at service
//! construction, into a dense [`PriceLookupTable`] with one price per minute
//! of the day. Lookups after that are a plain array index.

pub mod model;
pub mod providers;

pub use model::{PriceBlock, PriceLookupTable};
pub use providers::{PriceBlockProvider, StaticPriceBlockProvider};
