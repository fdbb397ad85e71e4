//! Vehicle types and their toll exemptions.

pub mod model;
pub mod providers;

pub use model::Vehicle;
pub use providers::{StaticVehicleProvider, VehicleListProvider};
