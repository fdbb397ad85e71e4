//! Vehicle list sources.

use super::model::Vehicle;

/// Source of the known vehicle types, consulted once at service construction.
pub trait VehicleListProvider: Send + Sync {
    fn vehicles(&self) -> Vec<Vehicle>;
}

/// The hardcoded vehicle list: only cars pay; the rest are exempt.
pub struct StaticVehicleProvider;

impl VehicleListProvider for StaticVehicleProvider {
    fn vehicles(&self) -> Vec<Vehicle> {
        vec![
            Vehicle::new("car", false),
            Vehicle::new("motorbike", true),
            Vehicle::new("tractor", true),
            Vehicle::new("emergency", true),
            Vehicle::new("diplomat", true),
            Vehicle::new("foreign", true),
            Vehicle::new("military", true),
        ]
    }
}
