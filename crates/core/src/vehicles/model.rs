//! Vehicle domain model.

/// A known vehicle type and whether it is exempt from all fees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub vehicle_type: String,
    pub toll_free: bool,
}

impl Vehicle {
    pub fn new(vehicle_type: impl Into<String>, toll_free: bool) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            toll_free,
        }
    }
}
