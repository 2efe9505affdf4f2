/// A single occupancy cell on a floor. Storing the vehicle as an `Option`
/// makes "a vehicle is recorded iff the spot is occupied" hold by
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spot {
    vehicle: Option<String>,
}

impl Spot {
    pub fn is_occupied(&self) -> bool {
        self.vehicle.is_some()
    }

    pub fn occupant(&self) -> Option<&str> {
        self.vehicle.as_deref()
    }

    /// Callers must have verified that the spot is free.
    pub(crate) fn park(&mut self, vehicle: &str) {
        self.vehicle = Some(vehicle.to_string());
    }

    /// Clears the spot. Idempotent.
    pub(crate) fn unpark(&mut self) -> Option<String> {
        self.vehicle.take()
    }
}
