use crate::simulation::garage::spot::Spot;

/// A fixed-capacity, ordered collection of spots. The spot count is set at
/// construction and never changes. Spot numbers handed out by this type are
/// 1-indexed, which is what ends up on tickets and in reports.
#[derive(Debug, Clone)]
pub struct Floor {
    spots: Vec<Spot>,
}

impl Floor {
    pub fn new(spot_count: u32) -> Self {
        Floor {
            spots: vec![Spot::default(); spot_count as usize],
        }
    }

    pub fn spot_count(&self) -> u32 {
        self.spots.len() as u32
    }

    pub fn occupied_count(&self) -> u32 {
        self.spots.iter().filter(|s| s.is_occupied()).count() as u32
    }

    pub fn has_free_spot(&self) -> bool {
        self.spots.iter().any(|s| !s.is_occupied())
    }

    /// First-fit scan: the lowest-numbered free spot wins.
    pub fn find_free_spot(&self) -> Option<u32> {
        self.spots
            .iter()
            .position(|s| !s.is_occupied())
            .map(|i| i as u32 + 1)
    }

    /// Parks the vehicle on the first free spot and returns its 1-indexed
    /// number, or `None` when the floor is full. Mutates exactly one spot.
    pub fn park_vehicle(&mut self, vehicle: &str) -> Option<u32> {
        let spot = self.find_free_spot()?;
        self.spots[spot as usize - 1].park(vehicle);
        Some(spot)
    }

    /// Frees the given 1-indexed spot and returns the evicted vehicle.
    /// Returns `None` when the number is out of range or the spot is vacant.
    pub fn unpark_vehicle(&mut self, spot: u32) -> Option<String> {
        let index = spot.checked_sub(1)? as usize;
        self.spots.get_mut(index)?.unpark()
    }

    /// Occupant of the given 1-indexed spot, `None` for out-of-range or
    /// vacant spots.
    pub fn occupant(&self, spot: u32) -> Option<&str> {
        let index = spot.checked_sub(1)? as usize;
        self.spots.get(index)?.occupant()
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }
}
