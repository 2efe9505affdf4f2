/// Floor number of the ground-level entrance.
pub const ENTRANCE_FLOOR: u32 = 0;

/// An elevator carries at most one in-progress request at a time. Movement
/// is instantaneous, there is no travel-time model.
#[derive(Debug, Clone, Default)]
pub struct Elevator {
    occupied: bool,
    current_floor: u32,
}

impl Elevator {
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    pub fn occupy(&mut self) {
        self.occupied = true;
    }

    pub fn release(&mut self) {
        self.occupied = false;
    }

    pub fn go_to_floor(&mut self, floor: u32) {
        self.current_floor = floor;
    }
}
