use chrono::{DateTime, Utc};

/// Immutable receipt of where and when a vehicle parked. Floor and spot are
/// 1-indexed, matching what the garage reports to the driver. The arrival
/// time is stamped with the wall clock at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    vehicle: String,
    arrival_time: DateTime<Utc>,
    floor: u32,
    spot: u32,
}

impl Ticket {
    pub fn new(vehicle: impl Into<String>, floor: u32, spot: u32) -> Self {
        Ticket {
            vehicle: vehicle.into(),
            arrival_time: Utc::now(),
            floor,
            spot,
        }
    }

    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    pub fn arrival_time(&self) -> DateTime<Utc> {
        self.arrival_time
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn spot(&self) -> u32 {
        self.spot
    }
}
