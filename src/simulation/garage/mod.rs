pub mod elevator;
pub mod floor;
pub mod spot;
pub mod ticket;

use thiserror::Error;

use crate::simulation::garage::elevator::{ENTRANCE_FLOOR, Elevator};
use crate::simulation::garage::floor::Floor;
use crate::simulation::garage::ticket::Ticket;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GarageError {
    #[error("no free spot available on any floor")]
    NoSpotAvailable,
    #[error("all elevators are occupied")]
    NoElevatorAvailable,
    #[error("floor {floor} does not exist")]
    InvalidFloor { floor: u32 },
    #[error("spot {spot} does not exist on floor {floor}")]
    InvalidSpot { floor: u32, spot: u32 },
    #[error("spot {spot} on floor {floor} is not occupied")]
    SpotVacant { floor: u32, spot: u32 },
    #[error("ticket names vehicle {ticket_vehicle}, but {parked_vehicle} is parked there")]
    VehicleMismatch {
        ticket_vehicle: String,
        parked_vehicle: String,
    },
}

/// Outcome of a successful park request. All numbers are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingAssignment {
    pub floor: u32,
    pub spot: u32,
    pub elevator: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupiedSpot {
    pub floor: u32,
    pub spot: u32,
    pub vehicle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorOccupancy {
    pub floor: u32,
    pub occupied: u32,
    pub free: u32,
}

/// Owns all floors, elevators and issued tickets, and coordinates their
/// assignment for park and unpark requests.
///
/// Allocation is first-fit throughout: the lowest-indexed free elevator,
/// floor and spot win. There is no load balancing and no randomness, so a
/// given request sequence always produces the same assignments.
#[derive(Debug)]
pub struct Garage {
    floors: Vec<Floor>,
    elevators: Vec<Elevator>,
    // Append-only audit log. Tickets stay in here after redemption.
    tickets: Vec<Ticket>,
}

impl Garage {
    pub fn new(floors: u32, spots_per_floor: u32, elevators: u32) -> Self {
        Garage {
            floors: (0..floors).map(|_| Floor::new(spots_per_floor)).collect(),
            elevators: vec![Elevator::default(); elevators as usize],
            tickets: Vec::new(),
        }
    }

    pub fn has_free_spot(&self) -> bool {
        self.floors.iter().any(Floor::has_free_spot)
    }

    /// Handles a park request: picks the first free elevator, sends it to the
    /// entrance, parks the vehicle on the first free spot of the first floor
    /// with capacity and issues a ticket.
    ///
    /// The elevator stays occupied with the parked vehicle's trip; only a
    /// later unpark releases one. Fails without touching any state when no
    /// spot or no elevator is available.
    pub fn park_vehicle(&mut self, vehicle: &str) -> Result<ParkingAssignment, GarageError> {
        let floor_index = self
            .floors
            .iter()
            .position(Floor::has_free_spot)
            .ok_or(GarageError::NoSpotAvailable)?;
        let elevator_index = self
            .elevators
            .iter()
            .position(|e| !e.is_occupied())
            .ok_or(GarageError::NoElevatorAvailable)?;

        // Both resources are known to be available, so mutation starts here.
        let elevator = &mut self.elevators[elevator_index];
        elevator.occupy();
        elevator.go_to_floor(ENTRANCE_FLOOR);

        let spot = self.floors[floor_index]
            .park_vehicle(vehicle)
            .expect("floor reported a free spot");

        let assignment = ParkingAssignment {
            floor: floor_index as u32 + 1,
            spot,
            elevator: elevator_index as u32 + 1,
        };
        self.tickets
            .push(Ticket::new(vehicle, assignment.floor, assignment.spot));
        Ok(assignment)
    }

    /// Redeems a ticket: picks the first free elevator, sends it to the
    /// ticket's floor, frees the spot and releases the elevator again.
    /// Returns the 1-indexed elevator that was used.
    ///
    /// The ticket is validated against the live garage state before anything
    /// is mutated: its floor and spot must exist, the spot must be occupied,
    /// and the occupant must be the ticket's vehicle.
    pub fn unpark_vehicle(&mut self, ticket: &Ticket) -> Result<u32, GarageError> {
        let elevator_index = self
            .elevators
            .iter()
            .position(|e| !e.is_occupied())
            .ok_or(GarageError::NoElevatorAvailable)?;

        let floor_index = ticket
            .floor()
            .checked_sub(1)
            .ok_or(GarageError::InvalidFloor {
                floor: ticket.floor(),
            })? as usize;
        let floor = self
            .floors
            .get_mut(floor_index)
            .ok_or(GarageError::InvalidFloor {
                floor: ticket.floor(),
            })?;
        if ticket.spot() == 0 || ticket.spot() > floor.spot_count() {
            return Err(GarageError::InvalidSpot {
                floor: ticket.floor(),
                spot: ticket.spot(),
            });
        }
        let parked_vehicle = floor
            .occupant(ticket.spot())
            .ok_or(GarageError::SpotVacant {
                floor: ticket.floor(),
                spot: ticket.spot(),
            })?;
        if parked_vehicle != ticket.vehicle() {
            return Err(GarageError::VehicleMismatch {
                ticket_vehicle: ticket.vehicle().to_string(),
                parked_vehicle: parked_vehicle.to_string(),
            });
        }

        let elevator = &mut self.elevators[elevator_index];
        elevator.occupy();
        elevator.go_to_floor(ticket.floor());
        let _evicted = floor.unpark_vehicle(ticket.spot());
        elevator.release();

        Ok(elevator_index as u32 + 1)
    }

    /// Every occupied spot with the vehicle parked on it, in floor and spot
    /// order.
    pub fn occupied_spots(&self) -> Vec<OccupiedSpot> {
        let mut rows = Vec::new();
        for (floor_index, floor) in self.floors.iter().enumerate() {
            for (spot_index, spot) in floor.spots().iter().enumerate() {
                if let Some(vehicle) = spot.occupant() {
                    rows.push(OccupiedSpot {
                        floor: floor_index as u32 + 1,
                        spot: spot_index as u32 + 1,
                        vehicle: vehicle.to_string(),
                    });
                }
            }
        }
        rows
    }

    /// Occupied and free spot counts per floor.
    pub fn occupancy_report(&self) -> Vec<FloorOccupancy> {
        self.floors
            .iter()
            .enumerate()
            .map(|(floor_index, floor)| FloorOccupancy {
                floor: floor_index as u32 + 1,
                occupied: floor.occupied_count(),
                free: floor.spot_count() - floor.occupied_count(),
            })
            .collect()
    }

    /// The full ticket history, including redeemed tickets.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }
}
