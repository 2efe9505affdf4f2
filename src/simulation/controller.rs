use derive_builder::Builder;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

use crate::simulation::config::{Logging, write_config};
use crate::simulation::events::{
    EventsManager, OnEventFnBuilder, ParkRejectedEvent, ParkRejectedEventBuilder,
    UnparkRejectedEvent, UnparkRejectedEventBuilder, VehicleParkedEvent,
    VehicleParkedEventBuilder, VehicleUnparkedEvent, VehicleUnparkedEventBuilder,
};
use crate::simulation::garage::Garage;
use crate::simulation::garage::ticket::Ticket;
use crate::simulation::logging;
use crate::simulation::scenario::Scenario;

/// Runs the fixed demo scenario against the scenario's garage: two park
/// requests, two unpark requests (one of them against a stale ticket), then
/// the occupancy reports.
#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct LocalController {
    scenario: Scenario,
    #[builder(default)]
    events_subscribers: Vec<Box<OnEventFnBuilder>>,
}

impl LocalController {
    /// Runs the demo and returns the garage in its final state.
    pub fn run(self) -> Garage {
        let config = &self.scenario.config;
        let _guards = logging::init_logging(config);

        if Logging::Info == config.output.logging {
            write_config(config, &config.output.output_dir);
        }

        let events = create_events(self.events_subscribers);
        let mut garage = self.scenario.garage;

        run_demo(&mut garage, &mut events.borrow_mut());

        events.borrow_mut().finish();
        garage
    }
}

fn create_events(subscribers: Vec<Box<OnEventFnBuilder>>) -> Rc<RefCell<EventsManager>> {
    let mut events = EventsManager::new();

    // default console reporting, one sentence per outcome
    events.on(|e: &VehicleParkedEvent| {
        info!(
            "Vehicle {} parked at floor {}, spot {}, using elevator {}",
            e.vehicle, e.floor, e.spot, e.elevator
        );
    });
    events.on(|e: &VehicleUnparkedEvent| {
        info!(
            "Vehicle {} unparked from floor {}, spot {}, using elevator {}",
            e.vehicle, e.floor, e.spot, e.elevator
        );
    });
    events.on(|e: &ParkRejectedEvent| {
        info!("Could not park vehicle {}: {}", e.vehicle, e.reason);
    });
    events.on(|e: &UnparkRejectedEvent| {
        info!("Could not unpark vehicle {}: {}", e.vehicle, e.reason);
    });

    for subscriber in subscribers {
        subscriber(&mut events);
    }

    Rc::new(RefCell::new(events))
}

fn run_demo(garage: &mut Garage, events: &mut EventsManager) {
    let mut now = 0;

    info!("Park test cases:");
    for vehicle in ["ABC123", "DEF456"] {
        attempt_park(garage, events, vehicle, now);
        now += 1;
    }

    info!("Unpark test cases:");
    // redeem the first issued ticket, then a stale ticket pointing at a spot
    // nobody ever parked in; the stale one must be rejected
    if let Some(ticket) = garage.tickets().first().cloned() {
        attempt_unpark(garage, events, &ticket, now);
        now += 1;
    }
    let stale = Ticket::new("DEF456", 2, 3);
    attempt_unpark(garage, events, &stale, now);

    dump_reports(garage);
}

fn attempt_park(garage: &mut Garage, events: &mut EventsManager, vehicle: &str, now: u32) {
    match garage.park_vehicle(vehicle) {
        Ok(assignment) => events.publish_event(
            &VehicleParkedEventBuilder::default()
                .time(now)
                .vehicle(vehicle.to_string())
                .floor(assignment.floor)
                .spot(assignment.spot)
                .elevator(assignment.elevator)
                .build()
                .unwrap(),
        ),
        Err(e) => events.publish_event(
            &ParkRejectedEventBuilder::default()
                .time(now)
                .vehicle(vehicle.to_string())
                .reason(e.to_string())
                .build()
                .unwrap(),
        ),
    }
}

fn attempt_unpark(garage: &mut Garage, events: &mut EventsManager, ticket: &Ticket, now: u32) {
    match garage.unpark_vehicle(ticket) {
        Ok(elevator) => events.publish_event(
            &VehicleUnparkedEventBuilder::default()
                .time(now)
                .vehicle(ticket.vehicle().to_string())
                .floor(ticket.floor())
                .spot(ticket.spot())
                .elevator(elevator)
                .build()
                .unwrap(),
        ),
        Err(e) => events.publish_event(
            &UnparkRejectedEventBuilder::default()
                .time(now)
                .vehicle(ticket.vehicle().to_string())
                .reason(e.to_string())
                .build()
                .unwrap(),
        ),
    }
}

fn dump_reports(garage: &Garage) {
    info!("Occupied spots:");
    for row in garage.occupied_spots() {
        info!("Floor {}, spot {}: vehicle {}", row.floor, row.spot, row.vehicle);
    }

    info!("Occupancy per floor:");
    for line in garage.occupancy_report() {
        info!(
            "Floor {}: occupied {}, free {}",
            line.floor, line.occupied, line.free
        );
    }
}
