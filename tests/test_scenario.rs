use rust_psim::simulation::config::Config;
use rust_psim::simulation::controller::LocalControllerBuilder;
use rust_psim::simulation::events::{EventsManager, GarageEvent, OnEventFnBuilder};
use rust_psim::simulation::logging::init_std_out_logging_thread_local;
use rust_psim::simulation::scenario::Scenario;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn demo_run_with_default_garage() {
    let _guard = init_std_out_logging_thread_local();

    let scenario = Scenario::build(Config::default());
    let controller = LocalControllerBuilder::default()
        .scenario(scenario)
        .build()
        .unwrap();
    let garage = controller.run();

    // ABC123 was unparked again, only DEF456 is left on floor 1, spot 2
    let occupied = garage.occupied_spots();
    assert_eq!(occupied.len(), 1);
    assert_eq!((occupied[0].floor, occupied[0].spot), (1, 2));
    assert_eq!(occupied[0].vehicle, "DEF456");

    // both issued tickets stay in the audit log
    assert_eq!(garage.tickets().len(), 2);

    let report = garage.occupancy_report();
    assert_eq!(report.len(), 3);
    assert_eq!((report[0].occupied, report[0].free), (1, 14));
    assert_eq!((report[1].occupied, report[1].free), (0, 15));
    assert_eq!((report[2].occupied, report[2].free), (0, 15));

    // elevators 1 and 2 are still bound to the park trips, the rest are free
    let occupied_elevators: Vec<bool> = garage.elevators().iter().map(|e| e.is_occupied()).collect();
    assert_eq!(occupied_elevators, vec![true, true, false, false, false]);
}

#[test]
fn demo_run_publishes_one_event_per_request() {
    let _guard = init_std_out_logging_thread_local();

    let kinds = Rc::new(RefCell::new(Vec::new()));
    let kinds_clone = kinds.clone();
    let subscriber: Box<OnEventFnBuilder> = Box::new(move |events: &mut EventsManager| {
        events.on_any(move |e: &dyn GarageEvent| kinds_clone.borrow_mut().push(e.kind()));
    });

    let scenario = Scenario::build(Config::default());
    let controller = LocalControllerBuilder::default()
        .scenario(scenario)
        .events_subscribers(vec![subscriber])
        .build()
        .unwrap();
    controller.run();

    // two parks succeed, the first unpark succeeds, the stale ticket is rejected
    assert_eq!(
        *kinds.borrow(),
        vec!["parked", "parked", "unparked", "unpark_rejected"]
    );
}

#[test]
fn demo_run_with_a_tiny_garage_reports_rejections() {
    let _guard = init_std_out_logging_thread_local();

    let mut config = Config::default();
    config.garage.floors = 1;
    config.garage.spots_per_floor = 1;
    config.garage.elevators = 1;

    let kinds = Rc::new(RefCell::new(Vec::new()));
    let kinds_clone = kinds.clone();
    let subscriber: Box<OnEventFnBuilder> = Box::new(move |events: &mut EventsManager| {
        events.on_any(move |e: &dyn GarageEvent| kinds_clone.borrow_mut().push(e.kind()));
    });

    let scenario = Scenario::build(config);
    let controller = LocalControllerBuilder::default()
        .scenario(scenario)
        .events_subscribers(vec![subscriber])
        .build()
        .unwrap();
    let garage = controller.run();

    // second park finds no spot; both unparks find no free elevator because
    // the single elevator is still bound to the first park trip
    assert_eq!(
        *kinds.borrow(),
        vec!["parked", "park_rejected", "unpark_rejected", "unpark_rejected"]
    );
    assert_eq!(garage.occupied_spots().len(), 1);
}
