use derive_builder::Builder;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Everything observable that happens in the garage is published as an event.
/// Rust has no reflection, so events carry their `TypeId` through `as_any`;
/// this way subscribers for a concrete event type are checked at compile
/// time.
pub trait GarageEvent: Debug + Any {
    // This can't be a const, because traits with const fields are not dyn compatible.
    fn kind(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn time(&self) -> u32;
}

type OnEventFn = dyn Fn(&dyn GarageEvent) + 'static;

pub type OnEventFnBuilder = dyn FnOnce(&mut EventsManager);

/// Holds the callbacks for event processing. Subscribers register either for
/// one concrete event type or for everything; publishers hand in a trait
/// object and the manager dispatches by `TypeId`.
#[derive(Default)]
pub struct EventsManager {
    per_type: HashMap<TypeId, Vec<Rc<OnEventFn>>>,
    catch_all: Vec<Box<OnEventFn>>,
    finish: Vec<Box<dyn Fn() + 'static>>,
}

impl Debug for EventsManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EventsManager {{ per_type: {:?}, catch_all: {:?}, finish: {:?} }}",
            self.per_type.len(),
            self.catch_all.len(),
            self.finish.len()
        )
    }
}

impl EventsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish_event(&mut self, event: &dyn GarageEvent) {
        let tid = event.as_any().type_id();
        if let Some(list) = self.per_type.get(&tid).cloned() {
            for handler in list {
                handler(event);
            }
        }
        for handler in &self.catch_all {
            handler(event);
        }
    }

    /// Runs the registered finish hooks. Called once at the end of a run.
    pub fn finish(&mut self) {
        for f in self.finish.iter_mut() {
            f()
        }
    }

    /// Registers a callback for one concrete event type.
    pub fn on<E, F>(&mut self, f: F)
    where
        E: GarageEvent,
        F: Fn(&E) + 'static,
    {
        let type_id = TypeId::of::<E>();
        let entry = self.per_type.entry(type_id).or_default();
        entry.push(Rc::new(move |ev: &dyn GarageEvent| {
            if let Some(e) = ev.as_any().downcast_ref::<E>() {
                f(e);
            }
        }));
    }

    /// Registers a callback for all event types.
    pub fn on_any<F>(&mut self, f: F)
    where
        F: Fn(&dyn GarageEvent) + 'static,
    {
        self.catch_all.push(Box::new(f));
    }

    pub fn on_finish<F>(&mut self, f: F)
    where
        F: Fn() + 'static,
    {
        self.finish.push(Box::new(f));
    }
}

#[derive(Builder, Debug)]
pub struct VehicleParkedEvent {
    pub time: u32,
    pub vehicle: String,
    pub floor: u32,
    pub spot: u32,
    pub elevator: u32,
}

impl VehicleParkedEvent {
    pub const TYPE: &'static str = "parked";
}

impl GarageEvent for VehicleParkedEvent {
    fn kind(&self) -> &'static str {
        Self::TYPE
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn time(&self) -> u32 {
        self.time
    }
}

#[derive(Builder, Debug)]
pub struct VehicleUnparkedEvent {
    pub time: u32,
    pub vehicle: String,
    pub floor: u32,
    pub spot: u32,
    pub elevator: u32,
}

impl VehicleUnparkedEvent {
    pub const TYPE: &'static str = "unparked";
}

impl GarageEvent for VehicleUnparkedEvent {
    fn kind(&self) -> &'static str {
        Self::TYPE
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn time(&self) -> u32 {
        self.time
    }
}

#[derive(Builder, Debug)]
pub struct ParkRejectedEvent {
    pub time: u32,
    pub vehicle: String,
    pub reason: String,
}

impl ParkRejectedEvent {
    pub const TYPE: &'static str = "park_rejected";
}

impl GarageEvent for ParkRejectedEvent {
    fn kind(&self) -> &'static str {
        Self::TYPE
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn time(&self) -> u32 {
        self.time
    }
}

#[derive(Builder, Debug)]
pub struct UnparkRejectedEvent {
    pub time: u32,
    pub vehicle: String,
    pub reason: String,
}

impl UnparkRejectedEvent {
    pub const TYPE: &'static str = "unpark_rejected";
}

impl GarageEvent for UnparkRejectedEvent {
    fn kind(&self) -> &'static str {
        Self::TYPE
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn time(&self) -> u32 {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::{
        EventsManager, GarageEvent, ParkRejectedEventBuilder, VehicleParkedEvent,
        VehicleParkedEventBuilder,
    };
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn parked_event(time: u32) -> VehicleParkedEvent {
        VehicleParkedEventBuilder::default()
            .time(time)
            .vehicle("ABC123".to_string())
            .floor(1)
            .spot(1)
            .elevator(1)
            .build()
            .unwrap()
    }

    #[test]
    fn typed_subscriber_only_sees_its_type() {
        let mut events = EventsManager::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        events.on(move |e: &VehicleParkedEvent| {
            seen_clone.borrow_mut().push(e.vehicle.clone());
        });

        events.publish_event(&parked_event(0));
        events.publish_event(
            &ParkRejectedEventBuilder::default()
                .time(1)
                .vehicle("DEF456".to_string())
                .reason("full".to_string())
                .build()
                .unwrap(),
        );

        assert_eq!(*seen.borrow(), vec!["ABC123".to_string()]);
    }

    #[test]
    fn catch_all_sees_everything() {
        let mut events = EventsManager::new();
        let kinds = Rc::new(RefCell::new(Vec::new()));

        let kinds_clone = kinds.clone();
        events.on_any(move |e: &dyn GarageEvent| {
            kinds_clone.borrow_mut().push(e.kind());
        });

        events.publish_event(&parked_event(0));
        events.publish_event(
            &ParkRejectedEventBuilder::default()
                .time(1)
                .vehicle("DEF456".to_string())
                .reason("full".to_string())
                .build()
                .unwrap(),
        );

        assert_eq!(*kinds.borrow(), vec!["parked", "park_rejected"]);
    }

    #[test]
    fn finish_hooks_run_once_on_finish() {
        let mut events = EventsManager::new();
        let called = Rc::new(Cell::new(0));

        let called_clone = called.clone();
        events.on_finish(move || called_clone.set(called_clone.get() + 1));

        events.publish_event(&parked_event(0));
        assert_eq!(called.get(), 0);

        events.finish();
        assert_eq!(called.get(), 1);
    }
}
