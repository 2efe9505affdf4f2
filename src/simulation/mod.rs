pub mod config;
pub mod controller;
pub mod events;
pub mod garage;
pub mod logging;
pub mod scenario;
