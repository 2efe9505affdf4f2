use crate::simulation::config::Config;
use crate::simulation::garage::Garage;
use tracing::info;

/// The scenario owns the garage under simulation together with the config
/// that produced it.
#[derive(Debug)]
pub struct Scenario {
    pub garage: Garage,
    pub config: Config,
}

impl Scenario {
    pub fn build(config: Config) -> Self {
        info!(
            "Building garage with {} floors, {} spots per floor, {} elevators",
            config.garage.floors, config.garage.spots_per_floor, config.garage.elevators
        );
        let garage = Garage::new(
            config.garage.floors,
            config.garage.spots_per_floor,
            config.garage.elevators,
        );
        Scenario { garage, config }
    }
}
