use clap::Parser;
use rust_psim::simulation::config::{CommandLineArgs, Config};
use rust_psim::simulation::controller::LocalControllerBuilder;
use rust_psim::simulation::logging::init_std_out_logging_thread_local;
use rust_psim::simulation::scenario::Scenario;
use tracing::info;

fn main() {
    let _guard = init_std_out_logging_thread_local();

    let args = CommandLineArgs::parse();
    info!("Started with args: {:?}", args);

    // Load and adapt config
    let config = Config::from(args);

    // Build the garage
    let scenario = Scenario::build(config);

    // Create and run the demo
    let controller = LocalControllerBuilder::default()
        .scenario(scenario)
        .build()
        .unwrap();

    controller.run();
}
