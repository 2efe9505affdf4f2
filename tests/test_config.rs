use rust_psim::simulation::config::{CommandLineArgs, Config, Logging};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn parse_empty_config_falls_back_to_defaults() {
    let config: Config = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config.garage.floors, 3);
    assert_eq!(config.garage.spots_per_floor, 15);
    assert_eq!(config.garage.elevators, 5);
    assert_eq!(config.output.output_dir, PathBuf::from("./"));
    assert_eq!(config.output.logging, Logging::None);
}

#[test]
fn parse_all_sections() {
    let yaml = fs::read_to_string("tests/resources/config/example.yml").unwrap();
    let config: Config = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(config.garage.floors, 2);
    assert_eq!(config.garage.spots_per_floor, 4);
    assert_eq!(config.garage.elevators, 1);
    assert_eq!(config.output.output_dir, PathBuf::from("./test_output"));
    assert_eq!(config.output.logging, Logging::Info);
}

#[test]
fn roundtrip_serialize_deserialize() {
    let yaml = fs::read_to_string("tests/resources/config/example.yml").unwrap();
    let config: Config = serde_yaml::from_str(&yaml).unwrap();
    let serialized = serde_yaml::to_string(&config).unwrap();
    let roundtripped: Config = serde_yaml::from_str(&serialized).unwrap();
    assert_eq!(config, roundtripped);
}

#[test]
fn file_config_with_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yml");
    let mut file = fs::File::create(&path).unwrap();
    write!(file, "garage:\n  floors: 2\n  spots_per_floor: 4\n").unwrap();

    let args = CommandLineArgs {
        config: Some(path),
        overrides: vec![("garage.spots_per_floor".to_string(), "9".to_string())],
    };
    let config = Config::from(args);

    assert_eq!(config.garage.floors, 2);
    assert_eq!(config.garage.spots_per_floor, 9);
    // untouched section keeps its default
    assert_eq!(config.garage.elevators, 5);
}
