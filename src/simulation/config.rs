use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    /// Path to a yaml config file. Without it the built-in defaults are used.
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    #[arg(long = "set", value_parser = parse_key_val)]
    pub overrides: Vec<(String, String)>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s.find('=');
    match pos {
        Some(pos) => Ok((s[..pos].to_string(), s[pos + 1..].to_string())),
        None => Err(format!("invalid KEY=VALUE: no `=` found in `{}`", s)),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub garage: GarageConfig,
    #[serde(default)]
    pub output: Output,
}

impl From<CommandLineArgs> for Config {
    fn from(args: CommandLineArgs) -> Self {
        let mut config = match &args.config {
            Some(path) => Config::from_file(path),
            None => Config::default(),
        };
        config.apply_overrides(&args.overrides);
        config
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Self {
        let file = File::open(path).unwrap_or_else(|e| {
            panic!(
                "Failed to open config file at {:?}. Original error was {}",
                path, e
            )
        });
        serde_yaml::from_reader(BufReader::new(file)).unwrap_or_else(|e| {
            panic!(
                "Failed to parse config at {:?}. Original error was: {}",
                path, e
            )
        })
    }

    /// Applies generic key-value overrides, e.g. garage.floors=4
    fn apply_overrides(&mut self, overrides: &[(String, String)]) {
        if overrides.is_empty() {
            return;
        }
        info!("Applying overrides: {:?}", overrides);

        for (key, value) in overrides {
            match key.as_str() {
                "garage.floors" => self.garage.floors = parse_number(key, value),
                "garage.spots_per_floor" => self.garage.spots_per_floor = parse_number(key, value),
                "garage.elevators" => self.garage.elevators = parse_number(key, value),
                "output.output_dir" => self.output.output_dir = PathBuf::from(value),
                "output.logging" => {
                    self.output.logging = match value.to_lowercase().as_str() {
                        "none" => Logging::None,
                        "info" => Logging::Info,
                        _ => panic!("Invalid logging value: {}", value),
                    }
                }
                _ => warn!("No override handler found for key: {}", key),
            }
        }
    }
}

fn parse_number(key: &str, value: &str) -> u32 {
    value
        .parse()
        .unwrap_or_else(|e| panic!("Invalid value {:?} for key {}: {}", value, key, e))
}

pub fn write_config(config: &Config, output_path: &Path) {
    let output_config = output_path.join("output_config.yml");
    let file = File::create(&output_config).expect("Failed to create output config file");
    let writer = BufWriter::new(file);
    serde_yaml::to_writer(writer, config).expect("Failed to write output config file");
}

/// Garage dimensions, fixed at startup.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GarageConfig {
    #[serde(default = "default_floors")]
    pub floors: u32,
    #[serde(default = "default_spots_per_floor")]
    pub spots_per_floor: u32,
    #[serde(default = "default_elevators")]
    pub elevators: u32,
}

fn default_floors() -> u32 {
    3
}

fn default_spots_per_floor() -> u32 {
    15
}

fn default_elevators() -> u32 {
    5
}

impl Default for GarageConfig {
    fn default() -> Self {
        GarageConfig {
            floors: default_floors(),
            spots_per_floor: default_spots_per_floor(),
            elevators: default_elevators(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Output {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub logging: Logging,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./")
}

impl Default for Output {
    fn default() -> Self {
        Output {
            output_dir: default_output_dir(),
            logging: Logging::default(),
        }
    }
}

/// Extra layer of log level enum, as the tracing subscriber has no off/none
/// option that can be parsed from config.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub enum Logging {
    #[default]
    None,
    Info,
}
