//! Configuration models and loaders for the Kerbal Orbit Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Celestial body record parsed from catalog files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub radius_m: f64,
    pub mu_m3_s2: f64,
    pub surface_gravity_m_s2: f64,
    pub rotation_period_s: f64,
    #[serde(default)]
    pub orbit: Option<BodyOrbitConfig>,
}

/// A body's own orbit around its parent, distances from the parent's center.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyOrbitConfig {
    pub parent: String,
    pub sidereal_period_s: f64,
    pub apoapsis_m: f64,
    pub periapsis_m: f64,
    /// Defaults to the mean of the apsides.
    #[serde(default)]
    pub semi_major_axis_m: Option<f64>,
    #[serde(default)]
    pub inclination_deg: f64,
    #[serde(default)]
    pub argument_of_periapsis_deg: f64,
    #[serde(default)]
    pub longitude_of_ascending_node_deg: f64,
}

/// Vessel record parsed from catalog files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VesselConfig {
    pub name: String,
    /// Initial fuel load in units; a missing value means full tanks.
    #[serde(default)]
    pub fuel_units: Option<f64>,
    pub layout: VesselLayoutConfig,
}

/// How the vessel's mass and engines are described.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum VesselLayoutConfig {
    #[serde(rename = "single")]
    Single {
        isp_seconds: f64,
        dry_mass_kg: f64,
        fuel_capacity_units: f64,
    },
    #[serde(rename = "stage")]
    Stage {
        engines: Vec<EngineConfig>,
        #[serde(default)]
        tanks: Vec<TankConfig>,
        #[serde(default)]
        payload_mass_kg: f64,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EngineConfig {
    pub name: String,
    pub mass_kg: f64,
    pub thrust_newtons: f64,
    pub isp_seconds: f64,
    #[serde(default = "one")]
    pub count: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TankConfig {
    pub name: String,
    pub dry_mass_kg: f64,
    pub fuel_capacity_units: f64,
    #[serde(default = "one")]
    pub count: u32,
}

fn one() -> u32 {
    1
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load body records from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

/// Parse body records from YAML text.
pub fn parse_bodies(yaml: &str) -> Result<Vec<BodyConfig>, ConfigError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load vessel records from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_vessel_configs<P: AsRef<Path>>(path: P) -> Result<Vec<VesselConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
