//! Vessel catalog: turns configuration records into runtime [`Vessel`]s.

use std::path::Path;

use kerbal_config::{ConfigError, VesselConfig, VesselLayoutConfig, load_vessel_configs};
use kerbal_propulsion::{Engine, EngineCluster, FuelTank, Payload, Stage, Vessel, VesselError};
use thiserror::Error;

/// Errors surfaced when selecting or converting vessels.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("vessel '{0}' not found in catalog")]
    NotFound(String),
    #[error("vessel catalog is empty")]
    EmptyCatalog,
    #[error("vessel '{0}' uses a layout that is not supported")]
    UnsupportedLayout(String),
    #[error(transparent)]
    Vessel(#[from] VesselError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convert a `VesselConfig` into a loaded [`Vessel`].
pub fn from_config(config: &VesselConfig) -> Result<Vessel, FleetError> {
    let mut vessel = match &config.layout {
        VesselLayoutConfig::Single {
            isp_seconds,
            dry_mass_kg,
            fuel_capacity_units,
        } => Vessel::new(
            config.name.clone(),
            *isp_seconds,
            *dry_mass_kg,
            *fuel_capacity_units,
        )?,
        VesselLayoutConfig::Stage {
            engines,
            tanks,
            payload_mass_kg,
        } => {
            let cluster = EngineCluster::new(
                engines
                    .iter()
                    .flat_map(|e| {
                        (0..e.count).map(move |_| Engine {
                            name: e.name.clone(),
                            mass_kg: e.mass_kg,
                            thrust_newtons: e.thrust_newtons,
                            isp_seconds: e.isp_seconds,
                        })
                    })
                    .collect(),
            );
            let mut stage = Stage::new(config.name.clone(), cluster);
            for tank in tanks {
                for _ in 0..tank.count {
                    stage = stage.with_part(FuelTank {
                        name: tank.name.clone(),
                        dry_mass_kg: tank.dry_mass_kg,
                        fuel_capacity_units: tank.fuel_capacity_units,
                    });
                }
            }
            if *payload_mass_kg > 0.0 {
                stage = stage.with_part(Payload {
                    name: "payload".to_string(),
                    mass_kg: *payload_mass_kg,
                });
            }
            stage.to_vessel()?
        }
        VesselLayoutConfig::Unsupported => {
            return Err(FleetError::UnsupportedLayout(config.name.clone()));
        }
    };

    match config.fuel_units {
        Some(units) => vessel.set_fuel(units)?,
        None => vessel.refuel(),
    }
    Ok(vessel)
}

/// Load and convert every vessel in a catalog file or directory.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Vessel>, FleetError> {
    load_vessel_configs(path)?
        .iter()
        .map(from_config)
        .collect()
}

/// Select a vessel by optional case-insensitive name, defaulting to the first entry.
pub fn select(configs: &[VesselConfig], requested: Option<&str>) -> Result<Vessel, FleetError> {
    let Some(first) = configs.first() else {
        return Err(FleetError::EmptyCatalog);
    };

    let chosen = if let Some(name) = requested {
        let upper = name.to_uppercase();
        configs
            .iter()
            .find(|cfg| cfg.name.to_uppercase() == upper)
            .ok_or_else(|| FleetError::NotFound(name.to_string()))?
    } else {
        first
    };

    from_config(chosen)
}
