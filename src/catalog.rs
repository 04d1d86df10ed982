//! Celestial body registry.
//!
//! Bodies are built once from catalog records and shared through `Arc`; nothing
//! in a registry can be changed after it is constructed. The stock Kerbol system
//! ships embedded in the binary and is available through [`builtin`].

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use kerbal_config::{BodyConfig, ConfigError, load_bodies, parse_bodies};
use kerbal_orbits::{CelestialBody, Orbit, OrbitError, ParentOrbit};
use thiserror::Error;
use tracing::info;

const BUILTIN_BODIES: &str = include_str!("../configs/bodies.yaml");

static BUILTIN: OnceLock<Result<BodyRegistry, String>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("body '{0}' not found in catalog")]
    UnknownBody(String),
    #[error("duplicate body '{0}' in catalog")]
    DuplicateBody(String),
    #[error("invalid body record '{name}': {source}")]
    InvalidRecord {
        name: String,
        #[source]
        source: OrbitError,
    },
    #[error(transparent)]
    Orbit(#[from] OrbitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("built-in body catalog is unusable: {0}")]
    Builtin(String),
}

/// Read-only, name-addressable set of celestial bodies.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: BTreeMap<String, Arc<CelestialBody>>,
}

impl BodyRegistry {
    pub fn from_configs(configs: &[BodyConfig]) -> Result<Self, CatalogError> {
        let mut bodies = BTreeMap::new();
        for config in configs {
            let body = body_from_config(config)?;
            let key = config.name.to_uppercase();
            if bodies.insert(key, Arc::new(body)).is_some() {
                return Err(CatalogError::DuplicateBody(config.name.clone()));
            }
        }
        Ok(Self { bodies })
    }

    /// Load a registry from a YAML file, a TOML file, or a directory of TOML files.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Self::from_configs(&load_bodies(path)?)
    }

    /// Look up a body by case-insensitive name.
    pub fn get(&self, name: &str) -> Result<Arc<CelestialBody>, CatalogError> {
        self.bodies
            .get(&name.to_uppercase())
            .cloned()
            .ok_or_else(|| CatalogError::UnknownBody(name.to_string()))
    }

    /// The orbit `name` follows around its own parent.
    pub fn orbit_of(&self, name: &str) -> Result<Orbit, CatalogError> {
        let body = self.get(name)?;
        let Some(elements) = body.parent_orbit() else {
            return Err(OrbitError::InvalidBodyReference(format!(
                "{} does not orbit another body",
                body.name()
            ))
            .into());
        };
        let parent = self.get(&elements.parent)?;
        Ok(body.orbit_around(&parent)?)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.values().map(|body| body.name())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// The stock Kerbol system, parsed on first use.
pub fn builtin() -> Result<&'static BodyRegistry, CatalogError> {
    BUILTIN
        .get_or_init(|| {
            let registry = parse_bodies(BUILTIN_BODIES)
                .map_err(CatalogError::from)
                .and_then(|configs| BodyRegistry::from_configs(&configs))
                .map_err(|err| err.to_string())?;
            info!(bodies = registry.len(), "built-in body catalog loaded");
            Ok(registry)
        })
        .as_ref()
        .map_err(|msg| CatalogError::Builtin(msg.clone()))
}

/// Shortcut for `builtin()?.get(name)`.
pub fn body(name: &str) -> Result<Arc<CelestialBody>, CatalogError> {
    builtin()?.get(name)
}

fn body_from_config(config: &BodyConfig) -> Result<CelestialBody, CatalogError> {
    let invalid = |source| CatalogError::InvalidRecord {
        name: config.name.clone(),
        source,
    };
    let body = CelestialBody::new(
        config.name.clone(),
        config.radius_m,
        config.mu_m3_s2,
        config.surface_gravity_m_s2,
        config.rotation_period_s,
    )
    .map_err(invalid)?;

    let Some(orbit) = &config.orbit else {
        return Ok(body);
    };
    for radius_m in [orbit.apoapsis_m, orbit.periapsis_m] {
        if !(radius_m.is_finite() && radius_m > 0.0) {
            return Err(invalid(OrbitError::DegenerateOrbit { radius_m }));
        }
    }
    Ok(body.with_parent_orbit(ParentOrbit {
        parent: orbit.parent.clone(),
        sidereal_period_s: orbit.sidereal_period_s,
        apoapsis_m: orbit.apoapsis_m,
        periapsis_m: orbit.periapsis_m,
        semi_major_axis_m: orbit
            .semi_major_axis_m
            .unwrap_or(0.5 * (orbit.apoapsis_m + orbit.periapsis_m)),
        inclination_deg: orbit.inclination_deg,
        argument_of_periapsis_deg: orbit.argument_of_periapsis_deg,
        longitude_of_ascending_node_deg: orbit.longitude_of_ascending_node_deg,
    }))
}
