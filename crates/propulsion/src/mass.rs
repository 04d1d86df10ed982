//! Mass-bearing parts and the stages they compose into.

use std::fmt::Debug;

use tracing::debug;

use crate::{Vessel, VesselError, propellant_mass_for};

/// Anything that contributes mass to a stage.
pub trait HasMass: Debug {
    /// Mass with any tanks full (kg).
    fn mass_kg(&self) -> f64;

    /// Mass with tanks empty (kg).
    fn dry_mass_kg(&self) -> f64 {
        self.mass_kg()
    }

    /// Liquid fuel the part can hold (units).
    fn fuel_capacity_units(&self) -> f64 {
        0.0
    }
}

/// Dead weight: probes, crew parts, decouplers, upper stages.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub name: String,
    pub mass_kg: f64,
}

impl HasMass for Payload {
    fn mass_kg(&self) -> f64 {
        self.mass_kg
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuelTank {
    pub name: String,
    pub dry_mass_kg: f64,
    pub fuel_capacity_units: f64,
}

impl HasMass for FuelTank {
    fn mass_kg(&self) -> f64 {
        self.dry_mass_kg + propellant_mass_for(self.fuel_capacity_units)
    }

    fn dry_mass_kg(&self) -> f64 {
        self.dry_mass_kg
    }

    fn fuel_capacity_units(&self) -> f64 {
        self.fuel_capacity_units
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub name: String,
    pub mass_kg: f64,
    pub thrust_newtons: f64,
    pub isp_seconds: f64,
}

impl HasMass for Engine {
    fn mass_kg(&self) -> f64 {
        self.mass_kg
    }
}

/// Engines firing together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineCluster {
    pub engines: Vec<Engine>,
}

impl EngineCluster {
    pub fn new(engines: Vec<Engine>) -> Self {
        Self { engines }
    }

    pub fn thrust_newtons(&self) -> f64 {
        self.engines.iter().map(|e| e.thrust_newtons).sum()
    }

    /// Thrust-weighted specific impulse, `Σthrust / Σ(thrust/isp)`.
    ///
    /// `None` for a cluster without thrust.
    pub fn isp_seconds(&self) -> Option<f64> {
        let flow: f64 = self
            .engines
            .iter()
            .map(|e| e.thrust_newtons / e.isp_seconds)
            .sum();
        let thrust = self.thrust_newtons();
        (thrust > 0.0 && flow > 0.0).then(|| thrust / flow)
    }
}

impl HasMass for EngineCluster {
    fn mass_kg(&self) -> f64 {
        self.engines.iter().map(HasMass::mass_kg).sum()
    }
}

/// One stage of a vehicle: an engine cluster plus everything it has to push.
///
/// Placed inside another stage, a stage counts as payload: its full mass is dry
/// weight for the stage below and its tanks are not available to that stage.
#[derive(Debug, Default)]
pub struct Stage {
    pub name: String,
    pub engines: EngineCluster,
    pub parts: Vec<Box<dyn HasMass>>,
}

impl Stage {
    pub fn new(name: impl Into<String>, engines: EngineCluster) -> Self {
        Self {
            name: name.into(),
            engines,
            parts: Vec::new(),
        }
    }

    pub fn with_part(mut self, part: impl HasMass + 'static) -> Self {
        self.parts.push(Box::new(part));
        self
    }

    /// Mass with every tank on this stage empty (kg).
    pub fn empty_mass_kg(&self) -> f64 {
        self.engines.mass_kg() + self.parts.iter().map(|p| p.dry_mass_kg()).sum::<f64>()
    }

    pub fn tank_capacity_units(&self) -> f64 {
        self.parts.iter().map(|p| p.fuel_capacity_units()).sum()
    }

    /// Fold the stage into a fully fuelled [`Vessel`].
    pub fn to_vessel(&self) -> Result<Vessel, VesselError> {
        let isp = self
            .engines
            .isp_seconds()
            .ok_or_else(|| VesselError::MissingEngines(self.name.clone()))?;
        let mut vessel = Vessel::new(
            self.name.clone(),
            isp,
            self.empty_mass_kg(),
            self.tank_capacity_units(),
        )?;
        vessel.refuel();
        debug!(
            stage = %self.name,
            isp_seconds = isp,
            dry_mass_kg = vessel.dry_mass_kg(),
            total_mass_kg = vessel.total_mass_kg(),
            "stage folded into vessel"
        );
        Ok(vessel)
    }
}

impl HasMass for Stage {
    fn mass_kg(&self) -> f64 {
        self.engines.mass_kg() + self.parts.iter().map(|p| p.mass_kg()).sum::<f64>()
    }
}
