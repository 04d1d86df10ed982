//! Vessel propellant bookkeeping and rocket-equation delta-v.

pub mod mass;

pub use mass::{Engine, EngineCluster, FuelTank, HasMass, Payload, Stage};

use kerbal_core::constants::{G0, OXIDIZER_PER_FUEL, PROPELLANT_DENSITY_KG_PER_UNIT};
use thiserror::Error;

/// Rejected vessel states.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VesselError {
    #[error("dry mass must be positive, got {dry_mass_kg} kg")]
    NonPositiveDryMass { dry_mass_kg: f64 },
    #[error("specific impulse must be positive, got {isp_seconds} s")]
    NonPositiveIsp { isp_seconds: f64 },
    #[error("fuel capacity must be non-negative, got {units} units")]
    InvalidCapacity { units: f64 },
    #[error("fuel load must be non-negative, got {units} units")]
    NegativeFuel { units: f64 },
    #[error("fuel load of {units} units exceeds tank capacity of {capacity} units")]
    ExceedsCapacity { units: f64, capacity: f64 },
    #[error("vessel carries no propellant; total mass equals dry mass")]
    NoPropellant,
    #[error("stage '{0}' has no engines")]
    MissingEngines(String),
}

/// Oxidizer units matched to `fuel_units` of liquid fuel.
pub fn oxidizer_for(fuel_units: f64) -> f64 {
    fuel_units * OXIDIZER_PER_FUEL
}

/// Mass (kg) of `fuel_units` of liquid fuel plus its matching oxidizer.
pub fn propellant_mass_for(fuel_units: f64) -> f64 {
    PROPELLANT_DENSITY_KG_PER_UNIT * (fuel_units + oxidizer_for(fuel_units))
}

/// Single-stage vessel with liquid fuel and oxidizer tanks.
///
/// Oxidizer is never stored on its own; it always follows the fuel load.
#[derive(Debug, Clone, PartialEq)]
pub struct Vessel {
    name: String,
    isp_seconds: f64,
    dry_mass_kg: f64,
    fuel_capacity_units: f64,
    fuel_units: f64,
}

/// Propellant needed for a burn, and what is left afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnBudget {
    pub delta_v_m_s: f64,
    pub fuel_units_required: f64,
    pub propellant_mass_kg: f64,
    /// Negative when the burn is out of reach.
    pub remaining_delta_v_m_s: f64,
}

impl BurnBudget {
    pub fn is_feasible(&self) -> bool {
        self.remaining_delta_v_m_s >= 0.0
    }
}

impl Vessel {
    /// Create an empty vessel. Call [`Vessel::refuel`] or [`Vessel::set_fuel`] to load it.
    pub fn new(
        name: impl Into<String>,
        isp_seconds: f64,
        dry_mass_kg: f64,
        fuel_capacity_units: f64,
    ) -> Result<Self, VesselError> {
        if !(dry_mass_kg.is_finite() && dry_mass_kg > 0.0) {
            return Err(VesselError::NonPositiveDryMass { dry_mass_kg });
        }
        if !(isp_seconds.is_finite() && isp_seconds > 0.0) {
            return Err(VesselError::NonPositiveIsp { isp_seconds });
        }
        if !(fuel_capacity_units.is_finite() && fuel_capacity_units >= 0.0) {
            return Err(VesselError::InvalidCapacity {
                units: fuel_capacity_units,
            });
        }
        Ok(Self {
            name: name.into(),
            isp_seconds,
            dry_mass_kg,
            fuel_capacity_units,
            fuel_units: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn isp_seconds(&self) -> f64 {
        self.isp_seconds
    }

    pub fn dry_mass_kg(&self) -> f64 {
        self.dry_mass_kg
    }

    pub fn fuel_capacity_units(&self) -> f64 {
        self.fuel_capacity_units
    }

    pub fn oxidizer_capacity_units(&self) -> f64 {
        oxidizer_for(self.fuel_capacity_units)
    }

    /// Fill the tanks to capacity.
    pub fn refuel(&mut self) {
        self.fuel_units = self.fuel_capacity_units;
    }

    /// Current `(fuel, oxidizer)` load in units.
    pub fn fuel(&self) -> (f64, f64) {
        (self.fuel_units, oxidizer_for(self.fuel_units))
    }

    /// Set the fuel load; oxidizer follows at the fixed ratio.
    pub fn set_fuel(&mut self, units: f64) -> Result<(), VesselError> {
        if !(units.is_finite() && units >= 0.0) {
            return Err(VesselError::NegativeFuel { units });
        }
        if units > self.fuel_capacity_units {
            return Err(VesselError::ExceedsCapacity {
                units,
                capacity: self.fuel_capacity_units,
            });
        }
        self.fuel_units = units;
        Ok(())
    }

    pub fn propellant_mass_kg(&self) -> f64 {
        propellant_mass_for(self.fuel_units)
    }

    pub fn total_mass_kg(&self) -> f64 {
        self.dry_mass_kg + self.propellant_mass_kg()
    }

    /// Tsiolkovsky delta-v (m/s) for the current load.
    pub fn delta_v(&self) -> Result<f64, VesselError> {
        let total = self.total_mass_kg();
        if total <= self.dry_mass_kg {
            return Err(VesselError::NoPropellant);
        }
        Ok(self.exhaust_velocity() * (total / self.dry_mass_kg).ln())
    }

    /// Propellant consumed by a burn of `delta_v_m_s` from the current load.
    ///
    /// The vessel itself is left untouched.
    pub fn budget(&self, delta_v_m_s: f64) -> Result<BurnBudget, VesselError> {
        let available = self.delta_v()?;
        let dv = delta_v_m_s.abs();
        let initial = self.total_mass_kg();
        let final_mass = initial / (dv / self.exhaust_velocity()).exp();
        let propellant_mass_kg = initial - final_mass;
        Ok(BurnBudget {
            delta_v_m_s: dv,
            fuel_units_required: propellant_mass_kg / propellant_mass_for(1.0),
            propellant_mass_kg,
            remaining_delta_v_m_s: available - dv,
        })
    }

    fn exhaust_velocity(&self) -> f64 {
        self.isp_seconds * G0
    }
}
