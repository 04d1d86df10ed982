//! Impulsive maneuver planning: Hohmann transfers and resonant deployment orbits.

pub mod resonance;
pub mod transfers;

pub use resonance::{ResonantPlan, launch_window_spacing, plan_resonant_deployment, resonant_period};
pub use transfers::{HohmannPlan, Maneuver, TransferDirection, burn_delta_v, plan_hohmann};

use kerbal_orbits::OrbitError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error(transparent)]
    Orbit(#[from] OrbitError),
    #[error("a constellation needs at least one satellite")]
    NoSatellites,
}
