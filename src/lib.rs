//! Orbit and maneuver calculator for the Kerbol system.
//!
//! The workspace crates carry the physics; this crate ties them to the body and
//! vessel catalogs so front-ends (the `kplan` CLI, scripts, tests) can look
//! things up by name and share one read-only body registry.

pub mod catalog;
pub mod fleet;

pub use kerbal_config as config;
pub use kerbal_core::{Interval, IntervalComponents, constants, units};
pub use kerbal_impulsive as impulsive;
pub use kerbal_orbits as orbits;
pub use kerbal_propulsion as propulsion;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
