//! Two-body orbit model: celestial bodies, elliptical orbits around them, and the
//! closed-form Kepler relations both are built on.

pub mod body;
pub mod kepler;
pub mod orbit;

pub use body::{CelestialBody, ParentOrbit};
pub use orbit::{ApsisOrder, ApsisReference, Orbit, OrbitError};
