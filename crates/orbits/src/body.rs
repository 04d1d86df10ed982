//! Celestial body descriptors.

use std::sync::Arc;

use kerbal_core::Interval;

use crate::kepler;
use crate::orbit::{Orbit, OrbitError};

/// The path a body follows around its parent, measured from the parent's center.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentOrbit {
    /// Name of the body being orbited.
    pub parent: String,
    pub sidereal_period_s: f64,
    pub apoapsis_m: f64,
    pub periapsis_m: f64,
    pub semi_major_axis_m: f64,
    pub inclination_deg: f64,
    pub argument_of_periapsis_deg: f64,
    pub longitude_of_ascending_node_deg: f64,
}

/// Static physical description of a planet, moon, or star.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    name: String,
    radius_m: f64,
    mu_m3_s2: f64,
    surface_gravity_m_s2: f64,
    rotation_period_s: f64,
    orbit: Option<ParentOrbit>,
}

impl CelestialBody {
    /// Describe a body. Radius and gravitational parameter must be positive.
    pub fn new(
        name: impl Into<String>,
        radius_m: f64,
        mu_m3_s2: f64,
        surface_gravity_m_s2: f64,
        rotation_period_s: f64,
    ) -> Result<Self, OrbitError> {
        let name = name.into();
        if !(radius_m.is_finite() && radius_m > 0.0) {
            return Err(OrbitError::InvalidBodyReference(format!(
                "{name}: equatorial radius must be positive, got {radius_m}"
            )));
        }
        if !(mu_m3_s2.is_finite() && mu_m3_s2 > 0.0) {
            return Err(OrbitError::InvalidBodyReference(format!(
                "{name}: gravitational parameter must be positive, got {mu_m3_s2}"
            )));
        }
        Ok(Self {
            name,
            radius_m,
            mu_m3_s2,
            surface_gravity_m_s2,
            rotation_period_s,
            orbit: None,
        })
    }

    /// Attach the body's own orbit around its parent.
    pub fn with_parent_orbit(mut self, orbit: ParentOrbit) -> Self {
        self.orbit = Some(orbit);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Equatorial radius (m).
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Standard gravitational parameter (m³/s²).
    pub fn mu_m3_s2(&self) -> f64 {
        self.mu_m3_s2
    }

    pub fn surface_gravity_m_s2(&self) -> f64 {
        self.surface_gravity_m_s2
    }

    /// Sidereal rotation period.
    pub fn rotation_period(&self) -> Interval {
        Interval::from_seconds(self.rotation_period_s)
    }

    pub fn parent_orbit(&self) -> Option<&ParentOrbit> {
        self.orbit.as_ref()
    }

    /// Escape velocity (m/s).
    ///
    /// The radius resolves to `radius_from_center_m` if given, otherwise to the
    /// equatorial radius plus `altitude_m`, otherwise to the surface.
    pub fn escape_velocity(&self, altitude_m: Option<f64>, radius_from_center_m: Option<f64>) -> f64 {
        let r = match (radius_from_center_m, altitude_m) {
            (Some(r), _) => r,
            (None, Some(alt)) => self.radius_m + alt,
            (None, None) => self.radius_m,
        };
        kepler::escape_speed(self.mu_m3_s2, r)
    }

    /// Speed of a circular orbit at `altitude_m` above the surface.
    pub fn circular_velocity(&self, altitude_m: f64) -> f64 {
        kepler::circular_speed(self.mu_m3_s2, self.radius_m + altitude_m)
    }

    /// Period of a circular orbit at `altitude_m` above the surface.
    pub fn circular_period(&self, altitude_m: f64) -> Interval {
        kepler::period_from_semi_major_axis(self.mu_m3_s2, self.radius_m + altitude_m)
    }

    /// Semi-major axis (from center) of any orbit around this body with the given period.
    pub fn semi_major_axis_for_period(&self, period: Interval) -> f64 {
        kepler::semi_major_axis_from_period(self.mu_m3_s2, period)
    }

    /// The orbit this body follows around `parent`, with apsides from the parent's center.
    pub fn orbit_around(&self, parent: &Arc<CelestialBody>) -> Result<Orbit, OrbitError> {
        let Some(elements) = &self.orbit else {
            return Err(OrbitError::InvalidBodyReference(format!(
                "{} has no orbital elements",
                self.name
            )));
        };
        if !elements.parent.eq_ignore_ascii_case(parent.name()) {
            return Err(OrbitError::InvalidBodyReference(format!(
                "{} orbits {}, not {}",
                self.name,
                elements.parent,
                parent.name()
            )));
        }
        Orbit::from_center(Arc::clone(parent), elements.apoapsis_m, elements.periapsis_m)
    }
}
