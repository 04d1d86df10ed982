//! Elliptical orbits around a single celestial body.
//!
//! An [`Orbit`] stores its apoapsis and periapsis as distances from the center of
//! the body it circles and keeps `apoapsis >= periapsis > 0` after every write.
//! When a write leaves the two out of order they are swapped, and the mutator
//! reports [`ApsisOrder::Swapped`] so callers never lose track of which value
//! ended up where. Writes that would produce a non-positive radius are rejected
//! and leave the orbit untouched.

use std::sync::Arc;

use kerbal_core::Interval;
use thiserror::Error;
use tracing::debug;

use crate::body::CelestialBody;
use crate::kepler;

/// Errors raised by orbit construction, mutation, and comparison.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    #[error("invalid body reference: {0}")]
    InvalidBodyReference(String),
    #[error("degenerate orbit: apsis radius {radius_m} m is not positive")]
    DegenerateOrbit { radius_m: f64 },
    #[error("orbital period must be positive and finite, got {seconds} s")]
    InvalidPeriod { seconds: f64 },
    #[error("synodic period is undefined: both orbits have a period of {period_s} s")]
    UndefinedSynodicPeriod { period_s: f64 },
}

/// Where apsis values passed to a constructor are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApsisReference {
    /// Altitude above the equatorial surface.
    #[default]
    Surface,
    /// Distance from the body's center.
    Center,
}

/// Outcome of a write that touches the apsides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApsisOrder {
    /// The values landed where they were written.
    Preserved,
    /// The written values were out of order and have been exchanged.
    Swapped,
}

impl ApsisOrder {
    pub fn is_swapped(self) -> bool {
        matches!(self, ApsisOrder::Swapped)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    body: Arc<CelestialBody>,
    apoapsis_m: f64,
    periapsis_m: f64,
}

impl Orbit {
    /// Orbit with apsides given as altitudes above the surface of `body`.
    pub fn new(
        body: Arc<CelestialBody>,
        apoapsis_m: f64,
        periapsis_m: f64,
    ) -> Result<Self, OrbitError> {
        Self::with_reference(body, apoapsis_m, periapsis_m, ApsisReference::Surface)
    }

    /// Orbit with apsides given as distances from the center of `body`.
    pub fn from_center(
        body: Arc<CelestialBody>,
        apoapsis_m: f64,
        periapsis_m: f64,
    ) -> Result<Self, OrbitError> {
        Self::with_reference(body, apoapsis_m, periapsis_m, ApsisReference::Center)
    }

    pub fn with_reference(
        body: Arc<CelestialBody>,
        apoapsis_m: f64,
        periapsis_m: f64,
        reference: ApsisReference,
    ) -> Result<Self, OrbitError> {
        let offset = match reference {
            ApsisReference::Surface => body.radius_m(),
            ApsisReference::Center => 0.0,
        };
        let mut orbit = Self {
            body,
            apoapsis_m: 0.0,
            periapsis_m: 0.0,
        };
        orbit.assign(apoapsis_m + offset, periapsis_m + offset)?;
        Ok(orbit)
    }

    /// Circular orbit at `altitude_m` above the surface.
    pub fn circular(body: Arc<CelestialBody>, altitude_m: f64) -> Result<Self, OrbitError> {
        Self::new(body, altitude_m, altitude_m)
    }

    /// Circular orbit whose period is `period`.
    pub fn with_period(body: Arc<CelestialBody>, period: Interval) -> Result<Self, OrbitError> {
        let radius = radius_for_period(&body, period)?;
        Self::from_center(body, radius, radius)
    }

    pub fn body(&self) -> &Arc<CelestialBody> {
        &self.body
    }

    /// Independent copy with identical apsides; the body is shared.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Apoapsis altitude above the surface (m).
    pub fn apoapsis(&self) -> f64 {
        self.apoapsis_m - self.body.radius_m()
    }

    /// Periapsis altitude above the surface (m).
    pub fn periapsis(&self) -> f64 {
        self.periapsis_m - self.body.radius_m()
    }

    /// Apoapsis distance from the body's center (m).
    pub fn apoapsis_radius(&self) -> f64 {
        self.apoapsis_m
    }

    /// Periapsis distance from the body's center (m).
    pub fn periapsis_radius(&self) -> f64 {
        self.periapsis_m
    }

    pub fn set_apoapsis(&mut self, altitude_m: f64) -> Result<ApsisOrder, OrbitError> {
        self.set_apoapsis_radius(altitude_m + self.body.radius_m())
    }

    pub fn set_periapsis(&mut self, altitude_m: f64) -> Result<ApsisOrder, OrbitError> {
        self.set_periapsis_radius(altitude_m + self.body.radius_m())
    }

    pub fn set_apoapsis_radius(&mut self, radius_m: f64) -> Result<ApsisOrder, OrbitError> {
        self.assign(radius_m, self.periapsis_m)
    }

    pub fn set_periapsis_radius(&mut self, radius_m: f64) -> Result<ApsisOrder, OrbitError> {
        self.assign(self.apoapsis_m, radius_m)
    }

    /// Semi-major axis from the body's center (m).
    pub fn semi_major_axis(&self) -> f64 {
        0.5 * (self.apoapsis_m + self.periapsis_m)
    }

    pub fn eccentricity(&self) -> f64 {
        1.0 - 2.0 / (self.apoapsis_m / self.periapsis_m + 1.0)
    }

    pub fn is_circular(&self) -> bool {
        self.apoapsis_m == self.periapsis_m
    }

    pub fn period(&self) -> Interval {
        kepler::period_from_semi_major_axis(self.body.mu_m3_s2(), self.semi_major_axis())
    }

    /// Circularise at the radius whose orbital period is `period`.
    pub fn set_period(&mut self, period: Interval) -> Result<(), OrbitError> {
        let radius = radius_for_period(&self.body, period)?;
        self.assign(radius, radius).map(|_| ())
    }

    /// Instantaneous speed at `altitude_m` above the surface (vis-viva).
    pub fn orbital_velocity(&self, altitude_m: f64) -> f64 {
        self.velocity_at_radius(self.body.radius_m() + altitude_m)
    }

    /// Instantaneous speed at `radius_m` from the body's center (vis-viva).
    pub fn velocity_at_radius(&self, radius_m: f64) -> f64 {
        kepler::vis_viva(self.body.mu_m3_s2(), radius_m, self.semi_major_axis())
    }

    /// Keep the periapsis and move the apoapsis so the orbit has `period`.
    ///
    /// A period shorter than that of the circular orbit through the periapsis
    /// lands the moved apsis inside it; the two are then swapped.
    pub fn tune_apoapsis(&mut self, period: Interval) -> Result<ApsisOrder, OrbitError> {
        let semi_major = radius_for_period(&self.body, period)?;
        self.assign(2.0 * semi_major - self.periapsis_m, self.periapsis_m)
    }

    /// Keep the apoapsis and move the periapsis so the orbit has `period`.
    pub fn tune_periapsis(&mut self, period: Interval) -> Result<ApsisOrder, OrbitError> {
        let semi_major = radius_for_period(&self.body, period)?;
        self.assign(self.apoapsis_m, 2.0 * semi_major - self.apoapsis_m)
    }

    /// Time between successive alignments with `other`, which must circle the same body.
    pub fn synodic_period(&self, other: &Orbit) -> Result<Interval, OrbitError> {
        if !same_body(&self.body, &other.body) {
            return Err(OrbitError::InvalidBodyReference(format!(
                "synodic period needs a common central body, got {} and {}",
                self.body.name(),
                other.body.name()
            )));
        }
        kepler::synodic_period(self.period(), other.period())
    }

    /// Shares a central body with `other`.
    pub fn shares_body(&self, other: &Orbit) -> bool {
        same_body(&self.body, &other.body)
    }

    fn assign(&mut self, apoapsis_m: f64, periapsis_m: f64) -> Result<ApsisOrder, OrbitError> {
        for radius_m in [apoapsis_m, periapsis_m] {
            if !(radius_m.is_finite() && radius_m > 0.0) {
                return Err(OrbitError::DegenerateOrbit { radius_m });
            }
        }
        if apoapsis_m < periapsis_m {
            debug!(
                body = self.body.name(),
                apoapsis_m = periapsis_m,
                periapsis_m = apoapsis_m,
                "apsides swapped to keep apoapsis >= periapsis"
            );
            self.apoapsis_m = periapsis_m;
            self.periapsis_m = apoapsis_m;
            Ok(ApsisOrder::Swapped)
        } else {
            self.apoapsis_m = apoapsis_m;
            self.periapsis_m = periapsis_m;
            Ok(ApsisOrder::Preserved)
        }
    }
}

fn radius_for_period(body: &CelestialBody, period: Interval) -> Result<f64, OrbitError> {
    let seconds = period.seconds();
    if !(seconds.is_finite() && seconds > 0.0) {
        return Err(OrbitError::InvalidPeriod { seconds });
    }
    Ok(body.semi_major_axis_for_period(period))
}

/// Same allocation, or records that agree on name and physical constants.
fn same_body(a: &Arc<CelestialBody>, b: &Arc<CelestialBody>) -> bool {
    Arc::ptr_eq(a, b)
        || (a.name().eq_ignore_ascii_case(b.name())
            && a.mu_m3_s2() == b.mu_m3_s2()
            && a.radius_m() == b.radius_m())
}
