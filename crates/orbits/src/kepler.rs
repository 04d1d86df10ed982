//! Closed-form two-body relations.
//!
//! All distances are metres from the central body's center and all gravitational
//! parameters are m³/s².

use std::f64::consts::PI;

use kerbal_core::Interval;

use crate::orbit::OrbitError;

/// Orbital period from Kepler's third law: `T = 2π·sqrt(a³/μ)`.
pub fn period_from_semi_major_axis(mu_m3_s2: f64, semi_major_axis_m: f64) -> Interval {
    Interval::from_seconds(2.0 * PI * (semi_major_axis_m.powi(3) / mu_m3_s2).sqrt())
}

/// Semi-major axis implied by an orbital period: `a = (μ·T²/4π²)^(1/3)`.
pub fn semi_major_axis_from_period(mu_m3_s2: f64, period: Interval) -> f64 {
    let t = period.seconds();
    (mu_m3_s2 * t * t / (4.0 * PI * PI)).cbrt()
}

/// Vis-viva speed at radius `r` on an orbit with semi-major axis `a`.
///
/// Returns NaN for `r > 2a`, which no point of the orbit reaches.
pub fn vis_viva(mu_m3_s2: f64, radius_m: f64, semi_major_axis_m: f64) -> f64 {
    (mu_m3_s2 * (2.0 / radius_m - 1.0 / semi_major_axis_m)).sqrt()
}

/// Speed of a circular orbit at radius `r`.
pub fn circular_speed(mu_m3_s2: f64, radius_m: f64) -> f64 {
    (mu_m3_s2 / radius_m).sqrt()
}

/// Escape speed at radius `r`.
pub fn escape_speed(mu_m3_s2: f64, radius_m: f64) -> f64 {
    (2.0 * mu_m3_s2 / radius_m).sqrt()
}

/// Time between successive alignments of two orbits with periods `a` and `b`.
///
/// The shorter period is taken as `p1` so the result is `1/(1/p1 - 1/p2)`.
/// Equal periods never realign and are reported as
/// [`OrbitError::UndefinedSynodicPeriod`].
pub fn synodic_period(a: Interval, b: Interval) -> Result<Interval, OrbitError> {
    let (p1, p2) = if a.seconds() <= b.seconds() {
        (a.seconds(), b.seconds())
    } else {
        (b.seconds(), a.seconds())
    };
    let rate = 1.0 / p1 - 1.0 / p2;
    if rate == 0.0 || !rate.is_finite() {
        return Err(OrbitError::UndefinedSynodicPeriod { period_s: p1 });
    }
    Ok(Interval::from_seconds(1.0 / rate))
}
