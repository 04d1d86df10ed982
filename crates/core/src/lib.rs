//! Core units, constants, and shared primitives for the Kerbal Orbit Calculator workspace.

pub mod time;

pub use time::{Interval, IntervalComponents};

/// Physical and game constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity used by the rocket equation (m/s²).
    pub const G0: f64 = 9.80665;
    /// Hours in a Kerbin day.
    pub const HOURS_PER_DAY: i64 = 6;
    /// Minutes per hour.
    pub const MINUTES_PER_HOUR: i64 = 60;
    /// Seconds per minute.
    pub const SECONDS_PER_MINUTE: i64 = 60;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: i64 = MINUTES_PER_HOUR * SECONDS_PER_MINUTE;
    /// Seconds per Kerbin day (6 hours, not a solar day).
    pub const SECONDS_PER_DAY: i64 = HOURS_PER_DAY * SECONDS_PER_HOUR;
    /// Oxidizer units carried per unit of liquid fuel (9:11 fuel:oxidizer).
    pub const OXIDIZER_PER_FUEL: f64 = 11.0 / 9.0;
    /// Mass of one unit of liquid fuel or oxidizer (kg).
    pub const PROPELLANT_DENSITY_KG_PER_UNIT: f64 = 5.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert metres to megametres.
    #[inline]
    pub fn m_to_mm(v: f64) -> f64 {
        v / 1_000_000.0
    }
}
