//! Time intervals measured on the Kerbin clock.
//!
//! The canonical value is a real number of seconds. The day/hour/minute/second
//! breakdown uses a 6-hour Kerbin day and is always derived from the canonical
//! value, truncating any fractional second.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use crate::constants::{
    HOURS_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};

/// Whole-unit breakdown of an [`Interval`].
///
/// Every component of a negative interval carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntervalComponents {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl IntervalComponents {
    pub fn new(days: i64, hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Total number of seconds represented by the components.
    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

impl From<(i64, i64, i64, i64)> for IntervalComponents {
    fn from((days, hours, minutes, seconds): (i64, i64, i64, i64)) -> Self {
        Self::new(days, hours, minutes, seconds)
    }
}

/// A span of time with a canonical value in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Interval {
    seconds: f64,
}

impl Interval {
    pub const ZERO: Interval = Interval { seconds: 0.0 };

    /// Build an interval from a raw number of seconds.
    pub const fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Build an interval from Kerbin days, hours, minutes and seconds.
    ///
    /// Components are not required to be normalised: `from_components(0.0, 7.0, 0.0, 0.0)`
    /// is one day and one hour.
    pub fn from_components(days: f64, hours: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            seconds: to_seconds(days, hours, minutes, seconds),
        }
    }

    pub fn from_days(days: f64) -> Self {
        Self::from_components(days, 0.0, 0.0, 0.0)
    }

    pub fn from_hours(hours: f64) -> Self {
        Self::from_components(0.0, hours, 0.0, 0.0)
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Overwrite the canonical value.
    pub fn set_seconds(&mut self, seconds: f64) {
        self.seconds = seconds;
    }

    /// Day/hour/minute/second view; fractional seconds are dropped here only.
    pub fn components(&self) -> IntervalComponents {
        // `as` saturates on overflow and maps NaN to zero.
        let total = self.seconds.trunc() as i64;
        let days = total / SECONDS_PER_DAY;
        let rem = total % SECONDS_PER_DAY;
        let hours = rem / SECONDS_PER_HOUR;
        let rem = rem % SECONDS_PER_HOUR;
        IntervalComponents {
            days,
            hours,
            minutes: rem / SECONDS_PER_MINUTE,
            seconds: rem % SECONDS_PER_MINUTE,
        }
    }

    /// Replace the canonical value with the total of `components`.
    pub fn set_components(&mut self, components: IntervalComponents) {
        self.seconds = components.total_seconds() as f64;
    }

    /// Add raw components in place.
    pub fn add_components(&mut self, days: f64, hours: f64, minutes: f64, seconds: f64) {
        self.seconds += to_seconds(days, hours, minutes, seconds);
    }

    /// Canonical value expressed in (fractional) Kerbin days.
    pub fn as_days(&self) -> f64 {
        self.seconds / SECONDS_PER_DAY as f64
    }
}

fn to_seconds(days: f64, hours: f64, minutes: f64, seconds: f64) -> f64 {
    let hours = hours + days * HOURS_PER_DAY as f64;
    let minutes = minutes + hours * MINUTES_PER_HOUR as f64;
    seconds + minutes * SECONDS_PER_MINUTE as f64
}

impl From<IntervalComponents> for Interval {
    fn from(components: IntervalComponents) -> Self {
        Self::from_seconds(components.total_seconds() as f64)
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval::from_seconds(self.seconds + rhs.seconds)
    }
}

impl AddAssign for Interval {
    fn add_assign(&mut self, rhs: Interval) {
        self.seconds += rhs.seconds;
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval::from_seconds(self.seconds - rhs.seconds)
    }
}

impl SubAssign for Interval {
    fn sub_assign(&mut self, rhs: Interval) {
        self.seconds -= rhs.seconds;
    }
}

impl Mul<f64> for Interval {
    type Output = Interval;

    fn mul(self, rhs: f64) -> Interval {
        Interval::from_seconds(self.seconds * rhs)
    }
}

/// Floor division: `Interval::from_seconds(7.0) / 2.0` is 3 seconds.
impl Div<f64> for Interval {
    type Output = Interval;

    fn div(self, rhs: f64) -> Interval {
        Interval::from_seconds((self.seconds / rhs).floor())
    }
}

impl Sum for Interval {
    fn sum<I: Iterator<Item = Interval>>(iter: I) -> Interval {
        iter.fold(Interval::ZERO, Add::add)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.components();
        write!(f, "{}d {}h {}m {}s", c.days, c.hours, c.minutes, c.seconds)
    }
}
