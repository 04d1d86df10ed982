//! Two-burn Hohmann transfers between orbits around a common body.
//!
//! Every burn is expressed as a [`Maneuver`]: the orbit left, the orbit joined,
//! the radius where the two touch, and the signed speed change
//! `v_from(r) - v_to(r)`. A positive value means the vessel slows down.

use kerbal_core::Interval;
use kerbal_orbits::{Orbit, OrbitError};
use tracing::debug;

use crate::PlanError;

/// A single impulsive burn moving a vessel from one orbit onto another.
#[derive(Debug, Clone, PartialEq)]
pub struct Maneuver {
    pub from: Orbit,
    pub to: Orbit,
    /// Burn point, measured from the body's center (m).
    pub radius_m: f64,
    pub delta_v_m_s: f64,
}

impl Maneuver {
    pub fn between(from: &Orbit, to: &Orbit, radius_m: f64) -> Self {
        Self {
            from: from.duplicate(),
            to: to.duplicate(),
            radius_m,
            delta_v_m_s: from.velocity_at_radius(radius_m) - to.velocity_at_radius(radius_m),
        }
    }

    /// Burn point as an altitude above the surface (m).
    pub fn altitude_m(&self) -> f64 {
        self.radius_m - self.from.body().radius_m()
    }
}

/// Speed change to move from `from` onto `to` at `altitude_m` above the surface.
pub fn burn_delta_v(from: &Orbit, to: &Orbit, altitude_m: f64) -> f64 {
    from.orbital_velocity(altitude_m) - to.orbital_velocity(altitude_m)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    /// Toward the body: the transfer periapsis drops to the target periapsis.
    Inward,
    /// Away from the body: the transfer apoapsis rises to the target apoapsis.
    Outward,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HohmannPlan {
    pub direction: TransferDirection,
    pub transfer: Orbit,
    pub departure: Maneuver,
    pub arrival: Maneuver,
}

impl HohmannPlan {
    /// Signed sum of both burns.
    pub fn total_delta_v_m_s(&self) -> f64 {
        self.departure.delta_v_m_s + self.arrival.delta_v_m_s
    }

    /// Sum of burn magnitudes, for propellant budgeting.
    pub fn magnitude_m_s(&self) -> f64 {
        self.departure.delta_v_m_s.abs() + self.arrival.delta_v_m_s.abs()
    }

    /// Half the transfer orbit's period: apsis to apsis.
    pub fn transfer_time(&self) -> Interval {
        self.transfer.period() * 0.5
    }
}

/// Plan a Hohmann transfer from `start` to `target`.
///
/// The transfer ellipse is `start` with one apsis moved onto `target`: its
/// periapsis when the target is smaller, otherwise its apoapsis. The departure
/// burn happens at the apsis of `start` that is kept, the arrival burn at the
/// apsis taken from `target`.
pub fn plan_hohmann(start: &Orbit, target: &Orbit) -> Result<HohmannPlan, PlanError> {
    if !start.shares_body(target) {
        return Err(OrbitError::InvalidBodyReference(format!(
            "transfer needs a common central body, got {} and {}",
            start.body().name(),
            target.body().name()
        ))
        .into());
    }

    let mut transfer = start.duplicate();
    let (direction, injection_m, arrival_m) = if target.semi_major_axis() < start.semi_major_axis()
    {
        let order = transfer.set_periapsis_radius(target.periapsis_radius())?;
        debug!(swapped = order.is_swapped(), "inward transfer ellipse built");
        (
            TransferDirection::Inward,
            start.apoapsis_radius(),
            target.periapsis_radius(),
        )
    } else {
        let order = transfer.set_apoapsis_radius(target.apoapsis_radius())?;
        debug!(swapped = order.is_swapped(), "outward transfer ellipse built");
        (
            TransferDirection::Outward,
            start.periapsis_radius(),
            target.apoapsis_radius(),
        )
    };

    let departure = Maneuver::between(start, &transfer, injection_m);
    let arrival = Maneuver::between(&transfer, target, arrival_m);
    debug!(
        body = start.body().name(),
        departure_m_s = departure.delta_v_m_s,
        arrival_m_s = arrival.delta_v_m_s,
        "hohmann transfer planned"
    );

    Ok(HohmannPlan {
        direction,
        transfer,
        departure,
        arrival,
    })
}
