//! Resonant deployment orbits for evenly spaced constellations.
//!
//! A carrier waits on an orbit whose period is `1 + 1/n` times the target
//! period. Each time it returns to the burn point the target slot has drifted
//! by `1/n` of a revolution, so releasing one satellite per pass spaces `n`
//! satellites evenly.

use kerbal_core::Interval;
use kerbal_orbits::Orbit;
use tracing::debug;

use crate::PlanError;
use crate::transfers::{HohmannPlan, Maneuver, plan_hohmann};

#[derive(Debug, Clone, PartialEq)]
pub struct ResonantPlan {
    pub satellites: u32,
    pub hohmann: HohmannPlan,
    pub resonant: Orbit,
    pub resonant_period: Interval,
    /// Transfer orbit onto the resonant orbit.
    pub insertion: Maneuver,
    /// Resonant orbit onto the target orbit, flown once per satellite.
    pub circularization: Maneuver,
    /// Gap between launches from the start orbit.
    pub launch_spacing: Interval,
}

impl ResonantPlan {
    /// Signed sum of departure, insertion and circularisation burns.
    pub fn total_delta_v_m_s(&self) -> f64 {
        self.hohmann.departure.delta_v_m_s
            + self.insertion.delta_v_m_s
            + self.circularization.delta_v_m_s
    }

    /// Sum of burn magnitudes: the delta-v a carrier actually spends.
    ///
    /// The insertion burn is prograde, so the signed total cancels it against
    /// circularisation and collapses to the plain Hohmann figure.
    pub fn magnitude_m_s(&self) -> f64 {
        self.hohmann.departure.delta_v_m_s.abs()
            + self.insertion.delta_v_m_s.abs()
            + self.circularization.delta_v_m_s.abs()
    }
}

/// `target + target/n`, with the Kerbin-clock floor division of [`Interval`].
pub fn resonant_period(target_period: Interval, satellites: u32) -> Result<Interval, PlanError> {
    if satellites == 0 {
        return Err(PlanError::NoSatellites);
    }
    Ok(target_period + target_period / f64::from(satellites))
}

/// Synodic period of `a` and `b` shared out among `satellites` launches.
pub fn launch_window_spacing(
    a: &Orbit,
    b: &Orbit,
    satellites: u32,
) -> Result<Interval, PlanError> {
    if satellites == 0 {
        return Err(PlanError::NoSatellites);
    }
    Ok(a.synodic_period(b)? / f64::from(satellites))
}

/// Hohmann transfer to `target` followed by a resonant orbit for `satellites` deployments.
///
/// The resonant orbit is pinned at the radius where the transfer arrives and its
/// other apsis is tuned to the resonant period.
pub fn plan_resonant_deployment(
    start: &Orbit,
    target: &Orbit,
    satellites: u32,
) -> Result<ResonantPlan, PlanError> {
    let period = resonant_period(target.period(), satellites)?;
    let hohmann = plan_hohmann(start, target)?;
    let pinned_m = hohmann.arrival.radius_m;

    let mut resonant = Orbit::from_center(target.body().clone(), pinned_m, pinned_m)?;
    let order = resonant.tune_apoapsis(period)?;
    debug!(
        satellites,
        resonant_period_s = period.seconds(),
        apoapsis_m = resonant.apoapsis_radius(),
        periapsis_m = resonant.periapsis_radius(),
        swapped = order.is_swapped(),
        "resonant orbit tuned"
    );

    let insertion = Maneuver::between(&hohmann.transfer, &resonant, pinned_m);
    let circularization = Maneuver::between(&resonant, target, pinned_m);
    let launch_spacing = launch_window_spacing(start, target, satellites)?;

    Ok(ResonantPlan {
        satellites,
        hohmann,
        resonant,
        resonant_period: period,
        insertion,
        circularization,
        launch_spacing,
    })
}
