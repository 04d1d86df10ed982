use std::sync::Arc;

use kerbal_orbit_calculator::Interval;
use kerbal_orbit_calculator::impulsive::{
    PlanError, TransferDirection, burn_delta_v, launch_window_spacing, plan_hohmann,
    plan_resonant_deployment, resonant_period,
};
use kerbal_orbit_calculator::orbits::{CelestialBody, Orbit, OrbitError};

const KERBOL_MU: f64 = 1.1723328e18;
const KERBIN_SMA: f64 = 13_599_840_256.0;

fn kerbol() -> Arc<CelestialBody> {
    Arc::new(CelestialBody::new("KERBOL", 261_600_000.0, KERBOL_MU, 17.1, 432_000.0).unwrap())
}

fn kerbin_orbit(sun: &Arc<CelestialBody>) -> Orbit {
    Orbit::from_center(sun.clone(), KERBIN_SMA, KERBIN_SMA).unwrap()
}

fn relay_orbit(sun: &Arc<CelestialBody>) -> Orbit {
    Orbit::with_period(sun.clone(), Interval::from_days(295.0)).unwrap()
}

fn assert_close(actual: f64, expected: f64, rel: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= rel * scale,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn hohmann_from_kerbin_to_295_day_orbit() {
    let sun = kerbol();
    let start = kerbin_orbit(&sun);
    let target = relay_orbit(&sun);
    let plan = plan_hohmann(&start, &target).expect("plan");

    assert_eq!(plan.direction, TransferDirection::Inward);
    assert_eq!(plan.transfer.apoapsis_radius(), KERBIN_SMA);
    assert_eq!(plan.transfer.periapsis_radius(), target.periapsis_radius());
    assert_eq!(plan.departure.radius_m, KERBIN_SMA);
    assert_eq!(plan.arrival.radius_m, target.periapsis_radius());

    let total = plan.total_delta_v_m_s();
    assert!(total.is_finite() && total > 0.0, "total = {total}");
    assert_eq!(total, plan.departure.delta_v_m_s + plan.arrival.delta_v_m_s);
    assert!(plan.departure.delta_v_m_s > 0.0);
    assert!(plan.arrival.delta_v_m_s > 0.0);
    assert!((total - 1_206.04).abs() < 0.1, "total = {total}");
}

#[test]
fn hohmann_matches_the_circular_closed_form() {
    let sun = kerbol();
    let start = kerbin_orbit(&sun);
    let target = relay_orbit(&sun);
    let plan = plan_hohmann(&start, &target).unwrap();

    let r1 = KERBIN_SMA;
    let r2 = target.semi_major_axis();
    let a_t = 0.5 * (r1 + r2);
    let dv1 = (KERBOL_MU / r1).sqrt() - (KERBOL_MU * (2.0 / r1 - 1.0 / a_t)).sqrt();
    let dv2 = (KERBOL_MU * (2.0 / r2 - 1.0 / a_t)).sqrt() - (KERBOL_MU / r2).sqrt();
    assert_close(plan.departure.delta_v_m_s, dv1, 1e-9);
    assert_close(plan.arrival.delta_v_m_s, dv2, 1e-9);

    let tof = std::f64::consts::PI * (a_t.powi(3) / KERBOL_MU).sqrt();
    assert_close(plan.transfer_time().seconds(), tof, 1e-12);
}

#[test]
fn burns_match_altitude_queries() {
    let sun = kerbol();
    let start = kerbin_orbit(&sun);
    let target = relay_orbit(&sun);
    let plan = plan_hohmann(&start, &target).unwrap();

    let injection = plan.departure.altitude_m();
    assert_close(injection, start.apoapsis(), 1e-12);
    assert_close(
        burn_delta_v(&start, &plan.transfer, injection),
        plan.departure.delta_v_m_s,
        1e-9,
    );
    assert_close(
        burn_delta_v(&plan.transfer, &target, plan.arrival.altitude_m()),
        plan.arrival.delta_v_m_s,
        1e-9,
    );
}

#[test]
fn outward_transfer_mirrors_inward_transfer() {
    let sun = kerbol();
    let outer = kerbin_orbit(&sun);
    let inner = relay_orbit(&sun);
    let inward = plan_hohmann(&outer, &inner).unwrap();
    let outward = plan_hohmann(&inner, &outer).unwrap();

    assert_eq!(outward.direction, TransferDirection::Outward);
    assert_eq!(outward.transfer.apoapsis_radius(), KERBIN_SMA);
    assert!(outward.departure.delta_v_m_s < 0.0);
    assert!(outward.arrival.delta_v_m_s < 0.0);
    assert_close(outward.magnitude_m_s(), inward.magnitude_m_s(), 1e-9);
    assert_close(
        outward.transfer_time().seconds(),
        inward.transfer_time().seconds(),
        1e-12,
    );
}

#[test]
fn transfer_needs_a_common_body() {
    let sun = kerbol();
    let moon_host =
        Arc::new(CelestialBody::new("KERBIN", 600_000.0, 3.5316e12, 9.81, 21_549.425).unwrap());
    let start = kerbin_orbit(&sun);
    let target = Orbit::circular(moon_host, 100_000.0).unwrap();
    assert!(matches!(
        plan_hohmann(&start, &target),
        Err(PlanError::Orbit(OrbitError::InvalidBodyReference(_)))
    ));
}

#[test]
fn resonant_period_adds_one_nth() {
    let period = resonant_period(Interval::from_seconds(100.0), 3).unwrap();
    assert_eq!(period.seconds(), 133.0);
    assert!(matches!(
        resonant_period(Interval::from_seconds(100.0), 0),
        Err(PlanError::NoSatellites)
    ));
}

#[test]
fn resonant_deployment_for_three_relays() {
    let sun = kerbol();
    let start = kerbin_orbit(&sun);
    let target = relay_orbit(&sun);
    let plan = plan_resonant_deployment(&start, &target, 3).expect("resonant plan");

    let expected_period = target.period() + target.period() / 3.0;
    assert_eq!(plan.resonant_period, expected_period);
    assert_close(
        plan.resonant.period().seconds(),
        expected_period.seconds(),
        1e-9,
    );
    assert_eq!(plan.resonant.periapsis_radius(), plan.hohmann.arrival.radius_m);
    assert!(plan.resonant.apoapsis_radius() > plan.resonant.periapsis_radius());

    assert_eq!(plan.insertion.radius_m, plan.hohmann.arrival.radius_m);
    assert_eq!(plan.circularization.radius_m, plan.hohmann.arrival.radius_m);
    assert_eq!(
        plan.total_delta_v_m_s(),
        plan.hohmann.departure.delta_v_m_s
            + plan.insertion.delta_v_m_s
            + plan.circularization.delta_v_m_s
    );
    // Resonant ellipse is larger than the transfer ellipse: speed up, then slow down to circularise.
    assert!(plan.insertion.delta_v_m_s < 0.0);
    assert!(plan.circularization.delta_v_m_s > 0.0);

    let synodic = start.synodic_period(&target).unwrap();
    assert_eq!(plan.launch_spacing, synodic / 3.0);
}

#[test]
fn resonant_deployment_cost_counts_every_burn() {
    let sun = kerbol();
    let start = kerbin_orbit(&sun);
    let target = relay_orbit(&sun);
    let plan = plan_resonant_deployment(&start, &target, 3).unwrap();

    assert!((plan.hohmann.departure.delta_v_m_s - 584.51).abs() < 0.01);
    assert!((plan.insertion.delta_v_m_s + 257.46).abs() < 0.01);
    assert!((plan.circularization.delta_v_m_s - 878.98).abs() < 0.01);

    let cost = plan.magnitude_m_s();
    assert!((cost - 1_720.95).abs() < 0.01, "cost = {cost}");
    assert_eq!(
        cost,
        plan.hohmann.departure.delta_v_m_s.abs()
            + plan.insertion.delta_v_m_s.abs()
            + plan.circularization.delta_v_m_s.abs()
    );
    // The signed sum folds insertion into circularisation and only recovers the Hohmann figure.
    assert_close(
        plan.total_delta_v_m_s(),
        plan.hohmann.total_delta_v_m_s(),
        1e-9,
    );
    assert!(cost > plan.hohmann.magnitude_m_s() + 500.0);
}

#[test]
fn launch_spacing_surfaces_undefined_synodic_periods() {
    let sun = kerbol();
    let a = kerbin_orbit(&sun);
    let b = kerbin_orbit(&sun);
    assert!(matches!(
        launch_window_spacing(&a, &b, 3),
        Err(PlanError::Orbit(OrbitError::UndefinedSynodicPeriod { .. }))
    ));
    assert!(matches!(
        launch_window_spacing(&a, &relay_orbit(&sun), 0),
        Err(PlanError::NoSatellites)
    ));
}
