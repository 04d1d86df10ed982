use kerbal_orbit_calculator::orbits::Orbit;
use kerbal_orbit_calculator::units::{m_to_km, m_to_mm};

/// Scale a distance in metres to m, km or Mm for display.
pub(super) fn distance(m: f64) -> String {
    let magnitude = m.abs();
    if magnitude >= 1.0e6 {
        format!("{:.3} Mm", m_to_mm(m))
    } else if magnitude >= 1.0e3 {
        format!("{:.3} km", m_to_km(m))
    } else {
        format!("{m:.1} m")
    }
}

pub(super) fn speed(m_s: f64) -> String {
    format!("{m_s:.2} m/s")
}

pub(super) fn print_orbit(label: &str, orbit: &Orbit) {
    println!("{label}");
    println!("  Apoapsis      : {}", distance(orbit.apoapsis()));
    println!("  Periapsis     : {}", distance(orbit.periapsis()));
    println!("  Semi-major    : {}", distance(orbit.semi_major_axis()));
    println!("  Eccentricity  : {:.6}", orbit.eccentricity());
    println!("  Period        : {}", orbit.period());
}
