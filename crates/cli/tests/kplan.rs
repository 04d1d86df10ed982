use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn vessels() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../configs/vessels.yaml")
}

fn kplan() -> Command {
    Command::cargo_bin("kplan").expect("kplan bin")
}

#[test]
fn hohmann_from_kerbin_to_a_295_day_orbit() {
    kplan()
        .args([
            "hohmann", "--around", "KERBOL", "--from", "KERBIN", "--to", "period:295",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transfer orbit"))
        .stdout(predicate::str::contains("Total dV      : 1206.04 m/s"));
}

#[test]
fn hohmann_checks_the_vessel_budget() {
    kplan()
        .args([
            "hohmann",
            "--around",
            "kerbol",
            "--from",
            "kerbin",
            "--to",
            "period:295",
            "--vessel",
            "relay carrier",
        ])
        .arg("--vessels")
        .arg(vessels())
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget on Relay Carrier"));
}

#[test]
fn resonant_reports_launch_interval() {
    kplan()
        .args([
            "resonant",
            "--around",
            "KERBOL",
            "--from",
            "KERBIN",
            "--to",
            "period:295",
            "--satellites",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resonant orbit"))
        .stdout(predicate::str::contains("Launch interval for 3 satellites"));
}

#[test]
fn synodic_between_low_kerbin_orbits() {
    kplan()
        .args(["synodic", "--around", "KERBIN", "--a", "alt:80", "--b", "MUN"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Synodic period: 0d "));
}

#[test]
fn escape_velocity_from_kerbin() {
    kplan()
        .args(["escape", "--body", "KERBIN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Escape velocity from KERBIN: 3431.03 m/s"));
}

#[test]
fn vessel_summary_and_burn() {
    kplan()
        .args(["vessel", "--name", "Interplanetary Tug", "--vessels"])
        .arg(vessels())
        .args(["--burn", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total mass  : 18000.0 kg"))
        .stdout(predicate::str::contains("Delta-v     : 3716.93 m/s"));
}

#[test]
fn unreachable_burn_fails() {
    kplan()
        .args(["vessel", "--name", "Comsat Bus", "--vessels"])
        .arg(vessels())
        .args(["--burn", "5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("short"));
}

#[test]
fn orbit_reports_apsis_speeds() {
    kplan()
        .args([
            "orbit",
            "--body",
            "KERBIN",
            "--apoapsis",
            "2863.33",
            "--periapsis",
            "80",
            "--at",
            "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Speed at Ap   : 578.54 m/s"))
        .stdout(predicate::str::contains("Speed at Pe   : 2946.58 m/s"))
        .stdout(predicate::str::contains("Speed at 100.000 km: 2895.78 m/s"));
}

#[test]
fn orbit_from_center_is_circular_at_the_radius() {
    kplan()
        .args([
            "orbit",
            "--body",
            "KERBIN",
            "--apoapsis",
            "700",
            "--periapsis",
            "700",
            "--from-center",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Apoapsis      : 100.000 km"))
        .stdout(predicate::str::contains("Eccentricity  : 0.000000"))
        .stdout(predicate::str::contains("Speed at Ap   : 2246.14 m/s"))
        .stdout(predicate::str::contains("Speed at Pe   : 2246.14 m/s"));
}

#[test]
fn resonant_total_counts_every_burn() {
    kplan()
        .args([
            "resonant",
            "--around",
            "KERBOL",
            "--from",
            "KERBIN",
            "--to",
            "period:295",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total dV          : 1720.95 m/s"))
        .stdout(predicate::str::contains("Net signed dV     : 1206.04 m/s"));
}

#[test]
fn unknown_body_fails() {
    kplan()
        .args(["escape", "--body", "Planet X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Planet X"));
}

#[test]
fn mismatched_parent_fails() {
    kplan()
        .args(["hohmann", "--around", "KERBOL", "--from", "KERBIN", "--to", "MUN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MUN orbits KERBIN"));
}
