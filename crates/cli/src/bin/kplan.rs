use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use kerbal_orbit_calculator::Interval;
use kerbal_orbit_calculator::catalog::{self, BodyRegistry};
use kerbal_orbit_calculator::config::load_vessel_configs;
use kerbal_orbit_calculator::fleet;
use kerbal_orbit_calculator::impulsive::{Maneuver, plan_hohmann, plan_resonant_deployment};
use kerbal_orbit_calculator::orbits::{ApsisReference, CelestialBody, Orbit};
use kerbal_orbit_calculator::propulsion::Vessel;
use kerbal_orbit_calculator::units::km_to_m;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[path = "kplan/format.rs"]
mod format;

/// Orbit, transfer and delta-v calculator for the Kerbol system.
#[derive(Parser, Debug)]
#[command(author, version, about = "Kerbol system orbit and maneuver planner")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Body catalog (YAML, TOML, or directory of TOML); defaults to the built-in Kerbol system
    #[arg(long, global = true)]
    bodies: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Escape velocity from a body's surface, an altitude, or a radius
    Escape {
        #[arg(long)]
        body: String,
        /// Altitude above the surface in km
        #[arg(long)]
        altitude: Option<f64>,
        /// Distance from the center in km (takes precedence over --altitude)
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Shape, period and speeds of an orbit
    Orbit {
        #[arg(long)]
        body: String,
        /// Apoapsis in km
        #[arg(long)]
        apoapsis: f64,
        /// Periapsis in km
        #[arg(long)]
        periapsis: f64,
        /// Measure apsides from the body's center instead of its surface
        #[arg(long, default_value_t = false)]
        from_center: bool,
        /// Report the speed at this altitude (km) as well
        #[arg(long)]
        at: Option<f64>,
    },
    /// Two-burn Hohmann transfer between orbits around a common body
    Hohmann(TransferArgs),
    /// Hohmann transfer followed by a resonant orbit for constellation deployment
    Resonant {
        #[command(flatten)]
        transfer: TransferArgs,
        /// Satellites to space evenly on the target orbit
        #[arg(long, default_value_t = 3)]
        satellites: u32,
    },
    /// Synodic period between two orbits around a common body
    Synodic {
        #[arg(long)]
        around: String,
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Mass and delta-v of a catalog vessel
    Vessel {
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value = "configs/vessels.yaml")]
        vessels: PathBuf,
        /// Budget a burn of this size (m/s)
        #[arg(long)]
        burn: Option<f64>,
    },
}

/// Orbits are given as a catalog body name (that body's own orbit),
/// `alt:<km>` for a circular altitude, or `period:<days>` for a circular
/// orbit with that period in Kerbin days.
#[derive(Args, Debug)]
struct TransferArgs {
    /// Central body shared by both orbits
    #[arg(long)]
    around: String,
    /// Start orbit
    #[arg(long)]
    from: String,
    /// Target orbit
    #[arg(long)]
    to: String,
    /// Check the plan against a catalog vessel
    #[arg(long)]
    vessel: Option<String>,
    #[arg(long, default_value = "configs/vessels.yaml")]
    vessels: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loaded;
    let registry: &BodyRegistry = match &cli.bodies {
        Some(path) => {
            loaded = BodyRegistry::load(path)
                .with_context(|| format!("loading body catalog {}", path.display()))?;
            &loaded
        }
        None => catalog::builtin()?,
    };
    debug!(bodies = registry.len(), command = ?cli.command, "catalog ready");

    match &cli.command {
        Command::Escape {
            body,
            altitude,
            radius,
        } => {
            let body = registry.get(body)?;
            let v = body.escape_velocity(altitude.map(km_to_m), radius.map(km_to_m));
            println!("Escape velocity from {}: {}", body.name(), format::speed(v));
        }
        Command::Orbit {
            body,
            apoapsis,
            periapsis,
            from_center,
            at,
        } => {
            let reference = if *from_center {
                ApsisReference::Center
            } else {
                ApsisReference::Surface
            };
            let body = registry.get(body)?;
            let orbit =
                Orbit::with_reference(body, km_to_m(*apoapsis), km_to_m(*periapsis), reference)?;
            format::print_orbit("Orbit", &orbit);
            println!(
                "  Speed at Ap   : {}",
                format::speed(orbit.velocity_at_radius(orbit.apoapsis_radius()))
            );
            println!(
                "  Speed at Pe   : {}",
                format::speed(orbit.velocity_at_radius(orbit.periapsis_radius()))
            );
            if let Some(alt) = at {
                println!(
                    "  Speed at {:<5}: {}",
                    format::distance(km_to_m(*alt)),
                    format::speed(orbit.orbital_velocity(km_to_m(*alt)))
                );
            }
        }
        Command::Hohmann(args) => run_hohmann(registry, args)?,
        Command::Resonant {
            transfer,
            satellites,
        } => run_resonant(registry, transfer, *satellites)?,
        Command::Synodic { around, a, b } => {
            let around = registry.get(around)?;
            let a = resolve_orbit(registry, &around, a)?;
            let b = resolve_orbit(registry, &around, b)?;
            println!("Synodic period: {}", a.synodic_period(&b)?);
        }
        Command::Vessel {
            name,
            vessels,
            burn,
        } => {
            let vessel = pick_vessel(vessels, name.as_deref())?;
            print_vessel(&vessel)?;
            if let Some(dv) = burn {
                print_budget(&vessel, *dv)?;
            }
        }
    }

    Ok(())
}

fn run_hohmann(registry: &BodyRegistry, args: &TransferArgs) -> anyhow::Result<()> {
    let around = registry.get(&args.around)?;
    let start = resolve_orbit(registry, &around, &args.from)?;
    let target = resolve_orbit(registry, &around, &args.to)?;
    let plan = plan_hohmann(&start, &target)?;

    format::print_orbit("Start orbit", &start);
    format::print_orbit("Target orbit", &target);
    format::print_orbit("Transfer orbit", &plan.transfer);
    println!("***");
    print_burn("First burn", &plan.departure);
    print_burn("Final burn", &plan.arrival);
    println!("Transfer time : {}", plan.transfer_time());
    println!("Total dV      : {}", format::speed(plan.total_delta_v_m_s()));

    if let Some(name) = &args.vessel {
        let vessel = pick_vessel(&args.vessels, Some(name))?;
        print_budget(&vessel, plan.magnitude_m_s())?;
    }
    Ok(())
}

fn run_resonant(
    registry: &BodyRegistry,
    args: &TransferArgs,
    satellites: u32,
) -> anyhow::Result<()> {
    let around = registry.get(&args.around)?;
    let start = resolve_orbit(registry, &around, &args.from)?;
    let target = resolve_orbit(registry, &around, &args.to)?;
    let plan = plan_resonant_deployment(&start, &target, satellites)?;

    format::print_orbit("Target orbit", &target);
    format::print_orbit("Transfer orbit", &plan.hohmann.transfer);
    format::print_orbit("Resonant orbit", &plan.resonant);
    println!("***");
    println!("Resonant period   : {}", plan.resonant_period);
    print_burn("Transfer burn", &plan.hohmann.departure);
    print_burn("Resonant burn", &plan.insertion);
    print_burn("Deployment burn", &plan.circularization);
    println!(
        "Total dV          : {}",
        format::speed(plan.magnitude_m_s())
    );
    println!(
        "Net signed dV     : {}",
        format::speed(plan.total_delta_v_m_s())
    );
    println!(
        "Launch interval for {} satellites: {}",
        satellites, plan.launch_spacing
    );

    if let Some(name) = &args.vessel {
        let vessel = pick_vessel(&args.vessels, Some(name))?;
        print_budget(&vessel, plan.magnitude_m_s())?;
    }
    Ok(())
}

fn resolve_orbit(
    registry: &BodyRegistry,
    around: &Arc<CelestialBody>,
    selector: &str,
) -> anyhow::Result<Orbit> {
    if let Some(km) = selector.strip_prefix("alt:") {
        let km: f64 = km.parse().with_context(|| format!("bad altitude '{km}'"))?;
        return Ok(Orbit::circular(Arc::clone(around), km_to_m(km))?);
    }
    if let Some(days) = selector.strip_prefix("period:") {
        let days: f64 = days
            .parse()
            .with_context(|| format!("bad period '{days}'"))?;
        return Ok(Orbit::with_period(
            Arc::clone(around),
            Interval::from_days(days),
        )?);
    }

    let orbit = registry.orbit_of(selector)?;
    if !orbit.body().name().eq_ignore_ascii_case(around.name()) {
        bail!(
            "{} orbits {}, not {}",
            selector,
            orbit.body().name(),
            around.name()
        );
    }
    Ok(orbit)
}

fn pick_vessel(path: &Path, name: Option<&str>) -> anyhow::Result<Vessel> {
    let configs = load_vessel_configs(path)
        .with_context(|| format!("loading vessel catalog {}", path.display()))?;
    Ok(fleet::select(&configs, name)?)
}

fn print_burn(label: &str, burn: &Maneuver) {
    println!(
        "{label:<17} : {} at {}",
        format::speed(burn.delta_v_m_s),
        format::distance(burn.altitude_m())
    );
}

fn print_vessel(vessel: &Vessel) -> anyhow::Result<()> {
    let (fuel, oxidizer) = vessel.fuel();
    println!("Vessel        : {}", vessel.name());
    println!("  Isp         : {:.1} s", vessel.isp_seconds());
    println!("  Dry mass    : {:.1} kg", vessel.dry_mass_kg());
    println!("  Total mass  : {:.1} kg", vessel.total_mass_kg());
    println!("  Fuel / Ox   : {fuel:.1} / {oxidizer:.1} units");
    println!("  Delta-v     : {}", format::speed(vessel.delta_v()?));
    Ok(())
}

fn print_budget(vessel: &Vessel, delta_v_m_s: f64) -> anyhow::Result<()> {
    let budget = vessel.budget(delta_v_m_s)?;
    println!(
        "Budget on {}: {:.1} fuel units for {}, {} left",
        vessel.name(),
        budget.fuel_units_required,
        format::speed(budget.delta_v_m_s),
        format::speed(budget.remaining_delta_v_m_s)
    );
    if !budget.is_feasible() {
        return Err(anyhow!(
            "{} is {} short",
            vessel.name(),
            format::speed(-budget.remaining_delta_v_m_s)
        ));
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
