//! scan-replay: headless radar host for exercising the scan pipeline.
//!
//! Builds a seeded world of moving contacts, runs the radar for a number of
//! frames with churn, and prints the final snapshot as JSON.
//!
//! Usage:
//!   scan-replay --seed 42 --frames 600 --contacts 120
//!   scan-replay --config radar.json --despawn 0.05 --defect 0.01
//!   scan-replay --roster --frames 1000
//!
//! Set RUST_LOG=debug for per-frame scan summaries.

use std::path::PathBuf;
use std::process;

use glam::Vec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use radarscope_core::config::RadarConfig;
use radarscope_core::state::ScanReport;
use radarscope_sim::headless::HeadlessRenderer;
use radarscope_sim::plane::ScanPlane;
use radarscope_sim::systems::churn::{self, ChurnRates};
use radarscope_sim::systems::movement;
use radarscope_sim::world::{Allegiance, Roster};
use radarscope_sim::world_setup::{spawn_contacts, SpawnArea};
use radarscope_sim::RadarScanner;

/// Host frame rate (Hz).
const FRAME_RATE: f32 = 50.0;

/// Frames between progress log lines.
const PROGRESS_INTERVAL: u64 = 100;

/// Flags that take a value.
const VALUE_FLAGS: [&str; 6] = [
    "--seed",
    "--frames",
    "--contacts",
    "--config",
    "--despawn",
    "--defect",
];

#[derive(Debug)]
struct ReplayOptions {
    seed: u64,
    frames: u64,
    contacts: usize,
    config: Option<PathBuf>,
    rates: ChurnRates,
    /// Discover through an explicit roster instead of querying the world.
    roster: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h" || a == "help") {
        print_usage();
        return;
    }

    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage();
            process::exit(1);
        }
    };

    let config = match load_config(options.config.as_ref()) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {message}");
            process::exit(1);
        }
    };

    if let Err(message) = run(&options, config) {
        eprintln!("Error: {message}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "scan-replay: RADARSCOPE headless scan replay\n\
         \n\
         Options:\n\
         \n\
           --seed <N>       RNG seed (default: 42)\n\
           --frames <N>     Frames to simulate (default: 600)\n\
           --contacts <N>   Contacts alive at any time (default: 120)\n\
           --config <path>  Radar configuration JSON (default: built-in)\n\
           --despawn <P>    Per-frame despawn probability (default: 0.02)\n\
           --defect <P>     Per-frame allegiance flip probability (default: 0.005)\n\
           --roster         Track contacts through an explicit roster\n\
         \n\
         Example:\n\
         \n\
           RUST_LOG=debug scan-replay --seed 7 --frames 300 --contacts 40\n"
    );
}

/// Reject unknown flags and value flags missing their value.
fn check_args(args: &[String]) -> Result<(), String> {
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if VALUE_FLAGS.contains(&arg) {
            match args.get(i + 1) {
                Some(value) if !value.starts_with("--") => i += 2,
                _ => return Err(format!("{arg} needs a value")),
            }
        } else if arg == "--roster" {
            i += 1;
        } else {
            return Err(format!("unknown argument: {arg}"));
        }
    }
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> Result<T, String> {
    match flag_value(args, flag) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("invalid value for {flag}: {raw}")),
        None => Ok(default),
    }
}

fn parse_options(args: &[String]) -> Result<ReplayOptions, String> {
    check_args(args)?;
    let defaults = ChurnRates::default();
    let rates = ChurnRates {
        despawn: parse_flag(args, "--despawn", defaults.despawn)?,
        defect: parse_flag(args, "--defect", defaults.defect)?,
    };
    for (name, p) in [("--despawn", rates.despawn), ("--defect", rates.defect)] {
        if !(0.0..=1.0).contains(&p) {
            return Err(format!("{name} must be a probability in 0..=1, got {p}"));
        }
    }

    Ok(ReplayOptions {
        seed: parse_flag(args, "--seed", 42)?,
        frames: parse_flag(args, "--frames", 600)?,
        contacts: parse_flag(args, "--contacts", 120)?,
        config: flag_value(args, "--config").map(PathBuf::from),
        rates,
        roster: args.iter().any(|a| a == "--roster"),
    })
}

fn load_config(path: Option<&PathBuf>) -> Result<RadarConfig, String> {
    let Some(path) = path else {
        return Ok(RadarConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    RadarConfig::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
}

fn run(options: &ReplayOptions, config: RadarConfig) -> Result<(), String> {
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let mut world = World::new();
    let area = SpawnArea {
        radius: config.radar_range * 1.5,
        ..Default::default()
    };
    let spawned = spawn_contacts(&mut world, &mut rng, &area, options.contacts);

    let mut roster = Roster::new();
    if options.roster {
        enlist_all(&mut roster, &world, &spawned);
    }

    let plane = ScanPlane::horizontal(Vec3::ZERO, 0.0).map_err(|e| e.to_string())?;
    let mut scanner = RadarScanner::new(config, plane).map_err(|e| e.to_string())?;
    let mut renderer = HeadlessRenderer::new();
    let mut churn_buffer = Vec::new();
    let mut totals = ScanReport::default();

    for _ in 0..options.frames {
        churn::run(
            &mut world,
            &mut rng,
            &options.rates,
            &area,
            &mut churn_buffer,
        );
        movement::run(&mut world, 1.0 / FRAME_RATE);

        let report = if options.roster {
            roster.prune(&world);
            enlist_all(&mut roster, &world, &churn_buffer);
            scanner.scan(&roster.in_world(&world), &mut renderer)
        } else {
            scanner.scan(&world, &mut renderer)
        };
        totals.acquired += report.acquired;
        totals.reused += report.reused;
        totals.released += report.released;
        totals.reclassified += report.reclassified;

        if report.frame % PROGRESS_INTERVAL == 0 {
            log::info!(
                "frame {}: {} active, pool {}, {} markers created",
                report.frame,
                report.active,
                report.pool_size,
                renderer.created()
            );
        }
    }

    log::info!(
        "done: {} acquired ({} from pool), {} released, {} reclassified, pool {}",
        totals.acquired,
        totals.reused,
        totals.released,
        totals.reclassified,
        scanner.registry().pool_size()
    );

    let snapshot = scanner.snapshot();
    let json = serde_json::to_string_pretty(&snapshot).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

/// List freshly spawned contacts under their current allegiance.
fn enlist_all(roster: &mut Roster, world: &World, entities: &[hecs::Entity]) {
    for &entity in entities {
        if let Ok(allegiance) = world.get::<&Allegiance>(entity) {
            roster.enlist(entity, allegiance.0);
        }
    }
}
