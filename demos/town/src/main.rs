//! town — runnable demo for the rust_contagion simulator.
//!
//! Simulates a small neighbourhood (synthetic by default, or loaded from
//! location/resident CSV files) for a number of days, then prints a daily
//! infection table and a per-kind location summary.
//!
//! ```text
//! town --days 14 --population 60 -v
//! town --config run.json --locations locations.csv --residents residents.csv
//! RUST_LOG=ct_sim=trace town --days 1
//! ```

mod table;
mod town;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use serde::Deserialize;

use ct_agent::{City, HabitConfig, PopulationBuilder, load_residents_csv};
use ct_behavior::{BehaviorConfig, BehaviorModel, HumanBehavior, StayHomeBehavior};
use ct_core::{LocationKind, SimConfig, SimRng};
use ct_sim::SimBuilder;
use ct_world::load_locations_csv;

use table::DailyTable;
use town::build_town;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "town")]
#[command(about = "Run the contagion simulator on a small town")]
struct Cli {
    /// JSON file with `sim`, `habits` and `behavior` sections (all optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Master seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Days to simulate (overrides the config file)
    #[arg(short, long)]
    days: Option<u64>,

    /// Residents in the synthetic town
    #[arg(short, long, default_value_t = 60)]
    population: usize,

    /// Residents infected at tick 0 in the synthetic town
    #[arg(short, long, default_value_t = 2)]
    infected: usize,

    /// Location CSV (`name,kind,lat,lon,capacity,contamination_probability`)
    #[arg(long, requires = "residents")]
    locations: Option<PathBuf>,

    /// Resident CSV (`name,household,workplace,infected_at_tick`)
    #[arg(long, requires = "locations")]
    residents: Option<PathBuf>,

    /// Keep everyone home except for tests
    #[arg(long)]
    lockdown: bool,

    /// Write every event as one JSON object per line
    #[arg(long)]
    events: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RunConfig {
    sim:      SimConfig,
    habits:   HabitConfig,
    behavior: BehaviorConfig,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // 1. Configuration.
    let mut cfg = match &cli.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader::<_, RunConfig>(file)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => RunConfig::default(),
    };
    if let Some(seed) = cli.seed {
        cfg.sim.seed = seed;
    }
    if let Some(days) = cli.days {
        cfg.sim.total_ticks = cfg.sim.make_clock().ticks_for_days(days);
    }
    cfg.sim.validate()?;

    // 2. Locations and residents.
    let (locations, residents) = match (&cli.locations, &cli.residents) {
        (Some(loc_path), Some(res_path)) => {
            let locations = load_locations_csv(loc_path)?;
            let residents = load_residents_csv(res_path, &locations)?;
            (locations, residents)
        }
        (None, None) => {
            if cli.population == 0 {
                bail!("--population must be at least 1");
            }
            let mut rng = SimRng::new(cfg.sim.seed);
            build_town(cli.population, cli.infected.min(cli.population), &mut rng)?
        }
        _ => bail!("--locations and --residents must be given together"),
    };

    // 3. Population.
    let (agents, rngs) = PopulationBuilder::new(cfg.sim.seed)
        .habits(cfg.habits.clone())
        .residents(residents)
        .build(&locations)?;
    let city = City::new(locations, agents);

    println!("=== town — rust_contagion ===");
    println!(
        "Residents: {}  |  Locations: {}  |  Days: {}  |  Seed: {}  |  Policy: {}",
        city.agents.count,
        city.locations.len(),
        cfg.sim.total_ticks * u64::from(cfg.sim.tick_minutes) / (24 * 60),
        cfg.sim.seed,
        if cli.lockdown { "lockdown" } else { "routine" },
    );
    println!();

    // 4. Run.
    if cli.lockdown {
        run(&cli, cfg, city, rngs, StayHomeBehavior)
    } else {
        run(&cli, cfg, city, rngs, HumanBehavior)
    }
}

fn run<B: BehaviorModel>(
    cli:      &Cli,
    cfg:      RunConfig,
    city:     City,
    rngs:     ct_agent::AgentRngs,
    behavior: B,
) -> Result<()> {
    let ticks_per_day = cfg.sim.make_clock().ticks_for_days(1).max(1);
    let days = cfg.sim.total_ticks.div_ceil(ticks_per_day);
    let mut sim = SimBuilder::new(cfg.sim, city, rngs, behavior)
        .behavior_config(cfg.behavior)
        .build()?;

    let mut table = DailyTable::new(ticks_per_day, days);
    let t0 = Instant::now();
    sim.run(&mut table)?;
    let elapsed = t0.elapsed();
    println!("Simulation complete in {:.3} s ({} resumptions)", elapsed.as_secs_f64(), sim.resumptions);
    println!();

    // 5. Daily table.
    println!("{:<5} {:>9} {:>6} {:>10} {:>9} {:>14}", "Day", "Infected", "Tests", "Encounters", "Symptoms", "Contaminations");
    println!("{}", "-".repeat(58));
    for row in &table.rows {
        println!(
            "{:<5} {:>9} {:>6} {:>10} {:>9} {:>14}",
            row.day, row.infected, row.events[0], row.events[1], row.events[2], row.events[3],
        );
    }
    println!();

    // 6. Location summary at the end of the run.
    println!("{:<10} {:>6} {:>9} {:>8}", "Kind", "Count", "Inside", "Waiting");
    println!("{}", "-".repeat(36));
    for kind in LocationKind::ALL {
        let ids = sim.city.locations.ids_of(kind);
        let inside: usize = ids.iter().map(|&id| sim.city.locations.get(id).occupancy()).sum();
        let waiting: usize = ids.iter().map(|&id| sim.city.locations.get(id).waiting().len()).sum();
        println!("{:<10} {:>6} {:>9} {:>8}", kind.as_str(), ids.len(), inside, waiting);
    }
    let removed = sim.process.iter().filter(|p| p.is_removed()).count();
    println!();
    println!(
        "Infected: {} / {}  |  Tested and removed: {}",
        sim.city.agents.infected_count(),
        sim.city.agents.count,
        removed,
    );

    // 7. Optional event dump.
    if let Some(path) = &cli.events {
        let mut out = BufWriter::new(File::create(path).with_context(|| format!("creating {}", path.display()))?);
        let events = sim.events();
        for event in &events {
            serde_json::to_writer(&mut out, event)?;
            writeln!(out)?;
        }
        out.flush()?;
        info!("wrote {} events to {}", events.len(), path.display());
    }

    Ok(())
}
