//! Dungeon Sim - Entry Point
//!
//! Runs the scripted dungeon encounter once and prints its narration and
//! outcome. Any failure is caught here and reported with its kind.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dungeon_sim::combat::select_dice;
use dungeon_sim::core::{DungeonError, Result, SimulationConfig};
use dungeon_sim::simulation::{run_encounter, EncounterOutcome, EncounterSetup};
use tracing_subscriber::EnvFilter;

/// Dungeon Sim - one scripted encounter in the dungeon
#[derive(Parser, Debug)]
#[command(name = "dungeon-sim")]
#[command(about = "Run the scripted dungeon encounter and report the outcome")]
struct Args {
    /// Random seed for deterministic damage rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Load the damage die to always show this face (overrides --seed)
    #[arg(long)]
    roll: Option<u32>,

    /// Traps deal double damage to targets with more than 100 max HP
    #[arg(long)]
    brutal_traps: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "dungeon_sim=debug"
    } else {
        "dungeon_sim=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.format == OutputFormat::Text {
        println!("--- Welcome to the Dungeon ---");
    }

    let code = match run(&args) {
        Ok(outcome) => {
            report(&outcome, args.format);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    };

    if args.format == OutputFormat::Text {
        println!("---------------------------------");
    }
    code
}

fn run(args: &Args) -> Result<EncounterOutcome> {
    let mut config = SimulationConfig::default();
    if args.brutal_traps {
        config = config.with_brutal_traps();
    }

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut dice = select_dice(args.roll, seed, config.damage_die_sides)?;
    tracing::debug!(seed, loaded = ?args.roll, "Dice ready");

    run_encounter(&EncounterSetup::default(), &config, &mut *dice)
}

fn report(outcome: &EncounterOutcome, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", outcome),
        OutputFormat::Json => match serde_json::to_string_pretty(outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize outcome: {}", e),
        },
    }
}

fn report_failure(err: &DungeonError) {
    eprintln!();
    eprint!("{}", err.report());
}
