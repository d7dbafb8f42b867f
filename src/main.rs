//! Coin Flip Gym - Main binary
//!
//! Monte Carlo answers to three coin-flip puzzles over a shared simulation
//! engine:
//!
//! 1. Expected flips until each 5-flip pattern first appears, ranked.
//! 2. Win probability of each pattern racing every other pattern.
//! 3. Odds that a 1000-round betting strategy nets a profit.

use std::time::Instant;

use clap::Parser;
use simulation::{betting_success, rank_by_mean_dues, tournament_win_rates, SimulationConfig};
use tracing_subscriber::EnvFilter;

/// Coin Flip Gym - coin-flip puzzle simulations
#[derive(Parser, Debug)]
#[command(name = "coin-flip-gym")]
#[command(about = "Monte Carlo simulations for the Coin Flippers of America puzzles")]
#[command(version)]
struct Args {
    /// Puzzle to run: 1 = dues ranking, 2 = pattern tournament, 3 = betting strategy
    #[arg(short, long, env = "FLIP_PROBLEM", value_parser = clap::value_parser!(u8).range(1..=3))]
    problem: u8,

    /// Repetitions per pattern / pair / trial
    #[arg(short, long, env = "FLIP_ITERATIONS", default_value_t = 1000)]
    iterations: usize,

    /// Seed for reproducible runs (omit to draw OS entropy)
    #[arg(long, env = "FLIP_SEED")]
    seed: Option<u64>,

    /// Abort any single scan after this many flips
    #[arg(long, env = "FLIP_MAX_FLIPS")]
    max_flips: Option<u64>,

    /// Force sequential evaluation
    #[arg(long, env = "FLIP_SEQUENTIAL")]
    sequential: bool,

    /// Also print every dues sample (problem 1)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging();

    let mut config = SimulationConfig::new(args.iterations).with_sequential(args.sequential);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(max_flips) = args.max_flips {
        config = config.with_max_flips(max_flips);
    }

    eprintln!(
        "Running problem {} with {} iterations...",
        args.problem, args.iterations
    );
    let start = Instant::now();

    let outcome = match args.problem {
        1 => run_dues_ranking(&config, args.verbose),
        2 => run_tournament(&config),
        3 => {
            run_betting(&config);
            Ok(())
        }
        _ => unreachable!("clap bounds the problem number"),
    };

    if let Err(err) = outcome {
        eprintln!("simulation failed: {}", err);
        std::process::exit(1);
    }

    eprintln!("Done in {:.2}s.", start.elapsed().as_secs_f64());
}

/// Problem 1: mean dues per pattern, soonest-appearing first.
fn run_dues_ranking(config: &SimulationConfig, verbose: bool) -> sim_core::Result<()> {
    for summary in rank_by_mean_dues(config)? {
        if verbose {
            let samples: Vec<String> = summary.samples.iter().map(u64::to_string).collect();
            println!(
                "{}: {} [{}]",
                summary.pattern,
                summary.mean_flips,
                samples.join(", ")
            );
        } else {
            println!("{}: {}", summary.pattern, summary.mean_flips);
        }
    }
    Ok(())
}

/// Problem 2: mean win rate per pattern, strongest first.
fn run_tournament(config: &SimulationConfig) -> sim_core::Result<()> {
    for summary in tournament_win_rates(config)? {
        println!("{}: {}", summary.pattern, summary.win_rate);
    }
    Ok(())
}

/// Problem 3: how often the betting strategy nets a profit.
fn run_betting(config: &SimulationConfig) {
    let summary = betting_success(config);
    println!(
        "You made money {} out of {} times.",
        summary.profitable, summary.trials
    );
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}
