//! Bazaar - command-line runner
//!
//! Parses flags into a [`SimConfig`], drives the simulation round by round,
//! and prints the periodic report table. All simulation logic lives in
//! `sim-core`; this binary only formats.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use sim_core::{RoundReport, SimConfig, Simulation};

/// Agent-based single-good market simulation
#[derive(Parser, Debug)]
#[command(name = "bazaar", version)]
struct Args {
    /// Random seed
    #[arg(short = 'd', long, default_value_t = 31)]
    seed: u64,

    /// Number of agents
    #[arg(short = 'n', long, default_value_t = 100)]
    agents: usize,

    /// Number of iterations
    #[arg(short = 'i', long, default_value_t = 100_000)]
    iters: u64,

    /// Max. consumption per agent per round
    #[arg(short = 'c', long, default_value_t = 10.0)]
    max_consumption: f64,

    /// Max. production per agent per round
    #[arg(short = 'p', long, default_value_t = 10.0)]
    max_production: f64,

    /// Producer sample size per matching attempt
    #[arg(short = 'z', long, default_value_t = 10)]
    sample_size: usize,

    /// Verbosity (>= 1 dumps per-agent state at checkpoints)
    #[arg(short = 'v', long, default_value_t = 0)]
    verbose: u8,
}

impl Args {
    fn into_config(self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            num_agents: self.agents,
            num_iters: self.iters,
            max_consumption: self.max_consumption,
            max_production: self.max_production,
            producer_sample_size: self.sample_size,
            verbosity: self.verbose,
        }
    }
}

fn print_config(config: &SimConfig) {
    println!("{:<19}{}", "Random seed", config.seed);
    println!("{:<19}{}", "Number agents", config.num_agents);
    println!("{:<19}{}", "Number iterations", config.num_iters);
    println!("{:<19}{:.2}", "Max. consumption", config.max_consumption);
    println!("{:<19}{:.2}", "Max. production", config.max_production);
    println!("{:<19}{}", "Sample size", config.producer_sample_size);
    println!("{:<19}{}", "Verbose flags", config.verbosity);
}

fn print_header() {
    println!(
        "{:>8}{:>7}{:>7}{:>7}{:>7}{:>7}{:>7}{:>7}{:>7}{:>7}{:>7}{:>7}",
        "t", "mx $", "mn $", "av PP", "mx PP", "mn PP", "av C", "mx C", "mn C", "av P", "mx P",
        "mn P"
    );
}

fn print_row(report: &RoundReport) {
    println!(
        "{:>8}{:>7.2}{:>7.2}{:>7.2}{:>7.2}{:>7.2}{:>7.2}{:>7.2}{:>7.2}{:>7.2}{:>7.2}{:>7.2}",
        report.tick,
        report.money.max,
        report.money.min,
        report.price.avg,
        report.price.max,
        report.price.min,
        report.consumption.avg,
        report.consumption.max,
        report.consumption.min,
        report.production.avg,
        report.production.max,
        report.production.min,
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.into_config();

    println!("BAZAAR MARKET MODEL (version {})", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let mut sim = Simulation::new(config).context("invalid configuration")?;
    print_header();

    let stride = sim.config().report_stride();
    let num_iters = sim.config().num_iters;
    let verbosity = sim.config().verbosity;

    let start = Instant::now();
    for t in 1..=num_iters {
        sim.advance_round();
        if (t - 1) % stride == 0 {
            print_row(&sim.report());
            if verbosity >= 1 {
                for agent in &sim.world().agents {
                    println!("{agent}");
                }
            }
        }
    }
    println!("Elapsed time {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}
