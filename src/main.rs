//! Boomtown CLI - play a treasure hunt or survey town odds.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Boomtown - a turn-based treasure hunt
#[derive(Parser, Debug)]
#[command(name = "boomtown")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log encounter details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively from town to town
    Play {
        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Hunter name
        #[arg(short, long, default_value = "Hunter")]
        name: String,

        /// Game configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Probability that a town is tough (overrides config)
        #[arg(short, long)]
        toughness: Option<f64>,

        /// Crossing items never break
        #[arg(long)]
        easy: bool,

        /// Starting gold (overrides config)
        #[arg(short, long)]
        gold: Option<u32>,
    },

    /// Simulate many towns in parallel and aggregate the odds
    Survey {
        /// Number of towns (default: 1000)
        #[arg(long, default_value = "1000")]
        towns: u64,

        /// Rounds of trouble, digging and hunting per town (default: 3)
        #[arg(long, default_value = "3")]
        visits: u32,

        /// Seed of the first town (increments for each town)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Game configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Probability that a town is tough (overrides config)
        #[arg(short, long)]
        toughness: Option<f64>,

        /// Crossing items never break
        #[arg(long)]
        easy: bool,

        /// Items every surveyor carries (repeatable)
        #[arg(short, long = "item")]
        items: Vec<String>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::SurveyFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.command {
        Commands::Play {
            seed,
            name,
            config,
            toughness,
            easy,
            gold,
        } => cli::Overrides {
            config,
            toughness,
            easy,
            gold,
            items: Vec::new(),
        }
        .resolve()
        .and_then(|game| cli::play::execute(&game, seed, &name)),

        Commands::Survey {
            towns,
            visits,
            seed,
            config,
            toughness,
            easy,
            items,
            threads,
            format,
            progress,
        } => cli::Overrides {
            config,
            toughness,
            easy,
            gold: None,
            items,
        }
        .resolve()
        .and_then(|game| {
            cli::survey::execute(game, towns, visits, seed, threads, format, progress)
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
