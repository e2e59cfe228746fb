//! Prime Game - CLI
//!
//! Plays Maria and Ben's prime game from command-line or file input.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use prime_game::{GameConfig, PrimeTable, play};
use serde::Serialize;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        None => run_play(PlayArgs::default()),
        Some(Command::Play(args)) => run_play(args),
        Some(Command::Sieve { limit, json }) => run_sieve(limit, json),
    }
}

/// Play one game and print the winner
#[instrument(skip_all)]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => {
            info!("No game file given, using the example game");
            GameConfig::default()
        }
    };
    let config = config.with_overrides(args.rounds, args.numbers);

    let report = play(*config.rounds(), config.numbers());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Winner: {}", report.outcome());
    }

    Ok(())
}

/// Primes up to a limit, as printed by `sieve --json`.
#[derive(Debug, Serialize)]
struct SieveReport {
    limit: usize,
    count: usize,
    primes: Vec<usize>,
}

/// Print the primes up to `limit`
#[instrument]
fn run_sieve(limit: usize, json: bool) -> Result<()> {
    let table = PrimeTable::new(limit);
    let primes: Vec<usize> = table.primes().collect();
    info!(count = primes.len(), "Sieve finished");

    if json {
        let report = SieveReport {
            limit,
            count: primes.len(),
            primes,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let listed: Vec<String> = primes.iter().map(ToString::to_string).collect();
        println!("Primes up to {}: {}", limit, primes.len());
        if !listed.is_empty() {
            println!("{}", listed.join(" "));
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only results.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,prime_game=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
