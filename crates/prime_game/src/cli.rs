//! Command-line interface for prime_game.

use clap::{Args, Parser, Subcommand};

/// Prime Game - decide Maria and Ben's game from prime counts
#[derive(Parser, Debug)]
#[command(name = "prime_game")]
#[command(about = "Decide the winner of Maria and Ben's prime game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play` with the example game)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game and print the winner
    Play(PlayArgs),

    /// Print the primes up to a limit
    Sieve {
        /// Inclusive upper bound
        limit: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Arguments for `play`.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Number of rounds (games with fewer than one round have no winner)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rounds: Option<i64>,

    /// Comma-separated round numbers, e.g. `2,5,1,4,3`
    #[arg(short, long, value_delimiter = ',')]
    pub numbers: Option<Vec<usize>>,

    /// TOML file with `rounds` and `numbers`
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Emit the full JSON report instead of the winner line
    #[arg(long)]
    pub json: bool,
}
