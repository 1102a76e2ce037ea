//! Command-line interface for strictly_mastermind.

use crate::{AppConfig, SupplierKind};
use strictly_mastermind::GameConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Mastermind - guess the hidden number sequence
#[derive(Parser, Debug)]
#[command(name = "mastermind")]
#[command(about = "Guess-the-code game scored by exact and present values", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "mastermind.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the console
    Play(PlayArgs),

    /// Score one guess against a given secret
    Score(ScoreArgs),
}

/// Options for an interactive game; each overrides the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// Length of the secret sequence
    #[arg(long)]
    pub length: Option<usize>,

    /// Smallest value (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i32>,

    /// Largest value (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i32>,

    /// Number of guesses allowed
    #[arg(long)]
    pub attempts: Option<usize>,

    /// Generate the secret locally instead of calling random.org
    #[arg(long)]
    pub local: bool,

    /// Seed for the local generator (implies --local)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use this secret instead of generating one, comma-separated
    #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    pub secret: Option<Vec<i32>>,
}

impl PlayArgs {
    /// Applies these overrides on top of `config`.
    ///
    /// A fixed secret also fixes the sequence length.
    pub fn apply(&self, config: AppConfig) -> AppConfig {
        let mut game = *config.game();
        if let Some(length) = self.length {
            game = game.with_sequence_length(length);
        }
        if let Some(secret) = &self.secret {
            game = game.with_sequence_length(secret.len());
        }
        game = game.with_range(
            self.min.unwrap_or(*game.number_min()),
            self.max.unwrap_or(*game.number_max()),
        );
        if let Some(attempts) = self.attempts {
            game = game.with_max_attempts(attempts);
        }

        let mut supplier = config.supplier().clone();
        if self.local || self.seed.is_some() {
            supplier = supplier.with_kind(SupplierKind::Local);
        }
        if self.seed.is_some() {
            supplier = supplier.with_seed(self.seed);
        }

        config.with_game(game).with_supplier(supplier)
    }
}

/// Options for one-shot scoring.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreArgs {
    /// Secret values, comma-separated
    #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    pub secret: Vec<i32>,

    /// Guess values, comma-separated
    #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    pub guess: Vec<i32>,

    /// Smallest value (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i32>,

    /// Largest value (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i32>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScoreArgs {
    /// Applies the range overrides on top of `game`.
    pub fn apply(&self, game: GameConfig) -> GameConfig {
        game.with_range(
            self.min.unwrap_or(*game.number_min()),
            self.max.unwrap_or(*game.number_max()),
        )
    }
}
