//! Strictly Mastermind host - suppliers, config and console play
//!
//! Wires the pure [`strictly_mastermind`] core to the outside world.
//!
//! # Architecture
//!
//! - **Suppliers**: random.org over HTTP, a seeded local generator, or a
//!   fixed sequence; awaited once before a session exists
//! - **Config**: TOML file with CLI overrides
//! - **Console**: line-based guess source and plain-text result sink
//! - **Loop**: drives a session until it is won, lost or abandoned
//!
//! # Example
//!
//! ```
//! use strictly_mastermind::GameConfig;
//! use strictly_mastermind_cli::{play, start_game, ConsoleSink, ConsoleSource, FixedSupplier};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let supplier = FixedSupplier::new(vec![1, 2]);
//! let mut session = start_game(&supplier, GameConfig::default()).await?;
//!
//! let mut source = ConsoleSource::new("2 1\n1 2\n".as_bytes());
//! let mut sink = ConsoleSink::new(Vec::new());
//! let report = play(&mut session, &mut source, &mut sink)?;
//! assert_eq!(*report.attempts_used(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod console;
mod error;
mod game_loop;
mod score;
mod supplier;

pub use config::{AppConfig, RANDOM_ORG_ENDPOINT, SupplierConfig, SupplierKind};
pub use console::{
    ConsoleLine, ConsoleSink, ConsoleSource, GuessInput, GuessSource, ResultSink, parse_line,
};
pub use error::{ConfigError, StartError, SupplierError};
pub use game_loop::{GameReport, play};
pub use score::{ScoreReport, score_once};
pub use supplier::{
    FixedSupplier, LocalSupplier, NumberSupplier, RandomOrgSupplier, build_supplier,
    parse_plain_response, start_game,
};
