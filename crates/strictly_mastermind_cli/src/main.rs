//! Strictly Mastermind - console game
//!
//! Logs go to stderr so they never interleave with the game prompts.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_mastermind_cli::cli::{Cli, Command, PlayArgs, ScoreArgs};
use strictly_mastermind_cli::{
    AppConfig, ConsoleSink, ConsoleSource, FixedSupplier, NumberSupplier, build_supplier, play,
    score_once, start_game,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play(args) => run_play(config, args).await,
        Command::Score(args) => run_score(config, args),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
async fn run_play(config: AppConfig, args: PlayArgs) -> Result<()> {
    let config = args.apply(config);

    let supplier: Box<dyn NumberSupplier> = match &args.secret {
        Some(values) => Box::new(FixedSupplier::new(values.clone())),
        None => build_supplier(config.supplier())?,
    };
    info!(supplier = supplier.name(), "Fetching secret");

    let mut session = start_game(supplier.as_ref(), *config.game())
        .await
        .context("Could not start a game; try again or use --local")?;

    let stdin = std::io::stdin();
    let mut source = ConsoleSource::new(stdin.lock());
    let mut sink = ConsoleSink::new(std::io::stdout());
    play(&mut session, &mut source, &mut sink)?;

    Ok(())
}

/// Score a single guess and print the result
#[instrument(skip(config))]
fn run_score(config: AppConfig, args: ScoreArgs) -> Result<()> {
    let game = args.apply(*config.game());
    let report = score_once(args.secret, args.guess, game)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let marks = report
            .marks()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("[{}] {}", marks, report.feedback());
    }

    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
