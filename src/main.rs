// Mastermind - command-line client for the remote guessing game
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;

use mastermind::cli::{display, GameRepl};
use mastermind::client::GameClient;
use mastermind::config::load_config;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "mastermind")]
#[command(about = "Interactive client for a remote Mastermind server", version)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    let _args = Args::parse();

    init_tracing();

    let config = load_config()?;
    let client = GameClient::new(&config)?;

    display::print_header("Welcome to Mastermind");
    println!("Starting a new game...");

    // The one fatal path: no session means nothing to play, exit non-zero.
    let session = client.create_game().await.context("Failed to start game")?;

    GameRepl::new(client, session).run_interactive().await
}

fn init_tracing() {
    // Logs go to stderr so they never interleave with the game display.
    // Default to warnings only; RUST_LOG overrides.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
