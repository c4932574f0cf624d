//! Main Entrypoint for the Rover Console
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Initializing logging.
//! 3. Building the in-memory mission the rover operates in.
//! 4. Running a single operator session on the terminal until it ends.

use anyhow::Context;
use clap::Parser;
use rover_console::{
    config::Config,
    console::{ConsoleInput, ConsoleNotifier},
};
use rover_core::{Collaborators, Session, mission::MarsMission, planet::Planet};
use std::sync::Arc;
use tracing::info;

/// Operates a rover on a simulated planet surface through an interactive menu.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
    info!("Configuration loaded. Preparing mission...");

    // --- 3. Build the Mission ---
    let planet = Planet::new(
        config.planet_name.clone(),
        config.planet_width,
        config.planet_height,
        config.obstacles.iter().copied(),
    )
    .context("Failed to build planet from configuration")?;
    let mission = Arc::new(MarsMission::new(planet));
    info!(
        planet = %config.planet_name,
        width = config.planet_width,
        height = config.planet_height,
        obstacles = config.obstacles.len(),
        "Mission ready. Establishing connection..."
    );

    // --- 4. Run the Session ---
    let mut session = Session::new(
        Collaborators::from_shared(mission),
        ConsoleInput::stdio(),
        ConsoleNotifier::stdout(),
    );
    session.run().await.context("Rover session ended abnormally")?;

    info!("Connection closed.");
    Ok(())
}
