mod app;
mod banner;
mod canvas;
mod input;

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    sync::Mutex,
    time::Instant,
};

use picpuzzle_core::{AppConfig, AssetLibrary};
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging()?;

    let config = AppConfig::load()?;
    let assets = AssetLibrary::new(config.asset_dir.clone());
    if assets.ensure_exists()? {
        println!(
            "Created {}. Add some pictures there to play.",
            assets.root().display()
        );
    } else if assets.candidates().map(|files| files.is_empty()).unwrap_or(false) {
        println!(
            "{} has no pictures yet. Add some to play.",
            assets.root().display()
        );
    }

    let mut app = app::PuzzleApp::new(config, Instant::now());
    app.run().await
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("picpuzzle.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .compact()
        .with_writer(Mutex::new(log_file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
