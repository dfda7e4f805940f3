// In src/main.rs

// Declare modules
pub mod config;
pub mod glyph;
pub mod grid;
pub mod point;
pub mod renderer;
pub mod spiral;

use crate::{config::CONFIG, renderer::SpiralRenderer};

// Logging
use anyhow::Context; // For context on Results
use log::{debug, info};
use std::io::{self, BufWriter};

/// Main entry point for `console-spiral`.
fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the grid.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting console-spiral...");

    CONFIG.validate().context("Invalid configuration")?;
    debug!(
        "Configuration: {}",
        serde_json::to_string(&*CONFIG).context("Failed to serialize configuration")?
    );

    let mut renderer = SpiralRenderer::new(&CONFIG);
    let report = renderer.fill_from_config();
    info!(
        "Spiral filled {} cells ({} points accepted).",
        renderer.grid().filled_count(),
        report.accepted
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    renderer
        .render(&mut out)
        .context("Failed to write spiral to stdout")?;

    info!("console-spiral exited successfully.");
    Ok(())
}
