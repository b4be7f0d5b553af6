//! Ring buffer demo entry point.
//!
//! Pushes the configured values, erases the inner range and prints the
//! survivors to stdout. Logs go to stderr.

mod app;
mod config;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting ringkit demo");

    let config = config::Config::load()?;
    tracing::info!(
        capacity = config.capacity,
        policy = ?config.policy,
        values = config.values.len(),
        "configuration loaded"
    );

    let buffer = app::build(&config)?;
    println!("{}", app::render(&buffer, config.format)?);
    Ok(())
}
