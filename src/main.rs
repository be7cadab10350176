//! # Scribe
//!
//! Demo host for the rich-text editor plugin layer.
//!
//! ```bash
//! # Run with the config from the default location
//! cargo run
//!
//! # Run with an explicit config and string catalog
//! cargo run -- --config scribe.toml --catalog fr.toml -vv
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scribe_core::{Catalog, Config};
use scribe_ui::{Flags, run};

/// Scribe - rich-text editor plugin layer demo
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// String catalog layered over the built-in English strings
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Scribe v{}", env!("CARGO_PKG_VERSION"));

    let flags = load_flags(&args)?;

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

/// Resolves config and catalog. An explicitly named file must load; the
/// default config location silently falls back to defaults.
fn load_flags(args: &Args) -> anyhow::Result<Flags> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load(),
    };

    let catalog_path = args.catalog.as_ref().or(config.locale.catalog.as_ref());
    let catalog = match catalog_path {
        Some(path) => Catalog::load_from(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::english(),
    };

    Ok(Flags { config, catalog })
}
