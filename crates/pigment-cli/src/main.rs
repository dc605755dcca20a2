//! Pigment CLI — command-line front end for the color matching engine.
//!
//! Owns all I/O: reads catalog and paint set JSON files, runs one engine
//! operation, and prints the JSON result on stdout. Logs go to stderr.

mod cli;
mod commands;
mod config;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use pigment_core::matching::MatchOptions;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = config::load(args.config.as_deref())?;

    let output = match args.command {
        Command::Lab { hex } => commands::lab(&hex)?,
        Command::DeltaE { first, second } => commands::delta_e(&first, &second, &config)?,
        Command::Match {
            catalog,
            hex,
            max,
            brands,
            max_delta_e,
        } => {
            if let Some(max) = max {
                config.max_results = max;
            }
            let catalog = commands::load_catalog(&catalog)?;
            let options = MatchOptions {
                max_results: config.max_results,
                brands,
                max_delta_e,
            };
            commands::match_colors(&catalog, &hex, &options, &config)?
        }
        Command::Roles {
            catalog,
            colors,
            per_color,
        } => {
            if let Some(per_color) = per_color {
                config.matches_per_color = per_color;
            }
            let catalog = commands::load_catalog(&catalog)?;
            commands::match_roles(&catalog, &colors, &config)?
        }
        Command::Resolve { catalog, set } => {
            let catalog = commands::load_catalog(&catalog)?;
            let sets = commands::load_sets(&set)?;
            commands::resolve(&catalog, &sets)?
        }
    };

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &output)?;
    writeln!(stdout)?;
    Ok(())
}

/// Install the stderr log subscriber. `-v` flags take precedence over
/// `RUST_LOG`; without either, only warnings are shown.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
