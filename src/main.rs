//! vita - resume builder: YAML in, HTML and PDF out, rebuilt on every save.

mod cli;
mod config;
mod convert;
mod core;
mod embed;
mod logger;
mod pipeline;
mod render;
mod resume;
mod utils;
mod watch;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::VitaConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = VitaConfig::load(&cli)?;

    match cli.command() {
        Commands::Init { dry } => cli::init::new_resume(&config, dry),
        Commands::Build => {
            if !cli::build::build_resume(&config) {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Watch { open } => cli::watch::watch_resume(&config, open),
    }
}
