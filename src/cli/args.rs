//! Command-line interface definitions.

use crate::config::Engine;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Resume generator: YAML in, HTML and PDF out, rebuilt on every save
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: vita.toml, searched upward; optional)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Resume data file (default: resume.yaml)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// HTML artifact path
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub html: Option<PathBuf>,

    /// PDF artifact path
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub pdf: Option<PathBuf>,

    /// PDF engine
    #[arg(short, long, global = true)]
    pub engine: Option<Engine>,

    /// Write the HTML only, skip PDF conversion
    #[arg(long, global = true)]
    pub no_pdf: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands (default: watch)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build once, then rebuild whenever the data file is saved
    #[command(visible_alias = "w")]
    Watch {
        /// Open the PDF in the configured viewer after the first build
        #[arg(short, long)]
        open: bool,
    },

    /// Build the HTML and PDF once
    #[command(visible_alias = "b")]
    Build,

    /// Write a sample resume.yaml and vita.toml into the current directory
    #[command(visible_alias = "i")]
    Init {
        /// Print the config template instead of writing files
        #[arg(short, long)]
        dry: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Watch { open: false }
    }
}

impl Cli {
    /// Selected command; no subcommand means `watch`.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }

    pub fn is_init(&self) -> bool {
        matches!(self.command, Some(Commands::Init { .. }))
    }

    pub fn wants_open(&self) -> bool {
        matches!(self.command(), Commands::Watch { open: true })
    }
}
