//! Configuration management for `vita.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [input] [output] [render] [convert] [watch] [viewer]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file lookup
//! └── mod.rs         # VitaConfig (this file)
//! ```
//!
//! The config file is optional: without one, every section takes its
//! defaults and paths resolve against the current directory. CLI flags
//! override file values.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    ConvertConfig, Engine, InputConfig, OutputConfig, RenderConfig, ViewerConfig, WatchConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::Cli,
    debug, log,
    utils::path::{normalize_path, resolve_path},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the current directory.
pub const CONFIG_FILE: &str = "vita.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing vita.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitaConfig {
    /// Absolute path to the config file, if one was loaded (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory that relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Resolved artifact paths (internal use only)
    #[serde(skip)]
    pub paths: ArtifactPaths,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub convert: ConvertConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// Absolute paths of the data file and its artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub input: PathBuf,
    pub html: PathBuf,
    pub pdf: PathBuf,
    pub stylesheet: Option<PathBuf>,
}

impl VitaConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for `vita.toml` unless `--config` names a
    /// file, which must then exist. The root is the config file's parent
    /// directory, or cwd without a config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let config_path = if cli.is_init() {
            None
        } else {
            Self::resolve_config_path(cli, &cwd)?
        };

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| cwd.clone(), Path::to_path_buf);

        config.config_path = config_path.as_deref().map(normalize_path);
        config.apply_cli(cli);
        match &config.config_path {
            Some(path) => debug!("config"; "loaded {}", path.display()),
            None => debug!("config"; "no {CONFIG_FILE}, using defaults"),
        }
        config.finalize(&root);

        if !cli.is_init() {
            config.validate(cli)?;
        }

        Ok(config)
    }

    /// Locate the config file, if any.
    fn resolve_config_path(cli: &Cli, cwd: &Path) -> Result<Option<PathBuf>> {
        match &cli.config {
            Some(explicit) => {
                let path = if explicit.is_absolute() {
                    explicit.clone()
                } else {
                    cwd.join(explicit)
                };
                if !path.is_file() {
                    return Err(ConfigError::NotFound(explicit.clone()).into());
                }
                Ok(Some(path))
            }
            None => Ok(find_config_file(Path::new(CONFIG_FILE), cwd)),
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("in {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} (ignored): {}", display_path, fields.join(", "));
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply CLI overrides on top of file values.
    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.input.path, cli.input.as_ref());
        if cli.html.is_some() {
            self.output.html = cli.html.clone();
        }
        if cli.pdf.is_some() {
            self.output.pdf = cli.pdf.clone();
        }
        Self::update_option(&mut self.convert.engine, cli.engine.as_ref());
        if cli.no_pdf {
            self.convert.enable = false;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve every configured path against `root`.
    fn finalize(&mut self, root: &Path) {
        let root = normalize_path(root);

        let input = resolve_path(&self.input.path, &root);
        let html = resolve_path(&self.output.html_or(&self.input.path), &root);
        let pdf = resolve_path(&self.output.pdf_or(&self.input.path), &root);
        let stylesheet = self
            .render
            .stylesheet
            .as_deref()
            .map(|p| resolve_path(p, &root));

        self.paths = ArtifactPaths {
            input,
            html,
            pdf,
            stylesheet,
        };
        self.root = root;
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Path relative to the root, for display.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration for the current command.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self, cli: &Cli) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.convert.validate(&mut diag);
        self.watch.validate(&mut diag);

        if let Some(stylesheet) = &self.paths.stylesheet
            && !stylesheet.is_file()
        {
            diag.error_with_hint(
                RenderConfig::STYLESHEET,
                format!("`{}` not found", stylesheet.display()),
                "paths are relative to the directory holding vita.toml",
            );
        }

        if cli.wants_open() && self.convert.enable {
            self.viewer.validate(&mut diag);
        }

        if self.paths.html == self.paths.input || self.paths.pdf == self.paths.input {
            diag.error(
                FieldPath::new("output"),
                "an artifact path equals the input path; it would overwrite the data file",
            );
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse a config and resolve it against `root`, without touching the CLI.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_config(content: &str, root: &Path) -> VitaConfig {
    let (mut config, ignored) = VitaConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    config.finalize(root);
    config
}

// ============================================================================
// tests
// ============================================================================
