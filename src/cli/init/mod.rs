//! `vita init`: scaffold a data file and a config file.
//!
//! Existing files are never overwritten; if either target exists nothing
//! is written.

use crate::config::{CONFIG_FILE, VitaConfig};
use crate::embed::init::{CONFIG_TEMPLATE, SAMPLE_RESUME};
use crate::log;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

/// Write the sample resume and config template.
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn new_resume(config: &VitaConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{CONFIG_TEMPLATE}");
        return Ok(());
    }

    let files = targets(config);
    let existing: Vec<_> = files
        .iter()
        .filter(|(path, _)| path.exists())
        .map(|(path, _)| config.root_relative(path).display().to_string())
        .collect();
    if !existing.is_empty() {
        bail!(
            "{} already exists, refusing to overwrite.\n\
             Remove it or run `vita init` in another directory.",
            existing.join(", ")
        );
    }

    for (path, content) in &files {
        fs::write(path, content)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        log!("init"; "created {}", config.root_relative(path).display());
    }

    log!("init"; "run `vita` to build and watch");
    Ok(())
}

/// Data file (honouring `--input`) and config file in the root.
fn targets(config: &VitaConfig) -> [(PathBuf, &'static str); 2] {
    [
        (config.paths.input.clone(), SAMPLE_RESUME),
        (config.get_root().join(CONFIG_FILE), CONFIG_TEMPLATE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_both_files() {
        let dir = TempDir::new().unwrap();
        let config = test_config("", dir.path());

        new_resume(&config, false).unwrap();

        assert_eq!(fs::read_to_string(&config.paths.input).unwrap(), SAMPLE_RESUME);
        let written = fs::read_to_string(config.get_root().join(CONFIG_FILE)).unwrap();
        assert_eq!(written, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let config = test_config("", dir.path());
        fs::write(&config.paths.input, "name: Mine\n").unwrap();

        let err = new_resume(&config, false).unwrap_err();
        assert!(err.to_string().contains("resume.yaml"));
        assert_eq!(fs::read_to_string(&config.paths.input).unwrap(), "name: Mine\n");
        assert!(!config.get_root().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_templates_are_valid() {
        let config: VitaConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.input.path, PathBuf::from("resume.yaml"));

        let loaded =
            crate::resume::parse(SAMPLE_RESUME, std::path::Path::new("resume.yaml")).unwrap();
        assert!(loaded.ignored.is_empty());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = test_config("", dir.path());
        new_resume(&config, true).unwrap();
        assert!(!config.paths.input.exists());
    }
}
