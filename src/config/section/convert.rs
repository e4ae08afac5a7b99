//! `[convert]` section.
//!
//! # Example
//!
//! ```toml
//! [convert]
//! enable = true
//! engine = "auto"   # auto | weasyprint | wkhtmltopdf | chromium | command
//!
//! # engine = "command": {input} and {output} are substituted
//! command = ["pandoc", "{input}", "-o", "{output}"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// HTML-to-PDF engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// First installed of weasyprint, wkhtmltopdf, chromium.
    #[default]
    Auto,
    Weasyprint,
    Wkhtmltopdf,
    /// Headless Chromium or Chrome.
    Chromium,
    /// User command from `convert.command`.
    Command,
}

impl Engine {
    /// Concrete engines probed by `Auto`, in preference order.
    pub const PROBE_ORDER: [Engine; 3] = [Engine::Weasyprint, Engine::Wkhtmltopdf, Engine::Chromium];

    /// Executable names that provide this engine.
    pub const fn programs(self) -> &'static [&'static str] {
        match self {
            Self::Weasyprint => &["weasyprint"],
            Self::Wkhtmltopdf => &["wkhtmltopdf"],
            Self::Chromium => &[
                "chromium",
                "chromium-browser",
                "google-chrome",
                "google-chrome-stable",
            ],
            Self::Auto | Self::Command => &[],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Weasyprint => "weasyprint",
            Self::Wkhtmltopdf => "wkhtmltopdf",
            Self::Chromium => "chromium",
            Self::Command => "command",
        }
    }
}

/// PDF conversion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Produce the PDF at all (false: HTML only).
    pub enable: bool,
    pub engine: Engine,
    /// Command for `engine = "command"`.
    pub command: Vec<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            enable: true,
            engine: Engine::Auto,
            command: Vec::new(),
        }
    }
}

impl ConvertConfig {
    pub const ENGINE: FieldPath = FieldPath::new("convert.engine");
    pub const COMMAND: FieldPath = FieldPath::new("convert.command");

    pub const INPUT_PLACEHOLDER: &'static str = "{input}";
    pub const OUTPUT_PLACEHOLDER: &'static str = "{output}";

    /// Validate the engine choice.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        match self.engine {
            Engine::Command => self.validate_command(diag),
            Engine::Auto => {
                let found = Engine::PROBE_ORDER
                    .iter()
                    .flat_map(|e| e.programs())
                    .any(|p| which::which(p).is_ok());
                if !found {
                    diag.hint(
                        Self::ENGINE,
                        "no PDF engine found (weasyprint, wkhtmltopdf, chromium); pass --no-pdf to write HTML only",
                    );
                }
            }
            engine => {
                if !engine.programs().iter().any(|p| which::which(p).is_ok()) {
                    diag.error_with_hint(
                        Self::ENGINE,
                        format!("`{}` not found", engine.name()),
                        "install it, pick another engine, or pass --no-pdf",
                    );
                }
            }
        }
    }

    fn validate_command(&self, diag: &mut ConfigDiagnostics) {
        let Some(program) = self.command.first() else {
            diag.error(
                Self::COMMAND,
                format!("{} is \"command\" but {} is empty", Self::ENGINE, Self::COMMAND),
            );
            return;
        };

        if which::which(program).is_err() {
            diag.error_with_hint(
                Self::COMMAND,
                format!("`{program}` not found"),
                format!("install the command or update {}", Self::COMMAND),
            );
        }

        if !self.command.iter().any(|a| a.contains(Self::OUTPUT_PLACEHOLDER)) {
            diag.error_with_hint(
                Self::COMMAND,
                format!("missing `{}` placeholder", Self::OUTPUT_PLACEHOLDER),
                "the engine must write the PDF to {output}",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        convert: ConvertConfig,
    }

    fn parse(s: &str) -> ConvertConfig {
        toml::from_str::<Wrapper>(&format!("[convert]\n{s}")).unwrap().convert
    }

    #[test]
    fn test_engine_parse() {
        assert_eq!(parse("engine = \"weasyprint\"").engine, Engine::Weasyprint);
        assert_eq!(parse("").engine, Engine::Auto);
        assert!(toml::from_str::<Wrapper>("[convert]\nengine = \"prince\"").is_err());
    }

    #[test]
    fn test_empty_command_rejected() {
        let mut diag = ConfigDiagnostics::new();
        parse("engine = \"command\"").validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_command_needs_output_placeholder() {
        let mut diag = ConfigDiagnostics::new();
        parse("engine = \"command\"\ncommand = [\"cp\", \"{input}\", \"out.pdf\"]").validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("{output}"));

        let mut diag = ConfigDiagnostics::new();
        parse("engine = \"command\"\ncommand = [\"cp\", \"{input}\", \"{output}\"]").validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_disabled_skips_validation() {
        let mut diag = ConfigDiagnostics::new();
        parse("enable = false\nengine = \"command\"").validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_programs() {
        assert!(Engine::Chromium.programs().contains(&"chromium"));
        assert!(Engine::Auto.programs().is_empty());
    }
}
