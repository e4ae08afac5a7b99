//! `[viewer]` section.
//!
//! ```toml
//! [viewer]
//! command = ["zathura"]   # the PDF path is appended
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Viewer launched once by `vita watch --open`.
///
/// The viewer is expected to reload the PDF on its own afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Command and arguments; the PDF path is appended.
    pub command: Vec<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            command: default_viewer().iter().map(ToString::to_string).collect(),
        }
    }
}

fn default_viewer() -> &'static [&'static str] {
    if cfg!(target_os = "macos") {
        &["open"]
    } else if cfg!(windows) {
        &["cmd", "/C", "start", ""]
    } else {
        &["xdg-open"]
    }
}

impl ViewerConfig {
    pub const COMMAND: FieldPath = FieldPath::new("viewer.command");

    /// Validate viewer settings (only when `--open` is requested).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(program) = self.command.first() else {
            diag.error(Self::COMMAND, "`--open` was given but the viewer command is empty");
            return;
        };

        if which::which(program).is_err() {
            diag.error_with_hint(
                Self::COMMAND,
                format!("`{program}` not found"),
                format!("install it or set {}", Self::COMMAND),
            );
        }
    }
}
