//! `[input]` and `[output]` sections.
//!
//! # Example
//!
//! ```toml
//! [input]
//! path = "resume.yaml"
//!
//! [output]
//! html = "build/resume.html"   # default: input path with .html
//! pdf = "resume.pdf"           # default: input path with .pdf
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Data file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Resume data file (YAML).
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("resume.yaml"),
        }
    }
}

/// Artifact locations. Unset paths follow the input file's stem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub html: Option<PathBuf>,
    pub pdf: Option<PathBuf>,
}

impl OutputConfig {
    /// HTML path, falling back to `<input>.html`.
    pub fn html_or(&self, input: &std::path::Path) -> PathBuf {
        self.html
            .clone()
            .unwrap_or_else(|| input.with_extension("html"))
    }

    /// PDF path, falling back to `<input>.pdf`.
    pub fn pdf_or(&self, input: &std::path::Path) -> PathBuf {
        self.pdf
            .clone()
            .unwrap_or_else(|| input.with_extension("pdf"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_outputs_follow_input_stem() {
        let output = OutputConfig::default();
        let input = Path::new("/cv/jane.yaml");
        assert_eq!(output.html_or(input), PathBuf::from("/cv/jane.html"));
        assert_eq!(output.pdf_or(input), PathBuf::from("/cv/jane.pdf"));
    }

    #[test]
    fn test_explicit_outputs_win() {
        let output: OutputConfig = toml::from_str("pdf = \"out/cv.pdf\"").unwrap();
        let input = Path::new("resume.yaml");
        assert_eq!(output.pdf_or(input), PathBuf::from("out/cv.pdf"));
        assert_eq!(output.html_or(input), PathBuf::from("resume.html"));
    }
}
