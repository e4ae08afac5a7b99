//! The render-then-convert cycle.
//!
//! ```text
//! resume.yaml ──load──▶ Resume ──render──▶ resume.html ──convert──▶ resume.pdf
//! ```
//!
//! A cycle either finishes or stops at the first failure. Artifacts are only
//! ever replaced whole, so a failed cycle leaves the previous HTML and PDF
//! on disk for the viewer.
//!
//! | Failure             | Reported as                | Artifacts kept |
//! |---------------------|----------------------------|----------------|
//! | data file invalid   | [`CycleError::Data`]       | HTML, PDF      |
//! | stylesheet missing  | [`CycleError::Stylesheet`] | HTML, PDF      |
//! | template failed     | [`CycleError::Render`]     | HTML, PDF      |
//! | HTML not writable   | [`CycleError::WriteHtml`]  | HTML, PDF      |
//! | engine failed       | [`CycleError::Convert`]    | PDF            |

use crate::config::VitaConfig;
use crate::convert::{self, ConvertError};
use crate::logger::{status_detach, status_error, status_success, status_unchanged};
use crate::resume::{self, DataError};
use crate::utils::hash::ContentHash;
use crate::{debug, log, render};
use std::error::Error as _;
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

/// What a successful cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// HTML and PDF replaced; carries the engine label.
    Built { engine: String },
    /// HTML replaced, conversion disabled.
    HtmlOnly,
    /// Rendered HTML identical to the last cycle, nothing touched.
    Unchanged,
}

/// Result of a successful cycle.
#[derive(Debug)]
pub struct Report {
    pub outcome: Outcome,
    /// Data file keys the layout does not use.
    pub ignored: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("cannot read stylesheet `{0}`")]
    Stylesheet(PathBuf, #[source] io::Error),

    #[error("cannot render HTML")]
    Render(#[from] askama::Error),

    #[error("cannot write `{0}`")]
    WriteHtml(PathBuf, #[source] io::Error),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl CycleError {
    /// One-line status summary.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Data(_) => "resume not rendered",
            Self::Stylesheet(..) | Self::Render(_) | Self::WriteHtml(..) => "HTML not written",
            Self::Convert(_) => "PDF not updated",
        }
    }

    /// The error and its causes, one per line.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            // Transparent variants already print part of the chain
            let line = cause.to_string();
            if !detail.contains(&line) {
                detail.push('\n');
                detail.push_str(&line);
            }
            source = cause.source();
        }
        detail
    }
}

/// Runs cycles for one configuration, remembering the last HTML it wrote.
pub struct Pipeline<'a> {
    config: &'a VitaConfig,
    last_html: Option<ContentHash>,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a VitaConfig) -> Self {
        Self {
            config,
            last_html: None,
        }
    }

    /// Run one cycle.
    ///
    /// With `force`, conversion runs even when the HTML did not change.
    pub fn run(&mut self, force: bool) -> Result<Report, CycleError> {
        let paths = &self.config.paths;

        let loaded = resume::load(&paths.input)?;
        let extra_css = match &paths.stylesheet {
            Some(path) => {
                Some(fs::read_to_string(path).map_err(|e| CycleError::Stylesheet(path.clone(), e))?)
            }
            None => None,
        };

        let html = render::render(&loaded.resume, extra_css.as_deref())?;
        let hash = ContentHash::of(&html);

        if !force && self.config.watch.skip_unchanged && self.is_fresh(hash) {
            debug!("pipeline"; "html {hash} unchanged, skipping");
            return Ok(Report {
                outcome: Outcome::Unchanged,
                ignored: loaded.ignored,
            });
        }

        // A failed cycle must not count as the baseline for the next one
        self.last_html = None;

        render::write_html(&paths.html, &html)
            .map_err(|e| CycleError::WriteHtml(paths.html.clone(), e))?;
        debug!("pipeline"; "wrote {} ({hash})", paths.html.display());

        let outcome = if self.config.convert.enable {
            let resolved = convert::convert(&self.config.convert, &paths.html, &paths.pdf)?;
            Outcome::Built {
                engine: resolved.label(),
            }
        } else {
            Outcome::HtmlOnly
        };

        self.last_html = Some(hash);
        Ok(Report {
            outcome,
            ignored: loaded.ignored,
        })
    }

    /// Whether the artifacts on disk already match `hash`.
    fn is_fresh(&self, hash: ContentHash) -> bool {
        let paths = &self.config.paths;
        self.last_html == Some(hash)
            && paths.html.is_file()
            && (!self.config.convert.enable || paths.pdf.is_file())
    }

    /// Print the status line for a cycle.
    pub fn report(&self, result: &Result<Report, CycleError>) {
        let input = self.display(&self.config.paths.input);
        match result {
            Ok(report) => {
                if !report.ignored.is_empty() {
                    status_detach();
                    log!("warning"; "unknown keys in {} (ignored): {}", input, report.ignored.join(", "));
                }
                match &report.outcome {
                    Outcome::Built { engine } => status_success(&format!(
                        "{} → {} ({engine})",
                        self.display(&self.config.paths.html),
                        self.display(&self.config.paths.pdf),
                    )),
                    Outcome::HtmlOnly => status_success(&format!(
                        "{} updated",
                        self.display(&self.config.paths.html)
                    )),
                    Outcome::Unchanged => status_unchanged(&format!("{input} (no visible change)")),
                }
            }
            Err(e) => status_error(&format!("{}: {input}", e.summary()), &e.detail()),
        }
    }

    fn display(&self, path: &Path) -> String {
        self.config.root_relative(path).display().to_string()
    }
}
