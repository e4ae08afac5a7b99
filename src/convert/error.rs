//! Conversion errors.

use std::path::PathBuf;
use thiserror::Error;

/// Why the PDF could not be produced. The previous PDF is untouched.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no PDF engine found (tried {})", .tried.join(", "))]
    NoEngine { tried: Vec<&'static str> },

    #[error("`{0}` is not installed")]
    NotInstalled(&'static str),

    #[error("convert.command is empty")]
    EmptyCommand,

    #[error("{engine} failed: {message}")]
    Failed { engine: String, message: String },

    #[error("{0} exited successfully but wrote no PDF")]
    EmptyOutput(String),

    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}
