//! Data file errors.

use std::path::PathBuf;
use thiserror::Error;

/// Why a data file could not become a [`Resume`](super::Resume).
#[derive(Debug, Error)]
pub enum DataError {
    #[error("`{0}` not found")]
    NotFound(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` is empty")]
    Empty(PathBuf),

    /// Syntax errors and schema mismatches; the message carries line/column.
    #[error("invalid resume data in `{path}`: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("required field `{field}` is empty in `{path}`")]
    MissingField { path: PathBuf, field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DataError::MissingField {
            path: PathBuf::from("resume.yaml"),
            field: "name",
        };
        assert_eq!(err.to_string(), "required field `name` is empty in `resume.yaml`");
        assert!(DataError::Empty(PathBuf::from("cv.yaml")).to_string().contains("cv.yaml"));
    }
}
