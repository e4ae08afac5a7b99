//! Resume data file loading.
//!
//! The data file is YAML. Loading never panics on user input: every
//! failure becomes a [`DataError`] the watch loop can report and survive.
//!
//! Keys the layout does not know are kept out of the model and returned
//! as dotted paths, so a typo like `responsibilites` is visible instead of
//! silently dropping a section.

mod error;
mod model;
mod text;

pub use error::DataError;
pub use model::{Education, Job, Project, Resume, Role, SkillGroup};
pub use text::Text;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// A parsed data file plus the keys it contained that the model ignores.
#[derive(Debug)]
pub struct Loaded {
    pub resume: Resume,
    pub ignored: Vec<String>,
}

/// Read and parse the data file at `path`.
pub fn load(path: &Path) -> Result<Loaded, DataError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataError::NotFound(path.to_path_buf()),
        _ => DataError::Io(path.to_path_buf(), e),
    })?;
    parse(&content, path)
}

/// Parse data file content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Loaded, DataError> {
    if content.trim().is_empty() {
        return Err(DataError::Empty(path.to_path_buf()));
    }

    let mut ignored = Vec::new();
    let deserializer = serde_yaml::Deserializer::from_str(content);
    let resume: Resume = serde_ignored::deserialize(deserializer, |p: serde_ignored::Path| {
        ignored.push(p.to_string());
    })
    .map_err(|source| DataError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    if resume.name.is_blank() {
        return Err(DataError::MissingField {
            path: path.to_path_buf(),
            field: "name",
        });
    }

    Ok(Loaded { resume, ignored })
}
