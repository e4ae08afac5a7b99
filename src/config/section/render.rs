//! `[render]` section.
//!
//! ```toml
//! [render]
//! stylesheet = "tweaks.css"   # appended after the built-in style
//! ```

use crate::config::FieldPath;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// HTML rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Extra CSS file appended after the built-in stylesheet.
    pub stylesheet: Option<PathBuf>,
}

impl RenderConfig {
    pub const STYLESHEET: FieldPath = FieldPath::new("render.stylesheet");
}
