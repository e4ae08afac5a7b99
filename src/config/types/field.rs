//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted path naming a `vita.toml` field in diagnostics.
///
/// Each section declares its fields as associated constants:
///
/// ```ignore
/// impl ConvertConfig {
///     pub const COMMAND: FieldPath = FieldPath::new("convert.command");
/// }
///
/// diag.error(ConvertConfig::COMMAND, "is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_as_str() {
        const PATH: FieldPath = FieldPath::new("watch.debounce_ms");
        assert_eq!(PATH.as_str(), "watch.debounce_ms");
        assert_eq!(PATH.as_ref(), "watch.debounce_ms");
    }
}
