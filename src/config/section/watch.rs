//! `[watch]` section.
//!
//! ```toml
//! [watch]
//! debounce_ms = 300       # quiet period before a rebuild
//! cooldown_ms = 500       # minimum gap between rebuilds
//! skip_unchanged = true   # skip PDF conversion when the HTML is identical
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Watch loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub debounce_ms: u64,
    pub cooldown_ms: u64,
    pub skip_unchanged: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            cooldown_ms: 500,
            skip_unchanged: true,
        }
    }
}

impl WatchConfig {
    pub const DEBOUNCE_MS: FieldPath = FieldPath::new("watch.debounce_ms");

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        // Editors emit several events per save; without a quiet period
        // every save converts more than once.
        if self.debounce_ms == 0 {
            diag.error_with_hint(
                Self::DEBOUNCE_MS,
                "must be greater than 0",
                "300 is a good default",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let watch = WatchConfig::default();
        assert_eq!(watch.debounce(), Duration::from_millis(300));
        assert_eq!(watch.cooldown(), Duration::from_millis(500));
        assert!(watch.skip_unchanged);
    }

    #[test]
    fn test_zero_debounce_rejected() {
        let watch: WatchConfig = toml::from_str("debounce_ms = 0").unwrap();
        let mut diag = ConfigDiagnostics::new();
        watch.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
