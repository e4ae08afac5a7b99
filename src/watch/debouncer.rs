//! Event coalescing for the data file.
//!
//! Pure timing and deduplication, no I/O besides path normalization. An
//! editor save usually arrives as a burst (truncate, write, chmod, or a
//! temp file renamed over the original); the debouncer turns each burst
//! into a single [`ChangeKind`].

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use notify::EventKind;
use notify::event::{ModifyKind, RenameMode};

use crate::config::WatchConfig;
use crate::utils::path::normalize_path;

/// What happened to the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
    Removed,
}

impl ChangeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Modified => "modified",
            Self::Removed => "removed",
        }
    }
}

pub struct Debouncer {
    /// Normalized data file path
    target: PathBuf,
    pending: Option<ChangeKind>,
    last_event: Option<Instant>,
    last_cycle: Option<Instant>,
    debounce: Duration,
    cooldown: Duration,
}

impl Debouncer {
    pub fn new(target: &Path, config: &WatchConfig) -> Self {
        Self {
            target: normalize_path(target),
            pending: None,
            last_event: None,
            last_cycle: None,
            debounce: config.debounce(),
            cooldown: config.cooldown(),
        }
    }

    /// Add a notify event, applying dedup rules:
    /// - Remove + Create/Modify → Create/Modify (file was restored)
    /// - Modify + Remove → Remove (file was deleted)
    /// - Create + Remove → nothing (appeared then vanished)
    /// - otherwise the first event wins
    pub fn add_event(&mut self, event: &notify::Event) {
        crate::debug!("watch"; "raw notify: {:?} {:?}", event.kind, event.paths);

        for (index, path) in event.paths.iter().enumerate() {
            if path != &self.target && (is_temp_file(path) || !self.is_target(path)) {
                continue;
            }
            let Some(kind) = classify(&event.kind, index, path) else {
                continue;
            };
            self.record(kind);
        }
    }

    fn record(&mut self, kind: ChangeKind) {
        match (self.pending, kind) {
            (None, _) => self.pending = Some(kind),
            (Some(ChangeKind::Removed), ChangeKind::Created | ChangeKind::Modified) => {
                crate::debug!("watch"; "restore removed->{}", kind.label());
                self.pending = Some(kind);
            }
            (Some(ChangeKind::Modified), ChangeKind::Removed) => {
                crate::debug!("watch"; "upgrade modified->removed");
                self.pending = Some(ChangeKind::Removed);
            }
            (Some(ChangeKind::Created), ChangeKind::Removed) => {
                crate::debug!("watch"; "discard created+removed");
                self.pending = None;
                self.last_event = None;
                return;
            }
            _ => {}
        }
        self.last_event = Some(Instant::now());
    }

    /// Compare by file name first so unrelated events skip the syscall.
    fn is_target(&self, path: &Path) -> bool {
        if path.file_name() != self.target.file_name() {
            return false;
        }
        match (path.parent(), self.target.parent()) {
            (Some(a), Some(b)) => normalize_path(a) == b,
            _ => false,
        }
    }

    /// Take the pending change if debounce + cooldown elapsed.
    pub fn take_if_ready(&mut self) -> Option<ChangeKind> {
        if !self.is_ready() {
            return None;
        }
        self.last_event = None;
        self.pending.take()
    }

    pub fn is_ready(&self) -> bool {
        let Some(last_event) = self.last_event else {
            return false;
        };

        if last_event.elapsed() < self.debounce {
            return false;
        }

        if let Some(last_cycle) = self.last_cycle
            && last_cycle.elapsed() < self.cooldown
        {
            return false;
        }

        self.pending.is_some()
    }

    /// Start the cooldown; call when a cycle finishes.
    pub fn cycle_finished(&mut self) {
        self.last_cycle = Some(Instant::now());
    }

    /// Precise sleep duration until next possible ready time.
    pub fn sleep_duration(&self) -> Duration {
        let (Some(last_event), Some(_)) = (self.last_event, self.pending) else {
            return Duration::from_secs(86400);
        };

        let debounce_remaining = self.debounce.saturating_sub(last_event.elapsed());

        let cooldown_remaining = self
            .last_cycle
            .map(|t| self.cooldown.saturating_sub(t.elapsed()))
            .unwrap_or(Duration::ZERO);

        debounce_remaining
            .max(cooldown_remaining)
            .max(Duration::from_millis(1))
    }
}

/// Map a notify event kind to a change of the path at `index`.
///
/// Metadata-only changes (mtime/atime/chmod) are ignored.
fn classify(kind: &EventKind, index: usize, path: &Path) -> Option<ChangeKind> {
    match kind {
        EventKind::Create(_) => Some(ChangeKind::Created),
        EventKind::Remove(_) => Some(ChangeKind::Removed),
        EventKind::Modify(ModifyKind::Metadata(_)) => None,
        EventKind::Modify(ModifyKind::Name(mode)) => Some(match mode {
            RenameMode::From => ChangeKind::Removed,
            RenameMode::To => ChangeKind::Modified,
            // paths = [from, to]
            RenameMode::Both if index == 0 => ChangeKind::Removed,
            RenameMode::Both => ChangeKind::Modified,
            _ if path.exists() => ChangeKind::Modified,
            _ => ChangeKind::Removed,
        }),
        EventKind::Modify(_) => Some(ChangeKind::Modified),
        _ => None,
    }
}

/// Check if path is a temp/backup file (editor artifacts).
pub(super) fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "swx" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
        || name.starts_with('#')
        || name == "4913"
}
