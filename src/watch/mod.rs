//! Data file watcher.
//!
//! ```text
//! notify thread ──channel──▶ Debouncer ──ChangeKind──▶ on_change (main thread)
//! ```
//!
//! The watcher observes the data file's parent directory, since many editors
//! save by writing a temp file and renaming it over the original, which
//! replaces the inode a file watch would be attached to. Events for any
//! other path are dropped by the [`Debouncer`].
//!
//! Cycles run on the caller's thread, so they never overlap. Events that
//! arrive during a cycle wait in the channel.

mod debouncer;

pub use debouncer::{ChangeKind, Debouncer};

use crate::config::WatchConfig;
use crate::{debug, log};
use anyhow::{Context, Result, bail};
use notify::{RecommendedWatcher, RecursiveMode, Watcher as _};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

/// Upper bound on one wait, so a shutdown request is noticed promptly.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Watcher {
    notify_rx: mpsc::Receiver<notify::Result<notify::Event>>,
    /// Watcher handle (must be kept alive)
    _watcher: RecommendedWatcher,
    debouncer: Debouncer,
}

impl Watcher {
    /// Start watching `target` immediately.
    ///
    /// Events are buffered while the caller runs the initial build, so a
    /// save during that build is not lost.
    pub fn new(target: &Path, config: &WatchConfig) -> Result<Self> {
        let (notify_tx, notify_rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = notify_tx.send(res);
        })
        .context("Failed to create file watcher")?;

        let dir = match target.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", dir.display()))?;
        debug!("watch"; "watching {} for {}", dir.display(), target.display());

        Ok(Self {
            notify_rx,
            _watcher: watcher,
            debouncer: Debouncer::new(target, config),
        })
    }

    /// Block until `stop` returns true, calling `on_change` once per burst.
    pub fn run(
        mut self,
        mut on_change: impl FnMut(ChangeKind),
        stop: impl Fn() -> bool,
    ) -> Result<()> {
        while !stop() {
            let timeout = self.debouncer.sleep_duration().min(POLL_INTERVAL);
            match self.notify_rx.recv_timeout(timeout) {
                Ok(Ok(event)) => self.debouncer.add_event(&event),
                Ok(Err(e)) => log!("watch"; "watcher error: {e}"),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => bail!("file watcher stopped unexpectedly"),
            }

            if let Some(change) = self.debouncer.take_if_ready() {
                debug!("watch"; "data file {}", change.label());
                on_change(change);
                self.debouncer.cycle_finished();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use std::time::Instant;
    use tempfile::TempDir;

    fn fast() -> WatchConfig {
        WatchConfig {
            debounce_ms: 50,
            cooldown_ms: 50,
            skip_unchanged: true,
        }
    }

    /// Run the watcher until `want` changes were seen or the deadline passes.
    fn collect(watcher: Watcher, want: usize, act: impl FnOnce() + Send + 'static) -> Vec<ChangeKind> {
        let seen = RefCell::new(Vec::new());
        let deadline = Instant::now() + Duration::from_secs(10);

        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(100));
            act();
        });
        watcher
            .run(
                |change| seen.borrow_mut().push(change),
                || seen.borrow().len() >= want || Instant::now() > deadline,
            )
            .unwrap();
        handle.join().unwrap();
        seen.into_inner()
    }

    #[test]
    fn test_save_triggers_one_change() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.yaml");
        fs::write(&path, "name: Jane\n").unwrap();

        let watcher = Watcher::new(&path, &fast()).unwrap();
        let target = path.clone();
        let html = dir.path().join("resume.html");
        let seen = collect(watcher, 1, move || {
            fs::write(html, "<html/>").unwrap();
            fs::write(&target, "name: Jane Doe\n").unwrap();
        });

        assert_eq!(seen.len(), 1);
        assert_ne!(seen[0], ChangeKind::Removed);
    }

    #[test]
    fn test_stop_returns_immediately() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.yaml");
        let watcher = Watcher::new(&path, &fast()).unwrap();

        let started = Instant::now();
        watcher.run(|_| panic!("no change expected"), || true).unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
