//! Shutdown state for watch mode.
//!
//! The Ctrl+C handler only flips `SHUTDOWN`; the watch loop polls it
//! between events and exits on its own thread.

use std::sync::atomic::{AtomicBool, Ordering};

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Setup the global Ctrl+C handler. Call once at program start
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(request_shutdown)?;
    Ok(())
}

/// Ask the watch loop to stop.
pub fn request_shutdown() {
    SHUTDOWN.store(true, Ordering::SeqCst);
}

/// Check if shutdown has been requested
///
/// Relaxed is enough: the loop re-checks every poll interval.
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}
