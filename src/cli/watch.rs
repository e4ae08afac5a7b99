//! `vita watch`: initial build, then rebuild on every save.

use crate::config::VitaConfig;
use crate::core::is_shutdown;
use crate::logger::{status_detach, status_warning};
use crate::pipeline::Pipeline;
use crate::utils::exec::Cmd;
use crate::watch::{ChangeKind, Watcher};
use crate::{debug, log};
use anyhow::Result;

/// Build once, optionally open the viewer, then watch until Ctrl+C.
///
/// A failed cycle (initial or later) is reported and watching continues.
pub fn watch_resume(config: &VitaConfig, open: bool) -> Result<()> {
    // Watcher first, so a save during the initial build is not lost
    let watcher = Watcher::new(&config.paths.input, &config.watch)?;
    log!(
        "watch";
        "watching {} (Ctrl+C to stop)",
        config.root_relative(&config.paths.input).display()
    );

    let mut pipeline = Pipeline::new(config);
    let result = pipeline.run(false);
    pipeline.report(&result);

    if open {
        open_viewer(config);
    }

    watcher.run(|change| on_change(config, &mut pipeline, change), is_shutdown)?;

    status_detach();
    log!("watch"; "stopping watcher");
    log!("watch"; "Goodbye");
    Ok(())
}

/// Handle one debounced change of the data file.
fn on_change(config: &VitaConfig, pipeline: &mut Pipeline, change: ChangeKind) {
    if change == ChangeKind::Removed {
        status_warning(&format!(
            "{} removed; keeping the last build until it reappears",
            config.root_relative(&config.paths.input).display()
        ));
        return;
    }

    let result = pipeline.run(false);
    pipeline.report(&result);
}

/// Launch the configured viewer on the PDF, if there is one to show.
fn open_viewer(config: &VitaConfig) {
    let pdf = &config.paths.pdf;
    if !config.convert.enable || !pdf.is_file() {
        debug!("viewer"; "no PDF to open");
        return;
    }

    if let Err(e) = Cmd::from_slice(&config.viewer.command).arg(pdf).spawn() {
        status_detach();
        log!("viewer"; "{e:#}");
    }
}
