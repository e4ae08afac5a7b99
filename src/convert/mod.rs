//! HTML to PDF conversion through an external engine.
//!
//! The engine never writes the PDF directly: it prints into a hidden temp
//! file next to the target, which replaces the PDF only when the engine
//! succeeded and produced a non-empty file. A failed or missing engine
//! therefore leaves the last good PDF in place for the viewer.

mod engine;
mod error;

pub use engine::{Resolved, resolve};
pub use error::ConvertError;

use crate::config::ConvertConfig;
use crate::debug;
use crate::utils::{fs::commit, path::sibling_temp};
use std::fs;
use std::path::Path;

/// Convert the HTML artifact at `html` into `pdf`.
///
/// Returns the engine that did the work.
pub fn convert(config: &ConvertConfig, html: &Path, pdf: &Path) -> Result<Resolved, ConvertError> {
    let resolved = resolve(config)?;
    convert_with(&resolved, config, html, pdf)?;
    Ok(resolved)
}

/// Convert with an already resolved engine.
pub fn convert_with(
    resolved: &Resolved,
    config: &ConvertConfig,
    html: &Path,
    pdf: &Path,
) -> Result<(), ConvertError> {
    if let Some(dir) = pdf.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|e| ConvertError::Io(dir.to_path_buf(), e))?;
    }

    let tmp = sibling_temp(pdf);
    // Leftover from an interrupted run
    let _ = fs::remove_file(&tmp);

    debug!("convert"; "{} {} -> {}", resolved.label(), html.display(), tmp.display());

    let result = engine::invocation(resolved, config, html, &tmp).run();
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(ConvertError::Failed {
            engine: resolved.label(),
            message: format!("{e:#}"),
        });
    }

    let written = fs::metadata(&tmp).map(|m| m.len()).unwrap_or(0);
    if written == 0 {
        let _ = fs::remove_file(&tmp);
        return Err(ConvertError::EmptyOutput(resolved.label()));
    }

    commit(&tmp, pdf).map_err(|e| ConvertError::Io(pdf.to_path_buf(), e))
}
