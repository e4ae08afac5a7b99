//! `vita build`: one cycle, then exit.

use crate::config::VitaConfig;
use crate::debug;
use crate::pipeline::Pipeline;

/// Render and convert once, printing the status line.
///
/// Conversion always runs, even if the artifacts look current. Returns
/// whether the cycle succeeded; the caller maps failure to exit code 1.
pub fn build_resume(config: &VitaConfig) -> bool {
    debug!("build"; "input {}", config.paths.input.display());

    let mut pipeline = Pipeline::new(config);
    let result = pipeline.run(true);
    pipeline.report(&result);
    result.is_ok()
}
