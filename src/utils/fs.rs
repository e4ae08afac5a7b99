//! Atomic artifact writes.
//!
//! Artifacts are written to a sibling temp file and renamed into place, so
//! an editor or viewer reading concurrently sees either the previous file
//! or the new one, never a truncated one.

use std::fs;
use std::io;
use std::path::Path;

use super::path::sibling_temp;

/// Replace `path` with `contents` atomically.
pub fn write_atomic(path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = sibling_temp(path);
    if let Err(e) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    commit(&tmp, path)
}

/// Move a finished temp file over its destination.
///
/// On failure the temp file is removed and the destination is untouched.
pub fn commit(tmp: &Path, path: &Path) -> io::Result<()> {
    fs::rename(tmp, path).inspect_err(|_| {
        let _ = fs::remove_file(tmp);
    })
}
