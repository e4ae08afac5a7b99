//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_path` - tilde expansion, then resolve relative to a base directory
//! - `sibling_temp` - temp path next to an artifact, for atomic replacement

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// Paths that do not exist yet (artifacts before the first build) take
/// the fallback.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a configured path against `base`, expanding a leading `~`.
///
/// Always returns an absolute path.
///
/// # Example
/// ```ignore
/// resolve_path(Path::new("resume.yaml"), root)   // root/resume.yaml
/// resolve_path(Path::new("~/cv/style.css"), root) // $HOME/cv/style.css
/// ```
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = PathBuf::from(expanded);
    let full_path = if path.is_relative() {
        base.join(&path)
    } else {
        path
    };
    normalize_path(&full_path)
}

/// Hidden temp path in the same directory as `path`.
///
/// `out/resume.pdf` → `out/.resume.pdf.vita-tmp`. Same directory keeps the
/// final `rename` on one filesystem.
pub fn sibling_temp(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".vita-tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_path_absolute() {
        let resolved = resolve_path(Path::new("/absolute/resume.yaml"), Path::new("/base"));
        assert_eq!(resolved, PathBuf::from("/absolute/resume.yaml"));
    }

    #[test]
    fn test_resolve_path_relative_to_base() {
        let resolved = resolve_path(Path::new("out/resume.pdf"), Path::new("/nonexistent-base"));
        assert_eq!(resolved, PathBuf::from("/nonexistent-base/out/resume.pdf"));
    }

    #[test]
    fn test_resolve_path_tilde() {
        let resolved = resolve_path(Path::new("~/resume.yaml"), Path::new("/base"));
        assert!(!resolved.to_string_lossy().contains('~'));
        assert!(resolved.ends_with("resume.yaml"));
    }

    #[test]
    fn test_sibling_temp() {
        assert_eq!(
            sibling_temp(Path::new("/out/resume.pdf")),
            PathBuf::from("/out/.resume.pdf.vita-tmp")
        );
    }
}
