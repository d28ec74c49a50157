//! Path manipulation utilities

use std::path::{Path, PathBuf};

/// Resolve `path` against `base` unless it is already absolute
///
/// Components are kept as written: `..` is left for the filesystem to
/// resolve, so a `base` reached through a symlink still leads to the right
/// place. An empty `path` resolves to `base` itself.
#[must_use]
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if path.as_os_str().is_empty() {
        return base.to_path_buf();
    }

    base.join(path)
}
