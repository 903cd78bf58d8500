//! Filesystem utilities for writing generated SQL

use std::fs;
use std::io;
use std::path::Path;

/// Create the parent directory of `path` if it is missing.
///
/// Returns `true` when a directory had to be created.
pub fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
