//! Atomic file writes and output directory lifecycle
//!
//! The output directory is destructively cleared exactly once at run start
//! and append-only afterwards; individual files are written via the
//! tempfile + rename pattern so a crashed run never leaves a half-written
//! artifact behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::WidgetpackResult;

/// Write content to a file atomically
///
/// The temp file is created in the destination's parent directory so the
/// final rename stays on one filesystem.
pub fn write_atomic(path: &Path, content: &str) -> WidgetpackResult<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Clear and recreate the output directory
///
/// Called exactly once per run, before any widget is built.
pub fn reset_dir(path: &Path) -> WidgetpackResult<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    Ok(())
}
