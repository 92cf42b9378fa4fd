//! Construction-time retention sweep
//!
//! Runs once, when a logger is built with a non-zero retention cap, and
//! deletes the oldest prefix-matching files beyond that cap. Best-effort
//! throughout: the caller discards the returned error, and individual
//! deletion failures do not stop the sweep.

use super::config::EXTENSION;
use super::error::{LoggerError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Delete prefix-matching files beyond `limit`, oldest first.
///
/// `name_pattern` is the raw pattern the logger was configured with. The
/// sweep re-splits it on `'_'` and searches on the token before the first
/// underscore; a pattern without an underscore degrades the search prefix
/// to the literal `".log"`, so such a sweep only ever matches files whose
/// names start with `.log`. Quirk preserved from the original file format.
///
/// `_date_component` is unused; it is part of the sweep call shape for
/// symmetry with construction.
pub(crate) fn sweep(
    directory: &str,
    name_pattern: &str,
    limit: usize,
    _date_component: &str,
) -> Result<()> {
    let dir = Path::new(directory);
    if !dir.is_dir() {
        return Ok(());
    }

    let mut tokens = name_pattern.split('_');
    let search_prefix = match (tokens.next(), tokens.next()) {
        (Some(first), Some(_)) => first,
        _ => EXTENSION,
    };

    let mut files: Vec<(PathBuf, SystemTime, OsString)> = Vec::new();
    let entries = fs::read_dir(dir)
        .map_err(|e| LoggerError::sweep(directory, format!("Failed to enumerate: {}", e)))?;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        if !name.to_string_lossy().starts_with(search_prefix) {
            continue;
        }
        let metadata = entry.metadata().map_err(|e| {
            LoggerError::io_operation(
                "reading file metadata",
                entry.path().display().to_string(),
                e,
            )
        })?;
        if !metadata.is_file() {
            continue;
        }
        // Creation time where the platform has it, else modification time.
        let timestamp = metadata
            .created()
            .or_else(|_| metadata.modified())
            .unwrap_or(UNIX_EPOCH);
        files.push((entry.path(), timestamp, name));
    }

    if files.is_empty() {
        return Ok(());
    }

    // Newest first; file name breaks timestamp ties deterministically.
    files.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));

    for (path, _, _) in files.iter().skip(limit) {
        let _ = fs::remove_file(path);
    }

    Ok(())
}
