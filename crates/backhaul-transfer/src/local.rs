//! Local target directory access.
//!
//! The target directory is re-listed at the start of every cycle, so
//! the listing is always ground truth as of that read; nothing is
//! cached between cycles.

use backhaul_core::{ordering, Error, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

/// List the filenames in `dir` ending with `"." + suffix`, ascending.
///
/// Subdirectories and non-matching entries are skipped silently. An
/// unreadable directory (missing, permission denied) is a listing
/// error; callers degrade it to an empty listing and keep polling.
pub fn list_local(dir: &Path, suffix: &str) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        Error::listing(format!("cannot read directory {}: {e}", dir.display()))
    })?;

    let wanted = format!(".{suffix}");
    let mut names = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::listing(format!("cannot read entry in {}: {e}", dir.display()))
        })?;
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            // Non-UTF-8 names cannot have come from the remote index.
            continue;
        };
        if name.ends_with(&wanted) {
            names.push(name);
        }
    }

    ordering::sort(&mut names);
    Ok(names)
}

/// Delete one file from the target directory (eviction, or cleanup of
/// a partial download).
pub fn remove_file(dir: &Path, name: &str) -> Result<()> {
    let path = dir.join(name);
    fs::remove_file(&path).map_err(|e| {
        Error::listing(format!("cannot remove {}: {e}", path.display()))
    })
}

/// Best-effort removal of a partial artifact; a second failure during
/// cleanup is logged and swallowed.
pub fn remove_partial(dir: &Path, name: &str) {
    if let Err(e) = remove_file(dir, name) {
        let path = dir.join(name);
        if path.exists() {
            warn!("failed to clean up partial file {}: {e}", path.display());
        }
    }
}
