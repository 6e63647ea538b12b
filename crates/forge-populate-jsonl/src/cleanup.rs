//! Output directory cleanup.

use crate::error::JsonlPopulatorError;
use crate::naming::FILE_EXTENSION;
use std::path::Path;
use tracing::{debug, info, warn};

/// Remove every `*.json` file directly inside `dir`.
///
/// Subdirectories are left alone. A file that cannot be removed is logged
/// and skipped. Returns the number of files removed.
pub fn clear_directory(dir: &Path) -> Result<usize, JsonlPopulatorError> {
    if !dir.exists() {
        return Err(JsonlPopulatorError::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(JsonlPopulatorError::NotADirectory(dir.to_path_buf()));
    }

    let mut removed = 0;
    let mut matched = 0;

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_json = path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some(FILE_EXTENSION);
        if !is_json {
            continue;
        }

        matched += 1;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed: {}", path.display());
                removed += 1;
            }
            Err(e) => warn!("Failed to remove {}: {e}", path.display()),
        }
    }

    if matched == 0 {
        info!("No *.{FILE_EXTENSION} files found in {}", dir.display());
    } else {
        info!("Cleared {removed} file(s) from {}", dir.display());
    }

    Ok(removed)
}
