//! Persisting rendered text to the output path.

use std::fs;
use std::path::Path;

use crate::error::GenerateError;

/// Write `contents` to `path`, creating parent directories and truncating any
/// existing file
///
/// The file handle is scoped inside [`fs::write`], so it is released on all
/// exit paths. No partial-write recovery is attempted; an aborted run may
/// leave a truncated file, and regeneration converges to the same bytes.
///
/// # Errors
///
/// Returns [`GenerateError::Write`] if the path cannot be created or written.
pub fn write_output(path: &Path, contents: &str) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GenerateError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, contents).map_err(|e| GenerateError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
