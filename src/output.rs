//! Saving rendered text to disk.

use std::path::{Path, PathBuf};

/// Write `content` to `path` verbatim, replacing any existing file.
///
/// Parent directories are not created.
pub fn write_output(path: &Path, content: &str) -> Result<(), OutputError> {
    std::fs::write(path, content).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Errors that can occur when saving output.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("could not write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
