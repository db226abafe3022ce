//! File system helpers for icon replacement.

use crate::error::{ErrorExt, ReplaceError, Result};
use std::io;
use std::path::Path;
use tokio::fs;

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Permissions travel with the copy where the platform supports it;
/// modification times do not, the destination gets a fresh mtime.
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.is_file() {
        return Err(ReplaceError::Fs {
            context: "copying file",
            path: from.to_path_buf(),
            error: io::Error::new(io::ErrorKind::NotFound, "not a regular file"),
        });
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", to)?;
    log::debug!("copied {} -> {}", from.display(), to.display());
    Ok(())
}
