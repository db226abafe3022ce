//! Error types for icon replacement operations.
//!
//! The fatal conditions (missing source, missing directory, no candidates)
//! are the only errors that abort a run. Everything else is a per-file
//! condition that the pipeline reports and swallows.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for icon replacement operations
pub type Result<T> = std::result::Result<T, ReplaceError>;

/// Main error type for all icon replacement operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReplaceError {
    /// Source image does not exist or is not a regular file
    #[error("source image not found: {path}")]
    MissingSource {
        /// Path that was checked
        path: PathBuf,
    },

    /// Icon directory does not exist or is not a directory
    #[error("icon directory not found: {path}")]
    MissingIconDir {
        /// Path that was checked
        path: PathBuf,
    },

    /// No PNG files were found in the icon directory
    #[error("no PNG icons found in {dir}")]
    NoCandidates {
        /// Directory that was scanned
        dir: PathBuf,
    },

    /// File system error with path context
    #[error("{context} {path}: {error}")]
    Fs {
        /// Operation being performed (e.g. "copying file")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Image decode or encode failure
    #[error("image error for {path}: {error}")]
    Image {
        /// Image file involved
        path: PathBuf,
        /// The underlying image error
        error: image::ImageError,
    },
}

impl ReplaceError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReplaceError::MissingSource { path } => vec![
                format!("Place the replacement image at {}", path.display()),
                "Or point --source at an existing PNG file".to_string(),
            ],
            ReplaceError::MissingIconDir { path } => vec![
                format!("Run from the project root containing {}", path.display()),
                "Or point --icons-dir at the directory holding the app icons".to_string(),
            ],
            ReplaceError::NoCandidates { dir } => vec![format!(
                "Ensure {} contains the app's .png icon files",
                dir.display()
            )],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

/// Extension trait attaching path context to I/O results
pub(crate) trait ErrorExt<T> {
    /// Wrap an I/O error with the operation and the path involved
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for io::Result<T> {
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T> {
        self.map_err(|error| ReplaceError::Fs {
            context,
            path: path.to_path_buf(),
            error,
        })
    }
}
