//! # Icon Replacer
//!
//! Copies one source image over every PNG icon in a directory, keeping a
//! one-time backup of the originals and regenerating the `icon.ico`
//! container.
//!
//! ## Behavior
//!
//! - **First-run backups**: originals land in `backup_original/` next to
//!   the icons; a file already backed up is never overwritten, so the
//!   backup always holds the first observed state.
//! - **No resizing**: every icon becomes a byte-for-byte copy of the
//!   source, whatever its nominal size.
//! - **Best effort**: one unreadable or unwritable icon is reported and
//!   skipped; the rest are still replaced.
//! - **Container regeneration**: `icon.ico` is rebuilt from the current
//!   source on every run.
//!
//! ## Usage
//!
//! ```bash
//! icon_replacer                                      # drone.png over src-tauri/icons
//! icon_replacer --source logo.png --icons-dir icons  # explicit paths
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod replacer;

// Re-export main types for public API
pub use cli::{Args, OutputManager};
pub use error::{ReplaceError, Result};
pub use replacer::{BACKUP_DIR_NAME, CONTAINER_NAME, ReplaceSummary, Replacer};
