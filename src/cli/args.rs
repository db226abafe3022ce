//! Command line argument parsing and validation.
//!
//! This module provides minimal CLI argument parsing.
//! The tool is designed to "just work" - run it from the project root and
//! every icon is replaced. The defaults reproduce the zero-argument behavior:
//! `drone.png` copied over everything in `src-tauri/icons`.

use clap::Parser;
use std::path::PathBuf;

/// Replace PNG application icons with a single source image
#[derive(Parser, Debug)]
#[command(
    name = "icon_replacer",
    version,
    about = "Replace PNG application icons with a single source image",
    long_about = "Copy one source image over every PNG icon in an icon directory,
keeping a one-time backup of the originals and regenerating icon.ico.

Usage:
  icon_replacer
  icon_replacer --source logo.png --icons-dir src-tauri/icons"
)]
pub struct Args {
    /// Source image copied over every icon
    #[arg(long, value_name = "PATH", default_value = "drone.png")]
    pub source: PathBuf,

    /// Directory containing the PNG icons to replace
    #[arg(long, value_name = "PATH", default_value = "src-tauri/icons")]
    pub icons_dir: PathBuf,

    /// Suppress status output (errors are still printed)
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments, returning the error instead of letting
    /// clap exit the process (its default status for bad arguments is 2;
    /// this tool reports every failure as 1)
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.source.as_os_str().is_empty() {
            return Err("Source image path is required".to_string());
        }
        if self.icons_dir.as_os_str().is_empty() {
            return Err("Icon directory path is required".to_string());
        }

        Ok(())
    }
}
