//! The icon replacement pipeline.
//!
//! A linear sequence of phases over one icon directory: back up the original
//! PNG files (first run wins), copy the source image over every candidate,
//! regenerate the ICO container, and report what was touched. Per-file
//! failures are reported and swallowed so one bad file never blocks the
//! rest; only the up-front preconditions and an empty directory abort the
//! run.

mod container;
mod fs;
pub mod sizes;

use crate::cli::OutputManager;
use crate::error::{ReplaceError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Subdirectory of the icon directory holding first-run backups
pub const BACKUP_DIR_NAME: &str = "backup_original";

/// Name of the generated icon container file
pub const CONTAINER_NAME: &str = "icon.ico";

/// Counts of what a replacement run touched
#[derive(Debug, Clone, Default)]
pub struct ReplaceSummary {
    /// Files newly copied into the backup directory
    pub backed_up: usize,
    /// Candidates successfully overwritten with the source image
    pub replaced: usize,
    /// Candidates whose replacement failed
    pub failed: usize,
    /// Whether the icon container was written this run
    pub container_written: bool,
    /// Files processed: replacement attempts plus the container
    pub processed: usize,
}

/// The icon replacement pipeline over one source image and icon directory
#[derive(Debug)]
pub struct Replacer {
    source: PathBuf,
    icons_dir: PathBuf,
    output: OutputManager,
}

impl Replacer {
    /// Create a replacer for the given source image and icon directory
    pub fn new(source: PathBuf, icons_dir: PathBuf, output: OutputManager) -> Self {
        Self {
            source,
            icons_dir,
            output,
        }
    }

    /// Run the full pipeline.
    ///
    /// Checks the preconditions before any mutation, then executes the
    /// backup, enumeration, replacement, and container phases in order.
    /// Returns the summary on completion; per-file failures along the way
    /// are reported through the output manager without failing the run.
    pub async fn run(&self) -> Result<ReplaceSummary> {
        if !self.source.is_file() {
            return Err(ReplaceError::MissingSource {
                path: self.source.clone(),
            });
        }
        if !self.icons_dir.is_dir() {
            return Err(ReplaceError::MissingIconDir {
                path: self.icons_dir.clone(),
            });
        }

        self.output
            .println(&format!("Source image: {}", self.source.display()));
        self.output
            .println(&format!("Icon directory: {}", self.icons_dir.display()));
        self.output.separator();

        let mut summary = ReplaceSummary::default();

        // Phase 1: backup originals, first run wins
        summary.backed_up = self.backup_originals().await;
        self.output.separator();

        // Phase 2: enumerate candidates (still the originals at this point)
        let candidates = self.candidates();
        if candidates.is_empty() {
            return Err(ReplaceError::NoCandidates {
                dir: self.icons_dir.clone(),
            });
        }
        self.output
            .println(&format!("Found {} PNG icons to replace", candidates.len()));
        self.output.separator();

        // Reading the header is enough for the status lines; a source that
        // won't decode still gets copied byte-for-byte below.
        let source_dims = image::image_dimensions(&self.source).ok();

        // Phase 3: copy the source over every candidate, no resizing
        for candidate in &candidates {
            summary.processed += 1;
            match fs::copy_file(&self.source, candidate).await {
                Ok(()) => {
                    summary.replaced += 1;
                    self.output.success(&self.replaced_line(candidate, source_dims));
                }
                Err(e) => {
                    summary.failed += 1;
                    self.output
                        .error(&format!("failed to replace {}: {}", candidate.display(), e));
                }
            }
        }

        // Phase 4: regenerate the ICO container unconditionally
        let container_path = self.icons_dir.join(CONTAINER_NAME);
        summary.processed += 1;
        match container::write_container(&self.source, &container_path).await {
            Ok((width, height)) => {
                summary.container_written = true;
                self.output.success(&format!(
                    "Created icon container: {} ({}x{} source resolution)",
                    container_path.display(),
                    width,
                    height
                ));
            }
            Err(e) => {
                self.output.error(&format!(
                    "failed to create icon container {}: {}",
                    container_path.display(),
                    e
                ));
            }
        }

        // Phase 5: report
        self.output.separator();
        self.output.success(&format!(
            "Replacement complete, {} files processed",
            summary.processed
        ));
        self.output.println(&format!(
            "Backups stored in {}",
            self.icons_dir.join(BACKUP_DIR_NAME).display()
        ));

        Ok(summary)
    }

    /// Copy every candidate into the backup directory unless a file of the
    /// same name is already there, so the backup always reflects the first
    /// observed state of each icon. Returns how many files were newly
    /// backed up; failures are reported and skipped.
    async fn backup_originals(&self) -> usize {
        let backup_dir = self.icons_dir.join(BACKUP_DIR_NAME);
        self.output.println(&format!(
            "Backing up originals to {}",
            backup_dir.display()
        ));

        if let Err(e) = tokio::fs::create_dir_all(&backup_dir).await {
            self.output.error(&format!(
                "failed to create backup directory {}: {}",
                backup_dir.display(),
                e
            ));
            return 0;
        }

        let mut backed_up = 0;
        for candidate in self.candidates() {
            let Some(file_name) = candidate.file_name() else {
                continue;
            };
            let backup_path = backup_dir.join(file_name);
            if backup_path.exists() {
                // Already captured by an earlier run
                log::debug!("backup exists, skipping {}", backup_path.display());
                continue;
            }
            match fs::copy_file(&candidate, &backup_path).await {
                Ok(()) => {
                    backed_up += 1;
                    self.output
                        .indent(&format!("Backed up: {}", file_name.to_string_lossy()));
                }
                Err(e) => {
                    self.output
                        .error(&format!("failed to back up {}: {}", candidate.display(), e));
                }
            }
        }
        backed_up
    }

    /// Enumerate the PNG files directly inside the icon directory. The
    /// backup subdirectory (and anything else that is not a regular file
    /// with a `.png` suffix) is excluded. Sorted by name so runs are
    /// deterministic.
    fn candidates(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.icons_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
            .collect();
        files.sort();
        files
    }

    /// Status line for one replaced icon, including its nominal size and the
    /// source resolution when the source header could be read.
    fn replaced_line(&self, candidate: &Path, source_dims: Option<(u32, u32)>) -> String {
        let file_name = candidate
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| candidate.display().to_string());
        let (nominal_w, nominal_h) = sizes::nominal_size(&file_name);
        match source_dims {
            Some((w, h)) => format!(
                "Replaced {} ({}x{} source resolution, nominal {}x{})",
                file_name, w, h, nominal_w, nominal_h
            ),
            None => format!(
                "Replaced {} (nominal {}x{})",
                file_name, nominal_w, nominal_h
            ),
        }
    }
}
