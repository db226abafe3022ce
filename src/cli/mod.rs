//! Command line interface for the icon replacer.
//!
//! Parses arguments, drives the replacement pipeline, and maps its outcome
//! to a process exit code.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::error::Result;
use crate::replacer::Replacer;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // clap renders --help and --version as "errors" too; those go to
            // stdout and exit 0, real argument errors exit 1
            let _ = e.print();
            return Ok(if e.use_stderr() { 1 } else { 0 });
        }
    };
    execute(args).await
}

/// Execute the replacement with already-parsed arguments
pub async fn execute(args: Args) -> Result<i32> {
    if let Err(validation_error) = args.validate() {
        // Validation errors are never quiet
        let output = OutputManager::new(false);
        output.error(&format!("Invalid arguments: {}", validation_error));
        return Ok(1);
    }

    let output = OutputManager::new(args.quiet);
    output.section("Replacing PNG icons");

    let replacer = Replacer::new(args.source, args.icons_dir, output.clone());
    match replacer.run().await {
        Ok(summary) => {
            log::debug!(
                "replacement finished: {} backed up, {} replaced, {} failed",
                summary.backed_up,
                summary.replaced,
                summary.failed
            );
            Ok(0)
        }
        Err(e) => {
            output.error(&e.to_string());
            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    output.indent(&suggestion);
                }
            }
            Ok(1)
        }
    }
}
