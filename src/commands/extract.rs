use indexmap::IndexSet;

use crate::cli::{Cli, ExtractArgs};
use crate::source::{RealFileSystem, display_root};
use crate::validator::{ExtractionPattern, StructuralValidator};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, TokenGuardError};

use super::context::print_error;

#[must_use]
pub fn run_extract(args: &ExtractArgs, cli: &Cli) -> i32 {
    match run_extract_impl(args) {
        Ok(records) => {
            if cli.verbose >= 1 {
                eprintln!(
                    "{} unique records in {}",
                    records.len(),
                    args.file.display()
                );
            }
            if !cli.quiet {
                for record in &records {
                    println!("{record}");
                }
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Extracts records from one file. An empty result is not an error.
///
/// # Errors
/// Returns an error if the window is zero, a pattern does not compile, or the
/// file cannot be read.
pub fn run_extract_impl(args: &ExtractArgs) -> Result<IndexSet<String>> {
    if args.window == 0 {
        return Err(TokenGuardError::Config(
            "--window must be at least 1".to_string(),
        ));
    }

    let mut pattern = ExtractionPattern::new(&args.anchor)?.with_window(args.window);
    if let Some(regex) = &args.marker_regex {
        pattern = pattern.with_marker_regex(regex)?;
    } else if let Some(marker) = &args.marker {
        pattern = pattern.with_marker(marker.as_str());
    }

    let fs = RealFileSystem;
    let validator = StructuralValidator::new(display_root(&args.root), &fs);
    validator.extract(&args.file, &pattern)
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
