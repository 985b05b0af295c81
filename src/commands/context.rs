use std::fs;
use std::path::Path;

use crate::audit::AuditReport;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::{ColorMode, ErrorOutput};
use crate::{Result, TokenGuardError};

/// Load the audit definition for `root`: an explicit file, a preset, or
/// `<root>/.token-guard.toml`.
///
/// # Errors
/// Returns an error if the definition cannot be found, read, or parsed.
pub(crate) fn load_definition(
    root: &Path,
    config_path: Option<&Path>,
    preset: Option<&str>,
) -> Result<LoadResult> {
    let loader = FileConfigLoader::new();
    match (config_path, preset) {
        (Some(path), _) => loader.load_from_path(path),
        (None, Some(name)) => loader.load_preset(name),
        (None, None) => loader.load(root),
    }
}

/// Print a report of unreadable or undecodable files as warnings.
pub(crate) fn warn_file_issues(report: &AuditReport, color_mode: ColorMode) {
    let output = ErrorOutput::new(color_mode);
    for (path, issue) in report.file_issues() {
        output.print_warning(
            &format!("{} is {}", path.display(), issue.label()),
            Some(&issue.to_string()),
            None,
        );
    }
}

/// Print an error with its detail and suggestion to stderr.
pub(crate) fn print_error(error: &TokenGuardError, color_mode: ColorMode) {
    ErrorOutput::new(color_mode).print_error(
        error.error_type(),
        &error.message(),
        error.detail().as_deref(),
        error.suggestion(),
    );
}

/// Write to `output_path` when given, otherwise to stdout unless quiet.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
