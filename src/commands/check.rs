use crate::audit::{AuditReport, audit_project};
use crate::cli::{CheckArgs, Cli};
use crate::config::validate_config_semantics;
use crate::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::source::display_root;
use crate::{EXIT_AUDIT_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, TokenGuardError};

use super::context::{load_definition, print_error, warn_file_issues, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the audit and writes the report.
///
/// # Errors
/// Returns an error if the root is missing, the definition is invalid, or
/// the report cannot be written.
pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let color_mode: ColorMode = cli.color.into();

    if !args.root.is_dir() {
        return Err(TokenGuardError::Config(format!(
            "Project root is not a directory: {}",
            args.root.display()
        )));
    }
    let root = display_root(&args.root);

    let loaded = load_definition(&root, args.config.as_deref(), args.preset.as_deref())?;
    validate_config_semantics(&loaded.config)?;
    if cli.verbose >= 1 {
        eprintln!("Using definition: {}", loaded.source);
    }

    let report = audit_project(&root, &loaded.config)?;
    if cli.verbose >= 1 {
        warn_file_issues(&report, color_mode);
    }

    // File output never carries ANSI codes.
    let format_color = if args.output.is_some() {
        ColorMode::Never
    } else {
        color_mode
    };
    let mut output = format_report(args.format, &report, format_color, cli.verbose)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code_for(&report, args.warn_only))
}

pub(crate) fn format_report(
    format: OutputFormat,
    report: &AuditReport,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

#[must_use]
pub(crate) fn exit_code_for(report: &AuditReport, warn_only: bool) -> i32 {
    if warn_only || report.is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_AUDIT_FAILED
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
