use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, LoadResult, validate_config_semantics,
};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, TokenGuardError};

use super::context::{load_definition, print_error};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, cli),
        ConfigAction::Show {
            config,
            preset,
            format,
        } => run_config_show(config.as_deref(), preset.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(config) => {
            if !cli.quiet {
                println!(
                    "Audit definition is valid: {} ({} entities, {} extractions)",
                    config_path.display(),
                    config.entities.len(),
                    config.extractions.len()
                );
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates an audit definition file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Err(TokenGuardError::Config(format!(
            "Audit definition not found: {}",
            config_path.display()
        )));
    }

    let LoadResult { config, .. } = FileConfigLoader::new().load_from_path(config_path)?;
    validate_config_semantics(&config)?;
    Ok(config)
}

fn run_config_show(
    config_path: Option<&Path>,
    preset: Option<&str>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> i32 {
    match run_config_show_impl(config_path, preset, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders a loaded definition.
///
/// # Errors
/// Returns an error if the definition cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    preset: Option<&str>,
    format: ConfigOutputFormat,
) -> Result<String> {
    let loaded = load_definition(Path::new("."), config_path, preset)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&loaded)),
    }
}

#[must_use]
pub fn format_config_text(loaded: &LoadResult) -> String {
    let config = &loaded.config;
    let mut output = String::new();

    output.push_str("=== Audit Definition ===\n");
    let _ = writeln!(output, "Source: {}\n", loaded.source);

    output.push_str("[audit]\n");
    if let Some(name) = &config.audit.name {
        let _ = writeln!(output, "  name = {name:?}");
    }
    let _ = writeln!(
        output,
        "  complete_threshold = {}",
        config.audit.complete_threshold
    );
    let _ = writeln!(
        output,
        "  partial_threshold = {}",
        config.audit.partial_threshold
    );
    let _ = writeln!(
        output,
        "  require_all_complete = {}",
        config.audit.require_all_complete
    );
    if let Some(min) = config.audit.min_overall {
        let _ = writeln!(output, "  min_overall = {min}");
    }

    for entity in &config.entities {
        let _ = writeln!(
            output,
            "\n[entity] {} ({} sub-checks)",
            entity.name,
            entity.sub_check_count()
        );
        if !entity.files.is_empty() {
            let files: Vec<_> = entity.files.iter().map(|f| f.display().to_string()).collect();
            let _ = writeln!(output, "  files = {files:?}");
        }
        for check in &entity.checks {
            let _ = write!(
                output,
                "  check {:?} in {}: {} tokens, pass {}",
                check.name,
                check.file.display(),
                check.tokens.len(),
                check.pass.describe()
            );
            if let Some(template) = &check.template {
                let _ = write!(output, ", template {template:?}");
            }
            output.push('\n');
        }
        for proximity in &entity.proximity {
            let _ = writeln!(
                output,
                "  proximity {:?} in {}: {} anchors near {:?} within {}, pass {}",
                proximity.name,
                proximity.file.display(),
                proximity.anchors.len(),
                proximity.needles,
                proximity.window,
                proximity.pass.describe()
            );
        }
    }

    for extract in &config.extractions {
        let _ = writeln!(
            output,
            "\n[extract] {} in {}\n  anchor = {:?}",
            extract.name,
            extract.file.display(),
            extract.anchor
        );
        if let Some(marker) = &extract.marker {
            let _ = writeln!(output, "  marker = {marker:?} within {}", extract.window);
        }
        if let Some(regex) = &extract.marker_regex {
            let _ = writeln!(output, "  marker_regex = {regex:?} within {}", extract.window);
        }
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
