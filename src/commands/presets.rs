use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::cli::Cli;
use crate::config::PRESET_DESCRIPTIONS;

#[must_use]
pub fn run_presets(cli: &Cli) -> i32 {
    if !cli.quiet {
        print!("{}", format_presets());
    }
    EXIT_SUCCESS
}

#[must_use]
pub fn format_presets() -> String {
    let width = PRESET_DESCRIPTIONS
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let mut output = String::from("Available presets:\n");
    for (name, description) in PRESET_DESCRIPTIONS {
        let _ = writeln!(output, "  {name:<width$}  {description}");
    }
    output.push_str("\nUse with `token-guard check --preset <NAME>` or `token-guard init --preset <NAME>`.\n");
    output
}

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
