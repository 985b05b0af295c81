use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::config::preset_source;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, TokenGuardError};

use super::context::print_error;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created audit definition: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a new audit definition file.
///
/// # Errors
/// Returns an error if the file already exists (without --force), the preset
/// is unknown, or the file cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(TokenGuardError::Config(format!(
            "Audit definition already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = match &args.preset {
        Some(name) => preset_source(name)?.trim_start().to_string(),
        None => generate_config_template(),
    };

    fs::write(output_path, template)?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# token-guard audit definition
# Paths are relative to the project root passed with --root.

version = "1"

[audit]
name = "Feature audit"
# Entity classification thresholds, in percent of passing sub-checks
complete_threshold = 80.0
partial_threshold = 60.0
# Fail unless every entity is complete (default: true)
# require_all_complete = true
# Fail unless this percent of all tokens is found
# min_overall = 90.0

[[entity]]
name = "ice"
# Files that must exist
files = ["Scenes/main/Data.gd"]

# Every token must appear in the file
[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["ice_basic", "ice_advanced"]

# Tokens are substituted into the template before searching
[[entity.check]]
name = "status effects"
file = "Scenes/systems/StatusEffect.gd"
tokens = ["frozen", "slow"]
template = "\"{}\""
# Pass when 80% of tokens are found; also: "all", { at_least = 1 }
pass = { ratio = 0.8 }

# Anchors whose text is followed by a needle within the window
# [[entity.proximity]]
# name = "tower coverage"
# file = "Scenes/main/Data.gd"
# anchors = ["frost_tower", "ice_tower"]
# needles = ["ice"]
# window = 2000
# pass = { at_least = 1 }

# Records pulled out of a data file; capture group 1 is the record
# [[extract]]
# name = "ice gems"
# file = "Scenes/main/Data.gd"
# anchor = '"(ice_\w+)":\s*\{'
# marker = '"element": "ice"'
# or a regex: marker_regex = '"element":\s*"ice"'
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
