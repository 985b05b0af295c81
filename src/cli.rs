use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::{ColorMode, OutputFormat};
use crate::validator::DEFAULT_WINDOW;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "token-guard")]
#[command(
    author,
    version,
    about = "Token guard - audit game project files for required definitions"
)]
#[command(long_about = "Checks that project files contain the identifiers a feature needs \
    (gems, status effects, towers, handlers), extracts records from data files, \
    and scores completion per entity.\n\n\
    Exit codes:\n  \
    0 - All audited entities complete\n  \
    1 - Incomplete entities or overall minimum missed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v shows passing tokens and file warnings)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress report output (exit code only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit a project against a definition file or preset
    Check(CheckArgs),

    /// Extract records from one file with an ad-hoc pattern
    Extract(ExtractArgs),

    /// Generate an audit definition file
    Init(InitArgs),

    /// Audit definition utilities
    Config(ConfigArgs),

    /// List built-in presets
    Presets,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Project root that definition paths are relative to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to audit definition (default: <root>/.token-guard.toml)
    #[arg(short, long, conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Use a built-in preset instead of a definition file
    #[arg(long)]
    pub preset: Option<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only report, always exit 0 when the audit ran
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// File to extract from, relative to --root
    #[arg(long)]
    pub file: PathBuf,

    /// Anchor regex; capture group 1 is the record when present
    #[arg(long)]
    pub anchor: String,

    /// Literal text required shortly after each anchor match
    #[arg(long, conflicts_with = "marker_regex")]
    pub marker: Option<String>,

    /// Regex required shortly after each anchor match
    #[arg(long)]
    pub marker_regex: Option<String>,

    /// Characters after the anchor searched for the marker (at least 1)
    #[arg(long, default_value_t = DEFAULT_WINDOW, value_parser = parse_window)]
    pub window: usize,

    /// Project root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

fn parse_window(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("window must be at least 1".to_string()),
        Ok(window) => Ok(window),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the definition file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Start from a built-in preset instead of the commented template
    #[arg(long)]
    pub preset: Option<String>,

    /// Overwrite existing definition
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate definition syntax and semantics
    Validate {
        /// Path to definition file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display a loaded definition
    Show {
        /// Path to definition file (default: ./.token-guard.toml)
        #[arg(short, long, conflicts_with = "preset")]
        config: Option<PathBuf>,

        /// Show a built-in preset
        #[arg(long)]
        preset: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
