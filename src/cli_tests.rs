use std::path::PathBuf;

use super::*;

#[test]
fn cli_check_defaults() {
    let cli = Cli::parse_from(["token-guard", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.root, PathBuf::from("."));
            assert!(args.config.is_none());
            assert!(args.preset.is_none());
            assert_eq!(args.format, OutputFormat::Text);
            assert!(!args.warn_only);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_preset_and_json() {
    let cli = Cli::parse_from([
        "token-guard",
        "check",
        "--root",
        "game",
        "--preset",
        "ice",
        "-f",
        "json",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.root, PathBuf::from("game"));
            assert_eq!(args.preset.as_deref(), Some("ice"));
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_config_conflicts_with_preset() {
    let result = Cli::try_parse_from([
        "token-guard",
        "check",
        "--config",
        "audit.toml",
        "--preset",
        "ice",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_check_rejects_unknown_format() {
    let result = Cli::try_parse_from(["token-guard", "check", "--format", "sarif"]);
    assert!(result.is_err());
}

#[test]
fn cli_extract_defaults_window() {
    let cli = Cli::parse_from([
        "token-guard",
        "extract",
        "--file",
        "Scenes/main/Data.gd",
        "--anchor",
        r#""(ice_\w+)":\s*\{"#,
    ]);
    match cli.command {
        Commands::Extract(args) => {
            assert_eq!(args.file, PathBuf::from("Scenes/main/Data.gd"));
            assert_eq!(args.window, DEFAULT_WINDOW);
            assert!(args.marker.is_none());
        }
        _ => panic!("Expected Extract command"),
    }
}

#[test]
fn cli_extract_rejects_zero_window() {
    let result = Cli::try_parse_from([
        "token-guard",
        "extract",
        "--file",
        "Data.gd",
        "--anchor",
        r#""(ice_\w+)""#,
        "--window",
        "0",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_extract_marker_conflicts_with_marker_regex() {
    let result = Cli::try_parse_from([
        "token-guard",
        "extract",
        "--file",
        "Data.gd",
        "--anchor",
        r#""(ice_\w+)""#,
        "--marker",
        "ice",
        "--marker-regex",
        "ice",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_extract_requires_anchor() {
    let result = Cli::try_parse_from(["token-guard", "extract", "--file", "Data.gd"]);
    assert!(result.is_err());
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["token-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".token-guard.toml"));
            assert!(args.preset.is_none());
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_show_with_preset() {
    let cli = Cli::parse_from([
        "token-guard",
        "config",
        "show",
        "--preset",
        "gems",
        "--format",
        "json",
    ]);
    match cli.command {
        Commands::Config(args) => match args.action {
            ConfigAction::Show {
                config,
                preset,
                format,
            } => {
                assert!(config.is_none());
                assert_eq!(preset.as_deref(), Some("gems"));
                assert_eq!(format, ConfigOutputFormat::Json);
            }
            ConfigAction::Validate { .. } => panic!("Expected Show action"),
        },
        _ => panic!("Expected Config command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["token-guard", "-vv", "--color", "never", "presets", "-q"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert_eq!(ColorMode::from(cli.color), ColorMode::Never);
    assert!(matches!(cli.command, Commands::Presets));
}
