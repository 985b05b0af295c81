use std::fs;

use tempfile::TempDir;

use super::*;
use crate::config::ConfigSource;

const MINIMAL: &str = r#"
[[entity]]
name = "ice"

[[entity.check]]
name = "gems"
file = "Data.gd"
tokens = ["ice_basic"]
"#;

#[test]
fn load_definition_prefers_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audit.toml");
    fs::write(&path, MINIMAL).unwrap();

    let result = load_definition(dir.path(), Some(&path), None).unwrap();
    assert_eq!(result.source, ConfigSource::File(path));
    assert_eq!(result.config.entities[0].name, "ice");
}

#[test]
fn load_definition_uses_preset() {
    let dir = TempDir::new().unwrap();
    let result = load_definition(dir.path(), None, Some("homing")).unwrap();
    assert_eq!(result.source, ConfigSource::Preset("homing".to_string()));
}

#[test]
fn load_definition_falls_back_to_root_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".token-guard.toml"), MINIMAL).unwrap();

    let result = load_definition(dir.path(), None, None).unwrap();
    assert_eq!(result.config.entities.len(), 1);
}

#[test]
fn load_definition_without_any_source_errors() {
    let dir = TempDir::new().unwrap();
    let err = load_definition(dir.path(), None, None).unwrap_err();
    assert!(matches!(err, TokenGuardError::Config(_)));
}

#[test]
fn write_output_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports/audit.json");

    write_output(Some(&path), "{}", false).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn write_output_to_file_ignores_quiet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audit.txt");

    write_output(Some(&path), "report", true).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "report");
}
