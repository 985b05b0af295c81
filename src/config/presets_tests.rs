use super::*;
use crate::config::{parse_config, validate_config_semantics};
use crate::validator::{PassRule, extract_records};

#[test]
fn every_preset_parses_and_validates() {
    for name in AVAILABLE_PRESETS {
        let config = parse_config(preset_source(name).unwrap())
            .unwrap_or_else(|e| panic!("preset {name} failed to parse: {e}"));
        validate_config_semantics(&config)
            .unwrap_or_else(|e| panic!("preset {name} failed validation: {e}"));
    }
}

#[test]
fn every_preset_has_description() {
    let described: Vec<_> = PRESET_DESCRIPTIONS.iter().map(|(n, _)| *n).collect();
    assert_eq!(described, AVAILABLE_PRESETS);
}

#[test]
fn elements_preset_covers_five_elements() {
    let config = parse_config(preset_source("elements").unwrap()).unwrap();
    let names: Vec<_> = config.entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["ice", "earth", "wind", "light", "shadow"]);

    for entity in &config.entities {
        assert_eq!(entity.sub_check_count(), 4);
        assert_eq!(entity.checks[2].pass, PassRule::Ratio(0.8));
        assert_eq!(entity.proximity[0].pass, PassRule::AtLeast(7));
        assert_eq!(entity.proximity[0].anchors.len(), 9);
    }
}

#[test]
fn gems_preset_uses_overall_minimum() {
    let config = parse_config(preset_source("gems").unwrap()).unwrap();
    assert_eq!(config.audit.min_overall, Some(90.0));
    assert!(!config.audit.require_all_complete);
}

#[test]
fn ice_preset_has_extractions() {
    let config = parse_config(preset_source("ice").unwrap()).unwrap();
    assert_eq!(config.extractions.len(), 2);
    assert_eq!(
        config.extractions[0].marker_regex.as_deref(),
        Some(r#""element":\s*"ice""#)
    );
}

#[test]
fn ice_preset_gem_marker_tolerates_spacing() {
    let config = parse_config(preset_source("ice").unwrap()).unwrap();
    let pattern = config.extractions[0].to_pattern().unwrap();
    let text = "\"ice_basic\": {\"element\":\"ice\"},\n\"ice_advanced\": {\"element\":\t\"ice\"}";

    let records: Vec<_> = extract_records(text, &pattern).into_iter().collect();
    assert_eq!(records, ["ice_basic", "ice_advanced"]);
}

#[test]
fn ice_preset_tower_list_does_not_gate() {
    let config = parse_config(preset_source("ice").unwrap()).unwrap();
    let towers = config.entities[0]
        .checks
        .iter()
        .find(|c| c.name == "tower types")
        .unwrap();
    assert_eq!(towers.pass, PassRule::AtLeast(0));
}

#[test]
fn homing_preset_uses_func_template() {
    let config = parse_config(preset_source("homing").unwrap()).unwrap();
    let bullet = &config.entities[1];
    assert_eq!(bullet.checks[0].template.as_deref(), Some("func {}"));
}

#[test]
fn unknown_preset_lists_available() {
    let err = preset_source("fire").unwrap_err();
    assert!(err.to_string().contains("elements, gems, ice, homing"));
}
