use super::*;

const ICE_DATA: &str = r#"
var gems = {
    "ice_basic": {"element": "ice", "effects": ["frost_debuff_1"]},
    "fire_basic": {"element": "fire"},
    "ice_intermediate": {
        "name": "Frost Heart",
        "element": "ice",
        "effects": ["frost_debuff_2", "freeze_chance_15_1s"]
    },
}
"#;

#[test]
fn extracts_identifier_followed_by_marker() {
    let text = r#""ice_basic": {"element": "ice", "tier": 1}"#;
    let pattern = ExtractionPattern::new(r#""(ice_\w+)""#)
        .unwrap()
        .with_marker(r#""element": "ice""#);

    let records = extract_records(text, &pattern);

    assert_eq!(records.len(), 1);
    assert!(records.contains("ice_basic"));
}

#[test]
fn extracts_all_matches_in_first_seen_order() {
    let pattern = ExtractionPattern::new(r#""(ice_\w+)":\s*\{"#)
        .unwrap()
        .with_marker(r#""element": "ice""#);

    let records: Vec<_> = extract_records(ICE_DATA, &pattern).into_iter().collect();

    assert_eq!(records, vec!["ice_basic", "ice_intermediate"]);
}

#[test]
fn extraction_is_idempotent() {
    let pattern = ExtractionPattern::new(r#""(frost_\w+|freeze_\w+)""#).unwrap();
    let first = extract_records(ICE_DATA, &pattern);
    let second = extract_records(ICE_DATA, &pattern);
    assert_eq!(first, second);
}

#[test]
fn records_are_deduplicated() {
    let text = r#""frost_debuff_1", "frost_debuff_1", "freeze_main_2s""#;
    let pattern = ExtractionPattern::new(r#""(frost_\w+|freeze_\w+)""#).unwrap();

    let records = extract_records(text, &pattern);

    assert_eq!(records.len(), 2);
}

#[test]
fn marker_outside_window_is_rejected() {
    let filler = "x".repeat(50);
    let text = format!(r#""ice_far": {{{filler}"element": "ice"}}"#);
    let pattern = ExtractionPattern::new(r#""(ice_\w+)""#)
        .unwrap()
        .with_marker(r#""element": "ice""#)
        .with_window(20);

    assert!(extract_records(&text, &pattern).is_empty());
}

#[test]
fn marker_regex_accepts_compact_and_tabbed_spacing() {
    let text = "\"ice_basic\": {\"element\":\"ice\", \"tier\": 1}\n\
                \"ice_advanced\": {\"element\":\t\"ice\"}\n\
                \"ice_fake\": {\"element\": \"fire\"}";
    let pattern = ExtractionPattern::new(r#""(ice_\w+)":\s*\{"#)
        .unwrap()
        .with_marker_regex(r#""element":\s*"ice""#)
        .unwrap();

    let records: Vec<_> = extract_records(text, &pattern).into_iter().collect();

    assert!(pattern.marker_is_regex());
    assert_eq!(records, vec!["ice_basic", "ice_advanced"]);
}

#[test]
fn literal_marker_requires_exact_spacing() {
    let text = r#""ice_basic": {"element":"ice"}"#;
    let pattern = ExtractionPattern::new(r#""(ice_\w+)""#)
        .unwrap()
        .with_marker(r#""element": "ice""#);

    assert!(!pattern.marker_is_regex());
    assert!(extract_records(text, &pattern).is_empty());
}

#[test]
fn invalid_marker_regex_is_reported() {
    let err = ExtractionPattern::new(r#""(ice_\w+)""#)
        .unwrap()
        .with_marker_regex("\"element\":(")
        .unwrap_err();
    assert_eq!(err.error_type(), "InvalidPattern");
}

#[test]
fn zero_matches_is_empty_set() {
    let pattern = ExtractionPattern::new(r#""(shadow_\w+)""#).unwrap();
    assert!(extract_records(ICE_DATA, &pattern).is_empty());
}

#[test]
fn pattern_without_group_uses_whole_match() {
    let pattern = ExtractionPattern::new(r"ice_\w+").unwrap();
    assert!(!pattern.has_capture_group());
    let records = extract_records("ice_basic ice_advanced", &pattern);
    assert!(records.contains("ice_advanced"));
}

#[test]
fn invalid_anchor_is_reported() {
    let err = ExtractionPattern::new("(ice_").unwrap_err();
    assert_eq!(err.error_type(), "InvalidPattern");
}

#[test]
fn window_counts_characters_not_bytes() {
    let text = "暗影宝石abc";
    assert_eq!(window_after(text, 0, 2), "暗影");
    assert_eq!(window_after(text, 0, 100), text);
}

#[test]
fn associated_finds_needle_near_anchor() {
    let text = r#""arrow_tower": {"gems": ["ice_basic"]}, "mage_tower": {}"#;
    assert!(associated(text, "\"arrow_tower\"", &["ice_basic"], 2000));
    assert!(!associated(text, "\"mage_tower\"", &["ice_basic"], 2000));
}

#[test]
fn associated_missing_anchor_is_false() {
    assert!(!associated("nothing here", "\"pulse_tower\"", &["ice_basic"], 2000));
}

#[test]
fn associated_respects_window() {
    let text = format!("\"感应塔\"{}ice_basic", " ".repeat(30));
    assert!(!associated(&text, "\"感应塔\"", &["ice_basic"], 10));
    assert!(associated(&text, "\"感应塔\"", &["ice_basic"], 100));
}
