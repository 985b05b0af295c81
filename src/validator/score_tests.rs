use super::super::Check;
use super::*;

#[test]
fn three_of_four_sub_checks_is_partial() {
    let completion = Completion::from_flags([true, true, true, false]);
    assert!((completion.percent() - 75.0).abs() < f64::EPSILON);
    assert_eq!(
        ScorePolicy::default().classify(completion.percent()),
        Classification::Partial
    );
}

#[test]
fn classification_boundaries() {
    let policy = ScorePolicy::default();
    assert_eq!(policy.classify(80.0), Classification::Complete);
    assert_eq!(policy.classify(79.9), Classification::Partial);
    assert_eq!(policy.classify(60.0), Classification::Partial);
    assert_eq!(policy.classify(59.9), Classification::Incomplete);
}

#[test]
fn custom_policy_thresholds() {
    let policy = ScorePolicy {
        complete: 100.0,
        partial: 50.0,
    };
    assert_eq!(policy.classify(90.0), Classification::Partial);
}

#[test]
fn completion_from_results_sums_tokens() {
    let a = Check::new("a.gd", ["frost", "freeze"]).evaluate("\"frost\"");
    let b = Check::new("b.gd", ["blind"]).evaluate("blind");

    let completion = Completion::from_results([&a, &b]);

    assert_eq!(completion, Completion::new(2, 3));
}

#[test]
fn empty_completion_is_zero_percent() {
    let completion = Completion::default();
    assert!(completion.percent().abs() < f64::EPSILON);
    assert!(!completion.is_full());
}

#[test]
fn system_of_five_complete_entities_is_full() {
    let policy = ScorePolicy::default();
    let entity_scores = [100.0, 80.0, 100.0, 75.0 + 25.0, 80.0];
    let system = Completion::from_flags(
        entity_scores
            .iter()
            .map(|p| policy.classify(*p) == Classification::Complete),
    );
    assert!((system.percent() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn pass_rule_all() {
    assert!(PassRule::All.passes(&Completion::new(3, 3)));
    assert!(!PassRule::All.passes(&Completion::new(2, 3)));
}

#[test]
fn pass_rule_ratio_allows_tolerance() {
    let rule = PassRule::Ratio(0.8);
    assert!(rule.passes(&Completion::new(4, 5)));
    assert!(!rule.passes(&Completion::new(2, 3)));
}

#[test]
fn pass_rule_at_least() {
    let rule = PassRule::AtLeast(7);
    assert!(rule.passes(&Completion::new(7, 9)));
    assert!(!rule.passes(&Completion::new(6, 9)));
}

#[test]
fn pass_rule_deserializes_from_toml() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        pass: PassRule,
    }

    let all: Wrapper = toml::from_str(r#"pass = "all""#).unwrap();
    assert_eq!(all.pass, PassRule::All);

    let ratio: Wrapper = toml::from_str("pass = { ratio = 0.8 }").unwrap();
    assert_eq!(ratio.pass, PassRule::Ratio(0.8));

    let at_least: Wrapper = toml::from_str("pass = { at_least = 7 }").unwrap();
    assert_eq!(at_least.pass, PassRule::AtLeast(7));
}
