//! Audit definition semantic validation.
//!
//! Checks values that parse fine but cannot produce a meaningful report:
//! threshold ranges, empty token lists, broken templates and anchors.

use std::collections::HashSet;

use crate::config::{CheckConfig, Config, EntityConfig, ProximityConfig};
use crate::validator::{PassRule, TEMPLATE_PLACEHOLDER};
use crate::{Result, TokenGuardError};

/// Validates semantic correctness of an audit definition.
///
/// # Errors
/// Returns the first problem found, naming the offending field.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_audit_section(config)?;
    validate_entities(config)?;
    validate_extractions(config)?;
    Ok(())
}

fn validate_audit_section(config: &Config) -> Result<()> {
    let audit = &config.audit;
    for (field, value) in [
        ("complete_threshold", audit.complete_threshold),
        ("partial_threshold", audit.partial_threshold),
    ] {
        if !(0.0..=100.0).contains(&value) {
            return Err(TokenGuardError::Config(format!(
                "audit.{field} must be between 0 and 100, got {value}"
            )));
        }
    }

    if audit.partial_threshold > audit.complete_threshold {
        return Err(TokenGuardError::Config(format!(
            "audit.partial_threshold ({}) must not exceed audit.complete_threshold ({})",
            audit.partial_threshold, audit.complete_threshold
        )));
    }

    if let Some(min) = audit.min_overall
        && !(0.0..=100.0).contains(&min)
    {
        return Err(TokenGuardError::Config(format!(
            "audit.min_overall must be between 0 and 100, got {min}"
        )));
    }
    Ok(())
}

fn validate_entities(config: &Config) -> Result<()> {
    if config.entities.is_empty() && config.extractions.is_empty() {
        return Err(TokenGuardError::Config(
            "definition has no [[entity]] or [[extract]] sections".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for entity in &config.entities {
        if entity.name.trim().is_empty() {
            return Err(TokenGuardError::Config(
                "entity.name must not be empty".to_string(),
            ));
        }
        if !seen.insert(entity.name.as_str()) {
            return Err(TokenGuardError::Config(format!(
                "duplicate entity name '{}'",
                entity.name
            )));
        }
        validate_entity(entity)?;
    }
    Ok(())
}

fn validate_entity(entity: &EntityConfig) -> Result<()> {
    if entity.sub_check_count() == 0 {
        return Err(TokenGuardError::Config(format!(
            "entity '{}' has no files, checks, or proximity checks",
            entity.name
        )));
    }
    for check in &entity.checks {
        validate_check(&entity.name, check)?;
    }
    for proximity in &entity.proximity {
        validate_proximity(&entity.name, proximity)?;
    }
    Ok(())
}

fn validate_check(entity: &str, check: &CheckConfig) -> Result<()> {
    let at = format!("entity '{entity}' check '{}'", check.name);

    validate_tokens(&at, "tokens", &check.tokens)?;

    if let Some(template) = &check.template
        && !template.contains(TEMPLATE_PLACEHOLDER)
    {
        return Err(TokenGuardError::Config(format!(
            "{at}: template '{template}' must contain {TEMPLATE_PLACEHOLDER}"
        )));
    }

    validate_pass_rule(&at, check.pass, check.tokens.len())
}

fn validate_proximity(entity: &str, proximity: &ProximityConfig) -> Result<()> {
    let at = format!("entity '{entity}' proximity '{}'", proximity.name);

    validate_tokens(&at, "anchors", &proximity.anchors)?;
    validate_tokens(&at, "needles", &proximity.needles)?;

    if proximity.window == 0 {
        return Err(TokenGuardError::Config(format!(
            "{at}: window must be greater than 0"
        )));
    }

    validate_pass_rule(&at, proximity.pass, proximity.anchors.len())
}

fn validate_tokens(at: &str, field: &str, tokens: &[String]) -> Result<()> {
    if tokens.is_empty() {
        return Err(TokenGuardError::Config(format!(
            "{at}: {field} must not be empty"
        )));
    }

    let mut seen = HashSet::new();
    for token in tokens {
        if token.is_empty() {
            return Err(TokenGuardError::Config(format!(
                "{at}: {field} contains an empty string"
            )));
        }
        if !seen.insert(token.as_str()) {
            return Err(TokenGuardError::Config(format!(
                "{at}: duplicate entry '{token}' in {field}"
            )));
        }
    }
    Ok(())
}

fn validate_pass_rule(at: &str, rule: PassRule, total: usize) -> Result<()> {
    match rule {
        PassRule::All => Ok(()),
        PassRule::Ratio(ratio) if (0.0..=1.0).contains(&ratio) => Ok(()),
        PassRule::Ratio(ratio) => Err(TokenGuardError::Config(format!(
            "{at}: pass ratio must be between 0.0 and 1.0, got {ratio}"
        ))),
        PassRule::AtLeast(n) if n <= total => Ok(()),
        PassRule::AtLeast(n) => Err(TokenGuardError::Config(format!(
            "{at}: pass at_least ({n}) exceeds the number of entries ({total})"
        ))),
    }
}

fn validate_extractions(config: &Config) -> Result<()> {
    for extract in &config.extractions {
        let at = format!("extract '{}'", extract.name);
        let pattern = extract.to_pattern()?;
        if !pattern.has_capture_group() {
            return Err(TokenGuardError::Config(format!(
                "{at}: anchor '{}' needs a capture group for the record",
                extract.anchor
            )));
        }
        if extract.window == 0 {
            return Err(TokenGuardError::Config(format!(
                "{at}: window must be greater than 0"
            )));
        }
        if extract.marker.is_some() && extract.marker_regex.is_some() {
            return Err(TokenGuardError::Config(format!(
                "{at}: set either marker or marker_regex, not both"
            )));
        }
        if extract.marker.as_deref() == Some("") || extract.marker_regex.as_deref() == Some("") {
            return Err(TokenGuardError::Config(format!(
                "{at}: marker must not be empty"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
