use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validator::{
    COMPLETE_THRESHOLD, Check, DEFAULT_WINDOW, ExtractionPattern, PARTIAL_THRESHOLD, PassRule,
    ScorePolicy,
};

/// Supported audit definition version.
pub const CONFIG_VERSION: &str = "1";

/// Root of an audit definition file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Definition format version. `None` means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub audit: AuditSettings,

    /// Named entities scored independently [[entity]].
    #[serde(default, rename = "entity")]
    pub entities: Vec<EntityConfig>,

    /// Record extractions [[extract]].
    #[serde(default, rename = "extract")]
    pub extractions: Vec<ExtractConfig>,
}

/// Report-wide policy [audit].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditSettings {
    /// Title printed above the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Percent at or above which an entity is complete.
    #[serde(default = "default_complete_threshold")]
    pub complete_threshold: f64,

    /// Percent at or above which an entity is partial.
    #[serde(default = "default_partial_threshold")]
    pub partial_threshold: f64,

    /// Every entity must be complete for the audit to pass.
    #[serde(default = "default_true")]
    pub require_all_complete: bool,

    /// Minimum percent of tokens found across all checks for the audit to pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_overall: Option<f64>,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            name: None,
            complete_threshold: COMPLETE_THRESHOLD,
            partial_threshold: PARTIAL_THRESHOLD,
            require_all_complete: true,
            min_overall: None,
        }
    }
}

impl AuditSettings {
    #[must_use]
    pub const fn policy(&self) -> ScorePolicy {
        ScorePolicy {
            complete: self.complete_threshold,
            partial: self.partial_threshold,
        }
    }
}

/// A named group of sub-checks [[entity]].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntityConfig {
    pub name: String,

    /// Files that must exist. Counts as one sub-check when non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PathBuf>,

    /// Token checks [[entity.check]].
    #[serde(default, rename = "check", skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<CheckConfig>,

    /// Proximity checks [[entity.proximity]].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proximity: Vec<ProximityConfig>,
}

impl EntityConfig {
    #[must_use]
    pub fn sub_check_count(&self) -> usize {
        usize::from(!self.files.is_empty()) + self.checks.len() + self.proximity.len()
    }
}

/// Literal token presence in one file [[entity.check]].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    pub name: String,

    /// Project-relative file path.
    pub file: PathBuf,

    pub tokens: Vec<String>,

    /// Search template, `{}` is replaced by each token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(default)]
    pub pass: PassRule,
}

impl CheckConfig {
    #[must_use]
    pub fn to_check(&self) -> Check {
        let check = Check::new(self.file.clone(), self.tokens.iter().cloned());
        match &self.template {
            Some(template) => check.with_template(template.clone()),
            None => check,
        }
    }
}

/// Anchor/needle association within a fixed window [[entity.proximity]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProximityConfig {
    pub name: String,

    pub file: PathBuf,

    /// Identifiers located in the file (e.g. tower ids).
    pub anchors: Vec<String>,

    /// Any of these near an anchor associates it (e.g. gem ids).
    pub needles: Vec<String>,

    /// Characters scanned from the start of each anchor.
    #[serde(default = "default_window")]
    pub window: usize,

    /// Search anchors wrapped in double quotes.
    #[serde(default = "default_true")]
    pub quoted: bool,

    #[serde(default)]
    pub pass: PassRule,
}

impl ProximityConfig {
    #[must_use]
    pub fn anchor_needle(&self, anchor: &str) -> String {
        if self.quoted {
            format!("\"{anchor}\"")
        } else {
            anchor.to_string()
        }
    }
}

/// Record extraction from a data file [[extract]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractConfig {
    pub name: String,

    pub file: PathBuf,

    /// Regex; capture group 1 is the record.
    pub anchor: String,

    /// Literal that must follow the anchor within `window` characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// Regex that must match within `window` characters after the anchor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_regex: Option<String>,

    #[serde(default = "default_window")]
    pub window: usize,
}

impl ExtractConfig {
    /// Compile into an extraction pattern.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the anchor or marker regex does not compile.
    pub fn to_pattern(&self) -> Result<ExtractionPattern> {
        let pattern = ExtractionPattern::new(&self.anchor)?.with_window(self.window);
        match (&self.marker, &self.marker_regex) {
            (_, Some(regex)) => pattern.with_marker_regex(regex),
            (Some(marker), None) => Ok(pattern.with_marker(marker.clone())),
            (None, None) => Ok(pattern),
        }
    }
}

const fn default_complete_threshold() -> f64 {
    COMPLETE_THRESHOLD
}

const fn default_partial_threshold() -> f64 {
    PARTIAL_THRESHOLD
}

const fn default_window() -> usize {
    DEFAULT_WINDOW
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
