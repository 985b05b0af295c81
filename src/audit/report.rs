use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};

use crate::validator::{CheckResult, Classification, Completion, FileIssue, PassRule, ScorePolicy};

/// What a sub-check inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubCheckKind {
    /// Required files exist.
    Files,
    /// Literal tokens in one file.
    Tokens,
    /// Anchors associated with needles in one file.
    Proximity,
}

impl SubCheckKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Tokens => "tokens",
            Self::Proximity => "proximity",
        }
    }
}

/// One scored sub-check of an entity. `items` maps each token, anchor or
/// file to whether it was found, in definition order.
#[derive(Debug, Clone, PartialEq)]
pub struct SubCheckReport {
    pub name: String,
    pub kind: SubCheckKind,
    pub file: Option<PathBuf>,
    pub items: IndexMap<String, bool>,
    pub rule: PassRule,
    pub passed: bool,
    pub file_issue: Option<FileIssue>,
}

impl SubCheckReport {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: SubCheckKind,
        file: Option<PathBuf>,
        items: IndexMap<String, bool>,
        rule: PassRule,
        file_issue: Option<FileIssue>,
    ) -> Self {
        let mut report = Self {
            name: name.into(),
            kind,
            file,
            items,
            rule,
            passed: false,
            file_issue,
        };
        report.passed = report.file_issue.is_none() && rule.passes(&report.completion());
        report
    }

    /// Build a token sub-check from a validator result.
    #[must_use]
    pub fn from_check_result(
        name: impl Into<String>,
        result: CheckResult,
        rule: PassRule,
    ) -> Self {
        Self::new(
            name,
            SubCheckKind::Tokens,
            Some(result.path),
            result.tokens,
            rule,
            result.file_issue,
        )
    }

    #[must_use]
    pub fn completion(&self) -> Completion {
        Completion::new(
            self.items.values().filter(|found| **found).count(),
            self.items.len(),
        )
    }
}

/// Scored entity, e.g. one element of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityReport {
    pub name: String,
    pub sub_checks: Vec<SubCheckReport>,
    pub completion: Completion,
    pub classification: Classification,
}

impl EntityReport {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        sub_checks: Vec<SubCheckReport>,
        policy: &ScorePolicy,
    ) -> Self {
        let completion = Completion::from_flags(sub_checks.iter().map(|s| s.passed));
        Self {
            name: name.into(),
            classification: policy.classify(completion.percent()),
            completion,
            sub_checks,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.classification == Classification::Complete
    }
}

/// Records pulled from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub name: String,
    pub file: PathBuf,
    pub records: IndexSet<String>,
    pub file_issue: Option<FileIssue>,
}

/// Full outcome of one audit run.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditReport {
    pub title: Option<String>,
    pub root: PathBuf,
    pub entities: Vec<EntityReport>,
    pub extractions: Vec<ExtractionReport>,
    /// Tokens found over tokens expected, across all token sub-checks.
    pub overall: Completion,
    /// Complete entities over all entities.
    pub system: Completion,
    pub require_all_complete: bool,
    pub min_overall: Option<f64>,
}

impl AuditReport {
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn all_complete(&self) -> bool {
        self.entities.iter().all(EntityReport::is_complete)
    }

    #[must_use]
    pub fn meets_overall_minimum(&self) -> bool {
        self.min_overall
            .is_none_or(|min| self.overall.percent() >= min)
    }

    /// Whether the audit should exit successfully.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (!self.require_all_complete || self.all_complete()) && self.meets_overall_minimum()
    }

    /// Every distinct file that could not be inspected.
    #[must_use]
    pub fn file_issues(&self) -> IndexMap<&Path, &FileIssue> {
        let from_checks = self
            .entities
            .iter()
            .flat_map(|e| &e.sub_checks)
            .filter_map(|s| Some((s.file.as_deref()?, s.file_issue.as_ref()?)));
        let from_extractions = self
            .extractions
            .iter()
            .filter_map(|x| Some((x.file.as_path(), x.file_issue.as_ref()?)));
        from_checks.chain(from_extractions).collect()
    }
}
