use serde::{Deserialize, Serialize};

use super::CheckResult;

/// Percent at or above which an entity is complete.
pub const COMPLETE_THRESHOLD: f64 = 80.0;

/// Percent at or above which an entity is partial.
pub const PARTIAL_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Complete,
    Partial,
    Incomplete,
}

impl Classification {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "COMPLETE",
            Self::Partial => "PARTIAL",
            Self::Incomplete => "INCOMPLETE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorePolicy {
    pub complete: f64,
    pub partial: f64,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self {
            complete: COMPLETE_THRESHOLD,
            partial: PARTIAL_THRESHOLD,
        }
    }
}

impl ScorePolicy {
    #[must_use]
    pub fn classify(&self, percent: f64) -> Classification {
        if percent >= self.complete {
            Classification::Complete
        } else if percent >= self.partial {
            Classification::Partial
        } else {
            Classification::Incomplete
        }
    }
}

/// `found` out of `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub found: usize,
    pub total: usize,
}

impl Completion {
    #[must_use]
    pub const fn new(found: usize, total: usize) -> Self {
        Self { found, total }
    }

    /// Tokens found across all results over tokens expected.
    #[must_use]
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a CheckResult>) -> Self {
        results.into_iter().fold(Self::default(), |acc, r| {
            Self::new(acc.found + r.found_count(), acc.total + r.total_count())
        })
    }

    /// Passing flags over all flags.
    #[must_use]
    pub fn from_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        flags.into_iter().fold(Self::default(), |acc, passed| {
            Self::new(acc.found + usize::from(passed), acc.total + 1)
        })
    }

    /// Percentage in `0.0..=100.0`; an empty completion scores zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Counts are far below f64 precision limits
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.found as f64 / self.total as f64) * 100.0
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.total > 0 && self.found == self.total
    }
}

/// How a sub-check's token results collapse into one pass flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassRule {
    /// Every token must be found.
    #[default]
    All,
    /// `found / total` must reach this ratio.
    Ratio(f64),
    /// At least this many tokens must be found.
    AtLeast(usize),
}

impl PassRule {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn passes(&self, completion: &Completion) -> bool {
        match *self {
            Self::All => completion.is_full(),
            Self::Ratio(ratio) => completion.found as f64 >= completion.total as f64 * ratio,
            Self::AtLeast(n) => completion.found >= n,
        }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::Ratio(ratio) => format!("≥{:.0}%", ratio * 100.0),
            Self::AtLeast(n) => format!("≥{n}"),
        }
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
