//! Structural validator: literal token presence checks and record extraction.
//!
//! Every operation is a pure function of file contents and the check or pattern
//! definitions. Files are resolved against an explicit project root and read
//! through a [`FileSystem`] so the validator never depends on the process
//! working directory.

mod extract;
mod score;

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::{Result, TokenGuardError};
use crate::source::{FileSystem, resolve};

pub use extract::{DEFAULT_WINDOW, ExtractionPattern, associated, extract_records, window_after};
pub use score::{
    COMPLETE_THRESHOLD, Classification, Completion, PARTIAL_THRESHOLD, PassRule, ScorePolicy,
};

/// Placeholder substituted by each token in a [`Check`] template.
pub const TEMPLATE_PLACEHOLDER: &str = "{}";

/// A file plus the literal tokens expected to appear in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub path: PathBuf,
    pub tokens: Vec<String>,
    /// Optional search template such as `"{}"` or `func {}`.
    pub template: Option<String>,
}

impl Check {
    #[must_use]
    pub fn new<I, S>(path: impl Into<PathBuf>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            tokens: tokens.into_iter().map(Into::into).collect(),
            template: None,
        }
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// The exact text searched for `token`.
    #[must_use]
    pub fn needle<'a>(&self, token: &'a str) -> Cow<'a, str> {
        match &self.template {
            Some(template) => Cow::Owned(template.replace(TEMPLATE_PLACEHOLDER, token)),
            None => Cow::Borrowed(token),
        }
    }

    /// Evaluate this check against already-loaded text.
    #[must_use]
    pub fn evaluate(&self, text: &str) -> CheckResult {
        let tokens = self
            .tokens
            .iter()
            .map(|token| (token.clone(), text.contains(self.needle(token).as_ref())))
            .collect();
        CheckResult {
            path: self.path.clone(),
            tokens,
            file_issue: None,
        }
    }

    /// Result with every token absent and the given file issue recorded.
    #[must_use]
    pub fn unavailable(&self, issue: FileIssue) -> CheckResult {
        CheckResult {
            path: self.path.clone(),
            tokens: self.tokens.iter().map(|t| (t.clone(), false)).collect(),
            file_issue: Some(issue),
        }
    }
}

/// Why a file's text could not be inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileIssue {
    /// Missing or unreadable.
    Unavailable {
        kind: std::io::ErrorKind,
        message: String,
    },
    /// Not valid UTF-8.
    Decode,
}

impl FileIssue {
    #[must_use]
    pub fn from_io(err: &std::io::Error) -> Self {
        Self::Unavailable {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "unavailable",
            Self::Decode => "not UTF-8",
        }
    }

    #[must_use]
    pub fn into_error(self, path: PathBuf) -> TokenGuardError {
        match self {
            Self::Unavailable { kind, message } => TokenGuardError::FileUnavailable {
                path,
                source: std::io::Error::new(kind, message),
            },
            Self::Decode => TokenGuardError::Decode { path },
        }
    }
}

impl std::fmt::Display for FileIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { message, .. } => write!(f, "unavailable ({message})"),
            Self::Decode => f.write_str("not valid UTF-8"),
        }
    }
}

/// Outcome of one [`Check`]: token presence in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub path: PathBuf,
    pub tokens: IndexMap<String, bool>,
    pub file_issue: Option<FileIssue>,
}

impl CheckResult {
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.tokens.values().filter(|found| **found).count()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_found(&self, token: &str) -> Option<bool> {
        self.tokens.get(token).copied()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.file_issue.is_none() && self.found_count() == self.total_count()
    }

    #[must_use]
    pub const fn is_file_unavailable(&self) -> bool {
        matches!(self.file_issue, Some(FileIssue::Unavailable { .. }))
    }

    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|(_, found)| !**found)
            .map(|(token, _)| token.as_str())
    }

    #[must_use]
    pub fn completion(&self) -> Completion {
        Completion::new(self.found_count(), self.total_count())
    }

    /// Turn a soft file issue into an error for callers that abort the batch.
    ///
    /// # Errors
    /// Returns `FileUnavailable` or `Decode` if the file could not be inspected.
    pub fn require_file(self) -> Result<Self> {
        match self.file_issue {
            Some(issue) => Err(issue.into_error(self.path)),
            None => Ok(self),
        }
    }
}

pub type CachedText = std::result::Result<Rc<str>, FileIssue>;

/// Runs checks and extractions against files under a project root.
///
/// File contents are cached for the lifetime of the validator, so each file
/// is read at most once per audit run.
pub struct StructuralValidator<'a> {
    root: PathBuf,
    fs: &'a dyn FileSystem,
    cache: RefCell<HashMap<PathBuf, CachedText>>,
}

impl<'a> StructuralValidator<'a> {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, fs: &'a dyn FileSystem) -> Self {
        Self {
            root: root.into(),
            fs,
            cache: RefCell::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a project file as UTF-8 text.
    ///
    /// # Errors
    /// Returns `FileUnavailable` if the file cannot be read and `Decode` if it
    /// is not valid UTF-8.
    pub fn read_text(&self, path: &Path) -> Result<Rc<str>> {
        self.text(path)
            .map_err(|issue| issue.into_error(path.to_path_buf()))
    }

    /// Read a project file as UTF-8 text, reporting problems as a [`FileIssue`].
    ///
    /// # Errors
    /// Returns the issue that prevented reading or decoding the file.
    pub fn text(&self, path: &Path) -> CachedText {
        if let Some(cached) = self.cache.borrow().get(path) {
            return cached.clone();
        }

        let full = resolve(&self.root, path);
        let loaded = match self.fs.read(&full) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Rc::from)
                .map_err(|_| FileIssue::Decode),
            Err(e) => Err(FileIssue::from_io(&e)),
        };

        self.cache
            .borrow_mut()
            .insert(path.to_path_buf(), loaded.clone());
        loaded
    }

    /// Whether a project-relative path exists.
    #[must_use]
    pub fn exists(&self, path: &Path) -> bool {
        self.fs.exists(&resolve(&self.root, path))
    }

    /// Check token presence in one file. File problems are reported on the
    /// result, never raised.
    #[must_use]
    pub fn run_check(&self, check: &Check) -> CheckResult {
        match self.text(&check.path) {
            Ok(text) => check.evaluate(&text),
            Err(issue) => check.unavailable(issue),
        }
    }

    /// One result per check, in input order. Never short-circuits.
    #[must_use]
    pub fn run_batch(&self, checks: &[Check]) -> Vec<CheckResult> {
        checks.iter().map(|check| self.run_check(check)).collect()
    }

    /// Extract records from a project file.
    ///
    /// # Errors
    /// Returns `FileUnavailable` or `Decode` if the file cannot be inspected.
    pub fn extract(
        &self,
        path: &Path,
        pattern: &ExtractionPattern,
    ) -> Result<indexmap::IndexSet<String>> {
        let text = self.read_text(path)?;
        Ok(extract_records(&text, pattern))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
