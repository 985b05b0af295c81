use indexmap::IndexSet;
use regex::Regex;

use crate::error::{Result, TokenGuardError};

/// Default number of characters scanned after an anchor.
pub const DEFAULT_WINDOW: usize = 2000;

/// Text that must follow an anchor match.
#[derive(Debug, Clone)]
enum Marker {
    Literal(String),
    Pattern(Regex),
}

impl Marker {
    fn as_str(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Pattern(regex) => regex.as_str(),
        }
    }

    fn is_found_in(&self, text: &str) -> bool {
        match self {
            Self::Literal(marker) => text.contains(marker.as_str()),
            Self::Pattern(regex) => regex.is_match(text),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| TokenGuardError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Anchor regex plus an optional marker that must follow within a window.
///
/// The window is a fixed-size approximation of "inside the same block": it
/// does not track brace nesting.
#[derive(Debug, Clone)]
pub struct ExtractionPattern {
    anchor: Regex,
    marker: Option<Marker>,
    window: usize,
}

impl ExtractionPattern {
    /// Compile an anchor pattern. Capture group 1 is the record; without a
    /// capture group the whole match is used.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the regex does not compile.
    pub fn new(anchor: &str) -> Result<Self> {
        Ok(Self {
            anchor: compile(anchor)?,
            marker: None,
            window: DEFAULT_WINDOW,
        })
    }

    /// Require a literal substring inside the window.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(Marker::Literal(marker.into()));
        self
    }

    /// Require a regex match inside the window, e.g. `"element":\s*"ice"`.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the regex does not compile.
    pub fn with_marker_regex(mut self, marker: &str) -> Result<Self> {
        self.marker = Some(Marker::Pattern(compile(marker)?));
        Ok(self)
    }

    #[must_use]
    pub const fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    #[must_use]
    pub fn anchor(&self) -> &str {
        self.anchor.as_str()
    }

    #[must_use]
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_ref().map(Marker::as_str)
    }

    #[must_use]
    pub const fn marker_is_regex(&self) -> bool {
        matches!(self.marker, Some(Marker::Pattern(_)))
    }

    #[must_use]
    pub const fn window(&self) -> usize {
        self.window
    }

    #[must_use]
    pub fn has_capture_group(&self) -> bool {
        self.anchor.captures_len() > 1
    }
}

/// Collect every record matched by `pattern`, deduplicated in first-seen order.
#[must_use]
pub fn extract_records(text: &str, pattern: &ExtractionPattern) -> IndexSet<String> {
    let mut records = IndexSet::new();

    for caps in pattern.anchor.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let record = caps.get(1).unwrap_or(whole);

        if let Some(marker) = &pattern.marker {
            let following = window_after(text, whole.end(), pattern.window);
            if !marker.is_found_in(following) {
                continue;
            }
        }

        records.insert(record.as_str().to_string());
    }

    records
}

/// Slice of at most `chars` characters starting at byte offset `start`.
///
/// `start` must lie on a char boundary.
#[must_use]
pub fn window_after(text: &str, start: usize, chars: usize) -> &str {
    let rest = &text[start..];
    let end = rest.char_indices().nth(chars).map_or(rest.len(), |(i, _)| i);
    &rest[..end]
}

/// Whether any needle appears within `window` characters of the first
/// occurrence of `anchor`, counted from the start of the anchor.
#[must_use]
pub fn associated<S: AsRef<str>>(text: &str, anchor: &str, needles: &[S], window: usize) -> bool {
    let Some(start) = text.find(anchor) else {
        return false;
    };
    let nearby = window_after(text, start, window);
    needles.iter().any(|needle| nearby.contains(needle.as_ref()))
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
