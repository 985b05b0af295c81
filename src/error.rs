use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File unavailable: {path}")]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    Decode { path: PathBuf },

    #[error("Invalid extraction pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl TokenGuardError {
    /// Short category label used as the heading of stderr diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileUnavailable { .. } => "FileUnavailable",
            Self::Decode { .. } => "Decode",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileUnavailable { path, .. } | Self::Decode { path } => {
                path.display().to_string()
            }
            Self::InvalidPattern { pattern, .. } => pattern.clone(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileUnavailable { source, .. } => Some(source.to_string()),
            Self::Decode { .. } => Some("content is not valid UTF-8 text".to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => e.span().map(|span| format!("at bytes {span:?}")),
            Self::Config(_) | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileUnavailable { .. } => {
                Some("check that --root points at the project directory")
            }
            Self::Decode { .. } => Some("convert the file to UTF-8"),
            Self::InvalidPattern { .. } => {
                Some("anchors use Rust regex syntax and need one capture group")
            }
            Self::TomlParse(_) => Some("run `token-guard config validate` for details"),
            Self::Config(_) | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TokenGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
