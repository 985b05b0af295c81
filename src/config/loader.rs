use std::path::{Path, PathBuf};

use crate::error::{Result, TokenGuardError};
use crate::source::{FileSystem, RealFileSystem};

use super::Config;
use super::model::CONFIG_VERSION;
use super::presets;

/// Default audit definition file name, looked up in the project root.
pub const LOCAL_CONFIG_NAME: &str = ".token-guard.toml";

/// Where a loaded definition came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Preset(String),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Preset(name) => write!(f, "preset:{name}"),
        }
    }
}

/// Result of loading a definition, containing both the config and its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    pub source: ConfigSource,
}

/// Trait for loading audit definitions from various sources.
pub trait ConfigLoader {
    /// Load `.token-guard.toml` from the project root.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or invalid.
    fn load(&self, root: &Path) -> Result<LoadResult>;

    /// Load a definition from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;

    /// Load a built-in preset.
    ///
    /// # Errors
    /// Returns an error if the preset name is unknown.
    fn load_preset(&self, name: &str) -> Result<LoadResult>;
}

/// Validate definition version. Returns an error if version is unsupported.
fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(TokenGuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Parse a definition from TOML text.
///
/// # Errors
/// Returns an error on invalid TOML or an unsupported version.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate_config_version(&config)?;
    Ok(config)
}

pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn read_config(&self, path: &Path) -> Result<Config> {
        let bytes = self
            .fs
            .read(path)
            .map_err(|source| TokenGuardError::FileUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        let content = String::from_utf8(bytes).map_err(|_| TokenGuardError::Decode {
            path: path.to_path_buf(),
        })?;
        parse_config(&content)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, root: &Path) -> Result<LoadResult> {
        let path = root.join(LOCAL_CONFIG_NAME);
        if !self.fs.exists(&path) {
            return Err(TokenGuardError::Config(format!(
                "No {LOCAL_CONFIG_NAME} found in {}. Use --config, --preset, or `token-guard init`.",
                root.display()
            )));
        }
        self.load_from_path(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        Ok(LoadResult {
            config: self.read_config(path)?,
            source: ConfigSource::File(path.to_path_buf()),
        })
    }

    fn load_preset(&self, name: &str) -> Result<LoadResult> {
        let content = presets::preset_source(name)?;
        let config = parse_config(content).map_err(|e| {
            TokenGuardError::Config(format!("Failed to parse preset '{name}': {e}"))
        })?;
        Ok(LoadResult {
            config,
            source: ConfigSource::Preset(name.to_string()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
