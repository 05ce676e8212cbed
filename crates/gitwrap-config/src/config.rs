//! Configuration types and loading.
//!
//! The main entry point is [`WrapperConfig`], loaded with [`load_config`]
//! and saved with [`save_config`]. Loading layers, lowest priority first:
//! field defaults, the YAML file (if any), then `GITWRAP_*` environment
//! variables.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use gitwrap::{FlagPolicy, ProcessRunner};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "GITWRAP_";

/// Keys whose environment values are taken verbatim rather than parsed as
/// numbers or booleans.
const STRING_KEYS: &[&str] = &["binary", "short_flags", "extra_short_flags"];

/// Characters that can never act as a short flag.
const RESERVED_FLAG_CHARS: &[char] = &['-', '='];

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    /// The layered configuration could not be extracted.
    #[error("failed to load config: {0}")]
    Load(#[from] figment::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// Settings for the git process runner.
///
/// All fields use `serde` defaults so a partially-specified file works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WrapperConfig {
    /// The git binary, either a bare name looked up on the search path or
    /// an explicit path.
    #[serde(default = "default_binary")]
    pub binary: PathBuf,

    /// Extra environment variables for every spawned git process.
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    /// Replaces the default short-flag table with exactly these characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_flags: Option<String>,

    /// Characters added to the short-flag table.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra_short_flags: String,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            env: BTreeMap::new(),
            short_flags: None,
            extra_short_flags: String::new(),
        }
    }
}

fn default_binary() -> PathBuf {
    PathBuf::from("git")
}

impl WrapperConfig {
    /// Check values that deserialize fine but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty binary or a
    /// reserved or whitespace character in a flag table.
    pub fn validate(&self) -> Result<()> {
        if self.binary.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "binary".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let tables = [
            ("short-flags", self.short_flags.as_deref().unwrap_or("")),
            ("extra-short-flags", self.extra_short_flags.as_str()),
        ];
        for (key, chars) in tables {
            if let Some(c) = chars
                .chars()
                .find(|c| c.is_whitespace() || RESERVED_FLAG_CHARS.contains(c))
            {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: format!("{c:?} cannot be a short flag"),
                });
            }
        }
        Ok(())
    }

    /// The flag policy described by `short-flags` and `extra-short-flags`.
    pub fn flag_policy(&self) -> FlagPolicy {
        let base = match &self.short_flags {
            Some(chars) => FlagPolicy::from_chars(chars.chars()),
            None => FlagPolicy::default(),
        };
        self.extra_short_flags
            .chars()
            .fold(base, FlagPolicy::with_short)
    }

    /// A process runner configured from these settings.
    pub fn runner(&self) -> ProcessRunner {
        self.env.iter().fold(
            ProcessRunner::new()
                .with_binary(&self.binary)
                .with_policy(self.flag_policy()),
            |runner, (key, value)| runner.with_env(key, value),
        )
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from `path` (if given and present) and the
/// environment.
///
/// A missing or empty file contributes nothing.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read,
/// [`ConfigError::Load`] if a layer contains invalid values and
/// [`ConfigError::InvalidValue`] if validation fails.
pub fn load_config(path: Option<&Path>) -> Result<WrapperConfig> {
    let mut figment = Figment::new();

    if let Some(path) = path.filter(|p| p.exists()) {
        let content = std::fs::read_to_string(path)?;
        if !content.trim().is_empty() {
            figment = figment.merge(Yaml::string(&content));
        }
    }

    figment = figment.merge(
        Env::prefixed(ENV_PREFIX)
            .ignore(&["config"])
            .map(|key| env_key(key.as_str()).into()),
    );
    // `Env` turns "12" into a number; string settings keep the raw text.
    for (key, value) in Env::prefixed(ENV_PREFIX).only(STRING_KEYS).iter() {
        figment = figment.merge(Serialized::default(&env_key(key.as_str()), value));
    }

    let config: WrapperConfig = figment.extract()?;
    config.validate()?;
    Ok(config)
}

/// The config key for an environment variable name with the prefix removed.
fn env_key(name: &str) -> String {
    name.replace('_', "-")
}

/// Save configuration as YAML to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] on I/O failure or [`ConfigError::Serialize`]
/// if serialization fails.
pub fn save_config(path: &Path, config: &WrapperConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
