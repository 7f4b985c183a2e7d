//! Analysis configuration loaded from a YAML file
//!
//! The configuration carries the six parameters every analysis run needs:
//! root package name and version, registry location, mode (live registry or
//! static snapshot), output file path, and the maximum traversal depth.
//! All six are required; validation names the first missing field.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// How package metadata is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read from a local JSON registry snapshot
    Test,
    /// Query a live registry over HTTP
    Live,
}

impl Mode {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "test" => Ok(Mode::Test),
            "live" => Ok(Mode::Live),
            other => Err(ConfigError::InvalidMode {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Test => write!(f, "test"),
            Mode::Live => write!(f, "live"),
        }
    }
}

/// Raw file schema before required-field validation
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    package_name: Option<String>,
    repository_url: Option<String>,
    mode: Option<String>,
    version: Option<String>,
    output_file: Option<PathBuf>,
    max_depth: Option<u32>,
}

/// Validated analysis configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root package to analyze
    pub package_name: String,
    /// Registry base URL (live mode) or snapshot file path (test mode)
    pub repository_url: String,
    /// Metadata source mode
    pub mode: Mode,
    /// Requested version of the root package
    pub version: String,
    /// Path the resolved graph is written to
    pub output_file: PathBuf,
    /// Maximum traversal depth; nodes deeper than this are cut
    pub max_depth: u32,
}

impl Config {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::not_found(path));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::read_error(path, e))?;

        let raw: RawConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| ConfigError::yaml_parse_error(path, e.to_string()))?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let package_name = raw
            .package_name
            .ok_or(ConfigError::missing_field("package_name"))?;
        let repository_url = raw
            .repository_url
            .ok_or(ConfigError::missing_field("repository_url"))?;
        let mode = raw.mode.ok_or(ConfigError::missing_field("mode"))?;
        let version = raw.version.ok_or(ConfigError::missing_field("version"))?;
        let output_file = raw
            .output_file
            .ok_or(ConfigError::missing_field("output_file"))?;
        let max_depth = raw
            .max_depth
            .ok_or(ConfigError::missing_field("max_depth"))?;

        Ok(Config {
            package_name,
            repository_url,
            mode: Mode::parse(&mode)?,
            version,
            output_file,
            max_depth,
        })
    }
}
