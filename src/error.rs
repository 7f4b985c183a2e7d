//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Issues with the analysis configuration file
//! - FixtureError: Issues with the test-mode registry snapshot
//! - RegistryError: Issues with package registry communication
//!
//! All variants stay distinguishable internally; the binary entry point
//! reports them through a single uniform message.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Registry snapshot related errors
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Failure writing the result graph to the output file
    #[error("failed to write graph to {path}: {source}")]
    GraphWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to the analysis configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read configuration file
    #[error("failed to read configuration file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("failed to parse YAML in {path}: {message}")]
    YamlParseError { path: PathBuf, message: String },

    /// A required configuration field is absent
    #[error("missing required configuration field: {field}")]
    MissingField { field: &'static str },

    /// Unknown analysis mode
    #[error("invalid mode '{value}': expected 'test' or 'live'")]
    InvalidMode { value: String },
}

/// Errors related to the test-mode registry snapshot file
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Snapshot file not found
    #[error("registry snapshot not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read snapshot file
    #[error("failed to read registry snapshot {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse registry snapshot {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// The registry returned no versions for the package
    #[error("could not resolve any version of package '{package}'")]
    NoVersions { package: String },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

impl ConfigError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new YamlParseError
    pub fn yaml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::YamlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingField error
    pub fn missing_field(field: &'static str) -> Self {
        ConfigError::MissingField { field }
    }
}

impl FixtureError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        FixtureError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        FixtureError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new NoVersions error
    pub fn no_versions(package: impl Into<String>) -> Self {
        RegistryError::NoVersions {
            package: package.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}
