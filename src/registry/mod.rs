//! Package metadata sources
//!
//! This module provides:
//! - The PackageInfoSource trait every metadata source implements
//! - HTTP client shared foundation
//! - Live registry source (HTTP)
//! - Fixture source backed by a local registry snapshot (test mode)

mod client;
mod fixture;
mod live;

pub use client::HttpClient;
pub use fixture::FixtureSource;
pub use live::LiveSource;

use crate::config::{Config, Mode};
use crate::error::{AppError, RegistryError};
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from dependency name to its declared version specifier.
///
/// Specifiers are opaque strings; they are never parsed or compared.
/// Iteration order follows the order the mapping was built in.
pub type DependencyMap = IndexMap<String, String>;

/// Metadata for a single package version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Direct dependencies declared by this version.
    /// A missing field in the source document means no dependencies.
    #[serde(default)]
    pub dependencies: DependencyMap,
}

impl PackageMetadata {
    /// Creates metadata with the given dependency mapping
    pub fn new(dependencies: DependencyMap) -> Self {
        Self { dependencies }
    }

    /// Metadata with no dependencies
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Trait for package metadata sources
#[async_trait]
pub trait PackageInfoSource: Send + Sync {
    /// Human-readable name of this source, used in error messages
    fn source_name(&self) -> &'static str;

    /// Fetch metadata for a package at the requested version.
    ///
    /// Sources may substitute a different version when the requested one
    /// is not available (see [`LiveSource`]); the traversal treats whatever
    /// comes back as authoritative for the package.
    async fn get_package_info(
        &self,
        name: &str,
        version: &str,
    ) -> Result<PackageMetadata, RegistryError>;
}

/// Create the metadata source selected by the configuration mode
pub fn create_source(config: &Config) -> Result<Box<dyn PackageInfoSource>, AppError> {
    match config.mode {
        Mode::Test => Ok(Box::new(FixtureSource::load(&config.repository_url)?)),
        Mode::Live => {
            let client = HttpClient::new()?;
            Ok(Box::new(LiveSource::new(
                client,
                config.repository_url.clone(),
            )))
        }
    }
}
