//! Test-mode metadata source backed by a registry snapshot file
//!
//! The snapshot is a single JSON document mapping package names to their
//! metadata. It is read fully into memory when the source is constructed,
//! so a missing or unparseable file fails the run before any traversal
//! begins. A package absent from the snapshot yields empty metadata.

use crate::error::{FixtureError, RegistryError};
use crate::registry::{PackageInfoSource, PackageMetadata};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::path::Path;

/// Registry snapshot source for test mode
pub struct FixtureSource {
    packages: IndexMap<String, PackageMetadata>,
}

impl FixtureSource {
    /// Load a snapshot file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FixtureError::not_found(path));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| FixtureError::read_error(path, e))?;

        let packages: IndexMap<String, PackageMetadata> = serde_json::from_str(&content)
            .map_err(|e| FixtureError::parse_error(path, e.to_string()))?;

        Ok(Self { packages })
    }

    /// Build a source from an in-memory snapshot (for tests)
    pub fn from_packages(packages: IndexMap<String, PackageMetadata>) -> Self {
        Self { packages }
    }

    /// Number of packages in the snapshot
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[async_trait]
impl PackageInfoSource for FixtureSource {
    fn source_name(&self) -> &'static str {
        "fixture"
    }

    async fn get_package_info(
        &self,
        name: &str,
        _version: &str,
    ) -> Result<PackageMetadata, RegistryError> {
        // The snapshot is keyed by name only; an unknown package is an
        // empty record, not an error.
        Ok(self.packages.get(name).cloned().unwrap_or_default())
    }
}
