//! Live registry source
//!
//! Fetches package metadata over HTTP from a configured registry base URL.
//! API endpoint: {repository_url}/{package}, returning a document shaped as
//! `{"versions": {"<version>": {"dependencies": {...}}}}`.

use crate::error::RegistryError;
use crate::registry::{HttpClient, PackageInfoSource, PackageMetadata};
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Deserialize;

/// Live registry source
pub struct LiveSource {
    client: HttpClient,
    base_url: String,
}

/// Registry package document
#[derive(Debug, Deserialize)]
struct VersionsResponse {
    /// Published versions keyed by version string, in document order
    #[serde(default)]
    versions: IndexMap<String, PackageMetadata>,
}

impl LiveSource {
    /// Create a new live source for the given registry base URL
    pub fn new(client: HttpClient, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package)
    }

    /// Pick the metadata entry for the requested version.
    ///
    /// When the requested version is absent the FIRST entry in the
    /// response's own iteration order is returned instead. That order is
    /// whatever the registry sent, not "latest" by any version semantic;
    /// the fallback is intentionally preserved as-is for compatibility.
    fn resolve(
        &self,
        package: &str,
        version: &str,
        mut versions: IndexMap<String, PackageMetadata>,
    ) -> Result<PackageMetadata, RegistryError> {
        if let Some(meta) = versions.shift_remove(version) {
            return Ok(meta);
        }

        match versions.into_iter().next() {
            Some((_, meta)) => Ok(meta),
            None => Err(RegistryError::no_versions(package)),
        }
    }
}

#[async_trait]
impl PackageInfoSource for LiveSource {
    fn source_name(&self) -> &'static str {
        "live"
    }

    async fn get_package_info(
        &self,
        name: &str,
        version: &str,
    ) -> Result<PackageMetadata, RegistryError> {
        let url = self.build_url(name);
        let response: VersionsResponse = self
            .client
            .get_json(&url, name, self.source_name())
            .await?;

        self.resolve(name, version, response.versions)
    }
}
