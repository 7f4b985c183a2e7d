//! Analysis coordinator
//!
//! Wires the configuration to a metadata source and the graph builder:
//! select source by mode, seed the traversal from the configured root
//! package, and hand the finished graph to the caller.

use crate::config::Config;
use crate::error::AppError;
use crate::graph::{CycleReport, DependencyGraph, GraphBuilder};
use crate::progress::Progress;
use crate::registry::{create_source, PackageInfoSource};

/// Coordinates one analysis run
pub struct DependencyAnalyzer {
    config: Config,
    source: Box<dyn PackageInfoSource>,
}

/// Result of a completed analysis run
#[derive(Debug)]
pub struct AnalysisResult {
    /// Root package the traversal started from
    pub root: String,
    /// Requested version of the root package
    pub root_version: String,
    /// The resolved dependency graph, in discovery order
    pub graph: DependencyGraph,
    /// Cycles encountered during the traversal
    pub cycles: Vec<CycleReport>,
}

impl DependencyAnalyzer {
    /// Create an analyzer from a validated configuration.
    ///
    /// In test mode this loads the registry snapshot eagerly, so a missing
    /// or broken snapshot fails here, before any traversal.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let source = create_source(&config)?;
        Ok(Self { config, source })
    }

    /// Create an analyzer with an explicit metadata source (for testing)
    pub fn with_source(config: Config, source: Box<dyn PackageInfoSource>) -> Self {
        Self { config, source }
    }

    /// The configuration this analyzer runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full analysis from the configured root package
    pub async fn run_analysis(&self, show_progress: bool) -> Result<AnalysisResult, AppError> {
        let mut progress = Progress::new(show_progress);
        progress.spinner("Resolving dependency graph...");

        let result = GraphBuilder::new(self.source.as_ref(), self.config.max_depth)
            .with_progress(progress)
            .build(&self.config.package_name, &self.config.version)
            .await?;

        Ok(AnalysisResult {
            root: self.config.package_name.clone(),
            root_version: self.config.version.clone(),
            graph: result.graph,
            cycles: result.cycles,
        })
    }
}
