//! Dependency graph construction
//!
//! This module provides:
//! - Depth-first traversal over a lazily-discovered package graph
//! - Depth bounding and path-relative cycle detection
//! - Global memoization so each package is fetched at most once

use crate::error::RegistryError;
use crate::progress::Progress;
use crate::registry::{DependencyMap, PackageInfoSource};
use indexmap::IndexMap;
use std::fmt;

/// Mapping from every visited package to its direct dependency map.
/// Insertion order is discovery order.
pub type DependencyGraph = IndexMap<String, DependencyMap>;

/// A dependency cycle found during traversal.
///
/// Cycles are diagnosable events, not errors: the offending branch is
/// pruned and the traversal continues elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    chain: Vec<String>,
}

impl CycleReport {
    /// Build a report from the ancestor chain plus the repeated name
    pub fn new(path: &[String], repeated: &str) -> Self {
        let mut chain = path.to_vec();
        chain.push(repeated.to_string());
        Self { chain }
    }

    /// The full chain, ending with the repeated package name
    pub fn chain(&self) -> &[String] {
        &self.chain
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chain.join(" -> "))
    }
}

/// Result of a graph construction run
#[derive(Debug)]
pub struct GraphBuildResult {
    /// The accumulated dependency graph
    pub graph: DependencyGraph,
    /// Cycles encountered during the traversal
    pub cycles: Vec<CycleReport>,
}

/// Depth-first builder of the transitive dependency graph.
///
/// Created per run; `build` consumes the builder and returns the graph,
/// so no state outlives the traversal.
pub struct GraphBuilder<'a> {
    source: &'a dyn PackageInfoSource,
    max_depth: u32,
    progress: Progress,
    graph: DependencyGraph,
    cycles: Vec<CycleReport>,
}

impl<'a> GraphBuilder<'a> {
    /// Create a builder over the given metadata source
    pub fn new(source: &'a dyn PackageInfoSource, max_depth: u32) -> Self {
        Self {
            source,
            max_depth,
            progress: Progress::disabled(),
            graph: DependencyGraph::new(),
            cycles: Vec::new(),
        }
    }

    /// Attach a progress reporter updated with each package being resolved
    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    /// Build the graph starting from the root package
    pub async fn build(
        mut self,
        name: &str,
        version: &str,
    ) -> Result<GraphBuildResult, RegistryError> {
        let outcome = self
            .visit(name.to_string(), version.to_string(), 0, Vec::new())
            .await;
        self.progress.finish_and_clear();
        outcome?;

        Ok(GraphBuildResult {
            graph: self.graph,
            cycles: self.cycles,
        })
    }

    /// Visit one package: guard, fetch, record, then expand its children.
    ///
    /// `path` is the ancestor chain from the root to this node, exclusive
    /// of the node itself; each child gets its own copy, so sibling
    /// branches never observe each other's frames.
    async fn visit(
        &mut self,
        name: String,
        version: String,
        depth: u32,
        path: Vec<String>,
    ) -> Result<(), RegistryError> {
        // Strictly greater: a node at exactly max_depth is still visited,
        // its children are the ones cut off.
        if depth > self.max_depth {
            return Ok(());
        }

        if path.contains(&name) {
            self.cycles.push(CycleReport::new(&path, &name));
            return Ok(());
        }

        self.progress
            .set_message(&format!("Resolving {}@{}", name, version));

        let info = self.source.get_package_info(&name, &version).await?;
        let dependencies = info.dependencies;
        self.graph.insert(name.clone(), dependencies.clone());

        let mut child_path = path;
        child_path.push(name);

        for (dep_name, dep_version) in dependencies {
            // A package already in the graph is never re-fetched, with one
            // exception: an ancestor on the current path stays eligible so
            // the cycle guard above can surface the chain.
            if self.graph.contains_key(&dep_name) && !child_path.contains(&dep_name) {
                continue;
            }
            Box::pin(self.visit(dep_name, dep_version, depth + 1, child_path.clone())).await?;
        }

        Ok(())
    }
}
