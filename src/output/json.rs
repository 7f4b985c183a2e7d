//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the analysis result
//! - Writing the resolved graph to the configured output file

use crate::analyzer::AnalysisResult;
use crate::error::AppError;
use crate::graph::DependencyGraph;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Root package the traversal started from
    root: &'a str,
    /// Requested version of the root package
    version: &'a str,
    /// Package name -> direct dependency map, in discovery order
    packages: &'a DependencyGraph,
    /// Cycle chains encountered during the traversal
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cycles: Vec<String>,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &AnalysisResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            root: &result.root,
            version: &result.root_version,
            packages: &result.graph,
            cycles: result.cycles.iter().map(|c| c.to_string()).collect(),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}

/// Write the resolved graph to the output file as pretty JSON,
/// keyed by package name and preserving discovery order.
pub fn write_graph(path: &Path, graph: &DependencyGraph) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(graph).map_err(|e| AppError::GraphWrite {
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
    })?;

    std::fs::write(path, json).map_err(|e| AppError::GraphWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
