//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Per-package direct dependency listing in discovery order
//! - Cycle diagnostics
//! - Verbose mode with version specifiers

use crate::analyzer::AnalysisResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn package_label(&self, name: &str) -> String {
        if self.color {
            name.cyan().bold().to_string()
        } else {
            name.to_string()
        }
    }

    fn dim_label(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn cycle_label(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn dependency_list(&self, deps: &crate::registry::DependencyMap) -> String {
        if deps.is_empty() {
            return self.dim_label("(none)");
        }

        let entries: Vec<String> = deps
            .iter()
            .map(|(name, version)| {
                if self.verbosity == Verbosity::Verbose {
                    format!("{}@{}", name, version)
                } else {
                    name.clone()
                }
            })
            .collect();
        entries.join(", ")
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &AnalysisResult, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            let count = result.graph.len();
            let noun = if count == 1 { "package" } else { "packages" };
            writeln!(
                writer,
                "Dependency graph for {}@{} ({} {})",
                self.package_label(&result.root),
                result.root_version,
                count,
                noun
            )?;
            writeln!(writer)?;
        }

        for (package, deps) in &result.graph {
            writeln!(
                writer,
                "  {}: {}",
                self.package_label(package),
                self.dependency_list(deps)
            )?;
        }

        if self.verbosity != Verbosity::Quiet && !result.cycles.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "Cycles detected:")?;
            for cycle in &result.cycles {
                writeln!(writer, "  {}", self.cycle_label(&cycle.to_string()))?;
            }
        }

        Ok(())
    }
}
