//! Integration tests for depgraph
//!
//! These tests verify the traversal properties of the graph builder
//! against fixture-backed registries:
//! - Termination and depth bounding
//! - Single fetch per package across branches
//! - Cycle pruning and reporting
//! - Discovery-order output

use depgraph::analyzer::DependencyAnalyzer;
use depgraph::config::{Config, Mode};
use depgraph::graph::GraphBuilder;
use depgraph::registry::FixtureSource;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a registry snapshot into a temp dir and return its path
fn write_snapshot(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("registry.json");
    fs::write(&path, content).unwrap();
    path
}

fn test_config(snapshot: &Path, package: &str, version: &str, max_depth: u32) -> Config {
    Config {
        package_name: package.to_string(),
        repository_url: snapshot.to_str().unwrap().to_string(),
        mode: Mode::Test,
        version: version.to_string(),
        output_file: snapshot.parent().unwrap().join("graph.json"),
        max_depth,
    }
}

mod traversal {
    use super::*;

    const DIAMOND: &str = r#"{
        "A": {"dependencies": {"B": "1.0", "C": "1.0"}},
        "B": {"dependencies": {}},
        "C": {"dependencies": {"B": "1.0"}}
    }"#;

    /// The reference end-to-end scenario: a diamond over three packages
    #[tokio::test]
    async fn test_diamond_scenario() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_snapshot(&dir, DIAMOND);

        let config = test_config(&snapshot, "A", "1.0", 5);
        let analyzer = DependencyAnalyzer::from_config(config).unwrap();
        let result = analyzer.run_analysis(false).await.unwrap();

        let names: Vec<_> = result.graph.keys().cloned().collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let a_deps: Vec<_> = result.graph["A"].keys().cloned().collect();
        assert_eq!(a_deps, vec!["B", "C"]);
        assert!(result.graph["B"].is_empty());
        assert_eq!(result.graph["C"].get("B"), Some(&"1.0".to_string()));
        assert!(result.cycles.is_empty());
    }

    /// A cyclic registry terminates and reports the chain
    #[tokio::test]
    async fn test_cycle_terminates_and_reports() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_snapshot(
            &dir,
            r#"{
                "A": {"dependencies": {"B": "1.0"}},
                "B": {"dependencies": {"A": "1.0"}}
            }"#,
        );

        let config = test_config(&snapshot, "A", "1.0", 10);
        let analyzer = DependencyAnalyzer::from_config(config).unwrap();
        let result = analyzer.run_analysis(false).await.unwrap();

        let names: Vec<_> = result.graph.keys().cloned().collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(result.cycles.len(), 1);
        assert_eq!(result.cycles[0].to_string(), "A -> B -> A");
    }

    /// Depth bounding on a linear chain: depth 0 and 1 visited, depth 2 cut
    #[tokio::test]
    async fn test_depth_bound_on_chain() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_snapshot(
            &dir,
            r#"{
                "A": {"dependencies": {"B": "1.0"}},
                "B": {"dependencies": {"C": "1.0"}},
                "C": {"dependencies": {"D": "1.0"}},
                "D": {"dependencies": {}}
            }"#,
        );

        let config = test_config(&snapshot, "A", "1.0", 1);
        let analyzer = DependencyAnalyzer::from_config(config).unwrap();
        let result = analyzer.run_analysis(false).await.unwrap();

        let names: Vec<_> = result.graph.keys().cloned().collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    /// A root package absent from the snapshot resolves to an empty record
    #[tokio::test]
    async fn test_unknown_root_package() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_snapshot(&dir, r#"{"A": {"dependencies": {}}}"#);

        let config = test_config(&snapshot, "unknown", "1.0", 5);
        let analyzer = DependencyAnalyzer::from_config(config).unwrap();
        let result = analyzer.run_analysis(false).await.unwrap();

        let names: Vec<_> = result.graph.keys().cloned().collect();
        assert_eq!(names, vec!["unknown"]);
        assert!(result.graph["unknown"].is_empty());
    }

    /// Metadata records without a dependencies field contribute no children
    #[tokio::test]
    async fn test_missing_dependencies_field() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_snapshot(
            &dir,
            r#"{
                "A": {"dependencies": {"B": "1.0"}},
                "B": {}
            }"#,
        );

        let config = test_config(&snapshot, "A", "1.0", 5);
        let analyzer = DependencyAnalyzer::from_config(config).unwrap();
        let result = analyzer.run_analysis(false).await.unwrap();

        assert!(result.graph["B"].is_empty());
    }

    /// A wide and deep registry still terminates within the depth bound
    #[tokio::test]
    async fn test_termination_on_dense_graph() {
        // Every package depends on every other package.
        let names = ["p0", "p1", "p2", "p3", "p4"];
        let mut snapshot = serde_json::Map::new();
        for name in names {
            let deps: serde_json::Map<String, serde_json::Value> = names
                .iter()
                .filter(|n| **n != name)
                .map(|n| (n.to_string(), serde_json::Value::from("1.0")))
                .collect();
            let mut record = serde_json::Map::new();
            record.insert("dependencies".to_string(), deps.into());
            snapshot.insert(name.to_string(), record.into());
        }

        let dir = TempDir::new().unwrap();
        let path = write_snapshot(&dir, &serde_json::to_string(&snapshot).unwrap());

        let config = test_config(&path, "p0", "1.0", 3);
        let analyzer = DependencyAnalyzer::from_config(config).unwrap();
        let result = analyzer.run_analysis(false).await.unwrap();

        assert_eq!(result.graph.len(), 5);
    }
}

mod builder_direct {
    use super::*;

    /// The builder works against any source without an analyzer
    #[tokio::test]
    async fn test_builder_with_fixture_source() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_snapshot(
            &dir,
            r#"{
                "root": {"dependencies": {"leaf": "0.1"}},
                "leaf": {"dependencies": {}}
            }"#,
        );

        let source = FixtureSource::load(&snapshot).unwrap();
        let result = GraphBuilder::new(&source, 5)
            .build("root", "1.0")
            .await
            .unwrap();

        let names: Vec<_> = result.graph.keys().cloned().collect();
        assert_eq!(names, vec!["root", "leaf"]);
    }
}
