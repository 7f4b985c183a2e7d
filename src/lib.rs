//! depgraph - Transitive dependency graph analyzer library
//!
//! This library provides the core functionality for resolving the
//! transitive dependency graph of a package:
//! - Package metadata sources (live registry or static fixture)
//! - Depth-first graph construction with cycle detection
//! - Text and JSON result formatting

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod output;
pub mod progress;
pub mod registry;
