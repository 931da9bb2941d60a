//! Tag graph
//!
//! This module provides the tag graph and its path queries:
//! - Tag nodes with ordered parent and child edges
//! - An arena-backed graph built once through a builder
//! - Enumeration of every path to all ancestors and all descendants
//! - Delimited string forms of those paths
//! - JSON snapshots of a graph

pub mod error;
pub mod format;
pub mod graph;
pub mod node;
pub mod paths;
pub mod snapshot;


pub use error::TagError;
pub use format::{contains, join_path, join_paths};
pub use graph::{TagGraph, TagGraphBuilder, TagRef, DEFAULT_DELIMITER};
pub use node::{TagId, TagNode, TagPath, Tagger};
pub use paths::{ancestor_paths, descendant_paths};
pub use snapshot::{GraphSnapshot, TagEntry};
