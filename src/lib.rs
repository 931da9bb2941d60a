//! tag-graph - named tags in a parent/child graph
//!
//! This crate provides:
//! - An arena-backed tag graph with ordered parent and child edges
//! - Enumeration of every path from a tag to all of its ancestors and all
//!   of its descendants, with cycle-breaking
//! - Delimited string forms of those paths
//! - JSON snapshots of a graph
//! - JSON file configuration and an optional `tracing` subscriber setup
//!
//! ```
//! use tag_graph::{TagGraph, Tagger};
//!
//! let mut builder = TagGraph::builder();
//! for name in ["A", "B", "C", "D"] {
//!     builder.add_tag(name).unwrap();
//! }
//! builder.add_edge("A", "B").unwrap();
//! builder.add_edge("A", "C").unwrap();
//! builder.add_edge("B", "D").unwrap();
//! builder.add_edge("C", "D").unwrap();
//! let graph = builder.build();
//!
//! let d = graph.get("D").unwrap();
//! assert_eq!(d.paths_to_all_ancestors_as_string("/"), vec!["A/B/D", "A/C/D"]);
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod tag;

// Re-export commonly used items
pub use crate::core::error::{Result, TagGraphError};
pub use config::{ConfigStore, ConfigStoreConfig, GraphConfig};
pub use logging::{LoggingConfig, LoggingSystem};
pub use tag::{TagError, TagGraph, TagGraphBuilder, TagId, TagPath, TagRef, Tagger};
