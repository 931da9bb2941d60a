//! Serializable form of a tag graph
//!
//! A snapshot lists tags with their child names. Parent lists are not
//! stored; loading replays every edge through the builder, which writes
//! both sides. The graph's breadcrumb delimiter travels with the snapshot
//! when one is recorded.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Result, TagError};
use super::graph::{TagGraph, TagGraphBuilder};

/// One tag and its outgoing edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

/// Flat, order-preserving description of a graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    pub tags: Vec<TagEntry>,
}

impl GraphSnapshot {
    /// Build a graph from this snapshot using an existing builder's settings.
    ///
    /// Tags are added in entry order. A child that has no entry of its own
    /// is created the first time it is referenced. A recorded delimiter
    /// replaces the builder's.
    pub fn into_graph_with(self, mut builder: TagGraphBuilder) -> Result<TagGraph> {
        if let Some(delimiter) = self.delimiter {
            builder = builder.with_delimiter(delimiter);
        }
        for entry in &self.tags {
            builder.add_tag(entry.name.as_str())?;
        }
        for entry in &self.tags {
            for child in &entry.children {
                builder.ensure_tag(child)?;
                builder.add_edge(&entry.name, child)?;
            }
        }
        Ok(builder.build())
    }
}

impl From<TagGraph> for GraphSnapshot {
    fn from(graph: TagGraph) -> Self {
        let tags = graph
            .nodes()
            .iter()
            .map(|node| TagEntry {
                name: node.name().to_string(),
                children: node
                    .children()
                    .iter()
                    .map(|&id| graph.name_of(id).to_string())
                    .collect(),
            })
            .collect();
        Self {
            delimiter: Some(graph.delimiter().to_string()),
            tags,
        }
    }
}

impl TryFrom<GraphSnapshot> for TagGraph {
    type Error = TagError;

    fn try_from(snapshot: GraphSnapshot) -> Result<Self> {
        snapshot.into_graph_with(TagGraphBuilder::new())
    }
}

impl TagGraph {
    /// Parse a graph from its JSON snapshot
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TagError::InvalidSnapshot(e.to_string()))
    }

    /// Serialize the graph as a JSON snapshot
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TagError::InvalidSnapshot(e.to_string()))
    }

    /// Load a graph from a JSON snapshot file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json_str(&content)?)
    }
}
