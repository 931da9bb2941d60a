//! Tag graph arena, its builder and borrowed tag views
//!
//! Tags live in a flat `Vec` and refer to each other by [`TagId`], so
//! parent/child cycles never turn into ownership cycles. A graph is
//! assembled once through [`TagGraphBuilder`] and is read-only afterwards.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GraphConfig;

use super::error::{Result, TagError};
use super::format::{contains, join_paths};
use super::node::{TagId, TagNode, TagPath, Tagger};
use super::paths::{ancestor_paths, descendant_paths, to_names};
use super::snapshot::GraphSnapshot;

/// Delimiter used by breadcrumbs when no configuration is supplied
pub const DEFAULT_DELIMITER: &str = "/";

/// An immutable graph of named tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GraphSnapshot", try_from = "GraphSnapshot")]
pub struct TagGraph {
    nodes: Vec<TagNode>,
    index: HashMap<String, TagId>,
    delimiter: String,
}

impl Default for TagGraph {
    fn default() -> Self {
        TagGraphBuilder::new().build()
    }
}

impl TagGraph {
    /// Start building a new graph
    pub fn builder() -> TagGraphBuilder {
        TagGraphBuilder::new()
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph has no tags
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Delimiter used by breadcrumb helpers
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Look up a tag id by name
    pub fn id_of(&self, name: &str) -> Option<TagId> {
        self.index.get(name).copied()
    }

    /// Look up a tag by name
    pub fn get(&self, name: &str) -> Option<TagRef<'_>> {
        self.id_of(name).map(|id| TagRef { graph: self, id })
    }

    /// Look up a tag by id
    pub fn tag(&self, id: TagId) -> Option<TagRef<'_>> {
        (id.0 < self.nodes.len()).then_some(TagRef { graph: self, id })
    }

    /// All tags in insertion order
    pub fn iter(&self) -> impl Iterator<Item = TagRef<'_>> + '_ {
        (0..self.nodes.len()).map(move |i| TagRef {
            graph: self,
            id: TagId(i),
        })
    }

    /// Tags without parents
    pub fn roots(&self) -> Vec<TagRef<'_>> {
        self.iter().filter(|t| t.is_root()).collect()
    }

    /// Tags without children
    pub fn leaves(&self) -> Vec<TagRef<'_>> {
        self.iter().filter(|t| t.is_leaf()).collect()
    }

    pub(crate) fn node(&self, id: TagId) -> &TagNode {
        &self.nodes[id.0]
    }

    pub(crate) fn name_of(&self, id: TagId) -> &str {
        &self.nodes[id.0].name
    }

    pub(crate) fn nodes(&self) -> &[TagNode] {
        &self.nodes
    }
}

/// Incremental graph construction
///
/// Every edge is recorded on both ends at once. Names must be unique and
/// non-blank; cycle-breaking relies on a name identifying exactly one tag.
#[derive(Debug, Clone)]
pub struct TagGraphBuilder {
    nodes: Vec<TagNode>,
    index: HashMap<String, TagId>,
    delimiter: String,
}

impl Default for TagGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TagGraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Create an empty builder that takes its settings from `config`
    pub fn with_config(config: &GraphConfig) -> Self {
        Self::new().with_delimiter(config.path_delimiter.clone())
    }

    /// Set the delimiter used by breadcrumb helpers
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Add a new tag
    pub fn add_tag(&mut self, name: impl Into<String>) -> Result<TagId> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(TagError::InvalidTagName {
                reason: "Tag name cannot be empty".to_string(),
            });
        }
        if self.index.contains_key(&name) {
            return Err(TagError::TagAlreadyExists { name });
        }

        let id = TagId(self.nodes.len());
        debug!(tag = %name, %id, "Added tag");
        self.index.insert(name.clone(), id);
        self.nodes.push(TagNode::new(name));
        Ok(id)
    }

    /// Return the id of `name`, adding the tag if it is new
    pub fn ensure_tag(&mut self, name: &str) -> Result<TagId> {
        match self.index.get(name) {
            Some(&id) => Ok(id),
            None => self.add_tag(name),
        }
    }

    /// Add a parent -> child edge between two existing tags
    pub fn add_edge(&mut self, parent: &str, child: &str) -> Result<()> {
        let parent_id = self.require(parent)?;
        let child_id = self.require(child)?;

        if contains(&self.nodes[parent_id.0].children, &child_id) {
            return Err(TagError::EdgeAlreadyExists {
                parent: parent.to_string(),
                child: child.to_string(),
            });
        }

        self.nodes[parent_id.0].children.push(child_id);
        self.nodes[child_id.0].parents.push(parent_id);
        debug!(parent, child, "Added edge");
        Ok(())
    }

    /// Id of an already added tag
    pub fn id_of(&self, name: &str) -> Option<TagId> {
        self.index.get(name).copied()
    }

    /// Finish construction
    pub fn build(self) -> TagGraph {
        TagGraph {
            nodes: self.nodes,
            index: self.index,
            delimiter: self.delimiter,
        }
    }

    fn require(&self, name: &str) -> Result<TagId> {
        self.id_of(name).ok_or_else(|| TagError::TagNotFound {
            name: name.to_string(),
        })
    }
}

/// A tag borrowed from its graph
#[derive(Clone, Copy)]
pub struct TagRef<'g> {
    graph: &'g TagGraph,
    id: TagId,
}

impl<'g> TagRef<'g> {
    /// Arena id of this tag
    pub fn id(&self) -> TagId {
        self.id
    }

    /// The graph this tag belongs to
    pub fn graph(&self) -> &'g TagGraph {
        self.graph
    }

    /// The underlying node
    pub fn node(&self) -> &'g TagNode {
        self.graph.node(self.id)
    }

    /// Direct children as views
    pub fn child_refs(&self) -> impl Iterator<Item = TagRef<'g>> + 'g {
        let graph = self.graph;
        self.node()
            .children
            .iter()
            .map(move |&id| TagRef { graph, id })
    }

    /// Direct parents as views
    pub fn parent_refs(&self) -> impl Iterator<Item = TagRef<'g>> + 'g {
        let graph = self.graph;
        self.node()
            .parents
            .iter()
            .map(move |&id| TagRef { graph, id })
    }

    /// Check if this tag has no parents
    pub fn is_root(&self) -> bool {
        !self.node().has_parents()
    }

    /// Check if this tag has no children
    pub fn is_leaf(&self) -> bool {
        !self.node().has_children()
    }

    /// Ancestor paths joined with the graph's delimiter
    pub fn ancestor_breadcrumbs(&self) -> Vec<String> {
        join_paths(&self.paths_to_all_ancestors(), self.graph.delimiter())
    }

    /// Descendant paths joined with the graph's delimiter
    pub fn descendant_breadcrumbs(&self) -> Vec<String> {
        join_paths(&self.paths_to_all_descendants(), self.graph.delimiter())
    }
}

impl Tagger for TagRef<'_> {
    fn name(&self) -> &str {
        self.graph.name_of(self.id)
    }

    fn children(&self) -> Vec<String> {
        self.child_refs().map(|t| t.name().to_string()).collect()
    }

    fn parents(&self) -> Vec<String> {
        self.parent_refs().map(|t| t.name().to_string()).collect()
    }

    fn paths_to_all_ancestors(&self) -> Vec<TagPath> {
        to_names(self.graph, ancestor_paths(self.graph, self.id))
    }

    fn paths_to_all_descendants(&self) -> Vec<TagPath> {
        to_names(self.graph, descendant_paths(self.graph, self.id))
    }
}

impl PartialEq for TagRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for TagRef<'_> {}

impl fmt::Debug for TagRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagRef")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}
