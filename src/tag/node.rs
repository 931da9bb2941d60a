//! Tag nodes and the relationship contract shared by every tag view.

use std::fmt;

/// A path through the graph, as tag names.
pub type TagPath = Vec<String>;

/// Index of a tag inside its graph arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(pub(crate) usize);

impl TagId {
    /// Position of the tag in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which edge list a walk follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Child -> parent
    Up,
    /// Parent -> child
    Down,
}

/// A node in the tag graph
///
/// Edges are stored as arena indices on both ends. The builder writes the
/// child side and the parent side in the same step, so the two lists always
/// agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNode {
    pub(crate) name: String,
    pub(crate) children: Vec<TagId>,
    pub(crate) parents: Vec<TagId>,
}

impl TagNode {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            children: Vec::new(),
            parents: Vec::new(),
        }
    }

    /// Tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child ids in edge-insertion order
    pub fn children(&self) -> &[TagId] {
        &self.children
    }

    /// Parent ids in edge-insertion order
    pub fn parents(&self) -> &[TagId] {
        &self.parents
    }

    /// Check if this node has children
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if this node has parents
    pub fn has_parents(&self) -> bool {
        !self.parents.is_empty()
    }

    pub(crate) fn edges(&self, direction: Direction) -> &[TagId] {
        match direction {
            Direction::Up => &self.parents,
            Direction::Down => &self.children,
        }
    }
}

/// Read-only contract for interacting with a tag in a graph.
///
/// None of these operations can fail. A tag without edges yields empty name
/// lists and a single one-element path.
pub trait Tagger {
    /// The tag's name
    fn name(&self) -> &str;

    /// Child names in edge-insertion order
    fn children(&self) -> Vec<String>;

    /// Parent names in edge-insertion order
    fn parents(&self) -> Vec<String>;

    /// Every simple path from an ancestor down to this tag.
    ///
    /// Each path ends with this tag's name and starts with the most distant
    /// ancestor reached before the walk ran out of parents (or hit a tag
    /// already on the path).
    fn paths_to_all_ancestors(&self) -> Vec<TagPath>;

    /// Every simple path from this tag down to a descendant.
    ///
    /// Each path starts with this tag's name.
    fn paths_to_all_descendants(&self) -> Vec<TagPath>;

    /// Ancestor paths joined with `delim`
    fn paths_to_all_ancestors_as_string(&self, delim: &str) -> Vec<String> {
        super::format::join_paths(&self.paths_to_all_ancestors(), delim)
    }

    /// Descendant paths joined with `delim`
    fn paths_to_all_descendants_as_string(&self, delim: &str) -> Vec<String> {
        super::format::join_paths(&self.paths_to_all_descendants(), delim)
    }
}
