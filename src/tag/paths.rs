//! Path enumeration over the tag graph
//!
//! Both walks are depth-first over one edge list, in edge-insertion order.
//! The walk keeps its own frame stack rather than recursing, so a long chain
//! of tags cannot exhaust the thread stack. A single trail is pushed on the
//! way down and popped on the way back, and a path is copied out only when
//! it can no longer be extended.
//!
//! Cycle-breaking: an edge whose far end is already on the trail is skipped.
//! Only that edge is dropped; the remaining edges of the same tag are still
//! expanded.

use tracing::{debug, trace};

use super::graph::TagGraph;
use super::node::{Direction, TagId};

/// Every simple path from an ancestor of `start` down to `start`.
///
/// Paths are ordered most distant ancestor first and always end with
/// `start`. A tag with no parents yields `[[start]]`.
///
/// # Panics
///
/// If `start` does not belong to `graph`.
pub fn ancestor_paths(graph: &TagGraph, start: TagId) -> Vec<Vec<TagId>> {
    let mut paths = walk_from(graph, start, Direction::Up);
    for path in &mut paths {
        path.reverse();
    }
    debug!(
        tag = graph.name_of(start),
        paths = paths.len(),
        "Enumerated ancestor paths"
    );
    paths
}

/// Every simple path from `start` down to a descendant.
///
/// Paths always begin with `start`. A tag with no children yields
/// `[[start]]`.
///
/// # Panics
///
/// If `start` does not belong to `graph`.
pub fn descendant_paths(graph: &TagGraph, start: TagId) -> Vec<Vec<TagId>> {
    let paths = walk_from(graph, start, Direction::Down);
    debug!(
        tag = graph.name_of(start),
        paths = paths.len(),
        "Enumerated descendant paths"
    );
    paths
}

/// Convert id paths to name paths.
pub(crate) fn to_names(graph: &TagGraph, paths: Vec<Vec<TagId>>) -> Vec<Vec<String>> {
    paths
        .into_iter()
        .map(|path| {
            path.into_iter()
                .map(|id| graph.name_of(id).to_string())
                .collect()
        })
        .collect()
}

/// One tag on the walk's stack and how far its edge list has been read.
struct Frame {
    tag: TagId,
    cursor: usize,
    extended: bool,
}

impl Frame {
    fn new(tag: TagId) -> Self {
        Self {
            tag,
            cursor: 0,
            extended: false,
        }
    }
}

/// Iterative depth-first walk.
///
/// `trail` always holds the tags of the frames on `stack`, in the same
/// order; `on_trail` mirrors it by arena index so the cycle check does not
/// rescan the path. A path is emitted when its last frame runs out of edges
/// without having extended it.
fn walk_from(graph: &TagGraph, start: TagId, direction: Direction) -> Vec<Vec<TagId>> {
    let mut trail = vec![start];
    let mut on_trail = vec![false; graph.len()];
    on_trail[start.0] = true;

    let mut stack = vec![Frame::new(start)];
    let mut paths = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let current = frame.tag;

        match graph.node(current).edges(direction).get(frame.cursor) {
            Some(&next) => {
                frame.cursor += 1;

                if on_trail[next.0] {
                    trace!(
                        from = graph.name_of(current),
                        to = graph.name_of(next),
                        ?direction,
                        "Skipping edge back onto current path"
                    );
                    continue;
                }

                frame.extended = true;
                on_trail[next.0] = true;
                trail.push(next);
                stack.push(Frame::new(next));
            }
            None => {
                if !frame.extended {
                    paths.push(trail.clone());
                }
                on_trail[current.0] = false;
                trail.pop();
                stack.pop();
            }
        }
    }

    paths
}
