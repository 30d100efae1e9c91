//! Per-search node state: the arena behind [`PathFinder`].
//!
//! Cost and parent bindings are valid for exactly one search invocation.
//! Instead of clearing the whole arena between searches, every node carries
//! the generation number of the search that last wrote it; stale nodes are
//! ignored and lazily re-initialised. The permanent grid cells are never
//! touched.

use crate::neighbors::Neighbors;

/// Sentinel parent index meaning "no predecessor" (the start cell).
pub(crate) const NO_PARENT: u32 = u32::MAX;

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: u32,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered by `(f, h)` for use in
/// `BinaryHeap`.
///
/// The secondary `h` key is the frontier tie-break: among equal-`f`
/// candidates the one closer to the target wins, which fixes the shape of
/// the returned path and makes repeated searches reproducible.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) idx: u32,
    pub(crate) f: i32,
    pub(crate) h: i32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, h) first.
        other.f.cmp(&self.f).then(other.h.cmp(&self.h))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable A* search state.
///
/// A `PathFinder` owns the node arena and scratch buffers so that repeated
/// searches on the same grid incur no allocations after warm-up. It holds no
/// reference to any particular grid; the arena grows on demand to the cell
/// count of whatever grid a search runs against.
pub struct PathFinder {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) neighbors: Neighbors,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// Create a new `PathFinder` with an empty arena.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generation: 0,
            neighbors: Neighbors::new(),
        }
    }

    /// Grow the arena to hold at least `len` nodes. Existing entries keep
    /// their generation stamps, so growth never leaks stale state into a
    /// search.
    pub(crate) fn ensure_len(&mut self, len: usize) {
        if self.nodes.len() < len {
            self.nodes.resize(len, Node::default());
        }
    }
}
