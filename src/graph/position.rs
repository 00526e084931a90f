//! Opaque vertex and edge handles.
//!
//! A handle pairs the issuing graph's [`GraphTag`] with an identifier drawn from
//! that graph's own monotonic counter. Graphs validate both halves before
//! touching storage, so a handle from another graph (or one whose entity was
//! removed) is rejected structurally instead of being reinterpreted.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};
use serde::{Deserialize, Serialize};

/// Process-wide sequence for graph origin tags.
///
/// Only graph *instances* draw from this; vertex and edge identifiers are
/// per-graph counters.
static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

/// Identity of a graph instance, embedded in every handle it issues.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphTag(u64);

impl GraphTag {
    /// Allocates a tag no other graph in this process has.
    pub(crate) fn fresh() -> Self {
        Self(NEXT_TAG.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw tag value.
    #[inline(always)]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A position of a vertex inside the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexPos {
    origin: GraphTag,
    id: usize,
}

impl VertexPos {
    #[inline(always)]
    pub(crate) fn new(origin: GraphTag, id: usize) -> Self {
        Self { origin, id }
    }

    /// Tag of the graph that issued this handle.
    #[inline(always)]
    pub fn origin(self) -> GraphTag {
        self.origin
    }

    /// Identifier of the vertex within its graph.
    ///
    /// Identifiers are assigned in insertion order starting at zero and are
    /// never reused, even after removal.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.id
    }
}

impl fmt::Display for VertexPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}@g{}", self.id, self.origin.0)
    }
}

/// A position of an edge inside the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgePos {
    origin: GraphTag,
    id: usize,
}

impl EdgePos {
    #[inline(always)]
    pub(crate) fn new(origin: GraphTag, id: usize) -> Self {
        Self { origin, id }
    }

    /// Tag of the graph that issued this handle.
    #[inline(always)]
    pub fn origin(self) -> GraphTag {
        self.origin
    }

    /// Identifier of the edge within its graph.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.id
    }
}

impl fmt::Display for EdgePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}@g{}", self.id, self.origin.0)
    }
}
