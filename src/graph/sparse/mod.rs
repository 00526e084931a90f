//! `SparseGraph` — an adjacency-list directed graph with position handles.
//!
//! Vertices and edges live in dense, append-only slot tables indexed by their
//! identifiers. An emptied slot is the only mark of a removed entity. Each
//! vertex keeps its outgoing and incoming edge ids in insertion order, so
//! adjacency snapshots are plain copies of those lists.
//!
//! Labels are not stored on the records. They live in two side-tables keyed
//! by identifier, which keeps algorithm scratch state out of caller data and
//! makes [`Graph::clear_labels`] a pair of `clear()` calls.
//!
//! # Performance
//! - `insert_vertex`: O(1) amortized
//! - `insert_edge`: O(out-degree of `from`) (duplicate scan)
//! - `remove_vertex`: O(1)
//! - `remove_edge`: O(out-degree of `from` + in-degree of `to`)
//! - `outgoing` / `incoming`: O(degree) copy
//! - `vertices` / `edges`: O(ids ever issued)

mod dot;

use crate::graph::error::{GraphError, InsertionError};
use crate::graph::position::{EdgePos, GraphTag, VertexPos};
use crate::graph::presence::{PresenceTable, Take};
use crate::graph::Graph;
use std::collections::HashMap;
use tracing::{debug, trace};

struct VertexRecord<V> {
    value: V,
    outgoing: Vec<usize>,
    incoming: Vec<usize>,
}

struct EdgeRecord<E> {
    value: E,
    from: usize,
    to: usize,
}

/// A directed graph over `V` vertex payloads and `E` edge payloads, with
/// optional `L` labels on both.
///
/// Self-loops and parallel edges (same ordered endpoints) are rejected.
pub struct SparseGraph<V, E, L = ()> {
    tag: GraphTag,
    vertices: PresenceTable<VertexRecord<V>>,
    edges: PresenceTable<EdgeRecord<E>>,
    vertex_labels: HashMap<usize, L>,
    edge_labels: HashMap<usize, L>,
}

impl<V, E, L> SparseGraph<V, E, L> {
    /// Creates a new empty graph with its own identifier space.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates a graph with room for `vertices` vertices and `edges` edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            tag: GraphTag::fresh(),
            vertices: PresenceTable::with_capacity(vertices),
            edges: PresenceTable::with_capacity(edges),
            vertex_labels: HashMap::new(),
            edge_labels: HashMap::new(),
        }
    }

    /// Origin tag carried by every handle this graph issues.
    pub fn tag(&self) -> GraphTag {
        self.tag
    }

    /// Removes and returns the label of `v`.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `v` is invalid.
    pub fn take_vertex_label(&mut self, v: VertexPos) -> Result<Option<L>, GraphError> {
        let id = self.vertex_id(v)?;
        Ok(self.vertex_labels.remove(&id))
    }

    /// Removes and returns the label of `e`.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `e` is invalid.
    pub fn take_edge_label(&mut self, e: EdgePos) -> Result<Option<L>, GraphError> {
        let id = self.edge_id(e)?;
        Ok(self.edge_labels.remove(&id))
    }

    /// Out-degree of `v`.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `v` is invalid.
    pub fn out_degree(&self, v: VertexPos) -> Result<usize, GraphError> {
        Ok(self.vertex_record(v)?.outgoing.len())
    }

    /// In-degree of `v`.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `v` is invalid.
    pub fn in_degree(&self, v: VertexPos) -> Result<usize, GraphError> {
        Ok(self.vertex_record(v)?.incoming.len())
    }

    /// Returns `true` if the graph has no live vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.live() == 0
    }

    #[inline]
    fn vertex_pos(&self, id: usize) -> VertexPos {
        VertexPos::new(self.tag, id)
    }

    #[inline]
    fn edge_pos(&self, id: usize) -> EdgePos {
        EdgePos::new(self.tag, id)
    }

    /// Identifier behind a handle issued by this graph. Liveness is not checked.
    #[inline]
    fn local(&self, origin: GraphTag, id: usize) -> Result<usize, GraphError> {
        if origin == self.tag {
            Ok(id)
        } else {
            Err(GraphError::Position)
        }
    }

    /// Resolves `v` to a live identifier of this graph.
    fn vertex_id(&self, v: VertexPos) -> Result<usize, GraphError> {
        let id = self.local(v.origin(), v.index())?;
        if self.vertices.contains(id) {
            Ok(id)
        } else {
            Err(GraphError::Position)
        }
    }

    fn edge_id(&self, e: EdgePos) -> Result<usize, GraphError> {
        let id = self.local(e.origin(), e.index())?;
        if self.edges.contains(id) {
            Ok(id)
        } else {
            Err(GraphError::Position)
        }
    }

    fn vertex_record(&self, v: VertexPos) -> Result<&VertexRecord<V>, GraphError> {
        let id = self.local(v.origin(), v.index())?;
        self.vertices.get(id).ok_or(GraphError::Position)
    }

    fn vertex_record_mut(&mut self, v: VertexPos) -> Result<&mut VertexRecord<V>, GraphError> {
        let id = self.local(v.origin(), v.index())?;
        self.vertices.get_mut(id).ok_or(GraphError::Position)
    }

    fn edge_record(&self, e: EdgePos) -> Result<&EdgeRecord<E>, GraphError> {
        let id = self.local(e.origin(), e.index())?;
        self.edges.get(id).ok_or(GraphError::Position)
    }

    fn edge_record_mut(&mut self, e: EdgePos) -> Result<&mut EdgeRecord<E>, GraphError> {
        let id = self.local(e.origin(), e.index())?;
        self.edges.get_mut(id).ok_or(GraphError::Position)
    }

    fn detach(list: &mut Vec<usize>, edge_id: usize) {
        // Preserve insertion order of the remaining edges.
        if let Some(at) = list.iter().position(|&id| id == edge_id) {
            list.remove(at);
        }
    }
}

impl<V, E, L> Graph<V, E> for SparseGraph<V, E, L> {
    type Label = L;

    fn insert_vertex(&mut self, value: V) -> VertexPos {
        let id = self.vertices.insert(VertexRecord {
            value,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        });
        trace!(graph = self.tag.get(), vertex = id, "vertex inserted");
        self.vertex_pos(id)
    }

    fn insert_edge(
        &mut self,
        from: VertexPos,
        to: VertexPos,
        value: E,
    ) -> Result<EdgePos, GraphError> {
        let from_id = self.vertex_id(from)?;
        let to_id = self.vertex_id(to)?;

        if from_id == to_id {
            debug!(graph = self.tag.get(), vertex = from_id, "rejected self-loop");
            return Err(InsertionError::SelfLoop.into());
        }

        let edges = &self.edges;
        let duplicate = self.vertices.get(from_id).is_some_and(|record| {
            record
                .outgoing
                .iter()
                .any(|&edge_id| edges.get(edge_id).is_some_and(|edge| edge.to == to_id))
        });
        if duplicate {
            debug!(graph = self.tag.get(), from = from_id, to = to_id, "rejected duplicate edge");
            return Err(InsertionError::Duplicate.into());
        }

        // All checks passed; nothing has been mutated yet.
        let id = self.edges.insert(EdgeRecord {
            value,
            from: from_id,
            to: to_id,
        });
        if let Some(record) = self.vertices.get_mut(from_id) {
            record.outgoing.push(id);
        }
        if let Some(record) = self.vertices.get_mut(to_id) {
            record.incoming.push(id);
        }

        trace!(graph = self.tag.get(), edge = id, from = from_id, to = to_id, "edge inserted");
        Ok(self.edge_pos(id))
    }

    fn remove_vertex(&mut self, v: VertexPos) -> Result<V, GraphError> {
        let id = self.local(v.origin(), v.index())?;
        let isolated =
            |record: &VertexRecord<V>| record.outgoing.is_empty() && record.incoming.is_empty();

        match self.vertices.take_if(id, isolated) {
            Take::Taken(record) => {
                self.vertex_labels.remove(&id);
                debug!(graph = self.tag.get(), vertex = id, "vertex removed");
                Ok(record.value)
            }
            Take::Kept(record) => {
                debug!(
                    graph = self.tag.get(),
                    vertex = id,
                    outgoing = record.outgoing.len(),
                    incoming = record.incoming.len(),
                    "refused to remove connected vertex"
                );
                Err(GraphError::Removal)
            }
            Take::Absent => Err(GraphError::Position),
        }
    }

    fn remove_edge(&mut self, e: EdgePos) -> Result<E, GraphError> {
        let id = self.local(e.origin(), e.index())?;
        let record = self.edges.take(id).ok_or(GraphError::Position)?;
        self.edge_labels.remove(&id);

        // Endpoints of a live edge are live vertices.
        if let Some(from) = self.vertices.get_mut(record.from) {
            Self::detach(&mut from.outgoing, id);
        }
        if let Some(to) = self.vertices.get_mut(record.to) {
            Self::detach(&mut to.incoming, id);
        }

        debug!(
            graph = self.tag.get(),
            edge = id,
            from = record.from,
            to = record.to,
            "edge removed"
        );
        Ok(record.value)
    }

    fn vertices(&self) -> Vec<VertexPos> {
        self.vertices.iter().map(|(id, _)| self.vertex_pos(id)).collect()
    }

    fn edges(&self) -> Vec<EdgePos> {
        self.edges.iter().map(|(id, _)| self.edge_pos(id)).collect()
    }

    fn outgoing(&self, v: VertexPos) -> Result<Vec<EdgePos>, GraphError> {
        let record = self.vertex_record(v)?;
        Ok(record.outgoing.iter().map(|&id| self.edge_pos(id)).collect())
    }

    fn incoming(&self, v: VertexPos) -> Result<Vec<EdgePos>, GraphError> {
        let record = self.vertex_record(v)?;
        Ok(record.incoming.iter().map(|&id| self.edge_pos(id)).collect())
    }

    fn from(&self, e: EdgePos) -> Result<VertexPos, GraphError> {
        let record = self.edge_record(e)?;
        Ok(self.vertex_pos(record.from))
    }

    fn to(&self, e: EdgePos) -> Result<VertexPos, GraphError> {
        let record = self.edge_record(e)?;
        Ok(self.vertex_pos(record.to))
    }

    fn vertex(&self, v: VertexPos) -> Result<&V, GraphError> {
        Ok(&self.vertex_record(v)?.value)
    }

    fn edge(&self, e: EdgePos) -> Result<&E, GraphError> {
        Ok(&self.edge_record(e)?.value)
    }

    fn put_vertex(&mut self, v: VertexPos, value: V) -> Result<V, GraphError> {
        let record = self.vertex_record_mut(v)?;
        Ok(std::mem::replace(&mut record.value, value))
    }

    fn put_edge(&mut self, e: EdgePos, value: E) -> Result<E, GraphError> {
        let record = self.edge_record_mut(e)?;
        Ok(std::mem::replace(&mut record.value, value))
    }

    fn set_vertex_label(&mut self, v: VertexPos, label: L) -> Result<Option<L>, GraphError> {
        let id = self.vertex_id(v)?;
        Ok(self.vertex_labels.insert(id, label))
    }

    fn vertex_label(&self, v: VertexPos) -> Result<Option<&L>, GraphError> {
        let id = self.vertex_id(v)?;
        Ok(self.vertex_labels.get(&id))
    }

    fn set_edge_label(&mut self, e: EdgePos, label: L) -> Result<Option<L>, GraphError> {
        let id = self.edge_id(e)?;
        Ok(self.edge_labels.insert(id, label))
    }

    fn edge_label(&self, e: EdgePos) -> Result<Option<&L>, GraphError> {
        let id = self.edge_id(e)?;
        Ok(self.edge_labels.get(&id))
    }

    fn clear_labels(&mut self) {
        self.vertex_labels.clear();
        self.edge_labels.clear();
    }

    fn vertex_count(&self) -> usize {
        self.vertices.live()
    }

    fn edge_count(&self) -> usize {
        self.edges.live()
    }
}

impl<V, E, L> Default for SparseGraph<V, E, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, L> core::fmt::Debug for SparseGraph<V, E, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SparseGraph")
            .field("tag", &self.tag)
            .field("vertices", &self.vertices.live())
            .field("edges", &self.edges.live())
            .field("issued_vertex_ids", &self.vertices.issued())
            .field("issued_edge_ids", &self.edges.issued())
            .finish()
    }
}
