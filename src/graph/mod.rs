//! Directed, labeled graphs addressed through opaque positions.
//!
//! The module is organized as:
//! - `position`: the [`VertexPos`] / [`EdgePos`] handles and their origin tags
//! - `error`: the [`GraphError`] taxonomy
//! - `sparse`: [`SparseGraph`], the adjacency-list implementation
//!
//! Algorithms are written against the [`Graph`] trait and never reach into an
//! implementation's storage.

pub mod error;
pub mod position;
pub(crate) mod presence;
pub mod sparse;

pub use error::{GraphError, InsertionError};
pub use position::{EdgePos, GraphTag, VertexPos};
pub use sparse::SparseGraph;

/// A directed graph with payload-carrying vertices and edges.
///
/// Every operation that receives a handle validates it first: a handle issued
/// by another graph, or one whose entity has been removed, yields
/// [`GraphError::Position`] and the graph is left untouched.
///
/// Adjacency queries return snapshots. Mutating the graph afterwards never
/// invalidates a snapshot already handed out, it just makes it stale.
pub trait Graph<V, E> {
    /// Algorithm scratch annotation type. Independent of payloads.
    type Label;

    /// Inserts a new vertex holding `value`.
    fn insert_vertex(&mut self, value: V) -> VertexPos;

    /// Inserts a directed edge `from -> to` holding `value`.
    ///
    /// # Errors
    /// - [`GraphError::Position`] if either endpoint is invalid.
    /// - [`InsertionError::SelfLoop`] if `from == to`.
    /// - [`InsertionError::Duplicate`] if an edge `from -> to` already exists.
    fn insert_edge(
        &mut self,
        from: VertexPos,
        to: VertexPos,
        value: E,
    ) -> Result<EdgePos, GraphError>;

    /// Removes an isolated vertex and returns its payload.
    ///
    /// # Errors
    /// - [`GraphError::Position`] if `v` is invalid.
    /// - [`GraphError::Removal`] if `v` still has incoming or outgoing edges.
    fn remove_vertex(&mut self, v: VertexPos) -> Result<V, GraphError>;

    /// Removes an edge, detaching it from both endpoints, and returns its payload.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `e` is invalid.
    fn remove_edge(&mut self, e: EdgePos) -> Result<E, GraphError>;

    /// Live vertices in insertion order.
    fn vertices(&self) -> Vec<VertexPos>;

    /// Live edges in insertion order.
    fn edges(&self) -> Vec<EdgePos>;

    /// Edges leaving `v`, in insertion order.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `v` is invalid.
    fn outgoing(&self, v: VertexPos) -> Result<Vec<EdgePos>, GraphError>;

    /// Edges entering `v`, in insertion order.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `v` is invalid.
    fn incoming(&self, v: VertexPos) -> Result<Vec<EdgePos>, GraphError>;

    /// Source vertex of `e`.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `e` is invalid.
    fn from(&self, e: EdgePos) -> Result<VertexPos, GraphError>;

    /// Destination vertex of `e`.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `e` is invalid.
    fn to(&self, e: EdgePos) -> Result<VertexPos, GraphError>;

    /// Payload of `v`.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `v` is invalid.
    fn vertex(&self, v: VertexPos) -> Result<&V, GraphError>;

    /// Payload of `e`.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `e` is invalid.
    fn edge(&self, e: EdgePos) -> Result<&E, GraphError>;

    /// Replaces the payload of `v`, returning the old one.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `v` is invalid.
    fn put_vertex(&mut self, v: VertexPos, value: V) -> Result<V, GraphError>;

    /// Replaces the payload of `e`, returning the old one.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `e` is invalid.
    fn put_edge(&mut self, e: EdgePos, value: E) -> Result<E, GraphError>;

    /// Attaches `label` to `v`, returning the label it replaces.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `v` is invalid.
    fn set_vertex_label(
        &mut self,
        v: VertexPos,
        label: Self::Label,
    ) -> Result<Option<Self::Label>, GraphError>;

    /// Label of `v`, if any.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `v` is invalid.
    fn vertex_label(&self, v: VertexPos) -> Result<Option<&Self::Label>, GraphError>;

    /// Attaches `label` to `e`, returning the label it replaces.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `e` is invalid.
    fn set_edge_label(
        &mut self,
        e: EdgePos,
        label: Self::Label,
    ) -> Result<Option<Self::Label>, GraphError>;

    /// Label of `e`, if any.
    ///
    /// # Errors
    /// [`GraphError::Position`] if `e` is invalid.
    fn edge_label(&self, e: EdgePos) -> Result<Option<&Self::Label>, GraphError>;

    /// Resets every vertex and edge label to absent.
    fn clear_labels(&mut self);

    /// Number of live vertices.
    fn vertex_count(&self) -> usize;

    /// Number of live edges.
    fn edge_count(&self) -> usize;

    /// Returns `true` if `v` is valid for this graph.
    fn contains_vertex(&self, v: VertexPos) -> bool {
        self.vertex(v).is_ok()
    }

    /// Returns `true` if `e` is valid for this graph.
    fn contains_edge(&self, e: EdgePos) -> bool {
        self.edge(e).is_ok()
    }
}
