//! Six-degrees shortest path search.
//!
//! The search runs breadth-first from the *target* and walks every edge
//! against its direction (a vertex `c` expands over its incoming edges to
//! their sources). Predecessor links therefore point toward the target, and
//! following them from the source yields the path in source-to-target order
//! with no reversal step.
//!
//! Ties between equally short paths are broken deterministically: FIFO
//! frontier order, edges expanded in adjacency insertion order.
//!
//! Only the public [`Graph`] contract is used, so any implementation works.

use crate::graph::{EdgePos, Graph, GraphError, VertexPos};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, trace};

/// Traversal state of a vertex during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Not yet discovered.
    Unvisited,
    /// Discovered and queued, not yet expanded.
    Frontier,
    /// Fully expanded.
    Visited,
}

/// Breadth-first search state over a borrowed graph.
///
/// Colors and predecessor edges live here, keyed by handle, so the graph is
/// only ever borrowed immutably.
pub struct SixDegrees<'g, G, V, E> {
    graph: &'g G,
    color: HashMap<VertexPos, Color>,
    predecessor: HashMap<VertexPos, EdgePos>,
    _marker: core::marker::PhantomData<fn(&V, &E)>,
}

impl<'g, G, V, E> SixDegrees<'g, G, V, E>
where
    G: Graph<V, E>,
{
    /// Prepares a search over `graph` with every vertex unvisited.
    pub fn new(graph: &'g G) -> Self {
        let vertices = graph.vertices();
        let mut color = HashMap::with_capacity(vertices.len());
        for v in vertices {
            color.insert(v, Color::Unvisited);
        }
        Self {
            graph,
            color,
            predecessor: HashMap::new(),
            _marker: core::marker::PhantomData,
        }
    }

    /// Color of `v` after the last search.
    pub fn color(&self, v: VertexPos) -> Option<Color> {
        self.color.get(&v).copied()
    }

    /// Shortest path from `source` to `target` as vertex handles.
    ///
    /// Returns `Ok(None)` when `target` cannot be reached from `source`.
    /// A search where `source == target` returns the single-vertex path.
    /// Colors and predecessors from a previous call are reset first, so one
    /// `SixDegrees` can answer several queries.
    ///
    /// # Errors
    /// [`GraphError::Position`] if either endpoint is invalid for the graph.
    pub fn route(
        &mut self,
        source: VertexPos,
        target: VertexPos,
    ) -> Result<Option<Vec<VertexPos>>, GraphError> {
        // Reject bad endpoints before doing any work.
        self.graph.vertex(source)?;
        self.graph.vertex(target)?;
        self.reset();

        if !self.search(source, target)? {
            debug!(source = source.index(), target = target.index(), "no path");
            return Ok(None);
        }

        let path = self.reconstruct(source)?;
        debug!(
            source = source.index(),
            target = target.index(),
            hops = path.len() - 1,
            "path found"
        );
        Ok(Some(path))
    }

    fn reset(&mut self) {
        for color in self.color.values_mut() {
            *color = Color::Unvisited;
        }
        self.predecessor.clear();
    }

    /// Runs BFS from `target` until `source` is dequeued.
    fn search(&mut self, source: VertexPos, target: VertexPos) -> Result<bool, GraphError> {
        let mut queue = VecDeque::new();
        self.color.insert(target, Color::Frontier);
        queue.push_back(target);

        while let Some(current) = queue.pop_front() {
            trace!(vertex = current.index(), queued = queue.len(), "expanding");
            if current == source {
                return Ok(true);
            }

            for edge in self.graph.incoming(current)? {
                let next = self.graph.from(edge)?;
                if self.color(next).unwrap_or(Color::Unvisited) == Color::Unvisited {
                    self.color.insert(next, Color::Frontier);
                    self.predecessor.insert(next, edge);
                    queue.push_back(next);
                }
            }

            self.color.insert(current, Color::Visited);
        }

        Ok(false)
    }

    /// Follows predecessor edges from `source` until the vertex with none,
    /// which is the search root.
    fn reconstruct(&self, source: VertexPos) -> Result<Vec<VertexPos>, GraphError> {
        let mut path = vec![source];
        let mut current = source;
        while let Some(&edge) = self.predecessor.get(&current) {
            current = self.graph.to(edge)?;
            path.push(current);
        }
        Ok(path)
    }
}

/// Shortest path from `source` to `target` as vertex handles.
///
/// # Errors
/// [`GraphError::Position`] if either endpoint is invalid for `graph`.
pub fn shortest_route<G, V, E>(
    graph: &G,
    source: VertexPos,
    target: VertexPos,
) -> Result<Option<Vec<VertexPos>>, GraphError>
where
    G: Graph<V, E>,
{
    SixDegrees::<G, V, E>::new(graph).route(source, target)
}

/// Shortest path from `source` to `target` as the sequence of vertex payloads.
///
/// On a bipartite actor/movie network the payloads alternate between the two
/// classes, starting and ending with `source`'s and `target`'s.
///
/// # Errors
/// [`GraphError::Position`] if either endpoint is invalid for `graph`.
pub fn shortest_path<'g, G, V, E>(
    graph: &'g G,
    source: VertexPos,
    target: VertexPos,
) -> Result<Option<Vec<&'g V>>, GraphError>
where
    G: Graph<V, E>,
{
    let Some(route) = shortest_route::<G, V, E>(graph, source, target)? else {
        return Ok(None);
    };
    route
        .into_iter()
        .map(|v| graph.vertex(v))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
