//! # `costar` - Six Degrees over a Co-Stardom Network
//!
//! A directed, labeled graph addressed through opaque positions, and a
//! breadth-first solver that connects two actors through the movies they
//! appeared in.
//!
//! ## Guarantees
//!
//! ### Handle Safety
//! - **Origin checks**: every [`VertexPos`] / [`EdgePos`] carries the tag of the
//!   graph that issued it. Presenting it to another graph is a
//!   [`GraphError::Position`], never a silent reinterpretation.
//! - **No reuse**: identifiers come from a per-graph monotonic counter and are
//!   never reissued, so a removed entity's handle stays invalid forever.
//! - **Atomic failure**: every rejected call leaves the graph unchanged.
//!
//! ### Structural Invariants
//! - No self-loops, no two edges with the same ordered endpoints.
//! - A vertex with any incident edge cannot be removed.
//! - Every live edge's endpoints are live vertices of the same graph.
//!
//! ## Architecture
//!
//! 1. **Graph ADT** ([`graph`]): the [`Graph`] trait and [`SparseGraph`], an
//!    adjacency-list implementation with label side-tables.
//! 2. **Solver** ([`solver`]): BFS from the target over incoming edges, then a
//!    predecessor walk from the source. Uses only the [`Graph`] trait.
//! 3. **Network** ([`network`]): dataset parsing, the actor/movie name index,
//!    and presentation of solved routes.
//!
//! ## Example
//!
//! ```rust
//! use costar::{Graph, SparseGraph, solver};
//!
//! let mut g: SparseGraph<&str, &str> = SparseGraph::new();
//! let a = g.insert_vertex("kevin bacon");
//! let m = g.insert_vertex("Apollo 13");
//! let b = g.insert_vertex("tom hanks");
//! g.insert_edge(a, m, "acts in").unwrap();
//! g.insert_edge(m, b, "features").unwrap();
//!
//! let path = solver::shortest_path(&g, a, b).unwrap().unwrap();
//! assert_eq!(path, vec![&"kevin bacon", &"Apollo 13", &"tom hanks"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;
pub mod network;
pub mod solver;

pub use graph::{EdgePos, Graph, GraphError, GraphTag, InsertionError, SparseGraph, VertexPos};
pub use network::{CoStarNetwork, NetworkError, Relation, Route};
pub use solver::{shortest_path, shortest_route, SixDegrees};

// Handles stay small enough to pass by value everywhere.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<GraphTag>() == mem::size_of::<u64>());
    assert!(mem::size_of::<VertexPos>() <= 2 * mem::size_of::<u64>());
    assert!(mem::size_of::<EdgePos>() <= 2 * mem::size_of::<u64>());
};
