use costar::{Graph, GraphError, InsertionError, SparseGraph};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Operation {
    InsertEdge(usize, usize),
    RemoveEdge(usize),
    RemoveVertex(usize),
}

fn operations(vertices: usize) -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            4 => (0..vertices, 0..vertices).prop_map(|(a, b)| Operation::InsertEdge(a, b)),
            1 => any::<usize>().prop_map(Operation::RemoveEdge),
            1 => (0..vertices).prop_map(Operation::RemoveVertex),
        ],
        0..80,
    )
}

proptest! {
    #[test]
    fn test_graph_matches_pair_set_model(
        (n, ops) in (1usize..10).prop_flat_map(|n| (Just(n), operations(n)))
    ) {
        let mut graph: SparseGraph<usize, (usize, usize)> = SparseGraph::new();
        let vertices: Vec<_> = (0..n).map(|i| graph.insert_vertex(i)).collect();
        let mut removed_vertices = HashSet::new();
        let mut pairs = HashSet::new();
        let mut live_edges = Vec::new();

        for op in ops {
            match op {
                Operation::InsertEdge(a, b) => {
                    let before = graph.edge_count();
                    let res = graph.insert_edge(vertices[a], vertices[b], (a, b));
                    if removed_vertices.contains(&a) || removed_vertices.contains(&b) {
                        prop_assert_eq!(res, Err(GraphError::Position));
                    } else if a == b {
                        prop_assert_eq!(res, Err(GraphError::Insertion(InsertionError::SelfLoop)));
                    } else if pairs.contains(&(a, b)) {
                        prop_assert_eq!(res, Err(GraphError::Insertion(InsertionError::Duplicate)));
                    } else {
                        let e = res.unwrap();
                        pairs.insert((a, b));
                        live_edges.push(e);
                        prop_assert_eq!(graph.edge_count(), before + 1);
                        continue;
                    }
                    prop_assert_eq!(graph.edge_count(), before);
                }
                Operation::RemoveEdge(pick) => {
                    if live_edges.is_empty() {
                        continue;
                    }
                    let e = live_edges.swap_remove(pick % live_edges.len());
                    let payload = graph.remove_edge(e).unwrap();
                    prop_assert!(pairs.remove(&payload));
                    prop_assert_eq!(graph.remove_edge(e), Err(GraphError::Position));
                }
                Operation::RemoveVertex(v) => {
                    let res = graph.remove_vertex(vertices[v]);
                    if removed_vertices.contains(&v) {
                        prop_assert_eq!(res, Err(GraphError::Position));
                    } else if pairs.iter().any(|&(a, b)| a == v || b == v) {
                        prop_assert_eq!(res, Err(GraphError::Removal));
                    } else {
                        prop_assert_eq!(res, Ok(v));
                        removed_vertices.insert(v);
                    }
                }
            }
        }

        // Final consistency check
        prop_assert_eq!(graph.edge_count(), pairs.len());
        prop_assert_eq!(graph.vertex_count(), n - removed_vertices.len());
        for e in graph.edges() {
            let from = graph.from(e).unwrap();
            let to = graph.to(e).unwrap();
            prop_assert!(graph.outgoing(from).unwrap().contains(&e));
            prop_assert!(graph.incoming(to).unwrap().contains(&e));
            let pair = (*graph.vertex(from).unwrap(), *graph.vertex(to).unwrap());
            prop_assert_eq!(*graph.edge(e).unwrap(), pair);
        }
    }

    #[test]
    fn test_reverse_removal_round_trip(
        n in 1usize..12,
        raw in proptest::collection::vec((0usize..12, 0usize..12), 0..60)
    ) {
        let mut graph: SparseGraph<usize, ()> = SparseGraph::new();
        let vertices: Vec<_> = (0..n).map(|i| graph.insert_vertex(i)).collect();
        let edges: Vec<_> = raw
            .into_iter()
            .filter_map(|(a, b)| graph.insert_edge(vertices[a % n], vertices[b % n], ()).ok())
            .collect();

        for e in edges.into_iter().rev() {
            graph.remove_edge(e).unwrap();
        }
        for v in vertices.into_iter().rev() {
            graph.remove_vertex(v).unwrap();
        }

        prop_assert_eq!(graph.vertex_count(), 0);
        prop_assert_eq!(graph.edge_count(), 0);
        prop_assert!(graph.vertices().is_empty());
        prop_assert!(graph.edges().is_empty());
    }
}
