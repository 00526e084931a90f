//! Cross-checks solver path lengths against petgraph's Dijkstra with unit weights.

use costar::{shortest_route, Graph, SparseGraph};
use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;
use proptest::test_runner::{TestCaseResult, TestRunner};

fn run_proptest<S, F>(strategy: S, test: F)
where
    S: Strategy,
    F: Fn(S::Value) -> TestCaseResult,
{
    let mut runner = TestRunner::default();
    runner.run(&strategy, test).unwrap();
}

fn random_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, usize, usize)> {
    (2usize..16).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..(n * 3)),
            0..n,
            0..n,
        )
    })
}

#[test]
fn test_route_length_matches_petgraph() {
    run_proptest(random_graph(), |(n, raw, source, target)| {
        let mut ours: SparseGraph<usize, ()> = SparseGraph::new();
        let mut oracle: DiGraph<usize, ()> = DiGraph::new();
        let vs: Vec<_> = (0..n).map(|i| ours.insert_vertex(i)).collect();
        let ns: Vec<NodeIndex> = (0..n).map(|i| oracle.add_node(i)).collect();

        for (a, b) in raw {
            // The oracle only sees edges our graph accepted.
            if ours.insert_edge(vs[a], vs[b], ()).is_ok() {
                oracle.add_edge(ns[a], ns[b], ());
            }
        }

        let distances = dijkstra(&oracle, ns[source], Some(ns[target]), |_| 1usize);
        let route = shortest_route(&ours, vs[source], vs[target]).unwrap();

        match (route, distances.get(&ns[target])) {
            (None, None) => {}
            (Some(route), Some(&distance)) => {
                prop_assert_eq!(route.len() - 1, distance);
                prop_assert_eq!(route[0], vs[source]);
                prop_assert_eq!(*route.last().unwrap(), vs[target]);
                // Consecutive vertices are joined by an edge in its direction.
                for hop in route.windows(2) {
                    let joined = ours
                        .outgoing(hop[0])
                        .unwrap()
                        .into_iter()
                        .any(|e| ours.to(e).unwrap() == hop[1]);
                    prop_assert!(joined);
                }
            }
            (route, distance) => {
                prop_assert!(false, "solver {:?} disagrees with oracle {:?}", route, distance);
            }
        }
        Ok(())
    });
}
