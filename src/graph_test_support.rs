use std::collections::HashSet;

use pathfinding::prelude::bfs_reach;
use quickcheck::{Arbitrary, Gen};

use crate::{
    graph::{Graph, Vertex, Weight},
    tracing_support::init_tracing,
};

const MAX_VERTICES: usize = 12;
const MAX_EDGES: usize = 40;

/// A random directed graph with small non-negative weights, plus a start
/// vertex when the graph has any.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph,
    pub start: Option<Vertex>,
}

/// Like [`ArbGraph`], but every connection is stored in both directions with
/// the same weight, and there are no self-loops.
#[derive(Debug, Clone)]
pub struct ArbSymmetricGraph {
    pub graph: Graph,
    pub start: Option<Vertex>,
}

fn arbitrary_weight(g: &mut Gen) -> Weight {
    Weight::from(u8::arbitrary(g) % 50)
}

fn arbitrary_start(g: &mut Gen, graph: &Graph) -> Option<Vertex> {
    (graph.vertex_count() > 0).then(|| usize::arbitrary(g) % graph.vertex_count())
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        init_tracing();
        let n = usize::arbitrary(g) % MAX_VERTICES;
        let num_edges = usize::arbitrary(g) % MAX_EDGES;
        let mut graph = Graph::new(n);
        if n > 0 {
            for _ in 0..num_edges {
                let from = usize::arbitrary(g) % n;
                let to = usize::arbitrary(g) % n;
                graph.add_edge(from, to, arbitrary_weight(g));
            }
        }
        let start = arbitrary_start(g, &graph);
        ArbGraph { graph, start }
    }
}

impl Arbitrary for ArbSymmetricGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        init_tracing();
        let n = usize::arbitrary(g) % MAX_VERTICES;
        let num_edges = usize::arbitrary(g) % MAX_EDGES;
        let mut graph = Graph::new(n);
        if n > 1 {
            for _ in 0..num_edges {
                let a = usize::arbitrary(g) % n;
                let b = usize::arbitrary(g) % n;
                if a == b || graph.contains_edge(a, b) || graph.contains_edge(b, a) {
                    continue;
                }
                let weight = arbitrary_weight(g);
                graph.add_edge(a, b, weight);
                graph.add_edge(b, a, weight);
            }
        }
        let start = arbitrary_start(g, &graph);
        ArbSymmetricGraph { graph, start }
    }
}

/// Every vertex reachable from `start` along stored edges, `start` included.
pub fn reachable(graph: &Graph, start: Vertex) -> HashSet<Vertex> {
    bfs_reach(start, |&v| graph.neighbors(v).map(|e| e.to)).collect()
}

/// The five-vertex graph used by the worked examples:
/// (0,1,4) (0,2,1) (2,1,2) (1,3,1) (2,3,5) (3,4,3).
pub fn sample_graph() -> Graph {
    init_tracing();
    let mut graph = Graph::new(5);
    for (from, to, weight) in [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3)] {
        assert!(graph.add_edge(from, to, weight));
    }
    graph
}

#[test]
fn test_sample_graph_shape() {
    let graph = sample_graph();
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(reachable(&graph, 0).len(), 5);
    assert_eq!(reachable(&graph, 4), HashSet::from([4]));
}
