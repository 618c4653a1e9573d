#![allow(dead_code)]

use graphtrace::prelude::*;

pub const SAMPLE_EDGES: [(i32, i32, i32); 6] =
    [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3)];

/// An engine holding the five-vertex sample graph.
pub fn sample_engine() -> Engine {
    graphtrace::tracing_support::init_tracing();
    let mut engine = Engine::new();
    engine.initialize(5);
    for (from, to, weight) in SAMPLE_EDGES {
        engine.add_edge(from, to, weight);
    }
    engine
}

pub fn pairs(edges: &[EdgeRecord]) -> Vec<(Vertex, Vertex)> {
    let mut pairs: Vec<_> = edges.iter().map(|e| (e.from, e.to)).collect();
    pairs.sort();
    pairs
}
