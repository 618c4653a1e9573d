use crate::{
    distance::Distance,
    error::EngineError,
    graph::{Graph, Vertex},
    priority_queue::PriorityQueue,
    trace::{Action, Event, Frontier, Status, Trace},
    tracing_support::{debug, info_span},
};

/// Heap capacity for a weighted run: the seed entry plus one entry per edge,
/// since each edge is relaxed at most once (when its source is settled).
pub(crate) fn frontier_capacity(graph: &Graph) -> usize {
    graph.edge_count() + 1
}

/// Dijkstra's single-source shortest paths from `start`.
///
/// The heap has no decrease-key; an improved distance is inserted as a new
/// entry and the outdated one is discarded, without an event, when it is
/// extracted after its vertex has been settled.
///
/// The trace ends with [`Event::ShortestPaths`] holding the final distance
/// array and the shortest-path tree rebuilt from the parent links.  Results
/// are only meaningful for non-negative weights.  A path whose length would
/// overflow [`Weight`] is never taken.
pub fn dijkstra(graph: &Graph, start: Vertex) -> Result<Trace, EngineError> {
    dijkstra_bounded(graph, start, frontier_capacity(graph))
}

/// [`dijkstra`] with an explicit heap capacity.
pub(crate) fn dijkstra_bounded(
    graph: &Graph,
    start: Vertex,
    capacity: usize,
) -> Result<Trace, EngineError> {
    let start = graph.check_vertex(start)?;
    let _span = info_span!("dijkstra", start).entered();

    let n = graph.vertex_count();
    let mut dist = vec![Distance::Infinite; n];
    let mut parent: Vec<Option<Vertex>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut pq = PriorityQueue::with_capacity(capacity);
    let mut trace = Trace::new();

    dist[start] = Distance::Finite(0);
    pq.insert(start, 0)?;
    trace.step(
        Frontier::Heap(pq.snapshot()),
        start,
        Action::InitStart,
        None,
        Status::Discovered,
        Some(dist.clone()),
    );

    while let Some(entry) = pq.extract_min() {
        let u = entry.vertex;
        if finalized[u] {
            continue;
        }
        finalized[u] = true;
        trace.step(
            Frontier::Heap(pq.snapshot()),
            u,
            Action::ExtractMin,
            None,
            Status::Finalized,
            Some(dist.clone()),
        );

        let Distance::Finite(du) = dist[u] else {
            continue;
        };
        for edge in graph.neighbors(u) {
            let v = edge.to;
            if finalized[v] {
                continue;
            }
            let Some(candidate) = du.checked_add(edge.weight) else {
                continue;
            };
            if Distance::Finite(candidate) < dist[v] {
                dist[v] = Distance::Finite(candidate);
                parent[v] = Some(u);
                pq.insert(v, candidate)?;
                trace.step(
                    Frontier::Heap(pq.snapshot()),
                    v,
                    Action::Relax,
                    Some((u, v)),
                    Status::Discovered,
                    Some(dist.clone()),
                );
            }
        }
    }

    let tree_edges = graph.tree_edges(&parent);
    debug!(
        events = trace.len() + 1,
        tree_edges = tree_edges.len(),
        "dijkstra complete"
    );
    trace.push(Event::ShortestPaths {
        distances: dist,
        tree_edges,
    });
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pathfinding::prelude::dijkstra_all;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{
        graph::{EdgeRecord, Weight},
        graph_test_support::{ArbGraph, sample_graph},
        error::HeapError,
        priority_queue::HeapEntry,
    };

    fn final_distances(trace: &Trace) -> Vec<Distance> {
        match trace.last() {
            Some(Event::ShortestPaths { distances, .. }) => distances.clone(),
            other => panic!("expected a shortest-path summary, got {other:?}"),
        }
    }

    fn final_tree(trace: &Trace) -> Vec<EdgeRecord> {
        match trace.last() {
            Some(Event::ShortestPaths { tree_edges, .. }) => tree_edges.clone(),
            other => panic!("expected a shortest-path summary, got {other:?}"),
        }
    }

    #[test]
    fn test_sample_distances() {
        let graph = sample_graph();
        let trace = dijkstra(&graph, 0).unwrap();
        assert_eq!(
            final_distances(&trace),
            [0, 3, 1, 4, 7].map(Distance::Finite).to_vec()
        );
        assert_eq!(
            final_tree(&trace),
            vec![
                EdgeRecord::new(2, 1, 2),
                EdgeRecord::new(0, 2, 1),
                EdgeRecord::new(1, 3, 1),
                EdgeRecord::new(3, 4, 3),
            ]
        );
    }

    #[test]
    fn test_sample_event_sequence() {
        let graph = sample_graph();
        let trace = dijkstra(&graph, 0).unwrap();
        let steps: Vec<_> = trace
            .steps()
            .map(|s| (s.action, s.vertex, s.edge))
            .collect();
        assert_eq!(
            steps,
            vec![
                (Action::InitStart, 0, None),
                (Action::ExtractMin, 0, None),
                (Action::Relax, 2, Some((0, 2))),
                (Action::Relax, 1, Some((0, 1))),
                (Action::ExtractMin, 2, None),
                (Action::Relax, 3, Some((2, 3))),
                (Action::Relax, 1, Some((2, 1))),
                (Action::ExtractMin, 1, None),
                (Action::Relax, 3, Some((1, 3))),
                (Action::ExtractMin, 3, None),
                (Action::Relax, 4, Some((3, 4))),
                (Action::ExtractMin, 4, None),
            ]
        );
        // The stale (1, 4) and (3, 6) entries were skipped without events.
        assert_eq!(trace.len(), steps.len() + 1);
    }

    #[test]
    fn test_init_step_carries_seeded_heap() {
        let graph = sample_graph();
        let trace = dijkstra(&graph, 0).unwrap();
        let init = trace.steps().next().unwrap();
        assert_eq!(init.frontier, Frontier::Heap(vec![HeapEntry::new(0, 0)]));
        assert_eq!(
            init.values,
            Some(vec![
                Distance::Finite(0),
                Distance::Infinite,
                Distance::Infinite,
                Distance::Infinite,
                Distance::Infinite
            ])
        );
    }

    #[test]
    fn test_unreachable_stays_infinite() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 5);
        graph.add_edge(2, 0, 1);
        let trace = dijkstra(&graph, 0).unwrap();
        assert_eq!(
            final_distances(&trace),
            vec![Distance::Finite(0), Distance::Finite(5), Distance::Infinite]
        );
        assert_eq!(final_tree(&trace), vec![EdgeRecord::new(0, 1, 5)]);
    }

    #[test]
    fn test_invalid_start() {
        let graph = sample_graph();
        assert!(matches!(
            dijkstra(&graph, 5),
            Err(EngineError::VertexOutOfRange { vertex: 5, .. })
        ));
    }

    #[test]
    fn test_overflowing_path_is_not_taken() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, Weight::MAX);
        graph.add_edge(1, 2, 1);
        let trace = dijkstra(&graph, 0).unwrap();
        assert_eq!(
            final_distances(&trace),
            vec![
                Distance::Finite(0),
                Distance::Finite(Weight::MAX),
                Distance::Infinite
            ]
        );
        assert_eq!(final_tree(&trace), vec![EdgeRecord::new(0, 1, Weight::MAX)]);
    }

    #[test]
    fn test_heap_overflow_is_an_error() {
        let graph = sample_graph();
        assert_eq!(
            dijkstra_bounded(&graph, 0, 1),
            Err(EngineError::Heap(HeapError::Full { capacity: 1 }))
        );
        assert_eq!(
            dijkstra_bounded(&graph, 0, frontier_capacity(&graph)),
            dijkstra(&graph, 0)
        );
    }

    #[quickcheck]
    fn prop_matches_reference(ArbGraph { graph, start }: ArbGraph) -> bool {
        let Some(start) = start else { return true };
        let trace = dijkstra(&graph, start).unwrap();
        let distances = final_distances(&trace);

        let reference: HashMap<Vertex, (Vertex, Weight)> = dijkstra_all(&start, |&u| {
            graph
                .neighbors(u)
                .map(|e| (e.to, e.weight))
                .collect::<Vec<_>>()
        });
        (0..graph.vertex_count()).all(|v| {
            let expected = if v == start {
                Distance::Finite(0)
            } else {
                reference
                    .get(&v)
                    .map_or(Distance::Infinite, |&(_, cost)| Distance::Finite(cost))
            };
            distances[v] == expected
        })
    }

    #[quickcheck]
    fn prop_tree_paths_sum_to_distance(ArbGraph { graph, start }: ArbGraph) -> bool {
        let Some(start) = start else { return true };
        let trace = dijkstra(&graph, start).unwrap();
        let distances = final_distances(&trace);
        let incoming: HashMap<Vertex, EdgeRecord> =
            final_tree(&trace).into_iter().map(|e| (e.to, e)).collect();

        (0..graph.vertex_count()).all(|v| {
            let Distance::Finite(expected) = distances[v] else {
                return !incoming.contains_key(&v);
            };
            let mut total = 0;
            let mut current = v;
            let mut hops = 0;
            while let Some(edge) = incoming.get(&current) {
                total += edge.weight;
                current = edge.from;
                hops += 1;
                if hops > graph.vertex_count() {
                    return false;
                }
            }
            current == start && total == expected
        })
    }

    #[quickcheck]
    fn prop_extracts_each_vertex_once(ArbGraph { graph, start }: ArbGraph) -> bool {
        let Some(start) = start else { return true };
        let trace = dijkstra(&graph, start).unwrap();
        let mut extracted: Vec<_> = trace
            .steps()
            .filter(|s| s.action == Action::ExtractMin)
            .map(|s| s.vertex)
            .collect();
        let count = extracted.len();
        extracted.sort();
        extracted.dedup();
        extracted.len() == count
    }
}
