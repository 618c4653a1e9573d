use crate::{
    distance::Distance,
    error::EngineError,
    graph::{Graph, Vertex, Weight},
    priority_queue::PriorityQueue,
    shortest_path::frontier_capacity,
    trace::{Action, Event, Frontier, Status, Trace},
    tracing_support::{debug, info_span},
};

/// Prim's minimum spanning tree grown from `start`.
///
/// Edges are followed in their stored direction, so a spanning tree over the
/// whole graph needs each undirected connection stored both ways.  Vertices
/// that cannot be reached from `start` never join the tree; the reported cost
/// then covers the reachable part only, and saturates at [`Weight::MAX`].
///
/// Like [`dijkstra`](crate::shortest_path::dijkstra), improved keys are pushed
/// as new heap entries and stale ones are skipped on extraction.  The trace
/// ends with [`Event::SpanningTree`].
pub fn prim(graph: &Graph, start: Vertex) -> Result<Trace, EngineError> {
    prim_bounded(graph, start, frontier_capacity(graph))
}

/// [`prim`] with an explicit heap capacity.
pub(crate) fn prim_bounded(
    graph: &Graph,
    start: Vertex,
    capacity: usize,
) -> Result<Trace, EngineError> {
    let start = graph.check_vertex(start)?;
    let _span = info_span!("prim", start).entered();

    let n = graph.vertex_count();
    let mut key = vec![Distance::Infinite; n];
    let mut parent: Vec<Option<Vertex>> = vec![None; n];
    let mut in_mst = vec![false; n];
    let mut pq = PriorityQueue::with_capacity(capacity);
    let mut trace = Trace::new();
    let mut total_cost: Weight = 0;

    key[start] = Distance::Finite(0);
    pq.insert(start, 0)?;
    trace.step(
        Frontier::Heap(pq.snapshot()),
        start,
        Action::InitStart,
        None,
        Status::Discovered,
        Some(key.clone()),
    );

    while let Some(entry) = pq.extract_min() {
        let u = entry.vertex;
        if in_mst[u] {
            continue;
        }
        in_mst[u] = true;
        if parent[u].is_some() {
            total_cost = total_cost.saturating_add(entry.distance);
        }
        trace.step(
            Frontier::Heap(pq.snapshot()),
            u,
            Action::ExtractMin,
            None,
            Status::Finalized,
            Some(key.clone()),
        );

        for edge in graph.neighbors(u) {
            let v = edge.to;
            if in_mst[v] || Distance::Finite(edge.weight) >= key[v] {
                continue;
            }
            key[v] = Distance::Finite(edge.weight);
            parent[v] = Some(u);
            pq.insert(v, edge.weight)?;
            trace.step(
                Frontier::Heap(pq.snapshot()),
                v,
                Action::KeyUpdate,
                Some((u, v)),
                Status::Discovered,
                Some(key.clone()),
            );
        }
    }

    let tree_edges = graph.tree_edges(&parent);
    debug!(total_cost, tree_edges = tree_edges.len(), "prim complete");
    trace.push(Event::SpanningTree {
        total_cost,
        keys: key,
        tree_edges,
    });
    Ok(trace)
}
