use crate::{
    error::EngineError,
    graph::{Graph, Neighbors, Vertex},
    queue::Queue,
    stack::Stack,
    trace::{Action, Frontier, Status, Trace},
    tracing_support::{debug, info_span},
};

/// Breadth-first search from `start`, recording every queue transition.
///
/// Each reachable vertex moves `Unvisited -> Discovered` when it is enqueued
/// and `Discovered -> Finalized` when it is dequeued, so it is enqueued and
/// visited exactly once.  Neighbors are examined in adjacency order.
pub fn bfs(graph: &Graph, start: Vertex) -> Result<Trace, EngineError> {
    let start = graph.check_vertex(start)?;
    let _span = info_span!("bfs", start).entered();

    let mut status = vec![Status::Unvisited; graph.vertex_count()];
    let mut queue = Queue::new();
    let mut trace = Trace::new();

    status[start] = Status::Discovered;
    queue.enqueue(start);
    trace.step(
        Frontier::Queue(queue.snapshot()),
        start,
        Action::VisitStart,
        None,
        Status::Discovered,
        None,
    );

    while let Some(u) = queue.dequeue() {
        status[u] = Status::Finalized;
        trace.step(
            Frontier::Queue(queue.snapshot()),
            u,
            Action::Dequeue,
            None,
            Status::Finalized,
            None,
        );

        for edge in graph.neighbors(u) {
            let v = edge.to;
            if status[v] == Status::Unvisited {
                status[v] = Status::Discovered;
                queue.enqueue(v);
                trace.step(
                    Frontier::Queue(queue.snapshot()),
                    v,
                    Action::Enqueue,
                    Some((u, v)),
                    Status::Discovered,
                    None,
                );
            }
        }
    }

    debug!(events = trace.len(), "bfs complete");
    Ok(trace)
}

/// Depth-first search from `start` using an explicit stack with backtracking.
///
/// The top of the stack is inspected rather than popped.  A vertex seen for
/// the first time is visited; it then pushes its first unvisited neighbor and
/// stays on the stack.  When it surfaces again it resumes its neighbor scan
/// where it stopped.  A vertex with no unvisited neighbor left is popped:
/// `PopBacktrack` right after its visit, `Pop` when it had been resumed.
pub fn dfs(graph: &Graph, start: Vertex) -> Result<Trace, EngineError> {
    let start = graph.check_vertex(start)?;
    let _span = info_span!("dfs", start).entered();

    let mut status = vec![Status::Unvisited; graph.vertex_count()];
    let mut cursors: Vec<Option<Neighbors<'_>>> = vec![None; graph.vertex_count()];
    let mut stack = Stack::new();
    let mut trace = Trace::new();

    stack.push(start);
    status[start] = Status::Discovered;
    trace.step(
        Frontier::Stack(stack.snapshot()),
        start,
        Action::PushStart,
        None,
        Status::Discovered,
        None,
    );

    while let Some(u) = stack.top() {
        let resumed = status[u] == Status::Finalized;
        if !resumed {
            status[u] = Status::Finalized;
            cursors[u] = Some(graph.neighbors(u));
            trace.step(
                Frontier::Stack(stack.snapshot()),
                u,
                Action::Visit,
                None,
                Status::Finalized,
                None,
            );
        }

        let next = cursors[u]
            .as_mut()
            .and_then(|scan| scan.find(|edge| status[edge.to] == Status::Unvisited))
            .map(|edge| edge.to);
        match next {
            Some(v) => {
                stack.push(v);
                status[v] = Status::Discovered;
                trace.step(
                    Frontier::Stack(stack.snapshot()),
                    v,
                    Action::Push,
                    Some((u, v)),
                    Status::Discovered,
                    None,
                );
            }
            None => {
                stack.pop();
                cursors[u] = None;
                let action = if resumed {
                    Action::Pop
                } else {
                    Action::PopBacktrack
                };
                trace.step(
                    Frontier::Stack(stack.snapshot()),
                    u,
                    action,
                    None,
                    Status::Finalized,
                    None,
                );
            }
        }
    }

    debug!(events = trace.len(), "dfs complete");
    Ok(trace)
}
