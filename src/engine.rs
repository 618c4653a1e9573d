//! The session boundary: an owned engine holding at most one live graph.
//!
//! Every call returns a [`Response`] instead of failing.  Rejected calls are
//! reported as a single [`Event::Error`] and leave the engine unchanged.

use std::fmt;

use crate::{
    error::EngineError,
    graph::{EdgeRecord, Graph, Vertex, Weight},
    trace::{Event, Mutation, Trace},
    tracing_support::{debug, warning},
};

/// Which engine call produced a [`Response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Init,
    AddEdge,
    RemoveEdge,
    RemoveVertex,
    RunBfs,
    RunDfs,
    RunDijkstra,
    RunPrim,
    State,
    /// The call was rejected before it reached a graph.
    Error,
}

impl Operation {
    pub fn tag(self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::AddEdge => "add_edge",
            Operation::RemoveEdge => "remove_edge",
            Operation::RemoveVertex => "remove_vertex",
            Operation::RunBfs => "bfs",
            Operation::RunDfs => "dfs",
            Operation::RunDijkstra => "dijkstra",
            Operation::RunPrim => "prim",
            Operation::State => "state",
            Operation::Error => "error",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The result envelope of one engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub operation: Operation,
    /// The vertex count for `Init`, the start vertex for runs, otherwise 0.
    pub value: i64,
    /// The graph's edge list after the call.
    pub edges: Vec<EdgeRecord>,
    pub events: Vec<Event>,
}

impl Response {
    fn rejected(operation: Operation, value: i64, edges: Vec<EdgeRecord>, err: EngineError) -> Self {
        Self {
            operation,
            value,
            edges,
            events: vec![Event::Error(err)],
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn uninitialized(attempted: Operation) -> Self {
        warning!(operation = attempted.tag(), "call rejected: graph not initialized");
        Self::rejected(Operation::Error, 0, Vec::new(), EngineError::Uninitialized)
    }

    /// The error carried by this response, if the call was rejected.
    pub fn error(&self) -> Option<&EngineError> {
        self.events.iter().find_map(|event| match event {
            Event::Error(err) => Some(err),
            _ => None,
        })
    }

    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }
}

fn to_vertex(v: i32) -> Option<Vertex> {
    usize::try_from(v).ok()
}

/// An algorithm session.
///
/// `Engine::new()` holds no graph; [`Engine::initialize`] installs a fresh one
/// and drops whatever graph was there before.
#[derive(Debug, Default)]
pub struct Engine {
    graph: Option<Graph>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.graph.is_some()
    }

    /// Replaces the current graph with `vertex_count` isolated vertices.  A
    /// negative count is rejected and the previous graph is kept.
    pub fn initialize(&mut self, vertex_count: i32) -> Response {
        let Some(n) = to_vertex(vertex_count) else {
            warning!(vertex_count, "initialize rejected: negative vertex count");
            return Response::rejected(
                Operation::Error,
                i64::from(vertex_count),
                self.current_edges(),
                EngineError::InvalidVertexCount(vertex_count),
            );
        };
        self.graph = Some(Graph::new(n));
        debug!(vertex_count = n, "graph initialized");
        Response {
            operation: Operation::Init,
            value: i64::from(vertex_count),
            edges: Vec::new(),
            events: vec![Event::Mutation(Mutation::Initialized { vertex_count: n })],
        }
    }

    /// Adds `from -> to`.  Out-of-range endpoints and duplicate edges leave
    /// the graph untouched and are reported with `applied: false`.
    pub fn add_edge(&mut self, from: i32, to: i32, weight: i32) -> Response {
        self.mutate(Operation::AddEdge, |graph| {
            let applied = match (to_vertex(from), to_vertex(to)) {
                (Some(f), Some(t)) => graph.add_edge(f, t, Weight::from(weight)),
                _ => false,
            };
            Mutation::EdgeAdded {
                from,
                to,
                weight,
                applied,
            }
        })
    }

    pub fn remove_edge(&mut self, from: i32, to: i32) -> Response {
        self.mutate(Operation::RemoveEdge, |graph| {
            let applied = match (to_vertex(from), to_vertex(to)) {
                (Some(f), Some(t)) => graph.remove_edge(f, t),
                _ => false,
            };
            Mutation::EdgeRemoved { from, to, applied }
        })
    }

    /// Severs `vertex` from every edge; the vertex id stays valid.
    pub fn remove_vertex(&mut self, vertex: i32) -> Response {
        self.mutate(Operation::RemoveVertex, |graph| {
            let removed = to_vertex(vertex).and_then(|v| graph.remove_vertex(v));
            Mutation::VertexRemoved {
                vertex,
                edges_removed: removed.unwrap_or(0),
                applied: removed.is_some(),
            }
        })
    }

    pub fn run_bfs(&self, start: i32) -> Response {
        self.run(Operation::RunBfs, start, Graph::bfs)
    }

    pub fn run_dfs(&self, start: i32) -> Response {
        self.run(Operation::RunDfs, start, Graph::dfs)
    }

    pub fn run_dijkstra(&self, start: i32) -> Response {
        self.run(Operation::RunDijkstra, start, Graph::dijkstra)
    }

    pub fn run_prim(&self, start: i32) -> Response {
        self.run(Operation::RunPrim, start, Graph::prim)
    }

    /// Reports the current edge list.  Answers even before initialization,
    /// with an empty list.
    pub fn state(&self) -> Response {
        Response {
            operation: Operation::State,
            value: 0,
            edges: self.current_edges(),
            events: vec![Event::Mutation(Mutation::Snapshot)],
        }
    }

    fn current_edges(&self) -> Vec<EdgeRecord> {
        self.graph.as_ref().map(Graph::edges).unwrap_or_default()
    }

    fn mutate(&mut self, operation: Operation, apply: impl FnOnce(&mut Graph) -> Mutation) -> Response {
        let Some(graph) = self.graph.as_mut() else {
            return Response::uninitialized(operation);
        };
        let mutation = apply(graph);
        debug!(%operation, ?mutation, "mutation");
        Response {
            operation,
            value: 0,
            edges: graph.edges(),
            events: vec![Event::Mutation(mutation)],
        }
    }

    fn run(
        &self,
        operation: Operation,
        start: i32,
        algorithm: fn(&Graph, Vertex) -> Result<Trace, EngineError>,
    ) -> Response {
        let Some(graph) = self.graph.as_ref() else {
            return Response::uninitialized(operation);
        };
        let result = to_vertex(start)
            .ok_or(EngineError::VertexOutOfRange {
                vertex: i64::from(start),
                vertex_count: graph.vertex_count(),
            })
            .and_then(|start| algorithm(graph, start));
        let events = match result {
            Ok(trace) => trace.into_events(),
            Err(err) => {
                warning!(%operation, start, %err, "run rejected");
                vec![Event::Error(err)]
            }
        };
        Response {
            operation,
            value: i64::from(start),
            edges: graph.edges(),
            events,
        }
    }
}
