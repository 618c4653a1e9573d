//! The event trace produced by mutations and algorithm runs.
//!
//! A [`Trace`] is append-only: the crate pushes one [`Event`] per state
//! transition and callers can only read it back.  Replaying the events in
//! order reproduces every intermediate state of the run.

use std::fmt;

use crate::{
    distance::Distance,
    error::EngineError,
    graph::{EdgeRecord, Vertex, Weight},
    priority_queue::HeapEntry,
};

/// Per-vertex progress of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Not reached yet.
    #[default]
    Unvisited,
    /// Queued (BFS), discovered (DFS) or tentatively labelled (Dijkstra, Prim).
    Discovered,
    /// Dequeued, visited or settled; will not change again during the run.
    Finalized,
}

impl Status {
    /// The numeric code visualization front ends use: 0, 1 or 2.
    pub fn code(self) -> u8 {
        match self {
            Status::Unvisited => 0,
            Status::Discovered => 1,
            Status::Finalized => 2,
        }
    }
}

/// The new status of a vertex touched by a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeStatus {
    pub vertex: Vertex,
    pub status: Status,
}

impl NodeStatus {
    pub fn new(vertex: Vertex, status: Status) -> Self {
        Self { vertex, status }
    }
}

/// A snapshot of the auxiliary structure driving a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frontier {
    /// BFS queue, front to rear.
    Queue(Vec<Vertex>),
    /// DFS stack, top to bottom.
    Stack(Vec<Vertex>),
    /// Dijkstra/Prim heap entries in array order.
    Heap(Vec<HeapEntry>),
}

/// What a step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    VisitStart,
    Dequeue,
    Enqueue,
    PushStart,
    Visit,
    /// DFS discovered a neighbor of the top vertex.  The source may be a
    /// vertex visited earlier that has resurfaced with unvisited neighbors
    /// left; it stays on the stack until it is popped.
    Push,
    /// A DFS vertex left the stack after resurfacing.  A resurfaced vertex
    /// may emit further `Push` steps before its `Pop`.
    Pop,
    /// A DFS vertex left the stack right after its visit.
    PopBacktrack,
    InitStart,
    ExtractMin,
    Relax,
    KeyUpdate,
}

impl Action {
    /// The symbolic tag consumers key their animations on.
    pub fn tag(self) -> &'static str {
        match self {
            Action::VisitStart => "visit_start",
            Action::Dequeue => "dequeue",
            Action::Enqueue => "enqueue",
            Action::PushStart => "push_start",
            Action::Visit => "visit",
            Action::Push => "push",
            Action::Pop => "pop",
            Action::PopBacktrack => "pop_backtrack",
            Action::InitStart => "init_start",
            Action::ExtractMin => "extract_min",
            Action::Relax => "relax",
            Action::KeyUpdate => "key_update",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One intermediate state transition of an algorithm run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The auxiliary structure as it stands after the transition.
    pub frontier: Frontier,
    /// The vertex acted upon.
    pub vertex: Vertex,
    pub action: Action,
    /// The edge just traversed, if any.
    pub edge: Option<(Vertex, Vertex)>,
    /// The vertices whose status changed.
    pub nodes: Vec<NodeStatus>,
    /// Distance array (Dijkstra) or key array (Prim); `None` for BFS and DFS.
    pub values: Option<Vec<Distance>>,
}

/// A structural change, or a state query, on the engine's graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Initialized {
        vertex_count: usize,
    },
    EdgeAdded {
        from: i32,
        to: i32,
        weight: i32,
        applied: bool,
    },
    EdgeRemoved {
        from: i32,
        to: i32,
        applied: bool,
    },
    VertexRemoved {
        vertex: i32,
        edges_removed: usize,
        applied: bool,
    },
    Snapshot,
}

/// A single record in a [`Trace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Step(Step),
    /// Final record of a Dijkstra run.
    ShortestPaths {
        distances: Vec<Distance>,
        tree_edges: Vec<EdgeRecord>,
    },
    /// Final record of a Prim run.
    SpanningTree {
        total_cost: Weight,
        keys: Vec<Distance>,
        tree_edges: Vec<EdgeRecord>,
    },
    Mutation(Mutation),
    Error(EngineError),
}

impl Event {
    pub fn as_step(&self) -> Option<&Step> {
        match self {
            Event::Step(step) => Some(step),
            _ => None,
        }
    }

    /// The symbolic action tag of this event.
    pub fn tag(&self) -> &'static str {
        match self {
            Event::Step(step) => step.action.tag(),
            Event::ShortestPaths { .. } | Event::SpanningTree { .. } => "final_result",
            Event::Mutation(_) => "mutation",
            Event::Error(_) => "error",
        }
    }
}

/// An ordered, append-only sequence of events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trace {
    events: Vec<Event>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn single(event: Event) -> Self {
        Self {
            events: vec![event],
        }
    }

    pub(crate) fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub(crate) fn step(
        &mut self,
        frontier: Frontier,
        vertex: Vertex,
        action: Action,
        edge: Option<(Vertex, Vertex)>,
        status: Status,
        values: Option<Vec<Distance>>,
    ) {
        self.push(Event::Step(Step {
            frontier,
            vertex,
            action,
            edge,
            nodes: vec![NodeStatus::new(vertex, status)],
            values,
        }));
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Iterates over the [`Step`] events only.
    pub fn steps(&self) -> impl Iterator<Item = &Step> + '_ {
        self.events.iter().filter_map(Event::as_step)
    }
}

impl IntoIterator for Trace {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

struct Joined<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for Joined<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for HeapEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.vertex, self.distance)
    }
}

impl fmt::Display for Frontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frontier::Queue(q) => write!(f, "queue={}", Joined(q)),
            Frontier::Stack(s) => write!(f, "stack={}", Joined(s)),
            Frontier::Heap(h) => write!(f, "pq={}", Joined(h)),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v={}", self.action, self.vertex)?;
        if let Some((from, to)) = self.edge {
            write!(f, " edge={from}->{to}")?;
        }
        write!(f, " {}", self.frontier)?;
        if let Some(values) = &self.values {
            write!(f, " values={}", Joined(values))?;
        }
        Ok(())
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::Initialized { vertex_count } => {
                write!(f, "Initialized graph with {vertex_count} vertices.")
            }
            Mutation::EdgeAdded {
                from, to, weight, ..
            } => write!(f, "Added edge {from} -> {to} (w={weight})."),
            Mutation::EdgeRemoved { from, to, .. } => write!(f, "Removed edge {from} -> {to}."),
            Mutation::VertexRemoved { vertex, .. } => {
                write!(f, "Removed vertex {vertex} and all connected edges.")
            }
            Mutation::Snapshot => write!(f, "Current state."),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Step(step) => write!(f, "{step}"),
            Event::ShortestPaths {
                distances,
                tree_edges,
            } => write!(
                f,
                "Dijkstra's complete. Final distances {} via {}",
                Joined(distances),
                Joined(tree_edges)
            ),
            Event::SpanningTree {
                total_cost,
                tree_edges,
                ..
            } => write!(
                f,
                "Prim's complete. Total MST Cost: {total_cost} via {}",
                Joined(tree_edges)
            ),
            Event::Mutation(mutation) => write!(f, "{mutation}"),
            Event::Error(err) => write!(f, "Error: {err}"),
        }
    }
}
