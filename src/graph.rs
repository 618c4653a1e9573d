use std::fmt;

use crate::{
    error::EngineError,
    search, shortest_path, spanning_tree,
    trace::Trace,
    tracing_support::debug,
};

/// Vertex identifier, valid in `[0, vertex_count)`.
pub type Vertex = usize;

/// Signed edge weight.  Nothing rejects negative weights, but Dijkstra's
/// result is only meaningful when they are absent.
pub type Weight = i64;

/// An outgoing edge as stored in a vertex's adjacency chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: Vertex,
    pub weight: Weight,
}

/// A `(from, to, weight)` triple, as reported by [`Graph::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeRecord {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new(from: Vertex, to: Vertex, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (w={})", self.from, self.to, self.weight)
    }
}

struct AdjNode {
    edge: Edge,
    next: Option<Box<AdjNode>>,
}

type Chain = Option<Box<AdjNode>>;

/// Detaches the first node whose destination is `to`, relinking its successor
/// into its place.
fn unlink(mut cursor: &mut Chain, to: Vertex) -> Option<Box<AdjNode>> {
    while cursor.as_ref().is_some_and(|node| node.edge.to != to) {
        cursor = &mut cursor.as_mut()?.next;
    }
    let mut removed = cursor.take()?;
    *cursor = removed.next.take();
    Some(removed)
}

/// Releases a chain node by node, returning how many nodes it held.
fn release(chain: &mut Chain) -> usize {
    let mut count = 0;
    let mut current = chain.take();
    while let Some(mut node) = current {
        current = node.next.take();
        count += 1;
    }
    count
}

/// Iterator over one vertex's outgoing edges, in adjacency order.  It can be
/// parked and resumed, which depth-first search uses to pick up a vertex's
/// scan where it left off.
#[derive(Clone)]
pub struct Neighbors<'a> {
    current: Option<&'a AdjNode>,
}

impl Iterator for Neighbors<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(node.edge)
    }
}

/// A directed, weighted graph over a fixed number of vertices.
///
/// Each vertex owns a singly linked chain of its outgoing edges.  New edges
/// are linked at the head of the chain, so adjacency order is newest first.
/// At most one edge exists per `(from, to)` pair.
///
/// The algorithm entry points ([`Graph::bfs`], [`Graph::dfs`],
/// [`Graph::dijkstra`], [`Graph::prim`]) only read the graph; every run builds
/// its own frontier and status arrays and returns the recorded [`Trace`].
pub struct Graph {
    heads: Vec<Chain>,
    num_edges: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        let mut heads = Vec::with_capacity(vertex_count);
        heads.resize_with(vertex_count, || None);
        Self {
            heads,
            num_edges: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.heads.len()
    }

    pub fn edge_count(&self) -> usize {
        self.num_edges
    }

    pub fn contains_vertex(&self, v: Vertex) -> bool {
        v < self.heads.len()
    }

    /// Returns `Ok(v)` if `v` names a vertex of this graph.
    pub fn check_vertex(&self, v: Vertex) -> Result<Vertex, EngineError> {
        if self.contains_vertex(v) {
            Ok(v)
        } else {
            Err(EngineError::VertexOutOfRange {
                vertex: i64::try_from(v).unwrap_or(i64::MAX),
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Iterates over the outgoing edges of `v` in adjacency order.  An
    /// out-of-range vertex has no edges.
    pub fn neighbors(&self, v: Vertex) -> Neighbors<'_> {
        Neighbors {
            current: self.heads.get(v).and_then(|head| head.as_deref()),
        }
    }

    pub fn edge_weight(&self, from: Vertex, to: Vertex) -> Option<Weight> {
        self.neighbors(from)
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    pub fn contains_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Adds the edge `from -> to`.  Returns `false` without changing anything
    /// if either endpoint is out of range or the edge already exists; the
    /// existing weight is kept in the latter case.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex, weight: Weight) -> bool {
        if !self.contains_vertex(from) || !self.contains_vertex(to) {
            debug!(from, to, "add_edge rejected: vertex out of range");
            return false;
        }
        if self.contains_edge(from, to) {
            debug!(from, to, "add_edge ignored: edge exists");
            return false;
        }
        let head = &mut self.heads[from];
        let next = head.take();
        *head = Some(Box::new(AdjNode {
            edge: Edge { to, weight },
            next,
        }));
        self.num_edges += 1;
        true
    }

    /// Removes the edge `from -> to`, returning whether it existed.
    pub fn remove_edge(&mut self, from: Vertex, to: Vertex) -> bool {
        if !self.contains_vertex(from) || !self.contains_vertex(to) {
            debug!(from, to, "remove_edge rejected: vertex out of range");
            return false;
        }
        let removed = unlink(&mut self.heads[from], to).is_some();
        if removed {
            self.num_edges -= 1;
        }
        removed
    }

    /// Severs `v` from the graph: drops all of its outgoing edges, then every
    /// edge from another vertex into it.  The vertex itself stays valid.
    ///
    /// Returns the number of edges removed, or `None` if `v` is out of range.
    pub fn remove_vertex(&mut self, v: Vertex) -> Option<usize> {
        if !self.contains_vertex(v) {
            debug!(v, "remove_vertex rejected: vertex out of range");
            return None;
        }
        let mut removed = release(&mut self.heads[v]);
        for (u, head) in self.heads.iter_mut().enumerate() {
            if u != v && unlink(head, v).is_some() {
                removed += 1;
            }
        }
        self.num_edges -= removed;
        Some(removed)
    }

    /// Returns every edge, grouped by ascending source vertex and in
    /// adjacency order within each source.
    pub fn edges(&self) -> Vec<EdgeRecord> {
        let mut edges = Vec::with_capacity(self.num_edges);
        for from in 0..self.vertex_count() {
            edges.extend(
                self.neighbors(from)
                    .map(|edge| EdgeRecord::new(from, edge.to, edge.weight)),
            );
        }
        edges
    }

    /// Runs a traced breadth-first search from `start`.
    pub fn bfs(&self, start: Vertex) -> Result<Trace, EngineError> {
        search::bfs(self, start)
    }

    /// Runs a traced depth-first search from `start`.
    pub fn dfs(&self, start: Vertex) -> Result<Trace, EngineError> {
        search::dfs(self, start)
    }

    /// Runs Dijkstra's shortest-path algorithm from `start`.
    pub fn dijkstra(&self, start: Vertex) -> Result<Trace, EngineError> {
        shortest_path::dijkstra(self, start)
    }

    /// Runs Prim's minimum spanning tree algorithm from `start`.
    pub fn prim(&self, start: Vertex) -> Result<Trace, EngineError> {
        spanning_tree::prim(self, start)
    }

    /// Builds the edge list of a search tree from its parent array.  The
    /// weight of each edge is looked up in the graph, defaulting to 0 if the
    /// edge is no longer present.
    pub(crate) fn tree_edges(&self, parent: &[Option<Vertex>]) -> Vec<EdgeRecord> {
        parent
            .iter()
            .enumerate()
            .filter_map(|(v, p)| {
                p.map(|p| EdgeRecord::new(p, v, self.edge_weight(p, v).unwrap_or(0)))
            })
            .collect()
    }
}

impl Drop for Graph {
    fn drop(&mut self) {
        for head in &mut self.heads {
            release(head);
        }
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertex_count", &self.vertex_count())
            .field("edges", &self.edges())
            .finish()
    }
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        let mut graph = Graph::new(self.vertex_count());
        // Re-adding in reverse restores the newest-first order.
        for from in 0..self.vertex_count() {
            let chain: Vec<Edge> = self.neighbors(from).collect();
            for edge in chain.into_iter().rev() {
                graph.add_edge(from, edge.to, edge.weight);
            }
        }
        graph
    }
}
