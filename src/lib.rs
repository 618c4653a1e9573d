//! A directed, weighted graph engine that records every intermediate state of
//! the classic graph algorithms it runs.
//!
//! [`Graph`] stores one linked adjacency chain per vertex and exposes
//! breadth-first search, depth-first search, Dijkstra's shortest paths and
//! Prim's minimum spanning tree.  Each run drives its own hand-built frontier
//! ([`Queue`](queue::Queue), [`Stack`](stack::Stack) or
//! [`PriorityQueue`](priority_queue::PriorityQueue)) and returns a
//! [`Trace`]: the ordered events a front end replays to animate the run.
//!
//! [`Engine`] wraps a graph in a session boundary where no call fails; errors
//! come back as events inside a [`Response`].
//!
//! ```
//! use graphtrace::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.initialize(3);
//! engine.add_edge(0, 1, 2);
//! engine.add_edge(1, 2, 2);
//! engine.add_edge(0, 2, 5);
//!
//! let response = engine.run_dijkstra(0);
//! match response.events.last() {
//!     Some(Event::ShortestPaths { distances, .. }) => {
//!         assert_eq!(distances[2], Distance::Finite(4));
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod distance;
pub mod engine;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod priority_queue;
pub mod queue;
pub mod search;
pub mod shortest_path;
pub mod spanning_tree;
pub mod stack;
pub mod trace;
pub mod tracing_support;

#[cfg(test)]
mod graph_test_support;

pub use engine::{Engine, Operation, Response};
pub use error::{EngineError, HeapError};
pub use graph::{Graph, Vertex, Weight};
pub use trace::{Event, Trace};
