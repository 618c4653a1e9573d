pub use crate::distance::Distance;
pub use crate::engine::{Engine, Operation, Response};
pub use crate::error::{EngineError, HeapError};
pub use crate::graph::{Edge, EdgeRecord, Graph, Vertex, Weight};
pub use crate::trace::{Action, Event, Frontier, Mutation, NodeStatus, Status, Step, Trace};
