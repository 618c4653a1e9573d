use thiserror::Error;

/// Errors reported by the engine boundary and the algorithm entry points.
///
/// None of these are fatal: the engine turns each one into a single
/// [`Event::Error`](crate::trace::Event::Error) and leaves the graph as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An operation was invoked before any graph was initialized.
    #[error("Graph not initialized.")]
    Uninitialized,
    /// A vertex identifier fell outside `[0, vertex_count)`.
    #[error("Invalid vertex {vertex}: graph has {vertex_count} vertices.")]
    VertexOutOfRange { vertex: i64, vertex_count: usize },
    /// A graph was requested with a negative number of vertices.
    #[error("Invalid vertex count: {0}.")]
    InvalidVertexCount(i32),
    /// The frontier heap of a weighted run overflowed.
    #[error("Priority queue error: {0}")]
    Heap(#[from] HeapError),
}

/// Errors raised by [`PriorityQueue`](crate::priority_queue::PriorityQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is full (capacity {capacity})")]
    Full { capacity: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            EngineError::Uninitialized.to_string(),
            "Graph not initialized."
        );
        assert_eq!(
            EngineError::VertexOutOfRange {
                vertex: 99,
                vertex_count: 5
            }
            .to_string(),
            "Invalid vertex 99: graph has 5 vertices."
        );
    }

    #[test]
    fn test_heap_error_converts() {
        let err: EngineError = HeapError::Full { capacity: 3 }.into();
        assert_eq!(err, EngineError::Heap(HeapError::Full { capacity: 3 }));
        assert_eq!(
            err.to_string(),
            "Priority queue error: heap is full (capacity 3)"
        );
    }
}
