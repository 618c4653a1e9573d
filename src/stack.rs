use crate::graph::Vertex;

struct StackNode {
    vertex: Vertex,
    next: Option<Box<StackNode>>,
}

/// A LIFO stack of vertices built from an owned chain of nodes.
///
/// Depth-first search keeps its active path here.  Each node owns its
/// successor, so push and pop are O(1) and nothing has to be freed by hand.
pub struct Stack {
    top: Option<Box<StackNode>>,
    len: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn push(&mut self, vertex: Vertex) {
        let next = self.top.take();
        self.top = Some(Box::new(StackNode { vertex, next }));
        self.len += 1;
    }

    /// Removes and returns the top vertex, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<Vertex> {
        self.top.take().map(|node| {
            let StackNode { vertex, next } = *node;
            self.top = next;
            self.len -= 1;
            vertex
        })
    }

    /// Returns the top vertex without removing it.
    pub fn top(&self) -> Option<Vertex> {
        self.top.as_ref().map(|node| node.vertex)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterates from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        let mut current = self.top.as_deref();
        std::iter::from_fn(move || {
            let node = current?;
            current = node.next.as_deref();
            Some(node.vertex)
        })
    }

    /// Returns the contents top-to-bottom.
    pub fn snapshot(&self) -> Vec<Vertex> {
        self.iter().collect()
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Stack {
    // Unlink iteratively; the default drop would recurse once per node.
    fn drop(&mut self) {
        let mut current = self.top.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}
