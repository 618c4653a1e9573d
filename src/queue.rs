use crate::graph::Vertex;

#[derive(Clone, Copy)]
struct QueueNode {
    vertex: Vertex,
    next: Option<usize>,
}

/// A FIFO queue of vertices.
///
/// Nodes live in an arena and are linked by index, with cursors on the
/// front (removal) and rear (insertion) ends.  Slots released by
/// [`Queue::dequeue`] go on a free list and are reused by later enqueues,
/// so a breadth-first run never holds more slots than its widest frontier.
pub struct Queue {
    arena: Vec<QueueNode>,
    free: Vec<usize>,
    front: Option<usize>,
    rear: Option<usize>,
    len: usize,
}

impl Queue {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            front: None,
            rear: None,
            len: 0,
        }
    }

    pub fn enqueue(&mut self, vertex: Vertex) {
        let node = QueueNode { vertex, next: None };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.arena[slot] = node;
                slot
            }
            None => {
                self.arena.push(node);
                self.arena.len() - 1
            }
        };
        match self.rear {
            Some(rear) => self.arena[rear].next = Some(slot),
            None => self.front = Some(slot),
        }
        self.rear = Some(slot);
        self.len += 1;
    }

    /// Removes and returns the front vertex, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<Vertex> {
        let slot = self.front?;
        let QueueNode { vertex, next } = self.arena[slot];
        self.front = next;
        if self.front.is_none() {
            self.rear = None;
        }
        self.free.push(slot);
        self.len -= 1;
        Some(vertex)
    }

    pub fn front(&self) -> Option<Vertex> {
        self.front.map(|slot| self.arena[slot].vertex)
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterates from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        let mut current = self.front;
        std::iter::from_fn(move || {
            let node = &self.arena[current?];
            current = node.next;
            Some(node.vertex)
        })
    }

    /// Returns the contents front-to-rear.
    pub fn snapshot(&self) -> Vec<Vertex> {
        self.iter().collect()
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}
