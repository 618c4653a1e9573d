use crate::{
    error::HeapError,
    graph::{Vertex, Weight},
};

/// A `(vertex, distance)` pair stored in the heap.  For Prim's algorithm the
/// distance is the weight of the edge that would attach the vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub vertex: Vertex,
    pub distance: Weight,
}

impl HeapEntry {
    pub fn new(vertex: Vertex, distance: Weight) -> Self {
        Self { vertex, distance }
    }
}

/// A fixed-capacity binary min-heap ordered by ascending distance.
///
/// The heap is 1-indexed: slot 0 of the backing array is never read, the
/// root lives at 1 and the children of `i` at `2i` and `2i + 1`.  There is no
/// decrease-key; callers insert a fresh entry with the smaller distance and
/// skip the stale one when it is eventually extracted.
pub struct PriorityQueue {
    slots: Vec<HeapEntry>,
    capacity: usize,
}

impl PriorityQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(HeapEntry::new(0, 0));
        Self { slots, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an entry, failing without modification if the heap is full.
    pub fn insert(&mut self, vertex: Vertex, distance: Weight) -> Result<(), HeapError> {
        if self.len() >= self.capacity {
            return Err(HeapError::Full {
                capacity: self.capacity,
            });
        }
        self.slots.push(HeapEntry::new(vertex, distance));
        self.sift_up(self.len());
        Ok(())
    }

    /// Removes and returns the entry with the smallest distance.
    pub fn extract_min(&mut self) -> Option<HeapEntry> {
        let last = self.len();
        if last == 0 {
            return None;
        }
        self.slots.swap(1, last);
        let min = self.slots.pop();
        if self.len() > 0 {
            self.sift_down(1);
        }
        min
    }

    pub fn peek(&self) -> Option<&HeapEntry> {
        self.slots.get(1)
    }

    /// Returns the entries in array order, root first.
    pub fn snapshot(&self) -> Vec<HeapEntry> {
        self.slots[1..].to_vec()
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 1 && self.slots[i].distance < self.slots[i / 2].distance {
            self.slots.swap(i, i / 2);
            i /= 2;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.len();
        while 2 * i <= len {
            let left = 2 * i;
            let right = left + 1;
            let mut smallest = left;
            if right <= len && self.slots[right].distance < self.slots[left].distance {
                smallest = right;
            }
            if self.slots[i].distance > self.slots[smallest].distance {
                self.slots.swap(i, smallest);
                i = smallest;
            } else {
                break;
            }
        }
    }
}
