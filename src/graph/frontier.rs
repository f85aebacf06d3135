use crate::graph::model::Vertex;

/// Worklist of not-yet-settled vertices, ordered by current distance.
///
/// Relaxation lowers member distances *after* insertion, which a classic
/// immutable-comparator heap cannot observe, so the queue is kept as a plain
/// vector that is fully re-sorted after each relaxation pass. That trades
/// asymptotic efficiency for simplicity, which is acceptable at the problem
/// sizes this crate targets.
///
/// The sort is stable, so equal-distance vertices keep ascending arena-index
/// order; that is the tie-break rule for the whole algorithm.
#[derive(Debug, Default)]
pub struct FrontierQueue {
    queue: Vec<usize>,
}

impl FrontierQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Loads every vertex of the arena, then sorts by current distance.
    pub fn seed(&mut self, vertices: &[Vertex]) {
        self.queue = (0..vertices.len()).collect();
        self.resort(vertices);
    }

    /// Re-sorts the queue after member distances changed externally.
    ///
    /// Must be called after a relaxation pass and before the next
    /// [`extract_min`](FrontierQueue::extract_min).
    pub fn resort(&mut self, vertices: &[Vertex]) {
        self.queue.sort_by_key(|&index| vertices[index].distance());
    }

    /// Removes and returns the minimum-distance vertex index.
    ///
    /// # Panics
    /// Panics when the queue is empty; extracting from an empty frontier is
    /// a contract violation of the caller, not a data condition.
    pub fn extract_min(&mut self) -> usize {
        assert!(!self.queue.is_empty(), "extract_min on an empty frontier");
        self.queue.remove(0)
    }

    /// Whether `vertex` has not been settled yet.
    pub fn contains(&self, vertex: usize) -> bool {
        self.queue.contains(&vertex)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
