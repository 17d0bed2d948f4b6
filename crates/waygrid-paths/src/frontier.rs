use std::cmp::Ordering;
use std::collections::BinaryHeap;

// ---------------------------------------------------------------------------
// Per-cell search state
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) parent: usize,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: usize::MAX,
            closed: false,
        }
    }
}

impl Node {
    /// Whether the cell has ever been given a cost.
    #[inline]
    pub(crate) fn reached(&self) -> bool {
        self.g.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// A frontier entry. `g` is the cost the entry was pushed with, so entries
/// superseded by a later improvement can be recognised.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) priority: f64,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
    pub(crate) g: f64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first;
        // among equal priorities the earliest push wins.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority queue of cells awaiting expansion, FIFO among ties.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, priority: f64, idx: usize, g: f64) {
        self.heap.push(Entry {
            priority,
            seq: self.next_seq,
            idx,
            g,
        });
        self.next_seq += 1;
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    /// Total number of pushes so far.
    #[inline]
    pub(crate) fn pushed(&self) -> u64 {
        self.next_seq
    }
}
