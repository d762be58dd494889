use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::CellId;

/// One open-set entry. Ordered by `f`, then by insertion `seq`, both
/// ascending; the cell handle never takes part in the ordering.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FrontierEntry {
    pub f: u32,
    pub seq: u64,
    pub id: CellId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority open set with FIFO tie-breaking among equal `f` scores.
///
/// Entries keep the priority they were pushed with; there is no
/// decrease-key.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `id` with priority `f`, stamping it with the next sequence
    /// number. Returns the sequence number used.
    pub fn push(&mut self, id: CellId, f: u32) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry { f, seq, id });
        seq
    }

    /// Remove the entry with the smallest `(f, seq)`.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
