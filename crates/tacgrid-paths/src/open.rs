//! Open set of the A* search.
//!
//! Entries are kept in a min-heap keyed by `(f, seq)`, where `seq` is the
//! order in which a node *first* entered the open set. A node whose `f`
//! drops while it is open is pushed again under its original `seq`, and the
//! stale entry is skipped when it surfaces. Popping therefore yields the
//! lowest `f`, and among equal `f` the node that has been open the longest,
//! which is what scanning an append-only open list for the first minimum
//! yields.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenEntry {
    pub(crate) f: i32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .cmp(&other.f)
            .then(self.seq.cmp(&other.seq))
            .then(self.idx.cmp(&other.idx))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<Reverse<OpenEntry>>,
    next_seq: u64,
}

impl OpenSet {
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    /// Add a node entering the open set for the first time. Returns its seq.
    pub(crate) fn insert(&mut self, idx: usize, f: i32) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(OpenEntry { f, seq, idx }));
        seq
    }

    /// Re-queue an open node whose `f` improved, keeping its place in line.
    pub(crate) fn decrease(&mut self, idx: usize, f: i32, seq: u64) {
        self.heap.push(Reverse(OpenEntry { f, seq, idx }));
    }

    /// Lowest entry, stale ones included; the caller filters them.
    pub(crate) fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop().map(|Reverse(e)| e)
    }
}
