//! Worklists of discovered but not yet finalized search nodes.
//!
//! The priority variant orders by estimated total cost `f = g + h`, breaking ties towards the
//! larger `g` and then towards the earliest insertion, so every pop sequence is deterministic.
//! The FIFO variant ignores costs entirely.
use crate::search::NodeHandle;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

pub trait Frontier {
    /// Adds a node with cost-from-start `cost` and heuristic estimate `estimate`.
    fn push(&mut self, node: NodeHandle, cost: i32, estimate: i32);
    /// Removes the next node to visit, or [None] once the frontier is exhausted.
    fn pop(&mut self) -> Option<NodeHandle>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    sequence: usize,
    node: NodeHandle,
}

impl<K: Ord> Eq for SmallestCostHolder<K> {}

impl<K: Ord> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: smallest estimate first, then largest cost, then the
        // earliest sequence number
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Binary-heap frontier ordered by `cost + estimate`.
#[derive(Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<SmallestCostHolder<i32>>,
    sequence: usize,
}

impl PriorityFrontier {
    pub fn new() -> PriorityFrontier {
        PriorityFrontier::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: NodeHandle, cost: i32, estimate: i32) {
        self.heap.push(SmallestCostHolder {
            estimated_cost: cost + estimate,
            cost,
            sequence: self.sequence,
            node,
        });
        self.sequence += 1;
    }
    fn pop(&mut self) -> Option<NodeHandle> {
        self.heap.pop().map(|holder| holder.node)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// First-in-first-out frontier.
#[derive(Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeHandle>,
}

impl FifoFrontier {
    pub fn new() -> FifoFrontier {
        FifoFrontier::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: NodeHandle, _cost: i32, _estimate: i32) {
        self.queue.push_back(node);
    }
    fn pop(&mut self) -> Option<NodeHandle> {
        self.queue.pop_front()
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
}
