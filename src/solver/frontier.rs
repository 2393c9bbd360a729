//! Frontier containers and visited-set disciplines shared by the searches.
use super::arena::NodeId;
use crate::engine::PuzzleState;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};

/// First-in first-out frontier (breadth-first order).
#[derive(Clone, Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        FifoFrontier { queue: VecDeque::new() }
    }

    pub fn push(&mut self, id: NodeId) {
        self.queue.push_back(id);
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Min-priority frontier. Entries with equal keys come out in insertion order.
///
/// Stale entries are never removed; callers skip them on pop.
#[derive(Clone, Debug)]
pub struct PriorityFrontier<K: Ord> {
    heap: BinaryHeap<Reverse<(K, u64, NodeId)>>,
    next_seq: u64,
}

impl<K: Ord> Default for PriorityFrontier<K> {
    fn default() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<K: Ord> PriorityFrontier<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: K, id: NodeId) {
        self.heap.push(Reverse((key, self.next_seq, id)));
        self.next_seq += 1;
    }

    pub fn pop(&mut self) -> Option<(K, NodeId)> {
        self.heap.pop().map(|Reverse((key, _, id))| (key, id))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// How long a state stays in a `VisitedSet`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisitScope {
    /// Once seen, a state is excluded for the rest of the search.
    Global,
    /// A state is excluded only while it is on the current path; backtracking
    /// past it makes it available to other branches again.
    #[default]
    PathScoped,
}

/// States excluded from re-entry, with an explicit scope.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    scope: VisitScope,
    states: HashSet<PuzzleState>,
}

impl VisitedSet {
    pub fn new(scope: VisitScope) -> Self {
        VisitedSet {
            scope,
            states: HashSet::new(),
        }
    }

    pub fn scope(&self) -> VisitScope {
        self.scope
    }

    /// Marks `state` as visited. Returns `false` if it already was.
    pub fn insert(&mut self, state: PuzzleState) -> bool {
        self.states.insert(state)
    }

    pub fn contains(&self, state: &PuzzleState) -> bool {
        self.states.contains(state)
    }

    /// Called when the search backtracks past `state`.
    pub fn leave(&mut self, state: &PuzzleState) {
        if self.scope == VisitScope::PathScoped {
            self.states.remove(state);
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
