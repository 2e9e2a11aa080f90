use crate::errors::{Result, SearchError};
use super::{Cost, FxHashMap, NodeId};

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};


/// Candidate partial path waiting on the frontier
/// Built once and never mutated - expansion produces new states
#[derive(Clone, Debug, PartialEq)]
pub struct SearchState<C> {
    cost: C, // accumulated cost of the path
    path: Vec<NodeId>, // simple path from start, never empty
    heuristic: C, // estimate for the last node of the path
    priority: C, // cost + heuristic, summed once at construction
}

impl<C: Cost> SearchState<C> {

    /// State for the start node of a search
    pub fn seed(start: NodeId, heuristic: C) -> Self {
        Self {
            cost: C::zero(),
            path: vec![start],
            heuristic,
            priority: heuristic,
        }
    }

    /// New state reaching `node` over an edge from this state's last node
    /// Fails with CostOverflow when the cost or priority cannot be represented
    pub fn extend(&self, node: NodeId, edge_cost: C, heuristic: C) -> Result<Self> {
        let cost = edge_cost.checked_sum(self.cost)
            .ok_or(SearchError::CostOverflow { node })?;
        let priority = cost.checked_sum(heuristic)
            .ok_or(SearchError::CostOverflow { node })?;

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(node);

        Ok(Self { cost, path, heuristic, priority })
    }

    pub fn cost(&self) -> C {
        self.cost
    }

    pub fn heuristic(&self) -> C {
        self.heuristic
    }

    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    pub fn into_path(self) -> Vec<NodeId> {
        self.path
    }

    /// Node the path currently ends on
    pub fn node(&self) -> NodeId {
        self.path[self.path.len() - 1]
    }

    /// Priority used for extraction: cost + heuristic
    pub fn f_cost(&self) -> C {
        self.priority
    }
}


/// Frontier of candidate states ordered by cost + heuristic
/// Implementations must agree on the extraction order:
/// the minimum f_cost wins and ties go to the earliest inserted state still present
pub trait Frontier<C> {

    /// Add a state unless an equal state is already waiting
    fn insert(&mut self, state: SearchState<C>);

    /// Remove and return the best state
    fn extract_best(&mut self) -> Result<SearchState<C>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}


/// Frontier backed by an unordered Vec and a linear scan on extraction
#[derive(Debug)]
pub struct ScanFrontier<C> {
    states: Vec<SearchState<C>>,
}

impl<C> ScanFrontier<C> {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }
}

impl<C> Default for ScanFrontier<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cost> Frontier<C> for ScanFrontier<C> {

    fn insert(&mut self, state: SearchState<C>) {
        if !self.states.contains(&state) {
            self.states.push(state);
        }
    }

    fn extract_best(&mut self) -> Result<SearchState<C>> {
        if self.states.is_empty() {
            return Err(SearchError::EmptyFrontier);
        }

        // strict comparison keeps the lowest index on ties
        let mut best = 0;
        for (index, state) in self.states.iter().enumerate().skip(1) {
            if state.f_cost() < self.states[best].f_cost() {
                best = index;
            }
        }

        // remove (not swap_remove) so the remaining states keep their order
        Ok(self.states.remove(best))
    }

    fn len(&self) -> usize {
        self.states.len()
    }
}


/// Heap entry - ordered by f_cost, then by insertion sequence
#[derive(Debug)]
struct Entry<C> {
    f_cost: C,
    sequence: u64,
    state: SearchState<C>,
}

impl<C: PartialOrd> Ord for Entry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest entry, so both keys are reversed
        other.f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
impl<C: PartialOrd> PartialOrd for Entry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialOrd> PartialEq for Entry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: PartialOrd> Eq for Entry<C> {}


/// Frontier backed by a binary heap
/// Insertion sequence numbers reproduce the scan frontier's tie-break.
/// Waiting states are indexed by path; the (cost, heuristic) pairs under a
/// path are compared by value, so floats need no Hash impl
#[derive(Debug)]
pub struct HeapFrontier<C> {
    heap: BinaryHeap<Entry<C>>,
    live: FxHashMap<Vec<NodeId>, Vec<(C, C)>>,
    next_sequence: u64,
}

impl<C: PartialOrd> HeapFrontier<C> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: FxHashMap::default(),
            next_sequence: 0,
        }
    }
}

impl<C: PartialOrd> Default for HeapFrontier<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cost> Frontier<C> for HeapFrontier<C> {

    fn insert(&mut self, state: SearchState<C>) {
        let key = (state.cost, state.heuristic);
        let waiting = self.live.entry(state.path.clone()).or_default();
        if waiting.contains(&key) {
            return;
        }
        waiting.push(key);

        self.heap.push(Entry {
            f_cost: state.f_cost(),
            sequence: self.next_sequence,
            state,
        });
        self.next_sequence += 1;
    }

    fn extract_best(&mut self) -> Result<SearchState<C>> {
        let Entry { state, .. } = self.heap.pop().ok_or(SearchError::EmptyFrontier)?;

        let key = (state.cost, state.heuristic);
        if let Some(waiting) = self.live.get_mut(&state.path) {
            if let Some(position) = waiting.iter().position(|value| *value == key) {
                waiting.swap_remove(position);
            }
            if waiting.is_empty() {
                self.live.remove(&state.path);
            }
        }
        Ok(state)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
