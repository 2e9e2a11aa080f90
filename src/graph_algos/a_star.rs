use crate::errors::{Result, SearchError};
use crate::config::{FrontierKind, GoalPolicy, SearchConfig};
use super::frontier::{Frontier, HeapFrontier, ScanFrontier, SearchState};
use super::{Cost, CostMatrix, FxHashSet, FxIndexMap, NodeId};

use std::sync::{Arc, atomic::{AtomicBool, Ordering}};
use tracing::{debug, trace, warn};



/// Flag for stopping a running search from elsewhere
/// Checked once per frontier extraction
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}


/// Result of a single search
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<C> {
    /// Path from start to goal, empty when no goal was reached
    pub path: Vec<NodeId>,

    /// Total edge cost of the path
    pub cost: Option<C>,

    /// Number of states extracted from the frontier
    pub expanded: usize,

    /// Distinct goal-reaching paths recorded before the search ended
    pub goal_candidates: usize,
}

impl<C> SearchOutcome<C> {

    fn found(path: Vec<NodeId>, cost: C, expanded: usize, goal_candidates: usize) -> Self {
        Self { path, cost: Some(cost), expanded, goal_candidates }
    }

    fn no_path(expanded: usize) -> Self {
        Self { path: Vec::new(), cost: None, expanded, goal_candidates: 0 }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn into_path(self) -> Vec<NodeId> {
        self.path
    }
}


/// A* Algorithm over a cost matrix
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Each call builds its own frontier and visited set, so one AStar and one
/// CostMatrix can serve any number of searches, including from several threads.
#[derive(Clone, Debug, Default)]
pub struct AStar {
    config: SearchConfig,
    cancel: Option<CancelToken>,
}

impl AStar {

    pub fn new(config: SearchConfig) -> Self {
        Self { config, cancel: None }
    }

    /// Attach a token that aborts the search with SearchError::Cancelled
    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search from `start` until the frontier is exhausted (or a goal is
    /// extracted, under GoalPolicy::EarlyExit), then pick a goal path per
    /// the configured policy.
    ///
    /// Start outside the graph is an error, not an empty path.
    /// An unreachable goal set is not an error: the outcome has an empty path.
    pub fn plan<C>(&self, matrix: &CostMatrix<C>, start: NodeId, goals: &[NodeId]) -> Result<SearchOutcome<C>>
    where
        C: Cost,
        {

        let start_heuristic = matrix.heuristic(start)
            .ok_or(SearchError::InvalidStart { start, nodes: matrix.size() })?;

        if goals.is_empty() {
            return Err(SearchError::NoGoals);
        }
        let goals: FxHashSet<NodeId> = goals.iter().copied().collect();

        if goals.contains(&start) {
            debug!(start, "start node is a goal");
            return Ok(SearchOutcome::found(vec![start], C::zero(), 0, 1));
        }

        let seed = SearchState::seed(start, start_heuristic);
        match self.config.frontier {
            FrontierKind::Scan => self.build_graph(matrix, seed, &goals, ScanFrontier::new()),
            FrontierKind::Heap => self.build_graph(matrix, seed, &goals, HeapFrontier::new()),
        }
    }

    /// Run one search per (start, goals) query over a shared matrix
    /// Results come back in query order
    pub fn plan_each<C>(&self, matrix: &CostMatrix<C>, queries: &[(NodeId, Vec<NodeId>)]) -> Vec<Result<SearchOutcome<C>>>
    where
        C: Cost,
        {
        queries.iter()
            .map(|(start, goals)| self.plan(matrix, *start, goals))
            .collect()
    }


    /// Best-first expansion from the seed state
    /// Goal hits are recorded in discovery order, deduplicated by path
    fn build_graph<C, F>(&self, matrix: &CostMatrix<C>, seed: SearchState<C>, goals: &FxHashSet<NodeId>, mut frontier: F) -> Result<SearchOutcome<C>>
    where
        C: Cost,
        F: Frontier<C>,
        {

        // Nodes that have been extracted at least once, never expanded into again
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();

        // goal path -> cost, insertion ordered so index 0 is the first found
        let mut goal_paths: FxIndexMap<Vec<NodeId>, C> = FxIndexMap::default();

        let mut expanded = 0;
        frontier.insert(seed);

        while !frontier.is_empty() {

            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                warn!(expanded, "search cancelled");
                return Err(SearchError::Cancelled { expanded });
            }

            if let Some(max) = self.config.max_expansions {
                if expanded >= max {
                    warn!(max, frontier = frontier.len(), "expansion limit reached");
                    return Err(SearchError::ExpansionLimit(max));
                }
            }

            let state = frontier.extract_best()?;
            expanded += 1;

            let node = state.node();
            trace!(node, cost = ?state.cost(), frontier = frontier.len(), "extracted state");
            visited.insert(node);

            if goals.contains(&node) {
                debug!(node, cost = ?state.cost(), path = ?state.path(), "goal reached");

                if self.config.goal_policy == GoalPolicy::EarlyExit {
                    let cost = state.cost();
                    return Ok(SearchOutcome::found(state.into_path(), cost, expanded, 1));
                }
                goal_paths.entry(state.path().to_vec()).or_insert(state.cost());
            }

            // goal nodes are expanded too: a goal may lie on the way to a cheaper one
            for (child, edge_cost) in matrix.neighbors(node) {
                if visited.contains(&child) {
                    continue;
                }
                let Some(heuristic) = matrix.heuristic(child) else {
                    continue;
                };
                frontier.insert(state.extend(child, edge_cost, heuristic)?);
            }
        }

        Ok(self.select_goal(goal_paths, expanded))
    }

    /// Pick the returned path among recorded goal hits
    fn select_goal<C>(&self, goal_paths: FxIndexMap<Vec<NodeId>, C>, expanded: usize) -> SearchOutcome<C>
    where
        C: Cost,
        {

        let candidates = goal_paths.len();
        let selected = match self.config.goal_policy {
            GoalPolicy::FirstFound | GoalPolicy::EarlyExit => goal_paths.into_iter().next(),
            GoalPolicy::MinimumCost => {
                let mut best: Option<(Vec<NodeId>, C)> = None;
                for (path, cost) in goal_paths {
                    // strict comparison keeps the first recorded on ties
                    if best.as_ref().is_none_or(|(_, best_cost)| cost < *best_cost) {
                        best = Some((path, cost));
                    }
                }
                best
            }
        };

        match selected {
            Some((path, cost)) => {
                debug!(?path, ?cost, candidates, expanded, "search complete");
                SearchOutcome::found(path, cost, expanded, candidates)
            }
            None => {
                debug!(expanded, "frontier exhausted without reaching a goal");
                SearchOutcome::no_path(expanded)
            }
        }
    }
}


/// Search a zero-indexed weight matrix with the default configuration
/// Returns the path from start to the cheapest reachable goal, or an empty
/// Vec when no goal can be reached
pub fn search<C>(graph: Vec<Vec<C>>, heuristic: Vec<C>, start: NodeId, goals: &[NodeId]) -> Result<Vec<NodeId>>
where
    C: Cost,
    {
    let matrix = CostMatrix::new(graph, heuristic, false)?;
    let outcome = AStar::default().plan(&matrix, start, goals)?;
    Ok(outcome.into_path())
}
