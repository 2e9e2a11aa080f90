use clap::ValueEnum;
use serde::{Deserialize, Serialize};


/// Which recorded goal path a search returns
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GoalPolicy {
    /// Exhaust the frontier, return the cheapest goal path (first recorded on ties)
    #[default]
    MinimumCost,
    /// Exhaust the frontier, return the first goal path recorded
    FirstFound,
    /// Stop at the first goal extracted from the frontier
    /// Optimal when the heuristic is admissible and weights are non-negative
    EarlyExit,
}

/// Frontier implementation backing a search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    #[default]
    Scan,
    Heap,
}

/// Search parameters
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub goal_policy: GoalPolicy,
    pub frontier: FrontierKind,

    /// Give up after this many frontier extractions (None = unbounded)
    pub max_expansions: Option<usize>,
}

impl SearchConfig {

    #[must_use]
    pub fn goal_policy(mut self, policy: GoalPolicy) -> Self {
        self.goal_policy = policy;
        self
    }

    #[must_use]
    pub fn frontier(mut self, kind: FrontierKind) -> Self {
        self.frontier = kind;
        self
    }

    #[must_use]
    pub fn max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}
