use thiserror::Error;

use crate::graph_algos::NodeId;


/// Errors raised while building a cost matrix or running a search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("start node {start} is outside the valid node range of a {nodes}-node graph")]
    InvalidStart { start: NodeId, nodes: usize }, // Start cannot index the matrix

    #[error("goal set is empty")]
    NoGoals,

    #[error("cost matrix has no rows")]
    EmptyGraph,

    #[error("cost matrix is not square: row {row} has {found} columns, expected {expected}")]
    NotSquare { row: usize, expected: usize, found: usize },

    #[error("heuristic table has {found} entries, expected {expected}")]
    HeuristicMismatch { expected: usize, found: usize },

    // Only reachable if the search loop breaks its own is_empty guard
    #[error("extraction attempted on an empty frontier")]
    EmptyFrontier,

    #[error("search cancelled after {expanded} expansions")]
    Cancelled { expanded: usize },

    #[error("path cost overflowed while expanding into node {node}")]
    CostOverflow { node: NodeId },

    #[error("expansion limit of {0} reached")]
    ExpansionLimit(usize),

    #[error("invalid search problem: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(error: serde_json::Error) -> Self {
        SearchError::Config(error.to_string())
    }
}

impl From<std::io::Error> for SearchError {
    fn from(error: std::io::Error) -> Self {
        SearchError::Config(error.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SearchError>;
