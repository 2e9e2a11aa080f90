//! A* search over explicit cost matrices.
//!
//! A [`CostMatrix`] holds square edge weights (weight <= 0 means no edge) and a
//! heuristic table aligned by node index. [`AStar`] drives a best-first
//! [`Frontier`] over it and returns the goal path picked by its [`GoalPolicy`].
//!
//! ```
//! use matrix_astar::{AStar, CostMatrix};
//!
//! let matrix = CostMatrix::new(
//!     vec![vec![0, 1, 3, 0], vec![0, 0, 0, 5], vec![0, 0, 0, 1], vec![0, 0, 0, 0]],
//!     vec![0, 0, 0, 0],
//!     false,
//! ).unwrap();
//!
//! let outcome = AStar::default().plan(&matrix, 0, &[3]).unwrap();
//! assert_eq!(outcome.path, vec![0, 2, 3]);
//! assert_eq!(outcome.cost, Some(4));
//! ```

pub mod config;
pub mod errors;
pub mod graph_algos;
pub mod problem;

pub use config::{FrontierKind, GoalPolicy, SearchConfig};
pub use errors::{Result, SearchError};
pub use graph_algos::{
    AStar, CancelToken, Cost, CostMatrix, Frontier, HeapFrontier, NodeId, ScanFrontier,
    SearchOutcome, SearchState, search,
};
pub use problem::SearchProblem;
