//! Search problems as plain data, loadable from JSON.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SearchConfig;
use crate::errors::Result;
use crate::graph_algos::{AStar, Cost, CostMatrix, NodeId, SearchOutcome};


/// A cost matrix, heuristic table and query bundled together
///
/// ```json
/// { "cost": [[0, 2], [0, 0]], "heuristic": [1, 0], "start": 0, "goals": [1],
///   "one_indexed": false, "config": { "goal_policy": "first_found" } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchProblem<C = f64> {
    pub cost: Vec<Vec<C>>,
    pub heuristic: Vec<C>,
    pub start: NodeId,
    pub goals: Vec<NodeId>,

    /// Row/column 0 of `cost` is reserved, nodes are numbered from 1
    #[serde(default)]
    pub one_indexed: bool,

    #[serde(default)]
    pub config: SearchConfig,
}

impl<C> SearchProblem<C>
where
    C: Cost + for<'de> Deserialize<'de>,
    {

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading search problem");
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validated matrix for this problem
    pub fn matrix(&self) -> Result<CostMatrix<C>> {
        CostMatrix::new(self.cost.clone(), self.heuristic.clone(), self.one_indexed)
    }

    /// Run the query with the embedded configuration
    pub fn solve(&self) -> Result<SearchOutcome<C>> {
        self.solve_with(&AStar::new(self.config.clone()))
    }

    /// Run the query with a caller-supplied planner, ignoring the embedded configuration
    pub fn solve_with(&self, a_star: &AStar) -> Result<SearchOutcome<C>> {
        let matrix = self.matrix()?;
        a_star.plan(&matrix, self.start, &self.goals)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FrontierKind, GoalPolicy};
    use crate::errors::SearchError;

    const LEGACY_SAMPLE: &str = include_str!("../demos/legacy_sample.json");

    #[test]
    fn test_legacy_sample_file() {
        let problem: SearchProblem<i64> = SearchProblem::from_json_str(LEGACY_SAMPLE).unwrap();
        assert!(problem.one_indexed);
        assert_eq!(problem.config.goal_policy, GoalPolicy::FirstFound);

        let outcome = problem.solve().unwrap();
        assert_eq!(outcome.path, vec![1, 5, 4, 7]);
        assert_eq!(outcome.cost, Some(13));
    }

    #[test]
    fn test_float_problem_without_config() {
        let problem: SearchProblem = SearchProblem::from_json_str(r#"{
            "cost": [[0, 1.5, 4], [0, 0, 1], [0, 0, 0]],
            "heuristic": [1, 0.5, 0],
            "start": 0,
            "goals": [2]
        }"#).unwrap();

        assert!(!problem.one_indexed);
        assert_eq!(problem.config, SearchConfig::default());

        let outcome = problem.solve().unwrap();
        assert_eq!(outcome.path, vec![0, 1, 2]);
        assert_eq!(outcome.cost, Some(2.5));
    }

    #[test]
    fn test_solve_with_overrides_config() {
        let problem: SearchProblem<i64> = SearchProblem::from_json_str(LEGACY_SAMPLE).unwrap();
        let a_star = AStar::new(SearchConfig::default().frontier(FrontierKind::Heap).max_expansions(2));

        assert!(matches!(problem.solve_with(&a_star), Err(SearchError::ExpansionLimit(2))));
    }

    #[test]
    fn test_malformed_problem() {
        let result = SearchProblem::<f64>::from_json_str(r#"{ "cost": [[0]], "start": 0 }"#);
        assert!(matches!(result, Err(SearchError::Config(_))));
    }

    #[test]
    fn test_ragged_matrix_in_problem() {
        let problem: SearchProblem<i64> = SearchProblem::from_json_str(
            r#"{ "cost": [[0, 1], [0]], "heuristic": [0, 0], "start": 0, "goals": [1] }"#
        ).unwrap();

        assert!(matches!(problem.solve(), Err(SearchError::NotSquare { row: 1, .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = SearchProblem::<f64>::from_json_file("does/not/exist.json");
        assert!(matches!(result, Err(SearchError::Config(_))));
    }
}
