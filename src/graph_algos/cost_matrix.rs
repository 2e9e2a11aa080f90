use crate::errors::{Result, SearchError};
use super::{Cost, NodeId};

use std::ops::Range;


/// Square matrix of edge weights plus a heuristic table aligned by node index
/// weights[from][to] <= 0 means there is no edge from `from` to `to`
/// With one_indexed set, row/column 0 is reserved and never treated as a node
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix<C> {
    weights: Vec<Vec<C>>,
    heuristic: Vec<C>,
    one_indexed: bool,
}

impl<C: Cost> CostMatrix<C> {

    /// Validate and wrap a weight matrix and heuristic table
    pub fn new(weights: Vec<Vec<C>>, heuristic: Vec<C>, one_indexed: bool) -> Result<Self> {
        let size = weights.len();
        if size == 0 {
            return Err(SearchError::EmptyGraph);
        }

        if let Some((row, cols)) = weights.iter().enumerate().find(|(_, cols)| cols.len() != size) {
            return Err(SearchError::NotSquare { row, expected: size, found: cols.len() });
        }

        if heuristic.len() != size {
            return Err(SearchError::HeuristicMismatch { expected: size, found: heuristic.len() });
        }

        Ok(Self { weights, heuristic, one_indexed })
    }

    /// Number of rows, reserved row included
    pub fn size(&self) -> usize {
        self.weights.len()
    }

    pub fn one_indexed(&self) -> bool {
        self.one_indexed
    }

    /// Identifiers that name real nodes, in ascending order
    pub fn nodes(&self) -> Range<NodeId> {
        let first = if self.one_indexed { 1 } else { 0 };
        first..self.size()
    }

    /// Check a node identifier can index this matrix
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes().contains(&node)
    }

    /// Heuristic estimate for a node, None when the node is outside the graph
    pub fn heuristic(&self, node: NodeId) -> Option<C> {
        if !self.contains(node) {
            return None;
        }
        self.heuristic.get(node).copied()
    }

    /// Weight of the edge from -> to, None when there is no edge
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<C> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        let weight = *self.weights.get(from)?.get(to)?;

        // NaN weights fail this comparison too
        if weight > C::zero() { Some(weight) } else { None }
    }

    /// Nodes reachable over a single positive-weight edge, in ascending order
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, C)> + '_ {
        self.nodes()
            .filter_map(move |to| self.edge_cost(node, to).map(|weight| (to, weight)))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn zero_indexed() -> CostMatrix<i32> {
        CostMatrix::new(
            vec![
                vec![0, 4, -1],
                vec![2, 0, 0],
                vec![0, 3, 0],
            ],
            vec![1, 2, 3],
            false,
        ).unwrap()
    }

    #[test]
    fn test_rejects_empty_graph() {
        let result = CostMatrix::<i32>::new(vec![], vec![], false);
        assert!(matches!(result, Err(SearchError::EmptyGraph)));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let result = CostMatrix::new(vec![vec![0, 1], vec![1]], vec![0, 0], false);
        assert!(matches!(result, Err(SearchError::NotSquare { row: 1, expected: 2, found: 1 })));
    }

    #[test]
    fn test_rejects_misaligned_heuristic() {
        let result = CostMatrix::new(vec![vec![0, 1], vec![1, 0]], vec![0], false);
        assert!(matches!(result, Err(SearchError::HeuristicMismatch { expected: 2, found: 1 })));
    }

    #[test]
    fn test_non_positive_weights_are_not_edges() {
        let matrix = zero_indexed();

        assert!(!matrix.one_indexed());
        assert_eq!(matrix.edge_cost(0, 1), Some(4));
        assert_eq!(matrix.edge_cost(0, 2), None); // negative
        assert_eq!(matrix.edge_cost(1, 2), None); // zero
        assert_eq!(matrix.edge_cost(0, 7), None); // out of range

        let neighbors: Vec<_> = matrix.neighbors(0).collect();
        assert_eq!(neighbors, vec![(1, 4)]);
    }

    #[test]
    fn test_one_indexed_reserves_row_zero() {
        // Column 0 carries a positive weight that must still be ignored
        let matrix = CostMatrix::new(
            vec![
                vec![0, 0, 0],
                vec![9, 0, 2],
                vec![0, 1, 0],
            ],
            vec![0, 5, 6],
            true,
        ).unwrap();

        assert!(matrix.one_indexed());
        assert_eq!(matrix.nodes(), 1..3);
        assert!(!matrix.contains(0));
        assert_eq!(matrix.heuristic(0), None);
        assert_eq!(matrix.heuristic(2), Some(6));
        assert_eq!(matrix.neighbors(1).collect::<Vec<_>>(), vec![(2, 2)]);
    }

    #[test]
    fn test_float_weights() {
        let matrix = CostMatrix::new(
            vec![vec![0.0, 1.5], vec![f64::NAN, 0.0]],
            vec![0.0, 0.0],
            false,
        ).unwrap();

        assert_eq!(matrix.edge_cost(0, 1), Some(1.5));
        assert_eq!(matrix.edge_cost(1, 0), None);
    }
}
