
pub mod a_star;
pub mod cost;
pub mod cost_matrix;
pub mod frontier;

pub use a_star::{AStar, CancelToken, SearchOutcome, search};
pub use cost::Cost;
pub use cost_matrix::CostMatrix;
pub use frontier::{Frontier, HeapFrontier, ScanFrontier, SearchState};

use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub(crate) use rustc_hash::{FxHashMap, FxHashSet};

/// Node identifier - row/column index into the cost matrix
pub type NodeId = usize;

/// Goal paths keyed by node sequence, iterated in discovery order
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
