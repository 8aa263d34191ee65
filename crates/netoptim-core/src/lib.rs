use std::fmt;

pub mod graph;
pub mod min_cycle_ratio;
pub mod neg_cycle;
pub mod numerics;
pub mod oracles;
pub mod parametric;
pub mod primal_dual;

pub use graph::{AdjacencyList, DiGraph, DistanceMap, EdgeIter};
pub use min_cycle_ratio::min_cycle_ratio;
pub use neg_cycle::NegCycleFinder;
pub use oracles::{ConstraintFn, NetworkOracle, OptScalingOracle, ScalingRatio};
pub use parametric::{max_parametric, DEFAULT_MAX_ITERS};
pub use primal_dual::{min_maximal_independent_set_pd, min_vertex_cover_pd};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    InvalidInput(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidInput(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for GraphError {}
