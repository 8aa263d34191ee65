#![allow(dead_code)]

use std::collections::HashMap;

use netoptim_core::{AdjacencyList, EdgeIter};

/// Five-vertex ring A->B->C->D->E->A. Weight tables index edges in this
/// insertion order.
pub fn create_five_cycle() -> AdjacencyList {
    AdjacencyList::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap()
}

/// Three-vertex timing graph with the six distinct edges
/// {A->B, B->A, B->C, C->B, C->A, A->C}.
pub fn create_timing_graph() -> AdjacencyList {
    AdjacencyList::from_edges(3, [(0, 1), (1, 0), (1, 2), (2, 1), (2, 0), (0, 2)]).unwrap()
}

/// Ring of `n` vertices 0 -> 1 -> ... -> n-1 -> 0.
pub fn create_ring(n: usize) -> AdjacencyList {
    AdjacencyList::from_edges(n, (0..n).map(|utx| (utx, (utx + 1) % n))).unwrap()
}

/// Pair each edge (in insertion order) with the matching entry of `weights`.
pub fn edge_weight_table<W: Copy>(
    gra: &AdjacencyList,
    weights: &[W],
) -> HashMap<(usize, usize), W> {
    assert_eq!(gra.edges().count(), weights.len());
    gra.edges().zip(weights.iter().copied()).collect()
}
