use crate::GraphError;

use super::{DiGraph, EdgeIter};

/// Dense directed graph over `usize` vertex ids. Edges are kept in insertion
/// order, which is the order the algorithms see them in. Parallel edges and
/// self-loops are permitted. No weights are stored; weights always come from
/// a caller-supplied callable keyed by the endpoint pair.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    edges: Vec<(usize, usize)>,
    outgoing: Vec<Vec<usize>>,
}

impl AdjacencyList {
    pub fn new(node_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            outgoing: vec![Vec::new(); node_count],
        }
    }

    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut gra = Self::new(node_count);
        for (tail, head) in edges {
            gra.add_edge(tail, head)?;
        }
        Ok(gra)
    }

    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_node(&mut self) -> usize {
        let node_id = self.outgoing.len();
        self.outgoing.push(Vec::new());
        node_id
    }

    pub fn add_edge(&mut self, tail: usize, head: usize) -> Result<(), GraphError> {
        if tail >= self.node_count() || head >= self.node_count() {
            return Err(GraphError::InvalidInput(
                "edge endpoint outside node range".to_string(),
            ));
        }
        self.edges.push((tail, head));
        self.outgoing[tail].push(head);
        Ok(())
    }
}

impl DiGraph for AdjacencyList {
    type Node = usize;

    fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.node_count()
    }

    fn out_neighbors(&self, utx: usize) -> impl Iterator<Item = usize> + '_ {
        self.outgoing[utx].iter().copied()
    }
}

impl EdgeIter for AdjacencyList {
    fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }
}
