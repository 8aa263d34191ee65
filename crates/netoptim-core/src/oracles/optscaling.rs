use crate::graph::{DiGraph, DistanceMap};

use super::{ConstraintFn, NetworkOracle};

/// Constraint function for the Orlin-Rothblum optimal matrix-scaling
/// problem. `x = (pi, phi)` in log scale; a forward edge (`utx < vtx`)
/// carries the upper-bound slack `pi - cost`, a reverse edge the lower-bound
/// slack `cost - phi`. The graph is directed and each edge is emitted once,
/// so both endpoints of an edge produce the correct sign.
pub struct ScalingRatio<F> {
    get_cost: F,
}

impl<F> ScalingRatio<F> {
    pub fn new(get_cost: F) -> Self {
        Self { get_cost }
    }
}

impl<N, F> ConstraintFn<N> for ScalingRatio<F>
where
    N: Copy + Ord,
    F: Fn((N, N)) -> f64,
{
    fn eval(&self, edge: (N, N), x: &[f64]) -> f64 {
        let (utx, vtx) = edge;
        debug_assert!(utx != vtx);
        let cost = (self.get_cost)(edge);
        if utx < vtx {
            x[0] - cost
        } else {
            cost - x[1]
        }
    }

    fn grad(&self, edge: (N, N), _x: &[f64]) -> Vec<f64> {
        let (utx, vtx) = edge;
        if utx < vtx {
            vec![1.0, 0.0]
        } else {
            vec![0.0, -1.0]
        }
    }
}

/// Separation oracle for optimal matrix scaling:
///
/// ```text
///     min     pi - phi
///     s.t.    phi <= cost(edge) + u[vtx] - u[utx] <= pi
///             for every nonzero entry (edge), in log scale
/// ```
///
/// Wraps [`NetworkOracle`] over [`ScalingRatio`] for the feasibility side
/// and adds the objective cut on `(pi, phi)`.
pub struct OptScalingOracle<'a, G: DiGraph, D, F> {
    network: NetworkOracle<'a, G, D, ScalingRatio<F>>,
}

impl<'a, G, D, F> OptScalingOracle<'a, G, D, F>
where
    G: DiGraph,
    G::Node: Ord,
    D: DistanceMap<G::Node, f64>,
    F: Fn((G::Node, G::Node)) -> f64,
{
    pub fn new(gra: &'a G, potential: &'a mut D, get_cost: F) -> Self {
        Self {
            network: NetworkOracle::new(gra, potential, ScalingRatio::new(get_cost)),
        }
    }

    /// Assess `x = (pi, phi)` against the best objective value `t` so far.
    /// An infeasible `x` yields the network feasibility cut. A feasible `x`
    /// that improves on `t` updates it and yields the deep cut
    /// `((1, -1), 0)`; otherwise the shallow cut `((1, -1), s - t)`. The
    /// flag reports whether `t` improved.
    pub fn assess_optim(&mut self, x: &[f64], t: &mut f64) -> ((Vec<f64>, f64), bool) {
        if let Some(cut) = self.network.assess_feas(x) {
            return (cut, false);
        }
        let s = x[0] - x[1];
        let fj = s - *t;
        if fj < 0.0 {
            *t = s;
            return ((vec![1.0, -1.0], 0.0), true);
        }
        ((vec![1.0, -1.0], fj), false)
    }
}
