use crate::graph::{DiGraph, DistanceMap};
use crate::neg_cycle::NegCycleFinder;
use crate::numerics::scaled_add;

use super::ConstraintFn;

/// Separation oracle for the feasibility system
///
/// ```text
///     find    x, u
///     s.t.    u[vtx] - u[utx] <= h(edge, x)   for all edges (utx, vtx)
/// ```
///
/// Feasibility of `x` is equivalent to the `h`-weighted graph having no
/// negative cycle, in which case the potential `u` is the witness. The
/// potential is borrowed for the oracle's lifetime and refined across
/// `assess_feas` calls, which keeps successive cutting-plane rounds cheap.
pub struct NetworkOracle<'a, G: DiGraph, D, H> {
    potential: &'a mut D,
    finder: NegCycleFinder<'a, G>,
    h: H,
}

impl<'a, G, D, H> NetworkOracle<'a, G, D, H>
where
    G: DiGraph,
    D: DistanceMap<G::Node, f64>,
    H: ConstraintFn<G::Node>,
{
    pub fn new(gra: &'a G, potential: &'a mut D, h: H) -> Self {
        Self {
            potential,
            finder: NegCycleFinder::new(gra),
            h,
        }
    }

    /// Forward a new best-so-far objective value to the constraint function.
    pub fn update(&mut self, gamma: f64) {
        self.h.update(gamma);
    }

    /// Test feasibility of `x`. A negative cycle under the `h`-weights is a
    /// violation witness; the cut is the negated sum of `h` values (function
    /// value) and `h` gradients along that cycle. `None` means feasible.
    pub fn assess_feas(&mut self, x: &[f64]) -> Option<(Vec<f64>, f64)> {
        let Self {
            potential,
            finder,
            h,
        } = self;
        let cycle = finder.find_neg_cycle(&mut **potential, |edge| h.eval(edge, x));
        if cycle.is_empty() {
            return None;
        }

        let mut grad = vec![0.0; x.len()];
        let mut fval = 0.0;
        for &edge in &cycle {
            fval -= h.eval(edge, x);
            scaled_add(&mut grad, -1.0, &h.grad(edge, x));
        }
        Some((grad, fval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyList;

    struct EdgeSlack;

    impl ConstraintFn<usize> for EdgeSlack {
        fn eval(&self, edge: (usize, usize), x: &[f64]) -> f64 {
            let (utx, vtx) = edge;
            x[0] - if utx < vtx { 1.0 } else { 4.0 }
        }

        fn grad(&self, _edge: (usize, usize), _x: &[f64]) -> Vec<f64> {
            vec![1.0]
        }
    }

    #[test]
    fn feasible_point_produces_no_cut() {
        let gra = AdjacencyList::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let mut potential = vec![0.0_f64; 3];
        let mut oracle = NetworkOracle::new(&gra, &mut potential, EdgeSlack);
        // Weights 2-1=1 on forward edges, 2-4=-2 on the back edge: the cycle
        // sums to zero, so no negative cycle exists.
        assert!(oracle.assess_feas(&[2.0]).is_none());
    }

    struct BudgetSlack {
        gamma: f64,
    }

    impl ConstraintFn<usize> for BudgetSlack {
        fn eval(&self, _edge: (usize, usize), x: &[f64]) -> f64 {
            x[0] - self.gamma
        }

        fn grad(&self, _edge: (usize, usize), _x: &[f64]) -> Vec<f64> {
            vec![1.0]
        }

        fn update(&mut self, gamma: f64) {
            self.gamma = gamma;
        }
    }

    #[test]
    fn objective_updates_flow_through_to_the_constraint() {
        let gra = AdjacencyList::from_edges(2, [(0, 1), (1, 0)]).unwrap();
        let mut potential = vec![0.0_f64; 2];
        let mut oracle = NetworkOracle::new(&gra, &mut potential, BudgetSlack { gamma: 0.0 });

        // Slack 1 on every edge: feasible.
        assert!(oracle.assess_feas(&[1.0]).is_none());

        // Tightening the budget past x flips every edge negative.
        oracle.update(3.0);
        let (grad, fval) = oracle.assess_feas(&[1.0]).expect("infeasible after update");
        assert_eq!(grad, vec![-2.0]);
        assert!((fval - 4.0).abs() < 1e-12);
    }

    #[test]
    fn violated_point_produces_negated_cycle_sums() {
        let gra = AdjacencyList::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let mut potential = vec![0.0_f64; 3];
        let mut oracle = NetworkOracle::new(&gra, &mut potential, EdgeSlack);
        let (grad, fval) = oracle.assess_feas(&[1.5]).expect("infeasible");
        // The only cycle has h-sum 2 * 0.5 - 2.5 = -1.5 and gradient sum 3.
        assert_eq!(grad, vec![-3.0]);
        assert!((fval - 1.5).abs() < 1e-12);
    }
}
