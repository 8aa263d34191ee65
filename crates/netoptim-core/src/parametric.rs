use std::ops::{Add, Sub};

use crate::graph::{DiGraph, DistanceMap};
use crate::neg_cycle::NegCycleFinder;

pub const DEFAULT_MAX_ITERS: usize = 1000;

/// Solve the maximum parametric problem
///
/// ```text
///     max  r
///     s.t. dist[vtx] - dist[utx] >= distance(r, (utx, vtx))
///          for all edges (utx, vtx)
/// ```
///
/// `distance` must be monotone decreasing in `r`, so that lowering `r` makes
/// more cycles negative. `zero_cancel` maps a cycle to the parameter value
/// at which its total weight is zero. Starting from an infeasible upper
/// bound in `r_opt`, each round finds a negative cycle under the current
/// parameter, re-solves the parameter on that cycle, and repairs the
/// distance map along it; the loop stops when no cycle exists, when a cycle
/// no longer improves `r` (numerical noise guard), or at `max_iters`.
///
/// Returns the critical cycle that fixed the final `r_opt`; empty when the
/// initial parameter was already feasible. If `max_iters` is exhausted the
/// last recorded cycle comes back and `r_opt` holds the best value reached
/// so far, which callers must treat as approximate.
pub fn max_parametric<G, D, R, W, F1, F2>(
    gra: &G,
    r_opt: &mut R,
    distance: F1,
    zero_cancel: F2,
    dist: &mut D,
    max_iters: usize,
) -> Vec<(G::Node, G::Node)>
where
    G: DiGraph,
    D: DistanceMap<G::Node, W>,
    R: Copy + PartialOrd,
    W: Clone + PartialOrd + Add<Output = W> + Sub<Output = W>,
    F1: Fn(R, (G::Node, G::Node)) -> W,
    F2: Fn(&[(G::Node, G::Node)]) -> R,
{
    let mut ncf = NegCycleFinder::new(gra);
    let mut c_opt = Vec::new();

    for _ in 0..max_iters {
        let r = *r_opt;
        let c_min = ncf.find_neg_cycle(dist, |edge| distance(r, edge));
        if c_min.is_empty() {
            break;
        }

        let r_min = zero_cancel(&c_min);
        if r_min >= *r_opt {
            break;
        }

        c_opt = c_min;
        *r_opt = r_min;

        // The critical cycle has weight zero at the updated parameter; make
        // the potential tight along it so the next relaxation phase only
        // propagates adjustments outward.
        for &(utx, vtx) in &c_opt {
            dist.set(utx, dist.get(vtx) - distance(r_min, (utx, vtx)));
        }
    }

    c_opt
}
