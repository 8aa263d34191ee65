use std::ops::{Div, Mul, Sub};

use num_traits::Zero;

use crate::graph::{DiGraph, DistanceMap};
use crate::parametric::max_parametric;

/// Minimum cost-to-time cycle ratio.
///
/// Thin wrapper over [`max_parametric`] with `distance(r, edge) =
/// cost(edge) - r * time(edge)` and `zero_cancel(cycle) = sum(cost) /
/// sum(time)`. Costs and times are supplied already lifted into the ratio
/// type `R`, so integer inputs stay exact under a rational `R`. Times must
/// be strictly positive and `r0` must start at or above the optimum ratio;
/// the returned cycle attains the final `r0`.
pub fn min_cycle_ratio<G, D, R, FC, FT>(
    gra: &G,
    r0: &mut R,
    get_cost: FC,
    get_time: FT,
    dist: &mut D,
    max_iters: usize,
) -> Vec<(G::Node, G::Node)>
where
    G: DiGraph,
    D: DistanceMap<G::Node, R>,
    R: Copy + PartialOrd + Zero + Sub<Output = R> + Mul<Output = R> + Div<Output = R>,
    FC: Fn((G::Node, G::Node)) -> R,
    FT: Fn((G::Node, G::Node)) -> R,
{
    let calc_ratio = |cycle: &[(G::Node, G::Node)]| {
        let mut total_cost = R::zero();
        let mut total_time = R::zero();
        for &edge in cycle {
            total_cost = total_cost + get_cost(edge);
            total_time = total_time + get_time(edge);
        }
        total_cost / total_time
    };
    let calc_weight =
        |r: R, edge: (G::Node, G::Node)| get_cost(edge) - r * get_time(edge);

    max_parametric(gra, r0, calc_weight, calc_ratio, dist, max_iters)
}
