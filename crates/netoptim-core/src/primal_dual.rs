use std::mem::swap;
use std::ops::Sub;

use num_traits::Zero;

use crate::graph::{DiGraph, DistanceMap, EdgeIter};

/// Primal-dual approximation for minimum weighted vertex cover.
///
/// Walks the edges once, covering each uncovered edge at its endpoint with
/// the smaller remaining gap (dual slack) and charging that gap to the other
/// endpoint. Vertices already marked in `cover` are honored. Returns the
/// total primal cost, which is at most twice the optimum.
pub fn min_vertex_cover_pd<G, C, M, T>(gra: &G, cover: &mut C, weight: &M) -> T
where
    G: EdgeIter,
    C: DistanceMap<G::Node, bool>,
    M: DistanceMap<G::Node, T> + Clone,
    T: Copy + PartialOrd + Zero + Sub<Output = T>,
{
    let mut total_dual_cost = T::zero();
    let mut total_primal_cost = T::zero();
    let mut gap = weight.clone();
    for (mut utx, mut vtx) in gra.edges() {
        if cover.get(utx) || cover.get(vtx) {
            continue;
        }
        if gap.get(utx) < gap.get(vtx) {
            swap(&mut utx, &mut vtx);
        }
        cover.set(vtx, true);
        total_dual_cost = total_dual_cost + gap.get(vtx);
        total_primal_cost = total_primal_cost + weight.get(vtx);
        let slack = gap.get(utx) - gap.get(vtx);
        gap.set(utx, slack);
        gap.set(vtx, T::zero());
    }

    debug_assert!(!(total_primal_cost < total_dual_cost));
    debug_assert!(!(total_dual_cost + total_dual_cost < total_primal_cost));
    total_primal_cost
}

fn cover_neighborhood<G, C>(gra: &G, dep: &mut C, utx: G::Node)
where
    G: DiGraph,
    C: DistanceMap<G::Node, bool>,
{
    dep.set(utx, true);
    for vtx in gra.out_neighbors(utx) {
        dep.set(vtx, true);
    }
}

/// Primal-dual approximation for minimum maximal independent set.
///
/// Scans the vertices in graph order; for each vertex that is neither
/// selected nor dependent yet, the cheapest non-dependent vertex of its
/// closed neighborhood (by remaining gap) joins the independent set and its
/// neighborhood becomes dependent. Vertices pre-marked in `indset` are kept
/// independent at no primal charge. Neighborhoods must be symmetric for the
/// result to be a true independent set. Returns the total primal cost.
pub fn min_maximal_independent_set_pd<G, C, M, T>(
    gra: &G,
    indset: &mut C,
    dep: &mut C,
    weight: &M,
) -> T
where
    G: DiGraph,
    C: DistanceMap<G::Node, bool>,
    M: DistanceMap<G::Node, T> + Clone,
    T: Copy + PartialOrd + Zero + Sub<Output = T>,
{
    let mut total_dual_cost = T::zero();
    let mut total_primal_cost = T::zero();
    let mut gap = weight.clone();
    for utx in gra.vertices() {
        if dep.get(utx) {
            continue;
        }
        if indset.get(utx) {
            cover_neighborhood(gra, dep, utx);
            continue;
        }
        let mut min_val = gap.get(utx);
        let mut min_vtx = utx;
        for vtx in gra.out_neighbors(utx) {
            if dep.get(vtx) {
                continue;
            }
            if min_val > gap.get(vtx) {
                min_val = gap.get(vtx);
                min_vtx = vtx;
            }
        }
        cover_neighborhood(gra, dep, min_vtx);
        indset.set(min_vtx, true);
        total_primal_cost = total_primal_cost + weight.get(min_vtx);
        total_dual_cost = total_dual_cost + min_val;
        if min_vtx == utx {
            continue;
        }
        for vtx in gra.out_neighbors(utx) {
            let reduced = gap.get(vtx) - min_val;
            gap.set(vtx, reduced);
        }
    }
    total_primal_cost
}
