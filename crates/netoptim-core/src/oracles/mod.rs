mod network;
mod optscaling;

pub use network::NetworkOracle;
pub use optscaling::{OptScalingOracle, ScalingRatio};

/// Edge-constraint function for the network oracle. For the feasibility
/// system `u[vtx] - u[utx] <= h(edge, x)`, `eval` gives the right-hand side
/// under the decision vector `x` and `grad` its gradient with respect to
/// `x`.
pub trait ConstraintFn<N> {
    fn eval(&self, edge: (N, N), x: &[f64]) -> f64;

    fn grad(&self, edge: (N, N), x: &[f64]) -> Vec<f64>;

    /// Receive a new best-so-far objective value, letting the constraint
    /// fold objective cuts into parametric optimization. Constraints with no
    /// objective dependence ignore it.
    fn update(&mut self, _gamma: f64) {}
}
