pub const EPSILON: f64 = 1e-9;

pub fn dot(lhs: &[f64], rhs: &[f64]) -> f64 {
    assert_eq!(lhs.len(), rhs.len());
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

pub fn scaled_add(target: &mut [f64], scale: f64, values: &[f64]) {
    assert_eq!(target.len(), values.len());
    for (t, v) in target.iter_mut().zip(values.iter()) {
        *t += scale * v;
    }
}
