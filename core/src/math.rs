//! Small numeric helpers shared across the model.

/// Linear interpolation from `a` to `b` by `t`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
