//! Scalar helpers with shader semantics.

#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamped cubic Hermite step from `edge0` to `edge1`.
///
/// Equal edges degrade to a hard step at `edge0` instead of dividing by zero.
#[must_use]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }

    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fractional part, always in `[0, 1)` for finite input.
#[must_use]
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}
