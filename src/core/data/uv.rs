use std::ops::{Add, Mul, Sub};

/// A 2D coordinate in texture space. Also used for the transformed
/// parameter-space coordinate, where `u` and `v` become the two driving
/// parameters of the logistic map.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Uv {
    pub u: f64,
    pub v: f64,
}

impl Uv {
    pub const CENTER: Self = Self { u: 0.5, v: 0.5 };

    #[must_use]
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    #[must_use]
    pub fn splat(value: f64) -> Self {
        Self { u: value, v: value }
    }

    /// Rotates about the origin using the matrix `[[c, s], [-s, c]]`.
    #[must_use]
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self {
            u: cos * self.u + sin * self.v,
            v: -sin * self.u + cos * self.v,
        }
    }

    #[must_use]
    pub fn floor(self) -> Self {
        Self {
            u: self.u.floor(),
            v: self.v.floor(),
        }
    }

    #[must_use]
    pub fn fract(self) -> Self {
        self - self.floor()
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.u * other.u + self.v * other.v
    }
}

impl Add for Uv {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            u: self.u + other.u,
            v: self.v + other.v,
        }
    }
}

impl Sub for Uv {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            u: self.u - other.u,
            v: self.v - other.v,
        }
    }
}

impl Mul<f64> for Uv {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self {
            u: self.u * scale,
            v: self.v * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-12;

    fn assert_uv_approx_eq(actual: Uv, expected: Uv) {
        assert!(
            (actual.u - expected.u).abs() <= EPSILON && (actual.v - expected.v).abs() <= EPSILON,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    #[test]
    fn rotate_by_zero_is_identity() {
        let uv = Uv::new(0.3, -0.7);

        assert_eq!(uv.rotate(0.0), uv);
    }

    #[test]
    fn rotate_quarter_turn_is_clockwise() {
        let rotated = Uv::new(1.0, 0.0).rotate(FRAC_PI_2);

        assert_uv_approx_eq(rotated, Uv::new(0.0, -1.0));
    }

    #[test]
    fn fract_of_negative_coordinate_stays_positive() {
        let uv = Uv::new(-1.25, 2.75);

        assert_uv_approx_eq(uv.floor(), Uv::new(-2.0, 2.0));
        assert_uv_approx_eq(uv.fract(), Uv::new(0.75, 0.75));
    }

    #[test]
    fn arithmetic_operators() {
        let a = Uv::new(1.0, 2.0);
        let b = Uv::splat(0.5);

        assert_eq!(a + b, Uv::new(1.5, 2.5));
        assert_eq!(a - b, Uv::new(0.5, 1.5));
        assert_eq!(a * 2.0, Uv::new(2.0, 4.0));
        assert_eq!(a.dot(b), 1.5);
    }
}
