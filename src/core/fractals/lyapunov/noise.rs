use crate::core::data::uv::Uv;
use crate::core::util::shading::{fract, lerp};

const HASH_DIRECTION: Uv = Uv::new(12.9898, 4.1414);
const HASH_SCALE: f64 = 43758.5453;

/// Pseudo-random value in `[0, 1)` for a lattice point.
#[must_use]
pub fn lattice_hash(point: Uv) -> f64 {
    fract(point.dot(HASH_DIRECTION).sin() * HASH_SCALE)
}

/// Bilinear value noise over the integer lattice with smooth Hermite
/// weights. The interpolated value is squared, so the result lies in
/// `[0, 1)` and is biased towards zero.
#[must_use]
pub fn value_noise(point: Uv) -> f64 {
    let cell = point.floor();
    let local = point.fract();
    let weight_u = local.u * local.u * (3.0 - 2.0 * local.u);
    let weight_v = local.v * local.v * (3.0 - 2.0 * local.v);

    let bottom = lerp(
        lattice_hash(cell),
        lattice_hash(cell + Uv::new(1.0, 0.0)),
        weight_u,
    );
    let top = lerp(
        lattice_hash(cell + Uv::new(0.0, 1.0)),
        lattice_hash(cell + Uv::new(1.0, 1.0)),
        weight_u,
    );
    let value = lerp(bottom, top, weight_v);

    value * value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_in_unit_interval() {
        for x in -20..20 {
            for y in -20..20 {
                let h = lattice_hash(Uv::new(f64::from(x), f64::from(y)));
                assert!((0.0..1.0).contains(&h), "hash {} out of range", h);
            }
        }
    }

    #[test]
    fn noise_at_lattice_point_is_squared_hash() {
        let point = Uv::new(3.0, -2.0);
        let hash = lattice_hash(point);

        assert!((value_noise(point) - hash * hash).abs() < 1e-12);
    }

    #[test]
    fn noise_is_deterministic() {
        let point = Uv::new(14.37, 19.02);

        assert_eq!(value_noise(point).to_bits(), value_noise(point).to_bits());
    }

    #[test]
    fn noise_is_continuous_across_cell_edges() {
        let below = value_noise(Uv::new(4.0 - 1e-9, 7.5));
        let above = value_noise(Uv::new(4.0, 7.5));

        assert!((below - above).abs() < 1e-6);
    }

    #[test]
    fn noise_stays_in_unit_interval() {
        for i in 0..500 {
            let t = f64::from(i) * 0.137;
            let n = value_noise(Uv::new(t, t * 0.61 - 3.0));
            assert!((0.0..1.0).contains(&n), "noise {} out of range", n);
        }
    }
}
