//! The per-pixel Lyapunov evaluator.
//!
//! Every function here is pure: the output depends only on the arguments,
//! so pixels can be evaluated in any order and on any thread.

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Rgb;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::uv::Uv;
use crate::core::fractals::lyapunov::noise::value_noise;
use crate::core::fractals::lyapunov::params::KernelParams;
use crate::core::fractals::lyapunov::pattern::EncodedPattern;
use crate::core::frame::smoother::SmoothedState;
use crate::core::util::pixel_to_uv::{PixelToUvError, pixel_to_uv};
use crate::core::util::shading::{lerp, smoothstep};

/// Floor for the derivative magnitude inside the logarithm.
pub const DERIVATIVE_EPSILON: f64 = 1e-12;

const NOISE_AMPLITUDE: f64 = 2.0;
const NOISE_FREQUENCY: f64 = 5.0;
const NOISE_SPEED: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fragment {
    Colour(Rgb),
    /// Masked out; the pixel is left transparent.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSample {
    /// Raw exponent plus noise, before normalisation.
    pub exponent: f64,
    /// Position inside the `[lyp_min, lyp_max]` window, in `[0, 1]`.
    pub normalized: f64,
    pub fragment: Fragment,
}

/// Zoom about the centre, pan, then rotate about the centre.
#[must_use]
pub fn transform_viewport(uv: Uv, view: &SmoothedState) -> Uv {
    let scaled = (uv - Uv::CENTER) * view.zoom + Uv::CENTER;
    let displaced = scaled + Uv::new(view.displace_x, view.displace_y);

    (displaced - Uv::CENTER).rotate(view.rotation) + Uv::CENTER
}

/// Finite-sample Lyapunov exponent of the logistic map driven by `pattern`,
/// alternating between `r = coord.u` (base) and `r = coord.v` (excited).
///
/// An orbit that overflows and then turns NaN yields a NaN exponent; the
/// epsilon floor only applies to finite derivatives.
#[must_use]
pub fn lyapunov_exponent(coord: Uv, pattern: &EncodedPattern, iter_max: u32) -> f64 {
    let iterations = iter_max.max(1);
    let mut x = 0.5;
    let mut sum = 0.0;

    for step in 0..iterations as usize {
        let r = lerp(coord.u, coord.v, pattern.weight(step));
        x = r * x * (1.0 - x);

        let derivative = (r - 2.0 * r * x).abs();
        if derivative.is_nan() {
            return f64::NAN;
        }
        sum += derivative.max(DERIVATIVE_EPSILON).ln();
    }

    sum / f64::from(iterations)
}

/// Animated perturbation added to the raw exponent.
#[must_use]
pub fn noise_perturbation(coord: Uv, time: f64) -> f64 {
    NOISE_AMPLITUDE * value_noise(coord * NOISE_FREQUENCY + Uv::splat(NOISE_SPEED * time))
}

/// Maps an exponent into `[0, 1]` across the normalisation window. A NaN
/// exponent, from a diverged orbit, maps to 0.
#[must_use]
pub fn normalize_exponent(exponent: f64, lyp_min: f64, lyp_max: f64) -> f64 {
    if exponent.is_nan() {
        return 0.0;
    }

    smoothstep(lyp_min, lyp_max, exponent)
}

/// True when `colour` is strictly closer than the threshold to white or to
/// black. A zero threshold never masks.
#[must_use]
pub fn is_masked(colour: Rgb, white_threshold: f64, black_threshold: f64) -> bool {
    colour.distance(Rgb::WHITE) < white_threshold || colour.distance(Rgb::BLACK) < black_threshold
}

/// Full evaluation of one pixel.
#[must_use]
pub fn evaluate(uv: Uv, params: &KernelParams) -> PixelSample {
    let view = &params.view;
    let coord = transform_viewport(uv, view);

    let mut exponent = lyapunov_exponent(coord, &params.pattern, params.iter_max);
    if params.noise_enabled {
        exponent += noise_perturbation(coord, params.time);
    }

    let normalized = normalize_exponent(exponent, view.lyp_min, view.lyp_max);
    let colour = params.palette.colour(normalized);

    let fragment = if is_masked(colour, view.white_threshold, view.black_threshold) {
        Fragment::Discarded
    } else {
        Fragment::Colour(colour)
    };

    PixelSample {
        exponent,
        normalized,
        fragment,
    }
}

/// The kernel bound to a raster and one frame's parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LyapunovAlgorithm {
    pixel_rect: PixelRect,
    params: KernelParams,
}

impl LyapunovAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, params: KernelParams) -> Self {
        Self { pixel_rect, params }
    }

    #[must_use]
    pub fn params(&self) -> &KernelParams {
        &self.params
    }
}

impl FractalAlgorithm for LyapunovAlgorithm {
    type Success = PixelSample;
    type Failure = PixelToUvError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let uv = pixel_to_uv(pixel, self.pixel_rect)?;

        Ok(evaluate(uv, &self.params))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}
