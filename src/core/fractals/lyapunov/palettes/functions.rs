//! The seven palettes. Each takes `t` already clamped to `[0, 1]`; outputs
//! are deliberately left unclamped.

use std::f64::consts::{PI, TAU};

use crate::core::data::colour::Rgb;
use crate::core::util::shading::{lerp, smoothstep};

fn cosine_wave(t: f64, phase: f64) -> f64 {
    0.5 + 0.5 * (TAU * (t + phase)).cos()
}

fn sine_wave(t: f64, base: f64, range: f64, phase: f64) -> f64 {
    base + range * (TAU * (t + phase)).sin()
}

#[must_use]
pub fn rainbow(t: f64) -> Rgb {
    Rgb::new(
        cosine_wave(t, 0.0),
        cosine_wave(t, 0.33),
        cosine_wave(t, 0.66),
    )
}

#[must_use]
pub fn hot(t: f64) -> Rgb {
    let intensity = lerp(0.5, 1.0, t);

    Rgb::new(
        smoothstep(0.0, 0.5, t),
        smoothstep(0.25, 0.75, t),
        smoothstep(0.5, 1.0, t),
    )
    .scale(intensity)
}

#[must_use]
pub fn turbo(t: f64) -> Rgb {
    Rgb::new(
        sine_wave(t, 0.5, 0.5, 0.0),
        sine_wave(t, 0.5, 0.5, 0.15),
        sine_wave(t, 0.5, 0.5, 0.3),
    )
}

#[must_use]
pub fn viridis(t: f64) -> Rgb {
    Rgb::new(
        0.267 + 0.643 * t - 0.379 * t * t,
        0.004 + 1.370 * t - 1.689 * t * t,
        0.329 + 0.861 * t - 0.897 * t * t,
    )
}

#[must_use]
pub fn inferno(t: f64) -> Rgb {
    let r = (1.5 * t + 0.05 * (20.0 * t).sin()).clamp(0.0, 1.0);

    Rgb::new(r * 0.9, t.sqrt() * 0.6, (1.0 - t) * 0.8)
}

#[must_use]
pub fn cool_warm(t: f64) -> Rgb {
    Rgb::new(t, 0.5 * (PI * t).sin(), 1.0 - t)
}

#[must_use]
pub fn pastel(t: f64) -> Rgb {
    Rgb::new(
        sine_wave(t, 0.8, 0.2, 0.1),
        sine_wave(t, 0.7, 0.3, 0.4),
        sine_wave(t, 0.6, 0.4, 0.7),
    )
}
