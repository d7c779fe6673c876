use crate::core::fractals::lyapunov::lyapunov_config::LyapunovConfig;
use crate::core::util::shading::lerp;

/// Fraction of the remaining distance covered per tick.
///
/// Applied once per rendered frame, so the settling time depends on the
/// frame rate: at 60 fps a knob covers ~99.8% of a step change in one second.
pub const SMOOTHING_FACTOR: f64 = 0.1;

/// The numeric knobs as the kernel currently sees them. Rotation is in
/// radians here, unlike [`LyapunovConfig::rotation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedState {
    pub zoom: f64,
    pub displace_x: f64,
    pub displace_y: f64,
    pub white_threshold: f64,
    pub black_threshold: f64,
    pub lyp_min: f64,
    pub lyp_max: f64,
    pub rotation: f64,
}

impl SmoothedState {
    /// The state a smoother would converge to for `config`.
    #[must_use]
    pub fn target_of(config: &LyapunovConfig) -> Self {
        Self {
            zoom: config.zoom,
            displace_x: config.displace_x,
            displace_y: config.displace_y,
            white_threshold: config.white_threshold,
            black_threshold: config.black_threshold,
            lyp_min: config.lyp_min,
            lyp_max: config.lyp_max,
            rotation: config.rotation.to_radians(),
        }
    }

    /// Moves every knob `factor` of the way towards `target`.
    ///
    /// Rotation is interpolated as a plain number: a target across the
    /// 0/360 degree seam is reached the long way round.
    #[must_use]
    pub fn approach(self, target: &Self, factor: f64) -> Self {
        Self {
            zoom: lerp(self.zoom, target.zoom, factor),
            displace_x: lerp(self.displace_x, target.displace_x, factor),
            displace_y: lerp(self.displace_y, target.displace_y, factor),
            white_threshold: lerp(self.white_threshold, target.white_threshold, factor),
            black_threshold: lerp(self.black_threshold, target.black_threshold, factor),
            lyp_min: lerp(self.lyp_min, target.lyp_min, factor),
            lyp_max: lerp(self.lyp_max, target.lyp_max, factor),
            rotation: lerp(self.rotation, target.rotation, factor),
        }
    }

    /// One frame of smoothing.
    #[must_use]
    pub fn tick(self, target: &Self) -> Self {
        self.approach(target, SMOOTHING_FACTOR)
    }

    /// Largest per-knob absolute difference.
    #[must_use]
    pub fn max_distance(&self, other: &Self) -> f64 {
        [
            self.zoom - other.zoom,
            self.displace_x - other.displace_x,
            self.displace_y - other.displace_y,
            self.white_threshold - other.white_threshold,
            self.black_threshold - other.black_threshold,
            self.lyp_min - other.lyp_min,
            self.lyp_max - other.lyp_max,
            self.rotation - other.rotation,
        ]
        .iter()
        .fold(0.0, |max, delta| f64::max(max, delta.abs()))
    }
}

/// Owns the smoothed state for one view. Starts exactly at the initial
/// config and only ever moves by [`SmoothedState::tick`] afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSmoother {
    state: SmoothedState,
}

impl ParameterSmoother {
    #[must_use]
    pub fn new(config: &LyapunovConfig) -> Self {
        Self {
            state: SmoothedState::target_of(config),
        }
    }

    pub fn tick(&mut self, config: &LyapunovConfig) -> SmoothedState {
        self.state = self.state.tick(&SmoothedState::target_of(config));
        self.state
    }

    #[must_use]
    pub fn state(&self) -> SmoothedState {
        self.state
    }

    /// Snaps to `config`, the only discontinuous move the smoother makes.
    pub fn reset(&mut self, config: &LyapunovConfig) {
        self.state = SmoothedState::target_of(config);
    }
}
