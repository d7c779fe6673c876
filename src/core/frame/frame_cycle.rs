use tracing::trace;

use crate::core::fractals::lyapunov::lyapunov_config::LyapunovConfig;
use crate::core::fractals::lyapunov::params::KernelParams;
use crate::core::fractals::lyapunov::pattern::EncodedPattern;
use crate::core::frame::smoother::{ParameterSmoother, SmoothedState};
use crate::core::frame::view_window::ViewWindow;

/// Turns config snapshots into per-frame kernel parameters.
///
/// The host calls [`FrameUpdateCycle::tick`] exactly once per rendered frame
/// from a single thread; the returned parameters are then read concurrently
/// by the pixel evaluations of that frame.
#[derive(Debug, Clone)]
pub struct FrameUpdateCycle {
    smoother: ParameterSmoother,
    time: f64,
    frame_count: u64,
}

impl FrameUpdateCycle {
    #[must_use]
    pub fn new(config: &LyapunovConfig) -> Self {
        Self {
            smoother: ParameterSmoother::new(config),
            time: 0.0,
            frame_count: 0,
        }
    }

    /// Advances one frame. `elapsed_seconds` is the host clock; it only
    /// becomes the kernel time while `config.animate_time` is set, otherwise
    /// the last published time is held.
    pub fn tick(&mut self, config: &LyapunovConfig, elapsed_seconds: f64) -> KernelParams {
        let view = self.smoother.tick(config);
        let pattern = EncodedPattern::encode(&config.pattern);

        if config.animate_time {
            self.time = elapsed_seconds;
        }

        self.frame_count += 1;

        let params = KernelParams {
            view,
            pattern,
            time: self.time,
            iter_max: config.iter_max,
            palette: config.palette,
            noise_enabled: config.noise_enabled,
        };

        trace!(
            frame = self.frame_count,
            time = params.time,
            zoom = view.zoom,
            rotation = view.rotation,
            pattern_length = pattern.len(),
            "published kernel parameters"
        );

        params
    }

    #[must_use]
    pub fn smoothed(&self) -> SmoothedState {
        self.smoother.state()
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[must_use]
    pub fn view_window(&self) -> ViewWindow {
        ViewWindow::from_state(&self.smoother.state())
    }

    /// Restarts from `config`: smoothing history, frame count and time.
    pub fn reset(&mut self, config: &LyapunovConfig) {
        self.smoother.reset(config);
        self.time = 0.0;
        self.frame_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::lyapunov::palettes::PaletteKind;

    #[test]
    fn tick_publishes_current_discrete_settings() {
        let config = LyapunovConfig::default();
        let mut cycle = FrameUpdateCycle::new(&config);
        let edited = LyapunovConfig {
            iter_max: 400,
            palette: PaletteKind::Viridis,
            pattern: "BBBA".to_string(),
            noise_enabled: false,
            ..config
        };

        let params = cycle.tick(&edited, 0.5);

        assert_eq!(params.iter_max, 400);
        assert_eq!(params.palette, PaletteKind::Viridis);
        assert_eq!(params.pattern, EncodedPattern::encode("BBBA"));
        assert!(!params.noise_enabled);
        assert_eq!(cycle.frame_count(), 1);
    }

    #[test]
    fn tick_smooths_numeric_settings() {
        let config = LyapunovConfig::default();
        let mut cycle = FrameUpdateCycle::new(&config);
        let edited = LyapunovConfig {
            zoom: 12.04,
            ..config.clone()
        };

        let params = cycle.tick(&edited, 0.0);

        assert!((params.view.zoom - 3.04).abs() < 1e-12);
        assert_eq!(cycle.smoothed(), params.view);
    }

    #[test]
    fn time_follows_clock_while_animating() {
        let config = LyapunovConfig::default();
        let mut cycle = FrameUpdateCycle::new(&config);

        assert_eq!(cycle.tick(&config, 1.25).time, 1.25);
        assert_eq!(cycle.tick(&config, 2.5).time, 2.5);
    }

    #[test]
    fn time_freezes_when_animation_is_off() {
        let animated = LyapunovConfig::default();
        let frozen = LyapunovConfig {
            animate_time: false,
            ..animated.clone()
        };
        let mut cycle = FrameUpdateCycle::new(&animated);

        cycle.tick(&animated, 3.0);
        let params = cycle.tick(&frozen, 9.0);

        assert_eq!(params.time, 3.0);
        assert_eq!(cycle.time(), 3.0);

        let resumed = cycle.tick(&animated, 10.0);
        assert_eq!(resumed.time, 10.0);
    }

    #[test]
    fn empty_pattern_is_published_with_length_one() {
        let config = LyapunovConfig {
            pattern: String::new(),
            ..LyapunovConfig::default()
        };
        let mut cycle = FrameUpdateCycle::new(&config);

        assert_eq!(cycle.tick(&config, 0.0).pattern.len(), 1);
    }

    #[test]
    fn reset_clears_history() {
        let config = LyapunovConfig::default();
        let mut cycle = FrameUpdateCycle::new(&config);
        cycle.tick(&LyapunovConfig { zoom: 5.0, ..config.clone() }, 4.0);

        cycle.reset(&config);

        assert_eq!(cycle.frame_count(), 0);
        assert_eq!(cycle.time(), 0.0);
        assert_eq!(cycle.smoothed(), SmoothedState::target_of(&config));
    }
}
