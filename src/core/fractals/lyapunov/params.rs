use crate::core::fractals::lyapunov::lyapunov_config::LyapunovConfig;
use crate::core::fractals::lyapunov::palettes::PaletteKind;
use crate::core::fractals::lyapunov::pattern::EncodedPattern;
use crate::core::frame::smoother::SmoothedState;

/// Everything the kernel reads for one frame. Published by the frame cycle
/// and shared read-only by every pixel evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelParams {
    pub view: SmoothedState,
    pub pattern: EncodedPattern,
    pub time: f64,
    pub iter_max: u32,
    pub palette: PaletteKind,
    pub noise_enabled: bool,
}

impl KernelParams {
    /// Parameters for `config` with no smoothing history and time zero.
    #[must_use]
    pub fn from_config(config: &LyapunovConfig) -> Self {
        Self {
            view: SmoothedState::target_of(config),
            pattern: EncodedPattern::encode(&config.pattern),
            time: 0.0,
            iter_max: config.iter_max,
            palette: config.palette,
            noise_enabled: config.noise_enabled,
        }
    }
}
