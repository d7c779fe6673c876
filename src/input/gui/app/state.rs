use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::lyapunov::lyapunov_config::LyapunovConfig;
use crate::core::fractals::lyapunov::pattern::{BASE_SYMBOL, EXCITED_SYMBOL, MAX_PATTERN_LENGTH};
use crate::presenters::file::ppm::PpmFilePresenter;

const SNAPSHOT_PREFIX: &str = "lyapunov_snapshot";

/// Everything the control panel edits, plus the wall clock the frame cycle
/// reads.
pub struct GuiAppState {
    pub config: LyapunovConfig,
    pub pattern_input: String,
    started: Instant,
    pub last_render_duration: Option<Duration>,
    pub last_error_message: Option<String>,
    pub snapshot_requested: bool,
    snapshots_saved: u32,
    pub last_snapshot_path: Option<PathBuf>,
}

impl GuiAppState {
    pub fn new(config: LyapunovConfig) -> Self {
        Self {
            pattern_input: config.pattern.clone(),
            config,
            started: Instant::now(),
            last_render_duration: None,
            last_error_message: None,
            snapshot_requested: false,
            snapshots_saved: 0,
            last_snapshot_path: None,
        }
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Normalises the pattern text field: upper case, A/B only, at most
    /// the kernel capacity. The config follows the cleaned text.
    pub fn commit_pattern_input(&mut self) {
        self.pattern_input = sanitize_pattern(&self.pattern_input);
        self.config.pattern.clone_from(&self.pattern_input);
    }

    /// Writes `frame` into `dir` as the next numbered snapshot and clears
    /// the pending request.
    pub fn save_snapshot(&mut self, frame: &PixelBuffer, dir: &Path) -> io::Result<PathBuf> {
        self.snapshot_requested = false;

        let presenter = PpmFilePresenter::new();
        let path = snapshot_path(dir, self.snapshots_saved, presenter.file_extension());
        presenter.present(frame, &path)?;

        self.snapshots_saved += 1;
        self.last_snapshot_path = Some(path.clone());

        Ok(path)
    }

    /// Keeps `lyp_min < lyp_max` after either slider moved.
    pub fn keep_exponent_window_open(&mut self, min_gap: f64) {
        if self.config.lyp_max - self.config.lyp_min < min_gap {
            self.config.lyp_max = self.config.lyp_min + min_gap;
        }
    }
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self::new(LyapunovConfig::default())
    }
}

#[must_use]
pub fn sanitize_pattern(input: &str) -> String {
    input
        .chars()
        .map(|symbol| symbol.to_ascii_uppercase())
        .filter(|&symbol| symbol == BASE_SYMBOL || symbol == EXCITED_SYMBOL)
        .take(MAX_PATTERN_LENGTH)
        .collect()
}

#[must_use]
pub fn snapshot_path(dir: &Path, index: u32, extension: &str) -> PathBuf {
    dir.join(format!("{SNAPSHOT_PREFIX}_{index:03}.{extension}"))
}

/// The raster for a window of the given size, if it can hold one.
#[must_use]
pub fn pixel_rect_for_window(width: u32, height: u32) -> Option<PixelRect> {
    PixelRect::from_size(width, height).ok()
}
