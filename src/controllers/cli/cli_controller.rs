use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::{RenderFrameError, RenderMode, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::lyapunov::errors::ConfigError;
use crate::core::fractals::lyapunov::lyapunov_config::LyapunovConfig;
use crate::core::frame::frame_cycle::FrameUpdateCycle;
use crate::core::frame::view_window::ViewWindow;

/// Renders a still frame from a fixed config on a synthetic clock and hands
/// it to a file presenter.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    config: LyapunovConfig,
    pixel_rect: PixelRect,
    mode: RenderMode,
    cycle: FrameUpdateCycle,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(
        presenter: P,
        config: LyapunovConfig,
        pixel_rect: PixelRect,
        mode: RenderMode,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if config.pattern_is_truncated() {
            warn!(
                pattern = %config.pattern,
                "pattern is longer than the kernel accepts and will be truncated"
            );
        }

        Ok(Self {
            presenter,
            cycle: FrameUpdateCycle::new(&config),
            config,
            pixel_rect,
            mode,
            buffer: None,
        })
    }

    /// Ticks the frame cycle `frames` times with `elapsed = frame / fps`
    /// and renders the parameters published by the last tick.
    pub fn generate(&mut self, frames: u32, fps: f64) -> Result<&PixelBuffer, RenderFrameError> {
        let frames = frames.max(1);
        let mut params = self.cycle.tick(&self.config, 0.0);

        for frame in 1..frames {
            params = self.cycle.tick(&self.config, f64::from(frame) / fps);
        }

        info!(
            width = self.pixel_rect.width(),
            height = self.pixel_rect.height(),
            iter_max = self.config.iter_max,
            palette = %self.config.palette,
            time = params.time,
            "rendering Lyapunov fractal"
        );
        info!("{}", self.view_window().info_text(&self.config.pattern));

        let start = Instant::now();
        let buffer = render_frame(self.pixel_rect, &params, self.mode)?;

        info!(duration = ?start.elapsed(), "render finished");

        Ok(&*self.buffer.insert(buffer))
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &filepath)?;
            info!(path = %filepath.as_ref().display(), "frame written");
        }

        Ok(())
    }

    pub fn view_window(&self) -> ViewWindow {
        self.cycle.view_window()
    }

    pub fn frame_count(&self) -> u64 {
        self.cycle.frame_count()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn file_extension(&self) -> &'static str {
            "raw"
        }

        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    fn controller(config: LyapunovConfig) -> Result<CliController<RecordingPresenter>, ConfigError> {
        CliController::new(
            RecordingPresenter::default(),
            config,
            PixelRect::from_size(8, 6).unwrap(),
            RenderMode::Serial,
        )
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = LyapunovConfig {
            zoom: 0.0,
            ..LyapunovConfig::default()
        };

        assert!(matches!(controller(config), Err(ConfigError::NonPositiveZoom(_))));
    }

    #[test]
    fn test_write_before_generate_presents_nothing() {
        let controller = controller(LyapunovConfig::default()).unwrap();

        controller.write("unused.raw").unwrap();

        assert!(controller.presenter().presented.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_frame() {
        let mut controller = controller(LyapunovConfig::default()).unwrap();

        let size = controller.generate(3, 30.0).unwrap().buffer_size();
        controller.write("frame.raw").unwrap();

        assert_eq!(size, 8 * 6 * 4);
        assert_eq!(controller.frame_count(), 3);
        assert_eq!(
            *controller.presenter().presented.borrow(),
            vec![(PathBuf::from("frame.raw"), 8 * 6 * 4)]
        );
    }

    #[test]
    fn test_zero_frames_still_renders_once() {
        let mut controller = controller(LyapunovConfig::default()).unwrap();

        controller.generate(0, 60.0).unwrap();

        assert_eq!(controller.frame_count(), 1);
    }

    #[test]
    fn test_frozen_time_renders_same_frame_regardless_of_frame_count() {
        let config = LyapunovConfig {
            animate_time: false,
            ..LyapunovConfig::default()
        };
        let mut short = controller(config.clone()).unwrap();
        let mut long = controller(config).unwrap();

        let short_frame = short.generate(1, 60.0).unwrap().clone();
        let long_frame = long.generate(120, 60.0).unwrap().clone();

        assert_eq!(short_frame, long_frame);
    }
}
