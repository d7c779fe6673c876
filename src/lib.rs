mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::controllers::cli::cli_controller::CliController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_frame::{RenderFrameError, RenderMode, render_frame};
pub use crate::core::data::colour::{Colour, ParseColourError, Rgb};
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::uv::Uv;
pub use crate::core::fractals::lyapunov::errors::{ConfigError, ConfigFileError};
pub use crate::core::fractals::lyapunov::kernel::{
    DERIVATIVE_EPSILON, Fragment, LyapunovAlgorithm, PixelSample, evaluate, is_masked,
    lyapunov_exponent, noise_perturbation, normalize_exponent, transform_viewport,
};
pub use crate::core::fractals::lyapunov::lyapunov_config::LyapunovConfig;
pub use crate::core::fractals::lyapunov::noise::value_noise;
pub use crate::core::fractals::lyapunov::palettes::{PaletteKind, UnknownPaletteError};
pub use crate::core::fractals::lyapunov::params::KernelParams;
pub use crate::core::fractals::lyapunov::pattern::{EncodedPattern, MAX_PATTERN_LENGTH};
pub use crate::core::frame::{
    FrameUpdateCycle, ParameterSmoother, SMOOTHING_FACTOR, SmoothedState, ViewWindow,
};
pub use crate::core::util::pixel_to_uv::{PixelToUvError, pixel_to_uv};
pub use crate::core::util::shading::smoothstep;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
