use std::error::Error;
use std::fmt;
use std::time::Instant;

use tracing::{debug, debug_span};

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::lyapunov::colour_map::FragmentColourMap;
use crate::core::fractals::lyapunov::kernel::LyapunovAlgorithm;
use crate::core::fractals::lyapunov::params::KernelParams;
use crate::core::util::pixel_to_uv::PixelToUvError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    Serial,
    #[default]
    Parallel,
}

#[derive(Debug)]
pub enum RenderFrameError {
    Evaluate(PixelToUvError),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evaluate(err) => write!(f, "pixel evaluation failed: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer generation failed: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Evaluate(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelToUvError> for RenderFrameError {
    fn from(err: PixelToUvError) -> Self {
        Self::Evaluate(err)
    }
}

impl From<GeneratePixelBufferError> for RenderFrameError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Evaluates one frame of `params` over `pixel_rect`. Both modes produce
/// byte-identical buffers.
pub fn render_frame(
    pixel_rect: PixelRect,
    params: &KernelParams,
    mode: RenderMode,
) -> Result<PixelBuffer, RenderFrameError> {
    let span = debug_span!(
        "render_frame",
        width = pixel_rect.width(),
        height = pixel_rect.height(),
        ?mode
    );
    let _entered = span.enter();
    let started = Instant::now();

    let algorithm = LyapunovAlgorithm::new(pixel_rect, *params);
    let samples = match mode {
        RenderMode::Serial => generate_fractal(&algorithm)?,
        RenderMode::Parallel => generate_fractal_rayon(&algorithm)?,
    };

    let pixel_buffer = generate_pixel_buffer(samples, &FragmentColourMap, pixel_rect)?;

    debug!(
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        discarded = pixel_buffer.discarded_count(),
        "frame rendered"
    );

    Ok(pixel_buffer)
}
