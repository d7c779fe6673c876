use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use lyapunov_explorer::{
    CliController, Colour, FilePresenterPort, LyapunovConfig, PaletteKind, PixelRect,
    PpmFilePresenter, RenderMode,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "lyapunov_explorer",
    version,
    about = "Renders Markus-Lyapunov fractals of the forced logistic map to PPM"
)]
struct Cli {
    /// JSON file with any subset of the config keys; flags override it.
    #[arg(long, value_name = "FILE.json")]
    config: Option<PathBuf>,

    /// Defaults to `lyapunov.<ext>` for the presenter's format.
    #[arg(long, short, value_name = "PATH")]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Frame ticks to run before rendering the last one.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Synthetic clock rate: tick `n` sees `n / fps` seconds.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Evaluate pixels on the calling thread only.
    #[arg(long, default_value_t = false)]
    serial: bool,

    /// Fill for discarded pixels.
    #[arg(long, value_name = "RRGGBB", default_value = "ffffff")]
    backdrop: Colour,

    #[arg(long)]
    zoom: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    displace_x: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    displace_y: Option<f64>,

    /// Degrees.
    #[arg(long, allow_negative_numbers = true)]
    rotation: Option<f64>,

    #[arg(long = "white")]
    white_threshold: Option<f64>,

    #[arg(long = "black")]
    black_threshold: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    lyp_min: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    lyp_max: Option<f64>,

    #[arg(long)]
    iter_max: Option<u32>,

    /// Forcing sequence over A and B, e.g. AAABB.
    #[arg(long)]
    pattern: Option<String>,

    /// Name (rainbow, hot, turbo, viridis, inferno, coolwarm, pastel) or id 0-6.
    #[arg(long)]
    palette: Option<PaletteKind>,

    #[arg(long, action = clap::ArgAction::Set)]
    noise: Option<bool>,

    #[arg(long, action = clap::ArgAction::Set)]
    animate_time: Option<bool>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut LyapunovConfig) {
        if let Some(zoom) = self.zoom {
            config.zoom = zoom;
        }
        if let Some(displace_x) = self.displace_x {
            config.displace_x = displace_x;
        }
        if let Some(displace_y) = self.displace_y {
            config.displace_y = displace_y;
        }
        if let Some(rotation) = self.rotation {
            config.rotation = rotation;
        }
        if let Some(white_threshold) = self.white_threshold {
            config.white_threshold = white_threshold;
        }
        if let Some(black_threshold) = self.black_threshold {
            config.black_threshold = black_threshold;
        }
        if let Some(lyp_min) = self.lyp_min {
            config.lyp_min = lyp_min;
        }
        if let Some(lyp_max) = self.lyp_max {
            config.lyp_max = lyp_max;
        }
        if let Some(iter_max) = self.iter_max {
            config.iter_max = iter_max;
        }
        if let Some(pattern) = &self.pattern {
            config.pattern = pattern.clone();
        }
        if let Some(palette) = self.palette {
            config.palette = palette;
        }
        if let Some(noise) = self.noise {
            config.noise_enabled = noise;
        }
        if let Some(animate_time) = self.animate_time {
            config.animate_time = animate_time;
        }
    }

    fn load_config(&self) -> Result<LyapunovConfig> {
        let mut config = match &self.config {
            Some(path) => LyapunovConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => LyapunovConfig::default(),
        };

        self.apply_overrides(&mut config);

        Ok(config)
    }
}

fn validate_args(args: &Cli) -> Result<()> {
    if args.width < 2 || args.height < 2 {
        bail!("--width and --height must be >= 2");
    }
    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be a positive number");
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Cli::parse();
    validate_args(&args)?;

    let config = args.load_config()?;
    let pixel_rect = PixelRect::from_size(args.width, args.height)?;
    let mode = if args.serial {
        RenderMode::Serial
    } else {
        RenderMode::Parallel
    };

    let presenter = PpmFilePresenter::with_backdrop(args.backdrop);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("lyapunov.{}", presenter.file_extension())));

    let mut controller = CliController::new(presenter, config, pixel_rect, mode)
        .context("invalid fractal configuration")?;

    controller.generate(args.frames, args.fps)?;
    controller
        .write(&output)
        .with_context(|| format!("writing {}", output.display()))?;

    Ok(())
}
