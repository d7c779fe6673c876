use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lyapunov_explorer::{LyapunovConfig, PixelsPresenterFactory, RunGuiCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gui", version, about = "Interactive Lyapunov fractal explorer")]
struct Cli {
    /// JSON file with the starting config.
    #[arg(long, value_name = "FILE.json")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Cli::parse();
    let config = match &args.config {
        Some(path) => LyapunovConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => LyapunovConfig::default(),
    };
    config.validate().context("invalid fractal configuration")?;

    let command = RunGuiCommand::new(PixelsPresenterFactory::new());

    command.execute(config)
}
