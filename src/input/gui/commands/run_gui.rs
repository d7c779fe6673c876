use std::marker::PhantomData;

use anyhow::{Context, Result};
use tracing::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::core::fractals::lyapunov::lyapunov_config::LyapunovConfig;
use crate::input::gui::app::{
    gui_app::GuiApp, ports::presenter::GuiPresenterPort, state::GuiAppState,
};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the explorer window starting from `config` and blocks until
    /// it is closed.
    pub fn execute(&self, config: LyapunovConfig) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Lyapunov Explorer")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .context("failed to create window")?,
        ));

        let presenter: P = self
            .presenter_factory
            .build(window)
            .context("failed to create pixels surface")?;
        let app = GuiApp::new(window, &event_loop, presenter, GuiAppState::new(config));

        info!("explorer window open");

        app.run(event_loop).context("event loop error")
    }
}
