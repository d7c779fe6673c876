use std::path::Path;
use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{error, info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::core::actions::render_frame::{RenderMode, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::lyapunov::palettes::PaletteKind;
use crate::core::frame::frame_cycle::FrameUpdateCycle;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::{GuiAppState, pixel_rect_for_window};

const EXPONENT_WINDOW_MIN_GAP: f64 = 0.01;
const SNAPSHOT_DIR: &str = ".";

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    width: u32,
    height: u32,
    presenter: T,
    cycle: FrameUpdateCycle,
    ui_state: GuiAppState,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        ui_state: GuiAppState,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            width: size.width,
            height: size.height,
            presenter,
            cycle: FrameUpdateCycle::new(&ui_state.config),
            ui_state,
            egui_ctx,
            egui_state,
        }
    }

    /// Drives the window until it is closed. Redraws continuously: every
    /// redraw is one frame tick.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), winit::error::EventLoopError> {
        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == self.window.id() => {
                let _ = self.egui_state.on_window_event(self.window, event);

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        if let Err(e) = self.redraw() {
                            error!("render error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => self.resize(size.width, size.height),
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = self.window.inner_size();
                        self.resize(size.width, size.height);
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => self.window.request_redraw(),
            _ => {}
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if let Err(e) = self.presenter.resize(width, height) {
            warn!(width, height, "failed to resize surface: {e}");
        }
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);

        self.egui_state
            .handle_platform_output(self.window, platform_output);

        let frame = self.render_fractal();
        if let Some(frame) = frame.as_ref().filter(|_| self.ui_state.snapshot_requested) {
            self.save_snapshot(frame);
        }

        self.presenter
            .render(egui_output, &self.egui_ctx, frame.as_ref())
    }

    fn save_snapshot(&mut self, frame: &PixelBuffer) {
        match self.ui_state.save_snapshot(frame, Path::new(SNAPSHOT_DIR)) {
            Ok(path) => info!(path = %path.display(), "snapshot saved"),
            Err(e) => {
                warn!("failed to save snapshot: {e}");
                self.ui_state.last_error_message = Some(format!("snapshot failed: {e}"));
            }
        }
    }

    /// One frame tick with the wall clock, then a full render at window size.
    fn render_fractal(&mut self) -> Option<PixelBuffer> {
        let params = self
            .cycle
            .tick(&self.ui_state.config, self.ui_state.elapsed_seconds());
        let pixel_rect = pixel_rect_for_window(self.width, self.height)?;

        let start = Instant::now();
        match render_frame(pixel_rect, &params, RenderMode::Parallel) {
            Ok(frame) => {
                self.ui_state.last_render_duration = Some(start.elapsed());
                self.ui_state.last_error_message = None;
                Some(frame)
            }
            Err(e) => {
                self.ui_state.last_error_message = Some(e.to_string());
                None
            }
        }
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let info_text = self
            .cycle
            .view_window()
            .info_text(&self.ui_state.config.pattern);
        let (width, height) = (self.width, self.height);
        let frame_count = self.cycle.frame_count();
        let state = &mut self.ui_state;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Lyapunov")
                .default_pos([10.0, 10.0])
                .default_size([300.0, 420.0])
                .show(ctx, |ui| {
                    let config = &mut state.config;

                    ui.heading("View");
                    ui.add(
                        egui::Slider::new(&mut config.zoom, 0.01..=20.0)
                            .logarithmic(true)
                            .text("Zoom"),
                    );
                    ui.horizontal(|ui| {
                        ui.label("Displace:");
                        ui.add(
                            egui::DragValue::new(&mut config.displace_x)
                                .speed(0.01)
                                .prefix("x "),
                        );
                        ui.add(
                            egui::DragValue::new(&mut config.displace_y)
                                .speed(0.01)
                                .prefix("y "),
                        );
                    });
                    ui.add(
                        egui::Slider::new(&mut config.rotation, 0.0..=360.0)
                            .text("Rotation"),
                    );

                    ui.separator();
                    ui.heading("Exponent");
                    ui.add(
                        egui::Slider::new(&mut config.lyp_min, -5.0..=5.0)
                            .text("Min"),
                    );
                    ui.add(
                        egui::Slider::new(&mut config.lyp_max, -5.0..=5.0)
                            .text("Max"),
                    );
                    ui.add(
                        egui::Slider::new(&mut config.iter_max, 1..=1000)
                            .text("Iterations"),
                    );

                    ui.horizontal(|ui| {
                        ui.label("Pattern:");
                        ui.text_edit_singleline(&mut state.pattern_input);
                    });

                    ui.separator();
                    ui.heading("Colour");
                    let config = &mut state.config;
                    egui::ComboBox::from_id_source("lyapunov_palette")
                        .selected_text(config.palette.display_name())
                        .show_ui(ui, |ui| {
                            for &kind in PaletteKind::ALL {
                                ui.selectable_value(&mut config.palette, kind, kind.display_name());
                            }
                        });
                    ui.add(
                        egui::Slider::new(&mut config.white_threshold, 0.0..=0.2)
                            .text("White mask"),
                    );
                    ui.add(
                        egui::Slider::new(&mut config.black_threshold, 0.0..=0.2)
                            .text("Black mask"),
                    );
                    ui.checkbox(&mut config.noise_enabled, "Noise");
                    ui.checkbox(&mut config.animate_time, "Animate time");

                    ui.horizontal(|ui| {
                        if ui.button("Reset view").clicked() {
                            config.reset_view();
                        }
                        if ui.button("Save snapshot").clicked() {
                            state.snapshot_requested = true;
                        }
                    });

                    ui.separator();
                    ui.label(info_text.as_str());
                    ui.label(format!("Window size: {}x{}", width, height));
                    ui.label(format!("Frame: {}", frame_count));
                    if let Some(render_duration) = state.last_render_duration {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(path) = &state.last_snapshot_path {
                        ui.label(format!("Saved: {}", path.display()));
                    }
                    if let Some(message) = &state.last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });

            state.commit_pattern_input();
            state.keep_exponent_window_open(EXPONENT_WINDOW_MIN_GAP);
        })
    }
}
