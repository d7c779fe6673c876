use egui::Context as EguiContext;
use winit::window::Window;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait GuiPresenterPort {
    fn new(window: &'static Window) -> Result<Self, pixels::Error>
    where
        Self: Sized;

    /// Shows `frame` (or a placeholder when there is none, or it no longer
    /// matches the surface size) with the egui output drawn on top.
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        frame: Option<&PixelBuffer>,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
