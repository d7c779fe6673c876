use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

const CHECKER_TILE_SIZE: usize = 16;
const CHECKER_DARK: u8 = 28;
const CHECKER_LIGHT: u8 = 44;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
        })
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        frame: Option<&PixelBuffer>,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        match frame.filter(|frame| self.matches_surface(frame)) {
            Some(frame) => composite_over_checkerboard(
                frame.buffer(),
                self.pixels.frame_mut(),
                self.width as usize,
            ),
            None => draw_checkerboard(self.pixels.frame_mut(), self.width as usize),
        }

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Render egui on top of the fractal
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)
    }
}

impl PixelsPresenter {
    fn matches_surface(&self, frame: &PixelBuffer) -> bool {
        let pixel_rect = frame.pixel_rect();

        pixel_rect.width() == self.width && pixel_rect.height() == self.height
    }
}

fn checker_shade(index: usize, width: usize) -> u8 {
    let tile_x = (index % width) / CHECKER_TILE_SIZE;
    let tile_y = (index / width) / CHECKER_TILE_SIZE;

    if (tile_x + tile_y) % 2 == 0 {
        CHECKER_DARK
    } else {
        CHECKER_LIGHT
    }
}

fn draw_checkerboard(dest: &mut [u8], width: usize) {
    for (i, dst_pixel) in dest.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let shade = checker_shade(i, width);
        dst_pixel.copy_from_slice(&[shade, shade, shade, 255]);
    }
}

/// Copies an RGBA frame into the surface, showing the checkerboard wherever
/// the kernel discarded a pixel.
fn composite_over_checkerboard(src: &[u8], dest: &mut [u8], width: usize) {
    for (i, (src_pixel, dst_pixel)) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dest.chunks_exact_mut(BYTES_PER_PIXEL))
        .enumerate()
    {
        if src_pixel[3] == 0 {
            let shade = checker_shade(i, width);
            dst_pixel.copy_from_slice(&[shade, shade, shade, 255]);
        } else {
            dst_pixel.copy_from_slice(&[src_pixel[0], src_pixel[1], src_pixel[2], 255]);
        }
    }
}
