use crate::adapters::pixel_format::copy_raster_into_rgba_frame;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::input::gui::GuiError;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalPosition;
use winit::window::Window;

/// Blits the engine raster to the window and paints egui shapes on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
    buffer_size: PixelSize,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, buffer_size: PixelSize) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(buffer_size.width(), buffer_size.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
            buffer_size,
        })
    }

    /// Zero-sized surfaces (minimised windows) are skipped.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.surface_width = width;
        self.surface_height = height;

        Ok(())
    }

    /// Window position to raster pixel. Positions outside the raster are kept
    /// unclamped so drags may leave the window.
    #[must_use]
    pub fn window_pos_to_pixel(&self, position: PhysicalPosition<f64>) -> Point {
        match self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
        {
            Ok((x, y)) => Point::new(x as i32, y as i32),
            Err((x, y)) => Point::new(x as i32, y as i32),
        }
    }

    pub fn present(
        &mut self,
        raster: &Raster,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), GuiError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        if raster.size() != self.buffer_size {
            self.pixels
                .resize_buffer(raster.size().width(), raster.size().height())?;
            self.buffer_size = raster.size();
        }

        copy_raster_into_rgba_frame(raster, self.pixels.frame_mut())?;

        let pixels_per_point = egui_ctx.pixels_per_point();
        let clipped_primitives = egui_ctx.tessellate(egui_output.shapes, pixels_per_point);
        let textures_delta = egui_output.textures_delta;
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point,
        };

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

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

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("overlay"),
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

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }
}
