//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Scroll and blit pipelines
//! - Letterbox viewport placement
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;

use skyroll_render::{
    context::RenderContext, BackdropTexture, BlitPipeline, ScrollPipeline, ScrollUniforms,
    Viewport,
};

use crate::config::{RenderingConfig, WindowConfig};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    scroll_pipeline: ScrollPipeline,
    blit_pipeline: Option<BlitPipeline>,
    viewport: Viewport,
    virtual_size: (u32, u32),
    texture_size: (u32, u32),
    background: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        window_config: &WindowConfig,
        render_config: &RenderingConfig,
    ) -> Self {
        let context = pollster::block_on(RenderContext::with_vsync(
            window,
            window_config.vsync,
        ));

        let backdrop = match BackdropTexture::from_path(
            &context.device,
            &context.queue,
            &render_config.backdrop_path,
        ) {
            Ok(texture) => texture,
            Err(e) => {
                log::warn!(
                    "Could not load backdrop '{}': {}. Using the built-in backdrop.",
                    render_config.backdrop_path,
                    e
                );
                BackdropTexture::builtin(&context.device, &context.queue)
            }
        };
        let texture_size = backdrop.size();
        log::info!(
            "Backdrop ready: {}x{} pixels",
            texture_size.0,
            texture_size.1
        );

        let virtual_size = window_config.virtual_size();

        // The pixel-exact path renders the scroll pass into an offscreen
        // target and blits it; otherwise the scroll pass draws straight into
        // the letterboxed surface viewport.
        let (scroll_pipeline, blit_pipeline) = if render_config.offscreen {
            let blit = BlitPipeline::new(&context.device, context.config.format, virtual_size);
            let scroll = ScrollPipeline::new(&context.device, BlitPipeline::COLOR_FORMAT, &backdrop);
            (scroll, Some(blit))
        } else {
            let scroll = ScrollPipeline::new(&context.device, context.config.format, &backdrop);
            (scroll, None)
        };

        let viewport = Viewport::compute(
            virtual_size,
            (context.config.width, context.config.height),
        );
        log::info!("Initial viewport: {:?}", viewport);

        let bg = render_config.background_color;
        Self {
            context,
            scroll_pipeline,
            blit_pipeline,
            viewport,
            virtual_size,
            texture_size,
            background: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        }
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.viewport = Viewport::compute(
            self.virtual_size,
            (self.context.config.width, self.context.config.height),
        );
        log::debug!(
            "Resized to {}x{}, magnification {}",
            width,
            height,
            self.viewport.magnification
        );
    }

    /// Render a single frame with the given scroll offsets (texture pixels)
    pub fn render_frame(&mut self, offsets: (f32, f32)) -> Result<(), RenderError> {
        let uniforms = ScrollUniforms {
            virtual_size: [self.virtual_size.0 as f32, self.virtual_size.1 as f32],
            texture_size: [self.texture_size.0 as f32, self.texture_size.1 as f32],
            offset: [offsets.0, offsets.1],
            _padding: [0.0; 2],
        };
        self.scroll_pipeline
            .update_uniforms(&self.context.queue, &uniforms);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        match &self.blit_pipeline {
            Some(blit) => {
                // Scroll pass at virtual resolution, then upscale.
                self.scroll_pipeline.render(
                    &mut encoder,
                    blit.offscreen_view(),
                    None,
                    self.background,
                );
                blit.render(&mut encoder, &view, self.viewport, self.background);
            }
            None => {
                self.scroll_pipeline.render(
                    &mut encoder,
                    &view,
                    Some(self.viewport),
                    self.background,
                );
            }
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.config.width, self.context.config.height)
    }

    /// Current letterbox placement
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }
}
