//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The triangle pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use qsn_input::CameraController;
use qsn_render::{
    context::{ContextError, RenderContext},
    pipeline::RenderPipeline,
    FrameBatch, FrameStyle, Tetrahedron,
};
use crate::config::{CameraConfig, RenderingConfig};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU context could not be created
    Context(ContextError),
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
            RenderError::Context(e) => write!(f, "Render context error: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: RenderPipeline,
    style: FrameStyle,
    camera_config: CameraConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    ///
    /// `max_triangles` sizes the initial vertex buffer; larger frames grow it.
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        camera_config: CameraConfig,
        vsync: bool,
        max_triangles: usize,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut pipeline = RenderPipeline::new(
            &context.device,
            context.config.format,
            max_triangles * 3,
        );

        pipeline.ensure_depth_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );

        Ok(Self {
            context,
            pipeline,
            style: render_config.style(),
            camera_config,
        })
    }

    /// Handle window resize
    ///
    /// A zero dimension (minimised window) leaves the surface and depth
    /// buffer at their previous size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if !is_drawable_size(width, height) {
            return;
        }
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        // Depth must match the configured surface, not the requested size
        self.pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure the surface at its current size after it was lost
    pub fn reconfigure(&mut self) {
        let (width, height) = self.size();
        self.resize(width, height);
    }

    /// Render a single frame
    pub fn render_frame(
        &mut self,
        frame: &[Tetrahedron],
        camera: &CameraController,
    ) -> Result<(), RenderError> {
        let projection = self.camera_config.projection(self.context.aspect_ratio());
        let batch = FrameBatch::build(frame, camera, &projection, &self.style);

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

        self.pipeline
            .upload_vertices(&self.context.device, &self.context.queue, &batch.vertices);

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut recorder = self
                .pipeline
                .begin_frame(&self.context.queue, &mut encoder, &view);
            batch.issue(&mut recorder);
        }

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log::trace!("Presented {} triangles", batch.triangle_count());

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.config.width, self.context.config.height)
    }
}

/// Whether a surface of this size can be configured and drawn into
pub fn is_drawable_size(width: u32, height: u32) -> bool {
    width > 0 && height > 0
}
