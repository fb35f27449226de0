//! Rendering pipeline components
//!
//! GPU data layouts and the render pipeline that draws a frame batch.

pub mod types;
pub mod render_pipeline;

// Re-export types
pub use types::{Vertex3D, RenderUniforms, TRIANGLE_VERTEX_COUNT};

// Re-export pipeline
pub use render_pipeline::{RenderPipeline, PassRecorder, DEPTH_FORMAT};
