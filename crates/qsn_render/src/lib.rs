//! Tetrahedron Field Rendering Library
//!
//! This crate provides the wgpu-based pipeline for drawing a generated frame
//! of tetrahedra.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`frame_batch::FrameBatch`] - Accumulates a frame's triangles into one vertex buffer
//! - [`frame_batch::DrawTarget`] - Receiver of the ordered draw commands
//! - [`pipeline::RenderPipeline`] - Flat-coloured, depth-tested triangle pass

pub mod context;
pub mod frame_batch;
pub mod pipeline;

// Re-export core types for convenience
pub use qsn_core::{Tetrahedron, Vec3};

pub use frame_batch::{
    DrawCommand, DrawTarget, FrameBatch, FrameStyle, Projection,
    BACKGROUND_COLOR, PRIMITIVE_COLOR,
};
