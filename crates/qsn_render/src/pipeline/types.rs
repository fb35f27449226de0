//! GPU-compatible data types for the tetrahedron pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use qsn_math::{mat4::IDENTITY, Mat4, Vec3};

/// A vertex of a face triangle
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex3D {
    /// Position in world space (x, y, z)
    pub position: [f32; 3],
}

impl Vertex3D {
    #[inline]
    pub fn new(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
        }
    }
}

/// Uniforms for the tetrahedron pass
/// Layout: 80 bytes total (must match tetra.wgsl Uniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RenderUniforms {
    /// Projection * view (64 bytes)
    pub view_proj: Mat4,
    /// Flat RGBA colour for all geometry (16 bytes)
    pub color: [f32; 4],
}

impl Default for RenderUniforms {
    fn default() -> Self {
        Self {
            view_proj: IDENTITY,
            color: [0.0, 0.0, 1.0, 1.0],
        }
    }
}

/// Vertices emitted per triangle
pub const TRIANGLE_VERTEX_COUNT: usize = 3;
