//! Frame batch - bridges a generated frame to GPU buffers
//!
//! All triangles of a frame are accumulated into one vertex list, in
//! tetrahedron order and face order, and drawn with a single call. Building
//! the batch is pure: the same frame and camera always give the same vertices,
//! uniforms, and command sequence.

use qsn_core::Tetrahedron;
use qsn_input::CameraController;
use qsn_math::{mat4, Mat4};

use crate::pipeline::{RenderUniforms, Vertex3D, TRIANGLE_VERTEX_COUNT};

/// Clear colour (white)
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Colour of every face (solid blue)
pub const PRIMITIVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Depth buffer clear value
pub const CLEAR_DEPTH: f32 = 1.0;

/// Perspective projection parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Width / height
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: 45.0f32.to_radians(),
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn matrix(&self) -> Mat4 {
        mat4::perspective(self.fov_y, self.aspect, self.near, self.far)
    }
}

/// Colours used for a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    pub background: [f32; 4],
    pub primitive: [f32; 4],
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            primitive: PRIMITIVE_COLOR,
        }
    }
}

/// One step of drawing a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// Clear colour and depth buffers
    Clear { color: [f32; 4], depth: f32 },
    /// Load the combined view-projection transform
    SetViewProjection(Mat4),
    /// Set the flat colour for subsequent triangles
    SetColor([f32; 4]),
    /// Draw a range of the batch's vertex buffer as a triangle list
    DrawTriangles { first_vertex: u32, vertex_count: u32 },
}

/// Receiver of draw commands
///
/// Implemented by the GPU pass recorder and by `Vec<DrawCommand>` for
/// inspection.
pub trait DrawTarget {
    fn clear(&mut self, color: [f32; 4], depth: f32);
    fn set_view_projection(&mut self, view_proj: Mat4);
    fn set_color(&mut self, color: [f32; 4]);
    fn draw_triangles(&mut self, first_vertex: u32, vertex_count: u32);
}

impl DrawTarget for Vec<DrawCommand> {
    fn clear(&mut self, color: [f32; 4], depth: f32) {
        self.push(DrawCommand::Clear { color, depth });
    }

    fn set_view_projection(&mut self, view_proj: Mat4) {
        self.push(DrawCommand::SetViewProjection(view_proj));
    }

    fn set_color(&mut self, color: [f32; 4]) {
        self.push(DrawCommand::SetColor(color));
    }

    fn draw_triangles(&mut self, first_vertex: u32, vertex_count: u32) {
        self.push(DrawCommand::DrawTriangles { first_vertex, vertex_count });
    }
}

/// GPU-ready triangles and uniforms for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBatch {
    /// Face vertices, three per triangle
    pub vertices: Vec<Vertex3D>,
    /// View-projection and flat colour
    pub uniforms: RenderUniforms,
    /// Background colour
    pub clear_color: [f32; 4],
}

impl FrameBatch {
    /// Accumulate a frame's triangles and compute its camera transform
    pub fn build(
        frame: &[Tetrahedron],
        camera: &CameraController,
        projection: &Projection,
        style: &FrameStyle,
    ) -> Self {
        let mut vertices = Vec::with_capacity(
            frame.len() * Tetrahedron::FACES.len() * TRIANGLE_VERTEX_COUNT,
        );
        for tetrahedron in frame {
            for face in tetrahedron.faces() {
                vertices.extend(face.iter().map(|v| Vertex3D::new(*v)));
            }
        }

        let view = mat4::look_at(camera.eye(), camera.target(), camera.up());
        let view_proj = mat4::mul(projection.matrix(), view);

        Self {
            vertices,
            uniforms: RenderUniforms {
                view_proj,
                color: style.primitive,
            },
            clear_color: style.background,
        }
    }

    /// Number of vertices in the batch
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles in the batch
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / TRIANGLE_VERTEX_COUNT
    }

    /// Issue this batch's commands, in order, to a target
    ///
    /// The draw is issued even for an empty batch so that the clear happens.
    pub fn issue<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        target.clear(self.clear_color, CLEAR_DEPTH);
        target.set_view_projection(self.uniforms.view_proj);
        target.set_color(self.uniforms.color);
        target.draw_triangles(0, self.vertices.len() as u32);
    }

    /// The ordered command list for this batch
    pub fn commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(4);
        self.issue(&mut commands);
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsn_core::{RandomSource, SceneAssembler, Vec3};
    use qsn_input::Direction;

    fn sample_frame(count: usize) -> Vec<Tetrahedron> {
        let mut rng = RandomSource::new(123);
        SceneAssembler::new().with_num_tetrahedra(count).build_frame(&mut rng)
    }

    #[test]
    fn test_vertex_count() {
        let frame = sample_frame(500);
        let batch = FrameBatch::build(
            &frame,
            &CameraController::new(),
            &Projection::default(),
            &FrameStyle::default(),
        );
        assert_eq!(batch.triangle_count(), 2000);
        assert_eq!(batch.vertex_count(), 6000);
    }

    #[test]
    fn test_face_and_tetrahedron_order() {
        let frame = sample_frame(3);
        let batch = FrameBatch::build(
            &frame,
            &CameraController::new(),
            &Projection::default(),
            &FrameStyle::default(),
        );

        let mut expected = Vec::new();
        for t in &frame {
            for face in Tetrahedron::FACES {
                for i in face {
                    expected.push(Vertex3D::new(t.vertices[i]));
                }
            }
        }
        assert_eq!(batch.vertices, expected);
        // Second triangle of the first tetrahedron is face {0, 1, 3}
        assert_eq!(batch.vertices[5], Vertex3D::new(frame[0].vertices[3]));
    }

    #[test]
    fn test_command_sequence() {
        let frame = sample_frame(2);
        let batch = FrameBatch::build(
            &frame,
            &CameraController::new(),
            &Projection::default(),
            &FrameStyle::default(),
        );
        let commands = batch.commands();

        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], DrawCommand::Clear { color: BACKGROUND_COLOR, depth: 1.0 });
        assert!(matches!(commands[1], DrawCommand::SetViewProjection(_)));
        assert_eq!(commands[2], DrawCommand::SetColor(PRIMITIVE_COLOR));
        assert_eq!(commands[3], DrawCommand::DrawTriangles { first_vertex: 0, vertex_count: 24 });
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let frame = sample_frame(50);
        let camera = CameraController::new();
        let projection = Projection::default();
        let style = FrameStyle::default();

        let first = FrameBatch::build(&frame, &camera, &projection, &style);
        let second = FrameBatch::build(&frame, &camera, &projection, &style);

        assert_eq!(first, second);
        assert_eq!(first.commands(), second.commands());
        assert_eq!(first.commands(), first.commands());
    }

    #[test]
    fn test_camera_changes_only_view() {
        let frame = sample_frame(5);
        let projection = Projection::default();
        let style = FrameStyle::default();

        let mut camera = CameraController::new();
        let before = FrameBatch::build(&frame, &camera, &projection, &style);
        camera.nudge(Direction::Left);
        let after = FrameBatch::build(&frame, &camera, &projection, &style);

        assert_eq!(before.vertices, after.vertices);
        assert_ne!(before.uniforms.view_proj, after.uniforms.view_proj);
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let batch = FrameBatch::build(
            &[],
            &CameraController::new(),
            &Projection::default(),
            &FrameStyle::default(),
        );
        let clip = mat4::transform_point(batch.uniforms.view_proj, Vec3::ZERO);
        assert!((clip[0] / clip[3]).abs() < 1e-4);
        assert!((clip[1] / clip[3]).abs() < 1e-4);
        let depth = clip[2] / clip[3];
        assert!((0.0..1.0).contains(&depth));
    }

    #[test]
    fn test_empty_frame_still_clears() {
        let batch = FrameBatch::build(
            &[],
            &CameraController::new(),
            &Projection::default(),
            &FrameStyle::default(),
        );
        let commands = batch.commands();
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        assert_eq!(commands[3], DrawCommand::DrawTriangles { first_vertex: 0, vertex_count: 0 });
    }
}
