//! Euler-angle rotation and translation of vertices
//!
//! The rotation composes the three axis angles into a single 3x3 matrix with
//! a fixed trigonometric layout. The layout is not a conventional orthonormal
//! rotation: for many angle triples it shears or collapses the input, and the
//! generated field depends on exactly this shape. Do not replace it with a
//! standard rotation.

use crate::Vec3;

/// 3x3 matrix type (row-major: `m[row][col]`)
pub type Mat3 = [[f32; 3]; 3];

/// Identity matrix
pub const IDENTITY: Mat3 = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Build the rotation matrix for an angle triple `(rx, ry, rz)` in radians.
///
/// ```text
/// x' =  cos(rx)cos(ry)·x + cos(rx)sin(ry)sin(rz)·y + sin(rx)cos(rz)·z
/// y' = -sin(rx)cos(ry)·x - sin(rx)sin(ry)sin(rz)·y + cos(rx)cos(rz)·z
/// z' = -sin(ry)·x        + cos(ry)sin(rz)·y        + cos(ry)cos(rz)·z
/// ```
pub fn euler_matrix(rotation: Vec3) -> Mat3 {
    let (sx, cx) = rotation.x.sin_cos();
    let (sy, cy) = rotation.y.sin_cos();
    let (sz, cz) = rotation.z.sin_cos();

    [
        [cx * cy, cx * sy * sz, sx * cz],
        [-sx * cy, -sx * sy * sz, cx * cz],
        [-sy, cy * sz, cy * cz],
    ]
}

/// Multiply a vector by a row-major matrix: result = M * v
#[inline]
pub fn apply(m: &Mat3, v: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
        m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
        m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
    )
}

/// Rotate a single vertex by an angle triple
pub fn rotate(vertex: Vec3, rotation: Vec3) -> Vec3 {
    apply(&euler_matrix(rotation), vertex)
}

/// Translate a vertex by an offset
#[inline]
pub fn translate(vertex: Vec3, offset: Vec3) -> Vec3 {
    vertex + offset
}

/// Determinant of a 3x3 matrix
pub fn determinant(m: &Mat3) -> f32 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// A rotation followed by a translation
///
/// The matrix is built once so that every vertex of a primitive shares the
/// same six trigonometric evaluations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidTransform {
    /// Euler angles in radians
    pub rotation: Vec3,
    /// Translation applied after rotation
    pub offset: Vec3,
    matrix: Mat3,
}

impl RigidTransform {
    /// Create a transform from an angle triple and an offset
    pub fn new(rotation: Vec3, offset: Vec3) -> Self {
        Self {
            rotation,
            offset,
            matrix: euler_matrix(rotation),
        }
    }

    /// The composed rotation matrix
    #[inline]
    pub fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    /// Rotate, then translate
    #[inline]
    pub fn apply(&self, vertex: Vec3) -> Vec3 {
        translate(apply(&self.matrix, vertex), self.offset)
    }

    /// Transform a fixed-size set of vertices in place order
    pub fn apply_all<const N: usize>(&self, vertices: [Vec3; N]) -> [Vec3; N] {
        vertices.map(|v| self.apply(v))
    }
}
