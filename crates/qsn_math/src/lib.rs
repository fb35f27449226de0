//! 3D Mathematics Library
//!
//! This crate provides the vector and transform types for the QSN viewer.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector used for positions, angle triples, and offsets
//! - [`RigidTransform`] - Euler-angle rotation followed by translation
//! - [`Mat3`] / [`Mat4`] - Matrix types for vertex and camera transforms

mod vec3;
pub mod transform;
pub mod mat4;

pub use vec3::Vec3;
pub use transform::{Mat3, RigidTransform, rotate, translate};
pub use mat4::Mat4;

/// The golden ratio, (1 + sqrt(5)) / 2
pub const PHI: f32 = 1.618_034;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phi() {
        let expected = (1.0 + 5.0f32.sqrt()) / 2.0;
        assert!((PHI - expected).abs() < 1e-6);
        // phi^2 = phi + 1
        assert!((PHI * PHI - (PHI + 1.0)).abs() < 1e-5);
    }
}
