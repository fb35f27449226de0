//! Core types for the QSN viewer
//!
//! This crate provides the procedural generation pipeline:
//!
//! - [`RandomSource`] - Seeded, reproducible stream of uniform floats
//! - [`Tetrahedron`] - Four ordered vertices and their faces
//! - [`generate`] - Places one golden-ratio tetrahedron at random
//! - [`SceneAssembler`] - Builds the fixed-size batch of tetrahedra for a frame

pub mod constants;
mod random;
mod tetrahedron;
mod scene;

pub use random::RandomSource;
pub use tetrahedron::{Tetrahedron, generate, generate_with_placement};
pub use scene::SceneAssembler;

// Re-export commonly used types from qsn_math for convenience
pub use qsn_math::{Vec3, RigidTransform, PHI};
