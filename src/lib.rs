//! Quasicrystalline Spin Network (QSN) viewer
//!
//! Draws a field of randomly rotated and translated golden-ratio tetrahedra,
//! regenerated on every display pass, seen from a camera that the arrow keys
//! nudge around the origin.
//!
//! The binary wires these pieces into a winit event loop:
//! - [`config`] - layered TOML and environment configuration
//! - [`systems`] - window, scene generation, and GPU rendering

pub mod config;
pub mod systems;
