//! Camera Input Handling
//!
//! This crate owns the viewer's eye position and maps the arrow keys to
//! discrete camera nudges.

mod camera_controller;

pub use camera_controller::{CameraController, Direction, DEFAULT_EYE, NUDGE_STEP, LOOK_AT, UP};
