//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod render;
mod scene;
mod window;

pub use render::{is_drawable_size, RenderError, RenderSystem};
pub use scene::SceneSystem;
pub use window::{WindowError, WindowSystem};
