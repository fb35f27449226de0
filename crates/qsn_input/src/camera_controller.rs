//! Camera controller for arrow-key navigation
//!
//! Controls:
//! - Left/Right arrow: move the eye along X
//! - Up/Down arrow: move the eye along Y
//!
//! The camera always looks at the world origin with +Y up. Every other key
//! is ignored.

use qsn_math::Vec3;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Initial eye position
pub const DEFAULT_EYE: Vec3 = Vec3::new(5.0, 5.0, 5.0);

/// Distance moved per nudge
pub const NUDGE_STEP: f32 = 0.1;

/// Fixed look-at target
pub const LOOK_AT: Vec3 = Vec3::ZERO;

/// Fixed up vector
pub const UP: Vec3 = Vec3::Y;

/// A discrete camera move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map an arrow key to a direction
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowLeft => Some(Direction::Left),
            KeyCode::ArrowRight => Some(Direction::Right),
            KeyCode::ArrowUp => Some(Direction::Up),
            KeyCode::ArrowDown => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Holds the eye position and the pending redraw request
pub struct CameraController {
    eye: Vec3,
    redraw_requested: bool,

    // Configuration
    pub step: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            eye: DEFAULT_EYE,
            redraw_requested: false,
            step: NUDGE_STEP,
        }
    }

    /// Builder: set the starting eye position
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Builder: set the nudge distance
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Current eye position
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Look-at target (always the origin)
    pub fn target(&self) -> Vec3 {
        LOOK_AT
    }

    /// Up vector (always +Y)
    pub fn up(&self) -> Vec3 {
        UP
    }

    /// Move the eye one step and request a redraw
    ///
    /// The eye is not clamped and may travel arbitrarily far.
    pub fn nudge(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.eye.x -= self.step,
            Direction::Right => self.eye.x += self.step,
            Direction::Up => self.eye.y += self.step,
            Direction::Down => self.eye.y -= self.step,
        }
        self.redraw_requested = true;
        log::debug!(
            "Camera {:?} -> eye ({:.2}, {:.2}, {:.2})",
            direction, self.eye.x, self.eye.y, self.eye.z
        );
    }

    /// Process keyboard input
    ///
    /// Arrow key presses (including key repeats) nudge the camera. Returns
    /// true if the key was handled.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        if state != ElementState::Pressed {
            return false;
        }

        match Direction::from_key(key) {
            Some(direction) => {
                self.nudge(direction);
                true
            }
            None => false,
        }
    }

    /// Consume the redraw flag
    ///
    /// Returns true if the eye moved since the last call, then clears the flag.
    pub fn take_redraw_request(&mut self) -> bool {
        let requested = self.redraw_requested;
        self.redraw_requested = false;
        requested
    }

    /// Check for a pending redraw without consuming it
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Short status text for the window title
    pub fn status(&self) -> String {
        format!("eye ({:.1}, {:.1}, {:.1})", self.eye.x, self.eye.y, self.eye.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_initial_eye() {
        let cam = CameraController::new();
        assert_eq!(cam.eye(), Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(cam.target(), Vec3::ZERO);
        assert_eq!(cam.up(), Vec3::Y);
        assert!(!cam.redraw_requested());
    }

    #[test]
    fn test_each_direction() {
        let mut cam = CameraController::new();
        cam.nudge(Direction::Left);
        assert!((cam.eye().x - 4.9).abs() < EPSILON);
        cam.nudge(Direction::Up);
        assert!((cam.eye().y - 5.1).abs() < EPSILON);
        cam.nudge(Direction::Down);
        cam.nudge(Direction::Down);
        assert!((cam.eye().y - 4.9).abs() < EPSILON);
        cam.nudge(Direction::Right);
        assert!((cam.eye().x - 5.0).abs() < EPSILON);
        // Z is never touched
        assert_eq!(cam.eye().z, 5.0);
    }

    #[test]
    fn test_left_then_right_restores_x() {
        let mut cam = CameraController::new();
        cam.nudge(Direction::Left);
        cam.nudge(Direction::Right);
        assert!((cam.eye().x - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_up_is_strictly_increasing() {
        let mut cam = CameraController::new();
        let mut last = cam.eye().y;
        for _ in 0..200 {
            cam.nudge(Direction::Up);
            assert!(cam.eye().y > last);
            last = cam.eye().y;
        }
    }

    #[test]
    fn test_no_clamping() {
        let mut cam = CameraController::new().with_step(10.0);
        for _ in 0..100 {
            cam.nudge(Direction::Down);
        }
        assert!(cam.eye().y < -990.0);
    }

    #[test]
    fn test_redraw_flag_consumed_once() {
        let mut cam = CameraController::new();
        assert!(!cam.take_redraw_request());
        cam.nudge(Direction::Right);
        assert!(cam.take_redraw_request());
        assert!(!cam.take_redraw_request());
    }

    #[test]
    fn test_arrow_keys_handled() {
        let mut cam = CameraController::new();
        assert!(cam.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed));
        assert!(cam.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed));
        assert!((cam.eye().x - 4.9).abs() < EPSILON);
        assert!((cam.eye().y - 5.1).abs() < EPSILON);
    }

    #[test]
    fn test_other_input_ignored() {
        let mut cam = CameraController::new();
        assert!(!cam.process_keyboard(KeyCode::KeyW, ElementState::Pressed));
        assert!(!cam.process_keyboard(KeyCode::Space, ElementState::Pressed));
        assert!(!cam.process_keyboard(KeyCode::ArrowLeft, ElementState::Released));
        assert_eq!(cam.eye(), DEFAULT_EYE);
        assert!(!cam.redraw_requested());
    }

    #[test]
    fn test_builders() {
        let mut cam = CameraController::new()
            .with_eye(Vec3::new(1.0, 2.0, 3.0))
            .with_step(0.5);
        cam.nudge(Direction::Right);
        assert_eq!(cam.eye(), Vec3::new(1.5, 2.0, 3.0));
    }

    #[test]
    fn test_status_text() {
        let cam = CameraController::new();
        assert_eq!(cam.status(), "eye (5.0, 5.0, 5.0)");
    }
}
