//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`QSN_SECTION__KEY`)
//!
//! Every field defaults to the compiled-in constant, so a missing file or
//! section leaves the viewer unchanged.

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use qsn_core::{constants, RandomSource, SceneAssembler, Tetrahedron};
use qsn_input::{CameraController, DEFAULT_EYE, NUDGE_STEP};
use qsn_math::Vec3;
use qsn_render::{
    pipeline::TRIANGLE_VERTEX_COUNT, FrameStyle, Projection, BACKGROUND_COLOR, PRIMITIVE_COLOR,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Scene generation configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`QSN_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // QSN_SCENE__NUM_TETRAHEDRA=100 -> scene.num_tetrahedra = 100
        figment = figment.merge(Env::prefixed("QSN_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the generator and renderer cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scene.validate()
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Quasicrystalline Spin Network (QSN)".to_string(),
            width: 800,
            height: 600,
            vsync: true,
        }
    }
}

/// Scene generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Tetrahedra generated per frame
    pub num_tetrahedra: usize,
    /// Base tetrahedron scale (must be positive)
    pub size: f32,
    /// Seed of the randomness stream
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            num_tetrahedra: constants::NUM_TETRAHEDRA,
            size: constants::TETRAHEDRON_SIZE,
            seed: constants::DEFAULT_SEED,
        }
    }
}

impl SceneConfig {
    /// Largest frame whose vertex count fits a single `u32` draw range
    pub const MAX_TETRAHEDRA: usize = (u32::MAX as usize)
        / (Tetrahedron::FACES.len() * TRIANGLE_VERTEX_COUNT);

    /// Check that the scene can be generated and drawn
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::invalid(format!(
                "scene.size must be a positive number, got {}",
                self.size
            )));
        }
        if self.num_tetrahedra > Self::MAX_TETRAHEDRA {
            return Err(ConfigError::invalid(format!(
                "scene.num_tetrahedra must be at most {}, got {}",
                Self::MAX_TETRAHEDRA,
                self.num_tetrahedra
            )));
        }
        Ok(())
    }

    /// Build the scene assembler for these settings
    pub fn to_assembler(&self) -> SceneAssembler {
        SceneAssembler::new()
            .with_num_tetrahedra(self.num_tetrahedra)
            .with_size(self.size)
    }

    /// Seed a fresh randomness stream
    pub fn to_random_source(&self) -> RandomSource {
        RandomSource::new(self.seed)
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting eye position, written as `[x, y, z]` or `{ x, y, z }`
    pub eye: Vec3,
    /// Distance moved per arrow key press
    pub step: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: DEFAULT_EYE,
            step: NUDGE_STEP,
            fov: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraConfig {
    /// Build the camera controller for these settings
    pub fn to_controller(&self) -> CameraController {
        CameraController::new()
            .with_eye(self.eye)
            .with_step(self.step)
    }

    /// Projection for a surface with the given aspect ratio
    pub fn projection(&self, aspect: f32) -> Projection {
        Projection {
            fov_y: self.fov.to_radians(),
            aspect,
            near: self.near,
            far: self.far,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Color of every tetrahedron face [r, g, b, a]
    pub primitive_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: BACKGROUND_COLOR,
            primitive_color: PRIMITIVE_COLOR,
        }
    }
}

impl RenderingConfig {
    pub fn style(&self) -> FrameStyle {
        FrameStyle {
            background: self.background_color,
            primitive: self.primitive_color,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: String) -> Self {
        ConfigError { message }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
