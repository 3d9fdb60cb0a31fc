//! Tuning constants
//!
//! Everything the simulation needs as a number lives in `Tuning`. The defaults
//! reproduce the arcade feel of the game exactly; a `dasher.ron` file in the
//! working directory can override any subset of them (handy for slowing the
//! game down or pinning `dt` while debugging).

use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::assets::SheetGeometry;

/// Window width in pixels
pub const WINDOW_WIDTH: i32 = 512;
/// Window height in pixels
pub const WINDOW_HEIGHT: i32 = 380;
/// Window title
pub const WINDOW_TITLE: &str = "Dasher Game!";

/// Default tuning override file, looked up in the working directory
pub const TUNING_FILE: &str = "dasher.ron";

/// Error type for tuning loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid tuning: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Simulation and presentation tuning
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (pixels per second squared)
    pub gravity: f32,
    /// Velocity added on jump (pixels per second, negative = up)
    pub jump_velocity: f32,
    /// Horizontal velocity shared by obstacles and the finish line
    pub obstacle_velocity: f32,
    /// Horizontal gap between consecutive obstacles at spawn
    pub obstacle_spacing: f32,
    /// Inset applied to each side of an obstacle before collision testing
    pub collision_padding: f32,
    /// Seconds each player frame is held
    pub player_frame_duration: f32,
    /// Seconds each obstacle frame is held (0 = advance every frame)
    pub obstacle_frame_duration: f32,
    /// Scroll speeds for far, back and fore layers (pixels per second)
    pub layer_speeds: [f32; 3],
    /// Draw scale for background layers
    pub layer_scale: f32,
    /// Frame rate cap (0 = unlocked)
    pub target_fps: u32,
    /// Replace the measured frame time with a constant step
    pub fixed_dt: Option<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1000.0,
            jump_velocity: -600.0,
            obstacle_velocity: -250.0,
            obstacle_spacing: 300.0,
            collision_padding: 50.0,
            player_frame_duration: 1.0 / 12.0,
            obstacle_frame_duration: 0.0,
            layer_speeds: [20.0, 40.0, 80.0],
            layer_scale: 2.0,
            target_fps: 60,
            fixed_dt: None,
        }
    }
}

impl Tuning {
    /// Parse tuning from RON text and validate it
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = ron::from_str(s)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No {} found, using built-in tuning", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let tuning = Self::from_ron(&contents)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("obstacle_velocity", self.obstacle_velocity),
            ("obstacle_spacing", self.obstacle_spacing),
            ("collision_padding", self.collision_padding),
            ("player_frame_duration", self.player_frame_duration),
            ("obstacle_frame_duration", self.obstacle_frame_duration),
            ("layer_scale", self.layer_scale),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{} must be finite, got {}", name, value)));
            }
        }

        if self.player_frame_duration < 0.0 || self.obstacle_frame_duration < 0.0 {
            return Err(ConfigError::Invalid("frame durations must not be negative".to_string()));
        }
        if self.collision_padding < 0.0 {
            return Err(ConfigError::Invalid("collision_padding must not be negative".to_string()));
        }
        if self.layer_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!("layer_scale must be positive, got {}", self.layer_scale)));
        }
        if self.layer_speeds.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(ConfigError::Invalid("layer_speeds must be finite and non-negative".to_string()));
        }
        if let Some(dt) = self.fixed_dt {
            if !dt.is_finite() || dt <= 0.0 {
                return Err(ConfigError::Invalid(format!("fixed_dt must be positive, got {}", dt)));
            }
        }
        Ok(())
    }

    /// Reject padding that would shrink an obstacle past a single point.
    ///
    /// A padded cell of zero size still collides; a negative one never does.
    pub fn check_geometry(&self, geometry: &SheetGeometry) -> Result<(), ConfigError> {
        let cell = geometry.obstacle_frame;
        if 2.0 * self.collision_padding > cell.x.min(cell.y) {
            return Err(ConfigError::Invalid(format!(
                "collision_padding {} is more than half the {}x{} obstacle cell",
                self.collision_padding, cell.x, cell.y
            )));
        }
        Ok(())
    }

    /// Target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self.target_fps {
            0 => None,
            fps => Some(1.0 / fps as f64),
        }
    }
}
