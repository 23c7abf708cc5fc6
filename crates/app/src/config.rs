//! Demo configuration.
//!
//! Loaded from a YAML document. Every field has a default, so an empty file
//! (or no file at all) reproduces the stock scene.

use bouncebox_common::Color;
use bouncebox_input::KeyBindings;
use bouncebox_motion::MotionParams;
use bouncebox_render::RendererSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub renderer: RendererSettings,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub cube: CubeConfig,
    pub motion: MotionParams,
    pub bindings: KeyBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "bouncebox".into(),
            width: 500,
            height: 500,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            position: [0.0, 0.0, 5.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub color: Color,
    pub intensity: f32,
    pub position: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            intensity: 2.0,
            position: [1.0, 10.0, 3.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Width, height, depth.
    pub size: [f32; 3],
    pub color: Color,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: [1.0, 1.0, 1.0],
            color: Color::from_hex(0x00ff00),
        }
    }
}

impl DemoConfig {
    /// Read and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document; treat it as all defaults.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        let fov = self.camera.fov_degrees;
        if fov.is_nan() || fov <= 0.0 || fov >= 180.0 {
            return Err(ConfigError::Invalid(format!(
                "camera.fov_degrees must be in (0, 180), got {fov}"
            )));
        }
        if self.cube.size.iter().any(|s| s.is_nan() || *s <= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cube.size must be positive, got {:?}",
                self.cube.size
            )));
        }
        if self.light.intensity.is_nan() || self.light.intensity < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "light.intensity must be non-negative, got {}",
                self.light.intensity
            )));
        }
        let m = &self.motion;
        for (name, value) in [
            ("step_right", m.step_right),
            ("step_left", m.step_left),
            ("bound", m.bound),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "motion.{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !m.rotate_x.is_finite() || !m.rotate_y.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "motion rotation steps must be finite, got ({}, {})",
                m.rotate_x, m.rotate_y
            )));
        }
        Ok(())
    }
}
