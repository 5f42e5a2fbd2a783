//! Viewer options
//!
//! Defaults for the camera and renderer of a 3D viewer, merged with user
//! overrides and validated. Options files may be JSON or TOML and live in
//! the platform config directory by default.
//!
//! Options are organized into two sections:
//! - Camera (clip planes, field of view)
//! - Renderer (backend, frame cap, buffer flags)

use crate::merge::assign;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shapekit_core::{ConfigError, Error, FrameLoop, FramePacer, Result};
use std::path::{Path, PathBuf};

/// Rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererBackend {
    #[default]
    Webgl,
    Webgpu,
}

impl std::fmt::Display for RendererBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Webgl => write!(f, "webgl"),
            Self::Webgpu => write!(f, "webgpu"),
        }
    }
}

/// Perspective camera settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraOptions {
    /// Near clip plane distance
    pub near: f64,
    /// Far clip plane distance
    pub far: f64,
    /// Vertical field of view in degrees
    pub fov: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 10000.0,
            fov: 75.0,
        }
    }
}

/// Renderer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererOptions {
    pub backend: RendererBackend,
    /// Frame cap; `None` renders on every animation frame
    pub limit_fps: Option<f64>,
    /// Render the scene on each frame that is not skipped
    pub open_render: bool,
    pub antialias: bool,
    pub preserve_drawing_buffer: bool,
    pub logarithmic_depth_buffer: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            backend: RendererBackend::Webgl,
            limit_fps: None,
            open_render: true,
            antialias: true,
            preserve_drawing_buffer: false,
            logarithmic_depth_buffer: false,
        }
    }
}

impl RendererOptions {
    /// Frame pacer honouring `limit_fps`
    pub fn frame_pacer(&self) -> FramePacer {
        FramePacer::new(self.limit_fps)
    }

    pub fn frame_loop(&self) -> FrameLoop {
        FrameLoop::new(self.limit_fps)
    }
}

/// Complete viewer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ViewerOptions {
    pub camera: CameraOptions,
    pub renderer: RendererOptions,
}

fn invalid(key: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        reason: reason.into(),
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> std::result::Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl ViewerOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `overrides` over the defaults, then validate.
    ///
    /// Overrides may be partial: `{"camera": {"fov": 50}}` only changes the
    /// field of view.
    pub fn resolve(overrides: &Value) -> std::result::Result<Self, ConfigError> {
        let defaults =
            serde_json::to_value(Self::default()).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let merged = assign(&defaults, overrides);
        let options: Self =
            serde_json::from_value(merged).map_err(|e| ConfigError::Parse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Validate option ranges
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let camera = &self.camera;
        if !(camera.near > 0.0) {
            return Err(invalid("camera.near", "must be > 0"));
        }
        if !(camera.far > camera.near) {
            return Err(invalid("camera.far", "must be greater than camera.near"));
        }
        if !(camera.fov > 0.0 && camera.fov < 180.0) {
            return Err(invalid("camera.fov", "must be between 0 and 180 degrees"));
        }

        if let Some(fps) = self.renderer.limit_fps {
            if !(fps > 0.0) {
                return Err(invalid("renderer.limit_fps", "must be > 0"));
            }
        }

        Ok(())
    }

    /// Load options from file (JSON or TOML), merged over the defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let overrides: Value = match format {
            Format::Json => serde_json::from_str(&content)
                .map_err(|e| ConfigError::Parse(format!("Invalid JSON options: {}", e)))?,
            Format::Toml => {
                let table: toml::Table = toml::from_str(&content)
                    .map_err(|e| ConfigError::Parse(format!("Invalid TOML options: {}", e)))?;
                serde_json::to_value(table).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
        };

        let options = Self::resolve(&overrides)?;
        tracing::debug!("Loaded viewer options from {}", path.display());
        Ok(options)
    }

    /// Save options to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::Parse(format!("Failed to serialize options: {}", e)))?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| ConfigError::Parse(format!("Failed to serialize options: {}", e)))?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved viewer options to {}", path.display());

        Ok(())
    }

    /// `<config dir>/shapekit/viewer.toml`, when the platform has a config
    /// directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shapekit").join("viewer.toml"))
    }

    /// Load from [`ViewerOptions::default_path`], or fall back to the
    /// defaults when there is no file there.
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            Some(path) => {
                tracing::debug!(
                    "No viewer options at {}, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            None => {
                tracing::debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }
}

impl TryFrom<&Value> for ViewerOptions {
    type Error = Error;

    fn try_from(overrides: &Value) -> Result<Self> {
        Ok(Self::resolve(overrides)?)
    }
}
