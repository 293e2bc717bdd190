//! Render configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a render configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Render configuration.
///
/// Missing fields in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output image width in pixels
    pub image_width: u32,
    /// Image width / height
    pub aspect_ratio: f64,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Seed for the random stream; drawn from entropy when absent
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: None,
        }
    }
}

impl RenderConfig {
    /// Low quality settings for fast previews.
    pub fn quick() -> Self {
        Self {
            image_width: 200,
            samples_per_pixel: 10,
            max_depth: 10,
            ..Default::default()
        }
    }

    /// Image height derived from width and aspect ratio, at least 1.
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f64 / self.aspect_ratio) as u32).max(1)
    }

    /// Parse a JSON config.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject settings the renderer cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.image_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "image_width",
                message: "must be at least 1".into(),
            });
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "aspect_ratio",
                message: format!("must be positive, got {}", self.aspect_ratio),
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::InvalidValue {
                field: "samples_per_pixel",
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
