//! Render settings.
//!
//! Settings start from [`RenderSettings::default`], may be overridden by a
//! JSON file, and are then overridden again by command line flags. Missing
//! keys in the file keep their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid setting `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Final tone operator applied after gamma encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tonemap {
    /// Hard clamp to [0, 1]
    #[default]
    Clamp,
    /// Reinhard `c / (1 + c)`, then clamp
    Reinhard,
}

/// Resolution, sampling and tone settings for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Camera rays per pixel
    pub samples_per_pixel: u32,
    /// Maximum scatter depth before a path is cut off
    pub max_depth: u32,
    /// Base seed for the per-row random streams
    pub seed: u64,
    /// Worker threads; `None` lets rayon pick
    pub threads: Option<usize>,
    /// Display gamma used for encoding
    pub gamma: f32,
    pub tonemap: Tonemap,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
            threads: None,
            gamma: 2.2,
            tonemap: Tonemap::Clamp,
        }
    }
}

impl RenderSettings {
    /// Load settings from a JSON file and validate them.
    pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_json(&text).map_err(|err| match err {
            SettingsError::Parse { source, .. } => SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        log::debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Parse settings from a JSON string and validate them.
    pub fn from_json(text: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(text).map_err(|source| SettingsError::Parse {
            path: PathBuf::from("<string>"),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings describe a renderable image.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.width == 0 {
            return Err(invalid("width", "must be at least 1"));
        }
        if self.height == 0 {
            return Err(invalid("height", "must be at least 1"));
        }
        if self.samples_per_pixel == 0 {
            return Err(invalid("samples_per_pixel", "must be at least 1"));
        }
        if self.threads == Some(0) {
            return Err(invalid("threads", "must be at least 1 when set"));
        }
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(invalid("gamma", format!("must be positive, got {}", self.gamma)));
        }
        Ok(())
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

fn invalid(name: &'static str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        name,
        reason: reason.into(),
    }
}
