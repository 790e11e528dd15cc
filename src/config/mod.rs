// SPDX-License-Identifier: MPL-2.0
//! Loading and saving relocation settings from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[offset]` - `dx` and `dy` applied to the input image
//! - `[output]` - canvas background and optional fixed canvas size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `IMAGE_RELOCATE_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use image_relocate::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.offset.dx = 12;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rectangle};
use crate::raster::origin_canvas;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Section Structs
// =============================================================================

/// Offset applied to the source image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OffsetConfig {
    #[serde(default = "default_dx")]
    pub dx: i32,
    #[serde(default = "default_dy")]
    pub dy: i32,
}

impl OffsetConfig {
    #[must_use]
    pub fn as_point(&self) -> Point {
        Point::new(self.dx, self.dy)
    }
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self {
            dx: DEFAULT_DX,
            dy: DEFAULT_DY,
        }
    }
}

/// How the relocated image is rendered to a file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Canvas fill color as `[r, g, b, a]`.
    #[serde(default = "default_background")]
    pub background: [u8; 4],

    /// Fixed canvas width; defaults to reaching the image's right edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_width: Option<u32>,

    /// Fixed canvas height; defaults to reaching the image's bottom edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_height: Option<u32>,
}

impl OutputConfig {
    #[must_use]
    pub fn background(&self) -> Rgba {
        Rgba::from(self.background)
    }

    /// Returns the canvas, anchored at (0, 0), for an image with `bounds`.
    ///
    /// Fails when either side exceeds [`MAX_CANVAS_SIDE`] or the area exceeds
    /// [`MAX_CANVAS_PIXELS`].
    pub fn canvas(&self, bounds: Rectangle) -> Result<Rectangle> {
        let fitted = origin_canvas(bounds);
        let width = self.canvas_width.unwrap_or(fitted.width());
        let height = self.canvas_height.unwrap_or(fitted.height());
        if width > MAX_CANVAS_SIDE
            || height > MAX_CANVAS_SIDE
            || u64::from(width) * u64::from(height) > MAX_CANVAS_PIXELS
        {
            return Err(Error::Argument(format!(
                "canvas {width}x{height} exceeds the {MAX_CANVAS_PIXELS}-pixel limit \
                 (at most {MAX_CANVAS_SIDE} per side)"
            )));
        }
        Ok(Rectangle::from_size(Point::ZERO, width, height))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            canvas_width: None,
            canvas_height: None,
        }
    }
}

/// Complete settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub offset: OffsetConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_dx() -> i32 {
    DEFAULT_DX
}

fn default_dy() -> i32 {
    DEFAULT_DY
}

fn default_background() -> [u8; 4] {
    DEFAULT_BACKGROUND.to_array()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring `base_dir` and then the environment.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "ignoring unreadable config");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            offset: OffsetConfig { dx: -7, dy: 120 },
            output: OutputConfig {
                background: [1, 2, 3, 255],
                canvas_width: Some(64),
                canvas_height: None,
            },
        };

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        save_to_path(&config, &config_path).expect("failed to save config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[offset]\ndy = 5\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.offset, OffsetConfig { dx: 0, dy: 5 });
        assert_eq!(loaded.output, OutputConfig::default());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join(CONFIG_FILE);

        save_to_path(&Config::default(), &config_path).expect("failed to save config");
        assert!(config_path.exists());
    }

    #[test]
    fn load_with_override_reads_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            offset: OffsetConfig { dx: 3, dy: 4 },
            ..Config::default()
        };
        save_with_override(&config, Some(temp_dir.path().to_path_buf()))
            .expect("failed to save config");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, config);
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "offset = 3").expect("failed to write");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn canvas_defaults_to_image_extent() {
        let output = OutputConfig::default();
        assert_eq!(
            output.canvas(Rectangle::new(7, 7, 15, 15)).expect("canvas"),
            Rectangle::new(0, 0, 15, 15)
        );
    }

    #[test]
    fn canvas_size_overrides() {
        let output = OutputConfig {
            canvas_width: Some(4),
            ..OutputConfig::default()
        };
        assert_eq!(
            output.canvas(Rectangle::new(7, 7, 15, 15)).expect("canvas"),
            Rectangle::new(0, 0, 4, 15)
        );
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let output = OutputConfig {
            canvas_width: Some(100_000),
            canvas_height: Some(100_000),
            ..OutputConfig::default()
        };
        let bounds = Rectangle::new(0, 0, 1, 1);
        assert!(matches!(output.canvas(bounds), Err(Error::Argument(_))));

        let wide = OutputConfig {
            canvas_width: Some(u32::MAX),
            canvas_height: Some(0),
            ..OutputConfig::default()
        };
        assert!(matches!(wide.canvas(bounds), Err(Error::Argument(_))));
    }

    #[test]
    fn fitted_canvas_for_far_image_is_rejected() {
        let far = Rectangle::new(1_000_000, 1_000_000, 1_000_008, 1_000_008);
        assert!(matches!(
            OutputConfig::default().canvas(far),
            Err(Error::Argument(_))
        ));
    }

    #[test]
    fn default_background_is_transparent() {
        assert_eq!(Config::default().output.background(), Rgba::TRANSPARENT);
    }
}
