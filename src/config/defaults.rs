// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::color::Rgba;

/// Directory name under the platform config directory.
pub const APP_NAME: &str = "ImageRelocate";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "IMAGE_RELOCATE_CONFIG_DIR";

/// File name of the settings file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Horizontal offset applied when none is configured.
pub const DEFAULT_DX: i32 = 0;

/// Vertical offset applied when none is configured.
pub const DEFAULT_DY: i32 = 0;

/// Fill color for canvas pixels not covered by the image.
pub const DEFAULT_BACKGROUND: Rgba = Rgba::TRANSPARENT;

/// Largest canvas width or height accepted for rendering.
pub const MAX_CANVAS_SIDE: u32 = 32_768;

/// Largest canvas area, in pixels, accepted for rendering.
pub const MAX_CANVAS_PIXELS: u64 = 64 * 1024 * 1024;
