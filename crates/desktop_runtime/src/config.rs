//! Desktop shell tuning loaded from `desktop.toml` at startup.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{AppId, Position, Size};

/// Configuration bundled into the shell binary.
pub const EMBEDDED_DESKTOP_CONFIG: &str = include_str!("../desktop.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Window manager limits and boot behavior.
pub struct DesktopConfig {
    /// Lowest z-index handed out; the counter wraps back here.
    pub z_index_floor: u32,
    /// Highest z-index handed out before wrapping.
    pub z_index_ceiling: u32,
    /// Height of the fixed top menu bar in pixels.
    pub menu_bar_height: i32,
    /// Viewport width below which windows are forced full-screen.
    pub compact_breakpoint: i32,
    /// Smallest width a resize gesture may produce.
    pub min_window_width: i32,
    /// Smallest height a resize gesture may produce.
    pub min_window_height: i32,
    /// Geometry used when a descriptor does not carry its own defaults.
    pub fallback_position: Position,
    /// Size used when a descriptor does not carry its own defaults.
    pub fallback_size: Size,
    /// Apps opened when the shell boots.
    pub boot_apps: Vec<AppId>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            z_index_floor: 10,
            z_index_ceiling: 9999,
            menu_bar_height: 32,
            compact_breakpoint: 768,
            min_window_width: 300,
            min_window_height: 200,
            fallback_position: Position { x: 100, y: 100 },
            fallback_size: Size {
                width: 600,
                height: 500,
            },
            boot_apps: vec![AppId::Welcome],
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a desktop configuration document is rejected.
pub enum ConfigError {
    /// The TOML document did not parse.
    #[error("invalid desktop config: {0}")]
    Parse(String),
    /// The z-index range is empty or inverted.
    #[error("z-index floor {floor} must be below ceiling {ceiling}")]
    ZIndexRange {
        /// Configured floor.
        floor: u32,
        /// Configured ceiling.
        ceiling: u32,
    },
    /// A minimum window dimension is not positive.
    #[error("minimum window size must be positive, got {width}x{height}")]
    MinimumSize {
        /// Configured minimum width.
        width: i32,
        /// Configured minimum height.
        height: i32,
    },
}

impl DesktopConfig {
    /// Parses and validates a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document fails to parse or describes impossible limits.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks range invariants the window manager relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.z_index_floor >= self.z_index_ceiling {
            return Err(ConfigError::ZIndexRange {
                floor: self.z_index_floor,
                ceiling: self.z_index_ceiling,
            });
        }
        if self.min_window_width <= 0 || self.min_window_height <= 0 {
            return Err(ConfigError::MinimumSize {
                width: self.min_window_width,
                height: self.min_window_height,
            });
        }
        Ok(())
    }

    /// Loads the embedded configuration, falling back to defaults when it is unusable.
    pub fn load_embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_DESKTOP_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                leptos::logging::warn!("desktop config rejected, using defaults: {err}");
                Self::default()
            }
        }
    }
}
