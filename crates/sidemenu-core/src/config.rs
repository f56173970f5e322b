#![forbid(unsafe_code)]

//! Plain-data panel options, loadable from TOML or JSON.
//!
//! ```toml
//! menu_position = "right"
//! open_menu_offset = 240.0
//! touch_to_close = true
//!
//! [spring]
//! friction = 10.0
//! ```
//!
//! ```rust,ignore
//! let config = PanelConfig::from_toml_file("sidemenu.toml")?;
//! let panel = SidePanel::new(viewport_width, config);
//! ```
//!
//! Every field is optional in a document; missing fields keep their
//! defaults. Values are taken as-is: zero or negative offsets and tolerances
//! are legal.
//!
//! Callbacks (`on_change`, gesture predicates, the animator) are not data and
//! are installed on [`SidePanel`](crate::panel::SidePanel) directly.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::animation::SpringConfig;
use crate::geometry::{DEFAULT_TOLERANCE, Geometry, MenuPosition};

/// Options for a [`SidePanel`](crate::panel::SidePanel).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct PanelConfig {
    /// Edge the menu is mounted on.
    pub menu_position: MenuPosition,
    /// Open distance; `None` means 2/3 of the viewport width.
    pub open_menu_offset: Option<f64>,
    /// Closed distance; `None` means 0.
    pub hidden_menu_offset: Option<f64>,
    /// Horizontal capture tolerance.
    pub tolerance_x: f64,
    /// Vertical capture tolerance.
    pub tolerance_y: f64,
    /// Static gesture lock. A dynamic predicate overrides this.
    pub disable_gestures: bool,
    /// Show a tap-to-close overlay over the content while open.
    pub touch_to_close: bool,
    /// Tuning for the default spring animator.
    pub spring: SpringConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            menu_position: MenuPosition::Left,
            open_menu_offset: None,
            hidden_menu_offset: None,
            tolerance_x: DEFAULT_TOLERANCE,
            tolerance_y: DEFAULT_TOLERANCE,
            disable_gestures: false,
            touch_to_close: false,
            spring: SpringConfig::default(),
        }
    }
}

impl PanelConfig {
    /// Resolve thresholds for a viewport of `viewport_width`.
    #[must_use]
    pub fn geometry(&self, viewport_width: f64) -> Geometry {
        let mut geometry = Geometry::from_viewport(viewport_width)
            .with_tolerance(self.tolerance_x, self.tolerance_y);
        if let Some(open) = self.open_menu_offset {
            geometry = geometry.with_open_offset(open);
        }
        if let Some(hidden) = self.hidden_menu_offset {
            geometry = geometry.with_hidden_offset(hidden);
        }
        geometry
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML document.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::TomlSer)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when loading or saving a panel configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// TOML serialization error.
    #[cfg(feature = "config")]
    TomlSer(toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::TomlSer(e) => write!(f, "TOML serialize error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::TomlSer(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
        }
    }
}
