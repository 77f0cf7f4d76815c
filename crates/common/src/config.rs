//! YAML-backed configuration.
//!
//! Every section is `#[serde(default)]`, so a config file only needs the
//! fields it changes:
//! ```yaml
//! navigator:
//!   base_speed: 0.003
//!   clamp_pitch: false
//! bindings:
//!   q: descend
//! ```

use crate::types::Orientation;
use freefly_input::Action;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables for the first-person navigator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorSettings {
    /// Position at startup, world units.
    pub start_position: Vec3,
    pub start_orientation: Orientation,
    /// Radians of rotation per pixel of pointer motion.
    pub sensitivity: f32,
    /// World units per millisecond without the fast modifier.
    pub base_speed: f32,
    /// World units per millisecond with the fast modifier held.
    pub fast_speed: f32,
    /// Vertical field of view, degrees.
    pub fov_y_degrees: f32,
    /// Near clip plane distance. The far plane is at infinity.
    pub near: f32,
    /// Keep pitch within straight up / straight down.
    pub clamp_pitch: bool,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 2.0, 3.5),
            start_orientation: Orientation::default(),
            sensitivity: 0.0025,
            base_speed: 0.0015,
            fast_speed: 0.01,
            fov_y_degrees: 72.0,
            near: 0.1,
            clamp_pitch: true,
        }
    }
}

impl NavigatorSettings {
    /// Vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y_degrees.to_radians()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("navigator.sensitivity", self.sensitivity)?;
        positive("navigator.base_speed", self.base_speed)?;
        positive("navigator.fast_speed", self.fast_speed)?;
        positive("navigator.near", self.near)?;
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(ConfigError::Invalid {
                field: "navigator.fov_y_degrees",
                reason: format!("{} is outside (0, 180)", self.fov_y_degrees),
            });
        }
        if !self.start_position.is_finite() {
            return Err(ConfigError::Invalid {
                field: "navigator.start_position",
                reason: "must be finite".into(),
            });
        }
        Ok(())
    }
}

/// Desktop window parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Upper bound on the per-frame elapsed time fed to the navigator, ms.
    /// Keeps a stalled frame (window drag, breakpoint) from teleporting the camera.
    pub max_frame_ms: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Freefly".into(),
            width: 1280,
            height: 720,
            max_frame_ms: 100.0,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeflyConfig {
    pub navigator: NavigatorSettings,
    pub window: WindowSettings,
    /// Extra key bindings, key name -> action name. Merged over the built-in set.
    pub bindings: BTreeMap<String, String>,
}

impl FreeflyConfig {
    /// Load and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                tracing::debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.navigator.validate()?;
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid {
                field: "window",
                reason: format!(
                    "size {}x{} has a zero dimension",
                    self.window.width, self.window.height
                ),
            });
        }
        positive("window.max_frame_ms", self.window.max_frame_ms)?;
        for (key, action) in &self.bindings {
            if key.trim().is_empty() && key != " " {
                return Err(ConfigError::Invalid {
                    field: "bindings",
                    reason: format!("empty key name bound to `{action}`"),
                });
            }
            if action.parse::<Action>().is_err() {
                return Err(ConfigError::Invalid {
                    field: "bindings",
                    reason: format!("key `{key}` is bound to unknown action `{action}`"),
                });
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be a positive finite number"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = FreeflyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.navigator.sensitivity, 0.0025);
        assert_eq!(config.navigator.fov_y_degrees, 72.0);
        assert!(config.bindings.is_empty());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = FreeflyConfig::from_yaml_str(
            "navigator:\n  base_speed: 0.003\n  clamp_pitch: false\n",
        )
        .unwrap();
        assert_eq!(config.navigator.base_speed, 0.003);
        assert!(!config.navigator.clamp_pitch);
        assert_eq!(config.navigator.fast_speed, 0.01);
        assert_eq!(config.window, WindowSettings::default());
    }

    #[test]
    fn yaml_roundtrip_matches_default() {
        let config = FreeflyConfig::default();
        let text = config.to_yaml().unwrap();
        let back = FreeflyConfig::from_yaml_str(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn rejects_non_positive_speed() {
        let err = FreeflyConfig::from_yaml_str("navigator:\n  fast_speed: 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "navigator.fast_speed",
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_fov() {
        let err =
            FreeflyConfig::from_yaml_str("navigator:\n  fov_y_degrees: 180.0\n").unwrap_err();
        assert!(err.to_string().contains("fov_y_degrees"));
    }

    #[test]
    fn rejects_unknown_binding_action() {
        let err = FreeflyConfig::from_yaml_str("bindings:\n  j: jump\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "bindings", .. }));
        assert!(err.to_string().contains("jump"));
    }

    #[test]
    fn accepts_known_binding_actions() {
        let config =
            FreeflyConfig::from_yaml_str("bindings:\n  q: Descend\n  r: move_forward\n").unwrap();
        assert_eq!(config.bindings.len(), 2);
    }

    #[test]
    fn rejects_zero_window() {
        let err = FreeflyConfig::from_yaml_str("window:\n  width: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "window", .. }));
    }

    #[test]
    fn malformed_yaml_is_yaml_error() {
        let err = FreeflyConfig::from_yaml_str("navigator: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bindings:\n  q: descend\nwindow:\n  title: Test").unwrap();

        let config = FreeflyConfig::load(file.path()).unwrap();
        assert_eq!(config.window.title, "Test");
        assert_eq!(config.bindings.get("q").map(String::as_str), Some("descend"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FreeflyConfig::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_or_default_without_path() {
        let config = FreeflyConfig::load_or_default(None).unwrap();
        assert_eq!(config, FreeflyConfig::default());
    }
}
