//! Settings parser for the user-level config.toml
//!
//! Looks in the platform config dir (`~/.config/control-stairs/` on Linux)
//! unless an explicit path is given. Missing or unparseable files fall back
//! to defaults with a warning; a bad config never prevents startup.

use std::path::{Path, PathBuf};

use cstairs_core::prelude::*;
use cstairs_core::viewport::{DEFAULT_CANVAS_HEIGHT_PX, DEFAULT_COLUMN_PX};
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "control-stairs";

/// Global application settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub behavior: BehaviorSettings,
}

/// Canvas dimensions of the logical drawing space
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Logical canvas height in pixels, spread over the terminal rows
    pub canvas_height: f64,

    /// Logical pixels represented by one terminal column
    pub column_px: f64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            canvas_height: DEFAULT_CANVAS_HEIGHT_PX,
            column_px: DEFAULT_COLUMN_PX,
        }
    }
}

/// Interaction behavior toggles
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BehaviorSettings {
    /// Clear the hovered step when the terminal is resized. Off by
    /// default: hover survives a resize and keeps pointing at the same
    /// logical step in the recomputed geometry.
    pub reset_hover_on_resize: bool,
}

impl Settings {
    /// Floor the scale factors so degenerate values cannot produce a
    /// zero-sized logical space
    fn sanitized(mut self) -> Self {
        if self.ui.canvas_height < 1.0 {
            warn!(
                canvas_height = self.ui.canvas_height,
                "canvas_height below 1px, clamping"
            );
            self.ui.canvas_height = 1.0;
        }
        if self.ui.column_px < 1.0 {
            warn!(column_px = self.ui.column_px, "column_px below 1px, clamping");
            self.ui.column_px = 1.0;
        }
        self
    }
}

/// Default location of the config file, if a config dir exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit path, or the default location
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            debug!("no config dir on this platform, using defaults");
            return Settings::default();
        }
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings.sanitized()
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("config.toml");
        let settings = load_settings(Some(&missing));

        assert_eq!(settings.ui.canvas_height, 550.0);
        assert_eq!(settings.ui.column_px, 8.0);
        assert!(!settings.behavior.reset_hover_on_resize);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let config = r#"
[ui]
canvas_height = 700.0
column_px = 10.0

[behavior]
reset_hover_on_resize = true
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.ui.canvas_height, 700.0);
        assert_eq!(settings.ui.column_px, 10.0);
        assert!(settings.behavior.reset_hover_on_resize);
    }

    #[test]
    fn test_load_settings_partial_file_fills_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[behavior]\nreset_hover_on_resize = true\n").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.ui.canvas_height, 550.0);
        assert!(settings.behavior.reset_hover_on_resize);
    }

    #[test]
    fn test_load_settings_bad_toml_falls_back() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not toml at all [").unwrap();

        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_degenerate_scales_are_clamped() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ncanvas_height = 0.0\ncolumn_px = -3.0\n").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.ui.canvas_height, 1.0);
        assert_eq!(settings.ui.column_px, 1.0);
    }
}
