//! Application settings.

use rubik_core::SimConfig;
use serde::{Deserialize, Serialize};

/// Camera behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Degrees of orbit per pixel of pointer travel.
    pub orbit_sens: f32,
    /// Distance change per scroll notch.
    pub zoom_step: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            orbit_sens: 0.4,
            zoom_step: 1.0,
        }
    }
}

/// Viewport display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [24, 24, 30],
        }
    }
}

/// Menu-button hover animation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoverSettings {
    /// Scale a hovered button grows toward (1.1 = 110%).
    pub target_scale: f32,
    /// Full rest-to-target animation time, seconds.
    pub duration: f32,
}

impl Default for HoverSettings {
    fn default() -> Self {
        Self {
            target_scale: 1.1,
            duration: 0.15,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 15.0 }
    }
}

/// All application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// Simulation tunables (spacing, speed, scramble length, drag threshold)
    #[serde(default)]
    pub sim: SimConfig,
    /// Camera settings
    pub camera: CameraSettings,
    /// Viewport settings
    pub viewport: ViewportSettings,
    /// Hover animation settings
    pub hover: HoverSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl AppSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "rubik", "rubik") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    return settings;
                }
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "rubik", "rubik") {
            let config_dir = dirs.config_dir();
            if std::fs::create_dir_all(config_dir).is_ok() {
                let config_path = config_dir.join("settings.json");
                if let Ok(json) = serde_json::to_string_pretty(self) {
                    if let Err(e) = std::fs::write(config_path, json) {
                        tracing::error!("Failed to write settings: {e}");
                    }
                }
            }
        }
    }
}
