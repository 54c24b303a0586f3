//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SKYROLL_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use skyroll_core::ScrollParams;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Scroll configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            scroll: ScrollConfig::default(),
            rendering: RenderingConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SKYROLL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // SKYROLL_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("SKYROLL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Virtual (pre-magnification) width in pixels
    pub virtual_width: u32,
    /// Virtual (pre-magnification) height in pixels
    pub virtual_height: u32,
    /// Initial whole-number scale of the virtual resolution
    pub magnification: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Skyroll".to_string(),
            virtual_width: 512,
            virtual_height: 288,
            magnification: 3,
            fullscreen: false,
            vsync: false,
        }
    }
}

impl WindowConfig {
    /// Virtual resolution as a pair.
    pub fn virtual_size(&self) -> (u32, u32) {
        (self.virtual_width, self.virtual_height)
    }
}

/// Scroll configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Horizontal acceleration while a key is held (px/s^2)
    pub x_accel: f32,
    /// Horizontal speed limit (px/s)
    pub x_max_speed: f32,
    /// Damping factor applied per second while coasting
    pub x_damping: f32,
    /// Vertical oscillation acceleration (px/s^2)
    pub y_accel: f32,
    /// Vertical speed limit (px/s)
    pub y_max_speed: f32,
    /// Lower edge of the vertical band (px)
    pub y_min: f32,
    /// Upper edge of the vertical band (px)
    pub y_max: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            x_accel: 64.0,
            x_max_speed: 128.0,
            x_damping: 0.05,
            y_accel: 16.0,
            y_max_speed: 128.0,
            y_min: 256.0,
            y_max: 512.0,
        }
    }
}

impl ScrollConfig {
    /// Convert to the core kinematics parameters.
    pub fn to_scroll_params(&self) -> ScrollParams {
        ScrollParams {
            x_accel: self.x_accel,
            x_max_speed: self.x_max_speed,
            x_damping: self.x_damping,
            y_accel: self.y_accel,
            y_max_speed: self.y_max_speed,
            y_min: self.y_min,
            y_max: self.y_max,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Path of the backdrop image; the built-in backdrop is used when the
    /// file cannot be loaded
    pub backdrop_path: String,
    /// Render at virtual resolution offscreen, then blit to the window
    pub offscreen: bool,
    /// Letterbox/clear color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            backdrop_path: "assets/backdrop.png".to_string(),
            offscreen: false,
            background_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Append the most recent FPS sample to the window title
    pub fps_in_title: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            fps_in_title: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.virtual_width, 512);
        assert_eq!(config.window.virtual_height, 288);
        assert_eq!(config.scroll.x_accel, 64.0);
        assert!(!config.rendering.offscreen);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("x_accel"));
        assert!(toml.contains("backdrop_path"));
    }

    #[test]
    fn test_scroll_params_conversion() {
        let config = ScrollConfig::default();
        let params = config.to_scroll_params();
        assert_eq!(params.y_min, config.y_min);
        assert_eq!(params.y_max, config.y_max);
        assert_eq!(params.x_damping, config.x_damping);
    }
}
