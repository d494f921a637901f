//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/neurograph/config.toml` (XDG) or platform config dir
//! 3. Project config: `.neurograph.toml`
//! 4. Environment variables: `NEUROGRAPH_*`, with `__` between nested keys
//!    (e.g. `NEUROGRAPH_CAMERA__SMOOTH_TIME=1.2`)
//!
//! Every key is optional:
//! ```toml
//! [window]
//! width = 1600.0
//!
//! [camera]
//! smooth_time = 1.0
//!
//! [scene]
//! stars = 2000
//! ```

use std::ops::Deref;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::from(<figment::Error as serde::de::Error>::custom(message))
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
    pub overlay: OverlayConfig,
}

/// Primary window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Neuro-Architectural Visualizer".to_string(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Camera transition and user-control settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Seconds a framing transition takes to (almost) settle.
    pub smooth_time: f32,
    /// Closest the camera may dolly to its target.
    pub min_distance: f32,
    /// Farthest the camera may dolly from its target.
    pub max_distance: f32,
    /// Radians of orbit per pixel of drag.
    pub rotate_speed: f32,
    /// Fraction of distance covered per scroll line.
    pub dolly_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            smooth_time: 0.8,
            min_distance: 5.0,
            max_distance: 30.0,
            rotate_speed: 0.005,
            dolly_speed: 0.5,
        }
    }
}

/// Decorative environment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for star and sparkle placement.
    pub seed: u64,
    /// Number of background stars.
    pub stars: usize,
    /// Number of drifting sparkles around the graph.
    pub sparkles: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed_cafe,
            stars: 5000,
            sparkles: 200,
        }
    }
}

/// 2D overlay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Detail panel width in logical pixels.
    pub panel_width: f32,
    /// Duration of the panel slide in/out.
    pub slide_seconds: f32,
    /// Minimum time the loading screen stays up.
    pub loading_min_seconds: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            panel_width: 450.0,
            slide_seconds: 0.35,
            loading_min_seconds: 0.6,
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// The full provider stack used by [`Config::load`].
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            // Layer 1: User config (lowest file priority)
            .merge(Toml::file(Self::user_config_path()))
            // Layer 2: Project config
            .merge(Toml::file(".neurograph.toml"))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("NEUROGRAPH_").split("__"))
    }

    /// Extract a config from an arbitrary provider stack.
    ///
    /// Values that would break the scene at runtime (an inverted zoom range,
    /// a non-positive smoothing time or panel width) are rejected here.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that `serde` cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails both comparisons.
        let positive = |value: f32| value > 0.0;
        let camera = &self.camera;
        if !(positive(camera.min_distance) && camera.min_distance <= camera.max_distance) {
            return Err(invalid(format!(
                "camera.min_distance ({}) must be positive and at most camera.max_distance ({})",
                camera.min_distance, camera.max_distance
            )));
        }
        if !positive(camera.smooth_time) {
            return Err(invalid(format!(
                "camera.smooth_time ({}) must be positive",
                camera.smooth_time
            )));
        }
        if !positive(self.overlay.panel_width) {
            return Err(invalid(format!(
                "overlay.panel_width ({}) must be positive",
                self.overlay.panel_width
            )));
        }
        Ok(())
    }

    /// User config path: ~/.config/neurograph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("neurograph").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("neurograph").join("config.toml"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_defaults_without_any_file() {
        let config = Config::from_figment(Figment::from(Serialized::defaults(Config::default())))
            .unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.camera.smooth_time, 0.8);
        assert_eq!(config.camera.min_distance, 5.0);
        assert_eq!(config.camera.max_distance, 30.0);
        assert_eq!(config.overlay.panel_width, 450.0);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let figment = Figment::from(Serialized::defaults(Config::default())).merge(Toml::string(
            r#"
            [camera]
            smooth_time = 1.5

            [scene]
            stars = 10
            "#,
        ));
        let config = Config::from_figment(figment).unwrap();
        assert_eq!(config.camera.smooth_time, 1.5);
        assert_eq!(config.camera.max_distance, 30.0);
        assert_eq!(config.scene.stars, 10);
        assert_eq!(config.scene.sparkles, 200);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_toml_file_layer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window]\ntitle = \"Custom\"\nwidth = 800.0").unwrap();

        let figment =
            Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(file.path()));
        let config = Config::from_figment(figment).unwrap();
        assert_eq!(config.window.title, "Custom");
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 720.0);
    }

    #[test]
    fn test_invalid_type_is_an_error() {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string("[scene]\nstars = \"many\""));
        assert!(Config::from_figment(figment).is_err());
    }

    #[test]
    fn test_min_distance_above_max_is_an_error() {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string("[camera]\nmin_distance = 40.0"));
        let err = Config::from_figment(figment).unwrap_err();
        assert!(err.to_string().contains("camera.min_distance"));
    }

    #[test]
    fn test_non_positive_values_are_errors() {
        for toml in [
            "[camera]\nmin_distance = 0.0",
            "[camera]\nmin_distance = -3.0",
            "[camera]\nsmooth_time = 0.0",
            "[overlay]\npanel_width = 0.0",
        ] {
            let figment =
                Figment::from(Serialized::defaults(Config::default())).merge(Toml::string(toml));
            assert!(Config::from_figment(figment).is_err(), "{toml}");
        }
    }

    #[test]
    fn test_nan_distance_is_an_error() {
        let mut config = Config::default();
        config.camera.max_distance = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_equal_zoom_limits_are_valid() {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string("[camera]\nmin_distance = 12.0\nmax_distance = 12.0"));
        let config = Config::from_figment(figment).unwrap();
        assert_eq!(config.camera.min_distance, 12.0);
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_env_overrides_nested_keys() {
        std::env::set_var("NEUROGRAPH_CAMERA__SMOOTH_TIME", "2.5");
        std::env::set_var("NEUROGRAPH_OVERLAY__PANEL_WIDTH", "300");
        let config = Config::load();
        std::env::remove_var("NEUROGRAPH_CAMERA__SMOOTH_TIME");
        std::env::remove_var("NEUROGRAPH_OVERLAY__PANEL_WIDTH");

        let config = config.unwrap();
        assert_eq!(config.camera.smooth_time, 2.5);
        assert_eq!(config.overlay.panel_width, 300.0);
    }
}
