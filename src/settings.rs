//! Runtime settings
//!
//! Read from a JSON file at startup. Missing fields take their defaults, so a
//! file only needs the values it changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{CLOUD_COUNT, DAY_LENGTH_MS, FPS, MIN_SPAWN_INTERVAL_MS, STAR_COUNT};
use crate::sim::SimConfig;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "NINJA_RUNNER_SETTINGS";
/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "ninja_runner.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames per second the loop aims for
    pub target_fps: u32,
    /// Run seed; random when absent
    pub seed: Option<u64>,
    pub star_count: usize,
    pub cloud_count: usize,
    /// Length of each day or night phase (ms)
    pub day_length_ms: f32,
    /// Show the controls line in the HUD
    pub show_controls_hint: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: FPS,
            seed: None,
            star_count: STAR_COUNT,
            cloud_count: CLOUD_COUNT,
            day_length_ms: DAY_LENGTH_MS,
            show_controls_hint: true,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults on any failure
    ///
    /// The file is `$NINJA_RUNNER_SETTINGS` if set, else `ninja_runner.json`
    /// in the working directory. A missing default file is not an error.
    pub fn load() -> Self {
        let explicit = std::env::var_os(SETTINGS_ENV).map(PathBuf::from);
        let path = explicit
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e))
                if explicit.is_none() && e.kind() == std::io::ErrorKind::NotFound =>
            {
                log::debug!("No {} found, using default settings", DEFAULT_SETTINGS_FILE);
                Self::default()
            }
            Err(e) => {
                log::warn!("{} ({}); using default settings", e, path.display());
                Self::default()
            }
        }
    }

    /// Read and sanitize a settings file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and sanitize settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Clamp values into their usable ranges
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.target_fps = self.target_fps.max(1);
        self.star_count = self.star_count.max(1);
        self.cloud_count = self.cloud_count.max(1);
        if !(self.day_length_ms.is_finite() && self.day_length_ms > 0.0) {
            log::debug!(
                "day_length_ms {} out of range, using {}",
                self.day_length_ms,
                defaults.day_length_ms
            );
            self.day_length_ms = defaults.day_length_ms;
        }
        self
    }

    /// Simulation tunables derived from these settings
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            cloud_count: self.cloud_count,
            star_count: self.star_count,
            day_length_ms: self.day_length_ms,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,
        }
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let settings = Settings::from_json(r#"{ "seed": 7, "star_count": 12 }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.star_count, 12);
        assert_eq!(settings.cloud_count, CLOUD_COUNT);
        assert_eq!(settings.target_fps, FPS);
        assert!(settings.show_controls_hint);
        assert_eq!(settings.resolve_seed(), 7);
    }

    #[test]
    fn test_out_of_range_values_sanitized() {
        let settings = Settings::from_json(
            r#"{ "target_fps": 0, "star_count": 0, "cloud_count": 0, "day_length_ms": -5.0 }"#,
        )
        .unwrap();
        assert_eq!(settings.target_fps, 1);
        assert_eq!(settings.star_count, 1);
        assert_eq!(settings.cloud_count, 1);
        assert_eq!(settings.day_length_ms, DAY_LENGTH_MS);
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_json("{ \"target_fps\": \"fast\" }").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("invalid settings"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("ninja_runner_no_such_settings.json");
        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("ninja_runner_settings_{}.json", std::process::id()));
        fs::write(&path, r#"{ "day_length_ms": 500.0, "show_controls_hint": false }"#).unwrap();
        let settings = Settings::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(settings.day_length_ms, 500.0);
        assert!(!settings.show_controls_hint);
    }

    #[test]
    fn test_sim_config() {
        let settings = Settings {
            star_count: 5,
            cloud_count: 2,
            day_length_ms: 1000.0,
            ..Default::default()
        };
        let config = settings.sim_config();
        assert_eq!(config.star_count, 5);
        assert_eq!(config.cloud_count, 2);
        assert_eq!(config.day_length_ms, 1000.0);
        assert_eq!(config.min_spawn_interval_ms, MIN_SPAWN_INTERVAL_MS);
    }
}
