//! Configuration for the passing-stars viewer.
//!
//! Read from `config.toml` in the platform config directory. A missing
//! file means defaults; every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, ensure};
use directories::ProjectDirs;
use passing_stars_core::Quality;
use serde::{Deserialize, Serialize};

/// Name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Viewer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render resolution preset.
    pub quality: Quality,
    /// Letterbox the 4:3 render instead of stretching it.
    pub keep_aspect_ratio: bool,
    /// Multiplier applied to wall clock time.
    pub playback_speed: f32,
    /// Delay between frames in milliseconds.
    pub frame_interval_ms: u64,
    /// Log filter passed to the logger, e.g. `"info"` or `"debug"`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            keep_aspect_ratio: true,
            playback_speed: 1.0,
            frame_interval_ms: 33,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Platform directories for the app, if a home directory exists.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "passing-stars")
    }

    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults when there
    /// is no config directory or no file.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&contents)
            .wrap_err_with(|| format!("invalid config {}", path.display()))?;

        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)
            .wrap_err_with(|| format!("failed to write config {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.playback_speed.is_finite() && self.playback_speed >= 0.0,
            "playback_speed must be a finite non-negative number, got {}",
            self.playback_speed
        );
        ensure!(
            self.frame_interval_ms > 0,
            "frame_interval_ms must be greater than zero"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("quality = \"hi\"\nplayback_speed = 0.5\n").unwrap();
        assert_eq!(config.quality, Quality::High);
        assert_eq!(config.playback_speed, 0.5);
        assert!(config.keep_aspect_ratio);
        assert_eq!(config.frame_interval_ms, 33);
    }

    #[test]
    fn rejects_negative_speed() {
        assert!(Config::parse("playback_speed = -1.0").is_err());
    }

    #[test]
    fn rejects_zero_frame_interval() {
        assert!(Config::parse("frame_interval_ms = 0").is_err());
    }

    #[test]
    fn rejects_unknown_quality() {
        assert!(Config::parse("quality = \"ultra\"").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            quality: Quality::Low,
            keep_aspect_ratio: false,
            playback_speed: 2.0,
            frame_interval_ms: 16,
            log_level: "debug".to_string(),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn malformed_file_error_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "quality = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains(CONFIG_FILE));
    }
}
