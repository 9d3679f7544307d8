use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::playback::{ArraySource, FixedArraySource, RandomArraySource, Speed};
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Largest array the bar chart can reasonably show.
pub const MAX_ARRAY_SIZE: usize = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub array: ArrayConfig,
    /// Initial speed dial
    pub speed: Speed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of elements per session
    pub size: usize,
    /// Inclusive lower bound for random values
    pub min: i32,
    /// Inclusive upper bound for random values
    pub max: i32,
    /// Seed for reproducible arrays (None = fresh randomness)
    pub seed: Option<u64>,
    /// Use this array for every session instead of random ones
    pub fixed: Option<Vec<i32>>,
}

impl ArrayConfig {
    pub fn range(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Build the source new sessions draw their arrays from.
    pub fn source(&self) -> Box<dyn ArraySource> {
        match (&self.fixed, self.seed) {
            (Some(array), _) => Box::new(FixedArraySource::new(array.clone())),
            (None, Some(seed)) => Box::new(RandomArraySource::seeded(self.size, self.range(), seed)),
            (None, None) => Box::new(RandomArraySource::new(self.size, self.range())),
        }
    }

    /// Clamp the size (and any fixed values) and make sure the value range
    /// is not empty.
    fn normalize(&mut self) {
        if let Some(values) = self.fixed.as_mut() {
            if values.len() > MAX_ARRAY_SIZE {
                tracing::warn!(
                    len = values.len(),
                    max = MAX_ARRAY_SIZE,
                    "Fixed array truncated"
                );
                values.truncate(MAX_ARRAY_SIZE);
            }
            self.size = values.len();
        }
        if self.size > MAX_ARRAY_SIZE {
            tracing::warn!(size = self.size, max = MAX_ARRAY_SIZE, "Array size clamped");
            self.size = MAX_ARRAY_SIZE;
        }
        if self.min > self.max {
            tracing::warn!(min = self.min, max = self.max, "Array bounds swapped");
            std::mem::swap(&mut self.min, &mut self.max);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            array: ArrayConfig {
                size: 10,
                min: 10,
                max: 99,
                seed: None,
                fixed: None,
            },
            speed: Speed::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlArrayConfig {
    pub size: Option<usize>,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub seed: Option<u64>,
    pub values: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlPlaybackConfig {
    pub speed: Option<i64>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Array generation
    pub array: Option<TomlArrayConfig>,
    /// Playback defaults
    pub playback: Option<TomlPlaybackConfig>,
}

impl Config {
    /// Load configuration from the data directory, merging with defaults.
    ///
    /// A missing or unreadable file falls back to defaults; the problem is
    /// logged rather than returned.
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        match Self::load_from(&config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %config_file.display(), error = %e, "Using default config");
                Config::default()
            }
        }
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();
        config.merge(toml_config);
        Ok(config)
    }

    fn merge(&mut self, toml_config: TomlConfig) {
        // Load array configuration
        if let Some(array) = toml_config.array {
            if let Some(size) = array.size {
                self.array.size = size;
            }
            if let Some(min) = array.min {
                self.array.min = min;
            }
            if let Some(max) = array.max {
                self.array.max = max;
            }
            if array.seed.is_some() {
                self.array.seed = array.seed;
            }
            if let Some(values) = array.values {
                self.array.size = values.len();
                self.array.fixed = Some(values);
            }
        }

        // Load playback configuration
        if let Some(playback) = toml_config.playback {
            if let Some(speed) = playback.speed {
                self.speed = Speed::new(speed);
            }
        }

        self.array.normalize();
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        // Write the example config
        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.array.size = size;
        self.array.fixed = None;
        self.array.normalize();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.array.seed = Some(seed);
        self
    }

    pub fn with_array(mut self, array: Vec<i32>) -> Self {
        self.array.fixed = Some(array);
        self.array.normalize();
        self
    }

    pub fn with_speed(mut self, speed: i64) -> Self {
        self.speed = Speed::new(speed);
        self
    }
}
