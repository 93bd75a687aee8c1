use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Construction settings and initial parameter values for a supersawer instance.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SupersawConfig {
    pub max_voices: usize,
    pub base_frequency: f64,
    pub detune_ratio: f64,
    pub active_voices: i64,
}

impl Default for SupersawConfig {
    fn default() -> Self {
        Self {
            max_voices: 1,
            base_frequency: 400.0,
            detune_ratio: 0.5,
            active_voices: 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SupersawConfig {
    /// Maps the object's creation argument to a slot-bearing voice count.
    /// Missing, zero or negative arguments fall back to a single voice pair.
    pub fn normalized_max_voices(arg: Option<i64>) -> usize {
        match arg {
            Some(n) if n > 0 => n as usize,
            _ => 1,
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(contents)?;
        // max_voices = 0 in a file gets the same treatment as a zero argument
        config.max_voices = config.max_voices.max(1);
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Returns a copy with `max_voices` taken from a creation argument.
    pub fn with_creation_arg(mut self, arg: Option<i64>) -> Self {
        if arg.is_some() {
            self.max_voices = Self::normalized_max_voices(arg);
        }
        self
    }
}
