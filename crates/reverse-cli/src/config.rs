//! Optional `reverse.toml` configuration.
//!
//! ```toml
//! [review]
//! pace_seconds = 3
//! initial_reveal = 3
//! ```
//!
//! Precedence: CLI flag, then config file, then built-in default.

use reverse_kernel::DEFAULT_INITIAL_REVEAL;
use reverse_review::{DEFAULT_PACE, ReviewOptions};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE: &str = "reverse.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config at {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub review: ReviewSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReviewSection {
    pub pace_seconds: u64,
    pub initial_reveal: usize,
}

impl Default for ReviewSection {
    fn default() -> Self {
        Self {
            pace_seconds: DEFAULT_PACE.as_secs(),
            initial_reveal: DEFAULT_INITIAL_REVEAL,
        }
    }
}

impl Config {
    /// Read `path`. An absent file yields defaults unless `required`.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        if !required && !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::ParseToml {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn review_options(&self, pace_override: Option<u64>) -> ReviewOptions {
        ReviewOptions {
            pace: Duration::from_secs(pace_override.unwrap_or(self.review.pace_seconds)),
            initial_reveal: self.review.initial_reveal,
        }
    }
}
