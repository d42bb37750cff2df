// src/config/options.rs
use std::{collections::HashMap, fs, ops::Range, path::Path, time::Duration};

use serde::Deserialize;

use super::consts::REQUEST_TIMEOUT_SECS;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid game id range: url_num_inicial ({start}) is greater than url_num_final ({end})")]
    InvalidRange { start: u32, end: u32 },
    #[error("invalid config: {0} must not be empty")]
    Empty(&'static str),
}

/// Run configuration, read once at startup and passed around by reference.
///
/// Field names on disk are the historic ones (`url_num_inicial`, …); the
/// Rust side names them by what they mean.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ScrapeConfig {
    /// Sent as the `User-Agent` header on every request.
    pub user_agent: String,

    /// Page URL prefix; the game id is appended verbatim.
    pub url_base: String,

    /// First game id (inclusive).
    #[serde(rename = "url_num_inicial")]
    pub first_game_id: u32,

    /// End of the id range (exclusive).
    #[serde(rename = "url_num_final")]
    pub end_game_id: u32,

    /// Table file name → header row, used verbatim.
    #[serde(default)]
    pub output_headers: HashMap<String, Vec<String>>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    REQUEST_TIMEOUT_SECS
}

impl ScrapeConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.url_base.trim().is_empty() {
            return Err(ConfigError::Empty("url_base"));
        }
        if self.first_game_id > self.end_game_id {
            return Err(ConfigError::InvalidRange {
                start: self.first_game_id,
                end: self.end_game_id,
            });
        }
        Ok(())
    }

    /// Half-open range of game ids to visit.
    pub fn game_ids(&self) -> Range<u32> {
        self.first_game_id..self.end_game_id
    }

    /// Replace the configured range (CLI overrides). Same rules as the file.
    pub fn with_range(mut self, first: Option<u32>, end: Option<u32>) -> Result<Self, ConfigError> {
        if let Some(v) = first { self.first_game_id = v; }
        if let Some(v) = end { self.end_game_id = v; }
        self.validate()?;
        Ok(self)
    }

    pub fn game_url(&self, game_id: u32) -> String {
        format!("{}{}", self.url_base, game_id)
    }

    /// Header row for one output table. Missing entries give an empty row.
    pub fn headers_for(&self, table: &str) -> &[String] {
        self.output_headers
            .get(table)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
