//! Engine configuration
//!
//! Loaded from a JSON file at startup. Every field has a default, so a
//! partial file (or `{}`) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::DeadWindowPolicy;
use crate::search::movegen::{DEFAULT_CANDIDATE_CAP, MIN_CANDIDATES};

/// Deepest search the engine accepts
pub const MAX_SEARCH_DEPTH: u8 = 4;
/// Widest candidate list the engine accepts
pub const MAX_CANDIDATE_CAP: usize = 15;

/// How the AI picks its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiLevel {
    /// Uniformly random empty cell
    Random,
    /// Shortcuts, then minimax
    #[default]
    Minimax,
}

impl AiLevel {
    pub fn name(self) -> &'static str {
        match self {
            AiLevel::Random => "Random",
            AiLevel::Minimax => "Minimax",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} = {value} is out of range {range}")]
    Invalid {
        field: &'static str,
        value: usize,
        range: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched by minimax
    pub max_depth: u8,
    /// Candidates explored per node
    pub candidate_cap: usize,
    pub level: AiLevel,
    pub dead_window: DeadWindowPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            candidate_cap: DEFAULT_CANDIDATE_CAP,
            level: AiLevel::Minimax,
            dead_window: DeadWindowPolicy::Skip,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SEARCH_DEPTH).contains(&self.max_depth) {
            return Err(ConfigError::Invalid {
                field: "max_depth",
                value: usize::from(self.max_depth),
                range: "1..=4",
            });
        }
        if !(MIN_CANDIDATES..=MAX_CANDIDATE_CAP).contains(&self.candidate_cap) {
            return Err(ConfigError::Invalid {
                field: "candidate_cap",
                value: self.candidate_cap,
                range: "5..=15",
            });
        }
        Ok(())
    }
}
