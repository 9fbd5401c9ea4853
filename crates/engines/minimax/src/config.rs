//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! depth = 5
//! move_time_ms = 2000
//!
//! [weights]
//! capture = 120
//! mobility = 8
//! ```
//!
//! Every field is optional; missing ones keep their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use puli_core::SearchLimits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DEPTH: u8 = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u8),
}

/// Heuristic weights, all from the Tiger's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalWeights {
    /// Per captured goat.
    pub capture: i32,
    /// Times captured squared, so the fourth and fifth captures dominate.
    pub capture_urgency: i32,
    /// Per tiger move available.
    pub mobility: i32,
    /// Per capture available right now.
    pub threat: i32,
    /// Per goat on the board, subtracted.
    pub goat_material: i32,
    /// Per unit of tiger node degree, placement phase only.
    pub centrality: i32,
    /// Per tiger with no move, subtracted.
    pub trapped_tiger: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            capture: 100,
            capture_urgency: 25,
            mobility: 10,
            threat: 30,
            goat_material: 5,
            centrality: 4,
            trapped_tiger: 40,
        }
    }
}

impl EvalWeights {
    /// Looks up a weight by its config name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut i32> {
        match name {
            "capture" => Some(&mut self.capture),
            "capture_urgency" => Some(&mut self.capture_urgency),
            "mobility" => Some(&mut self.mobility),
            "threat" => Some(&mut self.threat),
            "goat_material" => Some(&mut self.goat_material),
            "centrality" => Some(&mut self.centrality),
            "trapped_tiger" => Some(&mut self.trapped_tiger),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub depth: u8,
    pub move_time_ms: Option<u64>,
    pub weights: EvalWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            move_time_ms: None,
            weights: EvalWeights::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        Ok(())
    }

    pub fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }

    /// Fresh limits for one search.
    pub fn limits(&self) -> SearchLimits {
        SearchLimits::new(self.depth, self.move_time())
    }
}
