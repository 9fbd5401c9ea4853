//! Engine specs: what to build for each game of a match.

use minimax_engine::{ConfigError, EngineConfig, MinimaxEngine};
use puli_core::{Engine, SearchLimits};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("unknown engine '{0}' (expected minimax[:depth] or random[:seed])")]
    UnknownEngine(String),
    #[error("bad engine argument in '{0}'")]
    BadArgument(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("game {game}: {source}")]
    Rule {
        game: u32,
        #[source]
        source: puli_core::RuleError,
    },
    #[error("cannot write results: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode results: {0}")]
    Json(#[from] serde_json::Error),
}

/// A recipe for an engine. Each game builds fresh engines from it, so
/// games share nothing and can run on any thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EngineSpec {
    Minimax { config: EngineConfig },
    Random { seed: Option<u64> },
}

impl EngineSpec {
    /// Parses `minimax`, `minimax:<depth>`, `random` or `random:<seed>`.
    /// Minimax engines start from `base`.
    pub fn parse(text: &str, base: &EngineConfig) -> Result<Self, TournamentError> {
        let (name, arg) = match text.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (text, None),
        };
        let bad = || TournamentError::BadArgument(text.to_string());

        match name.to_lowercase().as_str() {
            "minimax" | "mm" => {
                let mut config = base.clone();
                if let Some(arg) = arg {
                    config.depth = arg.parse().map_err(|_| bad())?;
                }
                config.validate()?;
                Ok(EngineSpec::Minimax { config })
            }
            "random" | "rand" => {
                let seed = arg.map(|a| a.parse().map_err(|_| bad())).transpose()?;
                Ok(EngineSpec::Random { seed })
            }
            _ => Err(TournamentError::UnknownEngine(text.to_string())),
        }
    }

    /// Engine for game `game`. Seeded random engines get a distinct seed
    /// per game so a match does not replay one game over and over.
    pub fn build(&self, game: u32) -> Box<dyn Engine> {
        match self {
            EngineSpec::Minimax { config } => Box::new(MinimaxEngine::with_config(config.clone())),
            EngineSpec::Random { seed: Some(seed) } => {
                Box::new(RandomEngine::seeded(seed.wrapping_add(game as u64)))
            }
            EngineSpec::Random { seed: None } => Box::new(RandomEngine::new()),
        }
    }

    /// Fresh limits for one move.
    pub fn limits(&self) -> SearchLimits {
        match self {
            EngineSpec::Minimax { config } => config.limits(),
            EngineSpec::Random { .. } => SearchLimits::depth(1),
        }
    }

    pub fn label(&self) -> String {
        match self {
            EngineSpec::Minimax { config } => format!("minimax:{}", config.depth),
            EngineSpec::Random { seed: Some(seed) } => format!("random:{seed}"),
            EngineSpec::Random { seed: None } => "random".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_specs() {
        let base = EngineConfig::default();
        assert_eq!(
            EngineSpec::parse("random:9", &base).unwrap(),
            EngineSpec::Random { seed: Some(9) }
        );
        assert_eq!(
            EngineSpec::parse("random", &base).unwrap(),
            EngineSpec::Random { seed: None }
        );
        match EngineSpec::parse("minimax:2", &base).unwrap() {
            EngineSpec::Minimax { config } => assert_eq!(config.depth, 2),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(EngineSpec::parse("Minimax", &base).unwrap().label(), "minimax:4");
    }

    #[test]
    fn reject_bad_specs() {
        let base = EngineConfig::default();
        assert!(matches!(
            EngineSpec::parse("stockfish", &base),
            Err(TournamentError::UnknownEngine(_))
        ));
        assert!(matches!(
            EngineSpec::parse("random:abc", &base),
            Err(TournamentError::BadArgument(_))
        ));
        assert!(matches!(
            EngineSpec::parse("minimax:0", &base),
            Err(TournamentError::Config(_))
        ));
    }

    #[test]
    fn build_names() {
        let spec = EngineSpec::Random { seed: Some(1) };
        assert_eq!(spec.build(0).name(), "Random v1.0");
        let spec = EngineSpec::parse("minimax", &EngineConfig::default()).unwrap();
        assert_eq!(spec.build(0).name(), "Minimax v1.0");
        assert_eq!(spec.limits().depth, 4);
    }
}
