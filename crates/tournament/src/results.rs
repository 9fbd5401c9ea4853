//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::engines::{EngineSpec, TournamentError};
use crate::match_runner::{MatchConfig, MatchResult};

/// A finished match with everything needed to reproduce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the match
    pub name: String,
    pub tiger: EngineSpec,
    pub goat: EngineSpec,
    /// Configuration used
    pub config: MatchConfig,
    pub result: MatchResult,
}

impl TournamentResults {
    pub fn new(
        name: &str,
        tiger: EngineSpec,
        goat: EngineSpec,
        config: MatchConfig,
        result: MatchResult,
    ) -> Self {
        Self {
            name: name.to_string(),
            tiger,
            goat,
            config,
            result,
        }
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let r = &self.result;
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Tiger: {}  Goat: {}\n",
            self.tiger.label(),
            self.goat.label()
        ));
        report.push_str(&format!(
            "Config: {} games, {} plies max\n\n",
            self.config.num_games, self.config.max_moves
        ));

        report.push_str(&format!(
            "{:<12} {:>8} {:>8} {:>10}\n",
            "", "Tiger", "Goat", "Unfinished"
        ));
        report.push_str(&"-".repeat(41));
        report.push('\n');
        report.push_str(&format!(
            "{:<12} {:>8} {:>8} {:>10}\n",
            "Wins", r.tiger_wins, r.goat_wins, r.unfinished
        ));

        let games = r.games.len().max(1) as f64;
        let plies: u32 = r.games.iter().map(|g| g.plies).sum();
        let captures: u32 = r.games.iter().map(|g| g.goats_captured as u32).sum();
        report.push_str(&format!(
            "\nTiger score {:.1}%, {:.1} plies and {:.2} captures per game\n",
            r.tiger_score() * 100.0,
            plies as f64 / games,
            captures as f64 / games
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
