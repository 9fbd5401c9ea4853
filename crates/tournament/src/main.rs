//! Tournament CLI
//!
//! Play a Tiger engine against a Goat engine and report the results.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use minimax_engine::EngineConfig;
use tournament::{EngineSpec, MatchConfig, MatchRunner, TournamentResults};
use tracing_subscriber::EnvFilter;

/// Self-play matches for Tigers and Goats engines
#[derive(Parser)]
#[command(name = "tournament")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play <tiger> against <goat>; engines are minimax[:depth] or random[:seed]
    Match {
        tiger: String,
        goat: String,
        /// Number of games
        #[arg(short, long, default_value_t = 10)]
        games: u32,
        /// Minimax search depth, unless the engine argument names one
        #[arg(short, long)]
        depth: Option<u8>,
        /// Plies before a game is scored unfinished
        #[arg(long, default_value_t = 200)]
        max_moves: u32,
        /// Milliseconds per minimax move
        #[arg(long)]
        move_time_ms: Option<u64>,
        /// Engine configuration (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Play games one after another
        #[arg(long)]
        sequential: bool,
        /// Write results as JSON
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the report of a saved results file
    Report { path: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Match {
            tiger,
            goat,
            games,
            depth,
            max_moves,
            move_time_ms,
            config,
            sequential,
            out,
        } => {
            let mut base = match &config {
                Some(path) => EngineConfig::load(path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => EngineConfig::default(),
            };
            if let Some(depth) = depth {
                base.depth = depth;
            }
            if move_time_ms.is_some() {
                base.move_time_ms = move_time_ms;
            }

            let tiger = EngineSpec::parse(&tiger, &base)?;
            let goat = EngineSpec::parse(&goat, &base)?;
            let match_config = MatchConfig {
                num_games: games,
                max_moves,
                parallel: !sequential,
            };

            println!("=== Match: {} (T) vs {} (G) ===", tiger.label(), goat.label());
            println!("Games: {games}, max plies: {max_moves}");
            println!();

            let result = MatchRunner::new(match_config.clone()).run_match(&tiger, &goat)?;
            let name = format!("{} vs {}", tiger.label(), goat.label());
            let results = TournamentResults::new(&name, tiger, goat, match_config, result);
            results.print_report();

            if let Some(path) = out {
                results
                    .save(&path)
                    .with_context(|| format!("saving {}", path.display()))?;
                println!("Results written to {}", path.display());
            }
        }
        Commands::Report { path } => {
            let results = TournamentResults::load(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            results.print_report();
        }
    }
    Ok(())
}
