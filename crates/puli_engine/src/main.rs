//! `puli`: the game over stdin/stdout.
//!
//! One command per line, one reply per line. Replies are JSON except for
//! `board`, which draws the position. Logs go to stderr.
//!
//! ```text
//! state                      current position
//! new-game                   reset to the opening position
//! move {"type":"PLACE","to_node":5}
//! play 0x3-9                 same as `move`, short text form
//! ai-move T|G                engine's choice for that side, not applied
//! setup <notation>           e.g. `setup T..TT.................. G 0 0`
//! setoption <name> <value>   engine option, e.g. `setoption depth 5`
//! board                      ascii drawing
//! quit
//! ```

mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use minimax_engine::EngineConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use session::{Reply, Session};

/// Tigers and Goats engine speaking a line protocol
#[derive(Parser)]
#[command(name = "puli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Engine configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Search depth, overriding the configuration
    #[arg(long)]
    depth: Option<u8>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => {
            EngineConfig::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    config.validate()?;
    info!(depth = config.depth, move_time_ms = ?config.move_time_ms, "engine ready");

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match session.handle(&line) {
            Reply::Line(text) => {
                writeln!(stdout, "{text}")?;
                stdout.flush()?;
            }
            Reply::Silent => {}
            Reply::Quit => break,
        }
    }
    Ok(())
}
