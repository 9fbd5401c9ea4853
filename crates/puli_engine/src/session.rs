//! Protocol state: one game and one engine, driven a line at a time.

use minimax_engine::{EngineConfig, MinimaxEngine};
use puli_core::wire::{ErrorView, MoveRequest, MoveView, StateView};
use puli_core::{apply, parse_move, Engine, GameState, Move, Side};
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Line(String),
    Silent,
    Quit,
}

pub struct Session {
    state: GameState,
    engine: MinimaxEngine,
}

impl Session {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            state: GameState::new(),
            engine: MinimaxEngine::with_config(config),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn handle(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => Reply::Silent,
            "state" => self.state_reply(),
            "new-game" => {
                self.state = GameState::new();
                self.engine.new_game();
                info!("new game");
                self.state_reply()
            }
            "move" => match serde_json::from_str::<MoveRequest>(rest) {
                Ok(request) => match request.to_move() {
                    Ok(mv) => self.play(mv),
                    Err(e) => error(e),
                },
                Err(e) => error(format!("bad move request: {e}")),
            },
            "play" => match parse_move(&self.state, rest) {
                Ok(mv) => self.play(mv),
                Err(e) => error(e),
            },
            "ai-move" => self.ai_move(rest),
            "setup" => match GameState::from_notation(rest) {
                Ok(state) => {
                    info!(notation = %state.to_notation(), "position set up");
                    self.state = state;
                    self.state_reply()
                }
                Err(e) => error(e),
            },
            "setoption" => {
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if self.engine.set_option(name, value.trim()) {
                    Reply::Silent
                } else {
                    error(format!("unknown option or value: {rest}"))
                }
            }
            "board" => Reply::Line(self.state.to_string()),
            "quit" => Reply::Quit,
            other => error(format!("unknown command '{other}'")),
        }
    }

    fn play(&mut self, mv: Move) -> Reply {
        match apply(&self.state, mv) {
            Ok(next) => {
                debug!(%mv, "move applied");
                if let Some(winner) = next.winner() {
                    info!(%winner, "game over");
                }
                self.state = next;
                self.state_reply()
            }
            Err(e) => {
                warn!(%mv, error = %e, "move rejected");
                error(e)
            }
        }
    }

    fn ai_move(&mut self, side: &str) -> Reply {
        let side = match side.chars().collect::<Vec<_>>()[..] {
            [c] => Side::from_symbol(c),
            _ => None,
        };
        let Some(side) = side else {
            return error("ai-move expects T or G");
        };

        let limits = self.engine.limits();
        match self.engine.select_move(&self.state, side, limits) {
            Ok(mv) => {
                debug!(%side, %mv, "ai move");
                json(&MoveView::from(mv))
            }
            Err(e) => error(e),
        }
    }

    fn state_reply(&self) -> Reply {
        json(&StateView::from(&self.state))
    }
}

fn json<T: Serialize>(value: &T) -> Reply {
    match serde_json::to_string(value) {
        Ok(text) => Reply::Line(text),
        Err(e) => error(format!("cannot encode reply: {e}")),
    }
}

fn error(detail: impl ToString) -> Reply {
    let view = ErrorView::new(detail);
    // A struct of one string always encodes.
    Reply::Line(serde_json::to_string(&view).unwrap_or_default())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
