//! Tournament Runner
//!
//! This crate provides infrastructure for:
//! - Building engines from short specs such as `minimax:5` or `random:42`
//! - Playing a Tiger engine against a Goat engine, games in parallel
//! - Saving and reporting match results as JSON
//!
//! # Usage
//!
//! ```bash
//! # Minimax tigers against random goats
//! cargo run -p tournament -- match minimax random --games 100 --depth 3
//! ```

mod engines;
mod match_runner;
mod results;

pub use engines::*;
pub use match_runner::*;
pub use results::*;
