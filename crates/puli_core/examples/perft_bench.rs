//! Perft benchmark for profiling move generation.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p puli_core -- [depth] [notation]
//!
//! Examples:
//!   # Default: depth 6 over the reference positions
//!   cargo run --release --example perft_bench -p puli_core
//!
//!   # Single position
//!   cargo run --release --example perft_bench -p puli_core -- 7 "T..TTGGGGGGGGGGGGGGG... G 15 0"

use puli_core::{GameState, perft};
use std::env;
use std::time::{Duration, Instant};

const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Starting position", "T..TT.................. G 0 0"),
    ("First goat threatened", "T.GTT.................. T 1 0"),
    ("All goats placed", "T..TTGGGGGGGGGGGGGGG... G 15 0"),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(6);

    match args.get(2) {
        Some(notation) => run_single_position(notation, depth),
        None => run_all_positions(depth),
    }
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn run_single_position(notation: &str, depth: u8) {
    let state = match GameState::from_notation(notation) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("bad position: {e}");
            std::process::exit(1);
        }
    };

    println!("{state}");
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let nodes = perft(&state, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, notation) in TEST_POSITIONS {
        let Ok(state) = GameState::from_notation(notation) else {
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&state, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
