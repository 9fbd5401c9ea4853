use rayon::prelude::*;

use puli_core::{GameState, perft, perft_divide};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

/// Notation and expected counts from depth 1 upward.
const CASES: &[(&str, &[u64])] = &[
    ("T..TT.................. G 0 0", &[20, 120, 2286, 19406]),
    ("T.GTT.................. T 1 0", &[6, 116, 1023, 18912]),
    ("T.GTT.................. T 5 4", &[6, 76, 666]),
    ("T..TTGGGGGGGGGGGGGGG... G 15 0", &[6, 14, 121, 515]),
];

#[test]
fn perft_reference_positions() {
    CASES.par_iter().for_each(|(notation, counts)| {
        let state = GameState::from_notation(notation).unwrap();
        for (i, &expected) in counts.iter().enumerate() {
            let depth = i as u8 + 1;
            assert_eq!(
                perft(&state, depth),
                expected,
                "perft({depth}) mismatch for {notation}"
            );
        }
    });
}

#[test]
fn perft_deep_start() {
    if std::env::var(FULL_PERFT_ENV).is_err() {
        return;
    }
    assert_eq!(perft(&GameState::new(), 5), 351_590);
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&GameState::new(), 0), 1);
}

#[test]
fn divide_sums_to_perft() {
    let state = GameState::new();
    let divided = perft_divide(&state, 3);
    assert_eq!(divided.len(), 20);
    assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), perft(&state, 3));
    // Every placement leaves the tigers exactly six replies.
    assert!(perft_divide(&state, 2).iter().all(|(_, n)| *n == 6));
}
