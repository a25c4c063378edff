//! Scramble integration tests.

use rust_cube::core::{CubeRng, CubeState, Move, ScrambleConfig};
use rust_cube::scramble::{scramble, Scrambler};

// =============================================================================
// Reproducibility
// =============================================================================

#[test]
fn test_replaying_scramble_reproduces_state() {
    for seed in [0, 1, 42, 9001] {
        let mut cube = CubeState::new();
        let moves = scramble(&mut cube, 20, &mut CubeRng::new(seed));

        let mut replay = CubeState::new();
        replay.apply_sequence(&moves);

        assert_eq!(replay, cube, "seed {seed}");
    }
}

#[test]
fn test_different_seeds_differ() {
    let mut a = CubeState::new();
    let mut b = CubeState::new();

    let moves_a = scramble(&mut a, 20, &mut CubeRng::new(1));
    let moves_b = scramble(&mut b, 20, &mut CubeRng::new(2));

    assert_ne!(moves_a, moves_b);
}

#[test]
fn test_rng_state_resumes_stream() {
    let mut rng = CubeRng::new(77);
    let mut cube = CubeState::new();
    scramble(&mut cube, 10, &mut rng);

    let saved = rng.state();
    let mut resumed = CubeRng::from_state(&saved);

    let mut c1 = cube.clone();
    let mut c2 = cube;
    assert_eq!(
        scramble(&mut c1, 10, &mut rng),
        scramble(&mut c2, 10, &mut resumed)
    );
    assert_eq!(c1, c2);
}

// =============================================================================
// Scrambler Sessions
// =============================================================================

#[test_log::test]
fn test_scramble_undone_by_inverse() {
    let mut scrambler = Scrambler::new(ScrambleConfig::default().with_seed(2024));
    let mut cube = CubeState::new();

    let moves = scrambler.scramble(&mut cube);
    cube.apply_sequence(&rust_cube::invert_sequence(&moves));

    assert!(cube.is_solved());
    assert_eq!(cube.history_len(), 40);
}

#[test]
fn test_scramble_continues_existing_history() {
    let mut cube = CubeState::new();
    cube.apply_sequence(&[Move::R, Move::U]);

    let mut scrambler = Scrambler::new(ScrambleConfig::default().with_length(5).with_seed(3));
    let moves = scrambler.scramble(&mut cube);

    let history: Vec<Move> = cube.move_history().iter().copied().collect();
    assert_eq!(&history[..2], &[Move::R, Move::U]);
    assert_eq!(&history[2..], moves.as_slice());
}

#[test]
fn test_independent_sessions_do_not_interfere() {
    let config = ScrambleConfig::default().with_seed(5);
    let mut first = Scrambler::new(config.clone());
    let mut second = Scrambler::new(config);

    let mut cube_a = CubeState::new();
    let mut cube_b = CubeState::new();
    first.scramble(&mut cube_a);
    cube_a.apply(Move::D);
    second.scramble(&mut cube_b);

    assert_eq!(cube_b.history_len(), 20);
    assert_eq!(cube_a.history_len(), 21);
    assert_eq!(cube_a.last_move(), Some(Move::D));
}

#[test]
fn test_config_from_json() {
    let config: ScrambleConfig = serde_json::from_str(r#"{"length": 12, "seed": 8}"#).unwrap();
    let mut scrambler = Scrambler::new(config);
    let mut cube = CubeState::new();

    assert_eq!(scrambler.scramble(&mut cube).len(), 12);
    assert_eq!(scrambler.seed(), 8);
}
