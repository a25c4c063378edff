//! Algebraic properties of the move engine over random move sequences.

use proptest::prelude::*;

use rust_cube::core::{invert_sequence, CubeState, Direction, FaceId, Move};

fn any_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

fn any_sequence(max_len: usize) -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(any_move(), 0..max_len)
}

fn scrambled(moves: &[Move]) -> CubeState {
    let mut cube = CubeState::new();
    cube.apply_sequence(moves);
    cube
}

proptest! {
    #[test]
    fn four_quarter_turns_are_identity(moves in any_sequence(30), mv in any_move()) {
        let start = scrambled(&moves);
        let mut cube = start.clone();
        for _ in 0..4 {
            cube.apply(mv);
        }
        prop_assert_eq!(cube.facelets(), start.facelets());
    }

    #[test]
    fn move_then_inverse_is_identity(moves in any_sequence(30), mv in any_move()) {
        let start = scrambled(&moves);
        let mut cube = start.clone();
        cube.apply(mv);
        cube.apply(mv.inverse());
        prop_assert_eq!(cube.facelets(), start.facelets());
    }

    #[test]
    fn inverse_sequence_solves(moves in any_sequence(40)) {
        let mut cube = scrambled(&moves);
        cube.apply_sequence(&invert_sequence(&moves));
        prop_assert!(cube.is_solved());
        prop_assert_eq!(cube.history_len(), moves.len() * 2);
    }

    #[test]
    fn colors_stay_nine_each(moves in any_sequence(40)) {
        let cube = scrambled(&moves);
        let mut counts = [0usize; 6];
        for color in cube.facelets().iter() {
            counts[color.index()] += 1;
        }
        prop_assert_eq!(counts, [9; 6]);
    }

    #[test]
    fn centers_stay_fixed(moves in any_sequence(40)) {
        let cube = scrambled(&moves);
        for face in FaceId::ALL {
            prop_assert_eq!(cube.face(face).center(), cube.scheme().color(face));
        }
    }

    #[test]
    fn color_string_round_trips(moves in any_sequence(40)) {
        let cube = scrambled(&moves);
        let parsed = CubeState::from_color_string(&cube.to_color_string()).unwrap();
        prop_assert_eq!(parsed.facelets(), cube.facelets());
    }

    #[test]
    fn history_records_every_move(moves in any_sequence(40)) {
        let cube = scrambled(&moves);
        let history: Vec<Move> = cube.move_history().iter().copied().collect();
        prop_assert_eq!(history, moves.clone());
        prop_assert_eq!(cube.last_move(), moves.last().copied());
    }

    #[test]
    fn parallel_turns_commute(
        moves in any_sequence(20),
        a in any_move(),
        opposite in any::<bool>(),
        prime in any::<bool>(),
    ) {
        let face = if opposite { a.face().opposite() } else { a.face() };
        let direction = if prime { Direction::CounterClockwise } else { Direction::Clockwise };
        let b = Move::new(face, direction);
        let start = scrambled(&moves);

        let mut ab = start.clone();
        ab.apply(a);
        ab.apply(b);
        let mut ba = start;
        ba.apply(b);
        ba.apply(a);

        prop_assert_eq!(ab.facelets(), ba.facelets());
    }
}
