//! Applying moves.
//!
//! Every move does two things, always together:
//!
//! 1. rotates the nine facelets of the turning face a quarter turn;
//! 2. cycles the twelve facelets of the surrounding ring by one strip.
//!
//! There is no no-op detection and no failure path.

use log::trace;

use super::strips::{ring, Ring};
use crate::core::{Color, CubeState, Direction, Facelets, Move};

/// Apply one move in place and record it in the history.
pub fn apply(state: &mut CubeState, mv: Move) {
    turn_facelets(state.facelets_mut(), mv);
    state.record(mv);
    trace!("applied {mv}");
}

/// Apply moves left to right.
pub fn apply_sequence<'a, I>(state: &mut CubeState, moves: I)
where
    I: IntoIterator<Item = &'a Move>,
{
    for &mv in moves {
        apply(state, mv);
    }
}

/// Turn the facelets without touching history.
pub(crate) fn turn_facelets(facelets: &mut Facelets, mv: Move) {
    facelets.face_mut(mv.face()).rotate(mv.direction());
    cycle_ring(facelets, ring(mv.face()), mv.direction());
}

/// Shift the ring by one strip. Clockwise, strip `k` moves onto strip
/// `k + 1`; counter-clockwise, onto strip `k - 1`.
fn cycle_ring(facelets: &mut Facelets, ring: &Ring, direction: Direction) {
    let mut values = [[Color::White; 3]; 4];
    for (strip, out) in ring.iter().zip(values.iter_mut()) {
        for (pos, slot) in strip.positions().zip(out.iter_mut()) {
            *slot = facelets.get(pos);
        }
    }

    for (k, strip) in ring.iter().enumerate() {
        let source = match direction {
            Direction::Clockwise => (k + 3) % 4,
            Direction::CounterClockwise => (k + 1) % 4,
        };
        for (pos, &color) in strip.positions().zip(values[source].iter()) {
            facelets.set(pos, color);
        }
    }
}

impl CubeState {
    /// Apply one move. See [`apply`].
    pub fn apply(&mut self, mv: Move) {
        apply(self, mv);
    }

    /// Apply moves left to right. See [`apply_sequence`].
    pub fn apply_sequence<'a, I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = &'a Move>,
    {
        apply_sequence(self, moves);
    }
}
