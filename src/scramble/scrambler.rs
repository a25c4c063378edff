//! Random scrambles.
//!
//! Moves are drawn independently and uniformly from all twelve tokens.
//! Nothing is filtered: a move may repeat or be followed by its own
//! inverse.

use log::debug;

use crate::core::{format_sequence, CubeRng, CubeState, Move, MoveSequence, ScrambleConfig};
use crate::engine::apply;

/// Draw `n` moves, apply them to `state` in order, and return them.
///
/// The moves are appended to the cube's history like any other moves.
pub fn scramble(state: &mut CubeState, n: usize, rng: &mut CubeRng) -> MoveSequence {
    let mut drawn = MoveSequence::with_capacity(n);
    for _ in 0..n {
        let mv = Move::ALL[rng.gen_index(Move::ALL.len())];
        apply(state, mv);
        drawn.push(mv);
    }
    debug!("scrambled with {} moves: {}", n, format_sequence(&drawn));
    drawn
}

/// Scrambler with its own RNG stream.
///
/// ## Example
///
/// ```
/// use rust_cube::core::{CubeState, ScrambleConfig};
/// use rust_cube::scramble::Scrambler;
///
/// let mut scrambler = Scrambler::new(ScrambleConfig::default().with_seed(7));
/// let mut cube = CubeState::new();
/// let moves = scrambler.scramble(&mut cube);
/// assert_eq!(moves.len(), 20);
///
/// // Replaying the returned moves reproduces the scramble.
/// let mut replay = CubeState::new();
/// replay.apply_sequence(&moves);
/// assert_eq!(replay.facelets(), cube.facelets());
/// ```
#[derive(Clone, Debug)]
pub struct Scrambler {
    config: ScrambleConfig,
    rng: CubeRng,
}

impl Scrambler {
    /// Create a scrambler. Without a configured seed the RNG is seeded
    /// from system entropy.
    #[must_use]
    pub fn new(config: ScrambleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => CubeRng::new(seed),
            None => CubeRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ScrambleConfig {
        &self.config
    }

    /// The seed of the underlying RNG stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Scramble with the configured length.
    pub fn scramble(&mut self, state: &mut CubeState) -> MoveSequence {
        scramble(state, self.config.length, &mut self.rng)
    }

    /// Scramble with an explicit length.
    pub fn scramble_n(&mut self, state: &mut CubeState, n: usize) -> MoveSequence {
        scramble(state, n, &mut self.rng)
    }

    /// An independent scrambler for another session.
    ///
    /// Deterministic for a seeded parent.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            config: self.config.clone(),
            rng: self.rng.fork(),
        }
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new(ScrambleConfig::default())
    }
}
