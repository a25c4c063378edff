//! Adjacent-strip geometry for each face.
//!
//! Turning a face moves the three facelets nearest to it on each of its
//! four neighbours. Each ring lists those strips in clockwise order as
//! seen from outside the turning face, and each strip lists its cells so
//! that cell `k` of one strip lands on cell `k` of the next. Some strips
//! therefore run backwards along their row or column; that follows from
//! how each neighbour is oriented in the net:
//!
//! ```text
//!            U
//!        L   F   R   B
//!            D
//! ```
//!
//! with Up viewed Back-edge-up and Down viewed Front-edge-up.

use crate::core::{FaceId, FaceletPos, Move};

/// Three cells on one neighbouring face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strip {
    pub face: FaceId,
    pub cells: [(usize, usize); 3],
}

impl Strip {
    const fn new(face: FaceId, cells: [(usize, usize); 3]) -> Self {
        Self { face, cells }
    }

    /// Positions of the three cells, in cycle order.
    pub fn positions(&self) -> impl Iterator<Item = FaceletPos> + '_ {
        self.cells
            .iter()
            .map(move |&(row, col)| FaceletPos::new(self.face, row, col))
    }
}

/// Four strips around a face, in clockwise order.
pub type Ring = [Strip; 4];

const FRONT_RING: Ring = [
    Strip::new(FaceId::Up, [(2, 0), (2, 1), (2, 2)]),
    Strip::new(FaceId::Right, [(0, 0), (1, 0), (2, 0)]),
    Strip::new(FaceId::Down, [(0, 2), (0, 1), (0, 0)]),
    Strip::new(FaceId::Left, [(2, 2), (1, 2), (0, 2)]),
];

const BACK_RING: Ring = [
    Strip::new(FaceId::Up, [(0, 0), (0, 1), (0, 2)]),
    Strip::new(FaceId::Left, [(2, 0), (1, 0), (0, 0)]),
    Strip::new(FaceId::Down, [(2, 2), (2, 1), (2, 0)]),
    Strip::new(FaceId::Right, [(0, 2), (1, 2), (2, 2)]),
];

const LEFT_RING: Ring = [
    Strip::new(FaceId::Up, [(0, 0), (1, 0), (2, 0)]),
    Strip::new(FaceId::Front, [(0, 0), (1, 0), (2, 0)]),
    Strip::new(FaceId::Down, [(0, 0), (1, 0), (2, 0)]),
    Strip::new(FaceId::Back, [(2, 2), (1, 2), (0, 2)]),
];

const RIGHT_RING: Ring = [
    Strip::new(FaceId::Up, [(0, 2), (1, 2), (2, 2)]),
    Strip::new(FaceId::Back, [(2, 0), (1, 0), (0, 0)]),
    Strip::new(FaceId::Down, [(0, 2), (1, 2), (2, 2)]),
    Strip::new(FaceId::Front, [(0, 2), (1, 2), (2, 2)]),
];

const UP_RING: Ring = [
    Strip::new(FaceId::Front, [(0, 0), (0, 1), (0, 2)]),
    Strip::new(FaceId::Left, [(0, 0), (0, 1), (0, 2)]),
    Strip::new(FaceId::Back, [(0, 0), (0, 1), (0, 2)]),
    Strip::new(FaceId::Right, [(0, 0), (0, 1), (0, 2)]),
];

const DOWN_RING: Ring = [
    Strip::new(FaceId::Front, [(2, 0), (2, 1), (2, 2)]),
    Strip::new(FaceId::Right, [(2, 0), (2, 1), (2, 2)]),
    Strip::new(FaceId::Back, [(2, 0), (2, 1), (2, 2)]),
    Strip::new(FaceId::Left, [(2, 0), (2, 1), (2, 2)]),
];

/// The ring of strips moved by turning `face`.
#[must_use]
pub fn ring(face: FaceId) -> &'static Ring {
    match face {
        FaceId::Front => &FRONT_RING,
        FaceId::Back => &BACK_RING,
        FaceId::Left => &LEFT_RING,
        FaceId::Right => &RIGHT_RING,
        FaceId::Up => &UP_RING,
        FaceId::Down => &DOWN_RING,
    }
}

/// Every facelet a move can change: the nine on the turning face
/// followed by the twelve on its ring.
#[must_use]
pub fn touched_facelets(mv: Move) -> [FaceletPos; 21] {
    let face = mv.face();
    let mut out = [FaceletPos::new(face, 0, 0); 21];

    for (i, slot) in out.iter_mut().take(9).enumerate() {
        *slot = FaceletPos::new(face, i / 3, i % 3);
    }
    for (slot, pos) in out[9..]
        .iter_mut()
        .zip(ring(face).iter().flat_map(Strip::positions))
    {
        *slot = pos;
    }

    out
}
