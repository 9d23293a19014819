//! The game-facing side of the engine.
//!
//! The engine never sees a board. Everything it knows about a game comes
//! through [`GameAdapter`], which owns the position and mutates it in place.

use serde::{Deserialize, Serialize};

/// Position evaluation. 0 is even, positive favors the maximizer.
pub type Score = i32;

/// Which side is to move at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    Maximizer,
    Minimizer,
}

impl Perspective {
    pub fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Perspective::Maximizer
        } else {
            Perspective::Minimizer
        }
    }

    pub fn other(self) -> Perspective {
        match self {
            Perspective::Maximizer => Perspective::Minimizer,
            Perspective::Minimizer => Perspective::Maximizer,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Perspective::Maximizer => 0,
            Perspective::Minimizer => 1,
        }
    }

    /// True when `candidate` is strictly better than `incumbent` for this side.
    #[inline]
    pub(crate) fn prefers(self, candidate: Score, incumbent: Score) -> bool {
        match self {
            Perspective::Maximizer => candidate > incumbent,
            Perspective::Minimizer => candidate < incumbent,
        }
    }
}

impl From<bool> for Perspective {
    fn from(maximizing: bool) -> Self {
        Perspective::from_maximizing(maximizing)
    }
}

/// Rules of a two-player zero-sum game, expressed over one shared position.
///
/// The engine guarantees strict LIFO pairing: every `apply_move` is matched
/// by an `undo_move` with the same perspective and move before the parent
/// node tries its next sibling or returns. Moves passed back are always
/// drawn from the most recent enumeration at that node.
///
/// Implementations should panic when handed a move that does not belong to
/// the position. That is a caller bug, not something the search recovers
/// from.
pub trait GameAdapter {
    type Move: Clone;

    /// Static evaluation of the current position.
    ///
    /// Must be deterministic, free of side effects, and within the engine's
    /// configured `[min_eval, max_eval]` range.
    fn evaluate(&self) -> Score;

    /// Appends the legal moves for `perspective` to `moves`.
    ///
    /// The buffer is cleared by the caller. An empty result marks a terminal
    /// position. Order matters: the first of several equally good moves wins.
    fn moves_into(&self, perspective: Perspective, moves: &mut Vec<Self::Move>);

    /// Plays `mv` as `perspective`.
    fn apply_move(&mut self, perspective: Perspective, mv: &Self::Move);

    /// Exact inverse of the matching `apply_move`.
    fn undo_move(&mut self, perspective: Perspective, mv: &Self::Move);

    /// Convenience wrapper around [`GameAdapter::moves_into`].
    fn legal_moves(&self, perspective: Perspective) -> Vec<Self::Move> {
        let mut moves = Vec::new();
        self.moves_into(perspective, &mut moves);
        moves
    }
}

impl<A: GameAdapter + ?Sized> GameAdapter for &mut A {
    type Move = A::Move;

    fn evaluate(&self) -> Score {
        (**self).evaluate()
    }

    fn moves_into(&self, perspective: Perspective, moves: &mut Vec<Self::Move>) {
        (**self).moves_into(perspective, moves)
    }

    fn apply_move(&mut self, perspective: Perspective, mv: &Self::Move) {
        (**self).apply_move(perspective, mv)
    }

    fn undo_move(&mut self, perspective: Perspective, mv: &Self::Move) {
        (**self).undo_move(perspective, mv)
    }
}
