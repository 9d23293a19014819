use serde::Serialize;

use crate::adapter::Score;

/// Node counters gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Interior and leaf nodes visited, root included
    pub nodes: u64,
    /// Positions handed to `evaluate`
    pub leaves: u64,
    /// Sibling loops abandoned because `beta <= alpha`
    pub cutoffs: u64,
}

/// Outcome of a search operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<M> {
    /// Minimax value of the root, as far as the search got
    pub score: Score,
    /// Move chosen at the root (None only for terminal roots)
    pub best_move: Option<M>,
    /// Root-to-leaf line that produced `score`, for the history strategy.
    /// Starts with `best_move`, except that a root cancelled before its
    /// first child finished reports an empty line.
    pub principal_variation: Option<Vec<M>>,
    /// Requested search depth in plies
    pub depth: u8,
    pub stats: SearchStats,
    /// Whether the search was stopped early by cancellation or the clock
    pub cancelled: bool,
}

impl<M> SearchResult<M> {
    /// True when the root had no move to choose from.
    pub fn is_terminal(&self) -> bool {
        self.best_move.is_none()
    }
}
