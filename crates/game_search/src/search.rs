//! Minimax and alpha-beta search over a [`GameAdapter`]
//!
//! All three strategies share one recursive traversal. They differ only in
//! whether sibling loops are cut off by alpha/beta and whether the
//! root-to-leaf line is recorded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adapter::{GameAdapter, Perspective, Score};
use crate::cancel::{CancellationToken, SearchClock};
use crate::error::ConfigError;
use crate::observer::{SearchObserver, TraceEvent};
use crate::result::{SearchResult, SearchStats};

/// Search algorithm selected per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Exhaustive minimax
    Minimax,
    /// Minimax with fail-hard alpha-beta cutoffs
    AlphaBeta,
    /// Alpha-beta that also returns the principal variation
    AlphaBetaWithHistory,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Minimax,
        Strategy::AlphaBeta,
        Strategy::AlphaBetaWithHistory,
    ];

    #[inline]
    pub fn prunes(self) -> bool {
        !matches!(self, Strategy::Minimax)
    }

    #[inline]
    pub fn tracks_history(self) -> bool {
        matches!(self, Strategy::AlphaBetaWithHistory)
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alphabeta",
            Strategy::AlphaBetaWithHistory => "alphabeta-history",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimax" | "minmax" => Ok(Strategy::Minimax),
            "alphabeta" | "alpha-beta" | "ab" => Ok(Strategy::AlphaBeta),
            "alphabeta-history" | "alpha-beta-history" | "history" | "pv" => {
                Ok(Strategy::AlphaBetaWithHistory)
            }
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Value of one node as seen by its parent.
struct Node<M> {
    score: Score,
    best_move: Option<M>,
    /// Root-to-leaf line, empty unless history is tracked
    line: Vec<M>,
}

/// State for one top-level search. Built by the engine, consumed by `run`.
pub(crate) struct Searcher<'a, A: GameAdapter> {
    adapter: &'a mut A,
    strategy: Strategy,
    min_eval: Score,
    max_eval: Score,
    token: &'a CancellationToken,
    clock: SearchClock,
    observer: &'a mut dyn SearchObserver<A::Move>,
    /// Moves from the root to the current node
    history: Vec<A::Move>,
    stats: SearchStats,
    cancelled: bool,
}

impl<'a, A: GameAdapter> Searcher<'a, A> {
    pub(crate) fn new(
        adapter: &'a mut A,
        strategy: Strategy,
        bounds: (Score, Score),
        token: &'a CancellationToken,
        clock: SearchClock,
        observer: &'a mut dyn SearchObserver<A::Move>,
    ) -> Self {
        Self {
            adapter,
            strategy,
            min_eval: bounds.0,
            max_eval: bounds.1,
            token,
            clock,
            observer,
            history: Vec::new(),
            stats: SearchStats::default(),
            cancelled: false,
        }
    }

    /// Searches `depth` plies from the adapter's current position.
    pub(crate) fn run(mut self, perspective: Perspective, depth: u8) -> SearchResult<A::Move> {
        // One move buffer per remaining ply, reused across siblings
        let mut layers: Vec<Vec<A::Move>> = (0..depth).map(|_| Vec::with_capacity(16)).collect();
        self.history.reserve(depth as usize);

        let root = self.search(
            &mut layers,
            0,
            depth,
            perspective,
            self.min_eval,
            self.max_eval,
        );

        SearchResult {
            score: root.score,
            best_move: root.best_move,
            principal_variation: self.strategy.tracks_history().then_some(root.line),
            depth,
            stats: self.stats,
            cancelled: self.cancelled,
        }
    }

    fn search(
        &mut self,
        layers: &mut [Vec<A::Move>],
        ply: u8,
        depth: u8,
        perspective: Perspective,
        mut alpha: Score,
        mut beta: Score,
    ) -> Node<A::Move> {
        self.stats.nodes += 1;
        self.observer.on_event(&TraceEvent::NodeEntered {
            ply,
            perspective,
            alpha,
            beta,
        });

        if depth == 0 {
            return self.leaf(ply);
        }
        let Some((moves, rest)) = layers.split_first_mut() else {
            return self.leaf(ply);
        };

        moves.clear();
        self.adapter.moves_into(perspective, moves);
        if moves.is_empty() {
            return self.leaf(ply);
        }

        let mut best: Option<Node<A::Move>> = None;

        for mv in moves.iter() {
            if self.should_stop() {
                self.cancelled = true;
                self.observer.on_event(&TraceEvent::Cancelled { ply });
                break;
            }

            self.observer.on_event(&TraceEvent::MoveTried {
                ply,
                perspective,
                mv,
            });

            self.adapter.apply_move(perspective, mv);
            if self.strategy.tracks_history() {
                self.history.push(mv.clone());
            }

            let child = self.search(rest, ply + 1, depth - 1, perspective.other(), alpha, beta);

            if self.strategy.tracks_history() {
                self.history.pop();
            }
            self.adapter.undo_move(perspective, mv);

            // First child seeds best-so-far; later ones must strictly improve,
            // so the earliest of equally good moves is kept.
            let improves = best
                .as_ref()
                .is_none_or(|b| perspective.prefers(child.score, b.score));
            if improves {
                self.observer.on_event(&TraceEvent::Improved {
                    ply,
                    perspective,
                    mv,
                    score: child.score,
                });
                best = Some(Node {
                    score: child.score,
                    best_move: Some(mv.clone()),
                    line: child.line,
                });
            }

            if self.strategy.prunes() {
                let best_score = best.as_ref().map_or(child.score, |b| b.score);
                match perspective {
                    Perspective::Maximizer if best_score > alpha => alpha = best_score,
                    Perspective::Minimizer if best_score < beta => beta = best_score,
                    _ => {}
                }
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    self.observer.on_event(&TraceEvent::Cutoff { ply, alpha, beta });
                    break;
                }
            }
        }

        match best {
            Some(node) => node,
            // Stopped before any child finished: fall back to the static
            // value here, still naming a legal move. Not a leaf, so it is
            // left out of `stats.leaves` and the leaf trace.
            None => Node {
                score: self.evaluate_checked(),
                best_move: moves.first().cloned(),
                line: self.current_line(),
            },
        }
    }

    /// Polled before each sibling move.
    fn should_stop(&mut self) -> bool {
        if self.token.is_cancelled() {
            return true;
        }
        if self.clock.should_check_time(self.stats.nodes) && self.clock.expired() {
            self.token.cancel();
            return true;
        }
        false
    }

    fn leaf(&mut self, ply: u8) -> Node<A::Move> {
        let score = self.evaluate_checked();
        self.stats.leaves += 1;
        self.observer.on_event(&TraceEvent::LeafEvaluated { ply, score });

        Node {
            score,
            best_move: None,
            line: self.current_line(),
        }
    }

    fn evaluate_checked(&self) -> Score {
        let score = self.adapter.evaluate();
        debug_assert!(
            (self.min_eval..=self.max_eval).contains(&score),
            "evaluate() returned {score}, outside [{}, {}]",
            self.min_eval,
            self.max_eval
        );
        score
    }

    /// Moves from the root to here, or nothing when history is off.
    fn current_line(&self) -> Vec<A::Move> {
        if self.strategy.tracks_history() {
            self.history.clone()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
