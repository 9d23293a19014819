//! Generic two-player game-tree search.
//!
//! The engine picks moves for zero-sum, perfect-information games without
//! knowing any of their rules. A game plugs in by implementing
//! [`GameAdapter`]: evaluate, enumerate, apply and undo, each for a given
//! [`Perspective`]. The engine then mutates that one position in place while
//! it searches and restores it before returning.
//!
//! Three strategies are available through [`Strategy`]:
//! - plain minimax
//! - alpha-beta pruning
//! - alpha-beta that also returns the principal variation
//!
//! # Usage
//!
//! ```
//! use game_search::{GameAdapter, Perspective, Score, SearchEngine, Strategy};
//!
//! /// Count up from zero; whoever reaches three wins.
//! struct RaceToThree {
//!     total: u8,
//!     to_move: Perspective,
//! }
//!
//! impl GameAdapter for RaceToThree {
//!     type Move = u8;
//!
//!     fn evaluate(&self) -> Score {
//!         match (self.total >= 3, self.to_move) {
//!             (false, _) => 0,
//!             (true, Perspective::Minimizer) => 1,
//!             (true, Perspective::Maximizer) => -1,
//!         }
//!     }
//!
//!     fn moves_into(&self, _side: Perspective, moves: &mut Vec<u8>) {
//!         if self.total < 3 {
//!             moves.extend([1, 2].into_iter().filter(|n| self.total + n <= 3));
//!         }
//!     }
//!
//!     fn apply_move(&mut self, side: Perspective, mv: &u8) {
//!         self.total += mv;
//!         self.to_move = side.other();
//!     }
//!
//!     fn undo_move(&mut self, side: Perspective, mv: &u8) {
//!         self.total -= mv;
//!         self.to_move = side;
//!     }
//! }
//!
//! let engine = SearchEngine::default();
//! let mut game = RaceToThree { total: 1, to_move: Perspective::Maximizer };
//! let best = engine
//!     .compute_best_move(&mut game, Strategy::AlphaBeta, Perspective::Maximizer, 2)
//!     .unwrap();
//! assert_eq!(best, Some(2));
//! assert_eq!(game.total, 1);
//! ```

pub mod adapter;
pub mod cancel;
pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod perft;
pub mod result;
pub mod search;

pub use adapter::{GameAdapter, Perspective, Score};
pub use cancel::{CancellationToken, SearchClock};
pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use error::{ConfigError, SearchError};
pub use observer::{JsonLinesObserver, NoopObserver, SearchObserver, TraceEvent, TracingObserver};
pub use perft::perft;
pub use result::{SearchResult, SearchStats};
pub use search::Strategy;
