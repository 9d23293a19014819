//! The search façade hosts talk to.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::adapter::{GameAdapter, Perspective};
use crate::cancel::{CancellationToken, SearchClock};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::observer::{NoopObserver, SearchObserver};
use crate::result::SearchResult;
use crate::search::{Searcher, Strategy};

/// Owns the score bounds and default depth, and runs one search at a time.
///
/// Every method takes `&self`, so an engine can sit behind an `Arc` while
/// another thread calls [`SearchEngine::request_cancel`]. A second search
/// started while one is running, whether from another thread or re-entrantly
/// from inside an adapter callback, gets [`SearchError::SearchInProgress`].
#[derive(Debug)]
pub struct SearchEngine {
    config: SearchConfig,
    token: CancellationToken,
    active: AtomicBool,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            config,
            token: CancellationToken::new(),
            active: AtomicBool::new(false),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn default_depth(&self) -> u8 {
        self.config.default_depth
    }

    /// Handle for stopping searches from elsewhere.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Ask the running search to wind down. It returns the best move found
    /// so far. Has no lasting effect when nothing is running, since every
    /// search clears the flag on entry.
    pub fn request_cancel(&self) {
        self.token.cancel();
    }

    pub fn is_searching(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Best move for `perspective` after searching `depth` plies.
    ///
    /// `Ok(None)` means the position is terminal for that side (or `depth`
    /// is 0).
    pub fn compute_best_move<A: GameAdapter>(
        &self,
        adapter: &mut A,
        strategy: Strategy,
        perspective: Perspective,
        depth: u8,
    ) -> Result<Option<A::Move>, SearchError> {
        self.search(adapter, strategy, perspective, depth)
            .map(|result| result.best_move)
    }

    /// [`SearchEngine::compute_best_move`] at the configured default depth.
    pub fn compute_default<A: GameAdapter>(
        &self,
        adapter: &mut A,
        strategy: Strategy,
        perspective: Perspective,
    ) -> Result<Option<A::Move>, SearchError> {
        self.compute_best_move(adapter, strategy, perspective, self.config.default_depth)
    }

    /// Alpha-beta search that also reports the principal variation.
    pub fn compute_best_line<A: GameAdapter>(
        &self,
        adapter: &mut A,
        perspective: Perspective,
        depth: u8,
    ) -> Result<SearchResult<A::Move>, SearchError> {
        self.search(adapter, Strategy::AlphaBetaWithHistory, perspective, depth)
    }

    /// Full search result, without tracing.
    pub fn search<A: GameAdapter>(
        &self,
        adapter: &mut A,
        strategy: Strategy,
        perspective: Perspective,
        depth: u8,
    ) -> Result<SearchResult<A::Move>, SearchError> {
        self.search_with_observer(adapter, strategy, perspective, depth, &mut NoopObserver)
    }

    /// Full search result, reporting each node to `observer`.
    pub fn search_with_observer<A: GameAdapter>(
        &self,
        adapter: &mut A,
        strategy: Strategy,
        perspective: Perspective,
        depth: u8,
        observer: &mut dyn SearchObserver<A::Move>,
    ) -> Result<SearchResult<A::Move>, SearchError> {
        let Some(_guard) = ActiveGuard::acquire(&self.active) else {
            tracing::warn!(%strategy, "search requested while another search is running");
            return Err(SearchError::SearchInProgress);
        };
        self.token.reset();

        tracing::debug!(%strategy, ?perspective, depth, "search started");
        let clock = SearchClock::start(self.config.move_time(), self.config.clock_check_interval);
        let result = Searcher::new(
            adapter,
            strategy,
            (self.config.min_eval, self.config.max_eval),
            &self.token,
            clock,
            observer,
        )
        .run(perspective, depth);

        tracing::debug!(
            %strategy,
            score = result.score,
            nodes = result.stats.nodes,
            cutoffs = result.stats.cutoffs,
            cancelled = result.cancelled,
            "search finished"
        );
        Ok(result)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            token: CancellationToken::new(),
            active: AtomicBool::new(false),
        }
    }
}

/// Marks the engine busy for the lifetime of one search, unwinding included.
struct ActiveGuard<'a>(&'a AtomicBool);

impl<'a> ActiveGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for ActiveGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
