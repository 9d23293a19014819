//! Read-only trace hooks.
//!
//! Observers only ever see `&TraceEvent`. They get no handle on the adapter
//! or the engine, so attaching one cannot change the chosen move or score.

use std::fmt::Debug;
use std::io::Write;

use serde::Serialize;

use crate::adapter::{Perspective, Score};

/// One point of interest in the traversal. `ply` is 0 at the root.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent<'a, M> {
    NodeEntered {
        ply: u8,
        perspective: Perspective,
        alpha: Score,
        beta: Score,
    },
    MoveTried {
        ply: u8,
        perspective: Perspective,
        mv: &'a M,
    },
    Improved {
        ply: u8,
        perspective: Perspective,
        mv: &'a M,
        score: Score,
    },
    LeafEvaluated {
        ply: u8,
        score: Score,
    },
    Cutoff {
        ply: u8,
        alpha: Score,
        beta: Score,
    },
    Cancelled {
        ply: u8,
    },
}

pub trait SearchObserver<M> {
    fn on_event(&mut self, event: &TraceEvent<'_, M>);
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<M> SearchObserver<M> for NoopObserver {
    #[inline(always)]
    fn on_event(&mut self, _event: &TraceEvent<'_, M>) {}
}

/// Forwards events to `tracing` at TRACE level on target `game_search::trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<M: Debug> SearchObserver<M> for TracingObserver {
    fn on_event(&mut self, event: &TraceEvent<'_, M>) {
        match event {
            TraceEvent::NodeEntered {
                ply,
                perspective,
                alpha,
                beta,
            } => tracing::trace!(target: "game_search::trace", ply, ?perspective, alpha, beta, "node entered"),
            TraceEvent::MoveTried {
                ply,
                perspective,
                mv,
            } => tracing::trace!(target: "game_search::trace", ply, ?perspective, ?mv, "move tried"),
            TraceEvent::Improved {
                ply,
                perspective,
                mv,
                score,
            } => tracing::trace!(target: "game_search::trace", ply, ?perspective, ?mv, score, "better move"),
            TraceEvent::LeafEvaluated { ply, score } => {
                tracing::trace!(target: "game_search::trace", ply, score, "leaf evaluated")
            }
            TraceEvent::Cutoff { ply, alpha, beta } => {
                tracing::trace!(target: "game_search::trace", ply, alpha, beta, "cutoff")
            }
            TraceEvent::Cancelled { ply } => {
                tracing::trace!(target: "game_search::trace", ply, "cancelled")
            }
        }
    }
}

/// Writes each event as one JSON object per line.
///
/// Write failures are remembered rather than raised so that a broken sink
/// cannot abort a search. Check [`JsonLinesObserver::error`] afterwards.
#[derive(Debug)]
pub struct JsonLinesObserver<W: Write> {
    writer: W,
    error: Option<String>,
}

impl<W: Write> JsonLinesObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// First write or serialization failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write, M: Serialize> SearchObserver<M> for JsonLinesObserver<W> {
    fn on_event(&mut self, event: &TraceEvent<'_, M>) {
        if self.error.is_some() {
            return;
        }
        let line = serde_json::to_string(event)
            .map_err(|e| format!("Failed to serialize: {}", e))
            .and_then(|json| {
                writeln!(self.writer, "{}", json).map_err(|e| format!("Failed to write: {}", e))
            });
        if let Err(e) = line {
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
#[path = "observer_tests.rs"]
mod observer_tests;
