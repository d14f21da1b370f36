//! Per-turn time budget and whose turn it is.

use crate::types::Mark;
use std::time::{Duration, Instant};
use tracing::instrument;

/// Tracks the active mark and how long the current turn has run.
///
/// The clock never reads the wall clock itself; every query takes `now`
/// from the caller, so turn timing stays deterministic under test.
#[derive(Debug, Clone, Copy)]
pub struct TurnClock {
    to_move: Mark,
    budget: Duration,
    started_at: Instant,
}

impl TurnClock {
    /// Creates a clock with X to move and a full budget starting at `now`.
    pub fn new(budget: Duration, now: Instant) -> Self {
        Self {
            to_move: Mark::X,
            budget,
            started_at: now,
        }
    }

    /// The mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The fixed per-turn budget.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left in the current turn, saturating at zero.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.budget
            .saturating_sub(now.saturating_duration_since(self.started_at))
    }

    /// Whether the current turn's budget is exhausted.
    pub fn has_expired(&self, now: Instant) -> bool {
        self.remaining(now) == Duration::ZERO
    }

    /// Swaps the active mark and restarts the turn at `now`.
    ///
    /// Called on every successful move and on expiry (the turn passes
    /// with no move placed).
    #[instrument(level = "debug", skip(self, now))]
    pub fn advance(&mut self, now: Instant) {
        self.to_move = self.to_move.opponent();
        self.started_at = now;
    }
}
