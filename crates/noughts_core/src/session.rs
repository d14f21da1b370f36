//! Match orchestration: the session state machine, scores, and toggles.
//!
//! A [`MatchSession`] owns all mutable game state — board, turn clock,
//! scores, mode, difficulty — and is itself owned by the presentation
//! layer. There are no process-wide globals. The presentation layer
//! issues commands (`attempt_move`, `tick`, `restart`, toggles) and
//! renders from the observables; it never mutates state directly.

use crate::action::{Move, MoveError};
use crate::ai::{self, Difficulty};
use crate::clock::TurnClock;
use crate::coord::Coord;
use crate::rules::{self, MatchOutcome, Win};
use crate::snapshot::MatchSnapshot;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Who controls the O side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two people share the keyboard.
    HumanVsHuman,
    /// The computer plays O.
    HumanVsComputer,
}

impl GameMode {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "PvP",
            GameMode::HumanVsComputer => "PvC",
        }
    }

    /// Returns the other mode.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::HumanVsHuman => GameMode::HumanVsComputer,
            GameMode::HumanVsComputer => GameMode::HumanVsHuman,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Win and draw tallies.
///
/// Survives restarts; only a process restart clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    x: u32,
    o: u32,
    draws: u32,
}

impl ScoreBoard {
    /// Matches won by X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Matches won by O.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Drawn matches.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Won(Win { mark: Mark::X, .. }) => self.x += 1,
            MatchOutcome::Won(Win { mark: Mark::O, .. }) => self.o += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::InProgress => {}
        }
    }
}

/// Tunables for a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Starting game mode.
    pub mode: GameMode,
    /// Starting computer skill tier.
    pub difficulty: Difficulty,
    /// Per-turn time budget.
    pub turn_budget: Duration,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsHuman,
            difficulty: Difficulty::Easy,
            turn_budget: Duration::from_secs(10),
        }
    }
}

/// Where the session state machine is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AwaitingMove,
    Over(MatchOutcome),
}

/// One full match and its surrounding session state.
///
/// The state machine has two states: awaiting a move, and over. A legal
/// move either keeps the match in progress (the clock advances) or ends
/// it (the scoreboard records the outcome). `restart` returns to an
/// empty board with X to move; the scoreboard persists.
#[derive(Debug, Clone)]
pub struct MatchSession {
    board: Board,
    clock: TurnClock,
    phase: Phase,
    scores: ScoreBoard,
    mode: GameMode,
    difficulty: Difficulty,
    turn_budget: Duration,
    history: Vec<Move>,
}

impl MatchSession {
    /// The mark the computer plays in [`GameMode::HumanVsComputer`].
    /// The human plays X and moves first.
    pub const COMPUTER_MARK: Mark = Mark::O;

    /// Creates a session with an empty board and X to move.
    #[instrument(skip(now))]
    pub fn new(config: MatchConfig, now: Instant) -> Self {
        Self {
            board: Board::new(),
            clock: TurnClock::new(config.turn_budget, now),
            phase: Phase::AwaitingMove,
            scores: ScoreBoard::default(),
            mode: config.mode,
            difficulty: config.difficulty,
            turn_budget: config.turn_budget,
            history: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Attempts to place the active mark at `(row, col)`.
    ///
    /// On success the outcome is re-evaluated and, in human-vs-computer
    /// mode, the computer's reply is applied synchronously before this
    /// returns. Errors leave the session untouched: stale input after
    /// the match is over and clicks on occupied cells are no-ops, and
    /// out-of-range coordinates additionally fail a debug assertion
    /// since only a presentation bug can produce them.
    #[instrument(skip(self, now))]
    pub fn attempt_move(&mut self, row: usize, col: usize, now: Instant) -> Result<(), MoveError> {
        if let Phase::Over(_) = self.phase {
            debug!("ignoring move attempt after match end");
            return Err(MoveError::MatchOver);
        }
        let Some(coord) = Coord::new(row, col) else {
            debug_assert!(false, "presentation sent out-of-range coordinates ({row}, {col})");
            warn!(row, col, "rejecting out-of-range move");
            return Err(MoveError::OutOfRange(row, col));
        };
        self.place(coord, now)?;
        self.run_computer_turn(now);
        Ok(())
    }

    /// Drives turn-timer expiry.
    ///
    /// When the active player's budget runs out, the turn passes with no
    /// mark placed and no penalty; if that hands the turn to the
    /// computer, it moves immediately.
    #[instrument(skip(self, now))]
    pub fn tick(&mut self, now: Instant) {
        if self.phase != Phase::AwaitingMove {
            return;
        }
        if self.clock.has_expired(now) {
            let passed = self.clock.to_move();
            self.clock.advance(now);
            debug!(%passed, to_move = %self.clock.to_move(), "turn timer expired, passing turn");
            self.run_computer_turn(now);
        }
    }

    /// Starts a fresh match: empty board, X to move, full turn budget.
    ///
    /// The scoreboard is untouched.
    #[instrument(skip(self, now))]
    pub fn restart(&mut self, now: Instant) {
        self.board = Board::new();
        self.clock = TurnClock::new(self.turn_budget, now);
        self.phase = Phase::AwaitingMove;
        self.history.clear();
        info!("match restarted");
    }

    /// Switches between human-vs-human and human-vs-computer.
    ///
    /// A mode change always restarts the match.
    #[instrument(skip(self, now))]
    pub fn toggle_mode(&mut self, now: Instant) {
        self.mode = self.mode.toggle();
        info!(mode = %self.mode, "game mode changed");
        self.restart(now);
    }

    /// Cycles the computer's skill tier. Does not restart the match.
    #[instrument(skip(self))]
    pub fn toggle_difficulty(&mut self) {
        self.difficulty = self.difficulty.cycle();
        info!(difficulty = %self.difficulty, "difficulty changed");
    }

    // ─────────────────────────────────────────────────────────────
    //  Observables
    // ─────────────────────────────────────────────────────────────

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current outcome.
    pub fn outcome(&self) -> MatchOutcome {
        match self.phase {
            Phase::AwaitingMove => MatchOutcome::InProgress,
            Phase::Over(outcome) => outcome,
        }
    }

    /// Whether the match has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// The mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.clock.to_move()
    }

    /// Time left in the current turn.
    pub fn remaining_time(&self, now: Instant) -> Duration {
        self.clock.remaining(now)
    }

    /// The session score tallies.
    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    /// The current game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The current computer skill tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The winning line, once the match is won.
    pub fn winning_line(&self) -> Option<Win> {
        match self.phase {
            Phase::Over(MatchOutcome::Won(win)) => Some(win),
            _ => None,
        }
    }

    /// Every move applied in the current match, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Captures every observable at `now` in serializable form.
    pub fn snapshot(&self, now: Instant) -> MatchSnapshot {
        MatchSnapshot {
            board: self.board.clone(),
            outcome: self.outcome(),
            to_move: self.to_move(),
            remaining: self.remaining_time(now),
            scores: self.scores,
            mode: self.mode,
            difficulty: self.difficulty,
            winning_line: self.winning_line(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    /// Places the active mark and resolves the consequences: record the
    /// move, re-evaluate, then either advance the clock or settle the
    /// match and score it.
    fn place(&mut self, coord: Coord, now: Instant) -> Result<(), MoveError> {
        let mark = self.clock.to_move();
        self.board.place(coord, mark)?;
        self.history.push(Move { mark, coord });
        debug!(%mark, %coord, "mark placed");

        match rules::evaluate(&self.board) {
            MatchOutcome::InProgress => self.clock.advance(now),
            outcome => {
                self.scores.record(outcome);
                info!(?outcome, moves = self.history.len(), "match over");
                self.phase = Phase::Over(outcome);
            }
        }
        Ok(())
    }

    /// Lets the computer take its turn if it is due one.
    ///
    /// Invoked after every event that can hand the turn to O: a human
    /// move and an expiry auto-pass.
    fn run_computer_turn(&mut self, now: Instant) {
        if self.mode != GameMode::HumanVsComputer {
            return;
        }
        if self.phase != Phase::AwaitingMove || self.clock.to_move() != Self::COMPUTER_MARK {
            return;
        }

        let mut rng = rand::rng();
        match ai::choose_move(&self.board, self.difficulty, Self::COMPUTER_MARK, &mut rng) {
            Some(coord) => {
                // The selector only returns empty cells, so this cannot
                // fail; if it somehow does, the turn stays with O.
                if let Err(err) = self.place(coord, now) {
                    warn!(%err, %coord, "computer move rejected");
                }
            }
            None => warn!("no empty cell for the computer; skipping"),
        }
    }
}
