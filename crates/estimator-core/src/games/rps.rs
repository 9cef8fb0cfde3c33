//! Rock-paper-scissors trainer.
//!
//! Each round the app shows a move and asks the player to either win or
//! lose against it. Doing what was asked scores +1, anything else scores
//! -1. A tie is not a win, so it scores +1 when the player was asked to lose.

use estimator_model::{DEFAULT_SESSION_ROUNDS, EstimatorError, Move, Result, RoundOutcome};
use rand::{Rng, RngExt};
use tracing::{debug, info};

/// Returns true when `player_move` beats `app_move`. Ties are not wins.
pub fn is_player_winner(app_move: Move, player_move: Move) -> bool {
    (app_move.index() + 1) % 3 == player_move.index()
}

/// One prompt: the app's move and whether the player should beat it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub app_move: Move,
    pub player_should_win: bool,
}

impl Round {
    pub fn new(app_move: Move, player_should_win: bool) -> Self {
        Self {
            app_move,
            player_should_win,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            app_move: Move::from_index(rng.random_range(0..3)),
            player_should_win: rng.random_bool(0.5),
        }
    }

    /// +1 if the player's move matches the prompt, -1 otherwise.
    pub fn score(&self, player_move: Move) -> i32 {
        if self.player_should_win == is_player_winner(self.app_move, player_move) {
            1
        } else {
            -1
        }
    }
}

/// A fixed-length series of rounds with a running score.
#[derive(Debug, Clone)]
pub struct TrainingSession {
    current: Round,
    score: i32,
    played: u32,
    rounds: u32,
}

impl TrainingSession {
    /// Start a session of the default length.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_rounds(DEFAULT_SESSION_ROUNDS, rng)
    }

    /// Start a session of `rounds` rounds. A length of zero is raised to one.
    pub fn with_rounds<R: Rng + ?Sized>(rounds: u32, rng: &mut R) -> Self {
        Self {
            current: Round::random(rng),
            score: 0,
            played: 0,
            rounds: rounds.max(1),
        }
    }

    pub fn current(&self) -> Round {
        self.current
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn played(&self) -> u32 {
        self.played
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn is_finished(&self) -> bool {
        self.played >= self.rounds
    }

    /// Score `player_move` against the current round and draw the next one.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::SessionFinished`] once every round was played.
    pub fn play<R: Rng + ?Sized>(&mut self, player_move: Move, rng: &mut R) -> Result<RoundOutcome> {
        if self.is_finished() {
            return Err(EstimatorError::SessionFinished {
                rounds: self.rounds,
            });
        }
        let round = self.current;
        let points = round.score(player_move);
        self.score += points;
        self.played += 1;
        self.current = Round::random(rng);

        let outcome = RoundOutcome {
            round: self.played,
            app_move: round.app_move,
            player_move,
            player_should_win: round.player_should_win,
            player_won: is_player_winner(round.app_move, player_move),
            points,
            score: self.score,
        };
        debug!(
            round = outcome.round,
            app_move = %outcome.app_move,
            player_move = %outcome.player_move,
            points,
            "round played"
        );
        if self.is_finished() {
            info!(score = self.score, rounds = self.rounds, "training session finished");
        }
        Ok(outcome)
    }

    /// Reset score and round counter, keeping the current prompt.
    pub fn restart(&mut self) {
        self.score = 0;
        self.played = 0;
    }
}
