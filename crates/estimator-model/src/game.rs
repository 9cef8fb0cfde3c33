//! Result types for the two training games.

use serde::{Deserialize, Serialize};

use crate::enums::{Move, Verdict};

/// Number of rounds in a rock-paper-scissors training session.
pub const DEFAULT_SESSION_ROUNDS: u32 = 10;

/// What happened in one scored rock-paper-scissors round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// 1-based round number.
    pub round: u32,
    pub app_move: Move,
    pub player_move: Move,
    pub player_should_win: bool,
    /// Whether the player's move beat the app's move.
    pub player_won: bool,
    /// +1 when the player did what was asked, -1 otherwise.
    pub points: i32,
    /// Running score after this round.
    pub score: i32,
}

impl RoundOutcome {
    pub fn followed_prompt(&self) -> bool {
        self.points > 0
    }
}

/// What happened when a flag quiz question was answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub target: String,
    pub chosen: String,
    pub verdict: Verdict,
    pub score: u32,
    pub asked: u32,
}
