//! Scoring rules for the two training games.
//!
//! Randomness is always supplied by the caller so sessions can be replayed
//! from a seed.

pub mod flags;
pub mod rps;

pub use flags::{CHOICES_PER_QUESTION, COUNTRIES, FlagQuiz};
pub use rps::{Round, TrainingSession, is_player_winner};
