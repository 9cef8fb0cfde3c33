//! The Estimator module: stateless calculations behind the form apps.
//!
//! - **bill**: per-person share of a bill with tip
//! - **temperature**: conversion between Celsius, Fahrenheit and Kelvin
//! - **bedtime**: bedtime recommendation from a sleep-need model
//! - **numeric**: coercion of typed text into numbers
//! - **games**: scoring rules for the rock-paper-scissors trainer and the flag quiz

pub mod bedtime;
pub mod bill;
pub mod games;
pub mod numeric;
pub mod temperature;

pub use bedtime::{
    LinearSleepModel, SleepModel, estimate_bedtime, estimate_bedtime_at, estimate_bedtime_for,
};
pub use bill::{split_bill, split_bill_breakdown};
pub use games::{FlagQuiz, Round, TrainingSession, is_player_winner};
pub use numeric::{format_numeric, parse_count_or, parse_or_zero};
pub use temperature::{convert_temperature, format_reading};
