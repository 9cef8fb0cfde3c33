pub mod bill;
pub mod enums;
pub mod error;
pub mod game;
pub mod sleep;

pub use bill::{BillSplit, DEFAULT_TIP_PERCENT, TIP_PERCENTAGES};
pub use enums::{Move, TemperatureScale, Verdict};
pub use error::{EstimatorError, Result};
pub use game::{DEFAULT_SESSION_ROUNDS, QuizAnswer, RoundOutcome};
pub use sleep::{
    DEFAULT_SLEEP_HOURS, MAX_COFFEE_COUNT, MAX_SLEEP_HOURS, MIN_SLEEP_HOURS, SLEEP_STEP_HOURS,
    BedtimeEstimate, SleepModelConfig, SleepRequest, default_wake_time,
};
