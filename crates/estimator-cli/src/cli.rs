//! CLI argument definitions for the estimator.

use std::num::NonZeroU32;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use estimator_model::{
    DEFAULT_SESSION_ROUNDS, DEFAULT_SLEEP_HOURS, DEFAULT_TIP_PERCENT, Move, SLEEP_STEP_HOURS,
    TemperatureScale,
};

#[derive(Parser)]
#[command(
    name = "estimator",
    version,
    about = "Bill splitting, temperature conversion and bedtime estimates",
    long_about = "Small everyday calculations from the command line.\n\n\
                  Split a bill with tip, convert between Celsius, Fahrenheit and Kelvin,\n\
                  estimate a bedtime, or play the rock-paper-scissors and flag trainers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// How results are printed.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a bill between several people, tip included.
    Split(SplitArgs),

    /// Convert a temperature between scales.
    Convert(ConvertArgs),

    /// Estimate when to go to bed.
    Bedtime(BedtimeArgs),

    /// List the supported temperature scales.
    Scales,

    /// Play a rock-paper-scissors training session.
    Rps(RpsArgs),

    /// Play the flag quiz.
    Flags(FlagsArgs),
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Check amount. Text that is not a number counts as zero.
    #[arg(long = "amount", value_name = "AMOUNT")]
    pub amount: String,

    /// Number of people sharing the bill.
    #[arg(long = "people", value_name = "N", default_value = "2")]
    pub people: NonZeroU32,

    /// Tip percentage. Text that is not a number counts as zero.
    #[arg(
        long = "tip",
        value_name = "PERCENT",
        default_value_t = DEFAULT_TIP_PERCENT.to_string()
    )]
    pub tip: String,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Temperature to convert. Text that is not a number counts as zero.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Scale of the input (celsius, fahrenheit, kelvin or c/f/k).
    #[arg(long = "from", value_name = "SCALE")]
    pub from: TemperatureScale,

    /// Scale to convert to.
    #[arg(long = "to", value_name = "SCALE")]
    pub to: TemperatureScale,
}

#[derive(Parser)]
pub struct BedtimeArgs {
    /// Wake-up time (HH:MM, default 07:00).
    #[arg(long = "wake", value_name = "HH:MM", value_parser = parse_time_of_day)]
    pub wake: Option<NaiveTime>,

    /// Date of the wake-up morning (YYYY-MM-DD, default tomorrow).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Desired sleep in hours (4 to 12, in quarter hours).
    #[arg(
        long = "sleep",
        value_name = "HOURS",
        default_value_t = DEFAULT_SLEEP_HOURS,
        value_parser = parse_sleep_hours
    )]
    pub sleep: f64,

    /// Cups of coffee per day (0 to 20).
    #[arg(long = "coffee", value_name = "N", default_value_t = 0)]
    pub coffee: u32,

    /// JSON file with sleep model coefficients.
    #[arg(long = "model", value_name = "PATH")]
    pub model: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RpsArgs {
    /// Player moves, one per round (rock, paper, scissors or r/p/s).
    #[arg(long = "moves", value_name = "MOVES", value_delimiter = ',', required = true)]
    pub moves: Vec<Move>,

    /// Seed for the app's moves and prompts.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Rounds in the session.
    #[arg(long = "rounds", value_name = "N", default_value_t = DEFAULT_SESSION_ROUNDS)]
    pub rounds: u32,
}

#[derive(Parser)]
pub struct FlagsArgs {
    /// Chosen flag per question (0, 1 or 2).
    #[arg(long = "answers", value_name = "INDEXES", value_delimiter = ',', required = true)]
    pub answers: Vec<usize>,

    /// Seed for the question order.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,
}

/// Parse `HH:MM` or `HH:MM:SS`.
fn parse_time_of_day(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|error| format!("invalid time '{value}': {error}"))
}

/// Parse a sleep duration that falls on a quarter hour.
fn parse_sleep_hours(value: &str) -> Result<f64, String> {
    let hours: f64 = value
        .trim()
        .parse()
        .map_err(|error| format!("invalid hours '{value}': {error}"))?;
    if !hours.is_finite() || (hours / SLEEP_STEP_HOURS).fract() != 0.0 {
        return Err(format!("{value} is not a multiple of {SLEEP_STEP_HOURS} h"));
    }
    Ok(hours)
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Result output choices.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}
