use anyhow::{Context, Result, anyhow};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::{debug, info, info_span, warn};

use estimator_core::{
    FlagQuiz, LinearSleepModel, TrainingSession, convert_temperature, estimate_bedtime_for,
    parse_or_zero, split_bill_breakdown,
};
use estimator_model::{
    BedtimeEstimate, BillSplit, SleepModelConfig, SleepRequest, TIP_PERCENTAGES, default_wake_time,
};

use crate::cli::{BedtimeArgs, ConvertArgs, FlagsArgs, RpsArgs, SplitArgs};
use crate::types::{Conversion, QuestionReport, QuizReport, SessionReport};

/// Message shown when the sleep model cannot produce a bedtime.
pub const BEDTIME_FAILURE: &str = "could not compute a bedtime for these inputs";

pub fn run_split(args: &SplitArgs) -> BillSplit {
    let amount = parse_or_zero(&args.amount);
    let tip = parse_or_zero(&args.tip);
    split_bill_breakdown(amount, args.people, tip)
}

/// Split the same bill at every preset tip percentage.
pub fn run_tip_presets(args: &SplitArgs) -> Vec<BillSplit> {
    let amount = parse_or_zero(&args.amount);
    TIP_PERCENTAGES
        .iter()
        .map(|tip| split_bill_breakdown(amount, args.people, f64::from(*tip)))
        .collect()
}

pub fn run_convert(args: &ConvertArgs) -> Conversion {
    let value = parse_or_zero(&args.value);
    Conversion {
        value,
        from: args.from,
        to: args.to,
        converted: convert_temperature(value, args.from, args.to),
    }
}

/// Estimate a bedtime. Without `--date` the wake-up morning is the day after `today`.
pub fn run_bedtime(args: &BedtimeArgs, today: NaiveDate) -> Result<BedtimeEstimate> {
    let config = match &args.model {
        Some(path) => {
            let config = SleepModelConfig::from_json_file(path)
                .with_context(|| format!("load sleep model {}", path.display()))?;
            debug!(path = %path.display(), ?config, "sleep model loaded");
            config
        }
        None => SleepModelConfig::default(),
    };
    let date = match args.date {
        Some(date) => date,
        None => today
            .checked_add_days(Days::new(1))
            .ok_or_else(|| anyhow!("no day after {today}"))?,
    };
    let wake = args.wake.unwrap_or_else(default_wake_time);
    let request = SleepRequest::new(date.and_time(wake), args.sleep, args.coffee);

    estimate_bedtime_for(&LinearSleepModel::new(config), &request).map_err(|error| {
        if error.is_model_failure() {
            anyhow::Error::new(error).context(BEDTIME_FAILURE)
        } else {
            anyhow::Error::new(error)
        }
    })
}

pub fn run_rps(args: &RpsArgs) -> Result<SessionReport> {
    let seed = args.seed.unwrap_or_else(fresh_seed);
    let span = info_span!("rps", seed);
    let _guard = span.enter();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = TrainingSession::with_rounds(args.rounds, &mut rng);

    let mut rounds = Vec::with_capacity(args.moves.len());
    for player_move in &args.moves {
        if session.is_finished() {
            break;
        }
        let outcome = session
            .play(*player_move, &mut rng)
            .with_context(|| format!("play round {}", session.played() + 1))?;
        rounds.push(outcome);
    }
    let ignored_moves = args.moves.len() - rounds.len();
    if ignored_moves > 0 {
        warn!(ignored_moves, rounds = session.rounds(), "moves after the last round ignored");
    }
    info!(score = session.score(), played = session.played(), "rps session done");

    Ok(SessionReport {
        seed,
        rounds,
        score: session.score(),
        finished: session.is_finished(),
        ignored_moves,
    })
}

pub fn run_flags(args: &FlagsArgs) -> Result<QuizReport> {
    let seed = args.seed.unwrap_or_else(fresh_seed);
    let span = info_span!("flags", seed);
    let _guard = span.enter();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut quiz = FlagQuiz::new(&mut rng);

    let mut questions = Vec::with_capacity(args.answers.len());
    for (position, index) in args.answers.iter().enumerate() {
        let choices = quiz
            .choices()
            .iter()
            .map(|country| (*country).to_string())
            .collect();
        let answer = quiz
            .answer(*index)
            .with_context(|| format!("answer question {}", position + 1))?;
        questions.push(QuestionReport { choices, answer });
        quiz.ask_question(&mut rng);
    }
    info!(score = quiz.score(), asked = quiz.asked(), "flag quiz done");

    Ok(QuizReport {
        seed,
        questions,
        score: quiz.score(),
        asked: quiz.asked(),
    })
}

fn fresh_seed() -> u64 {
    rand::rng().random()
}
