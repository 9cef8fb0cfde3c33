//! Bedtime estimation.
//!
//! The bedtime is the wake time minus the sleep a [`SleepModel`] says is
//! needed for the requested amount of sleep and caffeine intake:
//! - requests outside 4..=12 h of sleep or above 20 cups are rejected
//! - the predicted need must be positive and shorter than a day
//! - the result is therefore always strictly before the wake time

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use estimator_model::{BedtimeEstimate, EstimatorError, Result, SleepModelConfig, SleepRequest};
use tracing::{debug, warn};

const SECONDS_PER_HOUR: f64 = 3600.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Predicts how many hours of sleep a person actually needs.
pub trait SleepModel {
    /// # Errors
    ///
    /// Returns [`EstimatorError::ModelEvaluation`] when no prediction can be
    /// made for the inputs.
    fn predict_sleep_hours(&self, desired_sleep_hours: f64, daily_coffee_count: u32)
    -> Result<f64>;
}

/// Linear sleep-need model driven by [`SleepModelConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearSleepModel {
    config: SleepModelConfig,
}

impl LinearSleepModel {
    pub fn new(config: SleepModelConfig) -> Self {
        Self { config }
    }
}

impl SleepModel for LinearSleepModel {
    fn predict_sleep_hours(
        &self,
        desired_sleep_hours: f64,
        daily_coffee_count: u32,
    ) -> Result<f64> {
        self.config.validate()?;
        let SleepModelConfig {
            intercept_hours,
            desired_weight,
            coffee_weight,
        } = self.config;
        let hours = intercept_hours
            + desired_weight * desired_sleep_hours
            + coffee_weight * f64::from(daily_coffee_count);
        if !hours.is_finite() {
            return Err(EstimatorError::model("prediction is not finite"));
        }
        Ok(hours)
    }
}

/// Recommend a bedtime with the default linear model.
///
/// # Errors
///
/// Returns [`EstimatorError::ModelEvaluation`] when the inputs are outside
/// the model's range or the model cannot produce a usable value.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use estimator_core::estimate_bedtime;
///
/// let wake = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap().and_hms_opt(7, 0, 0).unwrap();
/// let bedtime = estimate_bedtime(wake, 8.0, 0).unwrap();
/// assert_eq!(bedtime.format("%H:%M").to_string(), "23:00");
/// ```
pub fn estimate_bedtime(
    wake_time: NaiveDateTime,
    desired_sleep_hours: f64,
    daily_coffee_count: u32,
) -> Result<NaiveDateTime> {
    let request = SleepRequest::new(wake_time, desired_sleep_hours, daily_coffee_count);
    estimate_bedtime_for(&LinearSleepModel::default(), &request).map(|estimate| estimate.bedtime)
}

/// Recommend a bedtime for a wake time of day, anchored on the morning of `wake_date`.
///
/// # Errors
///
/// Same as [`estimate_bedtime`].
pub fn estimate_bedtime_at(
    wake_date: NaiveDate,
    wake_time: NaiveTime,
    desired_sleep_hours: f64,
    daily_coffee_count: u32,
) -> Result<NaiveDateTime> {
    estimate_bedtime(
        wake_date.and_time(wake_time),
        desired_sleep_hours,
        daily_coffee_count,
    )
}

/// Recommend a bedtime using any [`SleepModel`].
///
/// # Errors
///
/// Returns [`EstimatorError::ModelEvaluation`] when the request is invalid
/// or the prediction is not a positive duration shorter than a day.
pub fn estimate_bedtime_for<M: SleepModel + ?Sized>(
    model: &M,
    request: &SleepRequest,
) -> Result<BedtimeEstimate> {
    let result = evaluate(model, request);
    if let Err(error) = &result {
        warn!(
            wake_time = %request.wake_time,
            desired_sleep_hours = request.desired_sleep_hours,
            daily_coffee_count = request.daily_coffee_count,
            %error,
            "bedtime estimate failed"
        );
    }
    result
}

fn evaluate<M: SleepModel + ?Sized>(model: &M, request: &SleepRequest) -> Result<BedtimeEstimate> {
    request.validate()?;
    let need_hours =
        model.predict_sleep_hours(request.desired_sleep_hours, request.daily_coffee_count)?;
    if !need_hours.is_finite() || need_hours <= 0.0 || need_hours >= HOURS_PER_DAY {
        return Err(EstimatorError::model(format!(
            "predicted sleep of {need_hours} h is not within (0, {HOURS_PER_DAY}) h"
        )));
    }

    // Rounded to whole seconds.
    let seconds = (need_hours * SECONDS_PER_HOUR).round() as i64;
    if seconds <= 0 {
        return Err(EstimatorError::model("predicted sleep rounds to zero"));
    }
    let need = TimeDelta::try_seconds(seconds)
        .ok_or_else(|| EstimatorError::model("predicted sleep is out of range"))?;
    let bedtime = request
        .wake_time
        .checked_sub_signed(need)
        .ok_or_else(|| EstimatorError::model("bedtime is before the earliest representable date"))?;

    debug!(
        wake_time = %request.wake_time,
        %bedtime,
        need_hours,
        "bedtime estimated"
    );
    Ok(BedtimeEstimate {
        wake_time: request.wake_time,
        bedtime,
        sleep_need_hours: need_hours,
    })
}
