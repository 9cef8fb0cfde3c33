//! Inputs and configuration for the bedtime estimate.

use std::fs;
use std::path::Path;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};

/// Shortest desired sleep the estimator accepts, in hours.
pub const MIN_SLEEP_HOURS: f64 = 4.0;
/// Longest desired sleep the estimator accepts, in hours.
pub const MAX_SLEEP_HOURS: f64 = 12.0;
/// Granularity of the desired-sleep stepper, in hours.
pub const SLEEP_STEP_HOURS: f64 = 0.25;
/// Sleep amount preselected in the form.
pub const DEFAULT_SLEEP_HOURS: f64 = 8.0;
/// Largest daily coffee count the estimator accepts.
pub const MAX_COFFEE_COUNT: u32 = 20;

/// Wake-up time preselected in the form (07:00).
pub fn default_wake_time() -> NaiveTime {
    NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// A request for a bedtime recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepRequest {
    pub wake_time: NaiveDateTime,
    pub desired_sleep_hours: f64,
    pub daily_coffee_count: u32,
}

impl SleepRequest {
    pub fn new(wake_time: NaiveDateTime, desired_sleep_hours: f64, daily_coffee_count: u32) -> Self {
        Self {
            wake_time,
            desired_sleep_hours,
            daily_coffee_count,
        }
    }

    /// Checks the request against the ranges the sleep model was built for.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::ModelEvaluation`] when an input is outside
    /// its range or not finite.
    pub fn validate(&self) -> Result<()> {
        let hours = self.desired_sleep_hours;
        if !hours.is_finite() || !(MIN_SLEEP_HOURS..=MAX_SLEEP_HOURS).contains(&hours) {
            return Err(EstimatorError::model(format!(
                "desired sleep {hours} h is outside {MIN_SLEEP_HOURS}..={MAX_SLEEP_HOURS} h"
            )));
        }
        if self.daily_coffee_count > MAX_COFFEE_COUNT {
            return Err(EstimatorError::model(format!(
                "coffee count {} exceeds {MAX_COFFEE_COUNT}",
                self.daily_coffee_count
            )));
        }
        Ok(())
    }
}

/// Coefficients of the linear sleep-need model.
///
/// `need_hours = intercept_hours + desired_weight * desired + coffee_weight * coffee`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SleepModelConfig {
    pub intercept_hours: f64,
    pub desired_weight: f64,
    /// Extra hours of sleep needed per daily cup of coffee.
    pub coffee_weight: f64,
}

impl Default for SleepModelConfig {
    fn default() -> Self {
        Self {
            intercept_hours: 0.0,
            desired_weight: 1.0,
            coffee_weight: 0.2,
        }
    }
}

impl SleepModelConfig {
    /// Load coefficients from a JSON file. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds a non-finite coefficient.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse coefficients from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON, names an unknown field,
    /// or a coefficient is not finite.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: SleepModelConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`EstimatorError::ModelEvaluation`] for a non-finite coefficient.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("intercept_hours", self.intercept_hours),
            ("desired_weight", self.desired_weight),
            ("coffee_weight", self.coffee_weight),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(EstimatorError::model(format!(
                    "coefficient {name} is not finite"
                )));
            }
        }
        Ok(())
    }
}

/// A computed bedtime recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BedtimeEstimate {
    pub wake_time: NaiveDateTime,
    pub bedtime: NaiveDateTime,
    /// Sleep the model says is needed, in hours.
    pub sleep_need_hours: f64,
}

impl BedtimeEstimate {
    /// Bedtime as a time of day, as the form displays it.
    pub fn bedtime_of_day(&self) -> NaiveTime {
        self.bedtime.time()
    }
}
