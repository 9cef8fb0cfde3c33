//! Tests for estimator-model types.

use std::num::NonZeroU32;

use chrono::NaiveDate;
use estimator_model::{BillSplit, SleepModelConfig, SleepRequest, TemperatureScale};

fn wake(hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn sleep_request_accepts_range_bounds() {
    assert!(SleepRequest::new(wake(7, 0), 4.0, 0).validate().is_ok());
    assert!(SleepRequest::new(wake(7, 0), 12.0, 20).validate().is_ok());
}

#[test]
fn sleep_request_rejects_out_of_range() {
    let err = SleepRequest::new(wake(7, 0), 3.75, 0)
        .validate()
        .unwrap_err();
    assert!(err.is_model_failure());
    assert!(SleepRequest::new(wake(7, 0), 8.0, 21).validate().is_err());
    assert!(SleepRequest::new(wake(7, 0), f64::NAN, 1).validate().is_err());
}

#[test]
fn model_config_fills_missing_fields() {
    let config = SleepModelConfig::from_json_str(r#"{"coffee_weight": 0.5}"#).unwrap();
    assert_eq!(config.coffee_weight, 0.5);
    assert_eq!(config.desired_weight, 1.0);
    assert_eq!(config.intercept_hours, 0.0);
}

#[test]
fn model_config_rejects_bad_json() {
    assert!(SleepModelConfig::from_json_str("{not json").is_err());
}

#[test]
fn model_config_rejects_misspelled_field() {
    let error = SleepModelConfig::from_json_str(r#"{"coffe_weight": 5.0}"#).unwrap_err();
    assert!(error.to_string().contains("coffe_weight"));
}

#[test]
fn model_config_rejects_non_finite() {
    let config = SleepModelConfig {
        desired_weight: f64::INFINITY,
        ..SleepModelConfig::default()
    };
    assert!(config.validate().unwrap_err().is_model_failure());
}

#[test]
fn bill_split_serializes() {
    let split = BillSplit {
        amount: 100.0,
        party_size: NonZeroU32::new(4).unwrap(),
        tip_percent: 10.0,
        tip_amount: 10.0,
        grand_total: 110.0,
        per_person: 27.5,
    };
    let json = serde_json::to_string(&split).expect("serialize split");
    let round: BillSplit = serde_json::from_str(&json).expect("deserialize split");
    assert_eq!(round, split);
}

#[test]
fn scale_serializes_snake_case() {
    let json = serde_json::to_string(&TemperatureScale::Fahrenheit).unwrap();
    assert_eq!(json, "\"fahrenheit\"");
}
