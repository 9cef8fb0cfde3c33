//! Tests for command results and their rendering.

use std::num::NonZeroU32;

use chrono::{NaiveDate, NaiveTime};
use estimator_cli::cli::{BedtimeArgs, ConvertArgs, SplitArgs};
use estimator_cli::commands::{
    BEDTIME_FAILURE, run_bedtime, run_convert, run_split, run_tip_presets,
};
use estimator_cli::summary::{
    bedtime_headline, conversion_headline, split_headline, split_table, tip_presets_table,
    to_json,
};
use estimator_model::TemperatureScale;

fn bedtime_args(sleep: f64, coffee: u32) -> BedtimeArgs {
    BedtimeArgs {
        wake: Some(NaiveTime::from_hms_opt(7, 0, 0).unwrap()),
        date: Some(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()),
        sleep,
        coffee,
        model: None,
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[test]
fn split_headline_shows_share() {
    let split = run_split(&SplitArgs {
        amount: "100".to_string(),
        people: NonZeroU32::new(4).unwrap(),
        tip: "10".to_string(),
    });
    insta::assert_snapshot!(split_headline(&split), @"Each of 4 pays 27.50");
    let table = split_table(&split).to_string();
    assert!(table.contains("Per person"));
    assert!(table.contains("27.50"));
    assert!(table.contains("Tip (10%)"));
}

#[test]
fn tip_presets_list_every_share() {
    let splits = run_tip_presets(&SplitArgs {
        amount: "100".to_string(),
        people: NonZeroU32::new(4).unwrap(),
        tip: "10".to_string(),
    });
    let table = tip_presets_table(&splits).to_string();
    for share in ["27.50", "28.75", "30.00", "31.25", "25.00"] {
        assert!(table.contains(share), "missing {share}");
    }
    assert!(table.contains("25%"));
    assert!(table.contains("0%"));
}

#[test]
fn conversion_headline_uses_three_decimals() {
    let conversion = run_convert(&ConvertArgs {
        value: "0".to_string(),
        from: TemperatureScale::Celsius,
        to: TemperatureScale::Fahrenheit,
    });
    insta::assert_snapshot!(conversion_headline(&conversion), @"0.000 °C = 32.000 °F");
}

#[test]
fn conversion_json() {
    let conversion = run_convert(&ConvertArgs {
        value: "0".to_string(),
        from: TemperatureScale::Celsius,
        to: TemperatureScale::Fahrenheit,
    });
    insta::assert_snapshot!(to_json(&conversion).unwrap(), @r#"
    {
      "value": 0.0,
      "from": "celsius",
      "to": "fahrenheit",
      "converted": 32.0
    }
    "#);
}

#[test]
fn bedtime_headline_for_default_model() {
    let estimate = run_bedtime(&bedtime_args(8.0, 0), today()).unwrap();
    insta::assert_snapshot!(
        bedtime_headline(&estimate),
        @"Go to bed at 23:00 to wake up at 07:00 on 2024-03-02 (8 h of sleep)"
    );
}

#[test]
fn bedtime_defaults_to_tomorrow_at_seven() {
    let args = BedtimeArgs {
        wake: None,
        date: None,
        ..bedtime_args(8.0, 0)
    };
    let estimate = run_bedtime(&args, today()).unwrap();
    assert_eq!(
        estimate.wake_time,
        NaiveDate::from_ymd_opt(2024, 3, 2)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap()
    );
}

#[test]
fn bedtime_failure_has_generic_message() {
    let error = run_bedtime(&bedtime_args(13.0, 0), today()).unwrap_err();
    assert_eq!(error.to_string(), BEDTIME_FAILURE);
}

#[test]
fn bedtime_reads_model_file() {
    let path = std::env::temp_dir().join(format!(
        "estimator-model-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"{"coffee_weight": 0.5}"#).unwrap();
    let args = BedtimeArgs {
        model: Some(path.clone()),
        ..bedtime_args(8.0, 2)
    };
    let estimate = run_bedtime(&args, today());
    std::fs::remove_file(&path).unwrap();
    let estimate = estimate.unwrap();
    assert_eq!(estimate.sleep_need_hours, 9.0);
    assert_eq!(
        estimate.bedtime_of_day(),
        NaiveTime::from_hms_opt(22, 0, 0).unwrap()
    );
}

#[test]
fn bedtime_missing_model_file_is_reported() {
    let args = BedtimeArgs {
        model: Some("/nonexistent/estimator/model.json".into()),
        ..bedtime_args(8.0, 0)
    };
    let error = run_bedtime(&args, today()).unwrap_err();
    assert!(error.to_string().starts_with("load sleep model"));
}
