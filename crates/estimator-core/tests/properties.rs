//! Property tests for the estimator calculations.

use std::num::NonZeroU32;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use estimator_core::{convert_temperature, estimate_bedtime, split_bill};
use estimator_model::TemperatureScale;
use proptest::prelude::*;

fn scale() -> impl Strategy<Value = TemperatureScale> {
    prop_oneof![
        Just(TemperatureScale::Celsius),
        Just(TemperatureScale::Fahrenheit),
        Just(TemperatureScale::Kelvin),
    ]
}

fn wake_time() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..(365 * 24 * 60)).prop_map(|minutes| {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + TimeDelta::minutes(minutes)
    })
}

fn people(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

proptest! {
    #[test]
    fn split_non_decreasing_in_tip(
        amount in 0.0f64..10_000.0,
        n in 1u32..50,
        tip in 0.0f64..100.0,
        extra in 0.0f64..100.0,
    ) {
        let low = split_bill(amount, people(n), tip);
        let high = split_bill(amount, people(n), tip + extra);
        prop_assert!(high >= low);
    }

    #[test]
    fn split_non_increasing_in_party_size(
        amount in 0.0f64..10_000.0,
        n in 1u32..50,
        more in 0u32..50,
        tip in 0.0f64..100.0,
    ) {
        let fewer = split_bill(amount, people(n), tip);
        let larger = split_bill(amount, people(n + more), tip);
        prop_assert!(larger <= fewer);
    }

    #[test]
    fn split_shares_add_up(amount in 0.0f64..10_000.0, n in 1u32..50, tip in 0.0f64..100.0) {
        let share = split_bill(amount, people(n), tip);
        let total = amount * (1.0 + tip / 100.0);
        prop_assert!((share * f64::from(n) - total).abs() <= 1e-9 * total.max(1.0));
    }

    #[test]
    fn same_scale_is_identity(value in -1.0e6f64..1.0e6, s in scale()) {
        prop_assert_eq!(convert_temperature(value, s, s), value);
    }

    #[test]
    fn conversion_round_trips(value in -1.0e4f64..1.0e4, a in scale(), b in scale()) {
        let back = convert_temperature(convert_temperature(value, a, b), b, a);
        prop_assert!((back - value).abs() < 1e-9);
    }

    #[test]
    fn bedtime_is_before_wake(
        wake in wake_time(),
        quarters in 16u32..=48,
        coffee in 0u32..=20,
    ) {
        let desired = f64::from(quarters) * 0.25;
        let bedtime = estimate_bedtime(wake, desired, coffee).unwrap();
        prop_assert!(bedtime < wake);
    }

    #[test]
    fn bedtime_fails_outside_sleep_range(wake in wake_time(), hours in 12.01f64..48.0) {
        let error = estimate_bedtime(wake, hours, 0).unwrap_err();
        prop_assert!(error.is_model_failure());
    }
}

#[test]
fn spec_examples() {
    assert_eq!(split_bill(100.0, people(4), 10.0), 27.5);
    assert_eq!(
        convert_temperature(0.0, TemperatureScale::Celsius, TemperatureScale::Fahrenheit),
        32.0
    );
    assert_eq!(
        convert_temperature(212.0, TemperatureScale::Fahrenheit, TemperatureScale::Celsius),
        100.0
    );
}
