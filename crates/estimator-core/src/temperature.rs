//! Temperature conversion between Celsius, Fahrenheit and Kelvin.
//!
//! Every conversion goes through Celsius. Converting a scale to itself
//! returns the input untouched.

use estimator_model::TemperatureScale;
use tracing::debug;

const KELVIN_OFFSET: f64 = 273.15;

/// Convert `value` from one scale to another.
///
/// # Examples
/// ```
/// use estimator_core::convert_temperature;
/// use estimator_model::TemperatureScale;
///
/// let f = convert_temperature(0.0, TemperatureScale::Celsius, TemperatureScale::Fahrenheit);
/// assert_eq!(f, 32.0);
/// ```
pub fn convert_temperature(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    if from == to {
        return value;
    }
    let converted = from_celsius(to_celsius(value, from), to);
    debug!(value, %from, %to, converted, "temperature converted");
    converted
}

fn to_celsius(value: f64, scale: TemperatureScale) -> f64 {
    match scale {
        TemperatureScale::Celsius => value,
        TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureScale::Kelvin => value - KELVIN_OFFSET,
    }
}

fn from_celsius(celsius: f64, scale: TemperatureScale) -> f64 {
    match scale {
        TemperatureScale::Celsius => celsius,
        TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        TemperatureScale::Kelvin => celsius + KELVIN_OFFSET,
    }
}

/// Formats a reading with three decimals and the scale's symbol, e.g. `32.000 °F`.
pub fn format_reading(value: f64, scale: TemperatureScale) -> String {
    format!("{value:.3} {}", scale.symbol())
}
