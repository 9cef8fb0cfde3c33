//! Numeric coercion for typed form input.
//!
//! The form apps never reject bad text; whatever cannot be read as a
//! number is taken as zero before a calculation runs.

use tracing::debug;

/// Parses a string as f64, falling back to `0.0` for empty, invalid or
/// non-finite text.
pub fn parse_or_zero(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => {
            debug!(input = %trimmed, "unparsable number coerced to zero");
            0.0
        }
    }
}

/// Parses a string as a non-negative count, returning `default` when it
/// cannot be read.
pub fn parse_count_or(value: &str, default: u32) -> u32 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return default;
    }
    trimmed.parse::<u32>().unwrap_or_else(|_| {
        debug!(input = %trimmed, default, "unparsable count replaced by default");
        default
    })
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
