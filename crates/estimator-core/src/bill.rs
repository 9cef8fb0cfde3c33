//! Bill splitting.
//!
//! `per_person = amount * (1 + tip_percent / 100) / party_size`

use std::num::NonZeroU32;

use estimator_model::BillSplit;
use tracing::{debug, warn};

/// Returns each person's share of `amount` after adding `tip_percent`.
///
/// Never fails. A negative or non-finite amount or tip is taken as zero.
///
/// # Examples
/// ```
/// use std::num::NonZeroU32;
/// use estimator_core::split_bill;
///
/// let people = NonZeroU32::new(4).unwrap();
/// assert_eq!(split_bill(100.0, people, 10.0), 27.5);
/// ```
pub fn split_bill(amount: f64, party_size: NonZeroU32, tip_percent: f64) -> f64 {
    split_bill_breakdown(amount, party_size, tip_percent).per_person
}

/// Like [`split_bill`], but also reports the tip and the grand total.
pub fn split_bill_breakdown(amount: f64, party_size: NonZeroU32, tip_percent: f64) -> BillSplit {
    let amount = non_negative(amount, "amount");
    let tip_percent = non_negative(tip_percent, "tip_percent");

    // Tip is added, not multiplied in: 100 + 10% must be exactly 110,
    // and 100 * 1.1 is not.
    let tip_amount = amount * tip_percent / 100.0;
    let grand_total = amount + tip_amount;
    let per_person = grand_total / f64::from(party_size.get());
    debug!(
        amount,
        party_size = party_size.get(),
        tip_percent,
        per_person,
        "bill split"
    );

    BillSplit {
        amount,
        party_size,
        tip_percent,
        tip_amount,
        grand_total,
        per_person,
    }
}

fn non_negative(value: f64, field: &'static str) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!(field, value, "invalid input treated as zero");
        0.0
    }
}
