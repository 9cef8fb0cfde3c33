//! Bill-splitting result types.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Tip percentages offered by the bill splitter, in picker order.
pub const TIP_PERCENTAGES: [u32; 5] = [10, 15, 20, 25, 0];

/// Tip percentage selected when none is given.
pub const DEFAULT_TIP_PERCENT: f64 = 20.0;

/// Full breakdown of a split bill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillSplit {
    /// Check amount before tip.
    pub amount: f64,
    pub party_size: NonZeroU32,
    pub tip_percent: f64,
    pub tip_amount: f64,
    /// Amount plus tip.
    pub grand_total: f64,
    pub per_person: f64,
}
