use serde::{Deserialize, Serialize};

use crate::Amount;

/// Net balance change of the selected validators over one reporting interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancePoint {
    /// Interval timestamp in milliseconds
    #[serde(rename = "x")]
    pub timestamp_ms: i64,
    /// Income for the interval, in ether
    #[serde(rename = "y")]
    pub delta: Amount,
}

impl BalancePoint {
    pub fn new(timestamp_ms: i64, delta: Amount) -> Self {
        BalancePoint {
            timestamp_ms,
            delta,
        }
    }
}
