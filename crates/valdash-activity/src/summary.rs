use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::classifier::ActivityBuckets;

/// Proposal win/loss counts shown next to the proposal chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalSummary {
    pub good: usize,
    pub bad: usize,
}

impl ProposalSummary {
    pub fn total(&self) -> usize {
        self.good + self.bad
    }

    /// Share of successful proposals in percent, two decimal places.
    /// `None` when there were no proposals at all.
    pub fn good_percentage(&self) -> Option<Decimal> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let ratio = Decimal::from(self.good) * Decimal::ONE_HUNDRED / Decimal::from(total);
        Some(ratio.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

pub fn summarize(buckets: &ActivityBuckets) -> ProposalSummary {
    ProposalSummary {
        good: buckets.proposed.len(),
        bad: buckets.missed.len() + buckets.orphaned.len(),
    }
}
