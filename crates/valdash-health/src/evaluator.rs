use tracing::debug;
use valdash_types::{EpochNumber, EpochSummary};

use crate::status::HealthStatus;

/// Keeps the most recent [`HealthStatus`] across refreshes.
///
/// A refresh without an epoch summary leaves the previous status in place.
#[derive(Debug, Clone, Default)]
pub struct EpochHealthEvaluator {
    status: HealthStatus,
    evaluated_epoch: Option<EpochNumber>,
}

impl EpochHealthEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(&mut self, summary: Option<&EpochSummary>) -> &HealthStatus {
        let Some(summary) = summary else {
            return &self.status;
        };

        let status = HealthStatus::derive(summary);
        if status != self.status {
            debug!(
                epoch = summary.epoch,
                finalization_issue = status.finalization_issue,
                awaiting_genesis = status.awaiting_genesis,
                early_genesis = status.early_genesis,
                "health status changed"
            );
        }
        self.status = status;
        self.evaluated_epoch = Some(summary.epoch);
        &self.status
    }

    pub fn status(&self) -> &HealthStatus {
        &self.status
    }

    /// Epoch of the last summary evaluated, if any
    pub fn evaluated_epoch(&self) -> Option<EpochNumber> {
        self.evaluated_epoch
    }
}
