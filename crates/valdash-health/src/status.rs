use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use valdash_types::{EpochNumber, EpochSummary};

/// Minimum global participation rate for the chain to finalize (0.664).
pub const FINALIZATION_THRESHOLD: Decimal = Decimal::from_parts(664, 0, 0, false, 3);

/// Epochs after genesis during which low participation is not reported as
/// a finality problem.
pub const GENESIS_WINDOW_EPOCHS: EpochNumber = 7;

/// Chain health facts derived from one epoch summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Participation is below the finality threshold past the genesis window
    pub finalization_issue: bool,
    /// The chain has not produced its first blocks yet
    pub awaiting_genesis: bool,
    /// Genesis happened but the chain is still inside the genesis window
    pub early_genesis: bool,
}

impl HealthStatus {
    /// Derive the status for `summary`.
    ///
    /// `early_genesis` reads the finalization result computed in this same
    /// call, never a previous one.
    pub fn derive(summary: &EpochSummary) -> Self {
        let past_genesis_window = summary.epoch > GENESIS_WINDOW_EPOCHS;

        let finalization_issue = past_genesis_window
            && summary
                .global_participation_rate
                .is_below(FINALIZATION_THRESHOLD);

        let awaiting_genesis = summary.epoch == 0 && summary.proposed_blocks <= 1;

        let early_genesis = !awaiting_genesis && !finalization_issue && !past_genesis_window;

        HealthStatus {
            finalization_issue,
            awaiting_genesis,
            early_genesis,
        }
    }

    pub fn is_healthy(&self) -> bool {
        !self.finalization_issue && !self.awaiting_genesis
    }
}
