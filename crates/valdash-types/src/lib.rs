mod amount;
mod balance;
mod epoch;
mod error;
mod proposal;
mod rate;
mod validator;

pub use amount::{Amount, DECIMALS};
pub use balance::BalancePoint;
pub use epoch::{epoch_at, EpochNumber, EpochSummary, SECONDS_PER_SLOT, SLOTS_PER_EPOCH};
pub use error::{DataUnavailable, Result, ValDashError};
pub use proposal::{ProposalEvent, ProposalOutcome};
pub use rate::ParticipationRate;
pub use validator::{ForeignValidator, OverviewData, ValidatorSelector};
