use serde::{Deserialize, Serialize};

use crate::error::ValDashError;

/// Outcome of a block proposal duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalOutcome {
    Proposed = 1,
    Missed = 2,
    Orphaned = 3,
}

impl ProposalOutcome {
    pub fn all() -> &'static [ProposalOutcome] {
        &[
            ProposalOutcome::Proposed,
            ProposalOutcome::Missed,
            ProposalOutcome::Orphaned,
        ]
    }

    pub const fn code(&self) -> i64 {
        *self as i64
    }
}

impl TryFrom<i64> for ProposalOutcome {
    type Error = ValDashError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ProposalOutcome::Proposed),
            2 => Ok(ProposalOutcome::Missed),
            3 => Ok(ProposalOutcome::Orphaned),
            other => Err(ValDashError::UnknownOutcome(other)),
        }
    }
}

/// One entry of the proposal activity feed.
///
/// The feed sends `[timestamp_secs, outcome_code]` pairs. The raw code is
/// kept so that codes this crate does not know survive decoding and can be
/// skipped downstream instead of failing the whole feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalEvent {
    pub timestamp_secs: i64,
    pub outcome: i64,
}

impl ProposalEvent {
    pub fn new(timestamp_secs: i64, outcome: ProposalOutcome) -> Self {
        ProposalEvent {
            timestamp_secs,
            outcome: outcome.code(),
        }
    }

    /// Build from the raw feed pair, unknown codes included.
    pub fn raw(timestamp_secs: i64, outcome: i64) -> Self {
        ProposalEvent {
            timestamp_secs,
            outcome,
        }
    }

    pub fn outcome(&self) -> Option<ProposalOutcome> {
        ProposalOutcome::try_from(self.outcome).ok()
    }
}

impl From<(i64, i64)> for ProposalEvent {
    fn from((timestamp_secs, outcome): (i64, i64)) -> Self {
        ProposalEvent::raw(timestamp_secs, outcome)
    }
}
