use serde::{Deserialize, Serialize};

use crate::rate::ParticipationRate;

/// Epoch number (sequential counter since genesis)
pub type EpochNumber = u64;

pub const SECONDS_PER_SLOT: i64 = 12;
pub const SLOTS_PER_EPOCH: i64 = 32;

/// Snapshot of the chain's current epoch as reported by the overview feed.
///
/// Replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochSummary {
    pub epoch: EpochNumber,
    #[serde(rename = "proposedblocks")]
    pub proposed_blocks: u64,
    #[serde(rename = "globalparticipationrate")]
    pub global_participation_rate: ParticipationRate,
}

impl EpochSummary {
    pub fn new(
        epoch: EpochNumber,
        proposed_blocks: u64,
        global_participation_rate: ParticipationRate,
    ) -> Self {
        EpochSummary {
            epoch,
            proposed_blocks,
            global_participation_rate,
        }
    }
}

/// Epoch containing the millisecond timestamp `ts_ms`.
///
/// Timestamps before genesis map to epoch 0.
pub fn epoch_at(genesis_ts: i64, ts_ms: i64) -> EpochNumber {
    let since_genesis = ts_ms.div_euclid(1000) - genesis_ts;
    let slot = since_genesis.div_euclid(SECONDS_PER_SLOT);
    let epoch = slot.div_euclid(SLOTS_PER_EPOCH);
    if epoch < 0 {
        0
    } else {
        epoch as EpochNumber
    }
}
