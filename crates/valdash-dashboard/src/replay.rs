use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use valdash_types::{BalancePoint, OverviewData, ProposalEvent};

use crate::error::Result;
use crate::feed::StaticFeed;
use crate::settings::MemorySettings;

/// Recorded dashboard input: one overview snapshot, the series the feed
/// returned for it, and the stored settings at the time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplayFixture {
    pub overview: OverviewData,
    #[serde(default)]
    pub balances: Option<Vec<BalancePoint>>,
    #[serde(default)]
    pub proposals: Option<Vec<ProposalEvent>>,
    #[serde(default)]
    pub settings: BTreeMap<String, bool>,
}

impl ReplayFixture {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Split into the overview and collaborators that serve the recording
    pub fn into_parts(self) -> (OverviewData, StaticFeed, MemorySettings) {
        let mut feed = StaticFeed::new();
        if let Some(balances) = self.balances {
            feed = feed.with_balances(balances);
        }
        if let Some(proposals) = self.proposals {
            feed = feed.with_proposals(proposals);
        }
        (self.overview, feed, MemorySettings::with_values(self.settings))
    }
}
