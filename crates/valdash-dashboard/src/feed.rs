use std::future::Future;
use valdash_types::{BalancePoint, ProposalEvent, ValidatorSelector};

use crate::error::{DashboardError, Result};

/// Source of the two chart series.
///
/// `Ok(None)` means the request succeeded but the backend had nothing for
/// the selector.
pub trait FeedSource {
    fn fetch_balances(
        &self,
        selector: &ValidatorSelector,
    ) -> impl Future<Output = Result<Option<Vec<BalancePoint>>>> + Send;

    fn fetch_proposals(
        &self,
        selector: &ValidatorSelector,
    ) -> impl Future<Output = Result<Option<Vec<ProposalEvent>>>> + Send;
}

/// Feed that replays fixed series, for tests and offline replays.
#[derive(Debug, Clone, Default)]
pub struct StaticFeed {
    balances: Option<Vec<BalancePoint>>,
    proposals: Option<Vec<ProposalEvent>>,
    fail_balances: bool,
    fail_proposals: bool,
}

impl StaticFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balances(mut self, balances: Vec<BalancePoint>) -> Self {
        self.balances = Some(balances);
        self
    }

    pub fn with_proposals(mut self, proposals: Vec<ProposalEvent>) -> Self {
        self.proposals = Some(proposals);
        self
    }

    /// Make balance requests fail outright
    pub fn failing_balances(mut self) -> Self {
        self.fail_balances = true;
        self
    }

    /// Make proposal requests fail outright
    pub fn failing_proposals(mut self) -> Self {
        self.fail_proposals = true;
        self
    }
}

impl FeedSource for StaticFeed {
    async fn fetch_balances(&self, selector: &ValidatorSelector) -> Result<Option<Vec<BalancePoint>>> {
        if self.fail_balances {
            return Err(DashboardError::Feed(format!("balances unavailable for {}", selector)));
        }
        Ok(self.balances.clone())
    }

    async fn fetch_proposals(&self, selector: &ValidatorSelector) -> Result<Option<Vec<ProposalEvent>>> {
        if self.fail_proposals {
            return Err(DashboardError::Feed(format!("proposals unavailable for {}", selector)));
        }
        Ok(self.proposals.clone())
    }
}
