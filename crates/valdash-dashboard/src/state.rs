use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use valdash_activity::{ActivityBuckets, FirstProposalCheck, ProposalSummary};
use valdash_health::HealthStatus;
use valdash_income::IncomePoint;
use valdash_types::{DataUnavailable, ValidatorSelector};

use crate::config::ChartWindow;

/// Lifecycle of one chart across refreshes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ChartState<T> {
    Idle,
    Loading,
    Loaded(T),
    Errored(DataUnavailable),
}

impl<T> ChartState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ChartState::Loading)
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, ChartState::Errored(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ChartState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> Default for ChartState<T> {
    fn default() -> Self {
        ChartState::Idle
    }
}

/// Proposal chart payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalActivity {
    pub buckets: ActivityBuckets,
    pub summary: ProposalSummary,
    /// Successful share of all proposals, in percent
    pub good_percentage: Option<Decimal>,
}

/// Everything the rendering layer needs after a refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub health: HealthStatus,
    pub balance_chart: ChartState<Vec<IncomePoint>>,
    /// `Errored` here means "no proposal chart", distinct from a chart
    /// with no bars
    pub proposal_chart: ChartState<ProposalActivity>,
    pub first_proposal: FirstProposalCheck,
    pub rank_percent_mode: bool,
    pub explorer_url: Option<String>,
    pub currency: String,
    pub chart_window: Option<ChartWindow>,
}

impl DashboardView {
    pub fn proposals(&self) -> Option<&ProposalSummary> {
        self.proposal_chart.loaded().map(|activity| &activity.summary)
    }

    /// The income chart has finished loading, successfully or not
    pub fn done_loading(&self) -> bool {
        matches!(
            self.balance_chart,
            ChartState::Loaded(_) | ChartState::Errored(_)
        )
    }
}

/// Handle for one refresh. Results are applied only while their ticket is
/// the newest one issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    pub generation: u64,
    pub selector: Option<ValidatorSelector>,
    pub foreign: bool,
}
