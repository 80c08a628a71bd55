use tracing::{debug, info, warn};
use valdash_activity::{check_first, classify, summarize, CelebrationLatch, FirstProposalCheck};
use valdash_health::{EpochHealthEvaluator, HealthStatus};
use valdash_income::{build, income_tooltip, validate_balance_series, IncomeTooltip, UnitConverter};
use valdash_types::{BalancePoint, DataUnavailable, OverviewData, ProposalEvent};

use crate::config::DashboardConfig;
use crate::currency::CurrencyToggle;
use crate::error::Result;
use crate::feed::FeedSource;
use crate::links::browser_url;
use crate::settings::{SettingsStore, FIRST_PROPOSAL_EXECUTED, RANK_PERCENT_MODE};
use crate::state::{ChartState, DashboardView, ProposalActivity, RefreshTicket};

/// Host controller for one validator dashboard.
///
/// Owns the session state (celebration latch, refresh generation) and turns
/// overview snapshots plus fetched series into a [`DashboardView`].
pub struct Dashboard<F, S> {
    config: DashboardConfig,
    feed: F,
    settings: S,
    health: EpochHealthEvaluator,
    latch: CelebrationLatch,
    currency: CurrencyToggle,
    generation: u64,
    view: DashboardView,
}

impl<F: FeedSource, S: SettingsStore> Dashboard<F, S> {
    pub fn new(config: DashboardConfig, feed: F, settings: S) -> Self {
        let currency = CurrencyToggle::new(config.preferred_currency.clone());
        let view = DashboardView {
            currency: currency.current().to_string(),
            chart_window: Some(config.chart_window()),
            ..Default::default()
        };

        Self {
            config,
            feed,
            settings,
            health: EpochHealthEvaluator::new(),
            latch: CelebrationLatch::new(),
            currency,
            generation: 0,
            view,
        }
    }

    /// Share an existing session latch instead of starting a fresh one
    pub fn with_latch(mut self, latch: CelebrationLatch) -> Self {
        self.latch = latch;
        self
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn health(&self) -> &HealthStatus {
        self.health.status()
    }

    pub fn celebration_latch(&self) -> &CelebrationLatch {
        &self.latch
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Load persisted display preferences
    pub async fn init(&mut self) {
        self.view.rank_percent_mode = match self.settings.get_bool(RANK_PERCENT_MODE, false).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "could not read rank display mode, using default");
                false
            }
        };
    }

    /// Fetch both series for `overview` and apply them.
    ///
    /// Fetch failures end up as chart states; nothing here returns an error.
    pub async fn refresh(&mut self, overview: OverviewData) -> &DashboardView {
        let ticket = self.begin_refresh(&overview);

        let Some(selector) = ticket.selector.clone() else {
            return &self.view;
        };

        let feed = &self.feed;
        let settings = &self.settings;
        let (balances, proposals, acknowledged) = tokio::join!(
            feed.fetch_balances(&selector),
            feed.fetch_proposals(&selector),
            async {
                if ticket.foreign {
                    return false;
                }
                match settings.get_bool(FIRST_PROPOSAL_EXECUTED, false).await {
                    Ok(value) => value,
                    Err(e) => {
                        warn!(error = %e, "could not read first proposal flag");
                        false
                    }
                }
            }
        );

        self.apply_balances(&ticket, balances);
        self.apply_proposals(&ticket, proposals, acknowledged);
        &self.view
    }

    /// Start a refresh: evaluate health, mark charts loading and issue a
    /// ticket for the fetches.
    ///
    /// Without a chart selector the charts and explorer link keep their
    /// previous state.
    pub fn begin_refresh(&mut self, overview: &OverviewData) -> RefreshTicket {
        self.generation += 1;
        let foreign = overview.is_foreign();

        if !foreign {
            self.view.health = *self.health.evaluate(overview.current_epoch.as_ref());
        }

        if let Some(url) = browser_url(&self.config, overview) {
            self.view.explorer_url = Some(url);
        }

        let selector = overview.chart_selector().cloned();
        if selector.is_some() {
            self.view.balance_chart = ChartState::Loading;
            self.view.proposal_chart = ChartState::Loading;
        } else {
            debug!(generation = self.generation, "no chart selector, keeping previous charts");
        }

        info!(generation = self.generation, foreign, "refresh started");

        RefreshTicket {
            generation: self.generation,
            selector,
            foreign,
        }
    }

    pub fn is_current(&self, ticket: &RefreshTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a balance fetch result. Returns false if the ticket was stale
    /// and the result discarded.
    pub fn apply_balances(
        &mut self,
        ticket: &RefreshTicket,
        fetched: Result<Option<Vec<BalancePoint>>>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(stale = ticket.generation, current = self.generation, "discarding balance result");
            return false;
        }

        let points = match fetched {
            Ok(points) => points,
            Err(e) => {
                warn!(error = %e, "balance fetch failed");
                None
            }
        };

        self.view.balance_chart =
            match validate_balance_series(points.as_deref(), self.config.min_balance_points) {
                Ok(valid) => ChartState::Loaded(build(valid)),
                Err(reason) => {
                    info!(%reason, "income chart unavailable");
                    ChartState::Errored(reason)
                }
            };
        true
    }

    /// Apply a proposal fetch result. `acknowledged` is the persisted
    /// first-proposal flag. Returns false if the ticket was stale.
    pub fn apply_proposals(
        &mut self,
        ticket: &RefreshTicket,
        fetched: Result<Option<Vec<ProposalEvent>>>,
        acknowledged: bool,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(stale = ticket.generation, current = self.generation, "discarding proposal result");
            return false;
        }

        let events = match fetched {
            Ok(Some(events)) if !events.is_empty() => events,
            Ok(_) => {
                self.view.proposal_chart = ChartState::Errored(DataUnavailable::NoData);
                return true;
            }
            Err(e) => {
                warn!(error = %e, "proposal fetch failed");
                self.view.proposal_chart = ChartState::Errored(DataUnavailable::NoData);
                return true;
            }
        };

        let buckets = classify(&events);
        let summary = summarize(&buckets);
        let good_percentage = summary.good_percentage();

        let check = check_first(&buckets.proposed, acknowledged, ticket.foreign, &self.latch);
        if check.should_celebrate {
            info!("first block proposal detected");
        }
        self.view.first_proposal = check;

        self.view.proposal_chart = ChartState::Loaded(ProposalActivity {
            buckets,
            summary,
            good_percentage,
        });
        true
    }

    /// Hover text for bar `index` of the income chart, converted with the
    /// rendering layer's `converter`. `None` while the chart is not loaded
    /// or the index is out of range.
    pub fn income_tooltip<C: UnitConverter + ?Sized>(
        &self,
        index: usize,
        converter: &C,
    ) -> Option<IncomeTooltip> {
        let point = self.view.balance_chart.loaded()?.get(index)?;
        income_tooltip(point, converter)
    }

    /// Persist that the first proposal was seen and hide the message
    pub async fn acknowledge_first_proposal(&mut self) -> Result<()> {
        self.settings.set_bool(FIRST_PROPOSAL_EXECUTED, true).await?;
        self.view.first_proposal = FirstProposalCheck::default();
        Ok(())
    }

    /// Flip the rank display mode and persist it. Returns the new mode.
    pub async fn toggle_rank_mode(&mut self) -> Result<bool> {
        let mode = !self.view.rank_percent_mode;
        self.view.rank_percent_mode = mode;
        self.settings.set_bool(RANK_PERCENT_MODE, mode).await?;
        Ok(mode)
    }

    /// Flip between the native unit and the preferred display unit
    pub fn switch_currency(&mut self) -> &str {
        self.view.currency = self.currency.switch().to_string();
        &self.view.currency
    }
}
