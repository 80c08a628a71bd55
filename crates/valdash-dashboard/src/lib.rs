mod config;
mod currency;
mod dashboard;
mod error;
mod feed;
mod links;
mod replay;
mod settings;
mod state;

pub use config::{ChartWindow, DashboardConfig, NetworkConfig};
pub use currency::{CurrencyToggle, NATIVE_CURRENCY};
pub use dashboard::Dashboard;
pub use error::{DashboardError, Result};
pub use feed::{FeedSource, StaticFeed};
pub use links::{base_browser_url, browser_url};
pub use replay::ReplayFixture;
pub use settings::{MemorySettings, SettingsStore, FIRST_PROPOSAL_EXECUTED, RANK_PERCENT_MODE};
pub use state::{ChartState, DashboardView, ProposalActivity, RefreshTicket};
