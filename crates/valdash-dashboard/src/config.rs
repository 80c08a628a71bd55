use serde::{Deserialize, Serialize};
use std::path::Path;
use valdash_income::MIN_BALANCE_POINTS;

use crate::error::{DashboardError, Result};

/// Configuration for the dashboard host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Network the dashboard is pointed at
    pub network: NetworkConfig,

    /// Block explorer host, prefixed with the network name in links
    pub explorer_host: String,

    /// Fewest balance points the income chart is drawn for
    pub min_balance_points: usize,

    /// Visible range of both charts, in days
    pub chart_range_days: u32,

    /// Display unit the currency toggle returns to
    pub preferred_currency: String,
}

/// Network naming and genesis time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Explorer subdomain prefix, e.g. `"prater."`; empty for mainnet
    pub net: String,

    /// Genesis time in unix seconds
    pub genesis_ts: i64,
}

/// Chart window handed to the chart sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartWindow {
    pub range_ms: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            explorer_host: "beaconcha.in".to_string(),
            min_balance_points: MIN_BALANCE_POINTS,
            chart_range_days: 32,
            preferred_currency: "ETHER".to_string(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            net: String::new(),
            genesis_ts: 1_606_824_023, // mainnet
        }
    }
}

impl DashboardConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: DashboardConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_balance_points == 0 {
            return Err(DashboardError::Config(
                "min_balance_points must be at least 1".to_string(),
            ));
        }
        if self.explorer_host.trim().is_empty() {
            return Err(DashboardError::Config("explorer_host is empty".to_string()));
        }
        Ok(())
    }

    pub fn chart_window(&self) -> ChartWindow {
        ChartWindow {
            range_ms: i64::from(self.chart_range_days) * 24 * 60 * 60 * 1000,
        }
    }
}
