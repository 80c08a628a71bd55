use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::Result;

/// Show validator rank as a percentile instead of an absolute position
pub const RANK_PERCENT_MODE: &str = "rank_percent_mode";

/// The user has acknowledged their first block proposal
pub const FIRST_PROPOSAL_EXECUTED: &str = "first_proposal_executed";

/// Persisted boolean settings.
pub trait SettingsStore {
    fn get_bool(&self, key: &str, default: bool) -> impl Future<Output = Result<bool>> + Send;

    fn set_bool(&self, key: &str, value: bool) -> impl Future<Output = Result<()>> + Send;
}

/// In-memory settings store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: Arc<RwLock<BTreeMap<String, bool>>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize with pre-set values
    pub fn with_values(values: BTreeMap<String, bool>) -> Self {
        MemorySettings {
            values: Arc::new(RwLock::new(values)),
        }
    }

    pub async fn snapshot(&self) -> BTreeMap<String, bool> {
        self.values.read().await.clone()
    }
}

impl SettingsStore for MemorySettings {
    async fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        Ok(self.values.read().await.get(key).copied().unwrap_or(default))
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
