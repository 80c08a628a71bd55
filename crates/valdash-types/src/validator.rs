use serde::{Deserialize, Serialize};
use std::fmt;

use crate::epoch::EpochSummary;

/// Comma-joined list of validator indices or pubkeys that charts are
/// requested for, e.g. `"1,2,0xabc..."`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatorSelector(String);

impl ValidatorSelector {
    pub fn new(selector: impl Into<String>) -> Self {
        ValidatorSelector(selector.into())
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = ids
            .into_iter()
            .map(|id| id.as_ref().trim().to_string())
            .filter(|id| !id.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        ValidatorSelector(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.split(',').map(str::trim).filter(|id| !id.is_empty())
    }
}

impl fmt::Display for ValidatorSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ValidatorSelector {
    fn from(s: &str) -> Self {
        ValidatorSelector(s.to_string())
    }
}

/// A validator viewed read-only, not owned by the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignValidator {
    pub pubkey: String,
}

/// Overview snapshot handed to the dashboard on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewData {
    #[serde(default)]
    pub current_epoch: Option<EpochSummary>,
    #[serde(default)]
    pub lazy_chart_validators: Option<ValidatorSelector>,
    #[serde(default)]
    pub foreign_validator: Option<ForeignValidator>,
}

impl OverviewData {
    pub fn is_foreign(&self) -> bool {
        self.foreign_validator.is_some()
    }

    /// Selector to fetch charts for, if one is present and non-empty.
    pub fn chart_selector(&self) -> Option<&ValidatorSelector> {
        self.lazy_chart_validators
            .as_ref()
            .filter(|selector| !selector.is_empty())
    }
}
