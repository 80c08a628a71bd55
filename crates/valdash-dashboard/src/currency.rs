use serde::{Deserialize, Serialize};

/// Unit every amount is natively denominated in
pub const NATIVE_CURRENCY: &str = "ETHER";

/// Flip between the native unit and the user's preferred unit.
///
/// Switching to native stashes the preference; switching back restores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyToggle {
    current: String,
    stashed: Option<String>,
}

impl CurrencyToggle {
    pub fn new(preferred: impl Into<String>) -> Self {
        CurrencyToggle {
            current: preferred.into(),
            stashed: None,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_native(&self) -> bool {
        self.current == NATIVE_CURRENCY
    }

    /// Returns the unit now in effect
    pub fn switch(&mut self) -> &str {
        if self.is_native() {
            if let Some(stashed) = self.stashed.take() {
                self.current = stashed;
            }
        } else {
            let preferred = std::mem::replace(&mut self.current, NATIVE_CURRENCY.to_string());
            self.stashed = Some(preferred);
        }
        &self.current
    }
}
