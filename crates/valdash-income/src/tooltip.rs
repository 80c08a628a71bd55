use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use valdash_types::Amount;

use crate::series::IncomePoint;

/// Fractional digits of the ether line in the income tooltip
pub const TOOLTIP_DECIMALS: u32 = 6;

/// Converts ether amounts into the user's preferred display unit.
///
/// Fiat conversion lives with the price service; only the native units are
/// implemented here.
pub trait UnitConverter {
    /// Name of the preferred unit, e.g. `"ETHER"` or `"USD"`
    fn preferred_unit(&self) -> &str;

    /// Render `amount` (in ether) in the preferred unit
    fn convert_to_preferred(&self, amount: Amount) -> String;
}

/// Units that need no exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NativeUnit {
    Ether,
    Gwei,
}

impl UnitConverter for NativeUnit {
    fn preferred_unit(&self) -> &str {
        match self {
            NativeUnit::Ether => "ETHER",
            NativeUnit::Gwei => "GWEI",
        }
    }

    fn convert_to_preferred(&self, amount: Amount) -> String {
        match self {
            NativeUnit::Ether => format!("{} ETH", amount.format_grouped(5)),
            NativeUnit::Gwei => format!("{} Gwei", amount.format_gwei()),
        }
    }
}

/// Text shown when hovering an income bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTooltip {
    /// Income in ether, `TOOLTIP_DECIMALS` places
    pub income: String,
    /// Income in the preferred unit
    pub converted: String,
    pub at: DateTime<Utc>,
}

/// Build the tooltip for `point`; `None` if its timestamp is not representable.
pub fn income_tooltip<C: UnitConverter + ?Sized>(
    point: &IncomePoint,
    converter: &C,
) -> Option<IncomeTooltip> {
    let at = DateTime::from_timestamp_millis(point.x)?;
    Some(IncomeTooltip {
        income: format!("{} Ether", point.y.format_grouped(TOOLTIP_DECIMALS)),
        converted: converter.convert_to_preferred(point.y),
        at,
    })
}
