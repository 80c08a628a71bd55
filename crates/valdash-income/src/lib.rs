mod series;
mod tooltip;

pub use series::{build, validate_balance_series, ColorTag, IncomePoint, MIN_BALANCE_POINTS};
pub use tooltip::{income_tooltip, IncomeTooltip, NativeUnit, UnitConverter, TOOLTIP_DECIMALS};
