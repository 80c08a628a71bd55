use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use crate::error::{Result, ValDashError};

/// Fixed-point amount of ether with 9 decimal places (gwei precision)
///
/// Always within the range of a [`Decimal`] at scale 9, so every amount
/// converts to one losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i128);

/// Number of fractional digits carried by [`Amount`]
pub const DECIMALS: u32 = 9;

const SCALE: i128 = 1_000_000_000; // 10^9

impl Amount {
    /// Zero amount
    pub const ZERO: Amount = Amount(0);

    /// Create from whole ether
    pub const fn from_units(units: i64) -> Self {
        Amount((units as i128) * SCALE)
    }

    /// Create from gwei
    pub const fn from_gwei(gwei: i64) -> Self {
        Amount(gwei as i128)
    }

    /// Parse decimal text such as `"-0.5"`, `"123.456789"` or `"1e-7"`.
    ///
    /// Parsing is exact up to 9 fractional digits; anything finer is
    /// truncated toward zero.
    pub fn from_string(s: &str) -> Result<Self> {
        let value = parse_decimal(s.trim())
            .ok_or_else(|| ValDashError::InvalidAmount(format!("cannot parse: {}", s)))?;
        Amount::from_decimal(value)
            .ok_or_else(|| ValDashError::InvalidAmount(format!("out of range: {}", s)))
    }

    /// Truncate toward zero at 9 fractional digits. `None` if the value
    /// does not fit at that scale.
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        let mut scaled = value.trunc_with_scale(DECIMALS);
        scaled.rescale(DECIMALS);
        (scaled.scale() == DECIMALS).then(|| Amount(scaled.mantissa()))
    }

    pub fn to_decimal(&self) -> Decimal {
        Decimal::from_i128_with_scale(self.0, DECIMALS)
    }

    /// Check if amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format with `decimals` fractional digits, rounding half away from
    /// zero, and comma thousands separators (`1,234.500000`).
    pub fn format_grouped(&self, decimals: u32) -> String {
        let rounded = self
            .to_decimal()
            .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let digits = format!("{:.prec$}", rounded.abs(), prec = decimals as usize);

        match digits.split_once('.') {
            Some((whole, fraction)) => format!("{}{}.{}", sign, group_thousands(whole), fraction),
            None => format!("{}{}", sign, group_thousands(&digits)),
        }
    }

    /// Whole gwei with comma thousands separators (`-1,500,000,000`).
    pub fn format_gwei(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}", sign, group_thousands(&self.0.unsigned_abs().to_string()))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .or_else(|| parse_wide_exponent(text))
}

/// `Decimal::from_scientific` refuses exponents beyond its 28-digit scale,
/// even where the value itself fits (`0e30`, `1e-40`).
fn parse_wide_exponent(text: &str) -> Option<Decimal> {
    let (base, exponent) = text.split_once(|c: char| c == 'e' || c == 'E')?;
    let exponent: i32 = exponent.parse().ok()?;
    let mut value = Decimal::from_str(base).ok()?;

    if exponent >= 0 {
        let exponent = exponent.unsigned_abs();
        let scale = value.scale();
        value.set_scale(scale.saturating_sub(exponent)).ok()?;
        for _ in scale..exponent {
            if value.is_zero() {
                break;
            }
            value = value.checked_mul(Decimal::TEN)?;
        }
    } else {
        // Truncating at each step keeps the division exact
        value = value.trunc_with_scale(DECIMALS);
        for _ in 0..exponent.unsigned_abs() {
            if value.is_zero() {
                break;
            }
            value = value.checked_div(Decimal::TEN)?.trunc_with_scale(DECIMALS);
        }
    }
    Some(value)
}

impl FromStr for Amount {
    type Err = ValDashError;

    fn from_str(s: &str) -> Result<Self> {
        Amount::from_string(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Feeds deliver deltas either as JSON numbers or as decimal strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = match AmountRepr::deserialize(deserializer)? {
            AmountRepr::Text(s) => s,
            AmountRepr::Number(n) => n.to_string(),
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_parsing() {
        assert_eq!(Amount::from_string("1").unwrap(), Amount::from_units(1));
        assert_eq!(Amount::from_string("-0.5").unwrap(), Amount::from_gwei(-500_000_000));
        assert_eq!(Amount::from_string("0.000000001").unwrap(), Amount::from_gwei(1));
        assert_eq!(Amount::from_string("1e-7").unwrap(), Amount::from_gwei(100));
        assert_eq!(Amount::from_string("2.5E2").unwrap(), Amount::from_units(250));
        assert_eq!(Amount::from_string(".25").unwrap(), Amount::from_gwei(250_000_000));
        assert_eq!(" 3 ".parse::<Amount>().unwrap(), Amount::from_units(3));

        // Finer than gwei truncates toward zero
        assert_eq!(Amount::from_string("0.0000000019").unwrap(), Amount::from_gwei(1));
        assert_eq!(Amount::from_string("-0.0000000019").unwrap(), Amount::from_gwei(-1));
    }

    #[test]
    fn test_amount_wide_exponents() {
        assert_eq!(Amount::from_string("0e30").unwrap(), Amount::ZERO);
        assert_eq!(Amount::from_string("0.0E40").unwrap(), Amount::ZERO);
        assert_eq!(Amount::from_string("1e-40").unwrap(), Amount::ZERO);
        assert_eq!(
            Amount::from_string("100000000000000000000e-29").unwrap(),
            Amount::from_gwei(1)
        );
        assert_eq!(
            Amount::from_string("0.00000000001e30").unwrap(),
            Amount::from_string("10000000000000000000").unwrap()
        );
        assert!(Amount::from_string("1e30").is_err());

        let from_json: Amount = serde_json::from_str("\"0e30\"").unwrap();
        assert_eq!(from_json, Amount::ZERO);
    }

    #[test]
    fn test_amount_rejects_garbage() {
        assert!(Amount::from_string("").is_err());
        assert!(Amount::from_string("-").is_err());
        assert!(Amount::from_string(".").is_err());
        assert!(Amount::from_string("1.2.3").is_err());
        assert!(Amount::from_string("abc").is_err());
        assert!(Amount::from_string("1e").is_err());
    }

    #[test]
    fn test_display_is_exact() {
        assert_eq!(Amount::from_string("-0.5").unwrap().to_string(), "-0.500000000");
        assert_eq!(Amount::from_gwei(1).to_string(), "0.000000001");
        assert_eq!(Amount::from_units(32).to_string(), "32.000000000");
        assert_eq!(Amount::ZERO.to_string(), "0.000000000");
    }

    #[test]
    fn test_format_grouped() {
        let a = Amount::from_string("1234567.1234565").unwrap();
        assert_eq!(a.format_grouped(6), "1,234,567.123457");
        assert_eq!(a.format_grouped(0), "1,234,567");
        assert_eq!(Amount::from_string("-0.0000004").unwrap().format_grouped(6), "0.000000");
        assert_eq!(Amount::from_string("-0.0000005").unwrap().format_grouped(6), "-0.000001");
        assert_eq!(Amount::from_gwei(1).format_grouped(10), "0.0000000010");
        assert_eq!(Amount::from_units(100).format_grouped(2), "100.00");
    }

    #[test]
    fn test_format_grouped_wide_precision() {
        let big = Amount::from_gwei(i64::MAX);
        assert_eq!(big.format_grouped(9), "9,223,372,036.854775807");
        assert_eq!(
            big.format_grouped(30),
            "9,223,372,036.854775807000000000000000000000"
        );
        assert_eq!(Amount::from_units(i64::MIN).format_grouped(0), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_gwei() {
        assert_eq!(Amount::from_string("1234.0000005").unwrap().format_gwei(), "1,234,000,000,500");
        assert_eq!(Amount::from_string("-1.5").unwrap().format_gwei(), "-1,500,000,000");
        assert_eq!(Amount::ZERO.format_gwei(), "0");
    }

    #[test]
    fn test_serde_accepts_numbers_and_strings() {
        let from_number: Amount = serde_json::from_str("-0.5").unwrap();
        let from_text: Amount = serde_json::from_str("\"-0.5\"").unwrap();
        let from_int: Amount = serde_json::from_str("3").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(from_int, Amount::from_units(3));
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "\"-0.500000000\"");
    }
}
