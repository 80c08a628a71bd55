use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValDashError};

/// Global participation rate of an epoch, an exact decimal in `[0, 1]`.
///
/// Held as a [`Decimal`] so threshold checks near the finality boundary
/// never go through binary floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ParticipationRate(Decimal);

impl ParticipationRate {
    pub const ZERO: ParticipationRate = ParticipationRate(Decimal::ZERO);
    pub const FULL: ParticipationRate = ParticipationRate(Decimal::ONE);

    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(ValDashError::InvalidRate(format!(
                "{} is outside [0, 1]",
                value
            )));
        }
        Ok(ParticipationRate(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_below(&self, threshold: Decimal) -> bool {
        self.0 < threshold
    }
}

impl FromStr for ParticipationRate {
    type Err = ValDashError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let value = Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| ValDashError::InvalidRate(format!("cannot parse: {}", s)))?;
        ParticipationRate::new(value)
    }
}

impl TryFrom<Decimal> for ParticipationRate {
    type Error = ValDashError;

    fn try_from(value: Decimal) -> Result<Self> {
        ParticipationRate::new(value)
    }
}

impl fmt::Display for ParticipationRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ParticipationRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// The epoch endpoint has shipped the rate both quoted and unquoted.
#[derive(Deserialize)]
#[serde(untagged)]
enum RateRepr {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for ParticipationRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = match RateRepr::deserialize(deserializer)? {
            RateRepr::Text(s) => s,
            RateRepr::Number(n) => n.to_string(),
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact() {
        let rate: ParticipationRate = "0.664".parse().unwrap();
        assert_eq!(rate.value(), Decimal::new(664, 3));
        assert!(!rate.is_below(Decimal::new(664, 3)));

        let just_below: ParticipationRate = "0.66399999999999999999".parse().unwrap();
        assert!(just_below.is_below(Decimal::new(664, 3)));
    }

    #[test]
    fn test_scientific_notation() {
        let rate: ParticipationRate = "6.64e-1".parse().unwrap();
        assert_eq!(rate.value(), Decimal::new(664, 3));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!("1.0001".parse::<ParticipationRate>().is_err());
        assert!("-0.1".parse::<ParticipationRate>().is_err());
        assert!("nope".parse::<ParticipationRate>().is_err());
        assert!("0".parse::<ParticipationRate>().is_ok());
        assert!("1".parse::<ParticipationRate>().is_ok());
    }

    #[test]
    fn test_serde_number_or_string() {
        let quoted: ParticipationRate = serde_json::from_str("\"0.5\"").unwrap();
        let bare: ParticipationRate = serde_json::from_str("0.5").unwrap();
        assert_eq!(quoted, bare);
        assert_eq!(serde_json::to_string(&bare).unwrap(), "\"0.5\"");
    }
}
