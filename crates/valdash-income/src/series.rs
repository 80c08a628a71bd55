use serde::{Deserialize, Serialize};
use valdash_types::{Amount, BalancePoint, DataUnavailable};

/// Fewest balance points the income chart is drawn for.
pub const MIN_BALANCE_POINTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Negative,
    Default,
}

/// One income bar, tagged for coloring by the chart sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomePoint {
    pub x: i64,
    pub y: Amount,
    pub color_tag: ColorTag,
}

impl From<&BalancePoint> for IncomePoint {
    fn from(point: &BalancePoint) -> Self {
        IncomePoint {
            x: point.timestamp_ms,
            y: point.delta,
            color_tag: if point.delta.is_negative() {
                ColorTag::Negative
            } else {
                ColorTag::Default
            },
        }
    }
}

/// Map balance deltas 1:1 onto tagged income points, preserving order.
pub fn build(points: &[BalancePoint]) -> Vec<IncomePoint> {
    points.iter().map(IncomePoint::from).collect()
}

/// Check a fetched balance series against the minimum the chart needs.
///
/// `min_points` is normally [`MIN_BALANCE_POINTS`].
pub fn validate_balance_series(
    points: Option<&[BalancePoint]>,
    min_points: usize,
) -> Result<&[BalancePoint], DataUnavailable> {
    match points {
        None => Err(DataUnavailable::NoData),
        Some([]) => Err(DataUnavailable::NoData),
        Some(points) if points.len() < min_points => Err(DataUnavailable::InsufficientData {
            received: points.len(),
            required: min_points,
        }),
        Some(points) => Ok(points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(ts: i64, delta: &str) -> BalancePoint {
        BalancePoint::new(ts, Amount::from_string(delta).unwrap())
    }

    #[test]
    fn test_color_tagging() {
        let income = build(&[point(1, "-0.5"), point(2, "0"), point(3, "0.01")]);

        assert_eq!(
            income[0],
            IncomePoint {
                x: 1,
                y: Amount::from_string("-0.5").unwrap(),
                color_tag: ColorTag::Negative
            }
        );
        assert_eq!(income[1].color_tag, ColorTag::Default);
        assert_eq!(income[2].color_tag, ColorTag::Default);
    }

    #[test]
    fn test_validate_threshold() {
        let three = vec![point(1, "1"), point(2, "1"), point(3, "1")];
        let four = vec![point(1, "1"), point(2, "1"), point(3, "1"), point(4, "1")];

        assert_eq!(
            validate_balance_series(Some(&three), MIN_BALANCE_POINTS),
            Err(DataUnavailable::InsufficientData { received: 3, required: 4 })
        );
        assert_eq!(validate_balance_series(Some(&four), MIN_BALANCE_POINTS).map(|p| p.len()), Ok(4));
    }

    #[test]
    fn test_validate_missing_or_empty() {
        assert_eq!(validate_balance_series(None, MIN_BALANCE_POINTS), Err(DataUnavailable::NoData));
        assert_eq!(validate_balance_series(Some(&[]), MIN_BALANCE_POINTS), Err(DataUnavailable::NoData));
    }
}
