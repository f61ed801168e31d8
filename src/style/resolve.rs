//! Stop-table resolution.
//!
//! Pure functions mapping one property value to one output value. Both
//! resolvers share the same contract:
//!
//! - interpolate mode treats the stops as a piecewise-linear function:
//!   values below the first threshold clamp to the first output, values
//!   at or above the last threshold clamp to the last output, and an
//!   exact threshold hit returns that stop's output exactly;
//! - match (and categorical) mode is an exact-key lookup;
//! - an empty table, a missing value, or a value the mode cannot use
//!   resolves to the default.
//!
//! Ascending threshold order in interpolate mode is a precondition the
//! caller owns; unsorted tables produce unspecified output.

use serde_json::Value;

use super::error::StyleError;
use super::stops::{ColorStyle, FunctionType, NumericStyle};
use crate::color::Rgb;

/// Resolves a numeric attribute for one property value.
///
/// # Example
///
/// ```rust
/// use cartogl::{numeric_map, NumericStyle};
/// use serde_json::json;
///
/// let style = NumericStyle::new(vec![(json!(0), 1.0), (json!(10), 100.0)], 0.0);
/// assert_eq!(numeric_map(Some(&json!(5)), &style), 50.5);
/// assert_eq!(numeric_map(None, &style), 0.0);
/// ```
pub fn numeric_map(value: Option<&Value>, style: &NumericStyle) -> f64 {
    let Some(value) = value else {
        return style.default;
    };
    if style.function.is_match() {
        return match_lookup(value, &style.stops)
            .copied()
            .unwrap_or(style.default);
    }
    let Some(value) = value.as_f64() else {
        return style.default;
    };
    match bracket(value, &style.stops) {
        Bracket::Empty => style.default,
        Bracket::Below => style.stops[0].1,
        Bracket::Above => style.stops[style.stops.len() - 1].1,
        Bracket::Between { lower, fraction } => {
            let (_, low) = style.stops[lower];
            let (_, high) = style.stops[lower + 1];
            low + (high - low) * fraction
        }
    }
}

/// Resolves a color attribute for one property value.
///
/// Interpolate mode normalizes the two bracketing colors to RGB and
/// blends component-wise; the blended color is rendered as an
/// `rgb(r,g,b)` string. Clamped and exact-hit values return the stop's
/// color string verbatim.
///
/// # Errors
///
/// Returns [`StyleError::InvalidColor`] if a bracketing color cannot be
/// parsed. Colors that are never interpolated are passed through
/// unchecked, matching the permissive behavior of match-mode tables.
pub fn color_map(value: Option<&Value>, style: &ColorStyle) -> Result<String, StyleError> {
    let Some(value) = value else {
        return Ok(style.default.clone());
    };
    if style.function.is_match() {
        return Ok(match_lookup(value, &style.stops)
            .cloned()
            .unwrap_or_else(|| style.default.clone()));
    }
    let Some(value) = value.as_f64() else {
        return Ok(style.default.clone());
    };
    match bracket(value, &style.stops) {
        Bracket::Empty => Ok(style.default.clone()),
        Bracket::Below => Ok(style.stops[0].1.clone()),
        Bracket::Above => Ok(style.stops[style.stops.len() - 1].1.clone()),
        Bracket::Between { lower, fraction } => {
            let low: Rgb = style.stops[lower].1.parse()?;
            let high: Rgb = style.stops[lower + 1].1.parse()?;
            Ok(low.lerp(high, fraction).to_css())
        }
    }
}

/// Exact-key lookup over a stop table.
///
/// Numeric keys compare by value, so integer and float spellings of the
/// same number match each other.
fn match_lookup<'a, T>(value: &Value, stops: &'a [(Value, T)]) -> Option<&'a T> {
    stops
        .iter()
        .find(|(key, _)| keys_equal(key, value))
        .map(|(_, output)| output)
}

fn keys_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

/// Where a numeric value falls relative to a stop table.
enum Bracket {
    /// Table is empty or has non-numeric thresholds.
    Empty,
    /// Below the first threshold.
    Below,
    /// At or above the last threshold.
    Above,
    /// Between stops `lower` and `lower + 1`, at the given fraction.
    Between { lower: usize, fraction: f64 },
}

fn bracket<T>(value: f64, stops: &[(Value, T)]) -> Bracket {
    let thresholds: Option<Vec<f64>> = stops.iter().map(|(key, _)| key.as_f64()).collect();
    let Some(thresholds) = thresholds else {
        return Bracket::Empty;
    };
    let Some((&first, &last)) = thresholds.first().zip(thresholds.last()) else {
        return Bracket::Empty;
    };
    if value < first {
        return Bracket::Below;
    }
    if value >= last {
        return Bracket::Above;
    }
    // Last stop whose threshold does not exceed the value. An exact hit
    // yields fraction 0, returning that stop's output unmodified.
    let lower = thresholds
        .iter()
        .rposition(|&t| t <= value)
        .unwrap_or(0);
    let span = thresholds[lower + 1] - thresholds[lower];
    let fraction = if span == 0.0 {
        0.0
    } else {
        (value - thresholds[lower]) / span
    };
    Bracket::Between { lower, fraction }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn radius_style() -> NumericStyle {
        NumericStyle::new(
            vec![(json!(0), 1.0), (json!(10), 100.0), (json!(20), 10.0)],
            -1.0,
        )
    }

    #[test]
    fn test_interpolate_midpoint() {
        let style = NumericStyle::new(vec![(json!(0), 1.0), (json!(10), 100.0)], 0.0);
        assert_eq!(numeric_map(Some(&json!(5)), &style), 50.5);
    }

    #[test]
    fn test_interpolate_below_first_clamps() {
        assert_eq!(numeric_map(Some(&json!(-100)), &radius_style()), 1.0);
    }

    #[test]
    fn test_interpolate_at_or_above_last_clamps() {
        assert_eq!(numeric_map(Some(&json!(20)), &radius_style()), 10.0);
        assert_eq!(numeric_map(Some(&json!(1e9)), &radius_style()), 10.0);
    }

    #[test]
    fn test_interpolate_exact_threshold_hit() {
        // No interpolation artifact on an exact threshold.
        assert_eq!(numeric_map(Some(&json!(10)), &radius_style()), 100.0);
        assert_eq!(numeric_map(Some(&json!(0)), &radius_style()), 1.0);
    }

    #[test]
    fn test_interpolate_empty_stops_gives_default() {
        let style = NumericStyle::new(vec![], 7.5);
        assert_eq!(numeric_map(Some(&json!(3)), &style), 7.5);
    }

    #[test]
    fn test_missing_value_gives_default() {
        assert_eq!(numeric_map(None, &radius_style()), -1.0);
    }

    #[test]
    fn test_non_numeric_value_gives_default() {
        assert_eq!(numeric_map(Some(&json!("ten")), &radius_style()), -1.0);
        assert_eq!(numeric_map(Some(&json!(null)), &radius_style()), -1.0);
    }

    #[test]
    fn test_non_numeric_threshold_gives_default() {
        let style = NumericStyle::new(vec![(json!("a"), 1.0), (json!(10), 2.0)], 9.0);
        assert_eq!(numeric_map(Some(&json!(5)), &style), 9.0);
    }

    #[test]
    fn test_match_exact_and_miss() {
        let style = NumericStyle::new(vec![(json!("bus"), 3.0), (json!("rail"), 6.0)], 1.0)
            .function(FunctionType::Match);
        assert_eq!(numeric_map(Some(&json!("rail")), &style), 6.0);
        assert_eq!(numeric_map(Some(&json!("ferry")), &style), 1.0);
    }

    #[test]
    fn test_match_numeric_keys_compare_by_value() {
        let style = NumericStyle::new(vec![(json!(1), 10.0), (json!(2), 20.0)], 0.0)
            .function(FunctionType::Categorical);
        assert_eq!(numeric_map(Some(&json!(2.0)), &style), 20.0);
    }

    #[test]
    fn test_color_match_miss_gives_default() {
        let style = ColorStyle::new(
            vec![
                (json!("a"), "red".to_string()),
                (json!("b"), "blue".to_string()),
            ],
            "grey".to_string(),
        )
        .function(FunctionType::Match);
        assert_eq!(color_map(Some(&json!("c")), &style).unwrap(), "grey");
    }

    #[test]
    fn test_color_interpolate_endpoints_exact() {
        let style = ColorStyle::new(
            vec![
                (json!(0), "rgb(0,0,0)".to_string()),
                (json!(100), "rgb(255,255,255)".to_string()),
            ],
            "grey".to_string(),
        );
        // Clamped values return the stop string verbatim.
        assert_eq!(color_map(Some(&json!(0)), &style).unwrap(), "rgb(0,0,0)");
        assert_eq!(
            color_map(Some(&json!(100)), &style).unwrap(),
            "rgb(255,255,255)"
        );
    }

    #[test]
    fn test_color_interpolate_blends_named_and_hex() {
        let style = ColorStyle::new(
            vec![
                (json!(0), "black".to_string()),
                (json!(100), "#ffffff".to_string()),
            ],
            "grey".to_string(),
        );
        assert_eq!(
            color_map(Some(&json!(50)), &style).unwrap(),
            "rgb(128,128,128)"
        );
    }

    #[test]
    fn test_color_interpolate_bad_color_errors() {
        let style = ColorStyle::new(
            vec![
                (json!(0), "notacolor".to_string()),
                (json!(100), "white".to_string()),
            ],
            "grey".to_string(),
        );
        assert!(matches!(
            color_map(Some(&json!(50)), &style),
            Err(StyleError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let style = radius_style();
        let first = numeric_map(Some(&json!(7)), &style);
        let second = numeric_map(Some(&json!(7)), &style);
        assert_eq!(first, second);
    }

    proptest! {
        // Interpolated output never escapes the range spanned by the
        // table's outputs when thresholds are sorted ascending.
        #[test]
        fn prop_interpolate_bounded_by_outputs(
            mut thresholds in proptest::collection::vec(-1.0e6f64..1.0e6, 2..8),
            outputs in proptest::collection::vec(-1.0e3f64..1.0e3, 8),
            value in -2.0e6f64..2.0e6,
        ) {
            thresholds.sort_by(|a, b| a.partial_cmp(b).unwrap());
            thresholds.dedup();
            prop_assume!(thresholds.len() >= 2);

            let stops: Vec<(Value, f64)> = thresholds
                .iter()
                .zip(outputs.iter())
                .map(|(t, o)| (json!(t), *o))
                .collect();
            let used = stops.len();
            let style = NumericStyle::new(stops, f64::NAN);

            let resolved = numeric_map(Some(&json!(value)), &style);
            let lo = outputs[..used].iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = outputs[..used].iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(resolved >= lo - 1e-9 && resolved <= hi + 1e-9);
        }

        // Pure function: same inputs, same output, bit for bit.
        #[test]
        fn prop_resolution_idempotent(value in -1.0e6f64..1.0e6) {
            let style = NumericStyle::new(
                vec![(json!(-10), 0.0), (json!(0), 5.0), (json!(10), 1.0)],
                2.0,
            );
            let a = numeric_map(Some(&json!(value)), &style);
            let b = numeric_map(Some(&json!(value)), &style);
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
