//! Join tables for hybrid client/server rendering.
//!
//! When a layer's geometry lives in an externally hosted vector tile
//! source, styles are still computed locally: each input record's lookup
//! property is resolved through its stop table, then paired with the
//! record's join key. The browser renderer applies the resulting table
//! as a match expression over the vector features.
//!
//! Tables are built fresh on every render, preserve input order, and do
//! not deduplicate join keys; with duplicates, the browser-side match
//! expression's behavior is the downstream consumer's business.

use serde_json::Value;

use super::error::StyleError;
use super::resolve::{color_map, numeric_map};
use super::stops::{ColorStyle, NumericStyle};
use crate::data::Feature;

/// Ordered (join key, resolved value) pairs handed to the external
/// renderer.
pub type JoinTable = Vec<(Value, Value)>;

/// Builds a join table resolving each record's color.
///
/// A record without the lookup property resolves to the style's default
/// color. A record without the join-key property is a hard failure that
/// aborts the whole batch.
///
/// # Example
///
/// ```rust
/// use cartogl::{color_join_table, ColorStyle, FunctionType};
/// use serde_json::json;
///
/// let records = vec![
///     json!({"id": 1, "zone": "a"}).as_object().unwrap().clone(),
///     json!({"id": 2, "zone": "c"}).as_object().unwrap().clone(),
/// ];
/// let style = ColorStyle::new(
///     vec![(json!("a"), "red".into()), (json!("b"), "blue".into())],
///     "grey".into(),
/// )
/// .function(FunctionType::Match);
///
/// let table = color_join_table(&records, "zone", "id", &style).unwrap();
/// assert_eq!(table, vec![(json!(1), json!("red")), (json!(2), json!("grey"))]);
/// ```
pub fn color_join_table(
    features: &[Feature],
    lookup_property: &str,
    join_property: &str,
    style: &ColorStyle,
) -> Result<JoinTable, StyleError> {
    features
        .iter()
        .map(|feature| {
            let color = color_map(feature.get(lookup_property), style)?;
            Ok((join_key(feature, join_property)?, Value::String(color)))
        })
        .collect()
}

/// Builds a join table resolving each record's numeric attribute.
///
/// Same contract as [`color_join_table`] with a numeric output domain.
pub fn numeric_join_table(
    features: &[Feature],
    lookup_property: &str,
    join_property: &str,
    style: &NumericStyle,
) -> Result<JoinTable, StyleError> {
    features
        .iter()
        .map(|feature| {
            let value = numeric_map(feature.get(lookup_property), style);
            Ok((join_key(feature, join_property)?, Value::from(value)))
        })
        .collect()
}

fn join_key(feature: &Feature, join_property: &str) -> Result<Value, StyleError> {
    feature
        .get(join_property)
        .cloned()
        .ok_or_else(|| StyleError::MissingJoinKey {
            property: join_property.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FunctionType;
    use serde_json::json;

    fn records(raw: Value) -> Vec<Feature> {
        raw.as_array()
            .unwrap()
            .iter()
            .map(|row| row.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn test_numeric_join_preserves_order() {
        let features = records(json!([
            {"id": "b", "pop": 5},
            {"id": "a", "pop": 0},
            {"id": "c", "pop": 10}
        ]));
        let style = NumericStyle::new(vec![(json!(0), 1.0), (json!(10), 100.0)], 0.0);
        let table = numeric_join_table(&features, "pop", "id", &style).unwrap();
        assert_eq!(
            table,
            vec![
                (json!("b"), json!(50.5)),
                (json!("a"), json!(1.0)),
                (json!("c"), json!(100.0)),
            ]
        );
    }

    #[test]
    fn test_missing_lookup_property_falls_back_to_default() {
        let features = records(json!([{"id": 1}]));
        let style = ColorStyle::new(
            vec![(json!("a"), "red".to_string())],
            "grey".to_string(),
        )
        .function(FunctionType::Match);
        let table = color_join_table(&features, "zone", "id", &style).unwrap();
        assert_eq!(table, vec![(json!(1), json!("grey"))]);
    }

    #[test]
    fn test_missing_join_key_aborts_batch() {
        let features = records(json!([
            {"id": 1, "pop": 5},
            {"pop": 7}
        ]));
        let style = NumericStyle::new(vec![(json!(0), 1.0), (json!(10), 100.0)], 0.0);
        let err = numeric_join_table(&features, "pop", "id", &style).unwrap_err();
        assert_eq!(
            err,
            StyleError::MissingJoinKey {
                property: "id".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_join_keys_are_kept() {
        let features = records(json!([
            {"id": 1, "zone": "a"},
            {"id": 1, "zone": "b"}
        ]));
        let style = ColorStyle::new(
            vec![
                (json!("a"), "red".to_string()),
                (json!("b"), "blue".to_string()),
            ],
            "grey".to_string(),
        )
        .function(FunctionType::Match);
        let table = color_join_table(&features, "zone", "id", &style).unwrap();
        assert_eq!(
            table,
            vec![(json!(1), json!("red")), (json!(1), json!("blue"))]
        );
    }

    #[test]
    fn test_input_features_are_not_mutated() {
        let features = records(json!([{"id": 1, "pop": 5}]));
        let before = features.clone();
        let style = NumericStyle::new(vec![(json!(0), 1.0)], 0.0);
        numeric_join_table(&features, "pop", "id", &style).unwrap();
        assert_eq!(features, before);
    }
}
