//! Feature data access.
//!
//! Features are flat JSON records: a map from property names to scalar
//! values. Helpers here pull such records out of GeoJSON documents and
//! provide strict property access for callers that treat absence as an
//! error rather than a fallback.

use serde_json::{Map, Value};

use crate::style::StyleError;

/// One row of input data: a GeoJSON feature's properties, or a plain
/// JSON record.
pub type Feature = Map<String, Value>;

/// Reads a property, failing if it is absent.
///
/// The resolvers treat an absent lookup property as "missing value" and
/// fall back to the default; use this accessor where absence must abort
/// instead.
///
/// # Errors
///
/// Returns [`StyleError::MissingProperty`] if the feature has no such
/// property.
pub fn require_property<'a>(feature: &'a Feature, property: &str) -> Result<&'a Value, StyleError> {
    feature.get(property).ok_or_else(|| StyleError::MissingProperty {
        property: property.to_string(),
    })
}

/// Extracts the property records from a JSON document.
///
/// Accepts either a GeoJSON `FeatureCollection` (each feature's
/// `properties` object becomes one record) or a bare JSON array of flat
/// records. Features without a `properties` object and non-object array
/// entries are skipped.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
///
/// let collection = json!({
///     "type": "FeatureCollection",
///     "features": [
///         {"type": "Feature", "properties": {"id": 1, "pop": 50}, "geometry": null}
///     ]
/// });
/// let records = cartogl::record_list(&collection);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0]["pop"], json!(50));
/// ```
pub fn record_list(data: &Value) -> Vec<Feature> {
    let rows: &[Value] = match data {
        Value::Object(obj) => match obj.get("features").and_then(Value::as_array) {
            Some(features) => features,
            None => return Vec::new(),
        },
        Value::Array(rows) => rows,
        _ => return Vec::new(),
    };

    rows.iter()
        .filter_map(|row| {
            let obj = row.as_object()?;
            match obj.get("properties") {
                Some(props) => props.as_object().cloned(),
                // Already a flat record.
                None => Some(obj.clone()),
            }
        })
        .collect()
}

/// Mean center of a GeoJSON document's point features, as `(lon, lat)`.
///
/// Returns `None` if the document has no point features.
pub fn point_center(data: &Value) -> Option<(f64, f64)> {
    let features = data.get("features")?.as_array()?;
    let mut count = 0usize;
    let mut lon_sum = 0.0;
    let mut lat_sum = 0.0;
    for feature in features {
        let Some(geometry) = feature.get("geometry") else {
            continue;
        };
        if geometry.get("type").and_then(Value::as_str) != Some("Point") {
            continue;
        }
        let Some(coords) = geometry.get("coordinates").and_then(Value::as_array) else {
            continue;
        };
        let (Some(lon), Some(lat)) = (
            coords.first().and_then(Value::as_f64),
            coords.get(1).and_then(Value::as_f64),
        ) else {
            continue;
        };
        lon_sum += lon;
        lat_sum += lat;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some((lon_sum / count as f64, lat_sum / count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_property_present() {
        let feature = json!({"pop": 12}).as_object().unwrap().clone();
        assert_eq!(require_property(&feature, "pop").unwrap(), &json!(12));
    }

    #[test]
    fn test_require_property_absent() {
        let feature = json!({"pop": 12}).as_object().unwrap().clone();
        let err = require_property(&feature, "id").unwrap_err();
        assert_eq!(
            err,
            StyleError::MissingProperty {
                property: "id".to_string()
            }
        );
    }

    #[test]
    fn test_record_list_from_feature_collection() {
        let collection = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"id": 1}, "geometry": null},
                {"type": "Feature", "properties": {"id": 2}, "geometry": null}
            ]
        });
        let records = record_list(&collection);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["id"], json!(2));
    }

    #[test]
    fn test_record_list_from_flat_array() {
        let rows = json!([{"id": 1}, {"id": 2}, 7]);
        let records = record_list(&rows);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_record_list_skips_null_properties() {
        let collection = json!({
            "type": "FeatureCollection",
            "features": [{"type": "Feature", "properties": null, "geometry": null}]
        });
        assert!(record_list(&collection).is_empty());
    }

    #[test]
    fn test_record_list_other_shapes_empty() {
        assert!(record_list(&json!("nope")).is_empty());
        assert!(record_list(&json!({"type": "Feature"})).is_empty());
    }

    #[test]
    fn test_point_center() {
        let collection = json!({
            "type": "FeatureCollection",
            "features": [
                {"geometry": {"type": "Point", "coordinates": [-100.0, 30.0]}},
                {"geometry": {"type": "Point", "coordinates": [-90.0, 50.0]}},
                {"geometry": {"type": "Polygon", "coordinates": []}}
            ]
        });
        assert_eq!(point_center(&collection), Some((-95.0, 40.0)));
    }

    #[test]
    fn test_point_center_no_points() {
        let collection = json!({"type": "FeatureCollection", "features": []});
        assert_eq!(point_center(&collection), None);
    }
}
