//! Mapbox GL expression builders.
//!
//! The browser renderer consumes declarative JSON expression arrays for
//! data-driven paint properties. These builders produce them as
//! `serde_json::Value`s; the render layer serializes them straight into
//! the emitted HTML.

use serde_json::{json, Value};

/// `["get", property]` — reads a feature property.
pub fn get(property: &str) -> Value {
    json!(["get", property])
}

/// Linear interpolation over a feature property.
///
/// ```text
/// ["interpolate", ["linear"], ["get", p], t0, v0, t1, v1, ...]
/// ```
pub fn interpolate(property: &str, stops: &[(Value, Value)]) -> Value {
    interpolate_on(get(property), stops)
}

/// Linear interpolation keyed on the current zoom level.
pub fn interpolate_zoom(stops: &[(Value, Value)]) -> Value {
    interpolate_on(json!(["zoom"]), stops)
}

/// Linear interpolation keyed on heatmap kernel density.
pub fn interpolate_density(stops: &[(Value, Value)]) -> Value {
    interpolate_on(json!(["heatmap-density"]), stops)
}

fn interpolate_on(input: Value, stops: &[(Value, Value)]) -> Value {
    let mut expr = vec![json!("interpolate"), json!(["linear"]), input];
    flatten_into(&mut expr, stops);
    Value::Array(expr)
}

/// Exact-match lookup over a feature property.
///
/// ```text
/// ["match", ["get", p], k0, v0, k1, v1, ..., default]
/// ```
pub fn match_property(property: &str, stops: &[(Value, Value)], default: Value) -> Value {
    let mut expr = vec![json!("match"), get(property)];
    flatten_into(&mut expr, stops);
    expr.push(default);
    Value::Array(expr)
}

/// Match expression applying a resolved join table to vector features.
///
/// This is the external interface of the data-join technique: the table
/// of `[join_key, resolved_value]` pairs is flattened into a match
/// expression keyed on the vector source's join property. Keys are
/// emitted in table order and are not deduplicated.
pub fn join_match(join_property: &str, table: &[(Value, Value)], default: Value) -> Value {
    match_property(join_property, table, default)
}

/// Stepped lookup, used for cluster styling on aggregate counts.
///
/// ```text
/// ["step", ["get", p], base, t0, v0, t1, v1, ...]
/// ```
pub fn step(property: &str, base: Value, stops: &[(Value, Value)]) -> Value {
    let mut expr = vec![json!("step"), get(property), base];
    flatten_into(&mut expr, stops);
    Value::Array(expr)
}

fn flatten_into(expr: &mut Vec<Value>, stops: &[(Value, Value)]) {
    for (key, output) in stops {
        expr.push(key.clone());
        expr.push(output.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get() {
        assert_eq!(get("pop"), json!(["get", "pop"]));
    }

    #[test]
    fn test_interpolate_shape() {
        let stops = vec![(json!(0), json!(1.0)), (json!(10), json!(100.0))];
        assert_eq!(
            interpolate("pop", &stops),
            json!(["interpolate", ["linear"], ["get", "pop"], 0, 1.0, 10, 100.0])
        );
    }

    #[test]
    fn test_interpolate_zoom_and_density_inputs() {
        let stops = vec![(json!(0), json!(1))];
        assert_eq!(interpolate_zoom(&stops)[2], json!(["zoom"]));
        assert_eq!(interpolate_density(&stops)[2], json!(["heatmap-density"]));
    }

    #[test]
    fn test_match_appends_default() {
        let stops = vec![(json!("a"), json!("red"))];
        assert_eq!(
            match_property("zone", &stops, json!("grey")),
            json!(["match", ["get", "zone"], "a", "red", "grey"])
        );
    }

    #[test]
    fn test_join_match_keeps_duplicate_keys() {
        let table = vec![(json!(1), json!("red")), (json!(1), json!("blue"))];
        assert_eq!(
            join_match("GEOID", &table, json!("grey")),
            json!(["match", ["get", "GEOID"], 1, "red", 1, "blue", "grey"])
        );
    }

    #[test]
    fn test_step_shape() {
        let stops = vec![(json!(100), json!("#f28cb1"))];
        assert_eq!(
            step("point_count", json!("#51bbd6"), &stops),
            json!(["step", ["get", "point_count"], "#51bbd6", 100, "#f28cb1"])
        );
    }
}
