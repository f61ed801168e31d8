//! Options shared by every layer kind.

use serde_json::{json, Map, Value};

use crate::data::record_list;
use crate::expression;
use crate::style::{
    color_join_table, numeric_join_table, ColorStyle, NumericStyle, StyleError,
};

/// Externally hosted vector tile source joined against local records.
///
/// The layer's geometry comes from the tiles; its styling is computed
/// locally from the layer's records and shipped as a join table keyed
/// on `join_property`.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSource {
    /// Tile source URL (`mapbox://...` or a TileJSON endpoint).
    pub url: String,
    /// Named layer inside the tile source.
    pub layer_name: String,
    /// Property on the vector features used to look up joined styles.
    pub join_property: String,
    /// Property on the local records paired with `join_property`.
    pub data_join_property: String,
    /// Switches off the client-side data join and its layer filter.
    pub disable_join: bool,
}

impl VectorSource {
    pub fn new(url: &str, layer_name: &str, join_property: &str, data_join_property: &str) -> Self {
        Self {
            url: url.to_string(),
            layer_name: layer_name.to_string(),
            join_property: join_property.to_string(),
            data_join_property: data_join_property.to_string(),
            disable_join: false,
        }
    }

    /// Disables the data join, returning the updated source for chaining.
    pub fn disable_join(mut self) -> Self {
        self.disable_join = true;
        self
    }
}

/// Presentation options common to every layer kind.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerOptions {
    pub(crate) below_layer: String,
    pub(crate) opacity: f64,
    pub(crate) min_zoom: f64,
    pub(crate) max_zoom: f64,
    pub(crate) highlight_color: String,
    pub(crate) label_property: Option<String>,
    pub(crate) label_size: f64,
    pub(crate) label_color: String,
    pub(crate) label_halo_color: String,
    pub(crate) label_halo_width: f64,
    pub(crate) vector: Option<VectorSource>,
}

impl LayerOptions {
    pub fn new() -> Self {
        Self {
            below_layer: "waterway-label".to_string(),
            opacity: 1.0,
            min_zoom: 0.0,
            max_zoom: 24.0,
            highlight_color: "black".to_string(),
            label_property: None,
            label_size: 8.0,
            label_color: "#131516".to_string(),
            label_halo_color: "white".to_string(),
            label_halo_width: 1.0,
            vector: None,
        }
    }

    /// Renders this layer below the named basemap layer.
    pub fn below_layer(mut self, layer: &str) -> Self {
        self.below_layer = layer.to_string();
        self
    }

    /// Sets the layer opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Restricts layer visibility to a zoom range.
    pub fn zoom_range(mut self, min: f64, max: f64) -> Self {
        self.min_zoom = min;
        self.max_zoom = max;
        self
    }

    /// Sets the hover/selection highlight color.
    pub fn highlight_color(mut self, color: &str) -> Self {
        self.highlight_color = color.to_string();
        self
    }

    /// Labels features with the given property.
    pub fn label_property(mut self, property: &str) -> Self {
        self.label_property = Some(property.to_string());
        self
    }

    /// Sets label text size in points.
    pub fn label_size(mut self, size: f64) -> Self {
        self.label_size = size;
        self
    }

    /// Sets label text color.
    pub fn label_color(mut self, color: &str) -> Self {
        self.label_color = color.to_string();
        self
    }

    /// Sets the label halo color and width.
    pub fn label_halo(mut self, color: &str, width: f64) -> Self {
        self.label_halo_color = color.to_string();
        self.label_halo_width = width;
        self
    }

    /// Attaches a vector tile source for hybrid rendering.
    pub fn vector_source(mut self, source: VectorSource) -> Self {
        self.vector = Some(source);
        self
    }

    /// Template variables shared by every layer kind.
    pub(crate) fn context(&self, layer_id: usize, data: Option<&Value>) -> Map<String, Value> {
        let mut vars = Map::new();
        vars.insert("layer_id".into(), json!(layer_id));
        vars.insert("below_layer".into(), json!(self.below_layer));
        vars.insert("opacity".into(), json!(self.opacity));
        vars.insert("min_zoom".into(), json!(self.min_zoom));
        vars.insert("max_zoom".into(), json!(self.max_zoom));
        vars.insert("highlight_color".into(), json!(self.highlight_color));
        vars.insert("label_property".into(), json!(self.label_property));
        vars.insert("label_size".into(), json!(self.label_size));
        vars.insert("label_color".into(), json!(self.label_color));
        vars.insert("label_halo_color".into(), json!(self.label_halo_color));
        vars.insert("label_halo_width".into(), json!(self.label_halo_width));

        match (&self.vector, data) {
            (Some(vector), data) => {
                vars.insert("vector_source".into(), json!(true));
                vars.insert("vector_url".into(), json!(vector.url));
                vars.insert("vector_layer".into(), json!(vector.layer_name));
                vars.insert("vector_join_property".into(), json!(vector.join_property));
                vars.insert("data_join_property".into(), json!(vector.data_join_property));
                vars.insert("enable_join".into(), json!(!vector.disable_join));
                let records: Vec<Value> = data
                    .map(record_list)
                    .unwrap_or_default()
                    .into_iter()
                    .map(Value::Object)
                    .collect();
                vars.insert("join_data".into(), json!(to_json(&Value::Array(records))));
            }
            (None, Some(data)) => {
                vars.insert("vector_source".into(), json!(false));
                vars.insert("geojson_data".into(), json!(to_json(data)));
            }
            (None, None) => {
                vars.insert("vector_source".into(), json!(false));
            }
        }
        vars
    }
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Line stroke patterns, rendered as GL dash arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStroke {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStroke {
    pub(crate) fn dash_array(self) -> &'static [f64] {
        match self {
            LineStroke::Solid => &[1.0, 0.0],
            LineStroke::Dashed => &[6.0, 4.0],
            LineStroke::Dotted => &[0.5, 4.0],
            LineStroke::DashDot => &[6.0, 4.0, 0.5, 4.0],
        }
    }
}

/// Serializes a JSON value for direct embedding into a template.
pub(crate) fn to_json(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Paint expression for a color attribute.
///
/// Without a lookup property the color is a constant. With one, geojson
/// layers get a property-keyed stop expression, and vector layers get a
/// match expression over the locally resolved join table.
pub(crate) fn color_paint(
    data: &Value,
    vector: Option<&VectorSource>,
    property: Option<&str>,
    style: &ColorStyle,
) -> Result<Value, StyleError> {
    let Some(property) = property else {
        return Ok(json!(style.default));
    };
    match vector {
        Some(vector) => {
            let records = record_list(data);
            let table =
                color_join_table(&records, property, &vector.data_join_property, style)?;
            Ok(expression::join_match(
                &vector.join_property,
                &table,
                json!(style.default),
            ))
        }
        None => Ok(stop_expression(property, &style.value_stops(), style)),
    }
}

/// Paint expression for a numeric attribute; same shape as
/// [`color_paint`].
pub(crate) fn numeric_paint(
    data: &Value,
    vector: Option<&VectorSource>,
    property: Option<&str>,
    style: &NumericStyle,
) -> Result<Value, StyleError> {
    let Some(property) = property else {
        return Ok(json!(style.default));
    };
    match vector {
        Some(vector) => {
            let records = record_list(data);
            let table =
                numeric_join_table(&records, property, &vector.data_join_property, style)?;
            Ok(expression::join_match(
                &vector.join_property,
                &table,
                json!(style.default),
            ))
        }
        None => {
            let stops = style.value_stops();
            if style.function.is_match() {
                Ok(expression::match_property(
                    property,
                    &stops,
                    json!(style.default),
                ))
            } else if stops.is_empty() {
                Ok(json!(style.default))
            } else {
                Ok(expression::interpolate(property, &stops))
            }
        }
    }
}

fn stop_expression(property: &str, stops: &[(Value, Value)], style: &ColorStyle) -> Value {
    if style.function.is_match() {
        expression::match_property(property, stops, json!(style.default))
    } else if stops.is_empty() {
        json!(style.default)
    } else {
        expression::interpolate(property, stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FunctionType;

    fn geojson() -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"id": 1, "pop": 5}, "geometry": null},
                {"type": "Feature", "properties": {"id": 2, "pop": 15}, "geometry": null}
            ]
        })
    }

    #[test]
    fn test_common_context_geojson() {
        let data = geojson();
        let vars = LayerOptions::new().context(0, Some(&data));
        assert_eq!(vars["vector_source"], json!(false));
        assert!(vars["geojson_data"].as_str().unwrap().contains("FeatureCollection"));
        assert_eq!(vars["below_layer"], json!("waterway-label"));
    }

    #[test]
    fn test_common_context_vector() {
        let data = geojson();
        let options = LayerOptions::new()
            .vector_source(VectorSource::new("mapbox://tiles", "units", "GEOID", "id"));
        let vars = options.context(0, Some(&data));
        assert_eq!(vars["vector_source"], json!(true));
        assert_eq!(vars["enable_join"], json!(true));
        assert!(vars["join_data"].as_str().unwrap().contains("\"pop\":5"));
        assert!(vars.get("geojson_data").is_none());
    }

    #[test]
    fn test_color_paint_constant_without_property() {
        let style = ColorStyle::new(vec![], "grey".to_string());
        let expr = color_paint(&geojson(), None, None, &style).unwrap();
        assert_eq!(expr, json!("grey"));
    }

    #[test]
    fn test_color_paint_interpolate_expression() {
        let style = ColorStyle::new(
            vec![(json!(0), "red".to_string()), (json!(10), "blue".to_string())],
            "grey".to_string(),
        );
        let expr = color_paint(&geojson(), None, Some("pop"), &style).unwrap();
        assert_eq!(expr[0], json!("interpolate"));
        assert_eq!(expr[2], json!(["get", "pop"]));
    }

    #[test]
    fn test_color_paint_vector_join() {
        let style = ColorStyle::new(
            vec![(json!(5), "red".to_string()), (json!(15), "blue".to_string())],
            "grey".to_string(),
        )
        .function(FunctionType::Match);
        let vector = VectorSource::new("mapbox://tiles", "units", "GEOID", "id");
        let expr = color_paint(&geojson(), Some(&vector), Some("pop"), &style).unwrap();
        assert_eq!(
            expr,
            json!(["match", ["get", "GEOID"], 1, "red", 2, "blue", "grey"])
        );
    }

    #[test]
    fn test_numeric_paint_match_expression() {
        let style = NumericStyle::new(vec![(json!("a"), 4.0)], 1.0)
            .function(FunctionType::Match);
        let expr = numeric_paint(&geojson(), None, Some("kind"), &style).unwrap();
        assert_eq!(expr[0], json!("match"));
        assert_eq!(expr[expr.as_array().unwrap().len() - 1], json!(1.0));
    }

    #[test]
    fn test_dash_arrays() {
        assert_eq!(LineStroke::Solid.dash_array(), &[1.0, 0.0]);
        assert_eq!(LineStroke::DashDot.dash_array(), &[6.0, 4.0, 0.5, 4.0]);
    }
}
