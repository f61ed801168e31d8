//! Heatmap layer: kernel-density surface over point features.

use serde_json::{json, Map, Value};

use super::common::{numeric_paint, to_json, LayerOptions};
use crate::expression;
use crate::style::{NumericStyle, StyleError};

/// A heatmap visualization.
///
/// Weight stops are keyed on a feature property; color stops are keyed
/// on kernel density in `[0, 1]`; radius and intensity stops are keyed
/// on zoom level.
#[derive(Debug, Clone)]
pub struct HeatmapLayer {
    pub data: Value,
    pub options: LayerOptions,
    pub weight_property: Option<String>,
    pub weight: NumericStyle,
    pub color_stops: Vec<(Value, String)>,
    pub radius_stops: Vec<(Value, f64)>,
    pub intensity_stops: Vec<(Value, f64)>,
}

impl HeatmapLayer {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            options: LayerOptions::new(),
            weight_property: None,
            weight: NumericStyle::new(vec![], 0.0),
            color_stops: Vec::new(),
            radius_stops: Vec::new(),
            intensity_stops: Vec::new(),
        }
    }

    /// Drives point weight from a property through a stop table.
    pub fn weight(mut self, property: &str, style: NumericStyle) -> Self {
        self.weight_property = Some(property.to_string());
        self.weight = style;
        self
    }

    /// Density-keyed color ramp, e.g. `[[0.1, "blue"], [1.0, "red"]]`.
    pub fn color_stops(mut self, stops: Vec<(Value, String)>) -> Self {
        self.color_stops = stops;
        self
    }

    /// Zoom-keyed kernel radius stops.
    pub fn radius_stops(mut self, stops: Vec<(Value, f64)>) -> Self {
        self.radius_stops = stops;
        self
    }

    /// Zoom-keyed intensity stops.
    pub fn intensity_stops(mut self, stops: Vec<(Value, f64)>) -> Self {
        self.intensity_stops = stops;
        self
    }

    /// Replaces the shared layer options.
    pub fn options(mut self, options: LayerOptions) -> Self {
        self.options = options;
        self
    }

    /// Density color ramp with a fully transparent entry below the first
    /// configured stop, so empty areas stay see-through.
    fn density_stops(&self) -> Vec<(Value, Value)> {
        let mut stops: Vec<(Value, Value)> = Vec::with_capacity(self.color_stops.len() + 1);
        let first_positive = self
            .color_stops
            .first()
            .and_then(|(key, _)| key.as_f64())
            .map_or(false, |k| k > 0.0);
        if first_positive {
            stops.push((json!(0), json!("rgba(0,0,0,0)")));
        }
        for (key, color) in &self.color_stops {
            stops.push((key.clone(), json!(color)));
        }
        stops
    }

    pub(crate) fn context(&self, layer_id: usize) -> Result<Map<String, Value>, StyleError> {
        let mut vars = self.options.context(layer_id, Some(&self.data));

        let weight = numeric_paint(
            &self.data,
            self.options.vector.as_ref(),
            self.weight_property.as_deref(),
            &self.weight,
        )?;
        vars.insert("weight_expression".into(), json!(to_json(&weight)));

        let density = self.density_stops();
        let color = if density.is_empty() {
            // GL default ramp applies when no stops are configured.
            Value::Null
        } else {
            expression::interpolate_density(&density)
        };
        vars.insert("color_expression".into(), json!(to_json(&color)));

        let radius = zoom_or_constant(&self.radius_stops, 30.0);
        let intensity = zoom_or_constant(&self.intensity_stops, 1.0);
        vars.insert("radius_expression".into(), json!(to_json(&radius)));
        vars.insert("intensity_expression".into(), json!(to_json(&intensity)));
        Ok(vars)
    }
}

fn zoom_or_constant(stops: &[(Value, f64)], fallback: f64) -> Value {
    if stops.is_empty() {
        return json!(fallback);
    }
    let widened: Vec<(Value, Value)> = stops
        .iter()
        .map(|(k, v)| (k.clone(), json!(v)))
        .collect();
    expression::interpolate_zoom(&widened)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [{"type": "Feature", "properties": {"mag": 3.1}, "geometry": null}]
        })
    }

    #[test]
    fn test_density_ramp_prepends_transparent_stop() {
        let layer = HeatmapLayer::new(points())
            .color_stops(vec![(json!(0.1), "blue".into()), (json!(1), "red".into())]);
        let vars = layer.context(0).unwrap();
        let expr = vars["color_expression"].as_str().unwrap();
        assert!(expr.contains("heatmap-density"));
        assert!(expr.contains("rgba(0,0,0,0)"));
    }

    #[test]
    fn test_density_ramp_keeps_zero_keyed_stop() {
        let layer = HeatmapLayer::new(points())
            .color_stops(vec![(json!(0), "blue".into()), (json!(1), "red".into())]);
        let vars = layer.context(0).unwrap();
        // A user stop at density 0 already covers the empty areas.
        assert!(!vars["color_expression"].as_str().unwrap().contains("rgba(0,0,0,0)"));
    }

    #[test]
    fn test_zoom_keyed_radius_and_intensity() {
        let layer = HeatmapLayer::new(points())
            .radius_stops(vec![(json!(0), 1.0), (json!(12), 30.0)])
            .intensity_stops(vec![(json!(0), 0.1), (json!(20), 5.0)]);
        let vars = layer.context(0).unwrap();
        assert!(vars["radius_expression"].as_str().unwrap().contains("zoom"));
        assert!(vars["intensity_expression"].as_str().unwrap().contains("zoom"));
    }

    #[test]
    fn test_constants_when_unconfigured() {
        let vars = HeatmapLayer::new(points()).context(0).unwrap();
        assert_eq!(vars["radius_expression"], json!("30.0"));
        assert_eq!(vars["intensity_expression"], json!("1.0"));
        assert_eq!(vars["weight_expression"], json!("0.0"));
        assert_eq!(vars["color_expression"], json!("null"));
    }
}
