//! Graduated circle layer: points with data-driven color and radius.

use serde_json::{json, Map, Value};

use super::common::{color_paint, numeric_paint, to_json, LayerOptions};
use crate::style::{ColorStyle, NumericStyle, StyleError};

/// A circle visualization where both color and radius follow stop
/// tables.
#[derive(Debug, Clone)]
pub struct GraduatedCircleLayer {
    pub data: Value,
    pub options: LayerOptions,
    pub color_property: Option<String>,
    pub color: ColorStyle,
    pub radius_property: Option<String>,
    pub radius: NumericStyle,
    pub stroke_color: String,
    pub stroke_width: f64,
}

impl GraduatedCircleLayer {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            options: LayerOptions::new(),
            color_property: None,
            color: ColorStyle::new(vec![], "grey".to_string()),
            radius_property: None,
            radius: NumericStyle::new(vec![], 2.0),
            stroke_color: "grey".to_string(),
            stroke_width: 0.1,
        }
    }

    /// Drives circle color from a property through a stop table.
    pub fn color(mut self, property: &str, style: ColorStyle) -> Self {
        self.color_property = Some(property.to_string());
        self.color = style;
        self
    }

    /// Drives circle radius from a property through a stop table.
    pub fn radius(mut self, property: &str, style: NumericStyle) -> Self {
        self.radius_property = Some(property.to_string());
        self.radius = style;
        self
    }

    /// Sets the stroke outline color and width.
    pub fn stroke(mut self, color: &str, width: f64) -> Self {
        self.stroke_color = color.to_string();
        self.stroke_width = width;
        self
    }

    /// Replaces the shared layer options.
    pub fn options(mut self, options: LayerOptions) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn context(&self, layer_id: usize) -> Result<Map<String, Value>, StyleError> {
        let mut vars = self.options.context(layer_id, Some(&self.data));
        let vector = self.options.vector.as_ref();
        let color = color_paint(&self.data, vector, self.color_property.as_deref(), &self.color)?;
        let radius = numeric_paint(
            &self.data,
            vector,
            self.radius_property.as_deref(),
            &self.radius,
        )?;
        vars.insert("color_expression".into(), json!(to_json(&color)));
        vars.insert("radius_expression".into(), json!(to_json(&radius)));
        vars.insert("stroke_color".into(), json!(self.stroke_color));
        vars.insert("stroke_width".into(), json!(self.stroke_width));
        Ok(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graduated_context_has_both_expressions() {
        let data = json!({
            "type": "FeatureCollection",
            "features": [{"type": "Feature", "properties": {"pop": 3, "id": 1}, "geometry": null}]
        });
        let layer = GraduatedCircleLayer::new(data)
            .color(
                "pop",
                ColorStyle::new(
                    vec![(json!(0), "red".into()), (json!(10), "blue".into())],
                    "grey".into(),
                ),
            )
            .radius(
                "pop",
                NumericStyle::new(vec![(json!(0), 1.0), (json!(10), 12.0)], 2.0),
            );
        let vars = layer.context(0).unwrap();
        assert!(vars["color_expression"].as_str().unwrap().contains("interpolate"));
        assert!(vars["radius_expression"].as_str().unwrap().contains("interpolate"));
    }

    #[test]
    fn test_graduated_defaults_are_constants() {
        let layer = GraduatedCircleLayer::new(json!({"features": []}));
        let vars = layer.context(0).unwrap();
        assert_eq!(vars["radius_expression"], json!("2.0"));
        assert_eq!(vars["color_expression"], json!("\"grey\""));
    }
}
