//! Circle layer: fixed-radius points colored by a property.

use serde_json::{json, Map, Value};

use super::common::{color_paint, to_json, LayerOptions};
use crate::style::{ColorStyle, StyleError};

/// A circle visualization over point features.
///
/// # Example
///
/// ```rust
/// use cartogl::{CircleLayer, ColorStyle};
/// use serde_json::json;
///
/// let data = json!({"type": "FeatureCollection", "features": []});
/// let layer = CircleLayer::new(data)
///     .color(
///         "pop",
///         ColorStyle::new(
///             vec![(json!(0), "#fff5eb".into()), (json!(1000), "#7f2704".into())],
///             "grey".into(),
///         ),
///     )
///     .radius(4.0);
/// ```
#[derive(Debug, Clone)]
pub struct CircleLayer {
    pub data: Value,
    pub options: LayerOptions,
    pub radius: f64,
    pub color_property: Option<String>,
    pub color: ColorStyle,
    pub stroke_color: String,
    pub stroke_width: f64,
}

impl CircleLayer {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            options: LayerOptions::new(),
            radius: 1.0,
            color_property: None,
            color: ColorStyle::new(vec![], "grey".to_string()),
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

    /// Sets the fixed circle radius in pixels.
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
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
        let color = color_paint(
            &self.data,
            self.options.vector.as_ref(),
            self.color_property.as_deref(),
            &self.color,
        )?;
        vars.insert("color_expression".into(), json!(to_json(&color)));
        vars.insert("radius".into(), json!(self.radius));
        vars.insert("stroke_color".into(), json!(self.stroke_color));
        vars.insert("stroke_width".into(), json!(self.stroke_width));
        Ok(vars)
    }
}
