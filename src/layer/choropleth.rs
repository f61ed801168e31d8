//! Choropleth layer: polygons filled by a property, optionally extruded.

use serde_json::{json, Map, Value};

use super::common::{color_paint, numeric_paint, to_json, LayerOptions, LineStroke};
use crate::style::{ColorStyle, NumericStyle, StyleError};

/// A choropleth visualization over polygon features.
///
/// With a height property and stops configured, polygons extrude into a
/// 3-D prism map.
#[derive(Debug, Clone)]
pub struct ChoroplethLayer {
    pub data: Value,
    pub options: LayerOptions,
    pub color_property: Option<String>,
    pub color: ColorStyle,
    pub line_color: String,
    pub line_stroke: LineStroke,
    pub line_width: f64,
    pub height_property: Option<String>,
    pub height: NumericStyle,
}

impl ChoroplethLayer {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            options: LayerOptions::new(),
            color_property: None,
            color: ColorStyle::new(vec![], "grey".to_string()),
            line_color: "white".to_string(),
            line_stroke: LineStroke::Solid,
            line_width: 1.0,
            height_property: None,
            height: NumericStyle::new(vec![], 0.0),
        }
    }

    /// Drives fill color from a property through a stop table.
    pub fn color(mut self, property: &str, style: ColorStyle) -> Self {
        self.color_property = Some(property.to_string());
        self.color = style;
        self
    }

    /// Sets the boundary line color, stroke pattern, and width.
    pub fn line(mut self, color: &str, stroke: LineStroke, width: f64) -> Self {
        self.line_color = color.to_string();
        self.line_stroke = stroke;
        self.line_width = width;
        self
    }

    /// Extrudes polygons with a height driven by a property.
    pub fn height(mut self, property: &str, style: NumericStyle) -> Self {
        self.height_property = Some(property.to_string());
        self.height = style;
        self
    }

    /// Replaces the shared layer options.
    pub fn options(mut self, options: LayerOptions) -> Self {
        self.options = options;
        self
    }

    fn extruded(&self) -> bool {
        self.height_property.is_some() && !self.height.stops.is_empty()
    }

    pub(crate) fn context(&self, layer_id: usize) -> Result<Map<String, Value>, StyleError> {
        let mut vars = self.options.context(layer_id, Some(&self.data));
        let vector = self.options.vector.as_ref();
        let color = color_paint(&self.data, vector, self.color_property.as_deref(), &self.color)?;
        vars.insert("color_expression".into(), json!(to_json(&color)));
        vars.insert("line_color".into(), json!(self.line_color));
        vars.insert(
            "line_dash_array".into(),
            json!(to_json(&json!(self.line_stroke.dash_array()))),
        );
        vars.insert("line_width".into(), json!(self.line_width));
        vars.insert("extrude".into(), json!(self.extruded()));
        if self.extruded() {
            let height = numeric_paint(
                &self.data,
                vector,
                self.height_property.as_deref(),
                &self.height,
            )?;
            vars.insert("height_expression".into(), json!(to_json(&height)));
        }
        Ok(vars)
    }
}
