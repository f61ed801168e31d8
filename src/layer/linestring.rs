//! Linestring layer: lines with data-driven color and width.

use serde_json::{json, Map, Value};

use super::common::{color_paint, numeric_paint, to_json, LayerOptions, LineStroke};
use crate::style::{ColorStyle, NumericStyle, StyleError};

/// A line visualization.
#[derive(Debug, Clone)]
pub struct LinestringLayer {
    pub data: Value,
    pub options: LayerOptions,
    pub color_property: Option<String>,
    pub color: ColorStyle,
    pub line_stroke: LineStroke,
    pub width_property: Option<String>,
    pub width: NumericStyle,
}

impl LinestringLayer {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            options: LayerOptions::new(),
            color_property: None,
            color: ColorStyle::new(vec![], "grey".to_string()),
            line_stroke: LineStroke::Solid,
            width_property: None,
            width: NumericStyle::new(vec![], 1.0),
        }
    }

    /// Drives line color from a property through a stop table.
    pub fn color(mut self, property: &str, style: ColorStyle) -> Self {
        self.color_property = Some(property.to_string());
        self.color = style;
        self
    }

    /// Sets the stroke pattern.
    pub fn stroke(mut self, stroke: LineStroke) -> Self {
        self.line_stroke = stroke;
        self
    }

    /// Drives line width from a property through a stop table.
    pub fn width(mut self, property: &str, style: NumericStyle) -> Self {
        self.width_property = Some(property.to_string());
        self.width = style;
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
        let width = numeric_paint(
            &self.data,
            vector,
            self.width_property.as_deref(),
            &self.width,
        )?;
        vars.insert("color_expression".into(), json!(to_json(&color)));
        vars.insert("width_expression".into(), json!(to_json(&width)));
        vars.insert(
            "line_dash_array".into(),
            json!(to_json(&json!(self.line_stroke.dash_array()))),
        );
        Ok(vars)
    }
}
