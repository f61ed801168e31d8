//! Clustered circle layer (GeoJSON sources only).

use serde_json::{json, Map, Value};

use super::common::{to_json, LayerOptions};
use crate::expression;
use crate::style::StyleError;

/// A clustered point visualization.
///
/// The GL source aggregates nearby points into clusters; cluster color
/// and radius step through count-keyed stop tables, and points outside
/// any cluster fall back to the configured defaults.
#[derive(Debug, Clone)]
pub struct ClusteredCircleLayer {
    pub data: Value,
    pub options: LayerOptions,
    /// Count-keyed cluster colors, e.g. `[[0, "#51bbd6"], [100, "#f28cb1"]]`.
    pub color_stops: Vec<(Value, String)>,
    /// Count-keyed cluster radii.
    pub radius_stops: Vec<(Value, f64)>,
    pub cluster_radius: f64,
    pub cluster_max_zoom: f64,
    pub color_default: String,
    pub radius_default: f64,
    pub stroke_color: String,
    pub stroke_width: f64,
}

impl ClusteredCircleLayer {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            options: LayerOptions::new(),
            color_stops: Vec::new(),
            radius_stops: Vec::new(),
            cluster_radius: 30.0,
            cluster_max_zoom: 14.0,
            color_default: "black".to_string(),
            radius_default: 2.0,
            stroke_color: "grey".to_string(),
            stroke_width: 0.1,
        }
    }

    /// Count-keyed cluster color stops.
    pub fn color_stops(mut self, stops: Vec<(Value, String)>) -> Self {
        self.color_stops = stops;
        self
    }

    /// Count-keyed cluster radius stops.
    pub fn radius_stops(mut self, stops: Vec<(Value, f64)>) -> Self {
        self.radius_stops = stops;
        self
    }

    /// Sets the pixel radius within which points aggregate.
    pub fn cluster_radius(mut self, radius: f64) -> Self {
        self.cluster_radius = radius;
        self
    }

    /// Sets the zoom level past which points stop clustering.
    pub fn cluster_max_zoom(mut self, zoom: f64) -> Self {
        self.cluster_max_zoom = zoom;
        self
    }

    /// Sets the color and radius for unclustered points.
    pub fn unclustered(mut self, color: &str, radius: f64) -> Self {
        self.color_default = color.to_string();
        self.radius_default = radius;
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
        let color_stops: Vec<(Value, Value)> = self
            .color_stops
            .iter()
            .map(|(k, v)| (k.clone(), json!(v)))
            .collect();
        let radius_stops: Vec<(Value, Value)> = self
            .radius_stops
            .iter()
            .map(|(k, v)| (k.clone(), json!(v)))
            .collect();
        let color = step_from_stops(&color_stops, json!(self.color_default));
        let radius = step_from_stops(&radius_stops, json!(self.radius_default));
        vars.insert("color_expression".into(), json!(to_json(&color)));
        vars.insert("radius_expression".into(), json!(to_json(&radius)));
        vars.insert("cluster_radius".into(), json!(self.cluster_radius));
        vars.insert("cluster_max_zoom".into(), json!(self.cluster_max_zoom));
        vars.insert("color_default".into(), json!(self.color_default));
        vars.insert("radius_default".into(), json!(self.radius_default));
        vars.insert("stroke_color".into(), json!(self.stroke_color));
        vars.insert("stroke_width".into(), json!(self.stroke_width));
        Ok(vars)
    }
}

/// Step expression over the cluster point count.
///
/// The first stop's output is the base value; its threshold is implied
/// by the step semantics and dropped.
fn step_from_stops(stops: &[(Value, Value)], fallback: Value) -> Value {
    let Some(((_, base), rest)) = stops.split_first() else {
        return fallback;
    };
    expression::step("point_count", base.clone(), rest)
}
