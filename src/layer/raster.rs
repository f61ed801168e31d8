//! Raster tile layer: an XYZ tile endpoint rendered beneath other layers.

use serde_json::{json, Map, Value};

use super::common::{to_json, LayerOptions};
use crate::style::StyleError;

/// Renders raster tiles from an XYZ URL template.
#[derive(Debug, Clone)]
pub struct RasterLayer {
    pub tiles_url: String,
    pub tiles_size: u32,
    pub tiles_min_zoom: f64,
    pub tiles_max_zoom: f64,
    pub tiles_bounds: Option<[f64; 4]>,
    pub options: LayerOptions,
}

impl RasterLayer {
    pub fn new(tiles_url: &str) -> Self {
        Self {
            tiles_url: tiles_url.to_string(),
            tiles_size: 256,
            tiles_min_zoom: 0.0,
            tiles_max_zoom: 22.0,
            tiles_bounds: None,
            options: LayerOptions::new(),
        }
    }

    /// Sets the tile size in pixels.
    pub fn tile_size(mut self, size: u32) -> Self {
        self.tiles_size = size;
        self
    }

    /// Restricts the zoom range the tile source covers.
    pub fn zoom_range(mut self, min: f64, max: f64) -> Self {
        self.tiles_min_zoom = min;
        self.tiles_max_zoom = max;
        self
    }

    /// Restricts the source to a `[west, south, east, north]` bounding box.
    pub fn bounds(mut self, bounds: [f64; 4]) -> Self {
        self.tiles_bounds = Some(bounds);
        self
    }

    /// Replaces the shared layer options.
    pub fn options(mut self, options: LayerOptions) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn context(&self, layer_id: usize) -> Result<Map<String, Value>, StyleError> {
        let mut vars = self.options.context(layer_id, None);
        vars.insert("tiles_url".into(), json!(self.tiles_url));
        vars.insert("tiles_size".into(), json!(self.tiles_size));
        vars.insert("tiles_min_zoom".into(), json!(self.tiles_min_zoom));
        vars.insert("tiles_max_zoom".into(), json!(self.tiles_max_zoom));
        if let Some(bounds) = self.tiles_bounds {
            vars.insert("tiles_bounds".into(), json!(to_json(&json!(bounds))));
        }
        Ok(vars)
    }
}
