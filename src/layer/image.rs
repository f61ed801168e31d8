//! Image overlay layer: a single image pinned to four corner coordinates.

use serde_json::{json, Map, Value};

use super::common::{to_json, LayerOptions};
use crate::style::StyleError;

/// Places an image (URL or data URI) on the map between four corners.
///
/// Corners are `(longitude, latitude)` pairs in top-left, top-right,
/// bottom-right, bottom-left order.
#[derive(Debug, Clone)]
pub struct ImageLayer {
    pub image: String,
    pub coordinates: [(f64, f64); 4],
    pub options: LayerOptions,
}

impl ImageLayer {
    pub fn new(image: &str, coordinates: [(f64, f64); 4]) -> Self {
        Self {
            image: image.to_string(),
            coordinates,
            options: LayerOptions::new(),
        }
    }

    /// Replaces the shared layer options.
    pub fn options(mut self, options: LayerOptions) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn context(&self, layer_id: usize) -> Result<Map<String, Value>, StyleError> {
        let mut vars = self.options.context(layer_id, None);
        let corners: Vec<Value> = self
            .coordinates
            .iter()
            .map(|(lon, lat)| json!([lon, lat]))
            .collect();
        vars.insert("image_url".into(), json!(self.image));
        vars.insert("coordinates".into(), json!(to_json(&json!(corners))));
        Ok(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_context() {
        let layer = ImageLayer::new(
            "https://example.com/overlay.png",
            [(-80.0, 26.0), (-76.0, 26.0), (-76.0, 22.0), (-80.0, 22.0)],
        );
        let vars = layer.context(2).unwrap();
        assert_eq!(vars["image_url"], json!("https://example.com/overlay.png"));
        assert_eq!(
            vars["coordinates"],
            json!("[[-80.0,26.0],[-76.0,26.0],[-76.0,22.0],[-80.0,22.0]]")
        );
        assert_eq!(vars["layer_id"], json!(2));
    }
}
