//! Visualization layers.
//!
//! Each layer kind pairs a GeoJSON document (or vector tile source) with
//! the stop tables that drive its paint properties. Layers are assembled
//! with fluent builders and handed to [`crate::Renderer`] for rendering:
//!
//! ```
//! use cartogl::{CircleLayer, ColorStyle, Layer};
//! use serde_json::json;
//!
//! let data = json!({"type": "FeatureCollection", "features": []});
//! let layer: Layer = CircleLayer::new(data)
//!     .color("density", ColorStyle::new(
//!         vec![(json!(0), "#edf8fb".into()), (json!(100), "#006d2c".into())],
//!         "grey".into(),
//!     ))
//!     .into();
//! assert_eq!(layer.kind(), "circle");
//! ```

mod choropleth;
mod circle;
mod cluster;
mod common;
mod graduated;
mod heatmap;
mod image;
mod linestring;
mod raster;

pub use choropleth::ChoroplethLayer;
pub use circle::CircleLayer;
pub use cluster::ClusteredCircleLayer;
pub use common::{LayerOptions, LineStroke, VectorSource};
pub use graduated::GraduatedCircleLayer;
pub use heatmap::HeatmapLayer;
pub use image::ImageLayer;
pub use linestring::LinestringLayer;
pub use raster::RasterLayer;

use serde_json::{Map, Value};

use crate::style::StyleError;

/// A layer of any kind, ready to render.
#[derive(Debug, Clone)]
pub enum Layer {
    Circle(CircleLayer),
    GraduatedCircle(GraduatedCircleLayer),
    Heatmap(HeatmapLayer),
    ClusteredCircle(ClusteredCircleLayer),
    Choropleth(ChoroplethLayer),
    Linestring(LinestringLayer),
    Image(ImageLayer),
    Raster(RasterLayer),
}

impl Layer {
    /// Short name of the layer kind, matching its template.
    pub fn kind(&self) -> &'static str {
        match self {
            Layer::Circle(_) => "circle",
            Layer::GraduatedCircle(_) => "graduated_circle",
            Layer::Heatmap(_) => "heatmap",
            Layer::ClusteredCircle(_) => "clustered_circle",
            Layer::Choropleth(_) => "choropleth",
            Layer::Linestring(_) => "linestring",
            Layer::Image(_) => "image",
            Layer::Raster(_) => "raster",
        }
    }

    pub(crate) fn template_name(&self) -> &'static str {
        match self {
            Layer::Circle(_) => "circle.html",
            Layer::GraduatedCircle(_) => "graduated_circle.html",
            Layer::Heatmap(_) => "heatmap.html",
            Layer::ClusteredCircle(_) => "clustered_circle.html",
            Layer::Choropleth(_) => "choropleth.html",
            Layer::Linestring(_) => "linestring.html",
            Layer::Image(_) => "image.html",
            Layer::Raster(_) => "raster.html",
        }
    }

    pub(crate) fn context(&self, layer_id: usize) -> Result<Map<String, Value>, StyleError> {
        match self {
            Layer::Circle(layer) => layer.context(layer_id),
            Layer::GraduatedCircle(layer) => layer.context(layer_id),
            Layer::Heatmap(layer) => layer.context(layer_id),
            Layer::ClusteredCircle(layer) => layer.context(layer_id),
            Layer::Choropleth(layer) => layer.context(layer_id),
            Layer::Linestring(layer) => layer.context(layer_id),
            Layer::Image(layer) => layer.context(layer_id),
            Layer::Raster(layer) => layer.context(layer_id),
        }
    }

    /// Color stops and default for legend rendering, if the layer has any.
    pub(crate) fn legend_color(&self) -> Option<(&[(Value, String)], &str)> {
        match self {
            Layer::Circle(layer) => Some((&layer.color.stops, &layer.color.default)),
            Layer::GraduatedCircle(layer) => Some((&layer.color.stops, &layer.color.default)),
            Layer::Heatmap(layer) => Some((&layer.color_stops, "")),
            Layer::ClusteredCircle(layer) => Some((&layer.color_stops, &layer.color_default)),
            Layer::Choropleth(layer) => Some((&layer.color.stops, &layer.color.default)),
            Layer::Linestring(layer) => Some((&layer.color.stops, &layer.color.default)),
            Layer::Image(_) | Layer::Raster(_) => None,
        }
    }

    /// Numeric (radius or width) stops for legend rendering, if any.
    pub(crate) fn legend_numeric(&self) -> Option<&[(Value, f64)]> {
        match self {
            Layer::GraduatedCircle(layer) => Some(&layer.radius.stops),
            Layer::ClusteredCircle(layer) => Some(&layer.radius_stops),
            Layer::Linestring(layer) => Some(&layer.width.stops),
            _ => None,
        }
    }
}

impl From<CircleLayer> for Layer {
    fn from(layer: CircleLayer) -> Self {
        Layer::Circle(layer)
    }
}

impl From<GraduatedCircleLayer> for Layer {
    fn from(layer: GraduatedCircleLayer) -> Self {
        Layer::GraduatedCircle(layer)
    }
}

impl From<HeatmapLayer> for Layer {
    fn from(layer: HeatmapLayer) -> Self {
        Layer::Heatmap(layer)
    }
}

impl From<ClusteredCircleLayer> for Layer {
    fn from(layer: ClusteredCircleLayer) -> Self {
        Layer::ClusteredCircle(layer)
    }
}

impl From<ChoroplethLayer> for Layer {
    fn from(layer: ChoroplethLayer) -> Self {
        Layer::Choropleth(layer)
    }
}

impl From<LinestringLayer> for Layer {
    fn from(layer: LinestringLayer) -> Self {
        Layer::Linestring(layer)
    }
}

impl From<ImageLayer> for Layer {
    fn from(layer: ImageLayer) -> Self {
        Layer::Image(layer)
    }
}

impl From<RasterLayer> for Layer {
    fn from(layer: RasterLayer) -> Self {
        Layer::Raster(layer)
    }
}
