//! cartogl — data-driven Mapbox GL map documents.
//!
//! cartogl turns GeoJSON (or a vector tile source joined against local
//! records) into a standalone HTML map. Paint properties are driven by
//! stop tables: ordered `(threshold, output)` pairs that either
//! interpolate between outputs or match keys exactly.
//!
//! # Example
//!
//! ```rust
//! use cartogl::{CircleLayer, ColorStyle, MapConfig, Renderer};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = json!({
//!     "type": "FeatureCollection",
//!     "features": [{
//!         "type": "Feature",
//!         "properties": {"population": 12000},
//!         "geometry": {"type": "Point", "coordinates": [-95.0, 40.0]}
//!     }]
//! });
//!
//! let layer = CircleLayer::new(data).color(
//!     "population",
//!     ColorStyle::new(
//!         vec![(json!(0), "#edf8fb".into()), (json!(50000), "#006d2c".into())],
//!         "grey".into(),
//!     ),
//! );
//!
//! let config = MapConfig::new("pk.your-token")?
//!     .center(-95.0, 40.0)
//!     .zoom(3.0);
//!
//! let html = Renderer::new()?.render_map(&config, &[layer.into()])?;
//! assert!(html.contains("circle-color"));
//! # Ok(())
//! # }
//! ```
//!
//! The same stop tables can be resolved host-side, without a browser,
//! through [`color_map`] and [`numeric_map`], and shipped to vector
//! layers as join tables via [`color_join_table`] and
//! [`numeric_join_table`].

pub mod color;
pub mod data;
pub mod expression;
pub mod layer;
pub mod map;
pub mod render;
pub mod style;

pub use color::{ParseColorError, Rgb};
pub use data::{point_center, record_list, Feature};
pub use layer::{
    ChoroplethLayer, CircleLayer, ClusteredCircleLayer, GraduatedCircleLayer, HeatmapLayer,
    ImageLayer, Layer, LayerOptions, LinestringLayer, LineStroke, RasterLayer, VectorSource,
};
pub use map::{
    ControlPosition, Legend, LegendError, LegendFunction, LegendKeyShape, LegendLayout, MapConfig,
    PopupAction, ScaleControl, ScaleUnits, TokenError, GL_JS_VERSION,
};
pub use render::{RenderError, Renderer};
pub use style::{
    color_join_table, color_map, numeric_join_table, numeric_map, ColorStyle, FunctionType,
    JoinTable, NumericStyle, StyleError,
};
