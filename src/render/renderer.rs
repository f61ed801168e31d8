//! HTML document rendering.

use std::path::Path;

use minijinja::{AutoEscape, Environment};
use serde_json::{json, Map, Value};

use crate::layer::Layer;
use crate::map::{MapConfig, PopupAction, GL_JS_VERSION};

use super::error::RenderError;
use super::legend::legend_context;

/// Templates embedded at compile time, keyed by the names layer kinds
/// resolve to.
const TEMPLATES: &[(&str, &str)] = &[
    ("map.html", include_str!("../../templates/map.html")),
    ("label.html", include_str!("../../templates/label.html")),
    ("popup.html", include_str!("../../templates/popup.html")),
    ("circle.html", include_str!("../../templates/circle.html")),
    (
        "graduated_circle.html",
        include_str!("../../templates/graduated_circle.html"),
    ),
    ("heatmap.html", include_str!("../../templates/heatmap.html")),
    (
        "clustered_circle.html",
        include_str!("../../templates/clustered_circle.html"),
    ),
    ("choropleth.html", include_str!("../../templates/choropleth.html")),
    ("linestring.html", include_str!("../../templates/linestring.html")),
    ("image.html", include_str!("../../templates/image.html")),
    ("raster.html", include_str!("../../templates/raster.html")),
];

/// Renders configured maps into standalone HTML documents.
///
/// # Example
///
/// ```rust
/// use cartogl::{CircleLayer, MapConfig, Renderer};
/// use serde_json::json;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let renderer = Renderer::new()?;
/// let config = MapConfig::new("pk.abc")?.center(-95.0, 40.0).zoom(3.0);
/// let data = json!({"type": "FeatureCollection", "features": []});
/// let html = renderer.render_map(&config, &[CircleLayer::new(data).into()])?;
/// assert!(html.contains("mapboxgl.accessToken"));
/// # Ok(())
/// # }
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer with the embedded templates loaded.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if an embedded template fails
    /// to parse.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        // Output is a JS-heavy HTML document assembled from values this
        // crate already serialized; HTML-escaping would corrupt them.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders a complete HTML map document.
    ///
    /// Layers are rendered in order; each becomes one numbered GL
    /// source/layer pair inside the map's `load` handler.
    ///
    /// # Errors
    ///
    /// Fails if a layer's styles cannot be resolved
    /// ([`RenderError::Style`]), the legend is undrawable
    /// ([`RenderError::Legend`]), or a template errors
    /// ([`RenderError::Template`]).
    pub fn render_map(&self, config: &MapConfig, layers: &[Layer]) -> Result<String, RenderError> {
        let popup_on_hover = config.popup_action == PopupAction::Hover;

        let mut layers_html = String::new();
        for (layer_id, layer) in layers.iter().enumerate() {
            let mut vars = layer.context(layer_id)?;
            vars.insert("popup_on_hover".into(), json!(popup_on_hover));
            let template = self.env.get_template(layer.template_name())?;
            layers_html.push_str(&template.render(Value::Object(vars))?);
            layers_html.push('\n');
        }

        let context = self.map_context(config, layers, layers_html)?;
        let template = self.env.get_template("map.html")?;
        Ok(template.render(Value::Object(context))?)
    }

    /// Renders a map document and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Everything [`render_map`](Self::render_map) can return, plus
    /// [`RenderError::Io`] if the file cannot be written.
    pub fn save_map(
        &self,
        path: impl AsRef<Path>,
        config: &MapConfig,
        layers: &[Layer],
    ) -> Result<(), RenderError> {
        let html = self.render_map(config, layers)?;
        std::fs::write(path, html)?;
        Ok(())
    }

    fn map_context(
        &self,
        config: &MapConfig,
        layers: &[Layer],
        layers_html: String,
    ) -> Result<Map<String, Value>, RenderError> {
        let mut vars = Map::new();
        vars.insert("gl_js_version".into(), json!(GL_JS_VERSION));
        vars.insert("access_token".into(), json!(config.access_token));
        vars.insert("style".into(), json!(config.style));
        vars.insert("div_id".into(), json!(config.div_id));
        vars.insert("width".into(), json!(config.width));
        vars.insert("height".into(), json!(config.height));
        vars.insert("center_lon".into(), json!(config.center.0));
        vars.insert("center_lat".into(), json!(config.center.1));
        vars.insert("zoom".into(), json!(config.zoom));
        vars.insert("pitch".into(), json!(config.pitch));
        vars.insert("bearing".into(), json!(config.bearing));
        vars.insert("box_zoom".into(), json!(config.box_zoom));
        vars.insert("double_click_zoom".into(), json!(config.double_click_zoom));
        vars.insert("scroll_zoom".into(), json!(config.scroll_zoom));
        vars.insert("touch_zoom".into(), json!(config.touch_zoom));
        vars.insert("layers_html".into(), json!(layers_html));

        match &config.legend {
            Some(legend) => {
                vars.insert("legend".into(), legend_context(legend, layers)?);
            }
            None => {
                vars.insert("legend".into(), Value::Null);
            }
        }

        match &config.scale {
            Some(scale) => {
                vars.insert(
                    "scale".into(),
                    json!({
                        "units": scale.units.as_js(),
                        "position": scale.position.as_js(),
                        "border_color": scale.border_color,
                        "background_color": scale.background_color,
                        "text_color": scale.text_color,
                    }),
                );
            }
            None => {
                vars.insert("scale".into(), Value::Null);
            }
        }

        Ok(vars)
    }
}
