//! Top-level map viewer configuration.

use std::fmt;

use super::legend::Legend;
use super::scale::ScaleControl;

/// Mapbox GL JS release pinned into the generated document.
pub const GL_JS_VERSION: &str = "v0.53.0";

/// How feature popups open in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupAction {
    #[default]
    Hover,
    Click,
}

/// Error returned for a secret access token.
///
/// The generated document runs in the browser, so only public (`pk.`)
/// tokens are accepted; embedding a secret (`sk.`) token would leak it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenError;

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "access token must be public (pk), not secret (sk); \
             public tokens are listed on your Mapbox account page"
        )
    }
}

impl std::error::Error for TokenError {}

/// Immutable viewer configuration for one generated map document.
///
/// Built once through the fluent setters; nothing on a `MapConfig`
/// mutates after construction, so render output depends only on what
/// was configured up front.
///
/// # Example
///
/// ```rust
/// use cartogl::MapConfig;
///
/// let config = MapConfig::new("pk.abc123")
///     .unwrap()
///     .center(-95.0, 40.0)
///     .zoom(3.0)
///     .height("400px");
/// ```
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub(crate) access_token: String,
    pub(crate) style: String,
    pub(crate) div_id: String,
    pub(crate) width: String,
    pub(crate) height: String,
    pub(crate) center: (f64, f64),
    pub(crate) zoom: f64,
    pub(crate) pitch: f64,
    pub(crate) bearing: f64,
    pub(crate) box_zoom: bool,
    pub(crate) double_click_zoom: bool,
    pub(crate) scroll_zoom: bool,
    pub(crate) touch_zoom: bool,
    pub(crate) popup_action: PopupAction,
    pub(crate) legend: Option<Legend>,
    pub(crate) scale: Option<ScaleControl>,
}

impl MapConfig {
    /// Creates a configuration with the default basemap and viewport.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] if the token is a secret (`sk.`) token.
    pub fn new(access_token: &str) -> Result<Self, TokenError> {
        if access_token.starts_with("sk") {
            return Err(TokenError);
        }
        Ok(Self {
            access_token: access_token.to_string(),
            style: "mapbox://styles/mapbox/light-v10?optimize=true".to_string(),
            div_id: "map".to_string(),
            width: "100%".to_string(),
            height: "500px".to_string(),
            center: (0.0, 0.0),
            zoom: 0.0,
            pitch: 0.0,
            bearing: 0.0,
            box_zoom: true,
            double_click_zoom: true,
            scroll_zoom: true,
            touch_zoom: true,
            popup_action: PopupAction::Hover,
            legend: None,
            scale: None,
        })
    }

    /// Sets the basemap style URL (or inline style JSON).
    pub fn style(mut self, style: &str) -> Self {
        self.style = style.to_string();
        self
    }

    /// Sets the HTML id of the map container div.
    pub fn div_id(mut self, div_id: &str) -> Self {
        self.div_id = div_id.to_string();
        self
    }

    /// Sets the CSS width of the map container.
    pub fn width(mut self, width: &str) -> Self {
        self.width = width.to_string();
        self
    }

    /// Sets the CSS height of the map container.
    pub fn height(mut self, height: &str) -> Self {
        self.height = height.to_string();
        self
    }

    /// Sets the starting center as `(lon, lat)`.
    pub fn center(mut self, lon: f64, lat: f64) -> Self {
        self.center = (lon, lat);
        self
    }

    /// Sets the starting zoom level.
    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Sets the starting pitch in degrees.
    pub fn pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch;
        self
    }

    /// Sets the starting bearing in degrees.
    pub fn bearing(mut self, bearing: f64) -> Self {
        self.bearing = bearing;
        self
    }

    /// Enables or disables drag-a-box zooming.
    pub fn box_zoom(mut self, on: bool) -> Self {
        self.box_zoom = on;
        self
    }

    /// Enables or disables double-click zooming.
    pub fn double_click_zoom(mut self, on: bool) -> Self {
        self.double_click_zoom = on;
        self
    }

    /// Enables or disables scroll-wheel zooming.
    pub fn scroll_zoom(mut self, on: bool) -> Self {
        self.scroll_zoom = on;
        self
    }

    /// Enables or disables two-finger touch zooming.
    pub fn touch_zoom(mut self, on: bool) -> Self {
        self.touch_zoom = on;
        self
    }

    /// Sets how feature popups open.
    pub fn popup_action(mut self, action: PopupAction) -> Self {
        self.popup_action = action;
        self
    }

    /// Attaches a legend.
    pub fn legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Attaches a scale bar control.
    pub fn scale(mut self, scale: ScaleControl) -> Self {
        self.scale = Some(scale);
        self
    }
}
