//! Viewer-level configuration: viewport, controls, legend, scale bar.
//!
//! Everything here is immutable once built; a [`MapConfig`] plus a set
//! of layers fully determines the rendered document.

mod config;
mod legend;
mod scale;

pub use config::{MapConfig, PopupAction, TokenError, GL_JS_VERSION};
pub use legend::{Legend, LegendError, LegendFunction, LegendKeyShape, LegendLayout};
pub use scale::{ControlPosition, ScaleControl, ScaleUnits};
