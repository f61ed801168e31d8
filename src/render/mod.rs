//! Map document rendering.
//!
//! [`Renderer`] loads the embedded Jinja templates once and turns a
//! [`MapConfig`](crate::MapConfig) plus its layers into a standalone
//! HTML document a browser can open directly.

mod error;
mod legend;
mod renderer;

pub use error::RenderError;
pub use renderer::Renderer;
