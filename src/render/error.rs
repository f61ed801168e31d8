//! Rendering errors.

use std::fmt;

use crate::map::LegendError;
use crate::style::StyleError;

/// Error produced while rendering a map document.
#[derive(Debug)]
pub enum RenderError {
    /// A layer's stop tables or data join failed to resolve.
    Style(StyleError),
    /// The legend configuration cannot be drawn.
    Legend(LegendError),
    /// A template failed to parse or render.
    Template(minijinja::Error),
    /// Writing the document to disk failed.
    Io(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Style(err) => write!(f, "style resolution failed: {}", err),
            RenderError::Legend(err) => write!(f, "invalid legend: {}", err),
            RenderError::Template(err) => write!(f, "template error: {}", err),
            RenderError::Io(err) => write!(f, "could not write map document: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Style(err) => Some(err),
            RenderError::Legend(err) => Some(err),
            RenderError::Template(err) => Some(err),
            RenderError::Io(err) => Some(err),
        }
    }
}

impl From<StyleError> for RenderError {
    fn from(err: StyleError) -> Self {
        RenderError::Style(err)
    }
}

impl From<LegendError> for RenderError {
    fn from(err: LegendError) -> Self {
        RenderError::Legend(err)
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        RenderError::Template(err)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}
