//! Map legend configuration.

use std::fmt;

/// Vertical or horizontal legend arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendLayout {
    #[default]
    Vertical,
    Horizontal,
}

/// Which styled attribute the legend explains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendFunction {
    /// Keys show the color stops.
    #[default]
    Color,
    /// Keys show the radius stops.
    Radius,
}

/// Shape of each legend key swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendKeyShape {
    #[default]
    Square,
    RoundedSquare,
    Circle,
    ContiguousBar,
    Line,
}

impl LegendKeyShape {
    pub(crate) fn css_class(self) -> &'static str {
        match self {
            LegendKeyShape::Square => "square",
            LegendKeyShape::RoundedSquare => "rounded-square",
            LegendKeyShape::Circle => "circle",
            LegendKeyShape::ContiguousBar => "contiguous-bar",
            LegendKeyShape::Line => "line",
        }
    }
}

/// Error for legend configurations the viewer cannot draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendError {
    pub message: String,
}

impl fmt::Display for LegendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LegendError {}

/// Legend configuration.
///
/// Built once and attached to a [`MapConfig`](super::MapConfig); legend
/// content itself (keys and labels) is derived from the first styled
/// layer at render time.
///
/// # Example
///
/// ```rust
/// use cartogl::{Legend, LegendKeyShape};
///
/// let legend = Legend::new()
///     .title("Population")
///     .key_shape(LegendKeyShape::Circle)
///     .gradient(true);
/// assert!(legend.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub(crate) title: String,
    pub(crate) layout: LegendLayout,
    pub(crate) function: LegendFunction,
    pub(crate) gradient: bool,
    pub(crate) fill: String,
    pub(crate) header_fill: String,
    pub(crate) text_color: String,
    pub(crate) numeric_precision: Option<usize>,
    pub(crate) key_shape: LegendKeyShape,
    pub(crate) key_borders: bool,
}

impl Legend {
    /// Creates a legend with the stock white-on-grey appearance.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            layout: LegendLayout::Vertical,
            function: LegendFunction::Color,
            gradient: false,
            fill: "white".to_string(),
            header_fill: "white".to_string(),
            text_color: "#6e6e6e".to_string(),
            numeric_precision: None,
            key_shape: LegendKeyShape::Square,
            key_borders: true,
        }
    }

    /// Sets the legend title text.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets the legend arrangement.
    pub fn layout(mut self, layout: LegendLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Selects whether the legend explains color or radius stops.
    pub fn function(mut self, function: LegendFunction) -> Self {
        self.function = function;
        self
    }

    /// Draws the keys as one continuous gradient instead of discrete
    /// swatches.
    pub fn gradient(mut self, on: bool) -> Self {
        self.gradient = on;
        self
    }

    /// Sets the legend background color.
    pub fn fill(mut self, fill: &str) -> Self {
        self.fill = fill.to_string();
        self
    }

    /// Sets the header background color (vertical layout).
    pub fn header_fill(mut self, fill: &str) -> Self {
        self.header_fill = fill.to_string();
        self
    }

    /// Sets the label text color.
    pub fn text_color(mut self, color: &str) -> Self {
        self.text_color = color.to_string();
        self
    }

    /// Rounds numeric labels to the given number of decimals.
    pub fn numeric_precision(mut self, decimals: usize) -> Self {
        self.numeric_precision = Some(decimals);
        self
    }

    /// Sets the key swatch shape.
    pub fn key_shape(mut self, shape: LegendKeyShape) -> Self {
        self.key_shape = shape;
        self
    }

    /// Shows or hides key swatch borders.
    pub fn key_borders(mut self, on: bool) -> Self {
        self.key_borders = on;
        self
    }

    /// Checks that the configuration is drawable.
    ///
    /// # Errors
    ///
    /// A gradient legend cannot explain a variable radius; that
    /// combination is rejected here (and again at render time).
    pub fn validate(&self) -> Result<(), LegendError> {
        if self.gradient && self.function == LegendFunction::Radius {
            return Err(LegendError {
                message: "gradient legend format is not compatible with a variable \
                          radius legend; disable the gradient or use the color function"
                    .to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::new()
    }
}
