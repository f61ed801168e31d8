//! Scale bar control configuration.

/// Unit system shown by the scale bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleUnits {
    #[default]
    Metric,
    Imperial,
    Nautical,
}

impl ScaleUnits {
    pub(crate) fn as_js(self) -> &'static str {
        match self {
            ScaleUnits::Metric => "metric",
            ScaleUnits::Imperial => "imperial",
            ScaleUnits::Nautical => "nautical",
        }
    }
}

/// Viewer corner an annotation is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    #[default]
    BottomLeft,
    BottomRight,
}

impl ControlPosition {
    pub(crate) fn as_js(self) -> &'static str {
        match self {
            ControlPosition::TopLeft => "top-left",
            ControlPosition::TopRight => "top-right",
            ControlPosition::BottomLeft => "bottom-left",
            ControlPosition::BottomRight => "bottom-right",
        }
    }
}

/// Scale bar configuration, attached via
/// [`MapConfig::scale`](super::MapConfig::scale).
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleControl {
    pub(crate) units: ScaleUnits,
    pub(crate) position: ControlPosition,
    pub(crate) border_color: String,
    pub(crate) background_color: String,
    pub(crate) text_color: String,
}

impl ScaleControl {
    /// Creates a metric scale bar in the bottom-left corner.
    pub fn new() -> Self {
        Self {
            units: ScaleUnits::Metric,
            position: ControlPosition::BottomLeft,
            border_color: "#6e6e6e".to_string(),
            background_color: "white".to_string(),
            text_color: "#131516".to_string(),
        }
    }

    /// Sets the unit system.
    pub fn units(mut self, units: ScaleUnits) -> Self {
        self.units = units;
        self
    }

    /// Sets the viewer corner.
    pub fn position(mut self, position: ControlPosition) -> Self {
        self.position = position;
        self
    }

    /// Sets the border color.
    pub fn border_color(mut self, color: &str) -> Self {
        self.border_color = color.to_string();
        self
    }

    /// Sets the fill color.
    pub fn background_color(mut self, color: &str) -> Self {
        self.background_color = color.to_string();
        self
    }

    /// Sets the text color.
    pub fn text_color(mut self, color: &str) -> Self {
        self.text_color = color.to_string();
        self
    }
}

impl Default for ScaleControl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let scale = ScaleControl::new();
        assert_eq!(scale.units, ScaleUnits::Metric);
        assert_eq!(scale.position, ControlPosition::BottomLeft);
    }

    #[test]
    fn test_js_spellings() {
        assert_eq!(ScaleUnits::Nautical.as_js(), "nautical");
        assert_eq!(ControlPosition::TopRight.as_js(), "top-right");
    }
}
