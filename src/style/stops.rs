//! Stop tables and per-field style configuration.
//!
//! A stop table is an ordered sequence of breakpoint/output pairs. With
//! [`FunctionType::Interpolate`] the breakpoints are numeric thresholds
//! of a piecewise-linear function; with [`FunctionType::Match`] they are
//! discrete keys of an exact-lookup table.
//!
//! Each styled visual attribute (color, radius, width, height, weight)
//! gets its own [`NumericStyle`] or [`ColorStyle`] built once up front.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a stop table maps a property value to an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionType {
    /// Continuous piecewise-linear mapping over numeric thresholds.
    #[default]
    Interpolate,
    /// Discrete exact-key lookup.
    Match,
    /// Alias for [`FunctionType::Match`] used with categorical data.
    Categorical,
}

impl FunctionType {
    /// Returns true for the exact-lookup modes.
    pub fn is_match(self) -> bool {
        matches!(self, FunctionType::Match | FunctionType::Categorical)
    }
}

/// Stop table driving a numeric attribute (radius, width, height, weight).
///
/// Interpolate-mode thresholds are assumed ascending; ordering is a
/// documented precondition and is not validated. Behavior on unsorted
/// stops is unspecified.
///
/// # Example
///
/// ```rust
/// use cartogl::{FunctionType, NumericStyle};
///
/// let radius = NumericStyle::new(vec![(0.0.into(), 1.0), (1000.0.into(), 12.0)], 2.0);
/// assert_eq!(radius.function, FunctionType::Interpolate);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStyle {
    /// Ordered (breakpoint, output) pairs.
    pub stops: Vec<(Value, f64)>,
    /// Output used when the lookup value is missing, unparseable, or
    /// (in match mode) absent from the table.
    pub default: f64,
    /// Resolution mode.
    pub function: FunctionType,
}

impl NumericStyle {
    /// Creates an interpolate-mode style.
    pub fn new(stops: Vec<(Value, f64)>, default: f64) -> Self {
        Self {
            stops,
            default,
            function: FunctionType::Interpolate,
        }
    }

    /// Sets the resolution mode, returning the updated style for chaining.
    pub fn function(mut self, function: FunctionType) -> Self {
        self.function = function;
        self
    }
}

/// Stop table driving a color attribute.
///
/// Outputs are CSS color strings; interpolate mode normalizes the two
/// bracketing colors to RGB and blends component-wise.
///
/// # Example
///
/// ```rust
/// use cartogl::{ColorStyle, FunctionType};
///
/// let zoning = ColorStyle::new(
///     vec![
///         ("residential".into(), "#feb24c".to_string()),
///         ("industrial".into(), "#555555".to_string()),
///     ],
///     "grey".to_string(),
/// )
/// .function(FunctionType::Match);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStyle {
    /// Ordered (breakpoint, color string) pairs.
    pub stops: Vec<(Value, String)>,
    /// Color used when the lookup value is missing, unparseable, or
    /// (in match mode) absent from the table.
    pub default: String,
    /// Resolution mode.
    pub function: FunctionType,
}

impl ColorStyle {
    /// Creates an interpolate-mode style.
    pub fn new(stops: Vec<(Value, String)>, default: String) -> Self {
        Self {
            stops,
            default,
            function: FunctionType::Interpolate,
        }
    }

    /// Sets the resolution mode, returning the updated style for chaining.
    pub fn function(mut self, function: FunctionType) -> Self {
        self.function = function;
        self
    }

    /// Stops with the outputs widened to JSON values, for expression
    /// building.
    pub(crate) fn value_stops(&self) -> Vec<(Value, Value)> {
        self.stops
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect()
    }
}

impl NumericStyle {
    /// Stops with the outputs widened to JSON values, for expression
    /// building.
    pub(crate) fn value_stops(&self) -> Vec<(Value, Value)> {
        self.stops
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(*v)))
            .collect()
    }
}
