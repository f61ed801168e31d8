//! Legend content derivation.
//!
//! A [`Legend`](crate::Legend) only carries appearance settings; the keys
//! and labels shown inside it come from the first styled layer on the map.
//! This module turns that pairing into the template variables the legend
//! markup consumes.

use serde_json::{json, Value};

use crate::layer::Layer;
use crate::map::{Legend, LegendError, LegendFunction, LegendLayout};

/// Builds the `legend` template variable from the configuration and the
/// stops of the first layer that has any.
///
/// # Errors
///
/// Returns [`LegendError`] for configurations the viewer cannot draw,
/// such as a gradient legend over radius stops.
pub(crate) fn legend_context(legend: &Legend, layers: &[Layer]) -> Result<Value, LegendError> {
    legend.validate()?;

    let items = match legend.function {
        LegendFunction::Color => color_items(legend, layers),
        LegendFunction::Radius => radius_items(legend, layers),
    };

    let gradient_css = if legend.gradient {
        gradient_css(&items)
    } else {
        None
    };

    Ok(json!({
        "title": legend.title,
        "horizontal": legend.layout == LegendLayout::Horizontal,
        "gradient": legend.gradient,
        "gradient_css": gradient_css,
        "fill": legend.fill,
        "header_fill": legend.header_fill,
        "text_color": legend.text_color,
        "key_shape": legend.key_shape.css_class(),
        "key_borders": legend.key_borders,
        "items": items,
    }))
}

fn color_items(legend: &Legend, layers: &[Layer]) -> Vec<Value> {
    let Some((stops, _)) = layers.iter().find_map(Layer::legend_color) else {
        return Vec::new();
    };
    stops
        .iter()
        .map(|(key, color)| {
            json!({
                "label": format_key(key, legend.numeric_precision),
                "color": color,
            })
        })
        .collect()
}

fn radius_items(legend: &Legend, layers: &[Layer]) -> Vec<Value> {
    let Some(stops) = layers.iter().find_map(Layer::legend_numeric) else {
        return Vec::new();
    };
    let color = layers
        .iter()
        .find_map(Layer::legend_color)
        .map(|(_, default)| default)
        .unwrap_or("grey");
    stops
        .iter()
        .map(|(key, radius)| {
            json!({
                "label": format_key(key, legend.numeric_precision),
                "color": color,
                // diameter in px; radius stops are GL circle radii
                "size": radius * 2.0,
            })
        })
        .collect()
}

fn gradient_css(items: &[Value]) -> Option<String> {
    let colors: Vec<&str> = items
        .iter()
        .filter_map(|item| item.get("color").and_then(Value::as_str))
        .collect();
    if colors.len() < 2 {
        return None;
    }
    Some(format!("linear-gradient(to right, {})", colors.join(", ")))
}

/// Formats a stop key for display, applying the configured numeric
/// precision when the key is a number.
fn format_key(key: &Value, precision: Option<usize>) -> String {
    match key {
        Value::String(text) => text.clone(),
        Value::Number(number) => match (precision, number.as_f64()) {
            (Some(decimals), Some(value)) => format!("{:.*}", decimals, value),
            _ => number.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::{CircleLayer, GraduatedCircleLayer};
    use crate::map::LegendKeyShape;
    use crate::style::{ColorStyle, NumericStyle};

    fn color_layer() -> Layer {
        CircleLayer::new(json!({"features": []}))
            .color(
                "pop",
                ColorStyle::new(
                    vec![(json!(0), "#eee".into()), (json!(100), "#111".into())],
                    "grey".into(),
                ),
            )
            .into()
    }

    #[test]
    fn test_color_legend_items() {
        let legend = Legend::new().title("Population");
        let context = legend_context(&legend, &[color_layer()]).unwrap();
        assert_eq!(context["title"], json!("Population"));
        assert_eq!(context["items"][0], json!({"label": "0", "color": "#eee"}));
        assert_eq!(context["items"][1]["color"], json!("#111"));
    }

    #[test]
    fn test_gradient_css_from_stops() {
        let legend = Legend::new().gradient(true);
        let context = legend_context(&legend, &[color_layer()]).unwrap();
        assert_eq!(
            context["gradient_css"],
            json!("linear-gradient(to right, #eee, #111)")
        );
    }

    #[test]
    fn test_radius_legend_items() {
        let layer: Layer = GraduatedCircleLayer::new(json!({"features": []}))
            .radius(
                "pop",
                NumericStyle::new(vec![(json!(0), 2.0), (json!(100), 12.0)], 2.0),
            )
            .into();
        let legend = Legend::new().function(LegendFunction::Radius);
        let context = legend_context(&legend, &[layer]).unwrap();
        assert_eq!(context["items"][1]["size"], json!(24.0));
    }

    #[test]
    fn test_numeric_precision_applied() {
        let legend = Legend::new().numeric_precision(1);
        let context = legend_context(&legend, &[color_layer()]).unwrap();
        assert_eq!(context["items"][0]["label"], json!("0.0"));
    }

    #[test]
    fn test_gradient_radius_rejected() {
        let legend = Legend::new()
            .gradient(true)
            .function(LegendFunction::Radius)
            .key_shape(LegendKeyShape::Circle);
        assert!(legend_context(&legend, &[]).is_err());
    }

    #[test]
    fn test_no_styled_layer_gives_empty_items() {
        let legend = Legend::new();
        let context = legend_context(&legend, &[]).unwrap();
        assert_eq!(context["items"], json!([]));
    }
}
