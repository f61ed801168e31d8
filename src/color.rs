//! CSS color parsing and RGB interpolation.
//!
//! Stop tables carry colors as strings (`"red"`, `"#1e90ff"`,
//! `"rgb(30,144,255)"`). Before two colors can be interpolated they are
//! normalized to an [`Rgb`] triple; the interpolated result is rendered
//! back as an `rgb(r,g,b)` string for the browser renderer.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// An opaque sRGB color with 8-bit components.
///
/// # Example
///
/// ```rust
/// use cartogl::Rgb;
///
/// let navy: Rgb = "navy".parse().unwrap();
/// assert_eq!(navy, Rgb::new(0, 0, 128));
/// assert_eq!(navy.to_css(), "rgb(0,0,128)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Creates a color from three components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// Each component is interpolated independently. A fraction of `0.0`
    /// returns `self` exactly and `1.0` returns `other` exactly; values
    /// outside `[0, 1]` are clamped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cartogl::Rgb;
    ///
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// assert_eq!(black.lerp(white, 0.0), black);
    /// assert_eq!(black.lerp(white, 1.0), white);
    /// ```
    pub fn lerp(self, other: Rgb, fraction: f64) -> Rgb {
        let t = fraction.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round() as u8
        };
        Rgb::new(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
        )
    }

    /// Renders the color as a CSS `rgb(r,g,b)` string.
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// Error returned when a color string cannot be normalized to RGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    /// The string that failed to parse.
    pub value: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized color '{}'", self.value)
    }
}

impl std::error::Error for ParseColorError {}

/// Named CSS colors accepted in stop tables.
///
/// Covers the CSS basic color keywords plus the handful of extended
/// names that show up in real stop tables (grey, orange, pink, brown).
static NAMED_COLORS: Lazy<HashMap<&'static str, Rgb>> = Lazy::new(|| {
    HashMap::from([
        ("black", Rgb::new(0, 0, 0)),
        ("silver", Rgb::new(192, 192, 192)),
        ("gray", Rgb::new(128, 128, 128)),
        ("grey", Rgb::new(128, 128, 128)),
        ("white", Rgb::new(255, 255, 255)),
        ("maroon", Rgb::new(128, 0, 0)),
        ("red", Rgb::new(255, 0, 0)),
        ("purple", Rgb::new(128, 0, 128)),
        ("fuchsia", Rgb::new(255, 0, 255)),
        ("magenta", Rgb::new(255, 0, 255)),
        ("green", Rgb::new(0, 128, 0)),
        ("lime", Rgb::new(0, 255, 0)),
        ("olive", Rgb::new(128, 128, 0)),
        ("yellow", Rgb::new(255, 255, 0)),
        ("navy", Rgb::new(0, 0, 128)),
        ("blue", Rgb::new(0, 0, 255)),
        ("teal", Rgb::new(0, 128, 128)),
        ("aqua", Rgb::new(0, 255, 255)),
        ("cyan", Rgb::new(0, 255, 255)),
        ("orange", Rgb::new(255, 165, 0)),
        ("brown", Rgb::new(165, 42, 42)),
        ("pink", Rgb::new(255, 192, 203)),
    ])
});

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parses `#rgb`, `#rrggbb`, `rgb(r,g,b)`, `rgba(r,g,b,a)` (alpha is
    /// discarded), and named CSS colors. Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        if let Some(color) = NAMED_COLORS.get(lower.as_str()) {
            return Ok(*color);
        }
        if let Some(hex) = lower.strip_prefix('#') {
            if let Some(color) = parse_hex(hex) {
                return Ok(color);
            }
        }
        for prefix in ["rgb(", "rgba("] {
            if let Some(body) = lower.strip_prefix(prefix) {
                if let Some(color) = body.strip_suffix(')').and_then(parse_components) {
                    return Ok(color);
                }
            }
        }

        Err(ParseColorError {
            value: trimmed.to_string(),
        })
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    match hex.len() {
        // Shorthand notation: each digit doubles (#1af -> #11aaff).
        3 => {
            let mut parts = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let digit = c.to_digit(16)? as u8;
                parts[i] = digit * 16 + digit;
            }
            Some(Rgb::new(parts[0], parts[1], parts[2]))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

fn parse_components(body: &str) -> Option<Rgb> {
    let mut parts = body.split(',').map(str::trim);
    let r = parts.next()?.parse::<u8>().ok()?;
    let g = parts.next()?.parse::<u8>().ok()?;
    let b = parts.next()?.parse::<u8>().ok()?;
    // An rgba() alpha component may follow; anything further is malformed.
    match (parts.next(), parts.next()) {
        (_, Some(_)) => None,
        (alpha, None) => {
            if let Some(alpha) = alpha {
                alpha.parse::<f64>().ok()?;
            }
            Some(Rgb::new(r, g, b))
        }
    }
}
