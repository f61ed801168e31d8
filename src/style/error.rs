//! Style resolution errors.

use crate::color::ParseColorError;

/// Error returned when style resolution over a feature batch fails.
///
/// Resolution errors abort the whole batch rather than producing a
/// partial result; callers needing per-row tolerance must pre-filter
/// their feature collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A feature is missing the property a resolver was asked to read.
    MissingProperty { property: String },
    /// A feature is missing the join-key property of a data join.
    MissingJoinKey { property: String },
    /// A stop table or default carries a color string that cannot be
    /// normalized to RGB.
    InvalidColor(ParseColorError),
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::MissingProperty { property } => {
                write!(f, "feature is missing property '{}'", property)
            }
            StyleError::MissingJoinKey { property } => {
                write!(f, "feature is missing join-key property '{}'", property)
            }
            StyleError::InvalidColor(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StyleError::InvalidColor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseColorError> for StyleError {
    fn from(err: ParseColorError) -> Self {
        StyleError::InvalidColor(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_property_display() {
        let err = StyleError::MissingProperty {
            property: "pop".to_string(),
        };
        assert!(err.to_string().contains("pop"));
    }

    #[test]
    fn test_missing_join_key_display() {
        let err = StyleError::MissingJoinKey {
            property: "id".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("join-key"));
        assert!(msg.contains("id"));
    }

    #[test]
    fn test_invalid_color_wraps_parse_error() {
        let err: StyleError = "nope".parse::<crate::Rgb>().unwrap_err().into();
        assert!(err.to_string().contains("nope"));
    }
}
