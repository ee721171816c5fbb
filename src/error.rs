//! Error types for encoding, decoding and configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeocellError>;

/// Every failure the engine reports.
///
/// All variants are deterministic: the same inputs always fail the same way,
/// so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocellError {
    /// Step outside `1..=32`.
    #[error("invalid step {0}: must be between 1 and 32")]
    InvalidStep(u16),

    /// A coordinate range that is zero, inverted, empty or non-finite.
    #[error("invalid coordinate domain [{min}, {max}]")]
    InvalidDomain { min: f64, max: f64 },

    /// Longitude or latitude outside the encodable domain.
    #[error("coordinate out of domain: longitude {longitude}, latitude {latitude}")]
    CoordinateOutOfDomain { longitude: f64, latitude: f64 },

    /// A `step == 0` code was passed where a cell is required.
    #[error("empty code")]
    EmptyCode,

    /// Bits are set above the `2 * step` window.
    #[error("code {bits} has bits above its {step}-step window")]
    NonCanonicalCode { bits: u64, step: u16 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GeocellError {
    fn from(err: serde_json::Error) -> Self {
        GeocellError::Serialization(err.to_string())
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for GeocellError {
    fn from(err: toml::de::Error) -> Self {
        GeocellError::Serialization(err.to_string())
    }
}

#[cfg(feature = "toml")]
impl From<toml::ser::Error> for GeocellError {
    fn from(err: toml::ser::Error) -> Self {
        GeocellError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GeocellError::InvalidStep(33).to_string(),
            "invalid step 33: must be between 1 and 32"
        );
        assert_eq!(GeocellError::EmptyCode.to_string(), "empty code");
        let err = GeocellError::CoordinateOutOfDomain {
            longitude: 39.9,
            latitude: -86.1,
        };
        assert!(err.to_string().contains("latitude -86.1"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: GeocellError = serde_json::from_str::<u64>("not json").unwrap_err().into();
        assert!(matches!(err, GeocellError::Serialization(_)));
    }
}
