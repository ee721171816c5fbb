//! Encoder configuration.
//!
//! The configuration is plain serializable data so it can be loaded from
//! JSON or, with the `toml` feature, TOML.

use crate::domain::{CoordRange, MAX_RECOMMENDED_STEP, MAX_STEP};
use crate::error::{GeocellError, Result};
use serde::{Deserialize, Serialize};

/// Step and axis domains used by a [`GeoEncoder`](crate::GeoEncoder).
///
/// # Example
///
/// ```rust
/// use geocell::Config;
///
/// let config = Config::default();
/// assert_eq!(config.step, 26);
///
/// // Missing fields fall back to the WGS84 defaults
/// let config = Config::from_json(r#"{ "step": 12 }"#)?;
/// assert_eq!(config.step, 12);
/// assert_eq!(config.longitude.max, 180.0);
/// # Ok::<(), geocell::GeocellError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Bits per lane (1-32, default: 26)
    #[serde(default = "Config::default_step")]
    pub step: u16,

    /// Latitude domain (default: the Web Mercator limits)
    #[serde(default = "Config::default_latitude")]
    pub latitude: CoordRange,

    /// Longitude domain (default: -180 to 180)
    #[serde(default = "Config::default_longitude")]
    pub longitude: CoordRange,
}

impl Config {
    const fn default_step() -> u16 {
        MAX_RECOMMENDED_STEP
    }

    const fn default_latitude() -> CoordRange {
        CoordRange::WGS84_LATITUDE
    }

    const fn default_longitude() -> CoordRange {
        CoordRange::WGS84_LONGITUDE
    }

    pub fn with_step(step: u16) -> Self {
        assert!(
            (1..=MAX_STEP).contains(&step),
            "Step must be between 1 and 32"
        );

        Self {
            step,
            ..Self::default()
        }
    }

    pub fn with_latitude(mut self, range: CoordRange) -> Self {
        self.latitude = range;
        self
    }

    pub fn with_longitude(mut self, range: CoordRange) -> Self {
        self.longitude = range;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 || self.step > MAX_STEP {
            return Err(GeocellError::InvalidConfig(format!(
                "step must be between 1 and 32, got {}",
                self.step
            )));
        }

        if !self.latitude.is_valid() {
            return Err(GeocellError::InvalidConfig(format!(
                "latitude range [{}, {}] is degenerate",
                self.latitude.min, self.latitude.max
            )));
        }

        if !self.longitude.is_valid() {
            return Err(GeocellError::InvalidConfig(format!(
                "longitude range [{}, {}] is degenerate",
                self.longitude.min, self.longitude.max
            )));
        }

        if self.step > MAX_RECOMMENDED_STEP {
            log::warn!(
                "Step {} exceeds the recommended maximum of {}",
                self.step,
                MAX_RECOMMENDED_STEP
            );
        }

        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: Self::default_step(),
            latitude: Self::default_latitude(),
            longitude: Self::default_longitude(),
        }
    }
}
