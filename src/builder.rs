//! Builder for configured encoders.

use crate::config::Config;
use crate::domain::CoordRange;
use crate::encoder::GeoEncoder;
use crate::error::Result;

/// Builder for [`GeoEncoder`]. Starts from the WGS84 defaults.
#[derive(Debug, Clone, Default)]
pub struct EncoderBuilder {
    config: Config,
}

impl EncoderBuilder {
    /// Create a new builder with the default WGS84 configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the per-lane step. Checked in `build`.
    pub fn step(mut self, step: u16) -> Self {
        self.config.step = step;
        self
    }

    pub fn latitude_range(mut self, range: CoordRange) -> Self {
        self.config.latitude = range;
        self
    }

    pub fn longitude_range(mut self, range: CoordRange) -> Self {
        self.config.longitude = range;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and build the encoder.
    pub fn build(self) -> Result<GeoEncoder> {
        self.config.validate()?;
        log::debug!(
            "Built encoder: step {}, latitude [{}, {}], longitude [{}, {}]",
            self.config.step,
            self.config.latitude.min,
            self.config.latitude.max,
            self.config.longitude.min,
            self.config.longitude.max
        );
        Ok(GeoEncoder {
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeocellError;

    #[test]
    fn test_builder_default() {
        let encoder = EncoderBuilder::new().build().unwrap();
        assert_eq!(encoder, GeoEncoder::wgs84());
    }

    #[test]
    fn test_builder_rejects_bad_step() {
        let result = EncoderBuilder::new().step(33).build();
        assert!(matches!(result, Err(GeocellError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_rejects_zero_range() {
        let result = EncoderBuilder::new()
            .longitude_range(CoordRange::new(0.0, 0.0))
            .build();
        assert!(matches!(result, Err(GeocellError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_from_config() {
        let config = Config::with_step(10);
        let encoder = EncoderBuilder::new().config(config.clone()).build().unwrap();
        assert_eq!(encoder.config(), &config);
        assert_eq!(encoder.step(), 10);
    }
}
