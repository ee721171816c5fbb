//! A configured encoder bound to one step and one pair of axis domains.

use crate::builder::EncoderBuilder;
use crate::codec::{decode_with_ranges, encode_with_ranges};
use crate::config::Config;
use crate::error::Result;
use crate::neighbors;
use geocell_types::{Code, Coordinate, NeighborSet, Rectangle};

/// Encodes and decodes with the settings of a validated [`Config`].
///
/// # Examples
///
/// ```rust
/// use geocell::GeoEncoder;
///
/// let encoder = GeoEncoder::builder().step(26).build()?;
/// let code = encoder.encode(-86.1078998, 39.923422)?;
/// assert_eq!(code.bits, 1782901374540128);
///
/// let cell = encoder.decode(code)?;
/// assert!(cell.width() < 1e-5);
/// # Ok::<(), geocell::GeocellError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeoEncoder {
    pub(crate) config: Config,
}

impl GeoEncoder {
    /// Encoder over the fixed WGS84 domain at the recommended step.
    pub fn wgs84() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn builder() -> EncoderBuilder {
        EncoderBuilder::new()
    }

    pub fn from_config(config: Config) -> Result<Self> {
        EncoderBuilder::new().config(config).build()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn step(&self) -> u16 {
        self.config.step
    }

    /// Encodes at the configured step.
    pub fn encode(&self, longitude: f64, latitude: f64) -> Result<Code> {
        self.encode_with_step(longitude, latitude, self.config.step)
    }

    /// Encodes at an explicit step, keeping the configured domains.
    pub fn encode_with_step(&self, longitude: f64, latitude: f64, step: u16) -> Result<Code> {
        encode_with_ranges(
            &self.config.longitude,
            &self.config.latitude,
            longitude,
            latitude,
            step,
        )
    }

    pub fn encode_coordinate(&self, coord: &Coordinate) -> Result<Code> {
        self.encode(coord.longitude, coord.latitude)
    }

    /// Decodes a code at whatever step it carries.
    pub fn decode(&self, code: Code) -> Result<Rectangle> {
        decode_with_ranges(&self.config.longitude, &self.config.latitude, code)
    }

    pub fn decode_to_centroid(&self, code: Code) -> Result<Coordinate> {
        self.decode(code).map(|rect| rect.centroid())
    }

    pub fn neighbors(&self, code: Code) -> Result<NeighborSet> {
        neighbors::neighbors(code)
    }
}

impl Default for GeoEncoder {
    fn default() -> Self {
        Self::wgs84()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CoordRange;
    use crate::error::GeocellError;

    #[test]
    fn test_wgs84_matches_free_functions() {
        let encoder = GeoEncoder::wgs84();
        let code = encoder.encode(-74.0060, 40.7128).unwrap();
        assert_eq!(code, crate::encode(-74.0060, 40.7128, 26).unwrap());
        assert_eq!(encoder.decode(code).unwrap(), crate::decode(code).unwrap());
        assert_eq!(
            encoder.neighbors(code).unwrap(),
            crate::neighbors(code).unwrap()
        );
    }

    #[test]
    fn test_custom_domain() {
        let encoder = GeoEncoder::builder()
            .step(4)
            .longitude_range(CoordRange::new(0.0, 16.0))
            .latitude_range(CoordRange::new(0.0, 16.0))
            .build()
            .unwrap();

        let code = encoder.encode(5.5, 3.5).unwrap();
        let cell = encoder.decode(code).unwrap();
        assert_eq!(cell.longitude, CoordRange::new(5.0, 6.0));
        assert_eq!(cell.latitude, CoordRange::new(3.0, 4.0));
        assert_eq!(
            encoder.decode_to_centroid(code).unwrap(),
            Coordinate::new(5.5, 3.5)
        );
    }

    #[test]
    fn test_encode_with_step_override() {
        let encoder = GeoEncoder::wgs84();
        let coarse = encoder.encode_with_step(-74.0060, 40.7128, 8).unwrap();
        assert_eq!(coarse.step, 8);
        assert_eq!(
            encoder.encode_with_step(0.0, 0.0, 0),
            Err(GeocellError::InvalidStep(0))
        );
    }
}
