//! A coordinate pair bundled with its hash at the recommended step.

use crate::codec::encode;
use crate::domain::MAX_RECOMMENDED_STEP;
use crate::error::Result;
use geo::Point;
use geocell_types::{Code, Coordinate};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair and its 52-bit hash.
///
/// The hash is computed once at construction with [`MAX_RECOMMENDED_STEP`],
/// so it is directly comparable with scores stored by Redis geo commands.
///
/// # Examples
///
/// ```
/// use geocell::GeoHashPoint;
///
/// let point = GeoHashPoint::new(39.923422, -86.1078998)?;
/// assert_eq!(point.hash(), 1782901374540128);
/// assert_eq!(point.latitude(), 39.923422);
/// # Ok::<(), geocell::GeocellError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoHashPoint {
    coordinate: Coordinate,
    code: Code,
}

impl GeoHashPoint {
    /// Hashes a point given latitude first.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Self::from_coordinate(Coordinate::new(longitude, latitude))
    }

    pub fn from_coordinate(coordinate: Coordinate) -> Result<Self> {
        let code = encode(coordinate.longitude, coordinate.latitude, MAX_RECOMMENDED_STEP)?;
        Ok(Self { coordinate, code })
    }

    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }

    pub fn hash(&self) -> u64 {
        self.code.bits
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl TryFrom<Point<f64>> for GeoHashPoint {
    type Error = crate::error::GeocellError;

    fn try_from(point: Point<f64>) -> Result<Self> {
        Self::from_coordinate(point.into())
    }
}
