use serde::{Deserialize, Serialize};

/// Southernmost encodable latitude (EPSG:900913 / EPSG:3785 limit).
pub const LAT_MIN: f64 = -85.05112878;
/// Northernmost encodable latitude. The poles cannot be encoded.
pub const LAT_MAX: f64 = 85.05112878;
/// Westernmost encodable longitude.
pub const LON_MIN: f64 = -180.0;
/// Easternmost encodable longitude.
pub const LON_MAX: f64 = 180.0;

/// Largest step a code can carry: 32 bits per lane, 64 bits in total.
pub const MAX_STEP: u16 = 32;

/// Step used for WGS84-scale hashes (52 significant bits).
pub const MAX_RECOMMENDED_STEP: u16 = 26;

/// An inclusive scalar interval, used once per axis.
///
/// A range is only usable when `max > min` and both ends are finite. The
/// all-zero range is what an unset range looks like and is never valid.
///
/// # Examples
///
/// ```
/// use geocell_types::CoordRange;
///
/// let lon = CoordRange::WGS84_LONGITUDE;
/// assert_eq!(lon.span(), 360.0);
/// assert!(lon.contains(-74.0060));
/// assert!(!CoordRange::default().is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoordRange {
    pub min: f64,
    pub max: f64,
}

impl CoordRange {
    /// The fixed latitude domain.
    pub const WGS84_LATITUDE: CoordRange = CoordRange::new(LAT_MIN, LAT_MAX);

    /// The fixed longitude domain.
    pub const WGS84_LONGITUDE: CoordRange = CoordRange::new(LON_MIN, LON_MAX);

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Distance between the two bounds.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the interval.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// True when both ends are zero, i.e. the range was never set.
    pub fn is_zero(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }

    /// True when the range can be used for encoding or decoding.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }

    /// Inclusive containment. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
