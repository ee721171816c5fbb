//! The fixed coordinate domain every WGS84 encode and decode runs against.
//!
//! These are the EPSG:900913 / EPSG:3785 limits of Web Mercator: the poles
//! cannot be encoded.

pub use geocell_types::{
    CoordRange, LAT_MAX, LAT_MIN, LON_MAX, LON_MIN, MAX_RECOMMENDED_STEP, MAX_STEP,
};

/// Returns the `(longitude, latitude)` domain ranges.
pub fn coord_ranges() -> (CoordRange, CoordRange) {
    (CoordRange::WGS84_LONGITUDE, CoordRange::WGS84_LATITUDE)
}

/// True when the point lies inside the fixed domain. NaN never does.
pub fn in_domain(longitude: f64, latitude: f64) -> bool {
    (LON_MIN..=LON_MAX).contains(&longitude) && (LAT_MIN..=LAT_MAX).contains(&latitude)
}
