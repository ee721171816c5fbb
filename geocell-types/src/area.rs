use crate::code::Code;
use crate::range::CoordRange;
use geo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A geographic point in degrees.
///
/// The constructor takes longitude first, matching `geo::Point::new(x, y)`
/// and the argument order of `encode`.
///
/// # Examples
///
/// ```
/// use geocell_types::Coordinate;
/// use geo::Point;
///
/// let nyc = Coordinate::new(-74.0060, 40.7128);
/// let point: Point = nyc.into();
/// assert_eq!(point.x(), -74.0060);
/// assert_eq!(point.y(), 40.7128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coord: Coordinate) -> Self {
        Point::new(coord.longitude, coord.latitude)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Coordinate::new(point.x(), point.y())
    }
}

/// The cell a code denotes: one latitude and one longitude interval plus the
/// code they were decoded from.
///
/// Each side is `domain span / 2^step` wide. Decoded cells are half-open
/// (`[min, max)`); `contains` is inclusive on both ends so that points on the
/// upper edge of the domain still test as inside their clamped cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub code: Code,
    pub latitude: CoordRange,
    pub longitude: CoordRange,
}

impl Rectangle {
    pub const fn new(code: Code, latitude: CoordRange, longitude: CoordRange) -> Self {
        Self {
            code,
            latitude,
            longitude,
        }
    }

    /// Midpoint of the cell on both axes.
    pub fn centroid(&self) -> Coordinate {
        Coordinate::new(self.longitude.midpoint(), self.latitude.midpoint())
    }

    /// Inclusive containment test.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.latitude.contains(coord.latitude) && self.longitude.contains(coord.longitude)
    }

    /// Cell height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.latitude.span()
    }

    /// Cell width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.longitude.span()
    }

    /// The cell as a `geo::Rect` with longitude on x and latitude on y.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            geo::coord! { x: self.longitude.min, y: self.latitude.min },
            geo::coord! { x: self.longitude.max, y: self.latitude.max },
        )
    }
}

impl From<Rectangle> for Rect<f64> {
    fn from(rect: Rectangle) -> Self {
        rect.to_rect()
    }
}
