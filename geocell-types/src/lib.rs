//! # geocell-types
//!
//! Value types for fixed-precision, bit-interleaved geographic cell codes.
//!
//! This crate provides the plain data the `geocell` engine produces and consumes:
//!
//! - **Codes**: `Code`, an interleaved 64-bit cell code with its per-axis step
//! - **Domains**: `CoordRange` and the fixed WGS84 / Web Mercator bounds
//! - **Cells**: `Rectangle` (a decoded cell) and `Coordinate` (a point)
//! - **Adjacency**: `NeighborSet` and `Direction`
//!
//! All types are small `Copy` values, serializable with Serde, and convert
//! into the `geo` crate's primitives where one exists.
//!
//! ## Examples
//!
//! ```rust
//! use geocell_types::{Code, Coordinate, CoordRange, Rectangle};
//!
//! let cell = Rectangle::new(
//!     Code::new(0b11, 1),
//!     CoordRange::new(0.0, 85.05112878),
//!     CoordRange::new(0.0, 180.0),
//! );
//! assert!(cell.contains(&Coordinate::new(90.0, 45.0)));
//! ```

pub mod area;
pub mod code;
pub mod neighbors;
pub mod range;

pub use area::{Coordinate, Rectangle};
pub use code::Code;
pub use neighbors::{Direction, NeighborSet};
pub use range::{
    CoordRange, LAT_MAX, LAT_MIN, LON_MAX, LON_MIN, MAX_RECOMMENDED_STEP, MAX_STEP,
};
