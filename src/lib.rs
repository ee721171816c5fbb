//! Fixed-precision geographic cell codes with Z-order bit interleaving.
//!
//! A longitude/latitude pair is mapped to two `step`-bit fixed-point cell
//! indices which are interleaved into one `u64`. Codes decode back into the
//! cell they denote, and the eight neighboring codes are computed directly
//! on the bits. At step 26 the codes are the 52-bit scores Redis stores for
//! its geo commands.
//!
//! ```rust
//! use geocell::{decode, encode, neighbors, MAX_RECOMMENDED_STEP};
//!
//! let code = encode(-86.1078998, 39.923422, MAX_RECOMMENDED_STEP)?;
//! assert_eq!(code.bits, 1782901374540128);
//!
//! let cell = decode(code)?;
//! assert!(cell.latitude.min <= 39.923422 && 39.923422 < cell.latitude.max);
//!
//! let around = neighbors(code)?;
//! assert_eq!(around.east.step, code.step);
//! # Ok::<(), geocell::GeocellError>(())
//! ```

pub mod builder;
pub mod codec;
pub mod config;
pub mod domain;
pub mod encoder;
pub mod error;
pub mod interleave;
pub mod neighbors;
pub mod point;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use builder::EncoderBuilder;
pub use codec::{decode, decode_to_centroid, encode};
pub use config::Config;
pub use encoder::GeoEncoder;
pub use error::{GeocellError, Result};
pub use neighbors::neighbors;
pub use point::GeoHashPoint;

pub use domain::{LAT_MAX, LAT_MIN, LON_MAX, LON_MIN, MAX_RECOMMENDED_STEP, MAX_STEP};

pub use geocell_types::{Code, CoordRange, Coordinate, Direction, NeighborSet, Rectangle};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, EncoderBuilder, GeoEncoder, GeoHashPoint, GeocellError, Result};

    pub use crate::{decode, decode_to_centroid, encode, neighbors};

    pub use crate::{Code, CoordRange, Coordinate, Direction, NeighborSet, Rectangle};

    pub use crate::MAX_RECOMMENDED_STEP;
}
