//! Encoding coordinates into cell codes and decoding codes back into cells.
//!
//! Encoding maps each coordinate to its offset within the axis range, scales
//! the offset to `2^step` fixed-point cells, truncates, and interleaves the
//! two lanes with latitude on the even bits. Decoding runs the same steps
//! backwards and yields the half-open cell the code denotes.

use crate::domain::{self, CoordRange, MAX_STEP};
use crate::error::{GeocellError, Result};
use crate::interleave::{deinterleave, interleave};
use geocell_types::{Code, Coordinate, Rectangle};

pub(crate) fn validate_step(step: u16) -> Result<()> {
    if step == 0 || step > MAX_STEP {
        log::debug!("Rejecting step {} outside 1..={}", step, MAX_STEP);
        return Err(GeocellError::InvalidStep(step));
    }
    Ok(())
}

pub(crate) fn validate_range(range: &CoordRange) -> Result<()> {
    if !range.is_valid() {
        log::debug!("Rejecting degenerate range [{}, {}]", range.min, range.max);
        return Err(GeocellError::InvalidDomain {
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

pub(crate) fn validate_code(code: &Code) -> Result<()> {
    if code.is_empty() {
        return Err(GeocellError::EmptyCode);
    }
    validate_step(code.step)?;
    if !code.is_canonical() {
        log::debug!("Rejecting non-canonical code {}", code);
        return Err(GeocellError::NonCanonicalCode {
            bits: code.bits,
            step: code.step,
        });
    }
    Ok(())
}

/// Number of cells per axis at `step`, as a float scale factor.
#[inline]
fn cells_per_axis(step: u16) -> f64 {
    (1u64 << step) as f64
}

/// Truncates a scaled offset to its fixed-point cell index.
///
/// An offset of exactly 1.0 (a point on the upper bound) would index one
/// past the last cell; it is clamped into the last cell.
#[inline]
fn to_fixed_point(offset: f64, step: u16) -> u32 {
    let last_cell = ((1u64 << step) - 1) as u32;
    ((offset * cells_per_axis(step)) as u32).min(last_cell)
}

/// Encodes a point against explicit axis ranges.
///
/// The point must lie inside the fixed WGS84 domain and inside both ranges.
///
/// # Examples
///
/// ```
/// use geocell::codec::encode_with_ranges;
/// use geocell::CoordRange;
///
/// let lon = CoordRange::new(0.0, 16.0);
/// let lat = CoordRange::new(0.0, 16.0);
/// let code = encode_with_ranges(&lon, &lat, 5.0, 3.0, 4)?;
/// // latitude cell 3 on the even bits, longitude cell 5 on the odd bits
/// assert_eq!(code.bits, 0b0010_0111);
/// # Ok::<(), geocell::GeocellError>(())
/// ```
pub fn encode_with_ranges(
    lon_range: &CoordRange,
    lat_range: &CoordRange,
    longitude: f64,
    latitude: f64,
    step: u16,
) -> Result<Code> {
    validate_step(step)?;
    validate_range(lat_range)?;
    validate_range(lon_range)?;

    if !longitude.is_finite() || !latitude.is_finite() {
        log::warn!("Rejecting encode of non-finite coordinates");
        return Err(GeocellError::CoordinateOutOfDomain {
            longitude,
            latitude,
        });
    }

    if !domain::in_domain(longitude, latitude)
        || !lat_range.contains(latitude)
        || !lon_range.contains(longitude)
    {
        log::debug!(
            "Rejecting out-of-domain coordinate ({}, {})",
            longitude,
            latitude
        );
        return Err(GeocellError::CoordinateOutOfDomain {
            longitude,
            latitude,
        });
    }

    let lat_offset = (latitude - lat_range.min) / lat_range.span();
    let lon_offset = (longitude - lon_range.min) / lon_range.span();

    let lat_fp = to_fixed_point(lat_offset, step);
    let lon_fp = to_fixed_point(lon_offset, step);

    Ok(Code::new(interleave(lat_fp, lon_fp), step))
}

/// Decodes a code against explicit axis ranges.
pub fn decode_with_ranges(
    lon_range: &CoordRange,
    lat_range: &CoordRange,
    code: Code,
) -> Result<Rectangle> {
    validate_code(&code)?;
    validate_range(lat_range)?;
    validate_range(lon_range)?;

    let (lat_fp, lon_fp) = deinterleave(code.bits);
    let cells = cells_per_axis(code.step);

    let axis = |range: &CoordRange, fp: u32| {
        let fp = f64::from(fp);
        CoordRange::new(
            range.min + (fp / cells) * range.span(),
            range.min + ((fp + 1.0) / cells) * range.span(),
        )
    };

    Ok(Rectangle::new(
        code,
        axis(lat_range, lat_fp),
        axis(lon_range, lon_fp),
    ))
}

/// Encodes a point on the fixed WGS84 domain.
///
/// # Examples
///
/// ```
/// use geocell::encode;
///
/// let code = encode(-86.1078998, 39.923422, 26)?;
/// assert_eq!(code.bits, 1782901374540128);
/// assert_eq!(code.step, 26);
///
/// // Latitude -86.1 is below the encodable domain
/// assert!(encode(39.923422, -86.1078998, 26).is_err());
/// # Ok::<(), geocell::GeocellError>(())
/// ```
pub fn encode(longitude: f64, latitude: f64, step: u16) -> Result<Code> {
    let (lon_range, lat_range) = domain::coord_ranges();
    encode_with_ranges(&lon_range, &lat_range, longitude, latitude, step)
}

/// Decodes a code on the fixed WGS84 domain into the cell it denotes.
pub fn decode(code: Code) -> Result<Rectangle> {
    let (lon_range, lat_range) = domain::coord_ranges();
    decode_with_ranges(&lon_range, &lat_range, code)
}

/// Decodes a code and returns the center of its cell.
///
/// # Examples
///
/// ```
/// use geocell::{decode_to_centroid, encode};
///
/// let code = encode(-74.0060, 40.7128, 26)?;
/// let center = decode_to_centroid(code)?;
/// assert!((center.longitude - -74.0060).abs() < 1e-5);
/// assert!((center.latitude - 40.7128).abs() < 1e-5);
/// # Ok::<(), geocell::GeocellError>(())
/// ```
pub fn decode_to_centroid(code: Code) -> Result<Coordinate> {
    decode(code).map(|rect| rect.centroid())
}

/// Splits a code into its `(latitude, longitude)` fixed-point cell indices.
pub fn lanes(code: Code) -> (u32, u32) {
    deinterleave(code.bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LAT_MAX, LAT_MIN, LON_MAX, LON_MIN};

    const INDIANAPOLIS: (f64, f64) = (-86.1078998, 39.923422);

    #[test]
    fn test_known_vector() {
        let code = encode(INDIANAPOLIS.0, INDIANAPOLIS.1, 26).unwrap();
        assert_eq!(code, Code::new(1782901374540128, 26));
    }

    #[test]
    fn test_swapped_coordinates_rejected() {
        let result = encode(INDIANAPOLIS.1, INDIANAPOLIS.0, 26);
        assert!(matches!(
            result,
            Err(GeocellError::CoordinateOutOfDomain { .. })
        ));
    }

    #[test]
    fn test_invalid_steps() {
        assert_eq!(encode(0.0, 0.0, 0), Err(GeocellError::InvalidStep(0)));
        assert_eq!(encode(0.0, 0.0, 33), Err(GeocellError::InvalidStep(33)));
        assert!(encode(0.0, 0.0, 32).is_ok());
        assert!(encode(0.0, 0.0, 1).is_ok());
    }

    #[test]
    fn test_degenerate_ranges_rejected() {
        let zero = CoordRange::default();
        let (lon, lat) = domain::coord_ranges();
        assert!(matches!(
            encode_with_ranges(&lon, &zero, 0.0, 0.0, 10),
            Err(GeocellError::InvalidDomain { .. })
        ));
        assert!(matches!(
            encode_with_ranges(&CoordRange::new(10.0, -10.0), &lat, 0.0, 0.0, 10),
            Err(GeocellError::InvalidDomain { .. })
        ));
        assert!(matches!(
            decode_with_ranges(&lon, &zero, Code::new(0, 10)),
            Err(GeocellError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn test_coordinate_outside_custom_range() {
        let lon = CoordRange::new(0.0, 10.0);
        let lat = CoordRange::new(0.0, 10.0);
        assert!(matches!(
            encode_with_ranges(&lon, &lat, -1.0, 5.0, 8),
            Err(GeocellError::CoordinateOutOfDomain { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            encode(f64::NAN, 0.0, 10),
            Err(GeocellError::CoordinateOutOfDomain { .. })
        ));
        assert!(matches!(
            encode(0.0, f64::INFINITY, 10),
            Err(GeocellError::CoordinateOutOfDomain { .. })
        ));
    }

    #[test]
    fn test_step_one_quadrants() {
        assert_eq!(encode(-90.0, -45.0, 1).unwrap().bits, 0b00);
        assert_eq!(encode(-90.0, 45.0, 1).unwrap().bits, 0b01);
        assert_eq!(encode(90.0, -45.0, 1).unwrap().bits, 0b10);
        assert_eq!(encode(90.0, 45.0, 1).unwrap().bits, 0b11);
        // The origin falls on the lower edge of the upper cells
        assert_eq!(encode(0.0, 0.0, 1).unwrap().bits, 0b11);
    }

    #[test]
    fn test_domain_corners() {
        assert_eq!(encode(LON_MIN, LAT_MIN, 26).unwrap().bits, 0);
        let top = encode(LON_MAX, LAT_MAX, 26).unwrap();
        assert!(top.is_canonical());
        assert_eq!(top.bits, (1u64 << 52) - 1);
        assert_eq!(encode(LON_MAX, LAT_MAX, 32).unwrap().bits, u64::MAX);
    }

    #[test]
    fn test_decode_known_cell() {
        let code = Code::new(1782901374540128, 26);
        let cell = decode(code).unwrap();
        assert_eq!(cell.code, code);
        assert!(cell.latitude.min <= INDIANAPOLIS.1 && INDIANAPOLIS.1 < cell.latitude.max);
        assert!(cell.longitude.min <= INDIANAPOLIS.0 && INDIANAPOLIS.0 < cell.longitude.max);
    }

    #[test]
    fn test_decode_step_one() {
        let cell = decode(Code::new(0b10, 1)).unwrap();
        assert_eq!(cell.latitude.min, LAT_MIN);
        assert_eq!(cell.latitude.max, 0.0);
        assert_eq!(cell.longitude.min, 0.0);
        assert_eq!(cell.longitude.max, LON_MAX);
    }

    #[test]
    fn test_decode_rejects_bad_codes() {
        assert_eq!(decode(Code::new(0, 0)), Err(GeocellError::EmptyCode));
        assert_eq!(decode(Code::new(5, 0)), Err(GeocellError::EmptyCode));
        assert_eq!(decode(Code::new(0, 40)), Err(GeocellError::InvalidStep(40)));
        assert_eq!(
            decode(Code::new(0b100, 1)),
            Err(GeocellError::NonCanonicalCode { bits: 0b100, step: 1 })
        );
    }

    #[test]
    fn test_cell_size_matches_step() {
        for step in [1u16, 5, 13, 26, 32] {
            let cell = decode(encode(12.5, -33.9, step).unwrap()).unwrap();
            let cells = (1u64 << step) as f64;
            assert!((cell.width() - 360.0 / cells).abs() < 1e-9);
            assert!((cell.height() - (LAT_MAX - LAT_MIN) / cells).abs() < 1e-9);
        }
    }

    #[test]
    fn test_lanes_split() {
        let code = encode(INDIANAPOLIS.0, INDIANAPOLIS.1, 26).unwrap();
        assert_eq!(lanes(code), (49305048, 17502756));
    }
}
