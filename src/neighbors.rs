//! Adjacent cells computed directly on the interleaved bits.
//!
//! Moving a cell means adding or subtracting one in a single lane without
//! disturbing the other. Filling the other lane's positions with ones lets
//! an ordinary integer carry (or borrow) ripple through them; masking the
//! result back to the moved lane drops the filler again.
//!
//! Lane arithmetic is modulo `2^step`: stepping east off the last column
//! lands on the first one, and likewise for every other edge. Neighbors of
//! cells on the domain boundary therefore wrap instead of failing.

use crate::codec::validate_code;
use crate::error::Result;
use crate::interleave::{EVEN_LANE_MASK, ODD_LANE_MASK};
use geocell_types::{Code, Direction, NeighborSet};

/// Moves `bits` by one cell along the lane selected by `lane_mask`.
///
/// `step` must already be validated to lie in `1..=32`.
#[inline]
fn move_lane(bits: u64, step: u16, lane_mask: u64, other_mask: u64, direction: i8) -> u64 {
    if direction == 0 {
        return bits;
    }

    let shift = 64 - 2 * u32::from(step);
    let lane = bits & lane_mask;
    let other = bits & other_mask;
    let filler = other_mask >> shift;

    let moved = if direction > 0 {
        lane.wrapping_add(filler.wrapping_add(1))
    } else {
        (lane | filler).wrapping_sub(filler.wrapping_add(1))
    };

    (moved & (lane_mask >> shift)) | other
}

/// Moves a code east (`direction > 0`) or west (`direction < 0`) by one cell.
pub fn move_x(code: Code, direction: i8) -> Result<Code> {
    validate_code(&code)?;
    let bits = move_lane(code.bits, code.step, ODD_LANE_MASK, EVEN_LANE_MASK, direction);
    Ok(Code::new(bits, code.step))
}

/// Moves a code north (`direction > 0`) or south (`direction < 0`) by one cell.
pub fn move_y(code: Code, direction: i8) -> Result<Code> {
    validate_code(&code)?;
    let bits = move_lane(code.bits, code.step, EVEN_LANE_MASK, ODD_LANE_MASK, direction);
    Ok(Code::new(bits, code.step))
}

/// The code of the adjacent cell in `direction`.
pub fn neighbor(code: Code, direction: Direction) -> Result<Code> {
    validate_code(&code)?;
    Ok(step_toward(code, direction))
}

#[inline]
fn step_toward(code: Code, direction: Direction) -> Code {
    let (dx, dy) = direction.offsets();
    let bits = move_lane(code.bits, code.step, ODD_LANE_MASK, EVEN_LANE_MASK, dx);
    let bits = move_lane(bits, code.step, EVEN_LANE_MASK, ODD_LANE_MASK, dy);
    Code::new(bits, code.step)
}

/// Computes all eight neighbors of a code. Every neighbor keeps the source's
/// step.
///
/// # Examples
///
/// ```
/// use geocell::{encode, neighbors};
///
/// let code = encode(-86.1078998, 39.923422, 26)?;
/// let around = neighbors(code)?;
/// assert_eq!(around.east.bits, 1782901374540130);
/// assert_eq!(around.north.bits, 1782901374540129);
/// assert!(around.iter().all(|(_, c)| c.step == 26));
/// # Ok::<(), geocell::GeocellError>(())
/// ```
pub fn neighbors(code: Code) -> Result<NeighborSet> {
    validate_code(&code)?;
    log::trace!("Computing neighbors of {}", code);
    Ok(NeighborSet::from_fn(|direction| step_toward(code, direction)))
}
