//! Morton (Z-order) bit interleaving of two 32-bit lanes into one 64-bit word.
//!
//! Both directions use the branchless "magic numbers" spreading: each round
//! moves half of the remaining bit groups and masks them into place.

/// Bits at even positions (0, 2, 4, ...). Holds the first lane.
pub const EVEN_LANE_MASK: u64 = 0x5555_5555_5555_5555;

/// Bits at odd positions (1, 3, 5, ...). Holds the second lane.
pub const ODD_LANE_MASK: u64 = 0xAAAA_AAAA_AAAA_AAAA;

const PAIR_MASK: u64 = 0x3333_3333_3333_3333;
const NIBBLE_MASK: u64 = 0x0F0F_0F0F_0F0F_0F0F;
const BYTE_MASK: u64 = 0x00FF_00FF_00FF_00FF;
const HALF_WORD_MASK: u64 = 0x0000_FFFF_0000_FFFF;
const WORD_MASK: u64 = 0x0000_0000_FFFF_FFFF;

#[inline]
fn spread(lane: u32) -> u64 {
    let mut v = u64::from(lane);
    v = (v | (v << 16)) & HALF_WORD_MASK;
    v = (v | (v << 8)) & BYTE_MASK;
    v = (v | (v << 4)) & NIBBLE_MASK;
    v = (v | (v << 2)) & PAIR_MASK;
    (v | (v << 1)) & EVEN_LANE_MASK
}

#[inline]
fn gather(mut v: u64) -> u32 {
    v &= EVEN_LANE_MASK;
    v = (v | (v >> 1)) & PAIR_MASK;
    v = (v | (v >> 2)) & NIBBLE_MASK;
    v = (v | (v >> 4)) & BYTE_MASK;
    v = (v | (v >> 8)) & HALF_WORD_MASK;
    v = (v | (v >> 16)) & WORD_MASK;
    v as u32
}

/// Interleaves two lanes: bit `i` of `x` lands on bit `2i`, bit `i` of `y`
/// on bit `2i + 1`.
///
/// # Examples
///
/// ```
/// use geocell::interleave::interleave;
///
/// assert_eq!(interleave(0b11, 0b00), 0b0101);
/// assert_eq!(interleave(0b00, 0b11), 0b1010);
/// assert_eq!(interleave(u32::MAX, u32::MAX), u64::MAX);
/// ```
#[inline]
pub fn interleave(x: u32, y: u32) -> u64 {
    spread(x) | (spread(y) << 1)
}

/// Inverse of [`interleave`]: even bits go to the first lane, odd bits to
/// the second.
#[inline]
pub fn deinterleave(v: u64) -> (u32, u32) {
    (gather(v), gather(v >> 1))
}
