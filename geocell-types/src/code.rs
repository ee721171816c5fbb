use crate::range::MAX_STEP;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-precision cell code.
///
/// `bits` holds two interleaved lanes of `step` bits each: latitude in the
/// even bit positions, longitude in the odd ones. Only the low `2 * step`
/// bits are significant and everything above them is zero. A code with
/// `step == 0` is the empty code and denotes no cell.
///
/// The 64-bit layout of `bits` is the storage contract; it matches hashes
/// produced by Redis' `GEOADD` at step 26.
///
/// # Examples
///
/// ```
/// use geocell_types::Code;
///
/// let code = Code::new(1782901374540128, 26);
/// assert!(code.is_canonical());
/// assert_eq!(code.precision_bits(), 52);
/// assert!(Code::default().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Code {
    pub bits: u64,
    pub step: u16,
}

impl Code {
    pub const fn new(bits: u64, step: u16) -> Self {
        Self { bits, step }
    }

    /// True for the `step == 0` code.
    pub fn is_empty(&self) -> bool {
        self.step == 0
    }

    /// Number of significant bits (`2 * step`).
    pub fn precision_bits(&self) -> u32 {
        2 * u32::from(self.step)
    }

    /// Mask covering the significant bits of a code with this step.
    ///
    /// Steps above [`MAX_STEP`] have no window and yield zero.
    pub fn window_mask(&self) -> u64 {
        match self.step {
            0 => 0,
            MAX_STEP => u64::MAX,
            s if s < MAX_STEP => (1u64 << (2 * s)) - 1,
            _ => 0,
        }
    }

    /// True when the step is in `1..=32` and no bit is set above `2 * step`.
    pub fn is_canonical(&self) -> bool {
        (1..=MAX_STEP).contains(&self.step) && self.bits & !self.window_mask() == 0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.bits, self.step)
    }
}
