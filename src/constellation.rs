//! Gray-coded QPSK constellation
//!
//! The four constellation points are the corners of a square centered at the origin, scaled by
//! `1/sqrt(2)` so that the average symbol energy is `1`. Points that are adjacent on the square
//! differ in exactly one bit.
//!
//! | Index | Bits | Point |
//! |-------|------|-------|
//! | 0 | `00` | `( 1 + 1j) / sqrt(2)` |
//! | 1 | `01` | `(-1 + 1j) / sqrt(2)` |
//! | 2 | `11` | `(-1 - 1j) / sqrt(2)` |
//! | 3 | `10` | `( 1 - 1j) / sqrt(2)` |

use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex64;

use crate::Bit;
use Bit::{One, Zero};

/// Number of points in the constellation
pub const NUM_POINTS: usize = 4;

/// Number of bits carried by each constellation point
pub const BITS_PER_SYMBOL: usize = 2;

/// Constellation points, in table order
pub const POINTS: [Complex64; NUM_POINTS] = [
    Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Complex64::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Complex64::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    Complex64::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

/// Bit pairs carried by the constellation points, in table order
pub const BIT_PAIRS: [[Bit; BITS_PER_SYMBOL]; NUM_POINTS] =
    [[Zero, Zero], [Zero, One], [One, One], [One, Zero]];

/// Returns table index of the constellation point carrying the given bit pair.
#[must_use]
pub fn index_for_bits(bits: [Bit; BITS_PER_SYMBOL]) -> usize {
    match bits {
        [Zero, Zero] => 0,
        [Zero, One] => 1,
        [One, One] => 2,
        [One, Zero] => 3,
    }
}

/// Returns constellation point carrying the given bit pair.
///
/// # Examples
///
/// ```
/// use qpsk_ber::{constellation, Bit};
///
/// let point = constellation::point_for_bits([Bit::Zero, Bit::Zero]);
/// assert!(point.re > 0.0 && point.im > 0.0);
/// ```
#[must_use]
pub fn point_for_bits(bits: [Bit; BITS_PER_SYMBOL]) -> Complex64 {
    POINTS[index_for_bits(bits)]
}

/// Returns bit pair carried by the constellation point with the given table index, or `None` if
/// the index is out of range.
#[must_use]
pub fn bits_for_index(index: usize) -> Option<[Bit; BITS_PER_SYMBOL]> {
    BIT_PAIRS.get(index).copied()
}

/// Returns bit pair carried by the given constellation point, or `None` if the point is not in the
/// constellation (exact comparison).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn bits_for_point(point: Complex64) -> Option<[Bit; BITS_PER_SYMBOL]> {
    POINTS
        .iter()
        .position(|&p| p == point)
        .and_then(bits_for_index)
}
