//! Gray-coded QPSK modulator and minimum-distance demodulator

use itertools::Itertools;
use num_complex::Complex64;

use crate::{common, constellation, Bit, BitSequence, Error, SymbolSequence};

/// Returns QPSK symbols for given bits.
///
/// # Parameters
///
/// - `bits`: Bits to be modulated. Bits `2k` and `2k+1` form the pair mapped to symbol `k`.
///
/// # Returns
///
/// - `syms`: One constellation point per bit pair, in the order of the bit pairs.
///
/// # Errors
///
/// Returns an error if the number of bits is odd.
///
/// # Examples
///
/// ```
/// use qpsk_ber::{qpsk, Bit};
/// use Bit::{One, Zero};
///
/// let syms = qpsk::modulate(&[Zero, One, One, Zero])?;
/// assert_eq!(syms.len(), 2);
/// assert!(qpsk::modulate(&[Zero, One, One]).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn modulate(bits: &[Bit]) -> Result<SymbolSequence, Error> {
    common::check_even_num_bits(bits.len())?;
    Ok(SymbolSequence(
        bits.iter()
            .copied()
            .tuples()
            .map(|(b0, b1)| constellation::point_for_bits([b0, b1]))
            .collect(),
    ))
}

/// Returns bits recovered from given noisy QPSK symbols.
///
/// # Parameters
///
/// - `syms`: Noisy symbols. Each one is decided to the constellation point at minimum Euclidean
///   distance from it; if several points are equally close, the one with the lowest table index in
///   [`constellation::POINTS`] is chosen.
///
/// # Returns
///
/// - `bits_hat`: Bit pairs of the decided points, in symbol order, so that there are two bits per
///   symbol.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use qpsk_ber::{qpsk, Bit};
/// use Bit::{One, Zero};
///
/// let bits_hat = qpsk::demodulate(&[Complex64::new(-0.9, -0.2), Complex64::new(0.3, 1.1)]);
/// assert_eq!(bits_hat.as_slice(), [One, One, Zero, Zero]);
/// ```
#[must_use]
pub fn demodulate(syms: &[Complex64]) -> BitSequence {
    let mut bits_hat = Vec::with_capacity(constellation::BITS_PER_SYMBOL * syms.len());
    for &sym in syms {
        bits_hat.extend(constellation::BIT_PAIRS[nearest_point_index(sym)]);
    }
    BitSequence(bits_hat)
}

/// Returns table index of the constellation point nearest to the given symbol (lowest index on
/// ties).
fn nearest_point_index(sym: Complex64) -> usize {
    let mut best_index = 0;
    let mut best_dist = (sym - constellation::POINTS[0]).norm_sqr();
    for (index, &point) in constellation::POINTS.iter().enumerate().skip(1) {
        let dist = (sym - point).norm_sqr();
        if dist < best_dist {
            best_index = index;
            best_dist = dist;
        }
    }
    best_index
}
