//! # Some useful functions for simulating modem performance
//!
//! The [`random_bits`] function returns a given number of random bits; the [`error_count`]
//! function returns the number of errors in a sequence with respect to a reference sequence; the
//! [`compute_ber`] function turns that count into a bit error rate; and the [`erfc`] function
//! evaluates the complementary error function needed for theoretical error rates.
//!
//! # Examples
//!
//! The code below illustrates the usage of the functions in this module.
//! ```
//! use qpsk_ber::utils;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let bits = utils::random_bits(40, &mut rng)?;
//! let err_count = utils::error_count(&bits, &bits);
//! let ber = utils::compute_ber(&bits, &bits)?;
//! assert_eq!(err_count, 0);
//! assert_eq!(ber, 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use rand::Rng;

use crate::{common, Bit, BitSequence, Error};

/// Returns given number of random bits.
///
/// # Parameters
///
/// - `num_bits`: Number of random bits to be generated. Must be even and positive.
///
/// - `rng`: Random number generator to be used. Each bit is an independent draw with `Zero` and
///   `One` equally likely.
///
/// # Returns
///
/// - `bits`: Random bits.
///
/// # Errors
///
/// Returns an error if `num_bits` is `0` or odd.
pub fn random_bits<R: Rng + ?Sized>(num_bits: usize, rng: &mut R) -> Result<BitSequence, Error> {
    if num_bits == 0 {
        return Err(Error::InvalidParameter(
            "Number of bits must be positive".to_string(),
        ));
    }
    common::check_even_num_bits(num_bits)?;
    Ok(BitSequence(
        (0 .. num_bits)
            .map(|_| {
                if rng.random_bool(0.5) {
                    Bit::One
                } else {
                    Bit::Zero
                }
            })
            .collect(),
    ))
}

/// Returns number of errors in a sequence with respect to a reference sequence.
///
/// # Parameters
///
/// - `seq`: Sequence in which errors must be counted.
///
/// - `ref_seq`: Reference sequence to which the given sequence is compared.
///
/// # Returns
///
/// - `err_count`: Number of positions in which the two sequences differ. If they are of different
///   lengths, then the longer sequence is effectively truncated to the length of the shorter one.
pub fn error_count<T: PartialEq>(seq: &[T], ref_seq: &[T]) -> usize {
    ref_seq
        .iter()
        .zip(seq.iter())
        .filter(|&(x, y)| x != y)
        .count()
}

/// Returns bit error rate of received bits with respect to sent bits.
///
/// # Parameters
///
/// - `sent`: Bits that were transmitted.
///
/// - `received`: Bits recovered at the receiver.
///
/// # Returns
///
/// - `ber`: Fraction of positions in which the two sequences differ, in `[0, 1]`.
///
/// # Errors
///
/// Returns an error if the sequences differ in length, or if they are empty.
#[allow(clippy::cast_precision_loss)]
pub fn compute_ber(sent: &[Bit], received: &[Bit]) -> Result<f64, Error> {
    if sent.len() != received.len() {
        return Err(Error::LengthMismatch {
            sent: sent.len(),
            received: received.len(),
        });
    }
    if sent.is_empty() {
        return Err(Error::InvalidParameter(
            "Cannot compute bit error rate of empty sequences".to_string(),
        ));
    }
    Ok(error_count(received, sent) as f64 / sent.len() as f64)
}

/// Converts a ratio in decibels to linear scale.
#[must_use]
pub fn db_to_linear(db: f64) -> f64 {
    10f64.powf(0.1 * db)
}

/// Returns complementary error function `erfc(x) = 1 - erf(x)`.
///
/// Evaluated directly as `t * exp(-x^2 + P(t))` with `t = 1 / (1 + x/2)` and a Chebyshev-fitted
/// polynomial `P`, so the result keeps a fractional error below `1.2e-7` for all `x`, including
/// the far tail where `1 - erf(x)` would cancel to zero.
///
/// # Examples
///
/// ```
/// use qpsk_ber::utils::erfc;
///
/// assert!((erfc(0.0) - 1.0).abs() < 1e-7);
/// assert!(erfc(6.0) > 0.0);
/// ```
#[must_use]
#[allow(clippy::unreadable_literal)]
pub fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -1.26551223
        + t * (1.00002368
            + t * (0.37409196
                + t * (0.09678418
                    + t * (-0.18628806
                        + t * (0.27886807
                            + t * (-1.13520398
                                + t * (1.48851587 + t * (-0.82215223 + t * 0.17087277))))))));
    let tail = t * (-z * z + poly).exp();
    if x >= 0.0 {
        tail
    } else {
        2.0 - tail
    }
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use Bit::{One, Zero};

    #[test]
    fn test_random_bits() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_bits(0, &mut rng).is_err());
        assert!(random_bits(9999, &mut rng).is_err());
        let num_bits = 10000;
        let bits = random_bits(num_bits, &mut rng).unwrap();
        assert_eq!(bits.len(), num_bits);
        let num_zeros = bits.iter().filter(|&b| *b == Zero).count();
        let num_ones = bits.iter().filter(|&b| *b == One).count();
        assert!(num_zeros > 9 * num_bits / 20 && num_ones > 9 * num_bits / 20);
    }

    #[test]
    fn test_random_bits_seeded() {
        let bits1 = random_bits(100, &mut StdRng::seed_from_u64(11)).unwrap();
        let bits2 = random_bits(100, &mut StdRng::seed_from_u64(11)).unwrap();
        let bits3 = random_bits(100, &mut StdRng::seed_from_u64(12)).unwrap();
        assert_eq!(bits1, bits2);
        assert_ne!(bits1, bits3);
    }

    #[test]
    fn test_error_count() {
        assert_eq!(error_count(&[], &[One, Zero]), 0);
        assert_eq!(error_count(&[One, Zero], &[]), 0);
        let ref_seq = [One, Zero, Zero, One, One, One, Zero, Zero];
        let seq = [One, One, Zero, Zero, One, One, Zero, Zero];
        assert_eq!(error_count(&seq, &ref_seq), 2);
    }

    #[test]
    fn test_compute_ber() {
        assert!(matches!(
            compute_ber(&[One, Zero], &[One, Zero, One, One]),
            Err(Error::LengthMismatch {
                sent: 2,
                received: 4
            })
        ));
        assert!(matches!(
            compute_ber(&[], &[]),
            Err(Error::InvalidParameter(_))
        ));
        let sent = [One, Zero, Zero, One];
        assert_float_eq!(compute_ber(&sent, &sent).unwrap(), 0.0, abs <= 1e-12);
        assert_float_eq!(
            compute_ber(&sent, &[One, One, Zero, One]).unwrap(),
            0.25,
            abs <= 1e-12
        );
        assert_float_eq!(
            compute_ber(&sent, &[Zero, One, One, Zero]).unwrap(),
            1.0,
            abs <= 1e-12
        );
    }

    #[test]
    fn test_db_to_linear() {
        assert_float_eq!(db_to_linear(0.0), 1.0, abs <= 1e-12);
        assert_float_eq!(db_to_linear(10.0), 10.0, abs <= 1e-12);
        assert_float_eq!(db_to_linear(-3.0), 0.501_187_233_627_272_2, abs <= 1e-12);
    }

    #[test]
    fn test_erfc() {
        assert_float_eq!(erfc(0.0), 1.0, abs <= 1e-7);
        assert_float_eq!(erfc(0.5), 0.479_500_122_186_953_5, abs <= 1e-7);
        assert_float_eq!(erfc(1.0), 0.157_299_207_050_285_13, abs <= 1e-7);
        assert_float_eq!(erfc(-1.0), 1.842_700_792_949_715, abs <= 1e-7);
        assert_float_eq!(erfc(2.0), 4.677_734_981_047_266e-3, r2nd <= 1e-6);
        // Far tail, where `1 - erf(x)` would be zero
        assert_float_eq!(erfc(5.0), 1.537_459_794_428_034_8e-12, r2nd <= 1e-6);
        assert_float_eq!(erfc(8.0), 1.122_429_717_298_292_7e-29, r2nd <= 1e-6);
        assert_float_eq!(erfc(f64::INFINITY), 0.0, abs <= 1e-300);
    }
}
