//! Types needed in multiple modules

use std::ops::Deref;

use num_complex::Complex64;

/// Enumeration of binary symbol values
#[derive(Clone, Eq, Hash, PartialEq, Debug, Copy)]
pub enum Bit {
    /// Binary symbol `0`
    Zero = 0,
    /// Binary symbol `1`
    One = 1,
}

/// Custom error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Invalid parameter error (bad bit count, empty SNR list, odd-length sequence, etc.)
    #[error("{0}")]
    InvalidParameter(String),
    /// Sent and received bit sequences of different lengths
    #[error("Sent sequence has {sent} bits, but received sequence has {received} bits")]
    LengthMismatch {
        /// Number of sent bits
        sent: usize,
        /// Number of received bits
        received: usize,
    },
    /// File read/write error
    #[error("{0}")]
    FileReadWriteError(#[from] std::io::Error),
    /// Serde read/write error
    #[error("{0}")]
    SerdeReadWriteError(#[from] serde_json::Error),
}

/// Sequence of bits of even length, so that it splits exactly into QPSK bit pairs
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct BitSequence(pub(crate) Vec<Bit>);

impl BitSequence {
    /// Returns bit sequence holding the given bits.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of bits is odd.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpsk_ber::{Bit, BitSequence};
    ///
    /// assert!(BitSequence::new(vec![Bit::One, Bit::Zero]).is_ok());
    /// assert!(BitSequence::new(vec![Bit::One]).is_err());
    /// ```
    pub fn new(bits: Vec<Bit>) -> Result<Self, Error> {
        check_even_num_bits(bits.len())?;
        Ok(Self(bits))
    }

    /// Returns the bits as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Bit] {
        &self.0
    }

    /// Returns the underlying vector of bits.
    #[must_use]
    pub fn into_inner(self) -> Vec<Bit> {
        self.0
    }
}

impl Deref for BitSequence {
    type Target = [Bit];

    fn deref(&self) -> &[Bit] {
        &self.0
    }
}

/// Sequence of complex baseband symbols
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SymbolSequence(pub(crate) Vec<Complex64>);

impl SymbolSequence {
    /// Returns the symbols as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.0
    }

    /// Returns the underlying vector of symbols.
    #[must_use]
    pub fn into_inner(self) -> Vec<Complex64> {
        self.0
    }
}

impl From<Vec<Complex64>> for SymbolSequence {
    fn from(symbols: Vec<Complex64>) -> Self {
        Self(symbols)
    }
}

impl Deref for SymbolSequence {
    type Target = [Complex64];

    fn deref(&self) -> &[Complex64] {
        &self.0
    }
}

/// Checks that a number of bits splits exactly into bit pairs.
pub(crate) fn check_even_num_bits(num_bits: usize) -> Result<(), Error> {
    if num_bits % 2 == 0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "Number of bits must be even (found {num_bits})"
        )))
    }
}
