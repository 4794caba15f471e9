//! AWGN channel for unit-energy QPSK symbols
//!
//! The noise standard deviation per real dimension is `sqrt(1 / (2 * Eb/N0))`, which assumes an
//! average symbol energy of `1` and `2` information bits per symbol. A constellation with a
//! different energy or number of bits per symbol needs a different scaling.
//!
//! With unit-energy QPSK symbols this noise level gives a per-bit error probability of
//! `0.5 * erfc(sqrt(Eb/N0 / 2))`, so simulated BER curves sit 3 dB to the right of
//! [`theoretical_ber`](crate::theory::theoretical_ber).

use num_complex::Complex64;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::{utils, Error, SymbolSequence};

/// AWGN channel with a fixed Eb/N0
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AwgnChannel {
    /// Ratio (dB) of bit energy to noise power spectral density
    ebn0_db: f64,
    /// Standard deviation of the noise in each of the real and imaginary parts
    noise_std_dev: f64,
}

impl AwgnChannel {
    /// Returns AWGN channel for a given Eb/N0.
    ///
    /// # Parameters
    ///
    /// - `ebn0_db`: Ratio (dB) of bit energy to noise power spectral density. The value
    ///   `f64::INFINITY` gives a noiseless channel.
    ///
    /// # Errors
    ///
    /// Returns an error if `ebn0_db` is NaN or negative infinity.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpsk_ber::channel::AwgnChannel;
    ///
    /// let channel = AwgnChannel::new(3.0)?;
    /// assert!(channel.noise_std_dev() > 0.0);
    /// assert!(AwgnChannel::new(f64::NAN).is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(ebn0_db: f64) -> Result<Self, Error> {
        if ebn0_db.is_nan() || (ebn0_db.is_infinite() && ebn0_db < 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Eb/N0 must be a number or +inf dB (found {ebn0_db})"
            )));
        }
        Ok(Self {
            ebn0_db,
            noise_std_dev: noise_std_dev(ebn0_db),
        })
    }

    /// Returns noiseless channel.
    #[must_use]
    pub fn noiseless() -> Self {
        Self {
            ebn0_db: f64::INFINITY,
            noise_std_dev: 0.0,
        }
    }

    /// Returns Eb/N0 (dB) of the channel.
    #[must_use]
    pub fn ebn0_db(&self) -> f64 {
        self.ebn0_db
    }

    /// Returns noise standard deviation per real dimension.
    #[must_use]
    pub fn noise_std_dev(&self) -> f64 {
        self.noise_std_dev
    }

    /// Returns channel output for given input symbols.
    ///
    /// Each output symbol is the input symbol plus a complex noise sample whose real and imaginary
    /// parts are independent zero-mean Gaussians with standard deviation
    /// [`noise_std_dev`](Self::noise_std_dev). The input is left untouched.
    pub fn apply<R: Rng + ?Sized>(&self, syms: &[Complex64], rng: &mut R) -> SymbolSequence {
        SymbolSequence(
            syms.iter()
                .map(|&x| {
                    let noise = Complex64::new(
                        rng.sample::<f64, _>(StandardNormal),
                        rng.sample::<f64, _>(StandardNormal),
                    );
                    x + noise * self.noise_std_dev
                })
                .collect(),
        )
    }
}

/// Returns noise standard deviation per real dimension for a given Eb/N0 (dB).
#[must_use]
pub fn noise_std_dev(ebn0_db: f64) -> f64 {
    (0.5 / utils::db_to_linear(ebn0_db)).sqrt()
}

/// Returns AWGN channel output for given input symbols.
///
/// # Parameters
///
/// - `syms`: Symbols to be transmitted over the channel.
///
/// - `ebn0_db`: Ratio (dB) of bit energy to noise power spectral density.
///
/// - `rng`: Random number generator to be used.
///
/// # Returns
///
/// - `syms_noisy`: New sequence of the same length as `syms`, with noise added to each symbol.
///
/// # Errors
///
/// Returns an error if `ebn0_db` is NaN or negative infinity.
///
/// # Examples
///
/// ```
/// use qpsk_ber::{channel, qpsk, Bit};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let syms = qpsk::modulate(&[Bit::Zero, Bit::One])?;
/// let syms_noisy = channel::apply_noise(&syms, 6.0, &mut rng)?;
/// assert_eq!(syms_noisy.len(), syms.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn apply_noise<R: Rng + ?Sized>(
    syms: &[Complex64],
    ebn0_db: f64,
    rng: &mut R,
) -> Result<SymbolSequence, Error> {
    Ok(AwgnChannel::new(ebn0_db)?.apply(syms, rng))
}
