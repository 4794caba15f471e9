//! Closed-form BER of Gray-coded QPSK over an AWGN channel
//!
//! Simulated results from [`channel`](crate::channel) follow this curve shifted by 3 dB, because
//! the channel noise level is set as `1 / (2 * Eb/N0)` per dimension on unit-energy symbols.

use crate::utils;

/// Returns theoretical BER of coherently detected, Gray-coded QPSK over an AWGN channel.
///
/// # Parameters
///
/// - `ebn0_db`: Ratio (dB) of bit energy to noise power spectral density.
///
/// # Returns
///
/// - `ber`: `0.5 * erfc(sqrt(Eb/N0))`, which lies in `[0, 0.5]` for all Eb/N0 and tends to `0`
///   as Eb/N0 grows.
///
/// # Examples
///
/// ```
/// use qpsk_ber::theory::theoretical_ber;
///
/// assert!((theoretical_ber(0.0) - 0.0786).abs() < 1e-4);
/// ```
#[must_use]
pub fn theoretical_ber(ebn0_db: f64) -> f64 {
    0.5 * utils::erfc(utils::db_to_linear(ebn0_db).sqrt())
}

/// Returns theoretical BER for each of the given Eb/N0 (dB) values, in the same order.
#[must_use]
pub fn theoretical_bers(all_ebn0_db: &[f64]) -> Vec<f64> {
    all_ebn0_db.iter().copied().map(theoretical_ber).collect()
}
