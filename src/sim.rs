//! Simulator to evaluate BER performance of Gray-coded QPSK over AWGN channel
//!
//! One random bit sequence is generated per run and transmitted at every Eb/N0 value, so that the
//! channel noise is the only thing that changes from one Eb/N0 value to the next. Each Eb/N0 value
//! gets its own noise stream, seeded from the master random number generator in Eb/N0 order, which
//! makes sequential and parallel runs with the same seed give identical results.

use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{channel, qpsk, theory, utils, BitSequence, Error, SymbolSequence};

/// Default number of bits transmitted at each Eb/N0 value
pub const DEFAULT_NUM_BITS: usize = 200_000;

/// Parameters for QPSK simulation over AWGN channel
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct SimParams {
    /// Number of bits transmitted at each Eb/N0 value (positive and even)
    pub num_bits: usize,
    /// Ratios (dB) of bit energy to noise power spectral density, in simulation order
    #[serde(with = "all_ebn0_db_serde")]
    pub all_ebn0_db: Vec<f64>,
    /// Seed for the random number generator (`None` for a non-reproducible run)
    pub rng_seed: Option<u64>,
    /// Whether Eb/N0 values are simulated in parallel
    pub parallel: bool,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            num_bits: DEFAULT_NUM_BITS,
            all_ebn0_db: (0 .. 7).map(|n| 2.0 * f64::from(n)).collect(),
            rng_seed: None,
            parallel: false,
        }
    }
}

impl SimParams {
    /// Checks validity of simulation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_bits` is `0` or odd, if `all_ebn0_db` is empty, or if any Eb/N0
    /// value is NaN or negative infinity.
    pub fn check(&self) -> Result<(), Error> {
        if self.num_bits == 0 || self.num_bits % 2 != 0 {
            return Err(Error::InvalidParameter(format!(
                "Number of bits must be a positive even integer (found {})",
                self.num_bits
            )));
        }
        if self.all_ebn0_db.is_empty() {
            return Err(Error::InvalidParameter(
                "At least one Eb/N0 value is needed".to_string(),
            ));
        }
        if let Some(&ebn0_db) = self
            .all_ebn0_db
            .iter()
            .find(|x| x.is_nan() || (x.is_infinite() && x.is_sign_negative()))
        {
            return Err(Error::InvalidParameter(format!(
                "Eb/N0 must be a number or +inf dB (found {ebn0_db})"
            )));
        }
        Ok(())
    }
}

/// Results for a single Eb/N0 value
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct ResultRecord {
    /// Ratio (dB) of bit energy to noise power spectral density
    #[serde(with = "ebn0_db_serde")]
    pub ebn0_db: f64,
    /// Number of bits transmitted
    pub num_bits: usize,
    /// Number of bits received in error
    pub num_bit_errors: usize,
    /// Simulated bit error rate
    pub ber_sim: f64,
    /// Theoretical bit error rate
    pub ber_theory: f64,
}

/// Results of a simulation run, one record per Eb/N0 value in simulation order
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct SimResults {
    /// Parameters of the run
    pub params: SimParams,
    /// Results, in the order of `params.all_ebn0_db`
    pub records: Vec<ResultRecord>,
}

impl SimResults {
    /// Returns Eb/N0 (dB) values, in simulation order.
    #[must_use]
    pub fn all_ebn0_db(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.ebn0_db).collect()
    }

    /// Returns simulated BER values, aligned with [`all_ebn0_db`](Self::all_ebn0_db).
    #[must_use]
    pub fn all_ber_sim(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.ber_sim).collect()
    }

    /// Returns theoretical BER values, aligned with [`all_ebn0_db`](Self::all_ebn0_db).
    #[must_use]
    pub fn all_ber_theory(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.ber_theory).collect()
    }

    /// Saves results to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written to.
    pub fn save_json(&self, json_filename: &str) -> Result<(), Error> {
        let writer = std::io::BufWriter::new(std::fs::File::create(json_filename)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Loads results from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold valid results.
    pub fn load_json(json_filename: &str) -> Result<Self, Error> {
        let reader = std::io::BufReader::new(std::fs::File::open(json_filename)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Runs simulation with a random number generator built from `params.rng_seed`.
///
/// # Errors
///
/// Returns an error if `params` is invalid.
///
/// # Examples
///
/// ```
/// use qpsk_ber::sim::{self, SimParams};
///
/// let params = SimParams {
///     num_bits: 2000,
///     all_ebn0_db: vec![0.0, 4.0],
///     rng_seed: Some(1),
///     parallel: false,
/// };
/// let results = sim::run(&params)?;
/// assert_eq!(results.all_ebn0_db(), [0.0, 4.0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn run(params: &SimParams) -> Result<SimResults, Error> {
    let mut rng = match params.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    run_with_rng(params, &mut rng)
}

/// Runs simulation with a given random number generator.
///
/// The random number generator first produces the transmitted bits, then one noise seed per Eb/N0
/// value.
///
/// # Errors
///
/// Returns an error if `params` is invalid.
pub fn run_with_rng<R: Rng + ?Sized>(params: &SimParams, rng: &mut R) -> Result<SimResults, Error> {
    params.check()?;
    let bits = utils::random_bits(params.num_bits, rng)?;
    let syms = qpsk::modulate(&bits)?;
    let all_noise_seeds: Vec<u64> = params.all_ebn0_db.iter().map(|_| rng.random()).collect();
    info!(
        num_bits = params.num_bits,
        num_snr = params.all_ebn0_db.len(),
        parallel = params.parallel,
        "Starting simulation"
    );
    let records = if params.parallel {
        params
            .all_ebn0_db
            .par_iter()
            .zip(all_noise_seeds.par_iter())
            .map(|(&ebn0_db, &seed)| simulate_ebn0(&bits, &syms, ebn0_db, seed))
            .collect::<Result<Vec<ResultRecord>, Error>>()?
    } else {
        params
            .all_ebn0_db
            .iter()
            .zip(all_noise_seeds.iter())
            .map(|(&ebn0_db, &seed)| simulate_ebn0(&bits, &syms, ebn0_db, seed))
            .collect::<Result<Vec<ResultRecord>, Error>>()?
    };
    Ok(SimResults {
        params: params.clone(),
        records,
    })
}

/// Runs simulation and saves results to a JSON file.
///
/// # Errors
///
/// Returns an error if `params` is invalid or if the results cannot be saved.
pub fn run_and_save(params: &SimParams, json_filename: &str) -> Result<SimResults, Error> {
    let results = run(params)?;
    results.save_json(json_filename)?;
    info!(json_filename, "Saved results");
    Ok(results)
}

/// Returns results for one Eb/N0 value, given the transmitted bits and their symbols.
fn simulate_ebn0(
    bits: &BitSequence,
    syms: &SymbolSequence,
    ebn0_db: f64,
    noise_seed: u64,
) -> Result<ResultRecord, Error> {
    let mut rng = StdRng::seed_from_u64(noise_seed);
    let syms_noisy = channel::apply_noise(syms, ebn0_db, &mut rng)?;
    let bits_hat = qpsk::demodulate(&syms_noisy);
    let ber_sim = utils::compute_ber(bits, &bits_hat)?;
    let num_bit_errors = utils::error_count(&bits_hat, bits);
    let ber_theory = theory::theoretical_ber(ebn0_db);
    debug!(
        ebn0_db,
        noise_seed,
        num_bit_errors,
        ber_sim,
        ber_theory,
        "Simulated Eb/N0 value"
    );
    Ok(ResultRecord {
        ebn0_db,
        num_bits: bits.len(),
        num_bit_errors,
        ber_sim,
        ber_theory,
    })
}

// JSON has no infinity, and `serde_json` writes non-finite numbers as `null`. The only non-finite
// Eb/N0 that passes `SimParams::check` is `+inf` (noiseless channel), so `null` is read back as
// `+inf`.

/// Serde adapter for a single Eb/N0 (dB) value
mod ebn0_db_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(super) fn serialize<S: Serializer>(ebn0_db: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        Some(*ebn0_db).filter(|x| x.is_finite()).serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// Serde adapter for a sequence of Eb/N0 (dB) values
mod all_ebn0_db_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(
        all_ebn0_db: &[f64],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        all_ebn0_db
            .iter()
            .map(|&x| Some(x).filter(|x| x.is_finite()))
            .collect::<Vec<Option<f64>>>()
            .serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<f64>, D::Error> {
        Ok(Vec::<Option<f64>>::deserialize(deserializer)?
            .into_iter()
            .map(|x| x.unwrap_or(f64::INFINITY))
            .collect())
    }
}
