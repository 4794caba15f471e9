//! This crate simulates the BER-versus-Eb/N0 performance of Gray-coded QPSK over an AWGN channel
//! and compares it with theory. Simulation parameters are specified on the command line, results
//! are printed as a table and optionally saved to a JSON file.
//!
//! Build the executable with `cargo build --release` and then run `./target/release/qpsk-ber -h`
//! for help on the command-line interface. Set `RUST_LOG=debug` for per-Eb/N0 details.

#![warn(
    clippy::complexity,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_allocation,
    unused_import_braces,
    unused_qualifications
)]

use anyhow::Result;
use clap::{crate_name, crate_version, value_parser, Arg, ArgAction, ArgMatches, Command};
use qpsk_ber::sim::{self, SimParams, SimResults};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Log level used when `RUST_LOG` is not set
const DEFAULT_LOG_LEVEL: &str = "info";

/// Main function
fn main() -> Result<()> {
    init_logging();
    let timer = Instant::now();
    let matches = command_line_parser().get_matches();
    let params = sim_params(&matches);
    let results = match json_filename_from_matches(&matches) {
        Some(json_filename) => sim::run_and_save(&params, &json_filename)?,
        None => sim::run(&params)?,
    };
    print!("{}", results_table(&results));
    tracing::info!("Elapsed time: {:.3?}", timer.elapsed());
    Ok(())
}

/// Initializes logging to stderr, with level taken from `RUST_LOG` if set.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns command line parser.
fn command_line_parser() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about("Evaluates the BER of Gray-coded QPSK over an AWGN channel")
        .arg(num_bits())
        .arg(first_snr_db())
        .arg(snr_step_db())
        .arg(num_snr())
        .arg(rng_seed())
        .arg(parallel())
        .arg(json_filename())
}

/// Returns argument for number of bits per Eb/N0 value.
fn num_bits() -> Arg {
    Arg::new("num_bits")
        .short('n')
        .value_parser(value_parser!(usize))
        .default_value("200000")
        .help("Number of bits transmitted per Eb/N0 value (positive and even)")
}

/// Returns argument for first Eb/N0 (dB).
fn first_snr_db() -> Arg {
    Arg::new("first_snr_db")
        .short('r')
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .default_value("0.0")
        .help("First Eb/N0 (dB)")
}

/// Returns argument for Eb/N0 step (dB).
fn snr_step_db() -> Arg {
    Arg::new("snr_step_db")
        .short('p')
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .default_value("2.0")
        .help("Eb/N0 step (dB)")
}

/// Returns argument for number of Eb/N0 values.
fn num_snr() -> Arg {
    Arg::new("num_snr")
        .short('s')
        .value_parser(value_parser!(u32))
        .default_value("7")
        .help("Number of Eb/N0 values")
}

/// Returns argument for random number generator seed.
fn rng_seed() -> Arg {
    Arg::new("rng_seed")
        .short('d')
        .value_parser(value_parser!(u64))
        .help("Seed for the random number generator (omit for a non-reproducible run)")
}

/// Returns argument for parallel simulation of Eb/N0 values.
fn parallel() -> Arg {
    Arg::new("parallel")
        .short('j')
        .action(ArgAction::SetTrue)
        .help("Simulate Eb/N0 values in parallel")
}

/// Returns argument for name of JSON file to which results must be saved.
fn json_filename() -> Arg {
    Arg::new("json_filename")
        .short('f')
        .help("Name of JSON file to which results must be saved (not saved if omitted)")
}

/// Returns simulation parameters based on command-line arguments.
fn sim_params(matches: &ArgMatches) -> SimParams {
    // OK to unwrap: Every argument unwrapped here has a default value.
    SimParams {
        num_bits: *matches.get_one("num_bits").unwrap(),
        all_ebn0_db: all_ebn0_db_from_matches(matches),
        rng_seed: matches.get_one::<u64>("rng_seed").copied(),
        parallel: matches.get_flag("parallel"),
    }
}

/// Returns all Eb/N0 (dB) values.
fn all_ebn0_db_from_matches(matches: &ArgMatches) -> Vec<f64> {
    let first_snr_db: f64 = *matches.get_one("first_snr_db").unwrap();
    let snr_step_db: f64 = *matches.get_one("snr_step_db").unwrap();
    let num_snr: u32 = *matches.get_one("num_snr").unwrap();
    (0 .. num_snr)
        .map(|n| first_snr_db + snr_step_db * f64::from(n))
        .collect()
}

/// Returns name of JSON file to which simulation results must be saved, if any.
fn json_filename_from_matches(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("json_filename").cloned()
}

/// Returns text table of Eb/N0, simulated BER and theoretical BER values.
fn results_table(results: &SimResults) -> String {
    let mut table = format!(
        "{:>10}  {:>12}  {:>12}  {:>12}\n",
        "Eb/N0 (dB)", "Bit errors", "Sim. BER", "Theory BER"
    );
    for record in &results.records {
        table.push_str(&format!(
            "{:>10.2}  {:>12}  {:>12.4e}  {:>12.4e}\n",
            record.ebn0_db, record.num_bit_errors, record.ber_sim, record.ber_theory
        ));
    }
    table
}
