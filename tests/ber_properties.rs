//! End-to-end properties of the QPSK-over-AWGN BER simulation

use float_eq::assert_float_eq;
use qpsk_ber::sim::{self, SimParams};
use qpsk_ber::{channel, constellation, qpsk, theory, utils, Error};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn noiseless_channel_is_identity_for_all_bit_pairs() {
    let mut rng = StdRng::seed_from_u64(0);
    for bits in constellation::BIT_PAIRS {
        let syms = qpsk::modulate(&bits).unwrap();
        let syms_noisy = channel::AwgnChannel::noiseless().apply(&syms, &mut rng);
        assert_eq!(qpsk::demodulate(&syms_noisy).as_slice(), bits);
    }
}

#[test]
fn length_invariants_hold() {
    let mut rng = StdRng::seed_from_u64(1);
    for num_bits in [2, 4, 10, 1000] {
        let bits = utils::random_bits(num_bits, &mut rng).unwrap();
        let syms = qpsk::modulate(&bits).unwrap();
        assert_eq!(syms.len(), num_bits / 2);
        let syms_noisy = channel::apply_noise(&syms, 3.0, &mut rng).unwrap();
        assert_eq!(syms_noisy.len(), syms.len());
        assert_eq!(qpsk::demodulate(&syms_noisy).len(), 2 * syms.len());
    }
}

#[test]
fn odd_num_bits_is_rejected() {
    let mut rng = StdRng::seed_from_u64(2);
    assert!(matches!(
        utils::random_bits(11, &mut rng),
        Err(Error::InvalidParameter(_))
    ));
    let bits = [qpsk_ber::Bit::One; 11];
    assert!(matches!(
        qpsk::modulate(&bits),
        Err(Error::InvalidParameter(_))
    ));
    let params = SimParams {
        num_bits: 11,
        ..SimParams::default()
    };
    assert!(matches!(sim::run(&params), Err(Error::InvalidParameter(_))));
}

/// Per-bit error probability of unit-energy Gray QPSK with noise variance `1 / (2 * Eb/N0)` per
/// dimension, i.e. the closed form shifted by 3 dB.
fn shifted_ber(ebn0_db: f64) -> f64 {
    0.5 * utils::erfc((0.5 * utils::db_to_linear(ebn0_db)).sqrt())
}

#[test]
fn simulated_ber_tracks_shifted_theory() {
    let params = SimParams {
        rng_seed: Some(2024),
        ..SimParams::default()
    };
    let results = sim::run(&params).unwrap();
    assert_eq!(results.records.len(), params.all_ebn0_db.len());
    for record in &results.records {
        assert!((0.0 ..= 1.0).contains(&record.ber_sim));
        assert_float_eq!(record.ber_sim, shifted_ber(record.ebn0_db), abs <= 0.005);
    }
    for record in results.records.iter().filter(|r| r.ebn0_db <= 6.0) {
        assert!(record.ber_sim > record.ber_theory);
    }
    let last = results.records.last().unwrap();
    assert_float_eq!(last.ebn0_db, 12.0, abs <= 1e-12);
    assert_float_eq!(last.ber_sim, last.ber_theory, abs <= 0.002);
}

#[test]
fn simulated_ber_decreases_with_ebn0() {
    let all_ebn0_db = vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0];
    let seeds = [3, 5, 7];
    let mut mean_ber = vec![0.0; all_ebn0_db.len()];
    for seed in seeds {
        let params = SimParams {
            num_bits: 50000,
            all_ebn0_db: all_ebn0_db.clone(),
            rng_seed: Some(seed),
            parallel: true,
        };
        for (mean, ber) in mean_ber.iter_mut().zip(sim::run(&params).unwrap().all_ber_sim()) {
            *mean += ber / 3.0;
        }
    }
    assert!(mean_ber.windows(2).all(|w| w[1] <= w[0]));
    assert!(mean_ber[0] > mean_ber[3]);
}

#[test]
fn theoretical_ber_matches_closed_form() {
    assert_float_eq!(theory::theoretical_ber(0.0), 0.5 * utils::erfc(1.0), abs <= 1e-15);
    assert_float_eq!(theory::theoretical_ber(0.0), 0.0786, abs <= 1e-4);
    let bers = theory::theoretical_bers(&[0.0, 4.0, 8.0, 12.0, 16.0]);
    assert!(bers.windows(2).all(|w| w[1] < w[0]));
    assert!(bers.iter().all(|&ber| ber > 0.0 && ber < 0.5));
}

#[test]
fn fixed_seed_runs_are_reproducible() {
    let params = SimParams {
        num_bits: 10000,
        rng_seed: Some(77),
        ..SimParams::default()
    };
    let results1 = sim::run(&params).unwrap();
    let results2 = sim::run(&params).unwrap();
    assert_eq!(results1, results2);
}

#[test]
fn infinite_ebn0_gives_zero_ber() {
    let params = SimParams {
        num_bits: 10000,
        all_ebn0_db: vec![f64::INFINITY],
        rng_seed: Some(8),
        parallel: false,
    };
    let results = sim::run(&params).unwrap();
    assert_eq!(results.records[0].num_bit_errors, 0);
    assert_float_eq!(results.all_ber_sim()[0], 0.0, abs <= 0.0);
}
