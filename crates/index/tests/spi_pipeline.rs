//! End-to-end SPI computation on synthetic monthly precipitation.

use rand::SeedableRng;
use rand_distr::{Distribution, Gamma as GammaDist};

use caeli_index::{IndexConfig, compute_index};

/// Synthetic monthly precipitation with per-month seasonality.
fn monthly_precip(n_years: usize, seed: u64) -> (Vec<f64>, Vec<u8>) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut values = Vec::with_capacity(n_years * 12);
    let mut period = Vec::with_capacity(n_years * 12);

    for _ in 0..n_years {
        for m in 1u8..=12 {
            let shape = 1.5 + m as f64 * 0.2;
            let scale = 20.0 + m as f64 * 3.0;
            let dist = GammaDist::new(shape, scale).unwrap();
            values.push(dist.sample(&mut rng));
            period.push(m);
        }
    }

    (values, period)
}

#[test]
fn ten_year_spi_scale_3() {
    let (values, period) = monthly_precip(10, 42);
    let config = IndexConfig::new(3);

    let result = compute_index(&values, &period, &config).unwrap();

    // Same length as input, first scale-1 positions undefined.
    assert_eq!(result.values().len(), values.len());
    assert!(result.values()[0].is_nan());
    assert!(result.values()[1].is_nan());

    // Every other position is a finite index value; the probability clamp
    // bounds the quantile below 4.8.
    for (t, &z) in result.values().iter().enumerate().skip(2) {
        assert!(z.is_finite(), "undefined index at t={t}");
        assert!(z.abs() < 4.8, "implausible index {z} at t={t}");
    }

    // All 12 calendar groups fitted, none skipped.
    assert_eq!(result.n_fitted(), 12);
    assert!(result.skipped().is_empty());
}

#[test]
fn standardized_output_is_approximately_normal() {
    // With a large sample, values drawn from the fitted distribution's own
    // support should standardize to roughly N(0, 1).
    let (values, period) = monthly_precip(200, 7);
    let config = IndexConfig::new(1);

    let result = compute_index(&values, &period, &config).unwrap();
    let defined: Vec<f64> = result
        .values()
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .collect();

    assert!(defined.len() > 2000);
    let mean = caeli_stats::mean(&defined);
    let sd = caeli_stats::sd(&defined);
    assert!(mean.abs() < 0.1, "index mean {mean} too far from 0");
    assert!((sd - 1.0).abs() < 0.1, "index sd {sd} too far from 1");
}

#[test]
fn zero_inflated_months_share_the_zero_quantile() {
    // A dry season: month 1 is zero in 40% of years.
    let (mut values, period) = monthly_precip(30, 11);
    for y in 0..12 {
        values[y * 12] = 0.0; // first 12 Januaries dry
    }

    let config = IndexConfig::new(1);
    let result = compute_index(&values, &period, &config).unwrap();

    // All dry Januaries map to the identical (negative) index value.
    let dry: Vec<f64> = (0..12).map(|y| result.values()[y * 12]).collect();
    assert!(dry[0].is_finite() && dry[0] < 0.0);
    for &z in &dry {
        assert_eq!(z.to_bits(), dry[0].to_bits());
    }
}

#[test]
fn gaps_propagate_through_windows() {
    let (mut values, period) = monthly_precip(10, 3);
    values[50] = f64::NAN;

    let config = IndexConfig::new(3);
    let result = compute_index(&values, &period, &config).unwrap();

    // The three windows containing t=50 are undefined; neighbours are not.
    assert!(result.values()[50].is_nan());
    assert!(result.values()[51].is_nan());
    assert!(result.values()[52].is_nan());
    assert!(result.values()[49].is_finite());
    assert!(result.values()[53].is_finite());
}

#[test]
fn reruns_are_bit_identical() {
    let (values, period) = monthly_precip(10, 42);
    let config = IndexConfig::new(6);

    let a = compute_index(&values, &period, &config).unwrap();
    let b = compute_index(&values, &period, &config).unwrap();

    assert_eq!(a.values().len(), b.values().len());
    for (x, y) in a.values().iter().zip(b.values().iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn scale_equal_to_length_leaves_one_defined_window() {
    let (values, period) = monthly_precip(2, 9);
    // One 24-month window; one group of size 1 → insufficient data, but the
    // run itself succeeds.
    let config = IndexConfig::new(24);
    let result = compute_index(&values, &period, &config).unwrap();
    assert_eq!(result.values().len(), 24);
    assert!(result.values().iter().all(|v| v.is_nan()));
    assert_eq!(result.skipped().len(), 1);
}
