//! End-to-end SPEI computation on a synthetic water-balance series.

use rand::SeedableRng;
use rand_distr::{Distribution, Gamma as GammaDist, Normal};

use caeli_index::{DistributionFamily, IndexConfig, compute_index};

/// Synthetic monthly water balance (precipitation minus PET), routinely
/// negative in the warm season.
fn monthly_water_balance(n_years: usize, seed: u64) -> (Vec<f64>, Vec<u8>) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut values = Vec::with_capacity(n_years * 12);
    let mut period = Vec::with_capacity(n_years * 12);

    for _ in 0..n_years {
        for m in 1u8..=12 {
            let precip = GammaDist::new(2.0, 15.0 + m as f64).unwrap();
            // PET peaks mid-year; the noise keeps the samples non-degenerate.
            let pet_mean = 40.0 + 30.0 * ((m as f64 - 6.5) / 6.0).cos();
            let pet = Normal::new(pet_mean, 8.0).unwrap();
            let d: f64 = precip.sample(&mut rng) - pet.sample(&mut rng);
            values.push(d);
            period.push(m);
        }
    }

    (values, period)
}

#[test]
fn thirty_year_spei_scale_3() {
    let (values, period) = monthly_water_balance(30, 42);
    assert!(values.iter().any(|&v| v < 0.0), "fixture should go negative");

    let config = IndexConfig::new(3).with_distribution(DistributionFamily::LogLogistic);
    let result = compute_index(&values, &period, &config).unwrap();

    assert_eq!(result.values().len(), values.len());
    assert!(result.values()[0].is_nan());
    assert!(result.values()[1].is_nan());

    assert_eq!(result.n_fitted(), 12);
    assert!(result.skipped().is_empty());

    for (t, &z) in result.values().iter().enumerate().skip(2) {
        assert!(z.is_finite(), "undefined index at t={t}");
        assert!(z.abs() < 4.8, "implausible index {z} at t={t}");
    }
}

#[test]
fn spei_output_is_approximately_normal() {
    let (values, period) = monthly_water_balance(200, 7);
    let config = IndexConfig::new(1).with_distribution(DistributionFamily::LogLogistic);

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
    assert!((sd - 1.0).abs() < 0.15, "index sd {sd} too far from 1");
}

#[test]
fn drier_balance_gives_lower_index() {
    let (values, period) = monthly_water_balance(50, 3);
    let config = IndexConfig::new(1).with_distribution(DistributionFamily::LogLogistic);
    let result = compute_index(&values, &period, &config).unwrap();

    // Within one calendar group the index must preserve the value order.
    for m in 1u8..=12 {
        let mut pairs: Vec<(f64, f64)> = values
            .iter()
            .zip(period.iter())
            .zip(result.values().iter())
            .filter(|((_, &p), z)| p == m && z.is_finite())
            .map(|((&v, _), &z)| (v, z))
            .collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        for w in pairs.windows(2) {
            assert!(
                w[0].1 <= w[1].1,
                "order violation in month {m}: {:?} vs {:?}",
                w[0],
                w[1]
            );
        }
    }
}
