//! Standardized drought index computation engine (SPI, SPEI).
//!
//! Converts a raw monthly time series into a standardized, unit-free
//! anomaly index via distribution fitting and probability transformation.
//!
//! # Pipeline
//!
//! 1. **Accumulate** rolling-window sums at the chosen scale (O(n),
//!    missing values poison their windows)
//! 2. **Group** defined accumulations by calendar period label
//! 3. **Fit** one distribution per group (zero-inflated Gamma for SPI,
//!    log-logistic for SPEI); failed groups are skipped, not fatal
//! 4. **Transform** each value: CDF → clamp → inverse normal CDF
//! 5. **Assemble** the time-ordered index series with NaN where undefined
//!
//! # Quick Start
//!
//! ```
//! use caeli_index::{IndexConfig, compute_index};
//!
//! // Two years of monthly precipitation, period labels 1..=12.
//! let values: Vec<f64> = (0..24).map(|i| 10.0 + (i % 12) as f64).collect();
//! let period: Vec<u8> = (0..24).map(|i| (i % 12) as u8 + 1).collect();
//!
//! let config = IndexConfig::new(3).with_min_sample_size(2);
//! let result = compute_index(&values, &period, &config).unwrap();
//! assert_eq!(result.values().len(), 24);
//! ```

mod accumulate;
mod config;
mod error;
pub(crate) mod fit;
mod group;
mod result;
pub(crate) mod transform;

pub use config::{DistributionFamily, IndexConfig};
pub use error::IndexError;
pub use fit::FittedDistribution;
pub use result::{IndexResult, SkipReason, SkippedGroup};

/// Validates the inputs to [`compute_index`].
fn validate_inputs(values: &[f64], period: &[u8], config: &IndexConfig) -> Result<(), IndexError> {
    // 1. The series must not be empty.
    if values.is_empty() {
        return Err(IndexError::EmptyInput);
    }

    // 2. Values and period labels must pair up.
    if values.len() != period.len() {
        return Err(IndexError::LengthMismatch {
            values_len: values.len(),
            periods_len: period.len(),
        });
    }

    // 3. The accumulation scale must fit inside the series.
    if config.scale() == 0 || config.scale() > values.len() {
        return Err(IndexError::InvalidScale {
            scale: config.scale(),
            len: values.len(),
        });
    }

    // 4. All period labels must be inside the seasonal cycle.
    for &p in period {
        if !(1..=config.cycle_length()).contains(&p) {
            return Err(IndexError::InvalidPeriod {
                period: p,
                cycle_length: config.cycle_length(),
            });
        }
    }

    Ok(())
}

/// Computes a standardized drought index for one series and one scale.
///
/// # Arguments
///
/// * `values` — Observations, one per period, in time order. NaN marks an
///   explicit gap.
/// * `period` — 1-indexed calendar label for each observation
///   (1..=`config.cycle_length()`).
/// * `config` — Accumulation scale, distribution family, and thresholds.
///
/// # Errors
///
/// Returns [`IndexError`] for run-fatal conditions (empty input, invalid
/// scale, mismatched slices, invalid labels or configuration). Per-group
/// fitting failures are reported on the [`IndexResult`] instead and only
/// mark the affected periods undefined.
///
/// Deterministic: identical inputs and configuration yield bit-identical
/// output.
#[tracing::instrument(skip(values, period, config), fields(n = values.len(), scale = config.scale()))]
pub fn compute_index(
    values: &[f64],
    period: &[u8],
    config: &IndexConfig,
) -> Result<IndexResult, IndexError> {
    config.validate()?;
    validate_inputs(values, period, config)?;

    let accumulated = accumulate::accumulate(values, config.scale());
    let groups = group::group_by_period(&accumulated, period);
    let (fitted, skipped) = fit::fit_groups(&accumulated, &groups, config);
    let index = transform::standardize(&accumulated, period, &fitted, config);

    Ok(IndexResult::new(index, accumulated, fitted, skipped))
}
