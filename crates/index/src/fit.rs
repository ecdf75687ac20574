//! Per-calendar-group distribution fitting.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use caeli_dist::{LogLogisticParams, ZeroInflatedGamma, fit_log_logistic_pwm};

use crate::config::{DistributionFamily, IndexConfig};
use crate::result::{SkipReason, SkippedGroup};

/// A distribution fitted to one calendar group, dispatched by family.
#[derive(Debug, Clone)]
pub enum FittedDistribution {
    /// Zero-inflated Gamma (precipitation-style indices).
    Gamma(ZeroInflatedGamma),
    /// Three-parameter log-logistic (water-balance indices).
    LogLogistic(LogLogisticParams),
}

impl FittedDistribution {
    /// Cumulative probability of an accumulated value under this fit.
    ///
    /// The zero-inflation convention (zero maps to half the zero mass)
    /// lives inside the Gamma variant.
    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            FittedDistribution::Gamma(zig) => zig.cdf(x),
            FittedDistribution::LogLogistic(ll) => ll.cdf(x),
        }
    }
}

/// Fit one distribution per calendar group.
///
/// Failures are local: a group that is too small or degenerate is recorded
/// in the skip list and the remaining groups proceed.
pub(crate) fn fit_groups(
    accumulated: &[f64],
    groups: &BTreeMap<u8, Vec<usize>>,
    config: &IndexConfig,
) -> (BTreeMap<u8, FittedDistribution>, Vec<SkippedGroup>) {
    let mut fitted = BTreeMap::new();
    let mut skipped = Vec::new();

    for (&period, indices) in groups {
        let sample: Vec<f64> = indices.iter().map(|&i| accumulated[i]).collect();

        if sample.len() < config.min_sample_size() {
            warn!(
                period,
                n = sample.len(),
                required = config.min_sample_size(),
                "skipping period: insufficient data"
            );
            skipped.push(SkippedGroup {
                period,
                reason: SkipReason::InsufficientData {
                    n: sample.len(),
                    required: config.min_sample_size(),
                },
            });
            continue;
        }

        let fit = match config.distribution() {
            DistributionFamily::GammaZeroInflated => {
                ZeroInflatedGamma::fit(&sample).map(FittedDistribution::Gamma)
            }
            DistributionFamily::LogLogistic => {
                fit_log_logistic_pwm(&sample).map(FittedDistribution::LogLogistic)
            }
        };

        match fit {
            Some(f) => {
                debug!(period, n = sample.len(), "fitted calendar group");
                fitted.insert(period, f);
            }
            None => {
                warn!(
                    period,
                    n = sample.len(),
                    "skipping period: degenerate distribution"
                );
                skipped.push(SkippedGroup {
                    period,
                    reason: SkipReason::DegenerateDistribution,
                });
            }
        }
    }

    (fitted, skipped)
}
