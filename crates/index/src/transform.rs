//! Probability transform and standard-normal quantile mapping.

use std::collections::BTreeMap;

use caeli_dist::inv_normal_cdf;

use crate::config::IndexConfig;
use crate::fit::FittedDistribution;

/// Map each defined accumulated value to its standardized index value.
///
/// For every position with a finite accumulated value whose period has a
/// fitted distribution: evaluate the CDF, clamp the probability to
/// `[eps, 1 - eps]`, and apply the inverse standard-normal CDF. All other
/// positions stay NaN. Original time order is preserved because positions
/// are written in place.
pub(crate) fn standardize(
    accumulated: &[f64],
    period: &[u8],
    fitted: &BTreeMap<u8, FittedDistribution>,
    config: &IndexConfig,
) -> Vec<f64> {
    let eps = config.clamp_epsilon();
    let mut out = vec![f64::NAN; accumulated.len()];

    for (i, &x) in accumulated.iter().enumerate() {
        if !x.is_finite() {
            continue;
        }
        let Some(dist) = fitted.get(&period[i]) else {
            continue;
        };

        let p = dist.cdf(x).clamp(eps, 1.0 - eps);
        out[i] = inv_normal_cdf(p);
    }

    out
}
