//! Three-parameter log-logistic distribution fitted by probability-weighted
//! moments, used for water-balance indices whose accumulations can be
//! negative.

use statrs::function::gamma::gamma;

/// Validated parameters for a three-parameter log-logistic distribution.
///
/// `scale` (alpha) must be finite and positive, `shape` (beta) finite and
/// greater than 1 (the PWM estimator involves Γ(1 - 1/beta), which is only
/// finite for beta > 1), `location` (gamma) finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLogisticParams {
    scale: f64,
    shape: f64,
    location: f64,
}

impl LogLogisticParams {
    /// Create new log-logistic parameters after validation.
    pub fn new(scale: f64, shape: f64, location: f64) -> Option<Self> {
        if scale.is_finite()
            && scale > 0.0
            && shape.is_finite()
            && shape > 1.0
            && location.is_finite()
        {
            Some(Self {
                scale,
                shape,
                location,
            })
        } else {
            None
        }
    }

    /// Scale parameter (alpha).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Shape parameter (beta).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Location parameter (gamma).
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Cumulative distribution function.
    ///
    /// `F(x) = (1 + (alpha / (x - gamma))^beta)^-1` for `x > gamma`;
    /// zero at or below the location bound (callers clamp before the
    /// quantile map, so the exact zero never reaches it).
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= self.location {
            return 0.0;
        }
        1.0 / (1.0 + (self.scale / (x - self.location)).powf(self.shape))
    }
}

/// Fit a three-parameter log-logistic distribution by unbiased
/// probability-weighted moments (PWM).
///
/// With the sample sorted ascending and `b0`, `b1`, `b2` the first three
/// unbiased PWM estimates of `E[X (1-F)^s]`:
///
/// - beta  = (2·b1 - b0) / (6·b1 - b0 - 6·b2)
/// - alpha = (b0 - 2·b1)·beta / (Γ(1 + 1/beta)·Γ(1 - 1/beta))
/// - gamma = b0 - alpha·Γ(1 + 1/beta)·Γ(1 - 1/beta)
///
/// Returns `None` if there are fewer than 4 values, fewer than 2 unique
/// values, or the estimates fail validation (beta ≤ 1, non-finite, or a
/// non-positive alpha).
pub fn fit_log_logistic_pwm(values: &[f64]) -> Option<LogLogisticParams> {
    let n = values.len();
    if n < 4 {
        return None;
    }
    if caeli_stats::count_unique(values) < 2 {
        return None;
    }
    if values.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let nf = n as f64;
    let mut b0 = 0.0;
    let mut b1 = 0.0;
    let mut b2 = 0.0;
    for (i, &x) in sorted.iter().enumerate() {
        // Number of sample values above x, as the (1-F) plotting weight.
        let above1 = (n - 1 - i) as f64;
        let above2 = if i + 2 < n {
            ((n - 1 - i) * (n - 2 - i)) as f64
        } else {
            0.0
        };
        b0 += x;
        b1 += x * above1;
        b2 += x * above2;
    }
    b0 /= nf;
    b1 /= nf * (nf - 1.0);
    b2 /= nf * (nf - 1.0) * (nf - 2.0);

    let denom = 6.0 * b1 - b0 - 6.0 * b2;
    if denom.abs() < 1e-12 {
        return None;
    }
    let beta = (2.0 * b1 - b0) / denom;
    if !beta.is_finite() || beta <= 1.0 {
        return None;
    }

    let g = gamma(1.0 + 1.0 / beta) * gamma(1.0 - 1.0 / beta);
    if !g.is_finite() || g <= 0.0 {
        return None;
    }

    let alpha = (b0 - 2.0 * b1) * beta / g;
    let location = b0 - alpha * g;

    LogLogisticParams::new(alpha, beta, location)
}
