//! Gamma distribution parameters, Thom fitting, and the zero-inflated
//! variant used for precipitation-style indices.

use statrs::distribution::{ContinuousCDF, Gamma};

use crate::error::DistError;

/// Validated parameters for a Gamma distribution (shape/scale convention).
///
/// Both `shape` (k) and `scale` (theta) must be finite and positive.
/// Use [`GammaParams::new`] for direct construction or
/// [`fit_gamma_thom`] to estimate from a positive sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaParams {
    shape: f64,
    scale: f64,
}

impl GammaParams {
    /// Create new gamma parameters after validating that both `shape` and
    /// `scale` are finite and strictly positive.
    pub fn new(shape: f64, scale: f64) -> Option<Self> {
        if shape.is_finite() && shape > 0.0 && scale.is_finite() && scale > 0.0 {
            Some(Self { shape, scale })
        } else {
            None
        }
    }

    /// Shape parameter (k).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter (theta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Distribution mean (shape * scale).
    pub fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    /// Distribution variance (shape * scale²).
    pub fn var(&self) -> f64 {
        self.shape * self.scale * self.scale
    }

    /// Rate parameter (1 / scale), used by statrs which parameterises Gamma
    /// by (shape, rate) rather than (shape, scale).
    pub(crate) fn rate(&self) -> f64 {
        1.0 / self.scale
    }
}

/// Build a [`statrs::distribution::Gamma`] from validated [`GammaParams`].
///
/// Note: `statrs::distribution::Gamma::new` takes `(shape, rate)` where
/// `rate = 1 / scale`.
pub(crate) fn gamma_dist(params: &GammaParams) -> Result<Gamma, DistError> {
    Gamma::new(params.shape(), params.rate()).map_err(|e| DistError::GammaConstruction {
        shape: params.shape(),
        scale: params.scale(),
        message: e.to_string(),
    })
}

/// Fit a Gamma distribution to a slice of strictly positive values using
/// the Thom (1958) maximum-likelihood approximation.
///
/// With `A = ln(mean) - mean(ln x)`:
///
/// - shape = (1 + sqrt(1 + 4A/3)) / (4A)
/// - scale = mean / shape
///
/// Returns `None` if there are fewer than 2 values, fewer than 2 unique
/// values, any value is not strictly positive, or the estimator produces
/// invalid parameters (A ≤ 0 happens only for degenerate samples).
pub fn fit_gamma_thom(values: &[f64]) -> Option<GammaParams> {
    if values.len() < 2 {
        return None;
    }
    if caeli_stats::count_unique(values) < 2 {
        return None;
    }

    let mean = caeli_stats::mean(values);
    let ln_mean = caeli_stats::ln_mean(values)?;

    let a = mean.ln() - ln_mean;
    if !a.is_finite() || a <= 0.0 {
        return None;
    }

    let shape = (1.0 + (1.0 + 4.0 * a / 3.0).sqrt()) / (4.0 * a);
    let scale = mean / shape;

    GammaParams::new(shape, scale)
}

/// A Gamma distribution with an explicit probability mass at zero.
///
/// Precipitation accumulations are zero-inflated: months with no rain put a
/// point mass at exactly zero that a continuous distribution cannot carry.
/// The mass is estimated empirically as `n_zero / n_total` and the Gamma
/// part is fitted to the positive values only.
#[derive(Debug, Clone)]
pub struct ZeroInflatedGamma {
    prob_zero: f64,
    params: GammaParams,
    dist: Gamma,
}

impl ZeroInflatedGamma {
    /// Assemble from a zero-probability mass and validated gamma parameters.
    ///
    /// `prob_zero` must lie in `[0, 1)`: a mass of 1 leaves nothing for the
    /// continuous part. Also fails if the statrs distribution cannot be
    /// built (which validated parameters rule out in practice).
    pub fn new(prob_zero: f64, params: GammaParams) -> Result<Self, DistError> {
        if !prob_zero.is_finite() || !(0.0..1.0).contains(&prob_zero) {
            return Err(DistError::InvalidZeroMass { prob_zero });
        }
        let dist = gamma_dist(&params)?;
        Ok(Self {
            prob_zero,
            params,
            dist,
        })
    }

    /// Fit to a sample of non-negative accumulations.
    ///
    /// Splits the sample into zeros and positives, estimates the zero mass
    /// as the empirical zero fraction, and fits the Gamma part to the
    /// positives via [`fit_gamma_thom`].
    ///
    /// Returns `None` for degenerate samples: no positive values, or a
    /// positive subsample the Thom estimator rejects.
    pub fn fit(values: &[f64]) -> Option<Self> {
        let n_total = values.len();
        if n_total == 0 {
            return None;
        }

        let positives: Vec<f64> = values.iter().copied().filter(|&v| v > 0.0).collect();
        let n_zero = n_total - positives.len();
        let prob_zero = n_zero as f64 / n_total as f64;

        let params = fit_gamma_thom(&positives)?;
        Self::new(prob_zero, params).ok()
    }

    /// The estimated probability mass at exactly zero.
    pub fn prob_zero(&self) -> f64 {
        self.prob_zero
    }

    /// The fitted parameters of the Gamma part.
    pub fn params(&self) -> GammaParams {
        self.params
    }

    /// Cumulative probability of a value under the zero-inflated model.
    ///
    /// Values at or below zero sit at the midpoint of the zero mass
    /// (`prob_zero / 2`), which keeps "no rain" away from probability zero
    /// and the quantile map away from negative infinity. Positive values
    /// map to `prob_zero + (1 - prob_zero) * gammaCDF(x)`.
    ///
    /// Monotonically non-decreasing in `x` for fixed parameters.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            self.prob_zero / 2.0
        } else {
            self.prob_zero + (1.0 - self.prob_zero) * self.dist.cdf(x)
        }
    }
}
