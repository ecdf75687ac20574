//! Configuration for index computation.

use crate::error::IndexError;

/// Parametric family fitted to each calendar group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistributionFamily {
    /// Zero-inflated two-parameter Gamma, for precipitation-only indices
    /// (SPI). Accumulations are non-negative with a point mass at zero.
    #[default]
    GammaZeroInflated,
    /// Three-parameter log-logistic, for water-balance indices (SPEI)
    /// whose accumulations can be negative.
    LogLogistic,
}

/// Configuration for standardized index computation.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use caeli_index::{DistributionFamily, IndexConfig};
///
/// let config = IndexConfig::new(3)
///     .with_distribution(DistributionFamily::LogLogistic)
///     .with_min_sample_size(6);
/// ```
#[derive(Clone, Debug)]
pub struct IndexConfig {
    scale: usize,
    distribution: DistributionFamily,
    min_sample_size: usize,
    clamp_epsilon: f64,
    cycle_length: u8,
}

impl IndexConfig {
    /// Creates a new configuration for the given accumulation scale.
    ///
    /// Defaults: `distribution = GammaZeroInflated`, `min_sample_size = 4`,
    /// `clamp_epsilon = 1e-6`, `cycle_length = 12` (monthly seasonality).
    pub fn new(scale: usize) -> Self {
        Self {
            scale,
            distribution: DistributionFamily::GammaZeroInflated,
            min_sample_size: 4,
            clamp_epsilon: 1e-6,
            cycle_length: 12,
        }
    }

    // --- Builder methods ---

    /// Sets the distribution family fitted per calendar group.
    pub fn with_distribution(mut self, d: DistributionFamily) -> Self {
        self.distribution = d;
        self
    }

    /// Sets the minimum calendar-group sample size required for fitting.
    pub fn with_min_sample_size(mut self, n: usize) -> Self {
        self.min_sample_size = n;
        self
    }

    /// Sets the epsilon used to clamp probabilities away from 0 and 1.
    pub fn with_clamp_epsilon(mut self, eps: f64) -> Self {
        self.clamp_epsilon = eps;
        self
    }

    /// Sets the seasonal cycle length (number of distinct period labels).
    pub fn with_cycle_length(mut self, n: u8) -> Self {
        self.cycle_length = n;
        self
    }

    // --- Accessors ---

    /// Returns the accumulation scale.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Returns the distribution family.
    pub fn distribution(&self) -> DistributionFamily {
        self.distribution
    }

    /// Returns the minimum calendar-group sample size.
    pub fn min_sample_size(&self) -> usize {
        self.min_sample_size
    }

    /// Returns the probability clamp epsilon.
    pub fn clamp_epsilon(&self) -> f64 {
        self.clamp_epsilon
    }

    /// Returns the seasonal cycle length.
    pub fn cycle_length(&self) -> u8 {
        self.cycle_length
    }

    /// Validates this configuration.
    ///
    /// Checks that `min_sample_size` is at least 2, `clamp_epsilon` is
    /// finite and in the open interval (0, 0.5), and `cycle_length` is at
    /// least 1. The accumulation scale is checked against the series length
    /// at computation time.
    pub fn validate(&self) -> Result<(), IndexError> {
        if self.min_sample_size < 2 {
            return Err(IndexError::InvalidConfig {
                reason: format!(
                    "min_sample_size must be >= 2, got {}",
                    self.min_sample_size
                ),
            });
        }

        if !self.clamp_epsilon.is_finite()
            || self.clamp_epsilon <= 0.0
            || self.clamp_epsilon >= 0.5
        {
            return Err(IndexError::InvalidConfig {
                reason: format!(
                    "clamp_epsilon must be in (0, 0.5) and finite, got {}",
                    self.clamp_epsilon
                ),
            });
        }

        if self.cycle_length == 0 {
            return Err(IndexError::InvalidConfig {
                reason: "cycle_length must be >= 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = IndexConfig::new(3);
        assert_eq!(cfg.scale(), 3);
        assert_eq!(cfg.distribution(), DistributionFamily::GammaZeroInflated);
        assert_eq!(cfg.min_sample_size(), 4);
        assert!((cfg.clamp_epsilon() - 1e-6).abs() < f64::EPSILON);
        assert_eq!(cfg.cycle_length(), 12);
    }

    #[test]
    fn builder_chaining() {
        let cfg = IndexConfig::new(12)
            .with_distribution(DistributionFamily::LogLogistic)
            .with_min_sample_size(8)
            .with_clamp_epsilon(1e-5)
            .with_cycle_length(4);

        assert_eq!(cfg.scale(), 12);
        assert_eq!(cfg.distribution(), DistributionFamily::LogLogistic);
        assert_eq!(cfg.min_sample_size(), 8);
        assert!((cfg.clamp_epsilon() - 1e-5).abs() < f64::EPSILON);
        assert_eq!(cfg.cycle_length(), 4);
    }

    #[test]
    fn validate_ok() {
        assert!(IndexConfig::new(1).validate().is_ok());
    }

    #[test]
    fn validate_min_sample_size_too_small() {
        assert!(IndexConfig::new(1).with_min_sample_size(1).validate().is_err());
        assert!(IndexConfig::new(1).with_min_sample_size(0).validate().is_err());
    }

    #[test]
    fn validate_bad_epsilon() {
        // At 0.0 (boundary, exclusive)
        assert!(IndexConfig::new(1).with_clamp_epsilon(0.0).validate().is_err());
        // At 0.5 (boundary, exclusive)
        assert!(IndexConfig::new(1).with_clamp_epsilon(0.5).validate().is_err());
        // NaN
        assert!(
            IndexConfig::new(1)
                .with_clamp_epsilon(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn validate_zero_cycle_length() {
        assert!(IndexConfig::new(1).with_cycle_length(0).validate().is_err());
    }
}
