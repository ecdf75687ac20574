//! Result type for index computation.

use std::collections::BTreeMap;

use crate::fit::FittedDistribution;

/// Reason a calendar group was skipped during fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The group held fewer defined values than the configured minimum.
    InsufficientData {
        /// Number of defined values in the group.
        n: usize,
        /// The configured minimum sample size.
        required: usize,
    },
    /// The fit failed: zero variance, all-zero sample, or estimator
    /// rejection.
    DegenerateDistribution,
}

/// A calendar group whose output periods were marked undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedGroup {
    /// The 1-indexed period label of the skipped group.
    pub period: u8,
    /// Why the group was skipped.
    pub reason: SkipReason,
}

/// The output of one index computation run.
///
/// Contains the standardized index series together with the intermediate
/// accumulated series, the per-period fitted distributions, and bookkeeping
/// about which calendar groups could not be fitted.
#[derive(Debug, Clone)]
pub struct IndexResult {
    /// Standardized index values (NaN = undefined).
    values: Vec<f64>,
    /// Rolling-window accumulations the fits were based on (NaN = undefined).
    accumulated: Vec<f64>,
    /// Fitted distribution per 1-indexed period label.
    fitted: BTreeMap<u8, FittedDistribution>,
    /// Groups that were skipped, with reasons.
    skipped: Vec<SkippedGroup>,
}

impl IndexResult {
    pub(crate) fn new(
        values: Vec<f64>,
        accumulated: Vec<f64>,
        fitted: BTreeMap<u8, FittedDistribution>,
        skipped: Vec<SkippedGroup>,
    ) -> Self {
        Self {
            values,
            accumulated,
            fitted,
            skipped,
        }
    }

    /// Returns the standardized index values as a slice (NaN = undefined).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes `self` and returns the owned index value vector.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Returns the accumulated series the fits were based on.
    pub fn accumulated(&self) -> &[f64] {
        &self.accumulated
    }

    /// Returns the fitted distribution for a period label, if any.
    pub fn fitted_for_period(&self, period: u8) -> Option<&FittedDistribution> {
        self.fitted.get(&period)
    }

    /// Returns all fitted distributions keyed by period label.
    pub fn fitted(&self) -> &BTreeMap<u8, FittedDistribution> {
        &self.fitted
    }

    /// Returns the groups that were skipped during fitting.
    pub fn skipped(&self) -> &[SkippedGroup] {
        &self.skipped
    }

    /// Returns the number of successfully fitted calendar groups.
    pub fn n_fitted(&self) -> usize {
        self.fitted.len()
    }
}
