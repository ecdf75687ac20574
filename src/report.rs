//! JSON structures for fitted-parameter diagnostics.

use serde::Serialize;

use caeli_index::{FittedDistribution, IndexResult, SkipReason};

/// Top-level diagnostics output, one entry per computed scale.
#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    /// Index name ("spi" or "spei").
    pub index: String,
    /// Per-scale fitting summaries.
    pub scales: Vec<ScaleReport>,
}

/// Fitting summary for a single accumulation scale.
#[derive(Debug, Serialize)]
pub struct ScaleReport {
    pub scale: usize,
    pub n_fitted: usize,
    pub fitted: Vec<PeriodFit>,
    pub skipped: Vec<SkipEntry>,
}

/// Fitted parameters for one calendar period.
#[derive(Debug, Serialize)]
pub struct PeriodFit {
    pub period: u8,
    pub family: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prob_zero: Option<f64>,
    pub shape: f64,
    pub scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<f64>,
}

/// A calendar period whose fit was skipped.
#[derive(Debug, Serialize)]
pub struct SkipEntry {
    pub period: u8,
    pub reason: String,
}

impl ScaleReport {
    /// Summarise one computation run.
    pub fn from_result(scale: usize, result: &IndexResult) -> Self {
        let fitted = result
            .fitted()
            .iter()
            .map(|(&period, dist)| match dist {
                FittedDistribution::Gamma(zig) => PeriodFit {
                    period,
                    family: "gamma-zero-inflated",
                    prob_zero: Some(zig.prob_zero()),
                    shape: zig.params().shape(),
                    scale: zig.params().scale(),
                    location: None,
                },
                FittedDistribution::LogLogistic(ll) => PeriodFit {
                    period,
                    family: "log-logistic",
                    prob_zero: None,
                    shape: ll.shape(),
                    scale: ll.scale(),
                    location: Some(ll.location()),
                },
            })
            .collect();

        let skipped = result
            .skipped()
            .iter()
            .map(|s| SkipEntry {
                period: s.period,
                reason: match s.reason {
                    SkipReason::InsufficientData { n, required } => {
                        format!("insufficient data ({n} < {required})")
                    }
                    SkipReason::DegenerateDistribution => "degenerate distribution".to_string(),
                },
            })
            .collect();

        Self {
            scale,
            n_fitted: result.n_fitted(),
            fitted,
            skipped,
        }
    }
}
