//! Distribution fitting and quantile functions for standardized drought
//! indices.
//!
//! Two parametric families cover the two index classes:
//!
//! - [`ZeroInflatedGamma`] for precipitation-only accumulations (SPI):
//!   an empirical point mass at zero plus a two-parameter Gamma fitted to
//!   the positive values via the Thom maximum-likelihood approximation.
//! - [`LogLogisticParams`] for water-balance accumulations (SPEI): a
//!   three-parameter log-logistic fitted by unbiased probability-weighted
//!   moments, tolerant of skew and negative support.
//!
//! [`inv_normal_cdf`] maps cumulative probabilities to standard-normal
//! quantiles (the index values) with the Abramowitz & Stegun rational
//! approximation.

mod error;
pub(crate) mod gamma;
mod log_logistic;
mod normal;

pub use error::DistError;
pub use gamma::{GammaParams, ZeroInflatedGamma, fit_gamma_thom};
pub use log_logistic::{LogLogisticParams, fit_log_logistic_pwm};
pub use normal::inv_normal_cdf;
