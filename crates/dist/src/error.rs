//! Error types for the caeli-dist crate.

/// Error type for all fallible operations in the caeli-dist crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DistError {
    /// Returned when a gamma distribution cannot be constructed.
    ///
    /// The `message` field is a `String` (not a statrs error type) because
    /// statrs errors do not implement `Clone`.
    #[error("gamma construction failed (shape={shape}, scale={scale}): {message}")]
    GammaConstruction {
        /// Shape parameter that caused the failure.
        shape: f64,
        /// Scale parameter that caused the failure.
        scale: f64,
        /// Description of the failure.
        message: String,
    },

    /// Returned when a zero-inflation mass lies outside `[0, 1)`.
    #[error("zero-inflation mass must be in [0, 1), got {prob_zero}")]
    InvalidZeroMass {
        /// The rejected probability mass.
        prob_zero: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_gamma_construction() {
        let e = DistError::GammaConstruction {
            shape: -1.0,
            scale: 2.0,
            message: "shape must be positive".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "gamma construction failed (shape=-1, scale=2): shape must be positive"
        );
    }

    #[test]
    fn error_invalid_zero_mass() {
        let e = DistError::InvalidZeroMass { prob_zero: 1.5 };
        assert_eq!(
            e.to_string(),
            "zero-inflation mass must be in [0, 1), got 1.5"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DistError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DistError>();
    }
}
