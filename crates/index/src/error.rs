//! Error types for the caeli-index crate.

/// Error type for run-fatal conditions in index computation.
///
/// Per-group fitting failures are not errors: they are reported as
/// diagnostics on the result and only mark the affected periods undefined.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IndexError {
    /// Returned when the input series is empty.
    #[error("input series is empty")]
    EmptyInput,

    /// Returned when the accumulation scale is zero or exceeds the series
    /// length.
    #[error("invalid accumulation scale {scale} for series of length {len}")]
    InvalidScale {
        /// The offending accumulation scale.
        scale: usize,
        /// Length of the input series.
        len: usize,
    },

    /// Returned when the value and period slices differ in length.
    #[error("length mismatch: values has {values_len} elements, periods has {periods_len}")]
    LengthMismatch {
        /// Length of the values slice.
        values_len: usize,
        /// Length of the period-label slice.
        periods_len: usize,
    },

    /// Returned when a period label falls outside the seasonal cycle.
    #[error("invalid period label {period} (must be 1..={cycle_length})")]
    InvalidPeriod {
        /// The invalid period label.
        period: u8,
        /// The configured cycle length.
        cycle_length: u8,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_input() {
        assert_eq!(IndexError::EmptyInput.to_string(), "input series is empty");
    }

    #[test]
    fn error_invalid_scale() {
        let e = IndexError::InvalidScale { scale: 13, len: 12 };
        assert_eq!(
            e.to_string(),
            "invalid accumulation scale 13 for series of length 12"
        );
    }

    #[test]
    fn error_length_mismatch() {
        let e = IndexError::LengthMismatch {
            values_len: 10,
            periods_len: 9,
        };
        assert_eq!(
            e.to_string(),
            "length mismatch: values has 10 elements, periods has 9"
        );
    }

    #[test]
    fn error_invalid_period() {
        let e = IndexError::InvalidPeriod {
            period: 13,
            cycle_length: 12,
        };
        assert_eq!(e.to_string(), "invalid period label 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_config() {
        let e = IndexError::InvalidConfig {
            reason: "clamp_epsilon must be in (0, 0.5)".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: clamp_epsilon must be in (0, 0.5)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IndexError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IndexError>();
    }
}
