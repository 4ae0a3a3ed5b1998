//! Error types for the scoring crate.
//!
//! The comparison pipeline never fails; [`ConfigError`] is produced only by
//! the opt-in [`ComparisonConfig::validate`](crate::config::ComparisonConfig::validate)
//! check, for callers that want to reject suspicious configurations up front.

use thiserror::Error;

/// Configuration sanity-check failures.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// A per-landmark weight is negative
    #[error("negative weight {value} for landmark index {index}")]
    NegativeLandmarkWeight {
        /// Landmark index carrying the bad weight
        index: u8,
        /// The offending weight
        value: f64,
    },

    /// A metric blend weight is negative
    #[error("negative {name} weight: {value}")]
    NegativeMetricWeight {
        /// Which blend weight failed
        name: &'static str,
        /// The offending weight
        value: f64,
    },

    /// The visibility threshold is outside [0, 1]
    #[error("visibility threshold must be in [0.0, 1.0], got {value}")]
    ThresholdOutOfRange {
        /// The offending threshold
        value: f64,
    },
}
