//! # PoseMatch Score
//!
//! The PoseMatch comparison engine: scores how closely a captured
//! body-landmark sequence reproduces a reference sequence, independent of
//! on-screen position, camera distance, and (optionally) facing direction.
//!
//! The engine is a pure function of two decoded [`Video`]s and a resolved
//! [`ComparisonConfig`]. It owns no network, storage, or process state, and
//! it never fails: sparse frames, occluded landmarks, and degenerate
//! geometry all degrade to documented neutral scores. Calls are independent
//! and may run concurrently.
//!
//! - [`config`]: resolved configuration plus partial overrides
//! - [`normalize`]: per-frame geometric normalization
//! - [`compare`]: per-frame metrics, aggregation, and result types
//!
//! ## Example
//!
//! ```rust
//! use posematch_core::{Frame, Landmark, Timestamp, Video};
//! use posematch_score::{compare_videos, ComparisonConfig};
//!
//! let frame = Frame::new(
//!     (0..33)
//!         .map(|i| Landmark::new(f64::from(i) * 0.02, f64::from(i) * 0.01, 0.0))
//!         .collect(),
//!     Timestamp::from_millis(0),
//! );
//! let video = Video::new(vec![frame]);
//!
//! let result = compare_videos(&video, &video.clone(), &ComparisonConfig::default());
//! assert!(result.overall_score > 99.0);
//! assert_eq!(result.frame_scores.len(), 1);
//! ```
//!
//! [`Video`]: posematch_core::Video

#![forbid(unsafe_code)]

pub mod compare;
pub mod config;
pub mod error;
pub mod normalize;

// Re-export the engine surface at the crate root
pub use compare::{
    angular_score, compare_videos, position_score, timing_score, ScoreBreakdown, ScoreStatistics,
    ScoringResult,
};
pub use config::{
    ComparisonConfig, ComparisonOverrides, NormalizationConfig, NormalizationOverrides,
};
pub use error::ConfigError;
pub use normalize::normalize_frame;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
