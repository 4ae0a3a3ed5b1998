//! # PoseMatch Core
//!
//! Core types and utilities for the PoseMatch pose-sequence comparison system.
//!
//! This crate provides the foundational building blocks used throughout the
//! PoseMatch ecosystem, including:
//!
//! - **Core Data Types**: [`Landmark`], [`Frame`], and [`Video`] for
//!   representing captured body-landmark sequences, plus [`LandmarkIndex`]
//!   and [`BodyRegion`] for addressing the 33-point MediaPipe skeleton.
//!
//! - **Error Types**: Boundary error handling via the [`error`] module.
//!   Geometric operations themselves never fail; errors only arise when
//!   converting or validating caller-supplied values.
//!
//! - **Utilities**: Geometric primitives (translation, scaling, rotation,
//!   joint angles) and summary statistics used by the scoring engine.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization via serde
//!
//! ## Example
//!
//! ```rust
//! use posematch_core::{Landmark, DEFAULT_VISIBILITY_THRESHOLD};
//!
//! // A landmark with no visibility value is always considered visible.
//! let implicit = Landmark::new(0.5, 0.3, -0.1);
//! assert!(implicit.is_visible(DEFAULT_VISIBILITY_THRESHOLD));
//!
//! let occluded = Landmark::with_visibility(0.5, 0.3, -0.1, 0.2);
//! assert!(!occluded.is_visible(DEFAULT_VISIBILITY_THRESHOLD));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types at the crate root
pub use error::{CoreError, CoreResult};
pub use types::{BodyRegion, Frame, Landmark, LandmarkIndex, Timestamp, Video};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of landmarks in a full pose (MediaPipe convention)
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Default confidence threshold for landmark visibility
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Prelude module for convenient imports.
///
/// ```rust
/// use posematch_core::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{BodyRegion, Frame, Landmark, LandmarkIndex, Timestamp, Video};
    pub use crate::{DEFAULT_VISIBILITY_THRESHOLD, POSE_LANDMARK_COUNT};
}
