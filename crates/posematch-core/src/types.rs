//! Core data types for the PoseMatch system.
//!
//! This module defines the fundamental data structures used throughout the
//! PoseMatch ecosystem for representing captured body-landmark sequences.
//!
//! # Type Categories
//!
//! - **Landmark Types**: [`Landmark`], [`LandmarkIndex`], [`BodyRegion`]
//! - **Sequence Types**: [`Frame`], [`Video`]
//! - **Common Types**: [`Timestamp`]
//!
//! All coordinates are IEEE-754 double precision. `x` and `y` are nominally
//! screen-normalized to [0, 1] (not enforced), `z` is a signed depth in the
//! same scale. Landmarks, frames, and videos are value types: geometric
//! transforms always produce new values and never mutate their input.

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::POSE_LANDMARK_COUNT;

// =============================================================================
// Common Types
// =============================================================================

/// High-precision capture timestamp.
///
/// Carried on every [`Frame`]. The comparison engine pairs frames by index
/// rather than by time, so timestamps are informational for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp {
    /// Seconds since Unix epoch
    pub seconds: i64,
    /// Nanoseconds within the second
    pub nanos: u32,
}

impl Timestamp {
    /// Creates a new timestamp from seconds and nanoseconds.
    #[must_use]
    pub fn new(seconds: i64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Creates a timestamp from the current time.
    #[must_use]
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            seconds: now.timestamp(),
            nanos: now.timestamp_subsec_nanos(),
        }
    }

    /// Creates a timestamp from milliseconds since epoch, the resolution
    /// most capture pipelines report.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self {
            seconds: (millis / 1000) as i64,
            nanos: ((millis % 1000) * 1_000_000) as u32,
        }
    }

    /// Converts to `DateTime<Utc>`.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanos)
    }

    /// Returns the timestamp as total nanoseconds since epoch.
    #[must_use]
    pub fn as_nanos(&self) -> i128 {
        i128::from(self.seconds) * 1_000_000_000 + i128::from(self.nanos)
    }

    /// Returns the duration between two timestamps in seconds.
    #[must_use]
    pub fn duration_since(&self, earlier: &Self) -> f64 {
        let diff_nanos = self.as_nanos() - earlier.as_nanos();
        diff_nanos as f64 / 1_000_000_000.0
    }
}

// =============================================================================
// Landmark Types
// =============================================================================

/// Index of a body landmark following the MediaPipe 33-point convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum LandmarkIndex {
    /// Nose
    Nose = 0,
    /// Left eye (inner)
    LeftEyeInner = 1,
    /// Left eye
    LeftEye = 2,
    /// Left eye (outer)
    LeftEyeOuter = 3,
    /// Right eye (inner)
    RightEyeInner = 4,
    /// Right eye
    RightEye = 5,
    /// Right eye (outer)
    RightEyeOuter = 6,
    /// Left ear
    LeftEar = 7,
    /// Right ear
    RightEar = 8,
    /// Mouth (left corner)
    MouthLeft = 9,
    /// Mouth (right corner)
    MouthRight = 10,
    /// Left shoulder
    LeftShoulder = 11,
    /// Right shoulder
    RightShoulder = 12,
    /// Left elbow
    LeftElbow = 13,
    /// Right elbow
    RightElbow = 14,
    /// Left wrist
    LeftWrist = 15,
    /// Right wrist
    RightWrist = 16,
    /// Left pinky knuckle
    LeftPinky = 17,
    /// Right pinky knuckle
    RightPinky = 18,
    /// Left index knuckle
    LeftIndex = 19,
    /// Right index knuckle
    RightIndex = 20,
    /// Left thumb knuckle
    LeftThumb = 21,
    /// Right thumb knuckle
    RightThumb = 22,
    /// Left hip
    LeftHip = 23,
    /// Right hip
    RightHip = 24,
    /// Left knee
    LeftKnee = 25,
    /// Right knee
    RightKnee = 26,
    /// Left ankle
    LeftAnkle = 27,
    /// Right ankle
    RightAnkle = 28,
    /// Left heel
    LeftHeel = 29,
    /// Right heel
    RightHeel = 30,
    /// Left foot index (toe)
    LeftFootIndex = 31,
    /// Right foot index (toe)
    RightFootIndex = 32,
}

impl LandmarkIndex {
    /// Returns all landmark indices in order.
    #[must_use]
    pub fn all() -> &'static [Self; POSE_LANDMARK_COUNT] {
        &[
            Self::Nose,
            Self::LeftEyeInner,
            Self::LeftEye,
            Self::LeftEyeOuter,
            Self::RightEyeInner,
            Self::RightEye,
            Self::RightEyeOuter,
            Self::LeftEar,
            Self::RightEar,
            Self::MouthLeft,
            Self::MouthRight,
            Self::LeftShoulder,
            Self::RightShoulder,
            Self::LeftElbow,
            Self::RightElbow,
            Self::LeftWrist,
            Self::RightWrist,
            Self::LeftPinky,
            Self::RightPinky,
            Self::LeftIndex,
            Self::RightIndex,
            Self::LeftThumb,
            Self::RightThumb,
            Self::LeftHip,
            Self::RightHip,
            Self::LeftKnee,
            Self::RightKnee,
            Self::LeftAnkle,
            Self::RightAnkle,
            Self::LeftHeel,
            Self::RightHeel,
            Self::LeftFootIndex,
            Self::RightFootIndex,
        ]
    }

    /// Returns the landmark name as a string.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }

    /// Returns the body region this landmark belongs to.
    #[must_use]
    pub fn region(&self) -> BodyRegion {
        match *self as u8 {
            0..=10 => BodyRegion::Face,
            11..=16 => BodyRegion::Arm,
            17..=22 => BodyRegion::Hand,
            23..=24 => BodyRegion::Hip,
            _ => BodyRegion::Leg,
        }
    }
}

impl TryFrom<u8> for LandmarkIndex {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| CoreError::validation(format!("Invalid landmark index: {value}")))
    }
}

/// Coarse grouping of the skeleton used for per-region scoring weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BodyRegion {
    /// Face landmarks (indices 0-10)
    Face,
    /// Shoulders, elbows, wrists (11-16)
    Arm,
    /// Hand knuckles (17-22)
    Hand,
    /// Hips (23-24)
    Hip,
    /// Knees, ankles, feet (25-32)
    Leg,
}

impl BodyRegion {
    /// Returns the default scoring weight for landmarks in this region.
    ///
    /// Limbs dominate how closely a movement reads as "the same", so arms
    /// and legs weigh well above 1.0 while face detail weighs far below.
    #[must_use]
    pub fn default_weight(&self) -> f64 {
        match self {
            Self::Face => 0.3,
            Self::Arm => 1.5,
            Self::Hand => 0.8,
            Self::Hip => 1.2,
            Self::Leg => 1.8,
        }
    }
}

/// A single tracked body landmark with 3D position and optional visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Landmark {
    /// X coordinate (screen-normalized 0.0-1.0)
    pub x: f64,
    /// Y coordinate (screen-normalized 0.0-1.0)
    pub y: f64,
    /// Z coordinate (signed depth)
    pub z: f64,
    /// Detection confidence in [0.0, 1.0]; `None` means always visible
    pub visibility: Option<f64>,
}

impl Landmark {
    /// Creates a new landmark with no visibility value.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            visibility: None,
        }
    }

    /// Creates a new landmark with an explicit visibility value.
    #[must_use]
    pub fn with_visibility(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self {
            x,
            y,
            z,
            visibility: Some(visibility),
        }
    }

    /// Returns `true` if this landmark passes the visibility threshold.
    ///
    /// A landmark without a visibility value is always visible.
    #[must_use]
    pub fn is_visible(&self, threshold: f64) -> bool {
        self.visibility.map_or(true, |v| v >= threshold)
    }

    /// Calculates the 3D Euclidean distance to another landmark.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dz.mul_add(dz, dx.mul_add(dx, dy * dy)).sqrt()
    }

    /// Returns the coordinate-wise midpoint of two landmarks.
    ///
    /// The result carries no visibility value; it is a derived point, not a
    /// detection.
    #[must_use]
    pub fn midpoint(a: &Self, b: &Self) -> Self {
        Self::new(
            (a.x + b.x) / 2.0,
            (a.y + b.y) / 2.0,
            (a.z + b.z) / 2.0,
        )
    }
}

// =============================================================================
// Sequence Types
// =============================================================================

/// One timestamped snapshot of all tracked landmarks.
///
/// The landmark list is ordered by [`LandmarkIndex`]; a full pose has
/// [`POSE_LANDMARK_COUNT`] entries but shorter captures are legal and degrade
/// gracefully downstream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    /// Ordered landmark list
    pub landmarks: Vec<Landmark>,
    /// Capture timestamp
    pub timestamp: Timestamp,
}

impl Frame {
    /// Creates a new frame.
    #[must_use]
    pub fn new(landmarks: Vec<Landmark>, timestamp: Timestamp) -> Self {
        Self {
            landmarks,
            timestamp,
        }
    }

    /// Gets a landmark by index, if the frame extends that far.
    #[must_use]
    pub fn landmark(&self, index: LandmarkIndex) -> Option<&Landmark> {
        self.landmarks.get(index as usize)
    }

    /// Returns the number of landmarks in this frame.
    #[must_use]
    pub fn landmark_count(&self) -> usize {
        self.landmarks.len()
    }

    /// Returns the number of landmarks passing the visibility threshold.
    #[must_use]
    pub fn visible_landmark_count(&self, threshold: f64) -> usize {
        self.landmarks
            .iter()
            .filter(|lm| lm.is_visible(threshold))
            .count()
    }
}

/// An ordered sequence of frames representing one recording.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Video {
    /// Frames in capture order
    pub frames: Vec<Frame>,
}

impl Video {
    /// Creates a new video from frames in capture order.
    #[must_use]
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if the video has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the recording span in seconds (first to last capture
    /// timestamp), or 0.0 for videos with fewer than two frames.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        match (self.frames.first(), self.frames.last()) {
            (Some(first), Some(last)) if self.frames.len() > 1 => {
                last.timestamp.duration_since(&first.timestamp)
            }
            _ => 0.0,
        }
    }
}
