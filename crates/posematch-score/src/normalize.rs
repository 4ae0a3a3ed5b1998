//! Frame normalization.
//!
//! Removes on-screen position, camera distance, and (optionally) facing
//! direction from a frame before it is compared, so that two people
//! performing the same movement in different parts of the frame score as
//! the same movement.
//!
//! Three transforms run in a fixed order - center, then scale, then
//! rotation - each gated by its [`NormalizationConfig`] flag. A transform
//! that cannot find the landmarks it needs skips silently: short frames are
//! expected input, not an error.

use posematch_core::utils;
use posematch_core::{Frame, Landmark, LandmarkIndex};

use crate::config::NormalizationConfig;

/// Applies the configured normalization transforms to one frame.
///
/// The input frame is never mutated; the result carries the original
/// timestamp.
#[must_use]
pub fn normalize_frame(frame: &Frame, config: &NormalizationConfig) -> Frame {
    let mut landmarks = frame.landmarks.clone();

    if config.center {
        if let Some(origin) = hip_midpoint(&landmarks) {
            landmarks = utils::translate(&landmarks, &origin);
        }
    }
    if config.scale {
        if let Some(width) = shoulder_width(&landmarks) {
            // scale() treats a zero width as degenerate and returns the
            // landmarks unchanged.
            landmarks = utils::scale(&landmarks, width);
        }
    }
    if config.rotation {
        if let Some(angle) = shoulder_angle(&landmarks) {
            landmarks = utils::rotate_y(&landmarks, -angle);
        }
    }

    Frame::new(landmarks, frame.timestamp)
}

fn landmark_pair(
    landmarks: &[Landmark],
    left: LandmarkIndex,
    right: LandmarkIndex,
) -> Option<(&Landmark, &Landmark)> {
    Some((
        landmarks.get(left as usize)?,
        landmarks.get(right as usize)?,
    ))
}

/// Midpoint of the two hip landmarks, if the frame reaches them.
fn hip_midpoint(landmarks: &[Landmark]) -> Option<Landmark> {
    let (left, right) = landmark_pair(landmarks, LandmarkIndex::LeftHip, LandmarkIndex::RightHip)?;
    Some(Landmark::midpoint(left, right))
}

/// Shoulder-to-shoulder distance, if the frame reaches the shoulders.
fn shoulder_width(landmarks: &[Landmark]) -> Option<f64> {
    let (left, right) = landmark_pair(
        landmarks,
        LandmarkIndex::LeftShoulder,
        LandmarkIndex::RightShoulder,
    )?;
    Some(left.distance_to(right))
}

/// Horizontal-plane angle of the shoulder line, if the frame reaches the
/// shoulders.
fn shoulder_angle(landmarks: &[Landmark]) -> Option<f64> {
    let (left, right) = landmark_pair(
        landmarks,
        LandmarkIndex::LeftShoulder,
        LandmarkIndex::RightShoulder,
    )?;
    Some((right.z - left.z).atan2(right.x - left.x))
}
