//! Video comparison and scoring.
//!
//! This module scores how closely a comparison recording reproduces a
//! reference recording. Frames are paired by index, normalized
//! independently, and scored on two per-frame metrics plus one per-video
//! metric:
//!
//! - **Position score**: visibility-filtered, weighted mean distance between
//!   corresponding landmarks, mapped through an exponential decay. Distance
//!   zero scores 100; half a shoulder-width of mean error scores about 37.
//! - **Angular score**: mean absolute difference over six fixed joint
//!   angles (elbows, knees, hips), mapped through a linear decay over the
//!   0-180 degree range.
//! - **Timing score**: ratio of the two recordings' frame counts.
//!
//! Per-frame position and angular scores blend into one combined score per
//! frame; the overall score is the mean of the combined scores. Timing is
//! reported in the breakdown but deliberately kept out of the overall mean.
//!
//! Everything here is a pure function of its inputs: no state, no I/O, and
//! no failure paths. Sparse or degenerate input degrades to documented
//! neutral values.

use serde::{Deserialize, Serialize};
use tracing::debug;

use posematch_core::utils;
use posematch_core::{Frame, Landmark, LandmarkIndex, Video, POSE_LANDMARK_COUNT};

use crate::config::ComparisonConfig;
use crate::normalize::normalize_frame;

/// Decay constant of the position metric. A mean normalized distance of 0.5
/// (half a shoulder-width) scores about 37.
const POSITION_DECAY: f64 = 2.0;

/// Full range of a joint angle in degrees.
const MAX_JOINT_ANGLE_DEG: f64 = 180.0;

/// The six scored joints as landmark-index triples, vertex in the middle.
///
/// The hip entries use shoulder-hip-knee rather than a true hip-flexion
/// triple, so the shoulders serve double duty with the elbow entries.
const SCORED_JOINTS: [[LandmarkIndex; 3]; 6] = [
    [
        LandmarkIndex::LeftShoulder,
        LandmarkIndex::LeftElbow,
        LandmarkIndex::LeftWrist,
    ],
    [
        LandmarkIndex::RightShoulder,
        LandmarkIndex::RightElbow,
        LandmarkIndex::RightWrist,
    ],
    [
        LandmarkIndex::LeftHip,
        LandmarkIndex::LeftKnee,
        LandmarkIndex::LeftAnkle,
    ],
    [
        LandmarkIndex::RightHip,
        LandmarkIndex::RightKnee,
        LandmarkIndex::RightAnkle,
    ],
    [
        LandmarkIndex::LeftShoulder,
        LandmarkIndex::LeftHip,
        LandmarkIndex::LeftKnee,
    ],
    [
        LandmarkIndex::RightShoulder,
        LandmarkIndex::RightHip,
        LandmarkIndex::RightKnee,
    ],
];

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Population statistics over the combined per-frame scores.
///
/// All fields are 0.0 when no frames were compared.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest frame score
    pub min: f64,
    /// Largest frame score
    pub max: f64,
    /// Population variance (divide by `n`, not `n - 1`)
    pub variance: f64,
}

impl ScoreStatistics {
    /// Computes statistics over a score sequence; all zeros when empty.
    #[must_use]
    pub fn from_scores(scores: &[f64]) -> Self {
        if scores.is_empty() {
            return Self::default();
        }
        Self {
            mean: utils::mean(scores),
            min: scores.iter().copied().fold(f64::INFINITY, f64::min),
            max: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            variance: utils::population_variance(scores),
        }
    }
}

/// Per-metric averages accompanying the overall score.
///
/// `position_score` and `angular_score` are means of the per-frame
/// standalone scores; they are not re-clamped after averaging. The timing
/// score is computed once from the original (untruncated) frame counts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Mean per-frame position score
    pub position_score: f64,
    /// Mean per-frame angular score
    pub angular_score: f64,
    /// Length similarity of the two recordings
    pub timing_score: f64,
    /// Statistics over the combined frame scores
    pub statistics: ScoreStatistics,
}

/// Result of comparing one video pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Mean combined frame score, nominally 0-100 with default blend weights
    pub overall_score: f64,
    /// Combined score per compared frame pair, in frame order
    pub frame_scores: Vec<f64>,
    /// Per-metric averages and statistics
    pub breakdown: ScoreBreakdown,
}

// ---------------------------------------------------------------------------
// Per-frame metrics
// ---------------------------------------------------------------------------

/// Scores landmark position agreement between two (already normalized)
/// frames.
///
/// Landmark pairs where either side fails the visibility threshold are
/// skipped. Returns 0.0 when no pair qualifies (including when either frame
/// is empty); otherwise `100 * exp(-2 * weighted mean distance)`, clamped
/// to [0, 100].
#[must_use]
pub fn position_score(reference: &Frame, comparison: &Frame, config: &ComparisonConfig) -> f64 {
    let paired = reference.landmark_count().min(comparison.landmark_count());
    let threshold = config.visibility_threshold;

    let mut weighted_distance = 0.0;
    let mut total_weight = 0.0;
    for index in 0..paired {
        let (r, c) = (&reference.landmarks[index], &comparison.landmarks[index]);
        if !r.is_visible(threshold) || !c.is_visible(threshold) {
            continue;
        }
        let weight = config.weight_for(index);
        weighted_distance += r.distance_to(c) * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return 0.0;
    }
    let mean_distance = weighted_distance / total_weight;
    (100.0 * (-POSITION_DECAY * mean_distance).exp()).clamp(0.0, 100.0)
}

/// Scores joint-angle agreement between two (already normalized) frames.
///
/// Angular comparison only applies to full skeletons: either frame below
/// [`POSE_LANDMARK_COUNT`] landmarks scores 0.0. A joint participates only
/// when all three of its landmarks pass the visibility threshold in both
/// frames; the mean absolute angle difference (0.0 when no joint
/// participates) maps linearly from 0-180 degrees onto 100-0.
#[must_use]
pub fn angular_score(reference: &Frame, comparison: &Frame, config: &ComparisonConfig) -> f64 {
    if reference.landmark_count() < POSE_LANDMARK_COUNT
        || comparison.landmark_count() < POSE_LANDMARK_COUNT
    {
        return 0.0;
    }

    let threshold = config.visibility_threshold;
    let mut difference_sum = 0.0;
    let mut joint_count = 0u32;
    for joint in &SCORED_JOINTS {
        let (Some(r), Some(c)) = (
            visible_triple(reference, joint, threshold),
            visible_triple(comparison, joint, threshold),
        ) else {
            continue;
        };

        let reference_angle = utils::joint_angle_deg(r[0], r[1], r[2]);
        let comparison_angle = utils::joint_angle_deg(c[0], c[1], c[2]);
        difference_sum += (reference_angle - comparison_angle).abs();
        joint_count += 1;
    }

    let mean_difference = if joint_count == 0 {
        0.0
    } else {
        difference_sum / f64::from(joint_count)
    };
    (100.0 * (1.0 - mean_difference / MAX_JOINT_ANGLE_DEG)).clamp(0.0, 100.0)
}

/// The joint's three landmarks, provided all of them pass the visibility
/// threshold.
fn visible_triple<'a>(
    frame: &'a Frame,
    joint: &[LandmarkIndex; 3],
    threshold: f64,
) -> Option<[&'a Landmark; 3]> {
    let first = frame.landmark(joint[0])?;
    let vertex = frame.landmark(joint[1])?;
    let last = frame.landmark(joint[2])?;

    (first.is_visible(threshold) && vertex.is_visible(threshold) && last.is_visible(threshold))
        .then_some([first, vertex, last])
}

// ---------------------------------------------------------------------------
// Per-video metrics
// ---------------------------------------------------------------------------

/// Scores how closely two recordings match in length.
///
/// `min / max * 100` over the original frame counts; 0.0 when either
/// recording is empty.
#[must_use]
pub fn timing_score(reference_frames: usize, comparison_frames: usize) -> f64 {
    if reference_frames == 0 || comparison_frames == 0 {
        return 0.0;
    }
    let shorter = reference_frames.min(comparison_frames) as f64;
    let longer = reference_frames.max(comparison_frames) as f64;
    shorter / longer * 100.0
}

/// Compares a comparison video against a reference video.
///
/// Frames are paired by index up to the shorter video's length; each frame
/// of a pair is normalized independently before scoring. An empty pairing
/// (either video has no frames) produces an all-zero result with an empty
/// `frame_scores` list.
///
/// The combined per-frame score is
/// `position * position_weight + angular * angular_weight`: a weighted sum
/// that is intentionally not re-normalized, so blend weights summing past
/// 1.0 produce scores past the nominal 0-100 range.
#[must_use]
pub fn compare_videos(
    reference: &Video,
    comparison: &Video,
    config: &ComparisonConfig,
) -> ScoringResult {
    let paired = reference.frame_count().min(comparison.frame_count());
    debug!(
        reference_frames = reference.frame_count(),
        comparison_frames = comparison.frame_count(),
        paired,
        "comparing videos"
    );
    if paired == 0 {
        return ScoringResult::default();
    }

    let mut frame_scores = Vec::with_capacity(paired);
    let mut position_sum = 0.0;
    let mut angular_sum = 0.0;
    for index in 0..paired {
        let r = normalize_frame(&reference.frames[index], &config.normalization);
        let c = normalize_frame(&comparison.frames[index], &config.normalization);

        let position = position_score(&r, &c, config);
        let angular = angular_score(&r, &c, config);
        position_sum += position;
        angular_sum += angular;
        frame_scores.push(position * config.position_weight + angular * config.angular_weight);
    }

    let statistics = ScoreStatistics::from_scores(&frame_scores);
    let result = ScoringResult {
        overall_score: statistics.mean,
        frame_scores,
        breakdown: ScoreBreakdown {
            position_score: position_sum / paired as f64,
            angular_score: angular_sum / paired as f64,
            timing_score: timing_score(reference.frame_count(), comparison.frame_count()),
            statistics,
        },
    };
    debug!(overall_score = result.overall_score, "comparison finished");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use posematch_core::Timestamp;

    fn frame_of(landmarks: Vec<Landmark>) -> Frame {
        Frame::new(landmarks, Timestamp::from_millis(0))
    }

    /// A full skeleton spread along all three axes.
    fn skeleton() -> Frame {
        frame_of(
            (0..33)
                .map(|i| {
                    Landmark::with_visibility(
                        f64::from(i) * 0.02,
                        f64::from(i) * 0.015,
                        f64::from(i) * 0.01,
                        1.0,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn position_score_identical_frames_is_100() {
        let config = ComparisonConfig::default();
        let frame = skeleton();

        assert!((position_score(&frame, &frame, &config) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn position_score_known_distance() {
        let config = ComparisonConfig::default();
        let reference = frame_of(vec![Landmark::new(0.0, 0.0, 0.0)]);
        let comparison = frame_of(vec![Landmark::new(0.5, 0.0, 0.0)]);

        // Mean distance 0.5 under the exponential decay: 100 * e^-1.
        let expected = 100.0 * (-1.0f64).exp();
        assert!((position_score(&reference, &comparison, &config) - expected).abs() < 1e-9);
    }

    #[test]
    fn position_score_skips_occluded_pairs() {
        let config = ComparisonConfig::default();
        // Landmark 0 is occluded on one side and wildly wrong; landmark 1
        // is visible and exact. Only landmark 1 may count.
        let reference = frame_of(vec![
            Landmark::with_visibility(9.0, 9.0, 9.0, 0.1),
            Landmark::with_visibility(0.2, 0.2, 0.0, 0.9),
        ]);
        let comparison = frame_of(vec![
            Landmark::with_visibility(0.0, 0.0, 0.0, 0.9),
            Landmark::with_visibility(0.2, 0.2, 0.0, 0.9),
        ]);

        assert!((position_score(&reference, &comparison, &config) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn position_score_empty_frames_is_zero() {
        let config = ComparisonConfig::default();
        let empty = frame_of(Vec::new());

        assert_eq!(position_score(&empty, &empty, &config), 0.0);
        assert_eq!(position_score(&empty, &skeleton(), &config), 0.0);
    }

    #[test]
    fn angular_score_requires_full_skeleton() {
        let config = ComparisonConfig::default();
        let short = frame_of(vec![Landmark::new(0.0, 0.0, 0.0); 32]);

        assert_eq!(angular_score(&short, &skeleton(), &config), 0.0);
        assert_eq!(angular_score(&skeleton(), &short, &config), 0.0);
    }

    #[test]
    fn angular_score_identical_frames_is_100() {
        let config = ComparisonConfig::default();
        let frame = skeleton();

        assert!((angular_score(&frame, &frame, &config) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn angular_score_detects_bent_elbow() {
        let config = ComparisonConfig::default();
        let reference = skeleton();

        // Straighten vs. bend the left elbow: shoulder 11, elbow 13,
        // wrist 15 arranged collinear in one frame, at a right angle in the
        // other. All other joints stay identical.
        let mut straight = reference.clone();
        straight.landmarks[11] = Landmark::with_visibility(0.0, 0.0, 0.0, 1.0);
        straight.landmarks[13] = Landmark::with_visibility(0.0, 0.2, 0.0, 1.0);
        straight.landmarks[15] = Landmark::with_visibility(0.0, 0.4, 0.0, 1.0);

        let mut bent = straight.clone();
        bent.landmarks[15] = Landmark::with_visibility(0.2, 0.2, 0.0, 1.0);

        let score = angular_score(&straight, &bent, &config);
        // One of six joints differs by 90 degrees: mean difference 15.
        let expected = 100.0 * (1.0 - 15.0 / 180.0);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn timing_score_ratios() {
        assert_eq!(timing_score(0, 0), 0.0);
        assert_eq!(timing_score(5, 0), 0.0);
        assert!((timing_score(4, 4) - 100.0).abs() < 1e-12);
        assert!((timing_score(3, 1) - 100.0 / 3.0).abs() < 1e-9);
        assert!((timing_score(1, 3) - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn statistics_from_scores() {
        let stats = ScoreStatistics::from_scores(&[80.0, 90.0, 100.0]);

        assert!((stats.mean - 90.0).abs() < 1e-9);
        assert!((stats.min - 80.0).abs() < 1e-12);
        assert!((stats.max - 100.0).abs() < 1e-12);
        assert!((stats.variance - 200.0 / 3.0).abs() < 1e-9);

        assert_eq!(ScoreStatistics::from_scores(&[]), ScoreStatistics::default());
    }
}
