//! Comparison configuration.
//!
//! [`ComparisonConfig`] is the fully-resolved parameter set consumed by the
//! scoring engine: every field is always populated. Callers that only want
//! to tweak a few knobs send a [`ComparisonOverrides`] (all fields optional,
//! deserializable from JSON) and resolve it over the defaults.
//!
//! # Example
//!
//! ```rust
//! use posematch_score::config::{ComparisonConfig, ComparisonOverrides};
//!
//! let cfg = ComparisonConfig::default();
//! cfg.validate().expect("default config is valid");
//! assert!((cfg.position_weight - 0.6).abs() < 1e-12);
//!
//! let overrides: ComparisonOverrides =
//!     serde_json::from_str(r#"{ "angular_weight": 0.5 }"#).unwrap();
//! let cfg = overrides.resolve();
//! assert!((cfg.angular_weight - 0.5).abs() < 1e-12);
//! assert!((cfg.position_weight - 0.6).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use posematch_core::LandmarkIndex;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// NormalizationConfig
// ---------------------------------------------------------------------------

/// Which geometric normalizations run before two frames are compared.
///
/// The three transforms are independent; see
/// [`normalize_frame`](crate::normalize::normalize_frame) for their fixed
/// application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// Translate so the hip midpoint becomes the origin. Default: **true**.
    pub center: bool,
    /// Rescale so shoulder width becomes 1.0. Default: **true**.
    pub scale: bool,
    /// Rotate so the shoulder line faces the camera. Default: **false**,
    /// since most capture setups already film the subject head-on.
    pub rotation: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            center: true,
            scale: true,
            rotation: false,
        }
    }
}

// ---------------------------------------------------------------------------
// ComparisonConfig
// ---------------------------------------------------------------------------

/// Fully-resolved configuration for one video comparison.
///
/// Invalid values (negative weights, out-of-range thresholds) are accepted
/// as given; the engine clamps per-frame scores but otherwise computes with
/// whatever the caller supplied. Use [`ComparisonConfig::validate`] to
/// reject such configurations at the boundary instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Normalization transforms applied to every frame.
    pub normalization: NormalizationConfig,

    /// Per-landmark weights for the position metric, keyed by landmark
    /// index. Indices absent from the map weigh 1.0.
    pub landmark_weights: HashMap<u8, f64>,

    /// Blend weight of the position metric in the combined per-frame score.
    /// Default: **0.6**.
    pub position_weight: f64,

    /// Blend weight of the angular metric in the combined per-frame score.
    /// Default: **0.4**.
    pub angular_weight: f64,

    /// Minimum visibility for a landmark to participate in scoring.
    /// Default: **0.5**.
    pub visibility_threshold: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationConfig::default(),
            landmark_weights: default_landmark_weights(),
            position_weight: 0.6,
            angular_weight: 0.4,
            visibility_threshold: 0.5,
        }
    }
}

impl ComparisonConfig {
    /// Returns the position-metric weight for a landmark index.
    ///
    /// Indices outside the weight map (including indices past the canonical
    /// skeleton) weigh 1.0.
    #[must_use]
    pub fn weight_for(&self, index: usize) -> f64 {
        u8::try_from(index)
            .ok()
            .and_then(|key| self.landmark_weights.get(&key))
            .copied()
            .unwrap_or(1.0)
    }

    /// Opt-in sanity check for caller-supplied configurations.
    ///
    /// Rejects negative weights and out-of-range thresholds. Blend weights
    /// that do not sum to 1.0 are deliberately allowed; the combined score
    /// scale is the caller's contract.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (&index, &value) in &self.landmark_weights {
            if value < 0.0 {
                return Err(ConfigError::NegativeLandmarkWeight { index, value });
            }
        }
        if self.position_weight < 0.0 {
            return Err(ConfigError::NegativeMetricWeight {
                name: "position",
                value: self.position_weight,
            });
        }
        if self.angular_weight < 0.0 {
            return Err(ConfigError::NegativeMetricWeight {
                name: "angular",
                value: self.angular_weight,
            });
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                value: self.visibility_threshold,
            });
        }
        Ok(())
    }
}

/// The default per-landmark weight table, one entry per canonical landmark,
/// derived from each landmark's body region.
#[must_use]
pub fn default_landmark_weights() -> HashMap<u8, f64> {
    LandmarkIndex::all()
        .iter()
        .map(|&index| (index as u8, index.region().default_weight()))
        .collect()
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

/// Partial normalization flags; unset fields keep their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationOverrides {
    /// Override for [`NormalizationConfig::center`]
    pub center: Option<bool>,
    /// Override for [`NormalizationConfig::scale`]
    pub scale: Option<bool>,
    /// Override for [`NormalizationConfig::rotation`]
    pub rotation: Option<bool>,
}

impl NormalizationOverrides {
    fn resolve(self) -> NormalizationConfig {
        let defaults = NormalizationConfig::default();
        NormalizationConfig {
            center: self.center.unwrap_or(defaults.center),
            scale: self.scale.unwrap_or(defaults.scale),
            rotation: self.rotation.unwrap_or(defaults.rotation),
        }
    }
}

/// Partial comparison configuration as sent by callers.
///
/// Every field is optional; [`ComparisonOverrides::resolve`] merges the
/// supplied fields over [`ComparisonConfig::default`] field by field. A
/// supplied `landmark_weights` map replaces the default table wholesale
/// (absent indices then weigh 1.0).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonOverrides {
    /// Normalization flag overrides
    pub normalization: Option<NormalizationOverrides>,
    /// Replacement per-landmark weight table
    pub landmark_weights: Option<HashMap<u8, f64>>,
    /// Override for [`ComparisonConfig::position_weight`]
    pub position_weight: Option<f64>,
    /// Override for [`ComparisonConfig::angular_weight`]
    pub angular_weight: Option<f64>,
    /// Override for [`ComparisonConfig::visibility_threshold`]
    pub visibility_threshold: Option<f64>,
}

impl ComparisonOverrides {
    /// Resolves this partial configuration against the defaults.
    #[must_use]
    pub fn resolve(self) -> ComparisonConfig {
        let defaults = ComparisonConfig::default();
        ComparisonConfig {
            normalization: self
                .normalization
                .map_or_else(NormalizationConfig::default, NormalizationOverrides::resolve),
            landmark_weights: self.landmark_weights.unwrap_or(defaults.landmark_weights),
            position_weight: self.position_weight.unwrap_or(defaults.position_weight),
            angular_weight: self.angular_weight.unwrap_or(defaults.angular_weight),
            visibility_threshold: self
                .visibility_threshold
                .unwrap_or(defaults.visibility_threshold),
        }
    }
}
