//! Virtual Emotion Center (VEC) — the combined pull of all active emotions.
//!
//! The VEC is a point in PAD space with an intensity equal to the average
//! intensity of the active emotions (Gebhard, 2005, §3.2). If no emotions are
//! active there is no VEC, and the mood is not influenced by emotions at all;
//! that is a different situation from a VEC at the origin with zero strength.

use serde::{Deserialize, Serialize};

use crate::bounded::Intensity;
use crate::emotion::EmotionAndIntensity;
use crate::error::{AlmaError, Result};
use crate::pad::PadModel;

/// Aggregate of the currently active emotions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VirtualEmotionCenter {
    /// Where the active emotions pull the mood, each axis clamped to [-1, 1].
    pub center: PadModel,
    /// Mean intensity of the contributing emotions.
    pub intensity: Intensity,
}

impl VirtualEmotionCenter {
    /// Build a VEC directly.
    #[must_use]
    pub const fn new(center: PadModel, intensity: Intensity) -> Self {
        Self { center, intensity }
    }

    /// Reduce a set of active emotions to one VEC.
    ///
    /// PAD coordinates are summed per axis without weighting, and the
    /// intensities are averaged. Saturation is by clamping: each axis to
    /// [-1, 1], the mean intensity to [0, 1].
    ///
    /// # Errors
    /// Returns [`AlmaError::EmptyAggregation`] if `active` is empty.
    pub fn aggregate(active: &[EmotionAndIntensity]) -> Result<Self> {
        if active.is_empty() {
            return Err(AlmaError::EmptyAggregation);
        }

        let summed: PadModel = active.iter().map(|e| e.emotion.to_pad()).sum();
        let total_intensity: f32 = active.iter().map(|e| e.intensity.value()).sum();
        #[allow(clippy::cast_precision_loss)]
        let mean_intensity = total_intensity / active.len() as f32;

        Ok(Self {
            center: summed.clamped(),
            intensity: Intensity::clamped(mean_intensity),
        })
    }
}
