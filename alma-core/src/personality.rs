//! OCEAN (Big Five) personality and its projection to a default mood.
//!
//! The mapping from traits to PAD follows Mehrabian (1996), as used by ALMA
//! (Gebhard, 2005):
//!
//! ```text
//! pleasure  = 0.21·E + 0.59·A + 0.19·N
//! arousal   = 0.15·O + 0.30·A − 0.57·N
//! dominance = 0.25·O + 0.17·C + 0.60·E − 0.32·A
//! ```
//!
//! For traits in [-1, 1] every output stays in [-1, 1], so no clamping is
//! applied to the result.

use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

use crate::bounded::TraitScalar;
use crate::error::Result;
use crate::pad::PadModel;

/// Five-factor personality, each trait in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OceanModel {
    /// Curious and inventive (+1) vs. consistent and cautious (-1).
    pub openness: TraitScalar,
    /// Organized and dependable (+1) vs. easy-going and careless (-1).
    pub conscientiousness: TraitScalar,
    /// Outgoing and energetic (+1) vs. solitary and reserved (-1).
    pub extraversion: TraitScalar,
    /// Friendly and compassionate (+1) vs. critical and rational (-1).
    pub agreeableness: TraitScalar,
    /// Emotionally stable (+1) vs. sensitive and nervous (-1).
    pub neuroticism: TraitScalar,
}

impl OceanModel {
    /// All traits at zero.
    pub const NEUTRAL: Self = Self {
        openness: TraitScalar::ZERO,
        conscientiousness: TraitScalar::ZERO,
        extraversion: TraitScalar::ZERO,
        agreeableness: TraitScalar::ZERO,
        neuroticism: TraitScalar::ZERO,
    };

    /// Build a personality from raw trait values, validating each one.
    ///
    /// # Errors
    /// Returns [`crate::AlmaError::RangeViolation`] for the first trait
    /// outside [-1, 1].
    pub fn new(
        openness: f32,
        conscientiousness: f32,
        extraversion: f32,
        agreeableness: f32,
        neuroticism: f32,
    ) -> Result<Self> {
        Ok(Self::from_traits(
            TraitScalar::new(openness)?,
            TraitScalar::new(conscientiousness)?,
            TraitScalar::new(extraversion)?,
            TraitScalar::new(agreeableness)?,
            TraitScalar::new(neuroticism)?,
        ))
    }

    /// Build a personality from already-validated traits.
    #[must_use]
    pub const fn from_traits(
        openness: TraitScalar,
        conscientiousness: TraitScalar,
        extraversion: TraitScalar,
        agreeableness: TraitScalar,
        neuroticism: TraitScalar,
    ) -> Self {
        Self {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        }
    }

    /// Multiply every trait by `factor`, clamping each result to [-1, 1].
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        self.map(|t| t * factor)
    }

    /// Add two personalities trait by trait, clamping each result to [-1, 1].
    ///
    /// Together with [`OceanModel::scale`] this supports weighted blends of
    /// archetypes, e.g. `a.scale(0.7).combine(b.scale(0.3))`.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self::from_traits(
            sum_clamped(self.openness, other.openness),
            sum_clamped(self.conscientiousness, other.conscientiousness),
            sum_clamped(self.extraversion, other.extraversion),
            sum_clamped(self.agreeableness, other.agreeableness),
            sum_clamped(self.neuroticism, other.neuroticism),
        )
    }

    /// Project the personality to the PAD point its mood rests at.
    #[must_use]
    pub fn to_default_mood(&self) -> PadModel {
        let o = self.openness.value();
        let c = self.conscientiousness.value();
        let e = self.extraversion.value();
        let a = self.agreeableness.value();
        let n = self.neuroticism.value();

        PadModel::new(
            0.21 * e + 0.59 * a + 0.19 * n,
            0.15 * o + 0.30 * a - 0.57 * n,
            0.25 * o + 0.17 * c + 0.60 * e - 0.32 * a,
        )
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::from_traits(
            TraitScalar::clamped(f(self.openness.value())),
            TraitScalar::clamped(f(self.conscientiousness.value())),
            TraitScalar::clamped(f(self.extraversion.value())),
            TraitScalar::clamped(f(self.agreeableness.value())),
            TraitScalar::clamped(f(self.neuroticism.value())),
        )
    }
}

fn sum_clamped(a: TraitScalar, b: TraitScalar) -> TraitScalar {
    TraitScalar::clamped(a.value() + b.value())
}

/// Default moods for a batch of personalities, in the same order.
#[must_use]
pub fn default_moods(personalities: &[OceanModel]) -> Vec<PadModel> {
    personalities.iter().map(OceanModel::to_default_mood).collect()
}

impl Mul<f32> for OceanModel {
    type Output = Self;

    fn mul(self, factor: f32) -> Self {
        self.scale(factor)
    }
}

impl Add for OceanModel {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs)
    }
}

impl fmt::Display for OceanModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "O:{}, C:{}, E:{}, A:{}, N:{}",
            self.openness,
            self.conscientiousness,
            self.extraversion,
            self.agreeableness,
            self.neuroticism
        )
    }
}
