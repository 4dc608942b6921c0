//! Mood classification — from a PAD point to a named octant and intensity.
//!
//! Octants follow Mehrabian's temperament space; the sign of each axis picks
//! one of eight labels. Intensity splits the longest possible distance from
//! the origin, the cube diagonal √3, into three equal tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pad::{PadModel, SQRT_3};

/// Upper bound (inclusive) of the `Slightly` tier.
pub const SLIGHTLY_MAX: f32 = SQRT_3 / 3.0;

/// Upper bound (inclusive) of the `Moderately` tier.
pub const MODERATELY_MAX: f32 = 2.0 * SQRT_3 / 3.0;

/// Mood octant of PAD space, by the sign of (pleasure, arousal, dominance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PadMoodOctant {
    /// At least one axis is exactly zero (or not a number).
    Unknown,
    /// +P +A +D
    Exuberant,
    /// +P +A −D
    Dependent,
    /// +P −A +D
    Relaxed,
    /// +P −A −D
    Docile,
    /// −P −A −D
    Bored,
    /// −P −A +D
    Disdainful,
    /// −P +A −D
    Anxious,
    /// −P +A +D
    Hostile,
}

impl PadMoodOctant {
    /// Octant containing `pad`.
    #[must_use]
    pub fn of(pad: PadModel) -> Self {
        match (sign(pad.pleasure), sign(pad.arousal), sign(pad.dominance)) {
            (Some(true), Some(true), Some(true)) => Self::Exuberant,
            (Some(true), Some(true), Some(false)) => Self::Dependent,
            (Some(true), Some(false), Some(true)) => Self::Relaxed,
            (Some(true), Some(false), Some(false)) => Self::Docile,
            (Some(false), Some(false), Some(false)) => Self::Bored,
            (Some(false), Some(false), Some(true)) => Self::Disdainful,
            (Some(false), Some(true), Some(false)) => Self::Anxious,
            (Some(false), Some(true), Some(true)) => Self::Hostile,
            _ => Self::Unknown,
        }
    }

    /// Lowercase label, e.g. `"relaxed"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "neutral",
            Self::Exuberant => "exuberant",
            Self::Dependent => "dependent",
            Self::Relaxed => "relaxed",
            Self::Docile => "docile",
            Self::Bored => "bored",
            Self::Disdainful => "disdainful",
            Self::Anxious => "anxious",
            Self::Hostile => "hostile",
        }
    }
}

/// `Some(true)` for strictly positive, `Some(false)` for strictly negative,
/// `None` for zero and NaN.
fn sign(value: f32) -> Option<bool> {
    if value > 0.0 {
        Some(true)
    } else if value < 0.0 {
        Some(false)
    } else {
        None
    }
}

/// How far from neutral a mood is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoodIntensity {
    /// Distance from the origin up to √3/3.
    Slightly,
    /// Up to 2√3/3.
    Moderately,
    /// Beyond 2√3/3.
    Fully,
}

impl MoodIntensity {
    /// Tier for a point at `distance` from the origin. Ties go to the lower
    /// tier.
    #[must_use]
    pub fn from_distance(distance: f32) -> Self {
        if distance <= SLIGHTLY_MAX {
            Self::Slightly
        } else if distance <= MODERATELY_MAX {
            Self::Moderately
        } else {
            Self::Fully
        }
    }

    /// Lowercase label, e.g. `"moderately"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Slightly => "slightly",
            Self::Moderately => "moderately",
            Self::Fully => "fully",
        }
    }
}

/// A classified mood, e.g. "moderately relaxed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mood {
    /// Which octant the mood lies in.
    pub octant: PadMoodOctant,
    /// How far from neutral it is.
    pub intensity: MoodIntensity,
}

/// Classify a PAD point.
#[must_use]
pub fn classify(pad: &PadModel) -> Mood {
    Mood {
        octant: PadMoodOctant::of(*pad),
        intensity: MoodIntensity::from_distance(pad.norm()),
    }
}

impl PadModel {
    /// Classify this point; see [`classify`].
    #[must_use]
    pub fn to_mood(&self) -> Mood {
        classify(self)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.octant {
            PadMoodOctant::Unknown => f.write_str(self.octant.label()),
            octant => write!(f, "{} {}", self.intensity.label(), octant.label()),
        }
    }
}
