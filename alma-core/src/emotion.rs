//! Discrete emotion categories and their fixed positions in PAD space.
//!
//! The 24 categories are the OCC emotions used by ALMA (Gebhard, 2005),
//! plus `None`. The table is an exhaustive `match`, so adding a category
//! without a PAD entry does not compile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bounded::Intensity;
use crate::error::{AlmaError, Result};
use crate::pad::PadModel;

/// A discrete emotion category produced by an appraisal engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum EmotionType {
    /// No emotion; sits at the PAD origin.
    None,
    /// Approving of someone else's praiseworthy action.
    Admiration,
    /// Disapproving of someone else's blameworthy action that hurt oneself.
    Anger,
    /// Disliking an unappealing object.
    Disliking,
    /// A hoped-for event did not happen.
    Disappointment,
    /// Displeased about an undesirable event.
    Distress,
    /// Displeased about the prospect of an undesirable event.
    Fear,
    /// A feared event happened.
    FearsConfirmed,
    /// Pleased about an event undesirable for someone else.
    Gloating,
    /// Approving of one's own action that turned out well.
    Gratification,
    /// Approving of someone else's action that turned out well for oneself.
    Gratitude,
    /// Pleased about an event desirable for someone else.
    HappyFor,
    /// Intense dislike.
    Hate,
    /// Pleased about the prospect of a desirable event.
    Hope,
    /// Pleased about a desirable event.
    Joy,
    /// Liking an appealing object.
    Liking,
    /// Intense liking.
    Love,
    /// Displeased about an event undesirable for someone else.
    Pity,
    /// Approving of one's own praiseworthy action.
    Pride,
    /// A feared event did not happen.
    Relief,
    /// Disapproving of one's own action that turned out badly.
    Remorse,
    /// Disapproving of someone else's blameworthy action.
    Reproach,
    /// Displeased about an event desirable for someone else.
    Resentment,
    /// A hoped-for event happened.
    Satisfaction,
    /// Disapproving of one's own blameworthy action.
    Shame,
}

impl EmotionType {
    /// Every category, in declaration (discriminant) order.
    pub const ALL: [Self; 25] = [
        Self::None,
        Self::Admiration,
        Self::Anger,
        Self::Disliking,
        Self::Disappointment,
        Self::Distress,
        Self::Fear,
        Self::FearsConfirmed,
        Self::Gloating,
        Self::Gratification,
        Self::Gratitude,
        Self::HappyFor,
        Self::Hate,
        Self::Hope,
        Self::Joy,
        Self::Liking,
        Self::Love,
        Self::Pity,
        Self::Pride,
        Self::Relief,
        Self::Remorse,
        Self::Reproach,
        Self::Resentment,
        Self::Satisfaction,
        Self::Shame,
    ];

    /// Fixed PAD coordinates of this emotion.
    #[must_use]
    pub const fn to_pad(self) -> PadModel {
        let (p, a, d) = match self {
            Self::None => (0.0, 0.0, 0.0),
            Self::Admiration => (0.5, 0.3, -0.2),
            Self::Anger => (-0.51, 0.59, 0.25),
            Self::Disliking => (-0.4, 0.2, 0.1),
            Self::Disappointment => (-0.3, 0.1, -0.4),
            Self::Distress => (-0.4, -0.2, -0.5),
            Self::Fear => (-0.64, 0.6, -0.43),
            Self::FearsConfirmed => (-0.5, -0.3, -0.7),
            Self::Gloating => (0.3, -0.3, -0.1),
            Self::Gratification => (0.6, 0.5, 0.4),
            Self::Gratitude => (0.4, 0.2, -0.3),
            Self::HappyFor => (0.4, 0.2, 0.2),
            Self::Hate => (-0.6, 0.6, 0.3),
            Self::Hope => (0.2, 0.2, -0.1),
            Self::Joy => (0.4, 0.2, 0.1),
            Self::Liking => (0.4, 0.16, -0.24),
            Self::Love => (0.3, 0.1, 0.2),
            Self::Pity => (-0.4, -0.2, -0.5),
            Self::Pride => (0.4, 0.3, 0.3),
            Self::Relief => (0.2, -0.3, 0.4),
            Self::Remorse => (-0.3, 0.1, -0.6),
            Self::Reproach => (-0.3, -0.1, 0.4),
            Self::Resentment => (-0.2, -0.3, -0.2),
            Self::Satisfaction => (0.3, -0.2, 0.4),
            Self::Shame => (-0.3, 0.1, -0.6),
        };
        PadModel::new(p, a, d)
    }

    /// Canonical name, identical to the variant identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Admiration => "Admiration",
            Self::Anger => "Anger",
            Self::Disliking => "Disliking",
            Self::Disappointment => "Disappointment",
            Self::Distress => "Distress",
            Self::Fear => "Fear",
            Self::FearsConfirmed => "FearsConfirmed",
            Self::Gloating => "Gloating",
            Self::Gratification => "Gratification",
            Self::Gratitude => "Gratitude",
            Self::HappyFor => "HappyFor",
            Self::Hate => "Hate",
            Self::Hope => "Hope",
            Self::Joy => "Joy",
            Self::Liking => "Liking",
            Self::Love => "Love",
            Self::Pity => "Pity",
            Self::Pride => "Pride",
            Self::Relief => "Relief",
            Self::Remorse => "Remorse",
            Self::Reproach => "Reproach",
            Self::Resentment => "Resentment",
            Self::Satisfaction => "Satisfaction",
            Self::Shame => "Shame",
        }
    }
}

/// Map an emotion to its PAD coordinates.
#[must_use]
pub const fn map_to_pad(emotion: EmotionType) -> PadModel {
    emotion.to_pad()
}

impl TryFrom<u8> for EmotionType {
    type Error = AlmaError;

    fn try_from(raw: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or_else(|| AlmaError::UnmappedCategory(format!("discriminant {raw}")))
    }
}

/// Parses variant names case-insensitively; `_`, `-` and spaces are ignored,
/// so `HappyFor`, `happy_for` and `happy for` are all accepted.
impl FromStr for EmotionType {
    type Err = AlmaError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect();
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| AlmaError::UnmappedCategory(s.to_string()))
    }
}

impl fmt::Display for EmotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for EmotionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for EmotionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// One currently active emotional stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionAndIntensity {
    /// Which emotion fired.
    pub emotion: EmotionType,
    /// How strongly, 0.0 to 1.0.
    pub intensity: Intensity,
}

impl EmotionAndIntensity {
    /// Pair an emotion with an already-validated intensity.
    #[must_use]
    pub const fn new(emotion: EmotionType, intensity: Intensity) -> Self {
        Self { emotion, intensity }
    }

    /// Pair an emotion with a raw intensity.
    ///
    /// # Errors
    /// Returns [`AlmaError::RangeViolation`] if `intensity` is outside [0, 1].
    pub fn try_new(emotion: EmotionType, intensity: f32) -> Result<Self> {
        Ok(Self::new(emotion, Intensity::new(intensity)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_discriminant_in_order() {
        for (i, emotion) in EmotionType::ALL.iter().enumerate() {
            assert_eq!(*emotion as usize, i);
            assert_eq!(EmotionType::try_from(i as u8).unwrap(), *emotion);
        }
        assert_eq!(EmotionType::ALL.len(), EmotionType::Shame as usize + 1);
    }

    #[test]
    fn none_is_origin() {
        assert_eq!(EmotionType::None.to_pad(), PadModel::ORIGIN);
    }

    #[test]
    fn sample_table_entries() {
        assert_eq!(map_to_pad(EmotionType::Admiration), PadModel::new(0.5, 0.3, -0.2));
        assert_eq!(map_to_pad(EmotionType::Fear), PadModel::new(-0.64, 0.60, -0.43));
    }

    #[test]
    fn unknown_discriminant_is_unmapped() {
        let err = EmotionType::try_from(25).unwrap_err();
        assert!(matches!(err, AlmaError::UnmappedCategory(_)));
        assert!(EmotionType::try_from(u8::MAX).is_err());
    }

    #[test]
    fn parses_names_loosely() {
        assert_eq!("HappyFor".parse::<EmotionType>().unwrap(), EmotionType::HappyFor);
        assert_eq!("happy_for".parse::<EmotionType>().unwrap(), EmotionType::HappyFor);
        assert_eq!(
            "fears-confirmed".parse::<EmotionType>().unwrap(),
            EmotionType::FearsConfirmed
        );
        assert!(matches!(
            "Schadenfreude".parse::<EmotionType>(),
            Err(AlmaError::UnmappedCategory(_))
        ));
    }

    #[test]
    fn names_round_trip() {
        for emotion in EmotionType::ALL {
            assert_eq!(emotion.to_string().parse::<EmotionType>().unwrap(), emotion);
        }
    }

    #[test]
    fn try_new_validates_intensity() {
        assert!(EmotionAndIntensity::try_new(EmotionType::Joy, 0.4).is_ok());
        assert!(EmotionAndIntensity::try_new(EmotionType::Joy, 1.4).is_err());
    }
}
