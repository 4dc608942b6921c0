//! Range-checked scalars for personality traits and emotion intensities.
//!
//! A [`Bounded`] value is an `f32` that always lies inside an inclusive
//! interval. There are exactly two ways in: [`Bounded::new`] rejects values
//! outside the interval, [`Bounded::clamped`] saturates them. There are no
//! implicit conversions from `f32`.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AlmaError, Result};

/// The inclusive interval a [`Bounded`] scalar lives in.
pub trait Bounds: Copy + fmt::Debug + PartialEq + PartialOrd {
    /// Inclusive lower bound.
    const MIN: f32;
    /// Inclusive upper bound.
    const MAX: f32;
    /// Name used in error messages.
    const NAME: &'static str;
}

/// Personality trait range, -1.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TraitRange;

impl Bounds for TraitRange {
    const MIN: f32 = -1.0;
    const MAX: f32 = 1.0;
    const NAME: &'static str = "trait";
}

/// Emotion intensity range, 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct UnitRange;

impl Bounds for UnitRange {
    const MIN: f32 = 0.0;
    const MAX: f32 = 1.0;
    const NAME: &'static str = "intensity";
}

/// An `f32` guaranteed to lie in `[B::MIN, B::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Bounded<B: Bounds> {
    value: f32,
    _range: PhantomData<B>,
}

/// A personality trait value in [-1, 1].
pub type TraitScalar = Bounded<TraitRange>;

/// An emotion intensity in [0, 1].
pub type Intensity = Bounded<UnitRange>;

impl<B: Bounds> Bounded<B> {
    /// Inclusive lower bound of this scalar.
    pub const MIN: f32 = B::MIN;
    /// Inclusive upper bound of this scalar.
    pub const MAX: f32 = B::MAX;
    /// Zero, which lies inside both ranges used by this crate.
    pub const ZERO: Self = Self {
        value: 0.0,
        _range: PhantomData,
    };

    /// Validate and wrap `value`.
    ///
    /// # Errors
    /// Returns [`AlmaError::RangeViolation`] if `value` is NaN or outside
    /// `[MIN, MAX]`.
    pub fn new(value: f32) -> Result<Self> {
        if value.is_nan() || value < B::MIN || value > B::MAX {
            return Err(AlmaError::RangeViolation {
                scalar: B::NAME,
                value,
                min: B::MIN,
                max: B::MAX,
            });
        }
        Ok(Self {
            value,
            _range: PhantomData,
        })
    }

    /// Saturate `value` into `[MIN, MAX]`. NaN becomes `0.0`.
    #[must_use]
    pub fn clamped(value: f32) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(B::MIN, B::MAX)
        };
        Self {
            value,
            _range: PhantomData,
        }
    }

    /// The wrapped value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.value
    }
}

impl<B: Bounds> Default for Bounded<B> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<B: Bounds> TryFrom<f32> for Bounded<B> {
    type Error = AlmaError;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

impl<B: Bounds> From<Bounded<B>> for f32 {
    fn from(scalar: Bounded<B>) -> Self {
        scalar.value
    }
}

impl<B: Bounds> fmt::Display for Bounded<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<B: Bounds> Serialize for Bounded<B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.value)
    }
}

// Deserialization goes through the validating constructor.
impl<'de, B: Bounds> Deserialize<'de> for Bounded<B> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = f32::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Clamp a PAD component to [-1, 1].
#[must_use]
pub fn clamp_signed_unit(value: f32) -> f32 {
    value.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_on_the_boundary() {
        assert_eq!(TraitScalar::new(-1.0).unwrap().value(), -1.0);
        assert_eq!(TraitScalar::new(1.0).unwrap().value(), 1.0);
        assert_eq!(Intensity::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Intensity::new(1.0).unwrap().value(), 1.0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = Intensity::new(1.01).unwrap_err();
        assert!(matches!(
            err,
            AlmaError::RangeViolation { scalar: "intensity", .. }
        ));
        assert!(Intensity::new(-0.01).is_err());
        assert!(TraitScalar::new(-1.5).is_err());
        assert!(TraitScalar::new(f32::NAN).is_err());
    }

    #[test]
    fn clamped_saturates_instead_of_failing() {
        assert_eq!(TraitScalar::clamped(3.0).value(), 1.0);
        assert_eq!(TraitScalar::clamped(-3.0).value(), -1.0);
        assert_eq!(Intensity::clamped(-0.5).value(), 0.0);
        assert_eq!(Intensity::clamped(0.25).value(), 0.25);
        assert_eq!(Intensity::clamped(f32::NAN).value(), 0.0);
    }

    #[test]
    fn deserialization_validates_range() {
        let ok: Intensity = serde_json::from_str("0.5").unwrap();
        assert_eq!(ok.value(), 0.5);

        let bad = serde_json::from_str::<Intensity>("1.5");
        assert!(bad.is_err());
    }

    #[test]
    fn signed_unit_clamp() {
        assert_eq!(clamp_signed_unit(1.4), 1.0);
        assert_eq!(clamp_signed_unit(-1.4), -1.0);
        assert_eq!(clamp_signed_unit(0.3), 0.3);
    }
}
