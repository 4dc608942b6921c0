//! PAD (Pleasure-Arousal-Dominance) points and vector arithmetic.
//!
//! Components are nominally in [-1, 1] but construction does not enforce
//! it: sums taken before clamping legitimately leave the range for a moment.
//! All geometry here stays well-defined for any finite input.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::bounded::clamp_signed_unit;

/// √3, the distance from the origin to any corner of the PAD cube.
pub const SQRT_3: f32 = 1.732_050_8;

/// A point (or displacement) in PAD space, after Mehrabian (1996).
///
/// - **Pleasure**: unhappy (-1) → happy (+1)
/// - **Arousal**: calm (-1) → excited (+1)
/// - **Dominance**: submissive (-1) → dominant (+1)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PadModel {
    /// Unhappy (-1.0) to happy (+1.0).
    pub pleasure: f32,
    /// Calm (-1.0) to excited (+1.0).
    pub arousal: f32,
    /// Submissive (-1.0) to dominant (+1.0).
    pub dominance: f32,
}

impl PadModel {
    /// The neutral origin.
    pub const ORIGIN: Self = Self {
        pleasure: 0.0,
        arousal: 0.0,
        dominance: 0.0,
    };

    /// Create a PAD point. Values are stored as given, without clamping.
    #[must_use]
    pub const fn new(pleasure: f32, arousal: f32, dominance: f32) -> Self {
        Self {
            pleasure,
            arousal,
            dominance,
        }
    }

    /// Components as `[pleasure, arousal, dominance]`.
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.pleasure, self.arousal, self.dominance]
    }

    /// Inverse of [`PadModel::to_array`].
    #[must_use]
    pub const fn from_array([pleasure, arousal, dominance]: [f32; 3]) -> Self {
        Self::new(pleasure, arousal, dominance)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.pleasure * other.pleasure
            + self.arousal * other.arousal
            + self.dominance * other.dominance
    }

    /// Euclidean length.
    #[must_use]
    pub fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f32 {
        (other - self).norm()
    }

    /// Unit vector in the same direction.
    ///
    /// Returns `None` when the direction is undefined: zero length, or a
    /// length that is not finite.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let length = self.norm();
        if length <= f32::EPSILON || !length.is_finite() {
            return None;
        }
        Some(self * length.recip())
    }

    /// Clamp every component to [-1, 1].
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(
            clamp_signed_unit(self.pleasure),
            clamp_signed_unit(self.arousal),
            clamp_signed_unit(self.dominance),
        )
    }

    /// Whether all three components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.pleasure.is_finite() && self.arousal.is_finite() && self.dominance.is_finite()
    }
}

impl From<[f32; 3]> for PadModel {
    fn from(components: [f32; 3]) -> Self {
        Self::from_array(components)
    }
}

impl From<PadModel> for [f32; 3] {
    fn from(pad: PadModel) -> Self {
        pad.to_array()
    }
}

impl Add for PadModel {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.pleasure + rhs.pleasure,
            self.arousal + rhs.arousal,
            self.dominance + rhs.dominance,
        )
    }
}

impl Sub for PadModel {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.pleasure - rhs.pleasure,
            self.arousal - rhs.arousal,
            self.dominance - rhs.dominance,
        )
    }
}

impl Neg for PadModel {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.pleasure, -self.arousal, -self.dominance)
    }
}

impl Mul<f32> for PadModel {
    type Output = Self;

    fn mul(self, scale: f32) -> Self {
        Self::new(
            self.pleasure * scale,
            self.arousal * scale,
            self.dominance * scale,
        )
    }
}

impl std::iter::Sum for PadModel {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ORIGIN, Add::add)
    }
}

impl fmt::Display for PadModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P:{}, A:{}, D:{}",
            self.pleasure, self.arousal, self.dominance
        )
    }
}
