//! Mood dynamics — how the current mood moves through PAD space over time.
//!
//! Two independent transforms, both driven by elapsed seconds with no
//! internal tick size:
//!
//! - **Push/pull** (Gebhard, 2005, §3.3): while the mood lies between the
//!   origin and the virtual emotion center it is *pulled* toward the center;
//!   once it reaches or passes the center it is *pushed* further out along
//!   the origin→center direction. Speed is `1/600` PAD units per second
//!   scaled by the VEC intensity, i.e. about ten minutes to cross from one
//!   octant to the next at full intensity.
//! - **Return to default**: the mood drifts back to the personality's default
//!   mood at `√3/1200` PAD units per second, i.e. twenty minutes for the full
//!   diagonal of an octant. Not intensity-scaled.
//!
//! ## Overshoot
//!
//! Displacement is `rate × seconds` with no cap, so a long enough interval
//! carries the mood past its target. This matches the reference model and is
//! the default. [`OvershootPolicy::Bounded`] stops pull and return at their
//! targets and clamps push results to the PAD cube.

use crate::center::VirtualEmotionCenter;
use crate::config::{DynamicsConfig, OvershootPolicy};
use crate::pad::{PadModel, SQRT_3};

/// Push/pull speed at full VEC intensity, PAD units per second.
pub const PUSH_PULL_RATE: f32 = 1.0 / 600.0;

/// Return-to-default speed, PAD units per second.
pub const RETURN_RATE: f32 = SQRT_3 / 1200.0;

/// Move `current` under the influence of `vec` for `seconds`.
///
/// Uses [`PUSH_PULL_RATE`] and the reference overshoot behavior.
#[must_use]
pub fn apply_push_pull(current: PadModel, vec: &VirtualEmotionCenter, seconds: f32) -> PadModel {
    push_pull(current, vec, seconds, PUSH_PULL_RATE, OvershootPolicy::Reference)
}

/// Move `current` toward `default_mood` for `seconds`.
///
/// Uses [`RETURN_RATE`] and the reference overshoot behavior.
#[must_use]
pub fn apply_return_to_default(current: PadModel, default_mood: PadModel, seconds: f32) -> PadModel {
    return_to_default(current, default_mood, seconds, RETURN_RATE, OvershootPolicy::Reference)
}

impl PadModel {
    /// Method form of [`apply_push_pull`], for chaining.
    #[must_use]
    pub fn apply_push_pull(self, vec: &VirtualEmotionCenter, seconds: f32) -> Self {
        apply_push_pull(self, vec, seconds)
    }

    /// Method form of [`apply_return_to_default`], for chaining.
    #[must_use]
    pub fn apply_return_to_default(self, default_mood: Self, seconds: f32) -> Self {
        apply_return_to_default(self, default_mood, seconds)
    }
}

/// Whether push/pull is currently pulling toward or pushing past the VEC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mood lies between the origin and the VEC.
    Pull,
    /// Mood has reached or passed the VEC.
    Push,
}

/// Phase of `current` relative to `center`, or `None` if `center` is the
/// origin and no direction exists.
///
/// The test is the signed scalar projection of `current` onto the
/// origin→center axis against the center's own distance from the origin.
#[must_use]
pub fn phase(current: PadModel, center: PadModel) -> Option<Phase> {
    let axis = center.normalized()?;
    if current.dot(axis) < center.norm() {
        Some(Phase::Pull)
    } else {
        Some(Phase::Push)
    }
}

/// Configurable dynamics engine. [`MoodDynamics::default`] reproduces the
/// reference constants and overshoot behavior exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodDynamics {
    push_pull_rate: f32,
    return_rate: f32,
    overshoot: OvershootPolicy,
}

impl Default for MoodDynamics {
    fn default() -> Self {
        Self {
            push_pull_rate: PUSH_PULL_RATE,
            return_rate: RETURN_RATE,
            overshoot: OvershootPolicy::Reference,
        }
    }
}

impl From<&DynamicsConfig> for MoodDynamics {
    fn from(config: &DynamicsConfig) -> Self {
        Self {
            push_pull_rate: config.push_pull_rate,
            return_rate: config.return_rate,
            overshoot: config.overshoot,
        }
    }
}

impl MoodDynamics {
    /// Engine with the given overshoot policy and reference rates.
    #[must_use]
    pub fn with_overshoot(overshoot: OvershootPolicy) -> Self {
        Self {
            overshoot,
            ..Self::default()
        }
    }

    /// The overshoot policy in effect.
    #[must_use]
    pub fn overshoot(&self) -> OvershootPolicy {
        self.overshoot
    }

    /// Push/pull step with this engine's rate and overshoot policy.
    #[must_use]
    pub fn push_pull(&self, current: PadModel, vec: &VirtualEmotionCenter, seconds: f32) -> PadModel {
        push_pull(current, vec, seconds, self.push_pull_rate, self.overshoot)
    }

    /// Return-to-default step with this engine's rate and overshoot policy.
    #[must_use]
    pub fn return_to_default(&self, current: PadModel, default_mood: PadModel, seconds: f32) -> PadModel {
        return_to_default(current, default_mood, seconds, self.return_rate, self.overshoot)
    }

    /// One simulation step: push/pull toward `vec` if one exists, then return
    /// toward `default_mood`.
    #[must_use]
    pub fn step(
        &self,
        current: PadModel,
        default_mood: PadModel,
        vec: Option<&VirtualEmotionCenter>,
        seconds: f32,
    ) -> PadModel {
        let influenced = match vec {
            Some(vec) => self.push_pull(current, vec, seconds),
            None => current,
        };
        self.return_to_default(influenced, default_mood, seconds)
    }
}

fn has_elapsed(seconds: f32) -> bool {
    seconds.is_finite() && seconds > 0.0
}

fn push_pull(
    current: PadModel,
    vec: &VirtualEmotionCenter,
    seconds: f32,
    rate: f32,
    overshoot: OvershootPolicy,
) -> PadModel {
    if !has_elapsed(seconds) {
        return current;
    }
    let (Some(axis), Some(current_phase)) = (vec.center.normalized(), phase(current, vec.center))
    else {
        return current;
    };
    let distance = rate * vec.intensity.value() * seconds;

    match current_phase {
        Phase::Pull => move_toward(current, vec.center, distance, overshoot),
        Phase::Push => {
            let pushed = current + axis * distance;
            match overshoot {
                OvershootPolicy::Reference => pushed,
                OvershootPolicy::Bounded => pushed.clamped(),
            }
        }
    }
}

fn return_to_default(
    current: PadModel,
    default_mood: PadModel,
    seconds: f32,
    rate: f32,
    overshoot: OvershootPolicy,
) -> PadModel {
    if !has_elapsed(seconds) {
        return current;
    }
    move_toward(current, default_mood, rate * seconds, overshoot)
}

fn move_toward(current: PadModel, target: PadModel, distance: f32, overshoot: OvershootPolicy) -> PadModel {
    let offset = target - current;
    let Some(direction) = offset.normalized() else {
        return current;
    };
    let distance = match overshoot {
        OvershootPolicy::Reference => distance,
        OvershootPolicy::Bounded => distance.min(offset.norm()),
    };
    current + direction * distance
}
