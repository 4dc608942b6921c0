//! Per-character affect component.
//!
//! The core library is stateless; the component is where a character's one
//! piece of persistent affect state, the current mood, lives. It also caches
//! the default mood and the virtual emotion center so the per-tick path only
//! runs the dynamics.
//!
//! In a full ECS integration this would derive the engine's `Component`.
//! For now it is a standalone struct owned by the caller.

use alma_core::{
    EmotionAndIntensity, Mood, MoodDynamics, OceanModel, PadModel, VirtualEmotionCenter,
};
use serde::{Deserialize, Serialize};

/// Affect state of a single character.
///
/// Only the personality, current mood and active emotions are persisted.
/// The default mood and the VEC are derived from them on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SavedAffect")]
pub struct AffectComponent {
    personality: OceanModel,
    #[serde(skip_serializing)]
    default_mood: PadModel,
    current_mood: PadModel,
    active_emotions: Vec<EmotionAndIntensity>,
    #[serde(skip_serializing)]
    center: Option<VirtualEmotionCenter>,
}

/// Persisted form of [`AffectComponent`].
#[derive(Deserialize)]
struct SavedAffect {
    personality: OceanModel,
    current_mood: PadModel,
    #[serde(default)]
    active_emotions: Vec<EmotionAndIntensity>,
}

impl From<SavedAffect> for AffectComponent {
    fn from(saved: SavedAffect) -> Self {
        let mut component = Self::with_mood(saved.personality, saved.current_mood);
        component.set_active_emotions(saved.active_emotions);
        component
    }
}

impl AffectComponent {
    /// A character at rest: current mood equals the personality's default.
    #[must_use]
    pub fn new(personality: OceanModel) -> Self {
        let default_mood = personality.to_default_mood();
        Self::with_mood(personality, default_mood)
    }

    /// A character whose mood starts somewhere other than its default,
    /// e.g. restored from a save.
    #[must_use]
    pub fn with_mood(personality: OceanModel, current_mood: PadModel) -> Self {
        Self {
            personality,
            default_mood: personality.to_default_mood(),
            current_mood,
            active_emotions: Vec::new(),
            center: None,
        }
    }

    /// The character's personality.
    #[must_use]
    pub fn personality(&self) -> &OceanModel {
        &self.personality
    }

    /// Where the mood settles without emotional influence.
    #[must_use]
    pub fn default_mood(&self) -> PadModel {
        self.default_mood
    }

    /// The evolving mood point.
    #[must_use]
    pub fn current_mood(&self) -> PadModel {
        self.current_mood
    }

    /// Emotions currently acting on the mood.
    #[must_use]
    pub fn active_emotions(&self) -> &[EmotionAndIntensity] {
        &self.active_emotions
    }

    /// The VEC of the active emotions, or `None` if there are none.
    #[must_use]
    pub fn virtual_emotion_center(&self) -> Option<&VirtualEmotionCenter> {
        self.center.as_ref()
    }

    /// Replace the active emotions and recompute the VEC.
    pub fn set_active_emotions(&mut self, emotions: Vec<EmotionAndIntensity>) {
        self.active_emotions = emotions;
        self.refresh_center();
    }

    /// Add one active emotion and recompute the VEC.
    pub fn push_emotion(&mut self, emotion: EmotionAndIntensity) {
        self.active_emotions.push(emotion);
        self.refresh_center();
    }

    /// Drop every active emotion.
    pub fn clear_emotions(&mut self) {
        self.active_emotions.clear();
        self.center = None;
    }

    /// Evolve the mood by `seconds` in one dynamics step.
    pub fn advance(&mut self, seconds: f32, dynamics: &MoodDynamics) {
        self.current_mood = dynamics.step(
            self.current_mood,
            self.default_mood,
            self.center.as_ref(),
            seconds,
        );
    }

    /// Classified current mood.
    #[must_use]
    pub fn mood(&self) -> Mood {
        self.current_mood.to_mood()
    }

    fn refresh_center(&mut self) {
        // Empty input is the only failure, and it means "no VEC".
        self.center = VirtualEmotionCenter::aggregate(&self.active_emotions).ok();
    }
}
