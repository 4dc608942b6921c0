//! Appraisal events that change a character's active emotions.
//!
//! An appraisal engine (GAMYGDALA or a hand-written rule set) decides which
//! emotions fire and how strongly. These events are how it hands that
//! decision to an [`crate::components::AffectComponent`].

use alma_core::EmotionAndIntensity;

/// A change to the set of emotions currently acting on a character.
#[derive(Debug, Clone, PartialEq)]
pub enum AppraisalEvent {
    /// Replace the active set wholesale.
    Replace {
        /// The new active emotions. Empty clears them.
        emotions: Vec<EmotionAndIntensity>,
    },

    /// Add one emotion to the active set.
    Fired(EmotionAndIntensity),

    /// Drop every active emotion; the mood only returns to default from now on.
    Cleared,
}

impl AppraisalEvent {
    /// Short label for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Replace { .. } => "replace",
            Self::Fired(_) => "fired",
            Self::Cleared => "cleared",
        }
    }
}
