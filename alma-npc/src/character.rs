//! Static character definitions, loadable from TOML.
//!
//! ```toml
//! name = "Mira"
//!
//! [personality]
//! openness = 0.4
//! conscientiousness = 0.8
//! extraversion = 0.6
//! agreeableness = 0.3
//! neuroticism = 0.4
//!
//! [[emotions]]
//! emotion = "Hope"
//! intensity = 0.5
//! ```
//!
//! Trait and intensity ranges are validated during parsing.

use std::path::Path;

use alma_core::error::Result;
use alma_core::{AlmaError, EmotionAndIntensity, OceanModel, PadModel};
use serde::{Deserialize, Serialize};

use crate::components::AffectComponent;

/// Everything needed to spawn a character's affect state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDefinition {
    /// Display name.
    pub name: String,
    /// Five-factor personality.
    pub personality: OceanModel,
    /// Emotions active at spawn.
    #[serde(default)]
    pub emotions: Vec<EmotionAndIntensity>,
    /// Starting mood; the personality's default mood when absent.
    #[serde(default)]
    pub initial_mood: Option<PadModel>,
}

impl CharacterDefinition {
    /// Parse a definition from TOML.
    ///
    /// # Errors
    /// Returns `AlmaError::Config` if the TOML is invalid, or a trait or
    /// intensity is out of range.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| AlmaError::Config(e.to_string()))
    }

    /// Load a definition from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Build the runtime component.
    #[must_use]
    pub fn spawn(&self) -> AffectComponent {
        let mut component = match self.initial_mood {
            Some(mood) => AffectComponent::with_mood(self.personality, mood),
            None => AffectComponent::new(self.personality),
        };
        component.set_active_emotions(self.emotions.clone());
        component
    }
}
