//! Configuration for the ALMA affect engine.
//!
//! Maps directly to `alma.toml`. Every section and field has a default, so
//! an empty file is a valid configuration that reproduces the reference
//! model.

use serde::{Deserialize, Serialize};

use crate::dynamics::{PUSH_PULL_RATE, RETURN_RATE};

/// Top-level ALMA configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlmaConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Mood dynamics rates and overshoot handling.
    #[serde(default)]
    pub dynamics: DynamicsConfig,
    /// Simulation cadence for callers that tick characters.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl AlmaConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `AlmaError::Config` if the TOML is invalid or a value is out
    /// of range.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| crate::AlmaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check that every numeric setting is usable.
    ///
    /// # Errors
    /// Returns `AlmaError::Config` naming the first offending field.
    pub fn validate(&self) -> crate::error::Result<()> {
        non_negative("dynamics.push_pull_rate", self.dynamics.push_pull_rate)?;
        non_negative("dynamics.return_rate", self.dynamics.return_rate)?;
        let step = self.simulation.time_step_seconds;
        if !(step.is_finite() && step > 0.0) {
            return Err(crate::AlmaError::Config(format!(
                "simulation.time_step_seconds must be positive, got {step}"
            )));
        }
        Ok(())
    }
}

fn non_negative(field: &str, value: f32) -> crate::error::Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(crate::AlmaError::Config(format!(
            "{field} must be a non-negative finite rate, got {value}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// How displacement that would carry the mood past its target is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvershootPolicy {
    /// Move the full `rate × seconds`, even past the target.
    #[default]
    Reference,
    /// Stop pull and return at their targets; clamp push to the PAD cube.
    Bounded,
}

/// Mood dynamics tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicsConfig {
    /// Push/pull speed at full VEC intensity (PAD units per second).
    #[serde(default = "default_push_pull_rate")]
    pub push_pull_rate: f32,
    /// Return-to-default speed (PAD units per second).
    #[serde(default = "default_return_rate")]
    pub return_rate: f32,
    /// Overshoot handling.
    #[serde(default)]
    pub overshoot: OvershootPolicy,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            push_pull_rate: PUSH_PULL_RATE,
            return_rate: RETURN_RATE,
            overshoot: OvershootPolicy::Reference,
        }
    }
}

/// Cadence used when a caller advances characters in fixed steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Largest interval applied in one dynamics step, in seconds.
    #[serde(default = "default_time_step")]
    pub time_step_seconds: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step_seconds: 10.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }
fn default_push_pull_rate() -> f32 { PUSH_PULL_RATE }
fn default_return_rate() -> f32 { RETURN_RATE }
fn default_time_step() -> f32 { 10.0 }
