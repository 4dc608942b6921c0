//! # ALMA Core Library
//!
//! Game-agnostic affect engine for game characters, after ALMA — A Layered
//! Model of Affect (Gebhard, 2005).
//!
//! Every character carries three layers, all expressed in Mehrabian's
//! PAD (Pleasure-Arousal-Dominance) space:
//!
//! - **Personality** — OCEAN / Big Five traits, projected once to a
//!   *default mood* ([`personality`])
//! - **Emotions** — short-lived OCC categories from an appraisal engine,
//!   each with a fixed PAD position ([`emotion`])
//! - **Mood** — a single PAD point that active emotions push and pull
//!   ([`center`], [`dynamics`]) and that drifts back to the default mood,
//!   readable as a named octant such as "moderately relaxed" ([`mood`])
//!
//! ```
//! use alma_core::{EmotionAndIntensity, EmotionType, OceanModel, VirtualEmotionCenter};
//!
//! let personality = OceanModel::new(0.4, 0.8, 0.6, 0.3, 0.4)?;
//! let default_mood = personality.to_default_mood();
//! let vec = VirtualEmotionCenter::aggregate(&[
//!     EmotionAndIntensity::try_new(EmotionType::Hope, 0.5)?,
//!     EmotionAndIntensity::try_new(EmotionType::Admiration, 1.0)?,
//! ])?;
//!
//! let mut mood = default_mood;
//! for _ in 0..120 {
//!     mood = mood
//!         .apply_push_pull(&vec, 10.0)
//!         .apply_return_to_default(default_mood, 10.0);
//! }
//! assert_eq!(mood.to_mood().to_string(), "moderately relaxed");
//! # Ok::<(), alma_core::AlmaError>(())
//! ```
//!
//! ## Performance Contract
//!
//! Everything here is a pure function over `Copy` values: no allocation on
//! the per-tick path, no shared state, no I/O. Single-point operations are
//! O(1); aggregation is O(n) in the number of active emotions.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bounded;
pub mod center;
pub mod config;
pub mod dynamics;
pub mod emotion;
pub mod error;
pub mod mood;
pub mod pad;
pub mod personality;

pub use bounded::{Intensity, TraitScalar};
pub use center::VirtualEmotionCenter;
pub use config::AlmaConfig;
pub use dynamics::MoodDynamics;
pub use emotion::{EmotionAndIntensity, EmotionType};
pub use error::AlmaError;
pub use mood::{Mood, MoodIntensity, PadMoodOctant};
pub use pad::PadModel;
pub use personality::OceanModel;
