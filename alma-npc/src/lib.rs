//! # alma-npc — Character Integration for ALMA
//!
//! This crate sits between the stateless `alma-core` engine and a game
//! loop. The core owns no state; here each character gets an
//! [`AffectComponent`] holding its current mood, and an [`AffectSystem`]
//! moves those components through time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │               Game loop                  │
//! │  ┌───────────────────────────────────┐  │
//! │  │         alma-npc                  │  │
//! │  │  ┌─────────────┐ ┌─────────────┐ │  │
//! │  │  │ Components  │ │   Systems   │ │  │
//! │  │  └──────┬──────┘ └──────┬──────┘ │  │
//! │  │         │               │         │  │
//! │  │         ▼               ▼         │  │
//! │  │    ┌─────────────────────────┐    │  │
//! │  │    │       alma-core         │    │  │
//! │  │    └─────────────────────────┘    │  │
//! │  └───────────────────────────────────┘  │
//! │        ▲ AppraisalEvent                  │
//! │  ┌─────┴─────────────────────────────┐  │
//! │  │  Appraisal engine (external)      │  │
//! │  └───────────────────────────────────┘  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `components` — per-character affect state
//! - `systems` — tick and appraisal handling
//! - `events` — appraisal events from the external emotion generator
//! - `character` — TOML character definitions

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]

pub mod character;
pub mod components;
pub mod events;
pub mod systems;

pub use character::CharacterDefinition;
pub use components::AffectComponent;
pub use events::AppraisalEvent;
pub use systems::{AffectSystem, MAX_STEPS_PER_TICK};
