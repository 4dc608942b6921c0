//! Affect systems — per-tick mood updates and appraisal handling.
//!
//! In a full ECS integration these would implement the engine's `System`
//! trait. For now, [`AffectSystem`] is a plain struct that the game loop
//! calls with each character's component.
//!
//! ## Time stepping
//!
//! The dynamics accept any elapsed time, but a single huge step overshoots
//! (see `alma_core::dynamics`). [`AffectSystem::tick`] therefore splits long
//! frame gaps into steps no larger than `simulation.time_step_seconds`, so a
//! hitch or a fast-forward behaves like the regular cadence. The step count
//! is planned up front and capped at [`MAX_STEPS_PER_TICK`]; past the cap the
//! interval is shared evenly across that many longer steps.

use alma_core::{AlmaConfig, MoodDynamics};
use tracing::{debug, trace};

use crate::components::AffectComponent;
use crate::events::AppraisalEvent;

/// Most dynamics steps a single [`AffectSystem::tick`] applies.
pub const MAX_STEPS_PER_TICK: u32 = 100_000;

/// Fraction of a step below which a trailing remainder is folded into the
/// previous step.
const REMAINDER_TOLERANCE: f64 = 1e-4;

/// Drives [`AffectComponent`]s forward in time.
#[derive(Debug, Clone, Copy)]
pub struct AffectSystem {
    dynamics: MoodDynamics,
    time_step_seconds: f32,
}

impl Default for AffectSystem {
    fn default() -> Self {
        Self::from_config(&AlmaConfig::default())
    }
}

impl AffectSystem {
    /// Build a system from validated configuration.
    #[must_use]
    pub fn from_config(config: &AlmaConfig) -> Self {
        Self {
            dynamics: MoodDynamics::from(&config.dynamics),
            time_step_seconds: config.simulation.time_step_seconds,
        }
    }

    /// The largest interval applied in one dynamics step.
    #[must_use]
    pub fn time_step_seconds(&self) -> f32 {
        self.time_step_seconds
    }

    /// The dynamics engine in use.
    #[must_use]
    pub fn dynamics(&self) -> &MoodDynamics {
        &self.dynamics
    }

    /// Apply an appraisal event to a component.
    pub fn apply(&self, component: &mut AffectComponent, event: AppraisalEvent) {
        let kind = event.kind();
        match event {
            AppraisalEvent::Replace { emotions } => component.set_active_emotions(emotions),
            AppraisalEvent::Fired(emotion) => component.push_emotion(emotion),
            AppraisalEvent::Cleared => component.clear_emotions(),
        }

        match component.virtual_emotion_center() {
            Some(vec) => debug!(
                event = kind,
                active = component.active_emotions().len(),
                center = %vec.center,
                intensity = vec.intensity.value(),
                "Virtual emotion center updated"
            ),
            None => debug!(event = kind, "No active emotions; mood returns to default"),
        }
    }

    /// Advance a component by `elapsed_seconds`, in steps of at most the
    /// configured time step. Returns the number of dynamics steps applied.
    pub fn tick(&self, component: &mut AffectComponent, elapsed_seconds: f32) -> u32 {
        if !(elapsed_seconds.is_finite() && elapsed_seconds > 0.0) {
            return 0;
        }

        let before = component.mood().octant;
        let plan = StepPlan::new(elapsed_seconds, self.time_step_seconds);
        for _ in 1..plan.count {
            component.advance(plan.step, &self.dynamics);
        }
        component.advance(plan.last, &self.dynamics);
        let steps = plan.count;

        let after = component.mood();
        trace!(
            elapsed_seconds,
            steps,
            mood = %component.current_mood(),
            "Affect tick"
        );
        if after.octant != before {
            debug!(
                from = before.label(),
                to = %after,
                "Mood octant changed"
            );
        }
        steps
    }

    /// Advance every component by the same interval.
    pub fn tick_all<'a>(
        &self,
        components: impl IntoIterator<Item = &'a mut AffectComponent>,
        elapsed_seconds: f32,
    ) {
        for component in components {
            self.tick(component, elapsed_seconds);
        }
    }
}

/// How one elapsed interval is split: `count - 1` steps of `step`, then one
/// of `last`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StepPlan {
    count: u32,
    step: f32,
    last: f32,
}

impl StepPlan {
    /// Both arguments must be positive and finite.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn new(elapsed_seconds: f32, max_step_seconds: f32) -> Self {
        let elapsed = f64::from(elapsed_seconds);
        let max_step = f64::from(max_step_seconds);

        let needed = (elapsed / max_step - REMAINDER_TOLERANCE).ceil().max(1.0);
        let cap = f64::from(MAX_STEPS_PER_TICK);
        let (count, step) = if needed > cap {
            (cap, elapsed / cap)
        } else {
            (needed, max_step)
        };
        let last = elapsed - step * (count - 1.0);

        Self {
            count: count as u32,
            step: step as f32,
            last: last as f32,
        }
    }
}
