//! Analytics event seam.
//!
//! The core emits named events; delivery, batching, and storage belong to
//! the external analytics layer. `TracingSink` is the default sink and
//! simply logs through `tracing`.

use catalog::HealthGoal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RecommendationEvent {
    GoalResolved {
        mood: String,
        goal: HealthGoal,
        known_mood: bool,
    },
    RecipeSelected {
        recipe_id: String,
        goal: HealthGoal,
        fallback: bool,
    },
    /// No curated recipe matched the requested goal; the designated
    /// fallback recipe was served instead.
    FallbackRecipeUsed {
        recipe_id: String,
        goal: HealthGoal,
    },
    RecipeFlaggedUnsafe {
        recipe_id: String,
        offending: Vec<String>,
    },
    ShopsMatched {
        recipe_id: String,
        shop_count: usize,
        top_score: Option<u8>,
    },
}

pub trait EventSink {
    fn emit(&self, event: &RecommendationEvent);
}

/// Logs every event through `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &RecommendationEvent) {
        match event {
            RecommendationEvent::GoalResolved {
                mood,
                goal,
                known_mood,
            } => {
                tracing::info!(mood = %mood, goal = %goal, known_mood, "goal resolved");
            }
            RecommendationEvent::RecipeSelected {
                recipe_id,
                goal,
                fallback,
            } => {
                tracing::info!(recipe_id = %recipe_id, goal = %goal, fallback, "recipe selected");
            }
            RecommendationEvent::FallbackRecipeUsed { recipe_id, goal } => {
                tracing::warn!(recipe_id = %recipe_id, goal = %goal, "fallback recipe used");
            }
            RecommendationEvent::RecipeFlaggedUnsafe {
                recipe_id,
                offending,
            } => {
                tracing::warn!(recipe_id = %recipe_id, ?offending, "recipe flagged unsafe");
            }
            RecommendationEvent::ShopsMatched {
                recipe_id,
                shop_count,
                top_score,
            } => {
                tracing::info!(recipe_id = %recipe_id, shop_count, ?top_score, "shops matched");
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records emitted events for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub events: RefCell<Vec<RecommendationEvent>>,
    }

    impl EventSink for RecordingSink {
        fn emit(&self, event: &RecommendationEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }
}
