//! Recommendation pipeline.
//!
//! Check-in → goal resolution → recipe selection → substitutions →
//! nutrition totals → shop matching. Every intermediate outcome is carried
//! in the result so callers can render, warn, or log as they see fit.

use crate::error::RecommendError;
use crate::events::{EventSink, RecommendationEvent};
use crate::matching::{match_shops, MatchWeights, ShopMatch};
use crate::mood::{resolve_goal, GoalResolution};
use crate::selector::{select_recipe, SelectionOutcome};
use crate::substitution::{apply_substitutions, Restrictions, Safety, Swap};
use catalog::{
    CuratedRecipe, GeoPoint, IngredientCatalog, RecipeLibrary, RecipeNutrition, ShopCatalog,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A profile check-in: self-reported mood and sleep quality (1..=4).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    pub mood: String,
    pub sleep_quality: u8,
}

/// Full recommendation output, highest-score shop first.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub goal: GoalResolution,
    pub selection: SelectionOutcome,
    /// The recipe after substitutions were applied.
    pub recipe: CuratedRecipe,
    pub swaps: Vec<Swap>,
    pub safety: Safety,
    pub nutrition: RecipeNutrition,
    pub shops: Vec<ShopMatch>,
}

/// Wires the decision components over an injected read-only catalog.
pub struct Recommender<'a, C> {
    catalog: &'a C,
    weights: MatchWeights,
    sink: &'a dyn EventSink,
}

impl<'a, C> Recommender<'a, C>
where
    C: IngredientCatalog + RecipeLibrary + ShopCatalog,
{
    pub fn new(catalog: &'a C, weights: MatchWeights, sink: &'a dyn EventSink) -> Self {
        Recommender {
            catalog,
            weights,
            sink,
        }
    }

    /// Produce a recommendation for one check-in.
    ///
    /// Degraded paths (unknown mood, fallback recipe, unsafe substitution)
    /// are tagged outcomes in the result, not errors. Only an empty recipe
    /// library or a broken ingredient reference fails.
    #[tracing::instrument(skip(self, restrictions, rng), fields(mood = %check_in.mood))]
    pub fn recommend<R>(
        &self,
        check_in: &CheckIn,
        restrictions: &Restrictions,
        origin: Option<GeoPoint>,
        rng: &mut R,
    ) -> Result<Recommendation, RecommendError>
    where
        R: Rng + ?Sized,
    {
        let goal = resolve_goal(&check_in.mood, check_in.sleep_quality);
        self.sink.emit(&RecommendationEvent::GoalResolved {
            mood: check_in.mood.clone(),
            goal: goal.primary(),
            known_mood: !goal.is_fallback(),
        });

        let selection = select_recipe(self.catalog, goal.primary(), rng)?;
        self.sink.emit(&RecommendationEvent::RecipeSelected {
            recipe_id: selection.recipe.id.clone(),
            goal: selection.recipe.goal,
            fallback: selection.outcome == SelectionOutcome::Fallback,
        });
        if selection.outcome == SelectionOutcome::Fallback {
            self.sink.emit(&RecommendationEvent::FallbackRecipeUsed {
                recipe_id: selection.recipe.id.clone(),
                // The goal that had no curated recipe, not the fallback's.
                goal: goal.primary(),
            });
        }

        let report = apply_substitutions(&selection.recipe, restrictions, self.catalog);
        if let Safety::Unsafe { offending } = &report.safety {
            self.sink.emit(&RecommendationEvent::RecipeFlaggedUnsafe {
                recipe_id: report.recipe.id.clone(),
                offending: offending.clone(),
            });
        }

        let nutrition = report.recipe.nutrition(self.catalog)?;

        let shops = match_shops(
            &report.recipe,
            self.catalog,
            self.catalog,
            &self.weights,
            origin,
        );
        self.sink.emit(&RecommendationEvent::ShopsMatched {
            recipe_id: report.recipe.id.clone(),
            shop_count: shops.len(),
            top_score: shops.first().map(|m| m.score),
        });

        Ok(Recommendation {
            goal,
            selection: selection.outcome,
            recipe: report.recipe,
            swaps: report.swaps,
            safety: report.safety,
            nutrition,
            shops,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::testing::RecordingSink;
    use catalog::seed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn check_in(mood: &str) -> CheckIn {
        CheckIn {
            mood: mood.to_string(),
            sleep_quality: 3,
        }
    }

    #[test]
    fn test_recommend_emits_events_in_pipeline_order() {
        let catalog = seed::builtin();
        let sink = RecordingSink::default();
        let recommender = Recommender::new(&catalog, MatchWeights::default(), &sink);
        let mut rng = StdRng::seed_from_u64(1);

        recommender
            .recommend(&check_in("foggy"), &Restrictions::default(), None, &mut rng)
            .unwrap();

        let events = sink.events.borrow();
        assert!(matches!(events[0], RecommendationEvent::GoalResolved { .. }));
        assert!(matches!(events[1], RecommendationEvent::RecipeSelected { .. }));
        assert!(matches!(
            events.last().unwrap(),
            RecommendationEvent::ShopsMatched { .. }
        ));
    }

    #[test]
    fn test_fallback_selection_emits_fallback_event() {
        let mut catalog = seed::builtin();
        // "run-down" maps to ImmuneSupport; remove its only recipe.
        catalog
            .recipes
            .retain(|r| r.goal != catalog::HealthGoal::ImmuneSupport);
        let sink = RecordingSink::default();
        let recommender = Recommender::new(&catalog, MatchWeights::default(), &sink);
        let mut rng = StdRng::seed_from_u64(1);

        let recommendation = recommender
            .recommend(
                &check_in("run-down"),
                &Restrictions::default(),
                None,
                &mut rng,
            )
            .unwrap();

        assert_eq!(recommendation.selection, SelectionOutcome::Fallback);
        let events = sink.events.borrow();
        assert!(events.contains(&RecommendationEvent::FallbackRecipeUsed {
            recipe_id: recommendation.recipe.id.clone(),
            goal: catalog::HealthGoal::ImmuneSupport,
        }));
    }

    #[test]
    fn test_matched_selection_emits_no_fallback_event() {
        let catalog = seed::builtin();
        let sink = RecordingSink::default();
        let recommender = Recommender::new(&catalog, MatchWeights::default(), &sink);
        let mut rng = StdRng::seed_from_u64(1);

        recommender
            .recommend(&check_in("foggy"), &Restrictions::default(), None, &mut rng)
            .unwrap();

        let events = sink.events.borrow();
        assert!(!events
            .iter()
            .any(|e| matches!(e, RecommendationEvent::FallbackRecipeUsed { .. })));
    }

    #[test]
    fn test_foggy_mood_recommends_focus_flow() {
        let catalog = seed::builtin();
        let sink = RecordingSink::default();
        let recommender = Recommender::new(&catalog, MatchWeights::default(), &sink);
        let mut rng = StdRng::seed_from_u64(1);

        let recommendation = recommender
            .recommend(&check_in("foggy"), &Restrictions::default(), None, &mut rng)
            .unwrap();

        assert_eq!(recommendation.recipe.name, "Focus Flow");
        assert_eq!(recommendation.selection, SelectionOutcome::Matched);
        assert_eq!(recommendation.shops.len(), catalog.shops.len());
    }

    #[test]
    fn test_unknown_mood_still_produces_recommendation() {
        let catalog = seed::builtin();
        let sink = RecordingSink::default();
        let recommender = Recommender::new(&catalog, MatchWeights::default(), &sink);
        let mut rng = StdRng::seed_from_u64(1);

        let recommendation = recommender
            .recommend(
                &check_in("ecstatic"),
                &Restrictions::default(),
                None,
                &mut rng,
            )
            .unwrap();

        assert!(recommendation.goal.is_fallback());
        assert_eq!(
            recommendation.recipe.goal,
            crate::mood::FALLBACK_GOAL
        );
    }

    #[test]
    fn test_restrictions_flow_through_to_recipe_and_swaps() {
        let catalog = seed::builtin();
        let sink = RecordingSink::default();
        let recommender = Recommender::new(&catalog, MatchWeights::default(), &sink);
        let mut rng = StdRng::seed_from_u64(1);
        let restrictions = Restrictions {
            allergies: vec!["tree-nuts".to_string()],
            intolerances: vec![],
        };

        let recommendation = recommender
            .recommend(&check_in("foggy"), &restrictions, None, &mut rng)
            .unwrap();

        assert_eq!(recommendation.safety, Safety::Safe);
        assert!(!recommendation.swaps.is_empty());
        assert!(recommendation
            .recipe
            .items
            .iter()
            .all(|i| i.ingredient.as_str() != "almond-butter"));
    }
}
