use crate::error::CatalogError;
use crate::ingredient::IngredientId;
use crate::repository::IngredientCatalog;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Coarse nutritional objective driving recipe selection.
///
/// Derived from the user's selected mood via the static mood mapping; every
/// curated recipe is authored against exactly one goal.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HealthGoal {
    BrainHealth,
    CalmStomach,
    MealReplacement,
    ImmuneSupport,
    EnergyBoost,
}

/// Measurement unit for a recipe item amount.
#[derive(
    EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum Unit {
    #[strum(serialize = "g")]
    #[serde(rename = "g")]
    Grams,
    #[strum(serialize = "ml")]
    #[serde(rename = "ml")]
    Milliliters,
    #[strum(serialize = "scoop")]
    #[serde(rename = "scoop")]
    Scoops,
}

/// One ingredient line of a curated recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeItem {
    pub ingredient: IngredientId,
    pub amount: f32,
    pub unit: Unit,
    /// Why this ingredient is in the recipe, e.g. "antioxidant-base".
    pub purpose: String,
}

/// Editor-authored base recipe associated with one health goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedRecipe {
    pub id: String,
    pub name: String,
    pub goal: HealthGoal,
    pub items: Vec<RecipeItem>,
    /// Human-readable rationale strings shown alongside the recipe.
    #[serde(default)]
    pub rationale: Vec<String>,
    /// Layered preparation (e.g. foam topping) requires shop support.
    #[serde(default)]
    pub requires_layering: bool,
}

/// Summed nutrition and cost for a recipe, computed against the ingredient
/// catalog. This is the shape handed to an external save operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeNutrition {
    pub calories: f32,
    pub protein_g: f32,
    pub carbs_g: f32,
    pub fat_g: f32,
    pub fiber_g: f32,
    pub sugar_g: f32,
    pub cost_cents: u32,
}

impl CuratedRecipe {
    pub fn ingredient_ids(&self) -> impl Iterator<Item = &IngredientId> {
        self.items.iter().map(|item| &item.ingredient)
    }

    /// Sum nutrition facts and unit costs over the recipe's items.
    ///
    /// Facts are per standard portion, so totals are a plain sum per line.
    /// Fails if any item references an ingredient the catalog does not know.
    pub fn nutrition<C>(&self, catalog: &C) -> Result<RecipeNutrition, CatalogError>
    where
        C: IngredientCatalog + ?Sized,
    {
        let mut totals = RecipeNutrition::default();
        for item in &self.items {
            let ingredient = catalog
                .get(&item.ingredient)
                .ok_or_else(|| CatalogError::UnknownIngredient(item.ingredient.clone()))?;
            totals.calories += ingredient.nutrition.calories;
            totals.protein_g += ingredient.nutrition.protein_g;
            totals.carbs_g += ingredient.nutrition.carbs_g;
            totals.fat_g += ingredient.nutrition.fat_g;
            totals.fiber_g += ingredient.nutrition.fiber_g;
            totals.sugar_g += ingredient.nutrition.sugar_g;
            totals.cost_cents += ingredient.unit_cost_cents;
        }
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use std::str::FromStr;

    #[test]
    fn test_health_goal_kebab_case() {
        assert_eq!(HealthGoal::BrainHealth.to_string(), "brain-health");
        assert_eq!(
            HealthGoal::from_str("calm-stomach").unwrap(),
            HealthGoal::CalmStomach
        );
    }

    #[test]
    fn test_nutrition_totals_over_seed_catalog() {
        let catalog = seed::builtin();
        for recipe in catalog.recipes.clone() {
            let totals = recipe
                .nutrition(&catalog)
                .expect("seed recipes only reference seed ingredients");
            assert!(totals.calories > 0.0, "recipe {} has no calories", recipe.id);
            assert!(totals.cost_cents > 0, "recipe {} has no cost", recipe.id);
        }
    }

    #[test]
    fn test_nutrition_fails_on_unknown_ingredient() {
        let catalog = seed::builtin();
        let recipe = CuratedRecipe {
            id: "broken".to_string(),
            name: "Broken".to_string(),
            goal: HealthGoal::EnergyBoost,
            items: vec![RecipeItem {
                ingredient: IngredientId::new("no-such-ingredient"),
                amount: 10.0,
                unit: Unit::Grams,
                purpose: "test".to_string(),
            }],
            rationale: vec![],
            requires_layering: false,
        };

        let result = recipe.nutrition(&catalog);
        assert!(matches!(result, Err(CatalogError::UnknownIngredient(_))));
    }
}
