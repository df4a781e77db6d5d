//! Catalog integrity validation.
//!
//! The reference data is authored by hand; these checks close the gap
//! between "authored correctly" and "verified correct": no dangling
//! ingredient references, and every health goal resolvable to at least one
//! recipe. Issues are reported, never panicked on.

use crate::ingredient::IngredientId;
use crate::recipe::HealthGoal;
use crate::repository::{IngredientCatalog, RecipeLibrary, ShopCatalog};
use crate::shop::ShopId;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use strum::VariantArray;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum IntegrityIssue {
    /// A recipe item references an ingredient the catalog does not know.
    DanglingRecipeIngredient {
        recipe_id: String,
        ingredient_id: IngredientId,
    },
    /// A shop menu item or capability list references an unknown ingredient.
    DanglingShopIngredient {
        shop_id: ShopId,
        ingredient_id: IngredientId,
    },
    /// A health goal has no curated recipe; selection would fall back.
    GoalWithoutRecipe { goal: HealthGoal },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::DanglingRecipeIngredient {
                recipe_id,
                ingredient_id,
            } => write!(
                f,
                "recipe '{}' references unknown ingredient '{}'",
                recipe_id, ingredient_id
            ),
            IntegrityIssue::DanglingShopIngredient {
                shop_id,
                ingredient_id,
            } => write!(
                f,
                "shop '{}' references unknown ingredient '{}'",
                shop_id, ingredient_id
            ),
            IntegrityIssue::GoalWithoutRecipe { goal } => {
                write!(f, "no curated recipe for goal '{}'", goal)
            }
        }
    }
}

/// Check the whole catalog. An empty result means the data is sound.
pub fn validate<C>(catalog: &C) -> Vec<IntegrityIssue>
where
    C: IngredientCatalog + RecipeLibrary + ShopCatalog,
{
    let known: HashSet<&IngredientId> =
        IngredientCatalog::all(catalog).iter().map(|i| &i.id).collect();

    let mut issues = Vec::new();

    for recipe in RecipeLibrary::all(catalog) {
        for id in recipe.ingredient_ids() {
            if !known.contains(id) {
                issues.push(IntegrityIssue::DanglingRecipeIngredient {
                    recipe_id: recipe.id.clone(),
                    ingredient_id: id.clone(),
                });
            }
        }
    }

    for shop in ShopCatalog::all(catalog) {
        let referenced = shop
            .menu
            .iter()
            .flat_map(|m| m.ingredient_ids.iter())
            .chain(shop.capabilities.stocked.values().flatten());
        for id in referenced {
            if !known.contains(id) {
                issues.push(IntegrityIssue::DanglingShopIngredient {
                    shop_id: shop.id.clone(),
                    ingredient_id: id.clone(),
                });
            }
        }
    }

    for goal in HealthGoal::VARIANTS {
        if RecipeLibrary::by_goal(catalog, *goal).is_empty() {
            issues.push(IntegrityIssue::GoalWithoutRecipe { goal: *goal });
        }
    }

    issues
}
