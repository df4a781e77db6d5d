use crate::error::CatalogError;
use crate::ingredient::{Ingredient, IngredientId};
use crate::recipe::{CuratedRecipe, HealthGoal};
use crate::shop::Shop;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Read-only ingredient lookup.
///
/// The traits below are the seam between the static reference data and the
/// decision logic: swapping the builtin seed for a real datastore means
/// implementing these three traits, nothing else changes.
pub trait IngredientCatalog {
    fn get(&self, id: &IngredientId) -> Option<&Ingredient>;

    fn all(&self) -> &[Ingredient];
}

/// Read-only curated recipe lookup.
pub trait RecipeLibrary {
    fn all(&self) -> &[CuratedRecipe];

    fn by_goal(&self, goal: HealthGoal) -> Vec<&CuratedRecipe> {
        self.all().iter().filter(|r| r.goal == goal).collect()
    }

    /// The designated fallback recipe: the first library entry.
    fn first(&self) -> Option<&CuratedRecipe> {
        self.all().first()
    }
}

/// Read-only shop lookup.
pub trait ShopCatalog {
    fn all(&self) -> &[Shop];
}

/// Owned in-memory catalog backing all three repository traits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryCatalog {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub recipes: Vec<CuratedRecipe>,
    #[serde(default)]
    pub shops: Vec<Shop>,
}

impl InMemoryCatalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

impl IngredientCatalog for InMemoryCatalog {
    fn get(&self, id: &IngredientId) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| &i.id == id)
    }

    fn all(&self) -> &[Ingredient] {
        &self.ingredients
    }
}

impl RecipeLibrary for InMemoryCatalog {
    fn all(&self) -> &[CuratedRecipe] {
        &self.recipes
    }
}

impl ShopCatalog for InMemoryCatalog {
    fn all(&self) -> &[Shop] {
        &self.shops
    }
}
