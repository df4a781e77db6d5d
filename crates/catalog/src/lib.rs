pub mod error;
pub mod ingredient;
pub mod integrity;
pub mod recipe;
pub mod repository;
pub mod seed;
pub mod shop;

pub use error::CatalogError;
pub use ingredient::{Ingredient, IngredientCategory, IngredientId, NutritionFacts, QualityTier};
pub use integrity::{validate, IntegrityIssue};
pub use recipe::{CuratedRecipe, HealthGoal, RecipeItem, RecipeNutrition, Unit};
pub use repository::{InMemoryCatalog, IngredientCatalog, RecipeLibrary, ShopCatalog};
pub use shop::{GeoPoint, MenuItem, Shop, ShopCapabilities, ShopId};
