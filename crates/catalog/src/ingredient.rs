use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Ingredient categories a café declares stock for.
///
/// Categories drive substitution (a safe swap must come from the same
/// category) and shop capability lookups.
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
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum IngredientCategory {
    FrozenFruit,
    Milk,
    Yogurt,
    Superfood,
    Foam,
    Sweetener,
    Vegetable,
}

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum QualityTier {
    #[default]
    Standard,
    Premium,
    Organic,
}

/// Stable key for an ingredient. Recipes and shop capabilities reference
/// ingredients by this id only; the catalog resolves it to full records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub String);

impl IngredientId {
    pub fn new(id: impl Into<String>) -> Self {
        IngredientId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IngredientId {
    fn from(s: &str) -> Self {
        IngredientId(s.to_string())
    }
}

/// Nutrition facts per standard portion of the ingredient.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: f32,
    pub protein_g: f32,
    pub carbs_g: f32,
    pub fat_g: f32,
    pub fiber_g: f32,
    pub sugar_g: f32,
    /// Longevity compound tags, e.g. "anthocyanins", "catechins".
    #[serde(default)]
    pub longevity_compounds: Vec<String>,
}

/// Immutable reference record for one ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub category: IngredientCategory,
    pub nutrition: NutritionFacts,
    /// Allergen tags, e.g. "dairy", "tree-nuts". Matched case-insensitively.
    #[serde(default)]
    pub allergens: Vec<String>,
    pub unit_cost_cents: u32,
    #[serde(default)]
    pub tier: QualityTier,
}

impl Ingredient {
    /// Case-insensitive allergen tag check.
    pub fn has_allergen(&self, tag: &str) -> bool {
        self.allergens.iter().any(|a| a.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_kebab_case_round_trip() {
        assert_eq!(IngredientCategory::FrozenFruit.to_string(), "frozen-fruit");
        assert_eq!(
            IngredientCategory::from_str("frozen-fruit").unwrap(),
            IngredientCategory::FrozenFruit
        );
    }

    #[test]
    fn test_has_allergen_is_case_insensitive() {
        let ingredient = Ingredient {
            id: IngredientId::new("greek-yogurt"),
            name: "Greek Yogurt".to_string(),
            category: IngredientCategory::Yogurt,
            nutrition: NutritionFacts::default(),
            allergens: vec!["dairy".to_string()],
            unit_cost_cents: 90,
            tier: QualityTier::Standard,
        };

        assert!(ingredient.has_allergen("Dairy"));
        assert!(!ingredient.has_allergen("tree-nuts"));
    }
}
