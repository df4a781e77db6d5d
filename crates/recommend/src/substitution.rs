//! Allergy and intolerance substitution.
//!
//! Offending ingredients are replaced by a same-category substitute from
//! the catalog when one exists. When none does, the item is kept and the
//! recipe is flagged unsafe; a silent drop would hide an allergen from the
//! renderer.

use catalog::{CuratedRecipe, Ingredient, IngredientCatalog};
use serde::{Deserialize, Serialize};

/// Dietary restrictions from the user's profile. Both lists hold allergen
/// tags matched case-insensitively against ingredient metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Restrictions {
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub intolerances: Vec<String>,
}

impl Restrictions {
    pub fn is_empty(&self) -> bool {
        self.allergies.is_empty() && self.intolerances.is_empty()
    }

    fn tags(&self) -> impl Iterator<Item = &str> {
        self.allergies
            .iter()
            .chain(self.intolerances.iter())
            .map(String::as_str)
    }

    /// The first restricted tag the ingredient carries, if any.
    pub fn blocking_tag(&self, ingredient: &Ingredient) -> Option<String> {
        self.tags()
            .find(|tag| ingredient.has_allergen(tag))
            .map(str::to_string)
    }
}

/// One applied replacement, rendered for the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swap {
    pub from: String,
    pub to: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Safety {
    Safe,
    /// At least one restricted ingredient had no safe substitute and was
    /// kept in place. Names of the offending ingredients.
    Unsafe { offending: Vec<String> },
}

#[derive(Debug, Clone, Serialize)]
pub struct SubstitutionReport {
    pub recipe: CuratedRecipe,
    pub swaps: Vec<Swap>,
    pub safety: Safety,
}

/// Apply same-category substitutions for every restricted ingredient.
///
/// Pure: the input recipe is left untouched; amounts, units, and purpose
/// tags carry over to the substitute.
pub fn apply_substitutions<C>(
    recipe: &CuratedRecipe,
    restrictions: &Restrictions,
    ingredients: &C,
) -> SubstitutionReport
where
    C: IngredientCatalog + ?Sized,
{
    let mut adjusted = recipe.clone();
    let mut swaps = Vec::new();
    let mut offending = Vec::new();
    let mut used: Vec<_> = recipe.ingredient_ids().cloned().collect();

    if restrictions.is_empty() {
        return SubstitutionReport {
            recipe: adjusted,
            swaps,
            safety: Safety::Safe,
        };
    }

    for item in &mut adjusted.items {
        let Some(current) = ingredients.get(&item.ingredient) else {
            // Dangling reference; integrity validation owns this case.
            continue;
        };
        let Some(tag) = restrictions.blocking_tag(current) else {
            continue;
        };

        let safe = |candidate: &&Ingredient| {
            candidate.category == current.category
                && candidate.id != current.id
                && restrictions.blocking_tag(candidate).is_none()
        };
        // Prefer a substitute the recipe does not already contain.
        let substitute = ingredients
            .all()
            .iter()
            .find(|c| safe(c) && !used.contains(&c.id))
            .or_else(|| ingredients.all().iter().find(safe));

        match substitute {
            Some(replacement) => {
                swaps.push(Swap {
                    from: current.name.clone(),
                    to: replacement.name.clone(),
                    reason: format!("{} contains {}", current.name, tag),
                });
                item.ingredient = replacement.id.clone();
                used.push(replacement.id.clone());
            }
            None => offending.push(current.name.clone()),
        }
    }

    let safety = if offending.is_empty() {
        Safety::Safe
    } else {
        Safety::Unsafe { offending }
    };

    SubstitutionReport {
        recipe: adjusted,
        swaps,
        safety,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::seed;

    fn focus_flow() -> CuratedRecipe {
        seed::builtin()
            .recipes
            .iter()
            .find(|r| r.id == "focus-flow")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_no_restrictions_is_identity() {
        let catalog = seed::builtin();
        let recipe = focus_flow();

        let report = apply_substitutions(&recipe, &Restrictions::default(), &catalog);

        assert_eq!(report.safety, Safety::Safe);
        assert!(report.swaps.is_empty());
        assert_eq!(report.recipe.items.len(), recipe.items.len());
    }

    #[test]
    fn test_tree_nut_allergy_swaps_within_category() {
        let catalog = seed::builtin();
        let recipe = focus_flow();
        let restrictions = Restrictions {
            allergies: vec!["tree-nuts".to_string()],
            intolerances: vec![],
        };

        let report = apply_substitutions(&recipe, &restrictions, &catalog);

        assert_eq!(report.safety, Safety::Safe);
        assert_eq!(report.swaps.len(), 1);
        assert_eq!(report.swaps[0].from, "Almond Butter");
        // Replacement stays in the superfood category and is nut-free.
        let replacement = catalog
            .get(&report.recipe.items[2].ingredient)
            .unwrap();
        assert_eq!(replacement.category, catalog.get(&recipe.items[2].ingredient).unwrap().category);
        assert!(!replacement.has_allergen("tree-nuts"));
    }

    #[test]
    fn test_original_recipe_is_not_mutated() {
        let catalog = seed::builtin();
        let recipe = focus_flow();
        let restrictions = Restrictions {
            allergies: vec!["tree-nuts".to_string()],
            intolerances: vec![],
        };

        let _ = apply_substitutions(&recipe, &restrictions, &catalog);

        assert_eq!(recipe.items[2].ingredient.as_str(), "almond-butter");
    }

    #[test]
    fn test_no_safe_substitute_flags_recipe_unsafe() {
        let mut catalog = seed::builtin();
        // Leave almond butter as the only superfood: no same-category swap.
        catalog
            .ingredients
            .retain(|i| i.category != catalog::IngredientCategory::Superfood
                || i.id.as_str() == "almond-butter");
        let recipe = focus_flow();
        let restrictions = Restrictions {
            allergies: vec!["tree-nuts".to_string()],
            intolerances: vec![],
        };

        let report = apply_substitutions(&recipe, &restrictions, &catalog);

        assert_eq!(
            report.safety,
            Safety::Unsafe {
                offending: vec!["Almond Butter".to_string()]
            }
        );
        // The offending item is kept, not dropped.
        assert_eq!(report.recipe.items.len(), recipe.items.len());
        assert_eq!(report.recipe.items[2].ingredient.as_str(), "almond-butter");
    }

    #[test]
    fn test_intolerances_are_matched_like_allergies() {
        let catalog = seed::builtin();
        let recipe = seed::builtin()
            .recipes
            .iter()
            .find(|r| r.id == "morning-armor")
            .unwrap()
            .clone();
        let restrictions = Restrictions {
            allergies: vec![],
            intolerances: vec!["Lactose".to_string()],
        };

        let report = apply_substitutions(&recipe, &restrictions, &catalog);

        assert_eq!(report.safety, Safety::Safe);
        assert!(report.swaps.iter().any(|s| s.from == "Greek Yogurt"));
    }
}
