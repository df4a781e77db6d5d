//! Shop matching and scoring.
//!
//! Every shop in the catalog is scored against the target recipe and
//! returned; the caller decides how many to display. The score is a
//! weighted mean of ingredient coverage, layering fit, and normalized
//! rating; all weights and estimation constants are tunables, not magic
//! numbers.

use catalog::{CuratedRecipe, GeoPoint, IngredientCatalog, Shop, ShopCatalog, ShopId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Tunable weights and estimation constants for shop matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    /// Weight of the covered-ingredient fraction. Dominant by default so a
    /// shop covering more of the recipe always outranks one covering less.
    #[serde(default = "default_coverage_weight")]
    pub coverage_weight: f32,
    /// Weight of layering support when the recipe requires layering.
    #[serde(default = "default_layering_weight")]
    pub layering_weight: f32,
    /// Weight of the shop's declared rating, normalized to 0..1.
    #[serde(default = "default_rating_weight")]
    pub rating_weight: f32,
    /// Ingredient count included in a shop's base prep time.
    #[serde(default = "default_baseline_ingredient_count")]
    pub baseline_ingredient_count: usize,
    /// Added minutes per ingredient beyond the baseline.
    #[serde(default = "default_per_extra_ingredient_minutes")]
    pub per_extra_ingredient_minutes: u32,
}

fn default_coverage_weight() -> f32 {
    0.70
}

fn default_layering_weight() -> f32 {
    0.15
}

fn default_rating_weight() -> f32 {
    0.15
}

fn default_baseline_ingredient_count() -> usize {
    4
}

fn default_per_extra_ingredient_minutes() -> u32 {
    1
}

impl Default for MatchWeights {
    fn default() -> Self {
        MatchWeights {
            coverage_weight: default_coverage_weight(),
            layering_weight: default_layering_weight(),
            rating_weight: default_rating_weight(),
            baseline_ingredient_count: default_baseline_ingredient_count(),
            per_extra_ingredient_minutes: default_per_extra_ingredient_minutes(),
        }
    }
}

/// How well one shop can produce the target recipe. Derived per request,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ShopMatch {
    pub shop_id: ShopId,
    pub shop_name: String,
    /// 0..=100 heuristic; higher means less substitution needed.
    pub score: u8,
    pub rating: f32,
    pub estimated_price_cents: u32,
    pub estimated_prep_minutes: u32,
    /// Names of target ingredients the shop does not stock.
    pub missing_ingredients: Vec<String>,
    /// Human-readable same-category swap suggestions for missing items.
    pub suggested_swaps: Vec<String>,
    pub distance_km: Option<f64>,
}

/// Score every shop against the recipe and return them ranked.
///
/// Ordering: score descending, then distance ascending (unknown distance
/// sorts last), then rating descending. Deterministic for identical inputs.
/// An empty shop catalog yields an empty vec, which is a valid result.
pub fn match_shops<S, C>(
    recipe: &CuratedRecipe,
    shops: &S,
    ingredients: &C,
    weights: &MatchWeights,
    origin: Option<GeoPoint>,
) -> Vec<ShopMatch>
where
    S: ShopCatalog + ?Sized,
    C: IngredientCatalog + ?Sized,
{
    let mut matches: Vec<ShopMatch> = shops
        .all()
        .iter()
        .map(|shop| score_shop(recipe, shop, ingredients, weights, origin))
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| distance_order(a.distance_km, b.distance_km))
            .then_with(|| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal))
    });

    matches
}

fn score_shop<C>(
    recipe: &CuratedRecipe,
    shop: &Shop,
    ingredients: &C,
    weights: &MatchWeights,
    origin: Option<GeoPoint>,
) -> ShopMatch
where
    C: IngredientCatalog + ?Sized,
{
    let required = recipe.items.len();
    let mut missing_ingredients = Vec::new();
    let mut suggested_swaps = Vec::new();

    for item in &recipe.items {
        if shop.capabilities.stocks(&item.ingredient) {
            continue;
        }

        let name = ingredient_name(ingredients, &item.ingredient);
        if let Some(swap) = suggest_swap(shop, ingredients, &item.ingredient, &name) {
            suggested_swaps.push(swap);
        }
        missing_ingredients.push(name);
    }

    let coverage = if required == 0 {
        1.0
    } else {
        (required - missing_ingredients.len()) as f32 / required as f32
    };
    let layering_fit = if recipe.requires_layering {
        if shop.capabilities.can_layer { 1.0 } else { 0.0 }
    } else {
        1.0
    };
    let rating_norm = (shop.rating / 5.0).clamp(0.0, 1.0);

    let total_weight = weights.coverage_weight + weights.layering_weight + weights.rating_weight;
    let fraction = if total_weight > 0.0 {
        (weights.coverage_weight * coverage
            + weights.layering_weight * layering_fit
            + weights.rating_weight * rating_norm)
            / total_weight
    } else {
        0.0
    };
    let score = (fraction.clamp(0.0, 1.0) * 100.0).round() as u8;

    ShopMatch {
        shop_id: shop.id.clone(),
        shop_name: shop.name.clone(),
        score,
        rating: shop.rating,
        estimated_price_cents: estimate_price(recipe, shop, ingredients),
        estimated_prep_minutes: estimate_prep_minutes(recipe, shop, weights),
        missing_ingredients,
        suggested_swaps,
        distance_km: origin.map(|o| o.distance_km(&shop.location)),
    }
}

/// First same-category ingredient the shop does stock, as a swap string.
fn suggest_swap<C>(
    shop: &Shop,
    ingredients: &C,
    missing: &catalog::IngredientId,
    missing_name: &str,
) -> Option<String>
where
    C: IngredientCatalog + ?Sized,
{
    let category = ingredients.get(missing)?.category;
    let candidate = shop
        .capabilities
        .stocked_in(category)
        .iter()
        .find(|id| *id != missing)?;
    let candidate_name = ingredient_name(ingredients, candidate);
    Some(format!("Swap {} for {}", missing_name, candidate_name))
}

fn ingredient_name<C>(ingredients: &C, id: &catalog::IngredientId) -> String
where
    C: IngredientCatalog + ?Sized,
{
    ingredients
        .get(id)
        .map(|i| i.name.clone())
        .unwrap_or_else(|| id.to_string())
}

/// Mean menu price when the shop has a menu; otherwise the catalog unit
/// costs of the target ingredients summed.
fn estimate_price<C>(recipe: &CuratedRecipe, shop: &Shop, ingredients: &C) -> u32
where
    C: IngredientCatalog + ?Sized,
{
    if !shop.menu.is_empty() {
        let total: u32 = shop.menu.iter().map(|m| m.price_cents).sum();
        return total / shop.menu.len() as u32;
    }

    recipe
        .items
        .iter()
        .filter_map(|item| ingredients.get(&item.ingredient))
        .map(|i| i.unit_cost_cents)
        .sum()
}

fn estimate_prep_minutes(recipe: &CuratedRecipe, shop: &Shop, weights: &MatchWeights) -> u32 {
    let extra = recipe
        .items
        .len()
        .saturating_sub(weights.baseline_ingredient_count) as u32;
    shop.capabilities.base_prep_minutes + extra * weights.per_extra_ingredient_minutes
}

fn distance_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_order_unknown_sorts_last() {
        assert_eq!(distance_order(Some(1.0), None), Ordering::Less);
        assert_eq!(distance_order(None, Some(1.0)), Ordering::Greater);
        assert_eq!(distance_order(None, None), Ordering::Equal);
        assert_eq!(distance_order(Some(0.5), Some(2.0)), Ordering::Less);
    }

    #[test]
    fn test_zero_total_weight_scores_zero() {
        let catalog = catalog::seed::builtin();
        let recipe = catalog.recipes[0].clone();
        let weights = MatchWeights {
            coverage_weight: 0.0,
            layering_weight: 0.0,
            rating_weight: 0.0,
            ..MatchWeights::default()
        };

        let matches = match_shops(&recipe, &catalog, &catalog, &weights, None);
        assert!(matches.iter().all(|m| m.score == 0));
    }
}
