//! Builtin reference data: the authored ingredient catalog, curated recipe
//! library, and partner shop catalog. Data authoring invariants: every id
//! referenced by a recipe or shop exists in the ingredient list, and every
//! health goal has at least one recipe (checked by `integrity::validate`).

use crate::ingredient::{
    Ingredient, IngredientCategory, IngredientId, NutritionFacts, QualityTier,
};
use crate::recipe::{CuratedRecipe, HealthGoal, RecipeItem, Unit};
use crate::repository::InMemoryCatalog;
use crate::shop::{GeoPoint, MenuItem, Shop, ShopCapabilities, ShopId};
use std::collections::BTreeMap;

/// The builtin catalog used when no external data source is configured.
pub fn builtin() -> InMemoryCatalog {
    InMemoryCatalog {
        ingredients: ingredients(),
        recipes: recipes(),
        shops: shops(),
    }
}

#[allow(clippy::too_many_arguments)]
fn ingredient(
    id: &str,
    name: &str,
    category: IngredientCategory,
    tier: QualityTier,
    unit_cost_cents: u32,
    allergens: &[&str],
    compounds: &[&str],
    macros: [f32; 6],
) -> Ingredient {
    let [calories, protein_g, carbs_g, fat_g, fiber_g, sugar_g] = macros;
    Ingredient {
        id: IngredientId::new(id),
        name: name.to_string(),
        category,
        nutrition: NutritionFacts {
            calories,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g,
            sugar_g,
            longevity_compounds: compounds.iter().map(|c| c.to_string()).collect(),
        },
        allergens: allergens.iter().map(|a| a.to_string()).collect(),
        unit_cost_cents,
        tier,
    }
}

fn ingredients() -> Vec<Ingredient> {
    use IngredientCategory::*;
    use QualityTier::*;

    vec![
        // macros: calories, protein, carbs, fat, fiber, sugar (per portion)
        ingredient(
            "frozen-blueberries",
            "Frozen Blueberries",
            FrozenFruit,
            Organic,
            180,
            &[],
            &["anthocyanins"],
            [68.0, 0.9, 17.0, 0.4, 2.9, 12.0],
        ),
        ingredient(
            "frozen-mango",
            "Frozen Mango",
            FrozenFruit,
            Standard,
            150,
            &[],
            &["carotenoids"],
            [72.0, 1.0, 18.0, 0.5, 1.9, 16.0],
        ),
        ingredient(
            "frozen-strawberries",
            "Frozen Strawberries",
            FrozenFruit,
            Standard,
            140,
            &[],
            &["ellagic-acid"],
            [46.0, 1.0, 11.0, 0.4, 2.8, 7.0],
        ),
        ingredient(
            "frozen-banana",
            "Frozen Banana",
            FrozenFruit,
            Standard,
            90,
            &[],
            &[],
            [105.0, 1.3, 27.0, 0.4, 3.1, 14.0],
        ),
        ingredient(
            "oat-milk",
            "Oat Milk",
            Milk,
            Standard,
            80,
            &["gluten"],
            &["beta-glucan"],
            [90.0, 2.0, 16.0, 2.5, 1.0, 7.0],
        ),
        ingredient(
            "almond-milk",
            "Almond Milk",
            Milk,
            Standard,
            85,
            &["tree-nuts"],
            &["vitamin-e"],
            [40.0, 1.5, 3.0, 3.0, 0.5, 2.0],
        ),
        ingredient(
            "whole-milk",
            "Whole Milk",
            Milk,
            Standard,
            60,
            &["dairy", "lactose"],
            &[],
            [120.0, 6.2, 9.3, 6.3, 0.0, 9.3],
        ),
        ingredient(
            "coconut-water",
            "Coconut Water",
            Milk,
            Premium,
            110,
            &[],
            &["electrolytes"],
            [45.0, 1.7, 8.9, 0.5, 2.6, 6.3],
        ),
        ingredient(
            "greek-yogurt",
            "Greek Yogurt",
            Yogurt,
            Premium,
            95,
            &["dairy", "lactose"],
            &["probiotics"],
            [100.0, 17.0, 6.0, 0.7, 0.0, 4.0],
        ),
        ingredient(
            "coconut-yogurt",
            "Coconut Yogurt",
            Yogurt,
            Premium,
            130,
            &[],
            &["probiotics"],
            [140.0, 1.0, 8.0, 11.0, 1.5, 5.0],
        ),
        ingredient(
            "chia-seeds",
            "Chia Seeds",
            Superfood,
            Organic,
            70,
            &[],
            &["omega-3", "polyphenols"],
            [58.0, 2.0, 5.0, 3.7, 4.1, 0.0],
        ),
        ingredient(
            "almond-butter",
            "Almond Butter",
            Superfood,
            Premium,
            120,
            &["tree-nuts"],
            &["vitamin-e", "omega-3"],
            [98.0, 3.4, 3.0, 8.9, 1.6, 0.7],
        ),
        ingredient(
            "matcha-powder",
            "Matcha Powder",
            Superfood,
            Organic,
            160,
            &[],
            &["catechins", "l-theanine"],
            [6.0, 0.6, 0.8, 0.1, 0.6, 0.0],
        ),
        ingredient(
            "oat-milk-foam",
            "Oat Milk Foam",
            Foam,
            Standard,
            50,
            &["gluten"],
            &[],
            [30.0, 0.7, 5.3, 0.8, 0.3, 2.3],
        ),
        ingredient(
            "coconut-foam",
            "Coconut Foam",
            Foam,
            Premium,
            75,
            &[],
            &[],
            [55.0, 0.5, 2.0, 5.2, 0.2, 1.5],
        ),
        ingredient(
            "honey",
            "Raw Honey",
            Sweetener,
            Organic,
            55,
            &[],
            &["flavonoids"],
            [64.0, 0.1, 17.3, 0.0, 0.0, 17.2],
        ),
        ingredient(
            "date-syrup",
            "Date Syrup",
            Sweetener,
            Standard,
            65,
            &[],
            &["polyphenols"],
            [60.0, 0.3, 15.0, 0.0, 0.6, 14.0],
        ),
        ingredient(
            "spinach",
            "Baby Spinach",
            Vegetable,
            Organic,
            60,
            &[],
            &["lutein", "folate"],
            [7.0, 0.9, 1.1, 0.1, 0.7, 0.1],
        ),
        ingredient(
            "ginger-root",
            "Ginger Root",
            Vegetable,
            Standard,
            45,
            &[],
            &["gingerol"],
            [9.0, 0.2, 2.0, 0.1, 0.2, 0.2],
        ),
    ]
}

fn item(id: &str, amount: f32, unit: Unit, purpose: &str) -> RecipeItem {
    RecipeItem {
        ingredient: IngredientId::new(id),
        amount,
        unit,
        purpose: purpose.to_string(),
    }
}

fn recipes() -> Vec<CuratedRecipe> {
    use Unit::*;

    vec![
        // First entry doubles as the designated fallback recipe.
        CuratedRecipe {
            id: "full-tank".to_string(),
            name: "Full Tank".to_string(),
            goal: HealthGoal::MealReplacement,
            items: vec![
                item("frozen-banana", 150.0, Grams, "satiating-base"),
                item("whole-milk", 200.0, Milliliters, "protein-base"),
                item("greek-yogurt", 100.0, Grams, "protein-boost"),
                item("almond-butter", 25.0, Grams, "healthy-fats"),
                item("date-syrup", 10.0, Milliliters, "slow-sugars"),
            ],
            rationale: vec![
                "Enough protein and fat to replace a full meal".to_string(),
                "Banana and date syrup keep energy release gradual".to_string(),
            ],
            requires_layering: false,
        },
        // The only brain-health entry; selection for that goal is deterministic.
        CuratedRecipe {
            id: "focus-flow".to_string(),
            name: "Focus Flow".to_string(),
            goal: HealthGoal::BrainHealth,
            items: vec![
                item("frozen-blueberries", 120.0, Grams, "antioxidant-base"),
                item("oat-milk", 200.0, Milliliters, "creamy-base"),
                item("almond-butter", 20.0, Grams, "omega-fats"),
                item("coconut-water", 50.0, Milliliters, "hydration"),
                item("chia-seeds", 15.0, Grams, "omega-3"),
            ],
            rationale: vec![
                "Anthocyanins in blueberries support cognitive function".to_string(),
                "Omega-3 fats from chia and almond feed the brain".to_string(),
            ],
            requires_layering: false,
        },
        CuratedRecipe {
            id: "green-reset".to_string(),
            name: "Green Reset".to_string(),
            goal: HealthGoal::CalmStomach,
            items: vec![
                item("frozen-mango", 100.0, Grams, "gentle-sweetness"),
                item("coconut-yogurt", 120.0, Grams, "probiotics"),
                item("ginger-root", 8.0, Grams, "digestive-aid"),
                item("coconut-water", 150.0, Milliliters, "hydration"),
            ],
            rationale: vec![
                "Ginger and probiotics settle an uneasy stomach".to_string(),
                "No dairy, no refined sugar".to_string(),
            ],
            requires_layering: false,
        },
        CuratedRecipe {
            id: "velvet-calm".to_string(),
            name: "Velvet Calm".to_string(),
            goal: HealthGoal::CalmStomach,
            items: vec![
                item("frozen-banana", 120.0, Grams, "gentle-base"),
                item("oat-milk", 180.0, Milliliters, "soothing-base"),
                item("honey", 10.0, Milliliters, "mild-sweetness"),
                item("coconut-foam", 1.0, Scoops, "soft-finish"),
            ],
            rationale: vec!["Mild, low-acid ingredients throughout".to_string()],
            requires_layering: true,
        },
        CuratedRecipe {
            id: "morning-armor".to_string(),
            name: "Morning Armor".to_string(),
            goal: HealthGoal::ImmuneSupport,
            items: vec![
                item("frozen-strawberries", 120.0, Grams, "vitamin-c"),
                item("greek-yogurt", 100.0, Grams, "probiotics"),
                item("honey", 12.0, Milliliters, "antimicrobial"),
                item("ginger-root", 6.0, Grams, "anti-inflammatory"),
            ],
            rationale: vec![
                "Vitamin C plus probiotics for immune defense".to_string(),
            ],
            requires_layering: false,
        },
        CuratedRecipe {
            id: "spark-plug".to_string(),
            name: "Spark Plug".to_string(),
            goal: HealthGoal::EnergyBoost,
            items: vec![
                item("matcha-powder", 1.0, Scoops, "clean-caffeine"),
                item("frozen-banana", 120.0, Grams, "quick-carbs"),
                item("oat-milk", 200.0, Milliliters, "creamy-base"),
                item("date-syrup", 12.0, Milliliters, "fast-sugars"),
                item("oat-milk-foam", 1.0, Scoops, "matcha-top"),
            ],
            rationale: vec![
                "Matcha delivers steady caffeine without the crash".to_string(),
            ],
            requires_layering: true,
        },
    ]
}

fn stocked(entries: &[(IngredientCategory, &[&str])]) -> BTreeMap<IngredientCategory, Vec<IngredientId>> {
    entries
        .iter()
        .map(|(category, ids)| {
            (
                *category,
                ids.iter().map(|id| IngredientId::new(*id)).collect(),
            )
        })
        .collect()
}

fn menu_item(name: &str, ingredient_ids: &[&str], price_cents: u32) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        ingredient_ids: ingredient_ids.iter().map(|id| IngredientId::new(*id)).collect(),
        price_cents,
    }
}

fn shops() -> Vec<Shop> {
    use IngredientCategory::*;

    vec![
        // Stocks a strict superset of Focus Flow's ingredients.
        Shop {
            id: ShopId::new("blend-and-bloom"),
            name: "Blend & Bloom".to_string(),
            address: "Weserstraße 12".to_string(),
            city: "Berlin".to_string(),
            location: GeoPoint { lat: 52.4885, lng: 13.4265 },
            menu: vec![
                menu_item(
                    "Berry Brain",
                    &["frozen-blueberries", "oat-milk", "chia-seeds"],
                    690,
                ),
                menu_item(
                    "Island Morning",
                    &["frozen-mango", "coconut-yogurt", "coconut-water"],
                    750,
                ),
            ],
            capabilities: ShopCapabilities {
                stocked: stocked(&[
                    (
                        FrozenFruit,
                        &["frozen-blueberries", "frozen-mango", "frozen-banana"],
                    ),
                    (Milk, &["oat-milk", "almond-milk", "coconut-water"]),
                    (Yogurt, &["greek-yogurt", "coconut-yogurt"]),
                    (Superfood, &["chia-seeds", "almond-butter", "matcha-powder"]),
                    (Foam, &["oat-milk-foam", "coconut-foam"]),
                    (Sweetener, &["honey", "date-syrup"]),
                ]),
                can_layer: true,
                base_prep_minutes: 5,
            },
            rating: 4.8,
        },
        Shop {
            id: ShopId::new("juice-junction"),
            name: "Juice Junction".to_string(),
            address: "Oranienstraße 44".to_string(),
            city: "Berlin".to_string(),
            location: GeoPoint { lat: 52.5012, lng: 13.4187 },
            menu: vec![
                menu_item(
                    "Green Machine",
                    &["frozen-banana", "oat-milk", "matcha-powder"],
                    620,
                ),
            ],
            capabilities: ShopCapabilities {
                // No almond butter: a Focus Flow order needs a superfood swap.
                stocked: stocked(&[
                    (
                        FrozenFruit,
                        &[
                            "frozen-blueberries",
                            "frozen-strawberries",
                            "frozen-banana",
                        ],
                    ),
                    (Milk, &["oat-milk", "whole-milk", "coconut-water"]),
                    (Yogurt, &["greek-yogurt"]),
                    (Superfood, &["chia-seeds", "matcha-powder"]),
                    (Sweetener, &["honey"]),
                ]),
                can_layer: false,
                base_prep_minutes: 4,
            },
            rating: 4.2,
        },
        Shop {
            id: ShopId::new("green-counter"),
            name: "The Green Counter".to_string(),
            address: "Kastanienallee 3".to_string(),
            city: "Berlin".to_string(),
            location: GeoPoint { lat: 52.5403, lng: 13.4021 },
            menu: vec![
                menu_item(
                    "Garden Glass",
                    &["frozen-mango", "coconut-water", "ginger-root"],
                    580,
                ),
            ],
            capabilities: ShopCapabilities {
                stocked: stocked(&[
                    (FrozenFruit, &["frozen-mango", "frozen-strawberries"]),
                    (Milk, &["coconut-water", "almond-milk"]),
                    (Yogurt, &["coconut-yogurt"]),
                    (Vegetable, &["ginger-root"]),
                    (Sweetener, &["date-syrup"]),
                ]),
                can_layer: true,
                base_prep_minutes: 6,
            },
            rating: 4.5,
        },
        // Minimal stock, no menu: exercises the unit-cost price fallback.
        Shop {
            id: ShopId::new("corner-cup"),
            name: "Corner Cup".to_string(),
            address: "Sonnenallee 101".to_string(),
            city: "Berlin".to_string(),
            location: GeoPoint { lat: 52.4801, lng: 13.4432 },
            menu: vec![],
            capabilities: ShopCapabilities {
                stocked: stocked(&[
                    (FrozenFruit, &["frozen-banana"]),
                    (Milk, &["whole-milk"]),
                    (Sweetener, &["honey"]),
                ]),
                can_layer: false,
                base_prep_minutes: 3,
            },
            rating: 3.6,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{RecipeLibrary, ShopCatalog};

    #[test]
    fn test_focus_flow_is_the_only_brain_health_recipe() {
        let catalog = builtin();
        let brain = RecipeLibrary::by_goal(&catalog, HealthGoal::BrainHealth);

        assert_eq!(brain.len(), 1);
        assert_eq!(brain[0].name, "Focus Flow");
    }

    #[test]
    fn test_focus_flow_units_as_authored() {
        let catalog = builtin();
        let focus = catalog
            .recipes
            .iter()
            .find(|r| r.id == "focus-flow")
            .unwrap();

        assert_eq!(focus.items.len(), 5);
        let units: Vec<&str> = focus.items.iter().map(|i| i.unit.as_ref()).collect();
        assert_eq!(units, vec!["g", "ml", "g", "ml", "g"]);
    }

    #[test]
    fn test_no_shop_stocks_spinach() {
        let catalog = builtin();
        let spinach = IngredientId::new("spinach");

        assert!(catalog.ingredients.iter().any(|i| i.id == spinach));
        assert!(ShopCatalog::all(&catalog)
            .iter()
            .all(|shop| !shop.capabilities.stocks(&spinach)));
    }

    #[test]
    fn test_blend_and_bloom_covers_focus_flow() {
        let catalog = builtin();
        let focus = catalog
            .recipes
            .iter()
            .find(|r| r.id == "focus-flow")
            .unwrap();
        let shop = catalog
            .shops
            .iter()
            .find(|s| s.id.as_str() == "blend-and-bloom")
            .unwrap();

        for id in focus.ingredient_ids() {
            assert!(shop.capabilities.stocks(id), "missing {}", id);
        }
    }
}
