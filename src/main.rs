use anyhow::{bail, Result};
use catalog::{integrity, seed, GeoPoint, InMemoryCatalog, IngredientCatalog};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use recommend::{
    match_shops, CheckIn, Recommendation, Recommender, Restrictions, ShopMatch, TracingSink,
};

/// blendery - mood-driven smoothie recommendations
#[derive(Parser)]
#[command(name = "blendery")]
#[command(about = "Personalized smoothie recipes matched against partner cafés", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a recipe for a check-in and rank partner shops
    Recommend {
        /// Mood id, e.g. foggy, stressed, sluggish
        #[arg(long)]
        mood: String,

        /// Sleep quality, 1 (poor) to 4 (great)
        #[arg(long, default_value_t = 3)]
        sleep: u8,

        /// Allergen tag to avoid (repeatable)
        #[arg(long = "allergy")]
        allergies: Vec<String>,

        /// Intolerance tag to avoid (repeatable)
        #[arg(long = "intolerance")]
        intolerances: Vec<String>,

        /// Latitude for distance ranking
        #[arg(long, requires = "lng")]
        lat: Option<f64>,

        /// Longitude for distance ranking
        #[arg(long, requires = "lat")]
        lng: Option<f64>,

        /// Seed for deterministic recipe selection
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the full recommendation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rank partner shops against one curated recipe
    Shops {
        /// Curated recipe id, e.g. focus-flow
        #[arg(long)]
        recipe: String,

        #[arg(long, requires = "lng")]
        lat: Option<f64>,

        #[arg(long, requires = "lat")]
        lng: Option<f64>,

        #[arg(long)]
        json: bool,
    },
    /// Check catalog integrity (dangling references, goal coverage)
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = blendery::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    blendery::observability::init_observability(&config.observability.log_level)?;

    let catalog = load_catalog(&config)?;

    match cli.command {
        Commands::Recommend {
            mood,
            sleep,
            allergies,
            intolerances,
            lat,
            lng,
            seed,
            json,
        } => recommend_command(
            &config, &catalog, mood, sleep, allergies, intolerances,
            origin(lat, lng), seed, json,
        ),
        Commands::Shops {
            recipe,
            lat,
            lng,
            json,
        } => shops_command(&config, &catalog, &recipe, origin(lat, lng), json),
        Commands::Validate => validate_command(&catalog),
    }
}

fn load_catalog(config: &blendery::config::Config) -> Result<InMemoryCatalog> {
    match &config.catalog.path {
        Some(path) => {
            tracing::info!(path = %path, "loading catalog from file");
            Ok(InMemoryCatalog::from_json_file(path)?)
        }
        None => Ok(seed::builtin()),
    }
}

fn origin(lat: Option<f64>, lng: Option<f64>) -> Option<GeoPoint> {
    Some(GeoPoint {
        lat: lat?,
        lng: lng?,
    })
}

#[allow(clippy::too_many_arguments)]
fn recommend_command(
    config: &blendery::config::Config,
    catalog: &InMemoryCatalog,
    mood: String,
    sleep: u8,
    allergies: Vec<String>,
    intolerances: Vec<String>,
    origin: Option<GeoPoint>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let sink = TracingSink;
    let recommender = Recommender::new(catalog, config.matching.clone(), &sink);

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => {
            use std::time::SystemTime;
            let now = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            StdRng::seed_from_u64(now)
        }
    };

    let check_in = CheckIn {
        mood,
        sleep_quality: sleep,
    };
    let restrictions = Restrictions {
        allergies,
        intolerances,
    };

    let recommendation = recommender.recommend(&check_in, &restrictions, origin, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        print_recommendation(catalog, &recommendation);
    }

    Ok(())
}

fn shops_command(
    config: &blendery::config::Config,
    catalog: &InMemoryCatalog,
    recipe_id: &str,
    origin: Option<GeoPoint>,
    json: bool,
) -> Result<()> {
    let Some(recipe) = catalog.recipes.iter().find(|r| r.id == recipe_id) else {
        bail!("no curated recipe with id '{}'", recipe_id);
    };

    let matches = match_shops(recipe, catalog, catalog, &config.matching, origin);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        println!("Shops ranked for '{}':", recipe.name);
        print_shop_matches(&matches);
    }

    Ok(())
}

fn validate_command(catalog: &InMemoryCatalog) -> Result<()> {
    let issues = integrity::validate(catalog);
    if issues.is_empty() {
        println!("catalog OK: no integrity issues");
        return Ok(());
    }

    for issue in &issues {
        eprintln!("issue: {}", issue);
    }
    bail!("catalog has {} integrity issue(s)", issues.len());
}

fn print_recommendation(catalog: &InMemoryCatalog, recommendation: &Recommendation) {
    if recommendation.goal.is_fallback() {
        println!("(mood not recognized, using default goal)");
    }
    println!(
        "Recipe: {} ({})",
        recommendation.recipe.name, recommendation.recipe.goal
    );
    for item in &recommendation.recipe.items {
        let name = catalog
            .get(&item.ingredient)
            .map(|i| i.name.clone())
            .unwrap_or_else(|| item.ingredient.to_string());
        println!("  {:>6.0} {:<5} {}", item.amount, item.unit.as_ref(), name);
    }
    for line in &recommendation.recipe.rationale {
        println!("  - {}", line);
    }
    for swap in &recommendation.swaps {
        println!("  swap: {} -> {} ({})", swap.from, swap.to, swap.reason);
    }
    if let recommend::Safety::Unsafe { offending } = &recommendation.safety {
        println!("  WARNING: no safe substitute for: {}", offending.join(", "));
    }
    println!(
        "Nutrition: {:.0} kcal, {:.1} g protein, {:.1} g fiber, est. cost {:.2} EUR",
        recommendation.nutrition.calories,
        recommendation.nutrition.protein_g,
        recommendation.nutrition.fiber_g,
        recommendation.nutrition.cost_cents as f32 / 100.0
    );
    println!();
    print_shop_matches(&recommendation.shops);
}

fn print_shop_matches(matches: &[ShopMatch]) {
    if matches.is_empty() {
        println!("No partner shops found.");
        return;
    }

    for m in matches {
        let distance = m
            .distance_km
            .map(|d| format!(", {:.1} km", d))
            .unwrap_or_default();
        println!(
            "  [{:>3}] {} ({:.1}*{}) ~{:.2} EUR, ~{} min",
            m.score,
            m.shop_name,
            m.rating,
            distance,
            m.estimated_price_cents as f32 / 100.0,
            m.estimated_prep_minutes
        );
        if !m.missing_ingredients.is_empty() {
            println!("        missing: {}", m.missing_ingredients.join(", "));
        }
        for swap in &m.suggested_swaps {
            println!("        {}", swap);
        }
    }
}
