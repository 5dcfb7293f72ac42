use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use recipe_matcher::catalog::load_recipes;
use recipe_matcher::cli::parse_args;
use recipe_matcher::config::MatcherConfig;
use recipe_matcher::matcher::{match_level_string, IngredientMatcher, MatchResult, MatchSummary};
use recipe_matcher::normalizer::new_normalizer;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_args();
    let mut config = MatcherConfig::from_env()?;
    cli.apply_to(&mut config)?;

    let ingredients = cli.ingredient_list();
    if ingredients.is_empty() {
        println!("Please provide ingredients to match.");
        println!("Usage: what-can-i-cook chicken, pasta, garlic --recipes recipes.json");
        return Ok(());
    }

    let recipes_path = config
        .recipes_path
        .clone()
        .context("No recipe catalog given: pass --recipes or set RECIPES_PATH")?;
    let recipes = load_recipes(&recipes_path)
        .with_context(|| format!("Failed to load recipes from {}", recipes_path.display()))?;

    if recipes.is_empty() {
        warn!("Recipe catalog {} is empty", recipes_path.display());
    }

    let matcher = IngredientMatcher::new(new_normalizer());
    let summary = matcher.summarize(&ingredients, &recipes, &config.options);
    info!("Found {} matching recipes", summary.total_matches);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_summary(&ingredients, &summary));
    }

    Ok(())
}

fn format_summary(ingredients: &[String], summary: &MatchSummary<'_>) -> String {
    if summary.is_empty() {
        return format!("No recipes found matching: {}\n", ingredients.join(", "));
    }

    let mut output = format!("Recipes you can make ({} found)\n", summary.total_matches);
    for group in [&summary.perfect, &summary.high, &summary.medium] {
        let Some(first) = group.first() else {
            continue;
        };

        output.push_str(&format!("\n{}\n", match_level_string(first.match_level)));
        for result in group {
            output.push_str(&format_result(result));
        }
    }

    output
}

fn format_result(result: &MatchResult<'_>) -> String {
    let mut line = format!(
        "  • {} [{}] ({:.0}%)\n",
        result.recipe.title, result.recipe.category, result.match_percentage
    );
    if !result.missing_items.is_empty() {
        line.push_str(&format!("    missing: {}\n", result.missing_items.join(", ")));
    }
    line
}
