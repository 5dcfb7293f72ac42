//! Recipe catalog loading.
//!
//! Reads the recipes the matcher runs against from a JSON array, e.g.
//!
//! ```json
//! [{"id": "1", "title": "Pasta Carbonara", "category": "Pasta & Noodles",
//!   "ingredients": [{"name": "spaghetti", "quantity": "400", "unit": "g"}]}]
//! ```

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::CatalogError;
use crate::recipe::Recipe;

/// Load and validate recipes from a JSON file
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>, CatalogError> {
    debug!("Reading recipe catalog from {}", path.display());
    let content = fs::read_to_string(path)?;
    let recipes = parse_recipes(&content)?;

    info!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Parse and validate recipes from a JSON string
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>, CatalogError> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;

    for (position, recipe) in recipes.iter().enumerate() {
        if recipe.title.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "recipe at position {position} (id '{}') has an empty title",
                recipe.id
            )));
        }
    }

    Ok(recipes)
}
