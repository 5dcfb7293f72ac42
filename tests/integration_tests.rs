//! # Integration Tests
//!
//! End-to-end runs from a recipe catalog on disk through matching and grouping.

use recipe_matcher::catalog::load_recipes;
use recipe_matcher::config::MatcherConfig;
use recipe_matcher::errors::CatalogError;
use recipe_matcher::matcher::{match_level_string, IngredientMatcher, MatchLevel};
use recipe_matcher::normalizer::new_normalizer;
use recipe_matcher::pantry::parse_ingredient_list;
use recipe_matcher::recipe::Category;
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG: &str = r#"[
    {
        "id": "carbonara",
        "title": "Pasta Carbonara",
        "category": "Pasta & Noodles",
        "ingredients": [
            {"name": "spaghetti", "quantity": "400", "unit": "g"},
            {"name": "eggs", "quantity": "3"},
            {"name": "parmesan", "quantity": "50", "unit": "g", "notes": "grated"},
            {"name": "bacon", "quantity": "150", "unit": "g"},
            {"name": "black pepper"}
        ]
    },
    {
        "id": "caprese",
        "title": "Caprese Salad",
        "category": "Salads",
        "ingredients": [
            {"name": "tomatoes"},
            {"name": "mozzarella"},
            {"name": "fresh basil"},
            {"name": "olive oil"},
            {"name": "salt"}
        ]
    },
    {
        "id": "stir-fry",
        "title": "Chicken Stir Fry",
        "category": "Meat & Poultry",
        "ingredients": [
            {"name": "chicken thigh"},
            {"name": "garlic"},
            {"name": "onion"},
            {"name": "soy sauce"},
            {"name": "vegetable oil"}
        ]
    },
    {
        "id": "omelette",
        "title": "Cheese Omelette",
        "ingredients": [
            {"name": "eggs"},
            {"name": "cheddar"},
            {"name": "butter"}
        ]
    }
]"#;

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_catalog_to_grouped_results() {
    let file = write_catalog(CATALOG);
    let recipes = load_recipes(file.path()).unwrap();
    assert_eq!(recipes.len(), 4);
    assert_eq!(recipes[3].category, Category::Other);

    let ingredients = parse_ingredient_list(
        "linguine, 4 eggs, romano, bacon, cherry tomatoes, mozzarella, chicken, garlic, onion",
    );
    let matcher = IngredientMatcher::new(new_normalizer());
    let summary = matcher.summarize(&ingredients, &recipes, &MatcherConfig::default().options);

    // carbonara 4/4, caprese 2/3, stir fry 3/4, omelette 1/2
    assert_eq!(summary.total_matches, 3);
    let perfect: Vec<&str> = summary.perfect.iter().map(|r| r.recipe.id.as_str()).collect();
    assert_eq!(perfect, vec!["carbonara"]);
    assert!(summary.high.is_empty());
    let medium: Vec<&str> = summary.medium.iter().map(|r| r.recipe.id.as_str()).collect();
    assert_eq!(medium, vec!["stir-fry", "caprese"]);
    assert_eq!(summary.medium[1].missing_items, vec!["fresh basil"]);

    assert_eq!(match_level_string(summary.perfect[0].match_level), "Perfect Match");
}

#[test]
fn test_catalog_with_category_filter_and_staples_counted() {
    let file = write_catalog(CATALOG);
    let recipes = load_recipes(file.path()).unwrap();

    let mut config = MatcherConfig::default();
    config.options.category_filter = Some(Category::Salads);
    config.options.exclude_staples = false;
    config.options.min_match_level = MatchLevel::Low;

    let matcher = IngredientMatcher::new(new_normalizer());
    let results = matcher.match_recipes(&["tomato", "mozzarella", "basil"], &recipes, &config.options);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].recipe.title, "Caprese Salad");
    assert_eq!(results[0].match_percentage, 60.0);
    assert_eq!(results[0].match_level, MatchLevel::Medium);
    assert_eq!(results[0].missing_items, vec!["olive oil", "salt"]);
}

#[test]
fn test_summary_serializes_to_json() {
    let file = write_catalog(CATALOG);
    let recipes = load_recipes(file.path()).unwrap();

    let matcher = IngredientMatcher::new(new_normalizer());
    let summary = matcher.summarize(&["eggs", "cheddar"], &recipes, &MatcherConfig::default().options);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["total_matches"], 1);
    assert_eq!(json["perfect"][0]["recipe"]["title"], "Cheese Omelette");
    assert_eq!(json["perfect"][0]["recipe"]["category"], "Other");
    assert_eq!(json["perfect"][0]["match_level"], "Perfect");
}

#[test]
fn test_missing_catalog_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_recipes(&dir.path().join("missing.json"));

    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn test_invalid_catalog_is_parse_error() {
    let file = write_catalog(r#"{"id": "not-a-list"}"#);

    assert!(matches!(load_recipes(file.path()), Err(CatalogError::Parse(_))));
}
