//! # Pantry Staples Module
//!
//! Ingredients found in most kitchens. The matcher can leave them out of the
//! score so that "salt" or "olive oil" never keeps a recipe from matching.

use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::normalizer::{IngredientNormalizer, RuleBasedNormalizer};

/// Canonical names of common pantry staples
pub const PANTRY_STAPLES: &[&str] = &[
    "salt",
    "pepper",
    "black pepper",
    "white pepper",
    "oil",
    "olive oil",
    "vegetable oil",
    "canola oil",
    "cooking oil",
    "water",
    "sugar",
    "flour",
    "all-purpose flour",
    "butter",
    "garlic powder",
    "onion powder",
    "baking soda",
    "baking powder",
];

lazy_static! {
    static ref STAPLE_SET: HashSet<&'static str> = PANTRY_STAPLES.iter().copied().collect();
    // Shared by every staple check instead of building a normalizer per call
    static ref SHARED_NORMALIZER: RuleBasedNormalizer = RuleBasedNormalizer::new();
}

/// Check whether an already-canonical ingredient name is a pantry staple
pub fn is_staple_term(canonical: &str) -> bool {
    STAPLE_SET.contains(canonical)
}

/// Check whether a raw ingredient line refers to a pantry staple
///
/// # Examples
///
/// ```rust
/// use recipe_matcher::staples::is_pantry_staple;
///
/// assert!(is_pantry_staple("1 tsp salt"));
/// assert!(is_pantry_staple("freshly ground pepper"));
/// assert!(!is_pantry_staple("chicken"));
/// ```
pub fn is_pantry_staple(ingredient: &str) -> bool {
    is_staple_term(&SHARED_NORMALIZER.normalize(ingredient))
}
