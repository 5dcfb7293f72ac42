//! # Ingredient Matcher Module
//!
//! Given the ingredients a user has on hand, scores every candidate recipe by the
//! share of its ingredients the user can cover, either directly or through a
//! substitute, and returns the recipes worth showing, best first.
//!
//! ## Scoring
//!
//! - Each recipe ingredient is normalized and compared against the normalized
//!   user ingredients (exact match, containment, or substitution group)
//! - Pantry staples can be left out of the score entirely
//! - The percentage maps to a [`MatchLevel`]: 100 Perfect, 80+ High, 60+ Medium, else Low

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::normalizer::{new_normalizer, IngredientNormalizer};
use crate::recipe::{Category, Recipe};
use crate::staples::is_staple_term;

/// Label used for a level ordinal that does not name a [`MatchLevel`]
pub const UNKNOWN_LEVEL_LABEL: &str = "Unknown";

/// Quality of a recipe match.
///
/// Ordered from best to worst: `Perfect < High < Medium < Low`. A result is
/// "worse than" a threshold when its level compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MatchLevel {
    /// 100% of the counted ingredients are covered
    Perfect = 0,
    /// 80% or more
    High = 1,
    /// 60% or more
    Medium = 2,
    /// Below 60%
    Low = 3,
}

impl MatchLevel {
    /// Derive the level from a match percentage
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            MatchLevel::Perfect
        } else if percentage >= 80.0 {
            MatchLevel::High
        } else if percentage >= 60.0 {
            MatchLevel::Medium
        } else {
            MatchLevel::Low
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(MatchLevel::Perfect),
            1 => Some(MatchLevel::High),
            2 => Some(MatchLevel::Medium),
            3 => Some(MatchLevel::Low),
            _ => None,
        }
    }

    /// Parse a level name such as `"perfect"` or `"Medium"`
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "perfect" => Some(MatchLevel::Perfect),
            "high" => Some(MatchLevel::High),
            "medium" => Some(MatchLevel::Medium),
            "low" => Some(MatchLevel::Low),
            _ => None,
        }
    }

    /// Display label for chat output
    pub fn label(&self) -> &'static str {
        match self {
            MatchLevel::Perfect => "Perfect Match",
            MatchLevel::High => "Almost There",
            MatchLevel::Medium => "Partial Match",
            MatchLevel::Low => "Low Match",
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Human-readable description of a match level
pub fn match_level_string(level: MatchLevel) -> &'static str {
    level.label()
}

/// Human-readable description of a raw level ordinal, `"Unknown"` when out of range
pub fn match_level_string_for_ordinal(ordinal: u8) -> &'static str {
    MatchLevel::from_ordinal(ordinal).map_or(UNKNOWN_LEVEL_LABEL, |level| level.label())
}

/// Options controlling which recipes are returned
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    /// Only return perfect matches
    pub strict_match: bool,
    /// Only consider recipes of this category
    pub category_filter: Option<Category>,
    /// Leave common pantry staples out of the score
    pub exclude_staples: bool,
    /// Drop results worse than this level
    pub min_match_level: MatchLevel,
    /// Maximum number of results, 0 for unlimited
    pub max_results: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            strict_match: false,
            category_filter: None,
            exclude_staples: true,
            min_match_level: MatchLevel::Medium,
            max_results: 20,
        }
    }
}

/// Score of one recipe against the user's ingredients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub recipe: &'a Recipe,
    /// Covered share of counted ingredients, in `[0, 100]`
    pub match_percentage: f64,
    /// Original names of covered ingredients, in recipe order
    pub matched_items: Vec<String>,
    /// Original names of uncovered ingredients, in recipe order
    pub missing_items: Vec<String>,
    pub match_level: MatchLevel,
}

/// Results split by level for display. Low matches are not shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchSummary<'a> {
    pub perfect: Vec<MatchResult<'a>>,
    pub high: Vec<MatchResult<'a>>,
    pub medium: Vec<MatchResult<'a>>,
    pub total_matches: usize,
}

impl<'a> MatchSummary<'a> {
    pub fn from_results(results: Vec<MatchResult<'a>>) -> Self {
        let total_matches = results.len();
        let mut grouped = group_by_match_level(results);

        Self {
            perfect: grouped.remove(&MatchLevel::Perfect).unwrap_or_default(),
            high: grouped.remove(&MatchLevel::High).unwrap_or_default(),
            medium: grouped.remove(&MatchLevel::Medium).unwrap_or_default(),
            total_matches,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }
}

/// Normalized, de-duplicated user ingredients in first-seen order
struct UserPantry {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

/// Matches user ingredients against recipes
#[derive(Clone)]
pub struct IngredientMatcher {
    normalizer: Arc<dyn IngredientNormalizer>,
}

impl IngredientMatcher {
    /// Create a matcher over the given normalizer
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recipe_matcher::matcher::{IngredientMatcher, MatchLevel, MatchOptions};
    /// use recipe_matcher::normalizer::new_normalizer;
    /// use recipe_matcher::recipe::{Category, Recipe};
    ///
    /// let matcher = IngredientMatcher::new(new_normalizer());
    /// let recipes = vec![Recipe::new("1", "Carbonara", Category::Pasta)
    ///     .with_ingredient_names(&["spaghetti", "eggs", "parmesan", "bacon", "black pepper"])];
    ///
    /// let results = matcher.match_recipes(
    ///     &["linguine", "eggs", "romano", "bacon"],
    ///     &recipes,
    ///     &MatchOptions::default(),
    /// );
    /// assert_eq!(results.len(), 1);
    /// assert_eq!(results[0].match_level, MatchLevel::Perfect);
    /// ```
    pub fn new(normalizer: Arc<dyn IngredientNormalizer>) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &Arc<dyn IngredientNormalizer> {
        &self.normalizer
    }

    /// Score `recipes` against `user_ingredients` and return the results that
    /// pass `options`, sorted by match percentage (descending, ties keep input order)
    pub fn match_recipes<'a, S, I>(
        &self,
        user_ingredients: &[S],
        recipes: I,
        options: &MatchOptions,
    ) -> Vec<MatchResult<'a>>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = &'a Recipe>,
    {
        let pantry = self.normalize_user_ingredients(user_ingredients);
        if pantry.ordered.is_empty() {
            debug!("No usable user ingredients, skipping matching");
            return Vec::new();
        }

        debug!(
            "Matching {} normalized user ingredients: {:?}",
            pantry.ordered.len(),
            pantry.ordered
        );

        let mut results = Vec::new();
        let mut considered = 0usize;

        for recipe in recipes {
            if let Some(category) = options.category_filter {
                if recipe.category != category {
                    trace!("Skipping '{}': category {} != {}", recipe.title, recipe.category, category);
                    continue;
                }
            }
            considered += 1;

            let result = self.match_recipe(recipe, &pantry, options.exclude_staples);

            if result.match_level > options.min_match_level {
                trace!(
                    "Dropping '{}': {:.1}% is below {}",
                    recipe.title,
                    result.match_percentage,
                    options.min_match_level
                );
                continue;
            }

            if options.strict_match && result.match_level != MatchLevel::Perfect {
                continue;
            }

            results.push(result);
        }

        // Stable: equal percentages keep recipe input order
        results.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));

        if options.max_results > 0 && results.len() > options.max_results {
            results.truncate(options.max_results);
        }

        debug!(
            "Matched {} of {} candidate recipes",
            results.len(),
            considered
        );
        results
    }

    /// Match then split the results by level for display
    pub fn summarize<'a, S, I>(
        &self,
        user_ingredients: &[S],
        recipes: I,
        options: &MatchOptions,
    ) -> MatchSummary<'a>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = &'a Recipe>,
    {
        MatchSummary::from_results(self.match_recipes(user_ingredients, recipes, options))
    }

    fn normalize_user_ingredients<S: AsRef<str>>(&self, user_ingredients: &[S]) -> UserPantry {
        let mut pantry = UserPantry {
            ordered: Vec::with_capacity(user_ingredients.len()),
            lookup: HashSet::with_capacity(user_ingredients.len()),
        };

        for ingredient in user_ingredients {
            let normalized = self.normalizer.normalize(ingredient.as_ref());
            if !normalized.is_empty() && pantry.lookup.insert(normalized.clone()) {
                pantry.ordered.push(normalized);
            }
        }

        pantry
    }

    fn match_recipe<'a>(
        &self,
        recipe: &'a Recipe,
        pantry: &UserPantry,
        exclude_staples: bool,
    ) -> MatchResult<'a> {
        let mut matched_items = Vec::new();
        let mut missing_items = Vec::new();

        for ingredient in &recipe.ingredients {
            let normalized = self.normalizer.normalize(&ingredient.name);

            if exclude_staples && is_staple_term(&normalized) {
                trace!("'{}': skipping staple '{}'", recipe.title, ingredient.name);
                continue;
            }

            if self.has_ingredient(&normalized, pantry) {
                matched_items.push(ingredient.name.clone());
            } else {
                missing_items.push(ingredient.name.clone());
            }
        }

        let total_required = matched_items.len() + missing_items.len();
        // A recipe made only of staples is fully covered
        let match_percentage = if total_required > 0 {
            matched_items.len() as f64 / total_required as f64 * 100.0
        } else {
            100.0
        };
        let match_level = MatchLevel::from_percentage(match_percentage);

        trace!(
            "'{}': {}/{} ingredients -> {:.1}% ({})",
            recipe.title,
            matched_items.len(),
            total_required,
            match_percentage,
            match_level
        );

        MatchResult {
            recipe,
            match_percentage,
            matched_items,
            missing_items,
            match_level,
        }
    }

    fn has_ingredient(&self, recipe_ingredient: &str, pantry: &UserPantry) -> bool {
        if recipe_ingredient.is_empty() {
            return false;
        }

        if pantry.lookup.contains(recipe_ingredient) {
            return true;
        }

        pantry
            .ordered
            .iter()
            .any(|user_ingredient| self.normalizer.are_similar(recipe_ingredient, user_ingredient))
    }
}

impl Default for IngredientMatcher {
    fn default() -> Self {
        Self::new(new_normalizer())
    }
}

impl fmt::Debug for IngredientMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngredientMatcher").finish_non_exhaustive()
    }
}

/// Group results by level, preserving their relative order within each level
pub fn group_by_match_level<'a>(
    results: impl IntoIterator<Item = MatchResult<'a>>,
) -> HashMap<MatchLevel, Vec<MatchResult<'a>>> {
    let mut grouped: HashMap<MatchLevel, Vec<MatchResult<'a>>> = HashMap::new();

    for result in results {
        grouped.entry(result.match_level).or_default().push(result);
    }

    grouped
}
