//! # Recipe Matcher
//!
//! Works out which stored recipes a user can cook from a free-text list of the
//! ingredients they have, tolerating quantities, units, plurals and preparation
//! words, and recognizing common substitutes.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod matcher;
pub mod normalization_patterns;
pub mod normalizer;
pub mod pantry;
pub mod recipe;
pub mod staples;
pub mod substitutions;

// Re-export types for easier access
pub use matcher::{
    group_by_match_level, match_level_string, IngredientMatcher, MatchLevel, MatchOptions,
    MatchResult, MatchSummary,
};
pub use normalizer::{new_normalizer, IngredientNormalizer, RuleBasedNormalizer};
pub use recipe::{Category, Recipe, RecipeIngredient};
pub use staples::is_pantry_staple;
