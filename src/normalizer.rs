//! # Ingredient Normalizer Module
//!
//! This module reduces free-text ingredient lines to canonical base terms so that
//! "2 cups all-purpose flour, sifted" and "all-purpose flour" compare equal, and
//! decides whether two ingredients are interchangeable.
//!
//! ## Pipeline
//!
//! 1. Trim and lowercase
//! 2. Strip a leading quantity (digits, slashes, unicode fractions)
//! 3. Strip one leading unit word
//! 4. Strip a trailing clause (`, sifted`) or parenthetical note (`(optional)`)
//! 5. Remove preparation and descriptor words (`chopped`, `fresh`, `to taste`)
//! 6. Collapse whitespace
//! 7. Depluralize the trailing word

use std::sync::Arc;
use tracing::trace;

use crate::normalization_patterns::{
    MIN_PLURAL_WORD_LEN, MIN_SINGULAR_LEN, NON_PLURAL_ENDINGS, PLURAL_SUFFIXES, PREP_WORDS_REGEX,
    QUANTITY_REGEX, SIBILANT_STEM_ENDINGS, TRAILING_NOTE_REGEX, UNIT_REGEX,
};
use crate::substitutions::SubstitutionIndex;

/// Normalizes ingredient names for matching
pub trait IngredientNormalizer: Send + Sync {
    /// Extract the canonical base ingredient from a full ingredient line.
    ///
    /// "2 cups all-purpose flour, sifted" -> "all-purpose flour"
    fn normalize(&self, raw: &str) -> String;

    /// Check whether two ingredients can substitute each other.
    ///
    /// "butter" and "margarine" -> true
    fn are_similar(&self, a: &str, b: &str) -> bool;
}

/// Build the default normalizer, ready to be shared between the matcher and
/// the pantry
pub fn new_normalizer() -> Arc<dyn IngredientNormalizer> {
    Arc::new(RuleBasedNormalizer::new())
}

/// Run the normalization pipeline on one ingredient line.
///
/// Applying it to its own output returns that output unchanged.
pub fn canonical_form(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let lowered = trimmed.to_lowercase();
    let without_quantity = QUANTITY_REGEX.replace(&lowered, "");
    let without_unit = UNIT_REGEX.replace(&without_quantity, "");
    let without_notes = TRAILING_NOTE_REGEX.replace(&without_unit, "");
    let without_prep = PREP_WORDS_REGEX.replace_all(&without_notes, " ");

    let collapsed = without_prep.split_whitespace().collect::<Vec<&str>>().join(" ");
    depluralize(&collapsed).trim().to_string()
}

/// Convert the trailing word of `text` from plural to singular.
///
/// Words of three characters or fewer are left untouched, and a rule only
/// applies when the singular keeps at least two characters. The result never
/// ends in a plural suffix a second pass would strip.
pub fn depluralize(text: &str) -> String {
    let (head, word) = match text.rfind(' ') {
        Some(pos) => text.split_at(pos + 1),
        None => ("", text),
    };

    if word.chars().count() <= MIN_PLURAL_WORD_LEN
        || NON_PLURAL_ENDINGS.iter().any(|ending| word.ends_with(ending))
    {
        return text.to_string();
    }

    for &(suffix, replacement) in PLURAL_SUFFIXES {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if suffix == "es" && !SIBILANT_STEM_ENDINGS.iter().any(|ending| stem.ends_with(ending)) {
            continue;
        }

        let candidate = format!("{stem}{replacement}");
        if candidate.chars().count() >= MIN_SINGULAR_LEN {
            return format!("{head}{candidate}");
        }
    }

    text.to_string()
}

/// Rule-based [`IngredientNormalizer`] driven by fixed regex and substitution tables
#[derive(Debug, Clone, Default)]
pub struct RuleBasedNormalizer {
    substitution_index: SubstitutionIndex,
}

impl RuleBasedNormalizer {
    /// Create a normalizer over the built-in substitution groups
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recipe_matcher::normalizer::{IngredientNormalizer, RuleBasedNormalizer};
    ///
    /// let normalizer = RuleBasedNormalizer::new();
    /// assert_eq!(normalizer.normalize("2 cups all-purpose flour, sifted"), "all-purpose flour");
    /// assert!(normalizer.are_similar("spaghetti", "linguine"));
    /// ```
    pub fn new() -> Self {
        Self {
            substitution_index: SubstitutionIndex::new(),
        }
    }

    /// Create a normalizer with a custom substitution index
    pub fn with_substitutions(substitution_index: SubstitutionIndex) -> Self {
        Self { substitution_index }
    }

    pub fn substitution_index(&self) -> &SubstitutionIndex {
        &self.substitution_index
    }
}

impl IngredientNormalizer for RuleBasedNormalizer {
    fn normalize(&self, raw: &str) -> String {
        let canonical = canonical_form(raw);
        trace!("Normalized ingredient '{}' -> '{}'", raw, canonical);
        canonical
    }

    fn are_similar(&self, a: &str, b: &str) -> bool {
        let norm_a = self.normalize(a);
        let norm_b = self.normalize(b);

        // An empty canonical form carries no signal
        if norm_a.is_empty() || norm_b.is_empty() {
            return false;
        }

        if norm_a == norm_b {
            return true;
        }

        // Compound specificity: "chicken breast" contains "chicken"
        if norm_a.contains(&norm_b) || norm_b.contains(&norm_a) {
            trace!("'{}' and '{}' similar by containment", norm_a, norm_b);
            return true;
        }

        let similar = self.substitution_index.same_group(&norm_a, &norm_b);
        if similar {
            trace!("'{}' and '{}' similar by substitution group", norm_a, norm_b);
        }
        similar
    }
}
