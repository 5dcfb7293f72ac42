//! # Substitutions Module
//!
//! Static groups of ingredient names that can stand in for each other when
//! deciding whether a user can cook a recipe, plus an index from a canonical
//! name to the group it belongs to.

use std::collections::HashMap;

use crate::normalizer::canonical_form;

/// Ingredients that can substitute each other, one group per row.
///
/// Entries are written the way recipes spell them. The index keys each one on
/// its canonical form, so "ground beef" is stored as "beef".
pub const SUBSTITUTION_GROUPS: &[&[&str]] = &[
    // Dairy
    &["milk", "cream", "half-and-half", "heavy cream", "whole milk", "skim milk"],
    // Hard cheese
    &["parmesan", "romano", "pecorino", "grana padano", "asiago"],
    // Fats
    &["butter", "margarine", "unsalted butter", "salted butter"],
    // Poultry
    &["chicken breast", "chicken thigh", "chicken", "chicken leg"],
    // Sweeteners
    &["sugar", "honey", "maple syrup", "agave", "brown sugar", "white sugar"],
    // Pasta
    &["spaghetti", "linguine", "fettuccine", "penne", "rigatoni", "pasta"],
    // Oils
    &["olive oil", "vegetable oil", "canola oil", "cooking oil", "oil"],
    // Alliums
    &["garlic", "garlic cloves", "minced garlic", "garlic powder"],
    &["onion", "yellow onion", "white onion", "red onion", "shallot"],
    // Tomatoes
    &["tomato", "tomatoes", "cherry tomatoes", "roma tomatoes", "diced tomatoes"],
    // Ground meat
    &["ground beef", "ground turkey", "ground pork", "ground meat"],
    // Melting cheese
    &["cheddar", "monterey jack", "colby", "american cheese"],
    &["mozzarella", "provolone", "fontina"],
    // Herbs
    &["basil", "fresh basil", "dried basil", "basil leaves"],
    &["oregano", "dried oregano", "fresh oregano"],
    &["thyme", "fresh thyme", "dried thyme"],
    // Liquids
    &["lemon juice", "lime juice", "citrus juice"],
    &["chicken broth", "chicken stock", "vegetable broth", "vegetable stock", "broth", "stock"],
    &["sour cream", "greek yogurt", "plain yogurt"],
    // Starches
    &["bread crumbs", "breadcrumbs", "panko", "panko breadcrumbs"],
];

/// Lookup table from a canonical ingredient name to its substitution group ordinal
#[derive(Debug, Clone)]
pub struct SubstitutionIndex {
    groups: HashMap<String, usize>,
}

impl SubstitutionIndex {
    /// Build the index from the static [`SUBSTITUTION_GROUPS`] table
    pub fn new() -> Self {
        Self::from_groups(SUBSTITUTION_GROUPS)
    }

    /// Build an index from an arbitrary group table, keyed on the canonical
    /// form of each entry.
    ///
    /// A term listed in several groups keeps the last group it appears in.
    /// Entries with no canonical form are skipped.
    pub fn from_groups(table: &[&[&str]]) -> Self {
        let mut groups = HashMap::new();
        for (ordinal, group) in table.iter().enumerate() {
            for term in group.iter() {
                let canonical = canonical_form(term);
                if !canonical.is_empty() {
                    groups.insert(canonical, ordinal);
                }
            }
        }

        Self { groups }
    }

    /// Group ordinal of a canonical term, if it belongs to one
    pub fn group_of(&self, term: &str) -> Option<usize> {
        self.groups.get(term).copied()
    }

    /// Whether two canonical terms belong to the same substitution group
    pub fn same_group(&self, a: &str, b: &str) -> bool {
        match (self.group_of(a), self.group_of(b)) {
            (Some(group_a), Some(group_b)) => group_a == group_b,
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for SubstitutionIndex {
    fn default() -> Self {
        Self::new()
    }
}
