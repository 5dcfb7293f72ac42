//! Pantry management: keeps the ingredients a user has on hand as an ordered,
//! de-duplicated list of canonical names so they can be fed to the matcher.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use crate::normalizer::IngredientNormalizer;

/// A user's pantry, stored as canonical ingredient names
#[derive(Clone)]
pub struct Pantry {
    normalizer: Arc<dyn IngredientNormalizer>,
    items: Vec<String>,
}

impl Pantry {
    /// Create an empty pantry
    pub fn new(normalizer: Arc<dyn IngredientNormalizer>) -> Self {
        Self {
            normalizer,
            items: Vec::new(),
        }
    }

    /// Create a pantry from previously stored canonical items
    pub fn with_items(normalizer: Arc<dyn IngredientNormalizer>, items: Vec<String>) -> Self {
        Self { normalizer, items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Normalize raw user input, dropping blanks and items with no canonical form
    pub fn normalize_items<S: AsRef<str>>(&self, items: &[S]) -> Vec<String> {
        items
            .iter()
            .map(|item| item.as_ref().trim())
            .filter(|item| !item.is_empty())
            .map(|item| self.normalizer.normalize(item))
            .filter(|normalized| !normalized.is_empty())
            .collect()
    }

    /// Add items not already present. Returns how many were added.
    pub fn add<S: AsRef<str>>(&mut self, items: &[S]) -> usize {
        let mut existing: HashSet<String> = self.items.iter().cloned().collect();
        let before = self.items.len();

        for item in self.normalize_items(items) {
            if existing.insert(item.clone()) {
                self.items.push(item);
            }
        }

        let added = self.items.len() - before;
        debug!("Added {} pantry items ({} total)", added, self.items.len());
        added
    }

    /// Remove items by canonical name. Returns how many were removed.
    pub fn remove<S: AsRef<str>>(&mut self, items: &[S]) -> usize {
        let to_remove: HashSet<String> = self.normalize_items(items).into_iter().collect();
        let before = self.items.len();

        self.items.retain(|item| !to_remove.contains(item));

        let removed = before - self.items.len();
        debug!("Removed {} pantry items ({} total)", removed, self.items.len());
        removed
    }

    /// Replace the whole pantry
    pub fn set<S: AsRef<str>>(&mut self, items: &[S]) {
        let mut seen = HashSet::new();
        self.items = self
            .normalize_items(items)
            .into_iter()
            .filter(|item| seen.insert(item.clone()))
            .collect();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl std::fmt::Debug for Pantry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pantry").field("items", &self.items).finish()
    }
}

/// Split a comma-separated ingredient list ("chicken, pasta, garlic")
pub fn parse_ingredient_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
