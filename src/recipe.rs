//! # Recipe Data Model
//!
//! The read-only recipe shape the matcher consumes. Only a recipe's category and
//! the display names of its ingredients take part in matching; the other fields
//! ride along so results can be shown to the user.
//!
//! ## Usage
//!
//! ```rust
//! use recipe_matcher::recipe::{Category, Recipe, RecipeIngredient};
//!
//! let carbonara = Recipe::new("1", "Pasta Carbonara", Category::Pasta)
//!     .with_ingredient(RecipeIngredient::new("spaghetti").with_quantity("400", "g"))
//!     .with_ingredient(RecipeIngredient::new("eggs").with_quantity("3", ""));
//!
//! assert_eq!(carbonara.ingredient_names(), vec!["spaghetti", "eggs"]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored recipe as seen by the matcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier assigned by the recipe store
    pub id: String,

    /// Display title (e.g., "Pasta Carbonara")
    pub title: String,

    /// Recipe category, used by the category filter
    #[serde(default)]
    pub category: Category,

    /// Ingredients in recipe order
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// A single recipe ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Display name (e.g., "all-purpose flour", "eggs")
    pub name: String,

    /// Quantity as written (e.g., "2", "1/2", "2-3")
    #[serde(default)]
    pub quantity: String,

    /// Unit as written (e.g., "cups", "g")
    #[serde(default)]
    pub unit: String,

    /// Preparation notes (e.g., "room temperature")
    #[serde(default)]
    pub notes: String,
}

/// Recipe categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Pasta & Noodles")]
    Pasta,
    #[serde(rename = "Rice & Grains")]
    Rice,
    #[serde(rename = "Soups & Stews")]
    Soups,
    #[serde(rename = "Salads")]
    Salads,
    #[serde(rename = "Meat & Poultry")]
    Meat,
    #[serde(rename = "Seafood")]
    Seafood,
    #[serde(rename = "Vegetarian")]
    Vegetarian,
    #[serde(rename = "Desserts & Sweets")]
    Desserts,
    #[serde(rename = "Breakfast")]
    Breakfast,
    #[serde(rename = "Appetizers & Snacks")]
    Appetizers,
    #[serde(rename = "Beverages")]
    Beverages,
    #[serde(rename = "Sauces & Condiments")]
    Sauces,
    #[serde(rename = "Bread & Baking")]
    Bread,
    #[default]
    #[serde(rename = "Other")]
    Other,
}

impl Recipe {
    /// Create a recipe without ingredients
    pub fn new(id: &str, title: &str, category: Category) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category,
            ingredients: Vec::new(),
        }
    }

    /// Append an ingredient
    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Append ingredients given only by name
    pub fn with_ingredient_names(mut self, names: &[&str]) -> Self {
        self.ingredients
            .extend(names.iter().map(|name| RecipeIngredient::new(name)));
        self
    }

    /// Display names of all ingredients, in recipe order
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }
}

impl RecipeIngredient {
    /// Create an ingredient with just a name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            quantity: String::new(),
            unit: String::new(),
            notes: String::new(),
        }
    }

    pub fn with_quantity(mut self, quantity: &str, unit: &str) -> Self {
        self.quantity = quantity.trim().to_string();
        self.unit = unit.trim().to_string();
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.trim().to_string();
        self
    }
}

impl Category {
    /// All categories in display order
    pub fn all() -> [Category; 14] {
        [
            Category::Pasta,
            Category::Rice,
            Category::Soups,
            Category::Salads,
            Category::Meat,
            Category::Seafood,
            Category::Vegetarian,
            Category::Desserts,
            Category::Breakfast,
            Category::Appetizers,
            Category::Beverages,
            Category::Sauces,
            Category::Bread,
            Category::Other,
        ]
    }

    /// Human-readable label, also used as the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pasta => "Pasta & Noodles",
            Category::Rice => "Rice & Grains",
            Category::Soups => "Soups & Stews",
            Category::Salads => "Salads",
            Category::Meat => "Meat & Poultry",
            Category::Seafood => "Seafood",
            Category::Vegetarian => "Vegetarian",
            Category::Desserts => "Desserts & Sweets",
            Category::Breakfast => "Breakfast",
            Category::Appetizers => "Appetizers & Snacks",
            Category::Beverages => "Beverages",
            Category::Sauces => "Sauces & Condiments",
            Category::Bread => "Bread & Baking",
            Category::Other => "Other",
        }
    }

    /// Parse user input into a category, accepting shorthand aliases.
    ///
    /// Unrecognized input maps to [`Category::Other`].
    pub fn parse(input: &str) -> Category {
        match input.trim().to_lowercase().as_str() {
            "pasta" | "noodles" | "pasta & noodles" => Category::Pasta,
            "rice" | "grains" | "rice & grains" => Category::Rice,
            "soup" | "soups" | "stew" | "stews" | "soups & stews" => Category::Soups,
            "salad" | "salads" => Category::Salads,
            "meat" | "poultry" | "meat & poultry" => Category::Meat,
            "seafood" | "fish" => Category::Seafood,
            "vegetarian" | "veggie" | "veg" => Category::Vegetarian,
            "dessert" | "desserts" | "sweet" | "sweets" | "desserts & sweets" => {
                Category::Desserts
            }
            "breakfast" | "brunch" => Category::Breakfast,
            "appetizer" | "appetizers" | "snack" | "snacks" | "appetizers & snacks" => {
                Category::Appetizers
            }
            "beverage" | "beverages" | "drink" | "drinks" => Category::Beverages,
            "sauce" | "sauces" | "condiment" | "condiments" | "sauces & condiments" => {
                Category::Sauces
            }
            "bread" | "baking" | "bread & baking" => Category::Bread,
            _ => Category::Other,
        }
    }

    /// Parse an exact category label (case-insensitive), falling back to [`Category::parse`]
    pub fn from_label(label: &str) -> Category {
        let label = label.trim();
        Category::all()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
            .unwrap_or_else(|| Category::parse(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for RecipeIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [self.quantity.as_str(), self.unit.as_str(), self.name.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        write!(f, "{}", parts.join(" "))?;

        if !self.notes.is_empty() {
            write!(f, " ({})", self.notes)?;
        }

        Ok(())
    }
}
