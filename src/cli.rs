//! # Command Line Module
//!
//! Arguments of the `what-can-i-cook` binary. Flags given here override the
//! environment configuration.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{parse_match_level, MatcherConfig};
use crate::pantry::parse_ingredient_list;
use crate::recipe::Category;

/// Find out which of your recipes you can cook with what you have
#[derive(Parser, Debug)]
#[command(name = "what-can-i-cook", author, version, about, long_about = None)]
pub struct Cli {
    /// Ingredients you have, separated by spaces or commas
    pub ingredients: Vec<String>,

    /// Path to the JSON recipe catalog (overrides RECIPES_PATH)
    #[arg(short, long)]
    pub recipes: Option<PathBuf>,

    /// Only show recipes you can cook right now
    #[arg(long)]
    pub strict: bool,

    /// Only consider recipes of this category (e.g. "pasta", "dessert")
    #[arg(short, long)]
    pub category: Option<String>,

    /// Count pantry staples such as salt and oil towards the score
    #[arg(long)]
    pub include_staples: bool,

    /// Hide results worse than this level: perfect, high, medium or low
    #[arg(long)]
    pub min_level: Option<String>,

    /// Maximum number of recipes to show, 0 for all
    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,

    /// Print the grouped results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Flatten the positional arguments into a single ingredient list
    pub fn ingredient_list(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .flat_map(|arg| parse_ingredient_list(arg))
            .collect()
    }

    /// Apply command-line overrides on top of the environment configuration
    pub fn apply_to(&self, config: &mut MatcherConfig) -> anyhow::Result<()> {
        if let Some(path) = &self.recipes {
            config.recipes_path = Some(path.clone());
        }
        if self.strict {
            config.options.strict_match = true;
        }
        if let Some(category) = &self.category {
            config.options.category_filter = Some(Category::from_label(category));
        }
        if self.include_staples {
            config.options.exclude_staples = false;
        }
        if let Some(level) = &self.min_level {
            config.options.min_match_level = parse_match_level(level)?;
        }
        if let Some(max_results) = self.max_results {
            config.options.max_results = max_results;
        }
        Ok(())
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
