//! # Matcher Configuration Module
//!
//! Runtime configuration for the `what-can-i-cook` binary: where the recipe
//! catalog lives and the default matching options, read from environment
//! variables (optionally via a `.env` file).

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

use crate::matcher::{MatchLevel, MatchOptions};
use crate::recipe::Category;

// Environment variable names
pub const RECIPES_PATH_VAR: &str = "RECIPES_PATH";
pub const STRICT_VAR: &str = "MATCH_STRICT";
pub const EXCLUDE_STAPLES_VAR: &str = "MATCH_EXCLUDE_STAPLES";
pub const MIN_LEVEL_VAR: &str = "MATCH_MIN_LEVEL";
pub const MAX_RESULTS_VAR: &str = "MATCH_MAX_RESULTS";
pub const CATEGORY_VAR: &str = "MATCH_CATEGORY";

/// Configuration for a matching run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatcherConfig {
    /// Path to the JSON recipe catalog
    pub recipes_path: Option<PathBuf>,
    /// Options applied unless overridden on the command line
    pub options: MatchOptions,
}

impl MatcherConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, starting from the defaults.
    ///
    /// Unset or blank variables keep their default; malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(path) = get(RECIPES_PATH_VAR) {
            config.recipes_path = Some(PathBuf::from(path));
        }

        if let Some(value) = get(STRICT_VAR) {
            config.options.strict_match =
                parse_bool(&value).with_context(|| format!("Invalid {STRICT_VAR}"))?;
        }

        if let Some(value) = get(EXCLUDE_STAPLES_VAR) {
            config.options.exclude_staples =
                parse_bool(&value).with_context(|| format!("Invalid {EXCLUDE_STAPLES_VAR}"))?;
        }

        if let Some(value) = get(MIN_LEVEL_VAR) {
            config.options.min_match_level =
                parse_match_level(&value).with_context(|| format!("Invalid {MIN_LEVEL_VAR}"))?;
        }

        if let Some(value) = get(MAX_RESULTS_VAR) {
            config.options.max_results = value
                .parse::<usize>()
                .with_context(|| format!("Invalid {MAX_RESULTS_VAR}: '{value}'"))?;
        }

        if let Some(value) = get(CATEGORY_VAR) {
            config.options.category_filter = Some(Category::from_label(&value));
        }

        Ok(config)
    }
}

/// Parse a match level name (`perfect`, `high`, `medium`, `low`)
pub fn parse_match_level(value: &str) -> Result<MatchLevel> {
    MatchLevel::parse(value).ok_or_else(|| {
        anyhow!("unknown match level '{value}', expected perfect, high, medium or low")
    })
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("expected a boolean, got '{other}'")),
    }
}
