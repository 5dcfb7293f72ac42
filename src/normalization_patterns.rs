//! # Normalization Patterns Module
//!
//! This module contains the regex patterns and suffix rules used to reduce a raw
//! ingredient line to its canonical base term.

use lazy_static::lazy_static;
use regex::Regex;

// Leading quantity: digits, slashes, spaces and unicode vulgar fractions
pub const QUANTITY_PATTERN: &str = r"^[\d\s/½⅓¼⅔¾⅛⅜⅝⅞]+\s*";

// One leading unit word (singular or plural), which must be followed by whitespace
pub const UNIT_PATTERN: &str = r"(?i)^(cups?|tbsps?|tsps?|tablespoons?|teaspoons?|oz|ounces?|lbs?|pounds?|g|grams?|kg|kilograms?|ml|milliliters?|l|liters?|pinch(?:es)?|dash(?:es)?|cloves?|slices?|pieces?|cans?|packages?|bunche?s?|heads?|stalks?|sprigs?|handfuls?)\s+";

// Trailing clause after a comma/semicolon/colon, or a trailing parenthetical note
pub const TRAILING_NOTE_PATTERN: &str = r"[,;:]+.*$|\s*\([^)]*\)\s*$";

// Preparation and descriptor words, removed anywhere on a word boundary
pub const PREP_WORDS_PATTERN: &str = r"(?i)\b(fresh|freshly|chopped|minced|diced|sliced|grated|shredded|crushed|ground|whole|large|medium|small|thin|thick|finely|coarsely|roughly|lightly|well|very|room temperature|cold|warm|hot|frozen|thawed|dried|canned|jarred|packed|loosely|firmly|about|approximately|optional|to taste|for garnish|for serving|divided|plus more|as needed|or more|or less)\b";

/// Ordered depluralization rules: `(suffix, replacement)`.
///
/// The first rule whose suffix matches and whose result is long enough wins.
pub const PLURAL_SUFFIXES: &[(&str, &str)] = &[
    ("ies", "y"), // berries -> berry
    ("ves", "f"), // leaves -> leaf
    ("oes", "o"), // tomatoes -> tomato
    ("es", ""),   // dishes -> dish
    ("s", ""),    // carrots -> carrot
];

/// The `es` rule only applies when what remains ends in one of these
/// ("dishes" -> "dish", "glasses" -> "glass"). Other `es` words fall
/// through to the plain `s` rule ("cheeses" -> "cheese").
pub const SIBILANT_STEM_ENDINGS: &[&str] = &["ss", "x", "z", "ch", "sh"];

/// Words with these endings are singular already ("lemongrass", "asparagus")
pub const NON_PLURAL_ENDINGS: &[&str] = &["ss", "us"];

/// Words of this many characters or fewer are never depluralized
pub const MIN_PLURAL_WORD_LEN: usize = 3;

/// Shortest acceptable result of a depluralization rule
pub const MIN_SINGULAR_LEN: usize = 2;

// Lazy static regexes to avoid recompilation on every call
lazy_static! {
    pub static ref QUANTITY_REGEX: Regex =
        Regex::new(QUANTITY_PATTERN).expect("Quantity pattern should be valid");
    pub static ref UNIT_REGEX: Regex =
        Regex::new(UNIT_PATTERN).expect("Unit pattern should be valid");
    pub static ref TRAILING_NOTE_REGEX: Regex =
        Regex::new(TRAILING_NOTE_PATTERN).expect("Trailing note pattern should be valid");
    pub static ref PREP_WORDS_REGEX: Regex =
        Regex::new(PREP_WORDS_PATTERN).expect("Preparation words pattern should be valid");
}
