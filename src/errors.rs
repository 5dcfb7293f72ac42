//! # Error Types Module
//!
//! Errors raised at the edges of the matcher, where recipes are read from disk.
//! Matching itself never fails.

/// Errors raised while loading a recipe catalog
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog file could not be read
    Io(std::io::Error),
    /// The catalog is not valid recipe JSON
    Parse(String),
    /// A recipe failed validation
    Validation(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "Catalog read error: {err}"),
            CatalogError::Parse(msg) => write!(f, "Catalog parse error: {msg}"),
            CatalogError::Validation(msg) => write!(f, "Catalog validation error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}
