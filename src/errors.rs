/// Top-level errors surfaced by the CLI.
use thiserror::Error;

use crate::catalogue::CatalogueError;
use crate::recent::StoreError;

/// Errors that can end a `sunmenu` command.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The catalogue could not be loaded or failed validation.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// A persistence backend failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No catalogue item has the given slug.
    #[error("No catalogue item with slug '{slug}'")]
    ItemNotFound {
        /// The requested slug.
        slug: String,
    },

    /// A scripted key could not be parsed.
    #[error("Invalid key '{key}' (expected down, up, enter, hover:<n>, leave:<n>, type:<text>, toggle)")]
    InvalidKey {
        /// The offending token.
        key: String,
    },
}

impl PaletteError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::ItemNotFound { .. } | Self::InvalidKey { .. } => 4,
            Self::Catalogue(_) => 5,
            Self::Store(_) => 1,
        }
    }

    /// Machine-readable error code (snake_case).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config_error",
            Self::Catalogue(CatalogueError::DuplicateSlug { .. } | CatalogueError::EmptySlug { .. }) => {
                "invalid_catalogue"
            }
            Self::Catalogue(_) => "catalogue_unreadable",
            Self::Store(_) => "storage_error",
            Self::ItemNotFound { .. } => "item_not_found",
            Self::InvalidKey { .. } => "invalid_key",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = PaletteError::ItemNotFound {
            slug: "x".to_owned(),
        };
        assert_eq!(not_found.exit_code(), 4);
        assert_eq!(not_found.code(), "item_not_found");
        assert_eq!(not_found.to_string(), "No catalogue item with slug 'x'");

        let dup = PaletteError::from(CatalogueError::DuplicateSlug {
            slug: "a".to_owned(),
        });
        assert_eq!(dup.exit_code(), 5);
        assert_eq!(dup.code(), "invalid_catalogue");
        assert_eq!(dup.to_string(), "Duplicate slug 'a' in catalogue");

        let store = PaletteError::from(StoreError::Unavailable);
        assert_eq!(store.exit_code(), 1);
        assert_eq!(store.code(), "storage_error");
    }
}
