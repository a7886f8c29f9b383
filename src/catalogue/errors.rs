/// Errors from loading and validating a catalogue.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a [`super::Catalogue`].
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The catalogue file could not be read.
    #[error("Cannot read catalogue '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalogue is not a valid JSON array of items.
    #[error("Invalid catalogue '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two items share the same slug.
    #[error("Duplicate slug '{slug}' in catalogue")]
    DuplicateSlug {
        /// The repeated slug.
        slug: String,
    },

    /// An item has an empty or blank slug.
    #[error("Catalogue item #{index} has an empty slug")]
    EmptySlug {
        /// Zero-based position of the offending item.
        index: usize,
    },
}
