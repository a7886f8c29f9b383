/// Catalogue loading and validation.
///
/// A catalogue is built once and then only read. Construction rejects empty and
/// duplicate slugs so every later lookup by slug is unambiguous.
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::errors::CatalogueError;
use super::item::SearchableItem;

/// Catalogue shipped with the binary, used when no file is configured.
const BUILTIN_CATALOGUE: &str = include_str!("../../data/catalogue.json");

/// Validated, read-only list of searchable items.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    items: Vec<SearchableItem>,
    by_slug: HashMap<String, usize>,
}

impl Catalogue {
    /// Build a catalogue from items in display order.
    ///
    /// # Errors
    ///
    /// - `CatalogueError::EmptySlug` — an item has a blank slug
    /// - `CatalogueError::DuplicateSlug` — two items share a slug
    pub fn new(items: Vec<SearchableItem>) -> Result<Self, CatalogueError> {
        let mut by_slug = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if item.slug.trim().is_empty() {
                return Err(CatalogueError::EmptySlug { index });
            }
            if by_slug.insert(item.slug.clone(), index).is_some() {
                return Err(CatalogueError::DuplicateSlug {
                    slug: item.slug.clone(),
                });
            }
        }
        Ok(Self { items, by_slug })
    }

    /// Parse a JSON array of items.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::Parse` on malformed JSON or unknown enum values,
    /// and the validation errors of [`Catalogue::new`].
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, CatalogueError> {
        let items: Vec<SearchableItem> =
            serde_json::from_str(json).map_err(|source| CatalogueError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        Self::new(items)
    }

    /// Load a catalogue file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::Io` if the file cannot be read, otherwise as
    /// [`Catalogue::from_json`].
    pub fn load(path: &Path) -> Result<Self, CatalogueError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue = Self::from_json(&json, path)?;
        info!("Catalogue: loaded {} items from {}", catalogue.len(), path.display());
        Ok(catalogue)
    }

    /// The catalogue compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data is invalid.
    pub fn builtin() -> Result<Self, CatalogueError> {
        let catalogue = Self::from_json(BUILTIN_CATALOGUE, &PathBuf::from("<builtin>"))?;
        info!("Catalogue: loaded {} built-in items", catalogue.len());
        Ok(catalogue)
    }

    /// Load from `path` when given, otherwise the built-in catalogue.
    ///
    /// # Errors
    ///
    /// As [`Catalogue::load`] / [`Catalogue::builtin`].
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogueError> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    /// Look up the live copy of an item.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&SearchableItem> {
        self.by_slug.get(slug).map(|&i| &self.items[i])
    }

    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    /// Items in catalogue order.
    #[must_use]
    pub fn items(&self) -> &[SearchableItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::item::{Category, Group, ItemKind};

    fn item(slug: &str) -> SearchableItem {
        SearchableItem {
            slug: slug.to_owned(),
            url: format!("/{slug}"),
            group: Group {
                key: "g".to_owned(),
                name: "G".to_owned(),
            },
            content: slug.to_owned(),
            category: Category::Dashboard,
            kind: ItemKind::Navigation,
            icon: None,
            description: None,
            is_new: false,
            keywords: Vec::new(),
        }
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let result = Catalogue::new(vec![item("a"), item("b"), item("a")]);
        assert!(matches!(
            result,
            Err(CatalogueError::DuplicateSlug { slug }) if slug == "a"
        ));
    }

    #[test]
    fn test_empty_slug_rejected() {
        let result = Catalogue::new(vec![item("a"), item("  ")]);
        assert!(matches!(result, Err(CatalogueError::EmptySlug { index: 1 })));
    }

    #[test]
    fn test_lookup_by_slug() {
        let catalogue = Catalogue::new(vec![item("a"), item("b")]).unwrap();
        assert_eq!(catalogue.get("b").map(|i| i.url.as_str()), Some("/b"));
        assert!(catalogue.get("c").is_none());
        assert!(catalogue.contains("a"));
        assert_eq!(catalogue.len(), 2);
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalogue = Catalogue::builtin().unwrap();
        assert!(!catalogue.is_empty());
        for category in Category::ALL {
            assert!(
                catalogue.items().iter().any(|i| i.category == category),
                "built-in catalogue has no {category} items"
            );
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalogue::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(CatalogueError::Io { .. })));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogue.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            Catalogue::load(&path),
            Err(CatalogueError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogue.json");
        let json = serde_json::to_string(&vec![item("x"), item("y")]).unwrap();
        fs::write(&path, json).unwrap();
        let catalogue = Catalogue::load_or_builtin(Some(&path)).unwrap();
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.items()[0].slug, "x");
    }
}
