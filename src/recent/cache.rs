/// Bounded, deduplicated list of recently selected items.
///
/// The list is most-recent-first, holds at most `max_entries` items, and never
/// contains two items with the same slug. It is mirrored to a [`KeyValueStore`]
/// as a JSON array after every change.
///
/// Storage problems never reach the caller. A list or backing file that cannot
/// be parsed loads as empty and is overwritten on the next change. A store that
/// cannot be read or written switches the list to memory-only for the rest of
/// its lifetime.
use log::{debug, info, warn};

use super::store::{KeyValueStore, StoreError};
use crate::catalogue::{Catalogue, SearchableItem};

/// Storage key of the persisted list.
pub const RECENT_STORAGE_KEY: &str = "recent-searches--sun-dashboard";

/// Maximum number of remembered selections.
pub const MAX_RECENT: usize = 10;

/// The recent-selection list and its backing store.
#[derive(Debug)]
pub struct RecentSelections<S> {
    store: S,
    key: String,
    max_entries: usize,
    entries: Vec<SearchableItem>,
    persistent: bool,
}

impl<S: KeyValueStore> RecentSelections<S> {
    /// Load the list from `store` under the default key and bound.
    pub fn load(store: S) -> Self {
        Self::load_with(store, RECENT_STORAGE_KEY, MAX_RECENT)
    }

    /// Load the list from `store` under `key`, keeping at most `max_entries`.
    pub fn load_with(store: S, key: &str, max_entries: usize) -> Self {
        let mut recent = Self {
            store,
            key: key.to_owned(),
            max_entries,
            entries: Vec::new(),
            persistent: true,
        };

        match recent.store.get(key) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<SearchableItem>>(&json) {
                Ok(items) => recent.entries = normalize(items, max_entries),
                Err(e) => warn!("Recent: ignoring corrupt list under '{key}': {e}"),
            },
            Ok(None) => debug!("Recent: nothing stored under '{key}'"),
            Err(StoreError::Corrupt(e)) => warn!("Recent: backing store is corrupt, starting empty: {e}"),
            Err(e) => recent.degrade(&e),
        }
        recent
    }

    /// Record that `item` was selected.
    ///
    /// Any earlier entry with the same slug is removed, the item goes to the
    /// front, the list is cut to the bound and then persisted.
    pub fn record_selection(&mut self, item: &SearchableItem) {
        self.entries.retain(|e| e.slug != item.slug);
        self.entries.insert(0, item.clone());
        self.entries.truncate(self.max_entries);
        info!("Recent: recorded '{}' ({} entries)", item.slug, self.entries.len());
        self.persist();
    }

    /// The list with each entry replaced by the catalogue's live copy when the
    /// slug still exists there; otherwise the stored copy is returned as is.
    #[must_use]
    pub fn get_recent<'a>(&'a self, catalogue: &'a Catalogue) -> Vec<&'a SearchableItem> {
        self.entries
            .iter()
            .map(|stored| catalogue.get(&stored.slug).unwrap_or(stored))
            .collect()
    }

    /// Entries exactly as stored, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[SearchableItem] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether changes still reach the backing store.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Give back the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        if !self.persistent {
            return;
        }
        let result = serde_json::to_string(&self.entries)
            .map_err(StoreError::from)
            .and_then(|json| self.store.set(&self.key, &json));
        if let Err(e) = result {
            self.degrade(&e);
        }
    }

    fn degrade(&mut self, err: &StoreError) {
        warn!("Recent: storage unavailable, keeping selections in memory only: {err}");
        self.persistent = false;
    }
}

/// Enforce the dedup and bound rules on data read from storage.
fn normalize(items: Vec<SearchableItem>, max_entries: usize) -> Vec<SearchableItem> {
    let mut out: Vec<SearchableItem> = Vec::with_capacity(items.len().min(max_entries));
    for item in items {
        if out.len() == max_entries {
            break;
        }
        if !out.iter().any(|e| e.slug == item.slug) {
            out.push(item);
        }
    }
    out
}
