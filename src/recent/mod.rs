/// Recent selections: the bounded recents list and its persistence backends.
pub mod cache;
pub mod store;

pub use cache::{MAX_RECENT, RECENT_STORAGE_KEY, RecentSelections};
pub use store::{FileStore, KeyValueStore, MemoryStore, SessionStore, StoreError};
