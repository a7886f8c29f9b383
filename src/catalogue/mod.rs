/// Catalogue layer: item types, loading, and category grouping.
pub mod errors;
pub mod group;
pub mod item;
pub mod load;

pub use errors::CatalogueError;
pub use group::{CategoryMap, KeyGroup, group_by_category, group_by_key_within_category};
pub use item::{Category, Group, ItemKind, SearchableItem};
pub use load::Catalogue;
