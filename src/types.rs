/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout, either as JSON or rendered as a
/// table. They are decoupled from the borrowed domain types.
use serde::{Deserialize, Serialize};

use crate::catalogue::SearchableItem;
use crate::errors::PaletteError;
use crate::search::SearchHit;

/// A catalogue item in flat (list) representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemOutput {
    pub slug: String,
    /// Display text.
    pub content: String,
    /// Navigation target.
    pub url: String,
    /// Category name (`dashboard`, `news`, `tasks`, `time`).
    pub category: String,
    /// Group key within the category.
    pub group: String,
    /// Group display name.
    pub group_name: String,
    /// `navigation`, `action` or `recent`.
    pub kind: String,
    pub is_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&SearchableItem> for ItemOutput {
    fn from(item: &SearchableItem) -> Self {
        Self {
            slug: item.slug.clone(),
            content: item.content.clone(),
            url: item.url.clone(),
            category: item.category.to_string(),
            group: item.group.key.clone(),
            group_name: item.group.name.clone(),
            kind: item.kind.as_str().to_owned(),
            is_new: item.is_new,
            description: item.description.clone(),
        }
    }
}

/// A search result with its rank and match quality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResultOutput {
    /// 1-based position in the result list.
    pub rank: usize,
    pub slug: String,
    pub content: String,
    pub url: String,
    pub category: String,
    /// How the first token matched: `exact`, `prefix`, `contains` or `fuzzy`.
    pub tier: String,
    /// Fuzzy score of the first token (higher = better) within its tier.
    pub score: u16,
}

impl SearchResultOutput {
    #[must_use]
    pub fn from_hit(rank: usize, hit: &SearchHit<'_>) -> Self {
        Self {
            rank,
            slug: hit.item.slug.clone(),
            content: hit.item.content.clone(),
            url: hit.item.url.clone(),
            category: hit.item.category.to_string(),
            tier: hit.score.tier.as_str().to_owned(),
            score: hit.score.fuzzy,
        }
    }
}

/// One `group.key` bucket of the browse view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupOutput {
    pub key: String,
    pub name: String,
    pub items: Vec<ItemOutput>,
}

/// One category of the browse view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryOutput {
    pub category: String,
    pub groups: Vec<GroupOutput>,
}

/// The blank-query view: recents, then grouped catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowseOutput {
    pub recent: Vec<ItemOutput>,
    pub categories: Vec<CategoryOutput>,
}

/// Result of recording a selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionOutput {
    pub slug: String,
    /// Where the selection navigates to.
    pub url: String,
    /// Length of the recent list after recording.
    pub recent_count: usize,
    /// Whether the recent list reached durable storage.
    pub persisted: bool,
}

/// Final state after a scripted key sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeysOutput {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Active row, or null when the cursor is unset.
    pub active_index: Option<usize>,
    /// Number of navigable rows in the final view.
    pub rows: usize,
    pub open: bool,
    /// Items selected with `enter`, in order.
    pub selected: Vec<ItemOutput>,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `PaletteError`.
    #[must_use]
    pub fn from_palette_error(err: &PaletteError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
