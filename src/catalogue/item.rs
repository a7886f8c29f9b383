/// Catalogue item types: the unit of search, browsing and recent selection.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Top-level dashboard area an item belongs to.
///
/// The key set is closed; catalogues naming any other category fail to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dashboard,
    News,
    Tasks,
    Time,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Dashboard,
        Category::News,
        Category::Tasks,
        Category::Time,
    ];

    /// Position of this category in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::News => 1,
            Self::Tasks => 2,
            Self::Time => 3,
        }
    }

    /// Lowercase wire name, also used as searchable text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::News => "news",
            Self::Tasks => "tasks",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category '{s}' (expected dashboard, news, tasks or time)"))
    }
}

/// What selecting an item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Opens a page.
    Navigation,
    /// Triggers an in-app action.
    Action,
    /// Entry re-surfaced from the recent list.
    Recent,
}

impl ItemKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Action => "action",
            Self::Recent => "recent",
        }
    }
}

/// Feature-area sub-grouping inside a category (e.g. "Leave", "Projects").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    /// Stable grouping key.
    pub key: String,
    /// Display name; searchable.
    pub name: String,
}

/// One entry of the command-menu catalogue.
///
/// Serialized with the camelCase field names used by the persisted recents list,
/// so stored entries written by earlier sessions deserialize unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableItem {
    /// Unique identifier across the catalogue.
    pub slug: String,
    /// Navigation target.
    pub url: String,
    pub group: Group,
    /// Primary display and match text.
    pub content: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl SearchableItem {
    /// Every text field the matcher looks at, primary field first.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.content.as_str()),
            Some(self.group.name.as_str()),
            Some(self.category.as_str()),
            self.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .chain(self.keywords.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("Tasks".parse::<Category>(), Ok(Category::Tasks));
        assert_eq!(" time ".parse::<Category>(), Ok(Category::Time));
        assert!("billing".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_index_matches_all() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "slug": "leave-calendar",
            "url": "/time/leave",
            "group": {"key": "leave", "name": "Leave"},
            "content": "Leave Calendar",
            "category": "time",
            "type": "navigation",
            "isNew": true,
            "keywords": ["holiday", "pto"]
        }"#;
        let item: SearchableItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Category::Time);
        assert_eq!(item.kind, ItemKind::Navigation);
        assert!(item.is_new);
        assert_eq!(item.description, None);

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["type"], "navigation");
        assert_eq!(back["isNew"], true);
        assert!(back.get("icon").is_none());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{
            "slug": "x", "url": "/x", "group": {"key": "k", "name": "K"},
            "content": "X", "category": "billing", "type": "action"
        }"#;
        assert!(serde_json::from_str::<SearchableItem>(json).is_err());
    }

    #[test]
    fn test_searchable_fields_order() {
        let item = SearchableItem {
            slug: "s".to_owned(),
            url: "/s".to_owned(),
            group: Group {
                key: "g".to_owned(),
                name: "Group".to_owned(),
            },
            content: "Content".to_owned(),
            category: Category::News,
            kind: ItemKind::Action,
            icon: None,
            description: Some("Desc".to_owned()),
            is_new: false,
            keywords: vec!["kw".to_owned()],
        };
        let fields: Vec<&str> = item.searchable_fields().collect();
        assert_eq!(fields, ["Content", "Group", "news", "Desc", "kw"]);
    }
}
