/// Category browsing: the two-level grouping shown when no query is active.
use std::ops::{Index, IndexMut};

use super::item::{Category, SearchableItem};

/// A map with exactly one slot per [`Category`].
///
/// Backed by a fixed array, so the key set cannot grow and every category is
/// always present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryMap<T> {
    slots: [T; 4],
}

impl<T> CategoryMap<T> {
    /// Build a map by computing each slot from its category.
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            slots: Category::ALL.map(&mut f),
        }
    }

    /// Iterate slots in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().zip(self.slots.iter())
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        &self.slots[category.index()]
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        &mut self.slots[category.index()]
    }
}

/// Items sharing one `group.key`, in catalogue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGroup<'a> {
    pub key: &'a str,
    /// Display name taken from the first item of the group.
    pub name: &'a str,
    pub items: Vec<&'a SearchableItem>,
}

/// Split items by category, preserving input order inside each category.
#[must_use]
pub fn group_by_category<'a, I>(items: I) -> CategoryMap<Vec<&'a SearchableItem>>
where
    I: IntoIterator<Item = &'a SearchableItem>,
{
    let mut map: CategoryMap<Vec<&SearchableItem>> = CategoryMap::default();
    for item in items {
        map[item.category].push(item);
    }
    map
}

/// Split items by `group.key`.
///
/// Groups appear in order of their first item; items keep input order.
#[must_use]
pub fn group_by_key_within_category<'a>(items: &[&'a SearchableItem]) -> Vec<KeyGroup<'a>> {
    let mut groups: Vec<KeyGroup<'a>> = Vec::new();
    for &item in items {
        match groups.iter_mut().find(|g| g.key == item.group.key) {
            Some(group) => group.items.push(item),
            None => groups.push(KeyGroup {
                key: &item.group.key,
                name: &item.group.name,
                items: vec![item],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::item::{Group, ItemKind};

    fn item(slug: &str, category: Category, group: &str) -> SearchableItem {
        SearchableItem {
            slug: slug.to_owned(),
            url: format!("/{slug}"),
            group: Group {
                key: group.to_owned(),
                name: group.to_uppercase(),
            },
            content: slug.to_owned(),
            category,
            kind: ItemKind::Navigation,
            icon: None,
            description: None,
            is_new: false,
            keywords: Vec::new(),
        }
    }

    fn slugs(items: &[&SearchableItem]) -> Vec<String> {
        items.iter().map(|i| i.slug.clone()).collect()
    }

    #[test]
    fn test_group_by_category_preserves_order() {
        let items = vec![
            item("a", Category::Tasks, "x"),
            item("b", Category::Time, "y"),
            item("c", Category::Tasks, "x"),
            item("d", Category::Dashboard, "z"),
        ];
        let map = group_by_category(&items);
        assert_eq!(slugs(&map[Category::Tasks]), ["a", "c"]);
        assert_eq!(slugs(&map[Category::Time]), ["b"]);
        assert_eq!(slugs(&map[Category::Dashboard]), ["d"]);
        assert!(map[Category::News].is_empty());
    }

    #[test]
    fn test_category_map_iter_is_fixed_order() {
        let map = CategoryMap::from_fn(|c| c.as_str().len());
        let keys: Vec<Category> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(keys, Category::ALL);
        assert_eq!(map[Category::News], 4);
    }

    #[test]
    fn test_group_by_key() {
        let items = vec![
            item("a", Category::Tasks, "board"),
            item("b", Category::Tasks, "projects"),
            item("c", Category::Tasks, "board"),
        ];
        let refs: Vec<&SearchableItem> = items.iter().collect();
        let groups = group_by_key_within_category(&refs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "board");
        assert_eq!(groups[0].name, "BOARD");
        assert_eq!(slugs(&groups[0].items), ["a", "c"]);
        assert_eq!(groups[1].key, "projects");
        assert_eq!(slugs(&groups[1].items), ["b"]);
    }

    #[test]
    fn test_group_by_key_empty() {
        assert!(group_by_key_within_category(&[]).is_empty());
    }
}
