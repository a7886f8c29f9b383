/// The command menu: query, category filter, displayed list and selection.
///
/// With a non-blank query the menu shows ranked search results. With a blank
/// query it shows the recent list followed by the catalogue grouped by category
/// and then by `group.key`, optionally narrowed to one category. The cursor
/// runs over the concatenation of both parts.
use log::{debug, info};

use super::cursor::{Cursor, Key};
use crate::catalogue::{
    Catalogue, Category, KeyGroup, SearchableItem, group_by_category, group_by_key_within_category,
};
use crate::recent::{KeyValueStore, RecentSelections};
use crate::search::{SearchHit, SearchOptions, search};

/// Side effects the menu asks of its embedding UI.
pub trait MenuHost {
    /// Go to the selected item's URL.
    fn navigate(&mut self, url: &str);

    /// Hide the menu.
    fn close(&mut self);

    /// Row `index` became active and should be scrolled into view.
    fn reveal(&mut self, _index: usize) {}
}

/// Which part of the displayed list a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Search results, or recent selections while browsing.
    Primary,
    /// Grouped catalogue items, only shown while browsing.
    Secondary,
}

/// One category's groups in the browse view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection<'a> {
    pub category: Category,
    pub groups: Vec<KeyGroup<'a>>,
}

/// Snapshot of what the menu currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView<'a> {
    /// Search hits; empty while browsing.
    pub hits: Vec<SearchHit<'a>>,
    /// Recent selections; empty while searching.
    pub recent: Vec<&'a SearchableItem>,
    /// Browse sections; empty while searching.
    pub sections: Vec<CategorySection<'a>>,
}

impl<'a> MenuView<'a> {
    /// Rows of the primary section.
    pub fn primary(&self) -> impl Iterator<Item = &'a SearchableItem> + '_ {
        self.hits
            .iter()
            .map(|h| h.item)
            .chain(self.recent.iter().copied())
    }

    /// Rows of the secondary section, in display order.
    pub fn secondary(&self) -> impl Iterator<Item = &'a SearchableItem> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.groups.iter())
            .flat_map(|g| g.items.iter().copied())
    }

    #[must_use]
    pub fn primary_len(&self) -> usize {
        self.hits.len() + self.recent.len()
    }

    /// Total number of navigable rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary_len()
            + self
                .sections
                .iter()
                .flat_map(|s| s.groups.iter())
                .map(|g| g.items.len())
                .sum::<usize>()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row at `index` of the concatenated list.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(Section, &'a SearchableItem)> {
        let primary = self.primary_len();
        if index < primary {
            self.primary().nth(index).map(|item| (Section::Primary, item))
        } else {
            self.secondary()
                .nth(index - primary)
                .map(|item| (Section::Secondary, item))
        }
    }
}

/// Command-menu state machine.
#[derive(Debug)]
pub struct CommandMenu<S> {
    catalogue: Catalogue,
    recent: RecentSelections<S>,
    options: SearchOptions,
    query: String,
    category: Option<Category>,
    cursor: Cursor,
    open: bool,
}

impl<S: KeyValueStore> CommandMenu<S> {
    /// A closed menu over `catalogue`.
    pub fn new(catalogue: Catalogue, recent: RecentSelections<S>, options: SearchOptions) -> Self {
        Self {
            catalogue,
            recent,
            options,
            query: String::new(),
            category: None,
            cursor: Cursor::new(),
            open: false,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the menu with an empty query and the cursor on the first row.
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.cursor.reset();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Global shortcut handler (Cmd+K / Ctrl+K).
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
        debug!("menu: open={}", self.open);
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text. Always resets the cursor.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_owned();
        self.cursor.reset();
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Narrow the browse view to one category, or `None` for all.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.cursor.reset();
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.cursor.active()
    }

    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    #[must_use]
    pub fn recent(&self) -> &RecentSelections<S> {
        &self.recent
    }

    /// Whether the blank-query browse view is shown.
    #[must_use]
    pub fn is_browsing(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// Current search hits.
    #[must_use]
    pub fn results(&self) -> Vec<SearchHit<'_>> {
        search(&self.query, self.catalogue.items(), &self.options)
    }

    /// What is displayed right now.
    #[must_use]
    pub fn view(&self) -> MenuView<'_> {
        if !self.is_browsing() {
            return MenuView {
                hits: self.results(),
                recent: Vec::new(),
                sections: Vec::new(),
            };
        }

        let by_category = group_by_category(self.catalogue.items());
        let sections = by_category
            .iter()
            .filter(|(c, items)| self.category.is_none_or(|f| f == *c) && !items.is_empty())
            .map(|(category, items)| CategorySection {
                category,
                groups: group_by_key_within_category(items),
            })
            .collect();

        MenuView {
            hits: Vec::new(),
            recent: self.recent.get_recent(&self.catalogue),
            sections,
        }
    }

    /// Apply a navigation key. Returns the selected item on `Enter`.
    pub fn handle_key(&mut self, key: Key, host: &mut impl MenuHost) -> Option<SearchableItem> {
        let len = self.view().len();
        match key {
            Key::ArrowDown => {
                self.cursor.move_down(len);
                self.reveal_active(host);
                None
            }
            Key::ArrowUp => {
                self.cursor.move_up(len);
                self.reveal_active(host);
                None
            }
            Key::Enter => self.activate(host),
        }
    }

    /// Mouse entered row `index`.
    pub fn hover(&mut self, index: usize) {
        let len = self.view().len();
        self.cursor.hover(index, len);
    }

    /// Mouse left row `index`.
    pub fn leave(&mut self, index: usize) {
        self.cursor.leave(index);
    }

    /// Select the row under the cursor, if any.
    pub fn activate(&mut self, host: &mut impl MenuHost) -> Option<SearchableItem> {
        let item = {
            let view = self.view();
            let index = self.cursor.selected(view.len())?;
            let (section, item) = view.get(index)?;
            debug!("menu: enter on {section:?} row {index} ('{}')", item.slug);
            item.clone()
        };
        self.select(&item, host);
        Some(item)
    }

    /// Record `item` as recent, navigate to it and close the menu.
    pub fn select(&mut self, item: &SearchableItem, host: &mut impl MenuHost) {
        info!("menu: selected '{}' -> {}", item.slug, item.url);
        self.recent.record_selection(item);
        host.navigate(&item.url);
        host.close();
        self.close();
    }

    fn reveal_active(&self, host: &mut impl MenuHost) {
        if let Some(index) = self.cursor.active() {
            host.reveal(index);
        }
    }
}
