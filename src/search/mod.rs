/// Query search: tokenisation, per-token ranking, intersection and capping.
pub mod fuzzy;

use std::collections::HashSet;

use log::debug;

pub use fuzzy::{MatchTier, TokenMatcher, TokenScore, rank_token};

use crate::catalogue::SearchableItem;

/// Queries shorter than this (after trimming) return no results.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of results returned by [`search`].
pub const MAX_RESULTS: usize = 20;

/// A ranked search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub item: &'a SearchableItem,
    /// Score of the first query token, which determines result order.
    pub score: TokenScore,
}

/// Search options.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Minimum trimmed query length, in characters.
    pub min_query_len: usize,
    /// Maximum number of results to return.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_len: MIN_QUERY_LEN,
            limit: MAX_RESULTS,
        }
    }
}

/// Split a query into non-empty whitespace-delimited tokens.
#[must_use]
pub fn tokenize(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

/// Search items by free-text query.
///
/// - Trimmed queries shorter than `opts.min_query_len` yield nothing.
/// - A single token is ranked across all searchable fields, best first.
/// - With several tokens, an item must match every token; results keep the
///   order of the first token's ranking.
///
/// At most `opts.limit` hits are returned.
#[must_use]
pub fn search<'a>(query: &str, items: &'a [SearchableItem], opts: &SearchOptions) -> Vec<SearchHit<'a>> {
    let trimmed = query.trim();
    if trimmed.chars().count() < opts.min_query_len {
        return Vec::new();
    }

    let tokens = tokenize(trimmed);
    let Some((first, rest)) = tokens.split_first() else {
        return Vec::new();
    };

    let mut ranked = rank_token(first, items);

    for token in rest {
        if ranked.is_empty() {
            break;
        }
        let matched: HashSet<&str> = rank_token(token, items)
            .into_iter()
            .map(|(item, _)| item.slug.as_str())
            .collect();
        ranked.retain(|(item, _)| matched.contains(item.slug.as_str()));
    }

    ranked.truncate(opts.limit);
    debug!(
        "search: query='{trimmed}', tokens={}, results={}",
        tokens.len(),
        ranked.len()
    );

    ranked
        .into_iter()
        .map(|(item, score)| SearchHit { item, score })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{Category, Group, ItemKind};
    use proptest::prelude::*;

    fn item(slug: &str, content: &str, category: Category) -> SearchableItem {
        SearchableItem {
            slug: slug.to_owned(),
            url: format!("/{slug}"),
            group: Group {
                key: "g".to_owned(),
                name: "G".to_owned(),
            },
            content: content.to_owned(),
            category,
            kind: ItemKind::Navigation,
            icon: None,
            description: None,
            is_new: false,
            keywords: Vec::new(),
        }
    }

    fn fixture() -> Vec<SearchableItem> {
        vec![
            item("task-board", "Task Board", Category::Tasks),
            item("leave-calendar", "Leave Calendar", Category::Time),
            item("employee-directory", "Employee Directory", Category::Dashboard),
        ]
    }

    fn slugs(hits: &[SearchHit<'_>]) -> Vec<String> {
        hits.iter().map(|h| h.item.slug.clone()).collect()
    }

    #[test]
    fn test_short_query_is_empty() {
        let items = fixture();
        let opts = SearchOptions::default();
        assert!(search("", &items, &opts).is_empty());
        assert!(search("e", &items, &opts).is_empty());
        assert!(search("   e  ", &items, &opts).is_empty());
        assert!(search("     ", &items, &opts).is_empty());
    }

    #[test]
    fn test_prefix_beats_fuzzy() {
        let items = fixture();
        let hits = search("emp", &items, &SearchOptions::default());
        assert_eq!(hits[0].item.slug, "employee-directory");
        assert_eq!(hits[0].score.tier, MatchTier::Prefix);
    }

    #[test]
    fn test_multi_token_intersection() {
        let items = fixture();
        let hits = search("le cal", &items, &SearchOptions::default());
        assert_eq!(slugs(&hits), ["leave-calendar"]);
    }

    #[test]
    fn test_repeated_whitespace_between_tokens() {
        let items = fixture();
        let hits = search("  le    cal  ", &items, &SearchOptions::default());
        assert_eq!(slugs(&hits), ["leave-calendar"]);
        assert_eq!(tokenize("a   b\t c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_multi_token_keeps_first_token_order() {
        let items = vec![
            item("a", "Board of Tasks", Category::Dashboard),
            item("b", "Task Board", Category::Dashboard),
        ];
        let hits = search("task board", &items, &SearchOptions::default());
        // "task" prefixes b and only appears inside a
        assert_eq!(slugs(&hits), ["b", "a"]);
    }

    #[test]
    fn test_category_is_searchable() {
        let items = fixture();
        let hits = search("tasks", &items, &SearchOptions::default());
        assert_eq!(hits[0].item.slug, "task-board");
        assert_eq!(hits[0].score.tier, MatchTier::Exact);
    }

    #[test]
    fn test_empty_catalogue() {
        assert!(search("task", &[], &SearchOptions::default()).is_empty());
    }

    #[test]
    fn test_limit() {
        let items: Vec<SearchableItem> = (0..50)
            .map(|i| item(&format!("report-{i}"), &format!("Report {i}"), Category::News))
            .collect();
        let hits = search("report", &items, &SearchOptions::default());
        assert_eq!(hits.len(), MAX_RESULTS);
        let hits = search(
            "report",
            &items,
            &SearchOptions {
                limit: 5,
                ..SearchOptions::default()
            },
        );
        assert_eq!(hits.len(), 5);
    }

    fn catalogue_strategy() -> impl Strategy<Value = Vec<SearchableItem>> {
        prop::collection::vec("[a-e ]{1,12}", 0..40).prop_map(|contents| {
            contents
                .into_iter()
                .enumerate()
                .map(|(i, c)| item(&format!("item-{i}"), &c, Category::Dashboard))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_results_capped(items in catalogue_strategy(), query in "[a-e ]{0,6}") {
            let hits = search(&query, &items, &SearchOptions::default());
            prop_assert!(hits.len() <= MAX_RESULTS);
            if query.trim().chars().count() < MIN_QUERY_LEN {
                prop_assert!(hits.is_empty());
            }
        }

        #[test]
        fn prop_every_hit_matches_every_token(items in catalogue_strategy(), query in "[a-e]{1,3}( [a-e]{1,3}){0,2}") {
            let hits = search(&query, &items, &SearchOptions::default());
            for token in tokenize(&query) {
                let matched: HashSet<String> = rank_token(token, &items)
                    .into_iter()
                    .map(|(i, _)| i.slug.clone())
                    .collect();
                for hit in &hits {
                    prop_assert!(matched.contains(&hit.item.slug));
                }
            }
        }

        #[test]
        fn prop_single_token_sorted(items in catalogue_strategy(), query in "[a-e]{2,4}") {
            let hits = search(&query, &items, &SearchOptions::default());
            for pair in hits.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}
