/// Per-token ranking over catalogue items.
///
/// A token is scored against every searchable field of an item and the best
/// field wins. Scores order first by [`MatchTier`] (exact, then prefix, then
/// substring, then scattered subsequence) and then by the nucleo fuzzy score, so
/// a prefix hit always outranks a fuzzy hit regardless of how tight the fuzzy
/// alignment is.
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{Atom, AtomKind, CaseMatching, Normalization},
};
use serde::Serialize;

use crate::catalogue::SearchableItem;

/// How a token matched a field, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Characters appear in order but not contiguously.
    Fuzzy,
    /// Contiguous substring.
    Contains,
    /// Field starts with the token.
    Prefix,
    /// Field equals the token.
    Exact,
}

impl MatchTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fuzzy => "fuzzy",
            Self::Contains => "contains",
            Self::Prefix => "prefix",
            Self::Exact => "exact",
        }
    }
}

/// Score of one token against one item. Higher is better.
///
/// Field order matters for the derived `Ord`: tier dominates, fuzzy breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TokenScore {
    pub tier: MatchTier,
    pub fuzzy: u16,
}

/// Scores items against a single query token.
///
/// Owns the nucleo matcher and its scratch buffer so ranking a whole catalogue
/// allocates once.
pub struct TokenMatcher {
    atom: Atom,
    needle: String,
    matcher: Matcher,
    buf: Vec<char>,
}

impl TokenMatcher {
    /// Build a matcher for `token`. Pattern syntax (`^`, `$`, `!`, `'`) is not
    /// interpreted; the token is matched literally.
    #[must_use]
    pub fn new(token: &str) -> Self {
        let atom = Atom::new(
            token,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
            false,
        );
        Self {
            atom,
            needle: token.to_lowercase(),
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
            buf: Vec::new(),
        }
    }

    /// Best score of the token over the item's searchable fields, or `None`
    /// when no field matches.
    pub fn score_item(&mut self, item: &SearchableItem) -> Option<TokenScore> {
        if self.needle.is_empty() {
            return None;
        }
        item.searchable_fields()
            .filter_map(|field| self.score_field(field))
            .max()
    }

    fn score_field(&mut self, field: &str) -> Option<TokenScore> {
        let fuzzy = self
            .atom
            .score(Utf32Str::new(field, &mut self.buf), &mut self.matcher);

        let lower = field.to_lowercase();
        let tier = if lower == self.needle {
            MatchTier::Exact
        } else if lower.starts_with(&self.needle) {
            MatchTier::Prefix
        } else if lower.contains(&self.needle) {
            MatchTier::Contains
        } else if fuzzy.is_some() {
            MatchTier::Fuzzy
        } else {
            return None;
        };

        Some(TokenScore {
            tier,
            fuzzy: fuzzy.unwrap_or(0),
        })
    }
}

/// Rank every item matching `token`, best first.
///
/// Ties keep catalogue order.
#[must_use]
pub fn rank_token<'a>(token: &str, items: &'a [SearchableItem]) -> Vec<(&'a SearchableItem, TokenScore)> {
    let mut matcher = TokenMatcher::new(token);
    let mut scored: Vec<(&SearchableItem, TokenScore)> = items
        .iter()
        .filter_map(|item| matcher.score_item(item).map(|score| (item, score)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}
