//! Keyword filtering of listing cards.

/// One product card discovered on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    /// Displayed card title; absent when the listing exposes none.
    pub title: Option<String>,
    /// Absolute URL of the product page.
    pub url: String,
}

/// How a site decides which listing cards are worth fetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRule {
    /// Select a card iff any keyword equals some whitespace-separated token
    /// of the lowercased title. Exact token equality, not substring.
    AnyToken(Vec<String>),
    /// Select every discovered card regardless of title.
    All,
}

impl MatchRule {
    /// Builds an [`MatchRule::AnyToken`] rule, lowercasing each keyword.
    #[must_use]
    pub fn any_token(keywords: &[&str]) -> Self {
        MatchRule::AnyToken(keywords.iter().map(|k| k.to_lowercase()).collect())
    }

    /// Whether a card with this `title` passes the rule.
    ///
    /// A card with no title passes `All` but never a keyword rule; it is
    /// dropped silently rather than treated as an error.
    #[must_use]
    pub fn matches(&self, title: Option<&str>) -> bool {
        match self {
            MatchRule::All => true,
            MatchRule::AnyToken(keywords) => {
                let Some(title) = title else { return false };
                let lowered = title.to_lowercase();
                lowered
                    .split_whitespace()
                    .any(|token| keywords.iter().any(|keyword| keyword == token))
            }
        }
    }
}

/// Keeps the cards passing `rule`, preserving listing order.
///
/// Duplicate URLs are kept; the URL-keyed crawl result collapses them
/// downstream.
#[must_use]
pub fn filter_cards(links: Vec<CardLink>, rule: &MatchRule) -> Vec<CardLink> {
    links
        .into_iter()
        .filter(|link| rule.matches(link.title.as_deref()))
        .collect()
}
