//! Browsing-history service.
//!
//! Keeps the session's visit store and answers the assistant's ranked
//! queries. Queries receive a snapshot of the store, never a handle into it;
//! results re-enter the chrome as ordinary messages.

use std::collections::BTreeMap;

use url::Url;

use crate::assist::history::HistoryMatch;
use crate::assist::score;
use crate::error::ShellError;

/// Visits-count weight added on top of the text-match score, saturating so a
/// much-visited page cannot outrank a clearly better text match.
const FREQUENCY_WEIGHT: f32 = 0.05;
const FREQUENCY_CAP: u32 = 10;

/// One visited page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    /// The visited URL.
    pub url: Url,
    /// Title recorded on the most recent visit.
    pub title: String,
    /// Visit count.
    pub visits: u32,
}

/// In-memory visit store for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitStore {
    visits: BTreeMap<String, Visit>,
}

impl VisitStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a page visit, bumping the count on repeats.
    pub fn record(&mut self, url: &Url, title: &str) {
        self.visits
            .entry(url.to_string())
            .and_modify(|visit| {
                visit.visits += 1;
                visit.title = title.to_owned();
            })
            .or_insert_with(|| Visit {
                url: url.clone(),
                title: title.to_owned(),
                visits: 1,
            });
    }

    /// Number of distinct pages visited.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Whether nothing has been visited yet.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Iterate all visits.
    pub fn iter(&self) -> impl Iterator<Item = &Visit> {
        self.visits.values()
    }
}

/// Query a store snapshot for the best-matching visits.
///
/// Matches are scored on title and URL (whichever scores higher) with a
/// capped visit-frequency boost, sorted by descending score.
pub async fn query(
    store: VisitStore,
    query: String,
    limit: usize,
) -> Result<Vec<HistoryMatch>, ShellError> {
    let needle = query.trim();
    if needle.is_empty() || limit == 0 {
        return Ok(Vec::new());
    }

    let pattern = score::pattern(needle);
    let mut matches: Vec<HistoryMatch> = store
        .iter()
        .filter_map(|visit| {
            let text_score = score::score(&pattern, &visit.title)
                .max(score::score(&pattern, visit.url.as_str()));
            if text_score <= 0.0 {
                return None;
            }
            let frequency = visit.visits.min(FREQUENCY_CAP) as f32 * FREQUENCY_WEIGHT;
            Some(HistoryMatch {
                url: visit.url.clone(),
                title: visit.title.clone(),
                visits: visit.visits,
                score: text_score + frequency,
                is_selected: false,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(limit);
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn store() -> VisitStore {
        let mut store = VisitStore::new();
        store.record(&Url::parse("https://docs.rs/").unwrap(), "Docs.rs");
        store.record(&Url::parse("https://crates.io/").unwrap(), "crates.io");
        store.record(
            &Url::parse("https://rust-lang.org/").unwrap(),
            "Rust Programming Language",
        );
        store
    }

    #[test]
    fn repeat_visits_bump_the_count() {
        let mut store = store();
        store.record(&Url::parse("https://docs.rs/").unwrap(), "Docs.rs");
        let visit = store
            .iter()
            .find(|visit| visit.url.as_str() == "https://docs.rs/")
            .unwrap();
        assert_eq!(visit.visits, 2);
    }

    #[test]
    fn query_matches_title_or_url() {
        let matches = block_on(query(store(), "rust".to_owned(), 5)).unwrap();
        let urls: Vec<_> = matches
            .iter()
            .map(|found| found.url.as_str().to_owned())
            .collect();
        // "rust" appears in rust-lang.org (title and URL) and crates.io's URL
        // does not contain it; docs.rs does not match at all.
        assert!(urls.contains(&"https://rust-lang.org/".to_owned()));
        assert!(!urls.contains(&"https://docs.rs/".to_owned()));
    }

    #[test]
    fn frequent_pages_rank_higher_on_equal_text() {
        let mut store = VisitStore::new();
        store.record(&Url::parse("https://a.example/rust").unwrap(), "rust page");
        for _ in 0..5 {
            store.record(&Url::parse("https://b.example/rust").unwrap(), "rust page");
        }

        let matches = block_on(query(store, "rust page".to_owned(), 5)).unwrap();
        assert_eq!(matches[0].url.as_str(), "https://b.example/rust");
    }

    #[test]
    fn blank_queries_match_nothing() {
        assert!(block_on(query(store(), " ".to_owned(), 5)).unwrap().is_empty());
    }
}
