//! Search-completion service.
//!
//! Derives completed query phrases for the assistant's search section. The
//! provider here completes from a built-in phrase table; a networked
//! provider would sit behind the same async seam and message shape.

use url::Url;

use crate::assist::search::SearchMatch;
use crate::error::ShellError;

/// Phrases the in-process provider can complete to.
const PHRASES: &[&str] = &[
    "rust programming language",
    "rust borrow checker",
    "rust async await",
    "rust lifetimes explained",
    "browser engine architecture",
    "browser tabs keyboard shortcuts",
    "weather this week",
    "weather radar",
    "news headlines today",
    "movie showtimes near me",
    "how to make coffee",
    "how to tie a tie",
    "open source licenses compared",
    "opera hours tonight",
    "python vs rust",
    "public transit schedule",
];

/// The search-results URL a query phrase navigates to.
pub fn search_url(query: &str) -> Url {
    Url::parse_with_params("https://duckduckgo.com/", &[("q", query)])
        .expect("base search URL is valid")
}

/// Complete a query into up to `limit` search matches.
///
/// The typed query itself is always the first completion, so pressing Enter
/// with the top suggestion highlighted searches exactly what was typed.
pub async fn query(query: String, limit: usize) -> Result<Vec<SearchMatch>, ShellError> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Ok(Vec::new());
    }

    let mut matches = vec![SearchMatch::new(needle.clone())];
    matches.extend(
        PHRASES
            .iter()
            .filter(|phrase| phrase.starts_with(&needle) && **phrase != needle)
            .take(limit.saturating_sub(1))
            .map(|phrase| SearchMatch::new(*phrase)),
    );

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn the_typed_query_leads_the_completions() {
        let matches = block_on(query("rust b".to_owned(), 5)).unwrap();
        assert_eq!(matches[0].phrase, "rust b");
        assert!(
            matches[1..]
                .iter()
                .all(|found| found.phrase.starts_with("rust b"))
        );
    }

    #[test]
    fn respects_the_limit() {
        let matches = block_on(query("rust".to_owned(), 3)).unwrap();
        assert!(matches.len() <= 3);
    }

    #[test]
    fn empty_queries_complete_to_nothing() {
        assert!(block_on(query("  ".to_owned(), 5)).unwrap().is_empty());
    }

    #[test]
    fn search_urls_carry_the_query() {
        let url = search_url("rust lang");
        assert_eq!(url.query(), Some("q=rust+lang"));
    }
}
