//! History-derived suggestion entries.

use lantern_core::{Effects, SuggestionEntry};
use serde::{Deserialize, Serialize};
use url::Url;

use super::score;

/// One previously visited page matching the typed query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryMatch {
    /// The visited URL; doubles as the entry key.
    pub url: Url,
    /// Title recorded on the last visit.
    pub title: String,
    /// How often the page was visited.
    pub visits: u32,
    /// Ranking score assigned by the history service.
    pub score: f32,
    /// Whether this row is the assistant's highlighted suggestion.
    #[serde(skip)]
    pub is_selected: bool,
}

/// Whether a history entry still matches the typed query, on either its
/// title or its URL.
pub fn is_match(query: &str, entry: &HistoryMatch) -> bool {
    let pattern = score::pattern(query);
    score::score(&pattern, &entry.title) > 0.0 || score::score(&pattern, entry.url.as_str()) > 0.0
}

impl SuggestionEntry for HistoryMatch {
    type Message = ();

    fn id(&self) -> String {
        self.url.to_string()
    }

    fn select(&mut self) -> Effects<()> {
        self.is_selected = true;
        Effects::none()
    }

    fn deselect(&mut self) -> Effects<()> {
        self.is_selected = false;
        Effects::none()
    }

    fn activate(&mut self) -> Effects<()> {
        Effects::none()
    }

    fn receive(&mut self, _message: ()) -> Effects<()> {
        Effects::none()
    }
}
