//! Search-completion suggestion entries.

use lantern_core::{Effects, SuggestionEntry};
use serde::{Deserialize, Serialize};
use url::Url;

use super::score;

/// One completed query phrase offered by the search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// The completed phrase; doubles as the entry key.
    pub phrase: String,
    /// The search-results URL the phrase navigates to.
    pub url: Url,
    /// Whether this row is the assistant's highlighted suggestion.
    #[serde(skip)]
    pub is_selected: bool,
}

impl SearchMatch {
    /// A completion for the given phrase.
    pub fn new(phrase: impl Into<String>) -> Self {
        let phrase = phrase.into();
        let url = crate::service::search::search_url(&phrase);
        Self {
            phrase,
            url,
            is_selected: false,
        }
    }
}

/// Whether a completion still matches the typed query.
pub fn is_match(query: &str, entry: &SearchMatch) -> bool {
    score::score(&score::pattern(query), &entry.phrase) > 0.0
}

impl SuggestionEntry for SearchMatch {
    type Message = ();

    fn id(&self) -> String {
        self.phrase.clone()
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
