//! Address-bar assistant: merged history + search autocomplete.
//!
//! The assistant owns two suggestion lists — completions from the search
//! provider and matches from browsing history — and one cursor over their
//! concatenation (search rows first). Keyboard navigation moves the cursor
//! across both lists; neither list knows the other exists.
//!
//! Two actions are outbound only: [`AssistAction::Suggest`] carries the
//! highlighted completion to the location bar, and [`AssistAction::Load`]
//! asks the chrome to navigate. The assistant itself treats both as no-ops.

pub mod history;
pub mod score;
pub mod search;

use lantern_core::{
    Effects, NO_SELECTION, Suggestions, SuggestionsAction, delegate, index_of_offset,
};
use url::Url;

use crate::error::ShellError;
use crate::service;
use crate::service::history::VisitStore;
use self::history::HistoryMatch;
use self::search::SearchMatch;

/// How many rows each suggestion source may contribute.
pub const SUGGESTION_LIMIT: usize = 5;

/// A completion offered to the location bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Text that completes the typed query.
    pub text: String,
    /// URL the completion navigates to.
    pub hint: String,
    /// The query this completion was derived from.
    pub query: String,
}

/// Actions the assistant handles.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistAction {
    /// Show the assistant under the location bar.
    Open,
    /// Hide and reset the assistant.
    Close,
    /// Show the assistant full-height.
    Expand,
    /// Reset query, results and cursor.
    Reset,
    /// Drop the cursor without touching the results.
    Unselect,
    /// Move the cursor to the next row, wrapping.
    SuggestNext,
    /// Move the cursor to the previous row, wrapping.
    SuggestPrevious,
    /// The typed query changed.
    Query(String),
    /// Outbound: the highlighted completion changed.
    Suggest(Completion),
    /// Outbound: navigate to a suggestion.
    Load(Url),
    /// A search row was pointed at.
    SelectSearch(String),
    /// A history row was pointed at.
    SelectHistory(String),
    /// Delegated search-list actions.
    Search(SuggestionsAction<()>),
    /// Delegated history-list actions.
    History(SuggestionsAction<()>),
    /// The search provider answered.
    SearchResult(Vec<SearchMatch>),
    /// The search provider failed.
    SearchFailed(ShellError),
    /// The history service answered.
    HistoryResult(Vec<HistoryMatch>),
    /// The history service failed.
    HistoryFailed(ShellError),
}

/// Which list a merged-cursor position falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Search,
    History,
}

/// State of the address-bar assistant.
#[derive(Debug, Clone, PartialEq)]
pub struct Assistant {
    /// Whether the results panel is visible.
    pub is_open: bool,
    /// Whether the panel takes the full content height.
    pub is_expanded: bool,
    /// The query the current results answer.
    pub query: String,
    /// Cursor over search-then-history; [`NO_SELECTION`] when idle.
    pub selected: isize,
    /// Completions from the search provider.
    pub search: Suggestions<SearchMatch>,
    /// Matches from browsing history.
    pub history: Suggestions<HistoryMatch>,
}

impl Default for Assistant {
    fn default() -> Self {
        Self {
            is_open: false,
            is_expanded: false,
            query: String::new(),
            selected: NO_SELECTION,
            search: Suggestions::new(),
            history: Suggestions::new(),
        }
    }
}

impl Assistant {
    /// A closed assistant with no results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rows across both lists.
    pub fn total(&self) -> usize {
        self.search.len() + self.history.len()
    }

    /// URL of the row under the cursor, if any.
    pub fn selected_url(&self) -> Option<Url> {
        match self.row_at(self.selected)? {
            (Section::Search, key) => self.search.get(&key).map(|entry| entry.url.clone()),
            (Section::History, key) => self.history.get(&key).map(|entry| entry.url.clone()),
        }
    }

    /// Dispatch an assistant action. `store` is the visit store the history
    /// queries snapshot.
    pub fn update(&mut self, store: &VisitStore, action: AssistAction) -> Effects<AssistAction> {
        match action {
            AssistAction::Open => {
                self.is_open = true;
                self.is_expanded = false;
                Effects::none()
            }
            AssistAction::Expand => {
                self.is_open = true;
                self.is_expanded = true;
                Effects::none()
            }
            AssistAction::Close | AssistAction::Reset => self.reset(),
            AssistAction::Unselect => self.suggest(NO_SELECTION),
            AssistAction::SuggestNext => self.step(1),
            AssistAction::SuggestPrevious => self.step(-1),
            AssistAction::Query(input) => self.request(store, input),
            AssistAction::SelectSearch(key) => {
                let position = self.search.index().iter().position(|entry| *entry == key);
                match position {
                    Some(position) => self.suggest(position as isize),
                    None => Effects::none(),
                }
            }
            AssistAction::SelectHistory(key) => {
                let position = self.history.index().iter().position(|entry| *entry == key);
                match position {
                    Some(position) => self.suggest((self.search.len() + position) as isize),
                    None => Effects::none(),
                }
            }
            AssistAction::Search(action) => delegate(
                self,
                |assistant| &mut assistant.search,
                Suggestions::update,
                AssistAction::Search,
                action,
            ),
            AssistAction::History(action) => delegate(
                self,
                |assistant| &mut assistant.history,
                Suggestions::update,
                AssistAction::History,
                action,
            ),
            AssistAction::SearchResult(matches) => self.search_result(matches),
            AssistAction::HistoryResult(matches) => {
                self.history = Suggestions::from_entries(matches);
                Effects::none()
            }
            AssistAction::SearchFailed(err) => {
                tracing::warn!(%err, "search completions unavailable");
                self.search.reset();
                Effects::none()
            }
            AssistAction::HistoryFailed(err) => {
                tracing::warn!(%err, "history matches unavailable");
                self.history.reset();
                Effects::none()
            }
            // Outbound actions, consumed by the chrome.
            AssistAction::Suggest(_) | AssistAction::Load(_) => Effects::none(),
        }
    }

    fn reset(&mut self) -> Effects<AssistAction> {
        self.is_open = false;
        self.is_expanded = false;
        self.query.clear();
        self.selected = NO_SELECTION;
        self.search.reset();
        self.history.reset();
        Effects::none()
    }

    /// Launch both suggestion queries for a new input.
    fn request(&mut self, store: &VisitStore, input: String) -> Effects<AssistAction> {
        if self.query == input {
            return Effects::none();
        }
        self.query = input.clone();
        self.selected = NO_SELECTION;

        let store = store.clone();
        let search_input = input.clone();
        Effects::batch([
            Effects::perform(async move {
                match service::search::query(search_input, SUGGESTION_LIMIT).await {
                    Ok(matches) => AssistAction::SearchResult(matches),
                    Err(err) => AssistAction::SearchFailed(err),
                }
            }),
            Effects::perform(async move {
                match service::history::query(store, input, SUGGESTION_LIMIT).await {
                    Ok(matches) => AssistAction::HistoryResult(matches),
                    Err(err) => AssistAction::HistoryFailed(err),
                }
            }),
        ])
    }

    fn search_result(&mut self, matches: Vec<SearchMatch>) -> Effects<AssistAction> {
        self.search = Suggestions::from_entries(matches);
        // With nothing picked yet, offer the top completion right away.
        if self.selected == NO_SELECTION && !self.search.is_empty() {
            self.suggest(0)
        } else {
            Effects::none()
        }
    }

    fn step(&mut self, offset: isize) -> Effects<AssistAction> {
        let next = index_of_offset(self.selected, offset, self.total(), true);
        self.suggest(next)
    }

    /// Move the cursor to a merged position, re-highlighting rows and
    /// announcing the new completion.
    fn suggest(&mut self, index: isize) -> Effects<AssistAction> {
        let mut fx = Effects::none();

        if let Some((section, key)) = self.row_at(self.selected) {
            fx.append(self.delegate_row(section, SuggestionsAction::Deselect(key)));
        }

        self.selected = index;

        if let Some((section, key)) = self.row_at(index) {
            fx.append(self.delegate_row(section, SuggestionsAction::Select(key)));
            if let Some(completion) = self.completion_at(index) {
                fx.append(Effects::receive(AssistAction::Suggest(completion)));
            }
        }

        fx
    }

    fn delegate_row(
        &mut self,
        section: Section,
        action: SuggestionsAction<()>,
    ) -> Effects<AssistAction> {
        match section {
            Section::Search => self.search.update(action).map(AssistAction::Search),
            Section::History => self.history.update(action).map(AssistAction::History),
        }
    }

    fn row_at(&self, index: isize) -> Option<(Section, String)> {
        if index < 0 {
            return None;
        }
        let position = index as usize;
        if position < self.search.len() {
            Some((Section::Search, self.search.index()[position].clone()))
        } else {
            self.history
                .index()
                .get(position - self.search.len())
                .map(|key| (Section::History, key.clone()))
        }
    }

    fn completion_at(&self, index: isize) -> Option<Completion> {
        match self.row_at(index)? {
            (Section::Search, key) => self.search.get(&key).map(|entry| Completion {
                text: entry.phrase.clone(),
                hint: entry.url.to_string(),
                query: self.query.clone(),
            }),
            (Section::History, key) => self.history.get(&key).map(|entry| Completion {
                text: entry.title.clone(),
                hint: entry.url.to_string(),
                query: self.query.clone(),
            }),
        }
    }
}
