//! Root application state.

use lantern_core::{CardId, Deck};

use crate::assist::Assistant;
use crate::service::history::VisitStore;
use crate::state::navigator::Navigator;

/// Everything the chrome knows.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The open tabs, in strip order.
    pub navigators: Deck<Navigator>,
    /// Address-bar autocomplete.
    pub assistant: Assistant,
    /// This session's visit history.
    pub history: VisitStore,
    /// Whether the tab strip sidebar is shown.
    pub is_sidebar_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            navigators: Deck::new(),
            assistant: Assistant::new(),
            history: VisitStore::new(),
            is_sidebar_open: true,
        }
    }
}

impl AppState {
    /// State at startup, before the first tab opens.
    pub fn new() -> Self {
        Self::default()
    }

    /// ID of the foreground tab.
    pub fn active_id(&self) -> Option<CardId> {
        self.navigators.active_id().cloned()
    }

    /// The foreground tab's state.
    pub fn active_navigator(&self) -> Option<&Navigator> {
        self.navigators.active()
    }
}
