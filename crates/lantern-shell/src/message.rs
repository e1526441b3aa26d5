//! Root message enum for the chrome.
//!
//! All user interactions and effect results flow through these variants. The
//! deck's and the assistant's own action vocabularies are embedded wholesale
//! and re-tagged here.

use iced::keyboard;
use lantern_core::{CardId, DeckAction};

use crate::assist::AssistAction;
use crate::state::{NavigatorAction, NavigatorFlags};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Component actions
    // =========================================================================
    /// Actions on the tab deck (including per-tab actions via `Modify`).
    Navigators(DeckAction<NavigatorAction, NavigatorFlags>),

    /// Actions on the address-bar assistant.
    Assistant(AssistAction),

    // =========================================================================
    // Chrome commands
    // =========================================================================
    /// Open and activate a fresh new-tab page.
    NewTab,

    /// Close a tab (runs its exit transition, then removal).
    CloseTab(CardId),

    /// Bring a tab to the foreground.
    ActivateTab(CardId),

    /// Highlight a tab in the strip without activating it.
    SelectTab(CardId),

    /// Activate the neighbor `offset` steps away in the strip, wrapping.
    CycleTab(isize),

    /// Show or hide the tab strip.
    ToggleSidebar,

    // =========================================================================
    // Location bar
    // =========================================================================
    /// The location-bar text changed.
    LocationChanged(String),

    /// The location bar was submitted.
    LocationSubmitted,

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation.
    Noop,
}
