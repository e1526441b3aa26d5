//! Location-bar input state.
//!
//! One instance lives inside each navigator, so every tab keeps its own
//! half-typed text. The inline `hint` is the assistant's current best
//! completion, shown dimmed after the typed text.

use lantern_core::Effects;

/// Editable state of the location bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    /// Text the user has typed.
    pub value: String,
    /// Completion hint supplied by the assistant.
    pub hint: Option<String>,
    /// Whether the bar shows the typed text rather than the page URL.
    pub is_editing: bool,
}

/// Actions on the location-bar input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// The user edited the text.
    Edit(String),
    /// Begin editing (focus).
    Focus,
    /// Stop editing and fall back to displaying the page URL.
    Blur,
    /// Replace the completion hint.
    Hint(Option<String>),
}

impl Input {
    /// An input that starts in editing mode (new-tab page).
    pub fn editing() -> Self {
        Self {
            is_editing: true,
            ..Self::default()
        }
    }

    /// Dispatch an input action.
    pub fn update(&mut self, action: InputAction) -> Effects<InputAction> {
        match action {
            InputAction::Edit(value) => {
                self.value = value;
                self.is_editing = true;
                self.hint = None;
            }
            InputAction::Focus => {
                self.is_editing = true;
            }
            InputAction::Blur => {
                self.is_editing = false;
                self.hint = None;
            }
            InputAction::Hint(hint) => {
                self.hint = hint;
            }
        }
        Effects::none()
    }
}
