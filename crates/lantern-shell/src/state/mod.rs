//! Application state.
//!
//! - `AppState`: root state (tab deck, assistant, history, chrome flags)
//! - `Navigator`: one tab's state, the deck's card type
//! - `Input`: per-tab location-bar text
//! - `Page`: per-tab page state reported by the content host

mod app_state;
pub mod input;
pub mod navigator;
pub mod page;

pub use app_state::AppState;
pub use input::{Input, InputAction};
pub use navigator::{Navigator, NavigatorAction, NavigatorFlags};
pub use page::{LoadPhase, Page};
