//! Generic state containers for the Lantern browser chrome.
//!
//! The chrome is a tree of components with unidirectional data flow: every
//! update is a synchronous function from state and action to new state plus a
//! batch of effect descriptions. This crate holds the pieces of that
//! machinery that are generic over the component types:
//!
//! - [`Deck`]: ordered, keyed container of child states with
//!   open/close/select/activate semantics (the tab strip's backbone)
//! - [`Suggestions`]: ordered, keyed dictionary of autocomplete entries
//! - [`index_of_offset`]: cursor arithmetic over concatenated lists
//! - [`delegate`]: threading a child update through a parent
//! - [`Effects`]: the effect batches every update returns
//!
//! Nothing here touches a widget toolkit; the GUI crate supplies concrete
//! card and entry types and executes the effect batches.

pub mod cursor;
pub mod deck;
pub mod effects;
pub mod selector;
pub mod suggestions;

pub use cursor::delegate;
pub use deck::{Card, CardId, Deck, DeckAction, beneficiary_of};
pub use effects::{Effect, Effects};
pub use selector::{NO_SELECTION, index_of_offset};
pub use suggestions::{SuggestionEntry, Suggestions, SuggestionsAction};
