//! Ordered, keyed container of child component states.
//!
//! A [`Deck`] manages the lifecycle of "cards" — opaque child states such as
//! per-tab navigators — keyed by monotonically increasing string IDs. At most
//! one card is *selected* (highlighted/previewed) and at most one is *active*
//! (foreground) at any time. Every operation returns a batch of the children's
//! effects re-tagged as [`DeckAction::Modify`] so the owning component can
//! route them back to the right card.
//!
//! All "not found" conditions are deliberate silent no-ops: asynchronous
//! effect results routinely race against user-driven removals, and a stale ID
//! must never crash the dispatch loop.

use std::collections::BTreeMap;

use crate::effects::Effects;

/// Identifier of a card within a deck. Opaque; compared by value.
pub type CardId = String;

/// Capability set a card type supplies to its deck.
///
/// Lifecycle transitions (`select`, `activate`, `close`, ...) are distinct
/// from [`Card::update`] so a card can run entry/exit behavior without the
/// deck knowing its action vocabulary.
pub trait Card: Sized {
    /// The card's own action type, carried by [`DeckAction::Modify`].
    type Action: Send + 'static;
    /// Options passed when opening a new card.
    type Flags: Send + 'static;

    /// Build a fresh card from open flags.
    fn init(flags: Self::Flags) -> (Self, Effects<Self::Action>);
    /// Dispatch one of the card's own actions.
    fn update(&mut self, action: Self::Action) -> Effects<Self::Action>;
    /// The card became the selection highlight.
    fn select(&mut self) -> Effects<Self::Action>;
    /// The card lost the selection highlight.
    fn deselect(&mut self) -> Effects<Self::Action>;
    /// The card became the foreground card.
    fn activate(&mut self) -> Effects<Self::Action>;
    /// The card left the foreground.
    fn deactivate(&mut self) -> Effects<Self::Action>;
    /// The card is closing; removal from the deck happens separately.
    fn close(&mut self) -> Effects<Self::Action>;
}

/// Actions a deck accepts, tagged back to callers through effect batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckAction<A, F> {
    /// Open a new card built from the given flags.
    Open(F),
    /// Run the card's closing transition, keeping it in the deck.
    Close(CardId),
    /// Drop the card from the deck entirely.
    Remove(CardId),
    /// Make the card the selection highlight.
    Select(CardId),
    /// Clear the selection highlight if this card holds it.
    Deselect(CardId),
    /// Make the card the foreground card.
    Activate(CardId),
    /// Clear the foreground if this card holds it.
    Deactivate(CardId),
    /// Forward an action to one card.
    Modify(CardId, A),
}

/// Ordered, keyed collection of card states.
///
/// Invariants upheld by construction: `selected` and `active`, when present,
/// are keys of `cards`; every key of `cards` appears in `index` and vice
/// versa; `next_id` never decreases, so removed IDs are never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck<C> {
    next_id: u64,
    index: Vec<CardId>,
    cards: BTreeMap<CardId, C>,
    selected: Option<CardId>,
    active: Option<CardId>,
}

impl<C> Default for Deck<C> {
    fn default() -> Self {
        Self {
            next_id: 0,
            index: Vec::new(),
            cards: BTreeMap::new(),
            selected: None,
            active: None,
        }
    }
}

impl<C: Card> Deck<C> {
    /// An empty deck whose first card will get ID `"0"`.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Display order of the open cards, most recently opened first.
    pub fn index(&self) -> &[CardId] {
        &self.index
    }

    /// Number of open cards.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The next ID that will be allocated.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// ID of the selected card, if any.
    pub fn selected_id(&self) -> Option<&CardId> {
        self.selected.as_ref()
    }

    /// ID of the active card, if any.
    pub fn active_id(&self) -> Option<&CardId> {
        self.active.as_ref()
    }

    /// Whether a card with this ID is open.
    pub fn contains(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }

    /// Look up a card by ID.
    pub fn get(&self, id: &str) -> Option<&C> {
        self.cards.get(id)
    }

    /// The active card's state, if any.
    pub fn active(&self) -> Option<&C> {
        self.active.as_deref().and_then(|id| self.cards.get(id))
    }

    /// Iterate `(id, card)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&CardId, &C)> {
        self.index.iter().filter_map(|id| {
            let card = self.cards.get(id)?;
            Some((id, card))
        })
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Dispatch a deck action.
    pub fn update(
        &mut self,
        action: DeckAction<C::Action, C::Flags>,
    ) -> Effects<DeckAction<C::Action, C::Flags>> {
        match action {
            DeckAction::Open(flags) => self.open(flags),
            DeckAction::Close(id) => self.close(&id),
            DeckAction::Remove(id) => self.remove(&id),
            DeckAction::Select(id) => self.select(&id),
            DeckAction::Deselect(id) => self.deselect(&id),
            DeckAction::Activate(id) => self.activate(&id),
            DeckAction::Deactivate(id) => self.deactivate(&id),
            DeckAction::Modify(id, action) => self.modify(&id, action),
        }
    }

    /// Open a new card at the front of the index.
    ///
    /// A currently active card is deactivated first and its effects precede
    /// the new card's init effects in the returned batch. The fresh card is
    /// neither selected nor activated; callers compose `open` with
    /// [`Deck::activate`] when the new card should take the foreground.
    pub fn open(&mut self, flags: C::Flags) -> Effects<DeckAction<C::Action, C::Flags>> {
        let deactivated = match self.active.clone() {
            Some(active) => self.deactivate(&active),
            None => Effects::none(),
        };

        let id: CardId = self.next_id.to_string();
        self.next_id += 1;

        let (card, fx) = C::init(flags);
        self.index.insert(0, id.clone());
        self.cards.insert(id.clone(), card);

        Effects::batch([deactivated, fx.map(modify(id))])
    }

    /// Run a card's closing transition without removing it.
    ///
    /// Selection/activation are first migrated to a neighbor so the deck is
    /// never left pointing at a card that is on its way out. Removal is a
    /// separate [`Deck::remove`] step, typically dispatched once the card's
    /// exit transition has finished.
    pub fn close(&mut self, id: &str) -> Effects<DeckAction<C::Action, C::Flags>> {
        let cleared = self.clear(id);
        match self.cards.get_mut(id) {
            Some(card) => {
                let fx = card.close();
                Effects::batch([cleared, fx.map(modify(id.to_owned()))])
            }
            None => self.card_not_found(id),
        }
    }

    /// Drop a card from the deck. No-op if the ID is not present.
    pub fn remove(&mut self, id: &str) -> Effects<DeckAction<C::Action, C::Flags>> {
        let cleared = self.clear(id);
        if self.cards.remove(id).is_some() {
            self.index.retain(|entry| entry != id);
            // With no neighbor to inherit them, the roles end with the card.
            if self.active.as_deref() == Some(id) {
                self.active = None;
            }
            if self.selected.as_deref() == Some(id) {
                self.selected = None;
            }
            cleared
        } else {
            self.card_not_found(id)
        }
    }

    /// Make a card the selection highlight.
    ///
    /// No-op when the card is already selected or not present. A previously
    /// selected card is deselected first; both cards' effects are batched in
    /// that order.
    pub fn select(&mut self, id: &str) -> Effects<DeckAction<C::Action, C::Flags>> {
        if self.selected.as_deref() == Some(id) {
            return Effects::none();
        }
        if !self.cards.contains_key(id) {
            return self.card_not_found(id);
        }

        let deselected = match self.selected.clone() {
            Some(selected) => self.deselect(&selected),
            None => Effects::none(),
        };

        let card = self
            .cards
            .get_mut(id)
            .expect("selection target checked above");
        let fx = card.select();
        self.selected = Some(id.to_owned());

        Effects::batch([deselected, fx.map(modify(id.to_owned()))])
    }

    /// Clear the selection highlight from a card.
    ///
    /// No-op unless this card currently holds the selection. The selection
    /// pointer is dropped entirely, leaving the deck with no selected card.
    pub fn deselect(&mut self, id: &str) -> Effects<DeckAction<C::Action, C::Flags>> {
        if self.selected.as_deref() != Some(id) {
            return Effects::none();
        }
        match self.cards.get_mut(id) {
            Some(card) => {
                let fx = card.deselect();
                self.selected = None;
                fx.map(modify(id.to_owned()))
            }
            None => self.card_not_found(id),
        }
    }

    /// Make a card the foreground card.
    ///
    /// No-op when already active or not present. A previously active card is
    /// deactivated first; activation also clears the selection highlight.
    pub fn activate(&mut self, id: &str) -> Effects<DeckAction<C::Action, C::Flags>> {
        if self.active.as_deref() == Some(id) {
            return Effects::none();
        }
        if !self.cards.contains_key(id) {
            return self.card_not_found(id);
        }

        let deactivated = match self.active.clone() {
            Some(active) => self.deactivate(&active),
            None => Effects::none(),
        };

        let card = self
            .cards
            .get_mut(id)
            .expect("activation target checked above");
        let fx = card.activate();
        self.active = Some(id.to_owned());
        self.selected = None;

        Effects::batch([deactivated, fx.map(modify(id.to_owned()))])
    }

    /// Clear the foreground from a card.
    ///
    /// No-op unless this card is active. Clears both `active` and `selected`.
    pub fn deactivate(&mut self, id: &str) -> Effects<DeckAction<C::Action, C::Flags>> {
        if self.active.as_deref() != Some(id) {
            return Effects::none();
        }
        match self.cards.get_mut(id) {
            Some(card) => {
                let fx = card.deactivate();
                self.active = None;
                self.selected = None;
                fx.map(modify(id.to_owned()))
            }
            None => self.card_not_found(id),
        }
    }

    /// Forward an action to one card.
    ///
    /// Silently dropped when the card is gone — the normal fate of an effect
    /// result racing a removal.
    pub fn modify(
        &mut self,
        id: &str,
        action: C::Action,
    ) -> Effects<DeckAction<C::Action, C::Flags>> {
        match self.cards.get_mut(id) {
            Some(card) => card.update(action).map(modify(id.to_owned())),
            None => {
                tracing::trace!(id, "dropping action for a card that is gone");
                Effects::none()
            }
        }
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    /// Migrate `active`/`selected` away from a card about to close or leave.
    fn clear(&mut self, id: &str) -> Effects<DeckAction<C::Action, C::Flags>> {
        if self.active.as_deref() == Some(id) {
            match beneficiary_of(id, &self.index).cloned() {
                Some(heir) => self.activate(&heir),
                None => Effects::none(),
            }
        } else if self.selected.as_deref() == Some(id) {
            match beneficiary_of(id, &self.index).cloned() {
                Some(heir) => self.select(&heir),
                None => Effects::none(),
            }
        } else {
            Effects::none()
        }
    }

    fn card_not_found(&self, id: &str) -> Effects<DeckAction<C::Action, C::Flags>> {
        tracing::trace!(id, "card not found; ignoring");
        Effects::none()
    }
}

/// Neighbor that inherits a role vacated by `id`:
///
/// - none, if the index is empty or holds only `id`;
/// - the first element, if `id` is not in the index;
/// - the following element, if `id` is first;
/// - the preceding element, otherwise.
pub fn beneficiary_of<'a>(id: &str, index: &'a [CardId]) -> Option<&'a CardId> {
    let count = index.len();
    let from = index.iter().position(|entry| entry == id);
    let to = if count == 0 {
        None
    } else {
        match from {
            None => Some(0),
            Some(_) if count == 1 => None,
            Some(0) => Some(1),
            Some(position) => Some(position - 1),
        }
    };
    to.and_then(|position| index.get(position))
}

fn modify<A, F>(id: CardId) -> impl Fn(A) -> DeckAction<A, F> + Clone + Send + 'static
where
    A: Send + 'static,
    F: Send + 'static,
{
    move |action| DeckAction::Modify(id.clone(), action)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal card that records every lifecycle transition it saw.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Probe {
        label: String,
        log: Vec<&'static str>,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Rename(String);

    impl Card for Probe {
        type Action = Rename;
        type Flags = String;

        fn init(flags: String) -> (Self, Effects<Rename>) {
            (
                Self {
                    label: flags,
                    log: vec!["init"],
                },
                Effects::none(),
            )
        }

        fn update(&mut self, Rename(label): Rename) -> Effects<Rename> {
            self.label = label;
            self.log.push("update");
            Effects::none()
        }

        fn select(&mut self) -> Effects<Rename> {
            self.log.push("select");
            Effects::none()
        }

        fn deselect(&mut self) -> Effects<Rename> {
            self.log.push("deselect");
            Effects::none()
        }

        fn activate(&mut self) -> Effects<Rename> {
            self.log.push("activate");
            Effects::none()
        }

        fn deactivate(&mut self) -> Effects<Rename> {
            self.log.push("deactivate");
            Effects::none()
        }

        fn close(&mut self) -> Effects<Rename> {
            self.log.push("close");
            Effects::none()
        }
    }

    fn deck_of(labels: &[&str]) -> Deck<Probe> {
        let mut deck = Deck::new();
        for label in labels {
            deck.open((*label).to_owned());
        }
        deck
    }

    #[test]
    fn open_allocates_distinct_ids_and_prepends() {
        let mut deck: Deck<Probe> = Deck::new();
        deck.open("a".to_owned());
        deck.open("b".to_owned());
        deck.open("c".to_owned());

        assert_eq!(deck.next_id(), 3);
        assert_eq!(deck.index(), ["2", "1", "0"]);
        assert_eq!(deck.get("0").unwrap().label, "a");
        assert_eq!(deck.get("2").unwrap().label, "c");
    }

    #[test]
    fn open_deactivates_the_previous_foreground() {
        let mut deck = deck_of(&["a"]);
        deck.activate("0");
        deck.open("b".to_owned());

        assert_eq!(deck.active_id(), None);
        assert_eq!(deck.get("0").unwrap().log.last(), Some(&"deactivate"));
        // The fresh card is not auto-activated.
        assert_eq!(deck.get("1").unwrap().log, vec!["init"]);
    }

    #[test]
    fn activate_clears_selection_and_swaps_foreground() {
        let mut deck = deck_of(&["a", "b"]);
        deck.activate("0");
        deck.select("1");
        assert_eq!(deck.selected_id().map(String::as_str), Some("1"));

        deck.activate("1");
        assert_eq!(deck.active_id().map(String::as_str), Some("1"));
        assert_eq!(deck.selected_id(), None);
        assert_eq!(deck.get("0").unwrap().log.last(), Some(&"deactivate"));
    }

    #[test]
    fn select_keeps_the_foreground_untouched() {
        let mut deck = deck_of(&["a", "b"]);
        deck.activate("0");
        deck.select("1");

        assert_eq!(deck.active_id().map(String::as_str), Some("0"));
        assert_eq!(deck.selected_id().map(String::as_str), Some("1"));
    }

    #[test]
    fn select_is_idempotent_and_effect_free_the_second_time() {
        let mut deck = deck_of(&["a", "b"]);
        deck.select("1");
        let snapshot = deck.clone();

        let fx = deck.select("1");
        assert!(fx.is_empty());
        assert_eq!(deck, snapshot);
    }

    #[test]
    fn deselect_clears_the_selection_pointer() {
        // Earlier revisions of this container left `selected` pointing at the
        // card it had just deselected; the pointer is now dropped entirely.
        let mut deck = deck_of(&["a", "b"]);
        deck.select("1");
        deck.deselect("1");

        assert_eq!(deck.selected_id(), None);
        assert_eq!(deck.get("1").unwrap().log.last(), Some(&"deselect"));
    }

    #[test]
    fn deselect_of_a_non_selected_card_is_a_no_op() {
        let mut deck = deck_of(&["a", "b"]);
        deck.select("1");
        let snapshot = deck.clone();

        let fx = deck.deselect("0");
        assert!(fx.is_empty());
        assert_eq!(deck, snapshot);
    }

    #[test]
    fn remove_hands_roles_to_a_neighbor() {
        let mut deck = deck_of(&["a", "b", "c"]);
        // index = ["2", "1", "0"]
        deck.activate("1");
        deck.remove("1");

        assert_eq!(deck.index(), ["2", "0"]);
        // "1" was in the middle, so its predecessor in the index inherits.
        assert_eq!(deck.active_id().map(String::as_str), Some("2"));
        assert!(deck.get("1").is_none());
    }

    #[test]
    fn removing_the_only_card_leaves_no_roles() {
        let mut deck = deck_of(&["a"]);
        deck.activate("0");
        deck.select("0");
        deck.remove("0");

        assert!(deck.is_empty());
        assert_eq!(deck.active_id(), None);
        assert_eq!(deck.selected_id(), None);
        // IDs are never reused after removal.
        assert_eq!(deck.next_id(), 1);
    }

    #[test]
    fn close_keeps_the_card_but_migrates_roles() {
        let mut deck = deck_of(&["a", "b"]);
        deck.activate("1");
        deck.close("1");

        assert!(deck.contains("1"));
        assert_eq!(deck.index(), ["1", "0"]);
        assert_eq!(deck.active_id().map(String::as_str), Some("0"));
        assert_eq!(deck.get("1").unwrap().log.last(), Some(&"close"));
    }

    #[test]
    fn stale_ids_are_silent_no_ops() {
        let mut deck = deck_of(&["a"]);
        let snapshot = deck.clone();

        assert!(deck.select("9").is_empty());
        assert!(deck.activate("9").is_empty());
        assert!(deck.close("9").is_empty());
        assert!(deck.remove("9").is_empty());
        assert!(deck.modify("9", Rename("x".to_owned())).is_empty());
        assert_eq!(deck, snapshot);
    }

    #[test]
    fn modify_reaches_exactly_one_card() {
        let mut deck = deck_of(&["a", "b"]);
        deck.modify("0", Rename("renamed".to_owned()));

        assert_eq!(deck.get("0").unwrap().label, "renamed");
        assert_eq!(deck.get("1").unwrap().label, "b");
    }

    #[test]
    fn beneficiary_prefers_the_predecessor_except_at_the_head() {
        let index: Vec<CardId> = ["a", "b", "c"].map(str::to_owned).into();

        assert_eq!(beneficiary_of("a", &index).map(String::as_str), Some("b"));
        assert_eq!(beneficiary_of("b", &index).map(String::as_str), Some("a"));
        assert_eq!(beneficiary_of("c", &index).map(String::as_str), Some("b"));
        // An ID that is not present falls back to the head.
        assert_eq!(beneficiary_of("x", &index).map(String::as_str), Some("a"));

        let single: Vec<CardId> = vec!["a".to_owned()];
        assert_eq!(beneficiary_of("a", &single), None);
        assert_eq!(beneficiary_of("x", &single).map(String::as_str), Some("a"));
        assert_eq!(beneficiary_of("a", &[]), None);
    }

    #[test]
    fn open_activate_open_remove_scenario() {
        let mut deck: Deck<Probe> = Deck::new();
        assert_eq!(deck.next_id(), 0);

        deck.open("a".to_owned());
        assert_eq!(deck.next_id(), 1);
        assert_eq!(deck.index(), ["0"]);
        assert_eq!(deck.active_id(), None);

        deck.activate("0");
        assert_eq!(deck.active_id().map(String::as_str), Some("0"));
        assert_eq!(deck.selected_id(), None);

        deck.open("b".to_owned());
        assert_eq!(deck.index(), ["1", "0"]);
        assert_eq!(deck.active_id(), None);

        deck.activate("1");
        assert_eq!(deck.active_id().map(String::as_str), Some("1"));

        deck.remove("0");
        assert_eq!(deck.index(), ["1"]);
        assert_eq!(deck.active_id().map(String::as_str), Some("1"));
    }
}
