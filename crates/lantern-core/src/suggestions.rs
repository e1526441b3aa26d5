//! Ordered, keyed dictionary of autocomplete suggestion entries.
//!
//! Unlike [`Deck`](crate::deck::Deck), a [`Suggestions`] instance holds no
//! selection state of its own: the owning component tracks a single selected
//! index across the concatenation of several instances (history matches and
//! search matches in the address bar), so keyboard navigation cycles one
//! merged ranked list without either sub-list knowing about the other.
//! See [`index_of_offset`](crate::selector::index_of_offset) for the
//! arithmetic of that merged cursor.

use std::collections::BTreeMap;

use crate::effects::Effects;

/// Capability set a suggestion entry type supplies.
///
/// Keys are derived from entries via [`SuggestionEntry::id`] (e.g. the URL a
/// history match points at), which makes keys unique per entry identity.
pub trait SuggestionEntry: Sized {
    /// The entry's own message type, carried by [`SuggestionsAction::To`].
    type Message: Send + 'static;

    /// Key identifying this entry within its list.
    fn id(&self) -> String;
    /// The entry became the highlighted row.
    fn select(&mut self) -> Effects<Self::Message>;
    /// The entry lost the highlight.
    fn deselect(&mut self) -> Effects<Self::Message>;
    /// The entry was chosen (e.g. committed by Enter).
    fn activate(&mut self) -> Effects<Self::Message>;
    /// Deliver one of the entry's own messages.
    fn receive(&mut self, message: Self::Message) -> Effects<Self::Message>;
}

/// Actions delegated to individual entries by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionsAction<M> {
    /// Highlight the entry with this key.
    Select(String),
    /// Drop the highlight from the entry with this key.
    Deselect(String),
    /// Commit the entry with this key.
    Activate(String),
    /// Forward an entry message by key.
    To {
        /// Key of the addressed entry.
        key: String,
        /// The entry's own message.
        message: M,
    },
}

/// Ordered, keyed collection of suggestion entries.
///
/// Invariants upheld by construction: `index` holds no duplicate keys and
/// every key in `index` has a value; replacement operations rebuild both
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions<E> {
    index: Vec<String>,
    values: BTreeMap<String, E>,
}

impl<E> Default for Suggestions<E> {
    fn default() -> Self {
        Self {
            index: Vec::new(),
            values: BTreeMap::new(),
        }
    }
}

impl<E: SuggestionEntry> Suggestions<E> {
    /// An empty suggestion list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from entries in the given order.
    ///
    /// When two entries derive the same key, the later entry wins and the key
    /// keeps its first position in the index.
    pub fn from_entries(entries: impl IntoIterator<Item = E>) -> Self {
        let mut index = Vec::new();
        let mut values = BTreeMap::new();
        for entry in entries {
            let key = entry.id();
            if values.insert(key.clone(), entry).is_none() {
                index.push(key);
            }
        }
        Self { index, values }
    }

    /// Drop every entry.
    pub fn reset(&mut self) {
        self.index.clear();
        self.values.clear();
    }

    /// Keep only the entries matching `query`, preserving their relative
    /// order. Filtering with the same query twice is idempotent.
    pub fn query(&mut self, query: &str, is_match: impl Fn(&str, &E) -> bool) {
        let mut index = Vec::new();
        let mut values = BTreeMap::new();
        for key in &self.index {
            let Some(entry) = self.values.remove(key) else {
                continue;
            };
            if is_match(query, &entry) {
                index.push(key.clone());
                values.insert(key.clone(), entry);
            }
        }
        self.index = index;
        self.values = values;
    }

    /// Dispatch an action to the addressed entry.
    ///
    /// An unknown key is reported to the diagnostic sink and otherwise
    /// ignored — results for a list that has since been replaced are routine.
    pub fn update(
        &mut self,
        action: SuggestionsAction<E::Message>,
    ) -> Effects<SuggestionsAction<E::Message>> {
        match action {
            SuggestionsAction::Select(key) => self.delegate(&key, E::select),
            SuggestionsAction::Deselect(key) => self.delegate(&key, E::deselect),
            SuggestionsAction::Activate(key) => self.delegate(&key, E::activate),
            SuggestionsAction::To { key, message } => {
                self.delegate(&key, |entry| entry.receive(message))
            }
        }
    }

    fn delegate(
        &mut self,
        key: &str,
        operation: impl FnOnce(&mut E) -> Effects<E::Message>,
    ) -> Effects<SuggestionsAction<E::Message>> {
        match self.values.get_mut(key) {
            Some(entry) => {
                let tag = to(key.to_owned());
                operation(entry).map(tag)
            }
            None => {
                tracing::warn!(key, "no suggestion entry with this key");
                Effects::none()
            }
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Keys in display order.
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&E> {
        self.values.get(key)
    }

    /// The entry at a display position.
    pub fn nth(&self, position: usize) -> Option<&E> {
        self.index
            .get(position)
            .and_then(|key| self.values.get(key))
    }

    /// Iterate `(key, entry)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &E)> {
        self.index.iter().filter_map(|key| {
            let entry = self.values.get(key)?;
            Some((key, entry))
        })
    }
}

fn to<M: Send + 'static>(
    key: String,
) -> impl Fn(M) -> SuggestionsAction<M> + Clone + Send + 'static {
    move |message| SuggestionsAction::To {
        key: key.clone(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        key: String,
        body: String,
        is_selected: bool,
    }

    impl Row {
        fn new(key: &str, body: &str) -> Self {
            Self {
                key: key.to_owned(),
                body: body.to_owned(),
                is_selected: false,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct SetBody(String);

    impl SuggestionEntry for Row {
        type Message = SetBody;

        fn id(&self) -> String {
            self.key.clone()
        }

        fn select(&mut self) -> Effects<SetBody> {
            self.is_selected = true;
            Effects::none()
        }

        fn deselect(&mut self) -> Effects<SetBody> {
            self.is_selected = false;
            Effects::none()
        }

        fn activate(&mut self) -> Effects<SetBody> {
            Effects::none()
        }

        fn receive(&mut self, SetBody(body): SetBody) -> Effects<SetBody> {
            self.body = body;
            Effects::none()
        }
    }

    #[test]
    fn from_entries_preserves_order() {
        let list = Suggestions::from_entries([
            Row::new("b", "second"),
            Row::new("a", "first"),
            Row::new("c", "third"),
        ]);
        assert_eq!(list.index(), ["b", "a", "c"]);
        assert_eq!(list.nth(1).unwrap().body, "first");
    }

    #[test]
    fn duplicate_keys_keep_first_position_and_last_value() {
        let list = Suggestions::from_entries([
            Row::new("a", "old"),
            Row::new("b", "middle"),
            Row::new("a", "new"),
        ]);
        assert_eq!(list.index(), ["a", "b"]);
        assert_eq!(list.get("a").unwrap().body, "new");
    }

    #[test]
    fn query_is_idempotent_and_order_preserving() {
        let mut list = Suggestions::from_entries([
            Row::new("a", "rust lang"),
            Row::new("b", "go lang"),
            Row::new("c", "rustup"),
        ]);
        let matches = |query: &str, row: &Row| row.body.contains(query);

        list.query("rust", matches);
        assert_eq!(list.index(), ["a", "c"]);

        let filtered = list.clone();
        list.query("rust", matches);
        assert_eq!(list, filtered);
    }

    #[test]
    fn update_reaches_exactly_one_entry() {
        let mut list = Suggestions::from_entries([Row::new("a", "one"), Row::new("b", "two")]);
        let fx = list.update(SuggestionsAction::Select("b".to_owned()));

        assert!(fx.is_empty());
        assert!(list.get("b").unwrap().is_selected);
        assert!(!list.get("a").unwrap().is_selected);
    }

    #[test]
    fn unknown_key_is_reported_but_harmless() {
        let mut list = Suggestions::from_entries([Row::new("a", "one")]);
        let snapshot = list.clone();

        let fx = list.update(SuggestionsAction::To {
            key: "zzz".to_owned(),
            message: SetBody("ignored".to_owned()),
        });
        assert!(fx.is_empty());
        assert_eq!(list, snapshot);
    }

    #[test]
    fn reset_drops_everything() {
        let mut list = Suggestions::from_entries([Row::new("a", "one")]);
        list.reset();
        assert!(list.is_empty());
        assert_eq!(list.get("a"), None);
    }
}
