//! Effect batches returned by update operations.
//!
//! An update never performs asynchronous work itself. It returns a batch of
//! effect descriptions that the host runtime executes; the eventual results
//! re-enter the system as ordinary dispatched actions. Within one batch the
//! construction order is preserved.

use std::fmt;
use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;

/// A single effect description.
pub enum Effect<A> {
    /// Deliver an action straight back on the next dispatch.
    Receive(A),
    /// Asynchronous work whose result re-enters as an action.
    Perform(BoxFuture<'static, A>),
}

impl<A: Send + 'static> Effect<A> {
    /// Relabel the action this effect will produce.
    pub fn map<B, F>(self, f: F) -> Effect<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        match self {
            Effect::Receive(action) => Effect::Receive(f(action)),
            Effect::Perform(future) => Effect::Perform(future.map(f).boxed()),
        }
    }
}

impl<A> fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Receive(_) => f.write_str("Effect::Receive"),
            Effect::Perform(_) => f.write_str("Effect::Perform"),
        }
    }
}

/// An ordered batch of effect descriptions.
///
/// Batches form a monoid: [`Effects::none`] is the identity and
/// [`Effects::batch`] / [`Effects::append`] concatenate while preserving
/// order. [`Effects::map`] relabels every produced action, which is how a
/// parent component re-tags a child's effects into its own action namespace.
pub struct Effects<A> {
    effects: Vec<Effect<A>>,
}

impl<A: Send + 'static> Effects<A> {
    /// The empty batch.
    pub fn none() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// A batch that feeds `action` back into the next dispatch.
    pub fn receive(action: A) -> Self {
        Self {
            effects: vec![Effect::Receive(action)],
        }
    }

    /// A batch holding one asynchronous work description.
    pub fn perform<F>(future: F) -> Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        Self {
            effects: vec![Effect::Perform(future.boxed())],
        }
    }

    /// Concatenate several batches in order.
    pub fn batch(batches: impl IntoIterator<Item = Effects<A>>) -> Self {
        let mut effects = Vec::new();
        for batch in batches {
            effects.extend(batch.effects);
        }
        Self { effects }
    }

    /// Append another batch after this one.
    pub fn append(&mut self, other: Effects<A>) {
        self.effects.extend(other.effects);
    }

    /// Relabel every action this batch will produce.
    pub fn map<B, F>(self, f: F) -> Effects<B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Clone + Send + 'static,
    {
        Effects {
            effects: self
                .effects
                .into_iter()
                .map(|effect| effect.map(f.clone()))
                .collect(),
        }
    }

    /// Whether the batch holds no effects.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Number of effects in the batch.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Iterate over the effect descriptions in order.
    pub fn iter(&self) -> impl Iterator<Item = &Effect<A>> {
        self.effects.iter()
    }
}

impl<A: Send + 'static> Default for Effects<A> {
    fn default() -> Self {
        Self::none()
    }
}

impl<A> IntoIterator for Effects<A> {
    type Item = Effect<A>;
    type IntoIter = std::vec::IntoIter<Effect<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}

impl<A> fmt::Debug for Effects<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Effects").field(&self.effects).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn received(effects: &Effects<u32>) -> Vec<u32> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Receive(action) => Some(*action),
                Effect::Perform(_) => None,
            })
            .collect()
    }

    #[test]
    fn batch_preserves_construction_order() {
        let batch = Effects::batch([
            Effects::receive(1),
            Effects::none(),
            Effects::batch([Effects::receive(2), Effects::receive(3)]),
        ]);
        assert_eq!(received(&batch), vec![1, 2, 3]);
    }

    #[test]
    fn map_relabels_every_action() {
        let batch = Effects::batch([Effects::receive(1u32), Effects::receive(2)]).map(|n| n * 10);
        assert_eq!(received(&batch), vec![10, 20]);
    }

    #[test]
    fn none_is_empty() {
        let batch: Effects<u32> = Effects::none();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
    }
}
