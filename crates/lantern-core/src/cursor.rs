//! Update delegation from parent state to nested child state.
//!
//! A component tree composes by threading a child's update through the
//! parent's: the parent borrows the child out of its own state, runs the
//! child's update, and relabels the child's effects into its own action
//! namespace. [`delegate`] packages that pattern so every parent doesn't
//! re-spell it.

use crate::effects::Effects;

/// Run a child update inside a parent and re-tag the child's effects.
///
/// `get` borrows the child out of the parent (serving as both accessor and
/// writeback under `&mut` semantics), `update` is the child's own update
/// function, and `tag` lifts the child's actions into the parent's.
///
/// ```
/// use lantern_core::{Effects, delegate};
///
/// struct Counter(u32);
/// struct Parent { counter: Counter }
///
/// enum CounterAction { Add(u32) }
/// enum ParentAction { Counter(CounterAction) }
///
/// fn update_counter(counter: &mut Counter, action: CounterAction) -> Effects<CounterAction> {
///     match action {
///         CounterAction::Add(n) => counter.0 += n,
///     }
///     Effects::none()
/// }
///
/// let mut parent = Parent { counter: Counter(0) };
/// let fx: Effects<ParentAction> = delegate(
///     &mut parent,
///     |parent| &mut parent.counter,
///     update_counter,
///     ParentAction::Counter,
///     CounterAction::Add(2),
/// );
/// assert!(fx.is_empty());
/// assert_eq!(parent.counter.0, 2);
/// ```
pub fn delegate<Parent, Child, ChildAction, ParentAction>(
    parent: &mut Parent,
    get: impl FnOnce(&mut Parent) -> &mut Child,
    update: impl FnOnce(&mut Child, ChildAction) -> Effects<ChildAction>,
    tag: impl Fn(ChildAction) -> ParentAction + Clone + Send + 'static,
    action: ChildAction,
) -> Effects<ParentAction>
where
    ChildAction: Send + 'static,
    ParentAction: Send + 'static,
{
    update(get(parent), action).map(tag)
}
