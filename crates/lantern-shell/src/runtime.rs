//! Bridge from effect batches to the iced runtime.

use iced::Task;
use lantern_core::{Effect, Effects};

/// Turn an effect batch into an iced task, re-tagging the produced actions
/// into the root message type.
pub fn task<A, M>(effects: Effects<A>, tag: impl Fn(A) -> M + Clone + Send + 'static) -> Task<M>
where
    A: Send + 'static,
    M: Send + 'static,
{
    Task::batch(effects.into_iter().map(|effect| match effect {
        Effect::Receive(action) => Task::done(tag(action)),
        Effect::Perform(future) => {
            let tag = tag.clone();
            Task::future(future).map(move |action| tag(action))
        }
    }))
}
