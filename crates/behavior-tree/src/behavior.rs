//! Core behavior trait.
//!
//! [`Behavior`] is the abstraction every node implements. It is generic over
//! the context type `C`, which acts as the blackboard the node reads from and
//! writes its chosen action into.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node against the context.
    ///
    /// Returns `Status::Success` when the node's guard held (for conditions)
    /// or when it committed an action to the context (for action nodes).
    fn tick(&self, ctx: &mut C) -> Status;

    /// Short, stable label used when reporting which node fired.
    fn name(&self) -> &'static str {
        "anonymous"
    }
}

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }
}
