//! Composite behavior nodes.
//!
//! Composites control how a list of children is evaluated. [`Sequence`] is a
//! short-circuiting AND used to put guards in front of an action node, and
//! [`Selector`] is a short-circuiting OR used as the priority list of a
//! decision tree.

use crate::{Behavior, Status};

/// Runs children left to right until one fails.
///
/// - A `Failure` child stops the sequence, which fails.
/// - A `Success` child lets evaluation continue.
/// - When every child succeeds the sequence succeeds.
///
/// The sequence carries a label so a gated action reports a meaningful name
/// when it fires inside a [`Selector`].
pub struct Sequence<C> {
    label: &'static str,
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// Creates a labeled sequence.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(label: &'static str, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { label, children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }

    fn name(&self) -> &'static str {
        self.label
    }
}

/// Runs children left to right until one succeeds.
///
/// Child order is the priority order: the first child that succeeds wins and
/// later children are never ticked.
pub struct Selector<C> {
    label: &'static str,
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// Creates a labeled selector.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(label: &'static str, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { label, children }
    }

    /// Ticks children in priority order and returns the name of the first one
    /// that succeeds, or `None` when every child fails.
    pub fn select(&self, ctx: &mut C) -> Option<&'static str> {
        self.children
            .iter()
            .find(|child| child.tick(ctx).is_success())
            .map(|child| child.name())
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; a selector is constructed with at least one child.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.select(ctx).is_some().into()
    }

    fn name(&self) -> &'static str {
        self.label
    }
}
