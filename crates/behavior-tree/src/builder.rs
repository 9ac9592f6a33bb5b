//! Builder helpers for assembling trees without `Box::new` noise.

use crate::{Behavior, Inverter, Selector, Sequence};

/// Shorthand for `Box::new(Sequence::new(label, children))`.
#[inline]
pub fn sequence<C: 'static>(
    label: &'static str,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(label, children))
}

/// Shorthand for `Box::new(Selector::new(label, children))`.
#[inline]
pub fn selector<C: 'static>(
    label: &'static str,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(label, children))
}

/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Boxes a concrete node.
#[inline]
pub fn node<C, B: Behavior<C> + 'static>(behavior: B) -> Box<dyn Behavior<C>> {
    Box::new(behavior)
}
