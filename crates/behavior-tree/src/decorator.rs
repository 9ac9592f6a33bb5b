//! Decorator behavior nodes.

use crate::{Behavior, Status};

/// Inverts the result of its child (logical NOT).
///
/// Mostly used to negate a condition in front of an action, e.g. "scan is
/// not on cooldown".
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    /// Wraps `child`.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }

    fn name(&self) -> &'static str {
        self.child.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IsPositive;
    impl Behavior<i32> for IsPositive {
        fn tick(&self, ctx: &mut i32) -> Status {
            (*ctx > 0).into()
        }

        fn name(&self) -> &'static str {
            "is_positive"
        }
    }

    #[test]
    fn inverter_negates_child() {
        let inverter = Inverter::new(Box::new(IsPositive));

        assert_eq!(inverter.tick(&mut 10), Status::Failure);
        assert_eq!(inverter.tick(&mut -10), Status::Success);
    }

    #[test]
    fn inverter_keeps_child_name() {
        let inverter = Inverter::new(Box::new(IsPositive));
        assert_eq!(inverter.name(), "is_positive");
    }
}
