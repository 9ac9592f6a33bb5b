//! Minimal behavior tree primitives for single-tick agent decisions.
//!
//! Every tick completes immediately: nodes either succeed or fail, there is
//! no `Running` state and no per-node memory between ticks. A tree is a
//! priority list ([`Selector`]) of guarded action nodes ([`Sequence`] of
//! conditions followed by an action), and the selector reports the name of
//! the node that fired so callers can trace decisions.
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`]
//! - [`builder`]: boxing helpers

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use status::Status;
