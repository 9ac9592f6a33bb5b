//! Throttling of repeated actions.
//!
//! Both checks read only [`Awareness::history`], so they work the same
//! whether history came from the structured record or the log.

use agent_core::{ActionKind, CooldownTable};

use crate::awareness::Awareness;

/// True when `kind` occurs among the last `spacing(kind)` history entries.
///
/// Kinds with a spacing of zero are never on cooldown.
pub fn is_on_cooldown(kind: ActionKind, awareness: &Awareness, cooldowns: &CooldownTable) -> bool {
    let spacing = cooldowns.spacing(kind);
    spacing > 0
        && awareness
            .history
            .iter()
            .rev()
            .take(spacing)
            .any(|recent| *recent == kind)
}

/// True when the last `max_repeats` history entries are all `kind`.
pub fn is_looping(kind: ActionKind, awareness: &Awareness, max_repeats: usize) -> bool {
    max_repeats > 0
        && awareness.history.len() >= max_repeats
        && awareness
            .history
            .iter()
            .rev()
            .take(max_repeats)
            .all(|recent| *recent == kind)
}
