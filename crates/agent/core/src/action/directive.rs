//! External override channel.

use super::{Action, ActionKind, Payload};

/// An action dictated by an external planner.
///
/// When present it preempts every decision node. The engine does not
/// validate it; that is the producer's responsibility.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternalDirective {
    pub kind: ActionKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub payload: Option<Payload>,
    /// Producer-defined urgency. Carried for logging only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: u8,
    /// Who issued the directive.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: String,
}

impl ExternalDirective {
    pub fn new(kind: ActionKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            payload: None,
            priority: 0,
            source: source.into(),
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// The action this directive dictates, verbatim.
    pub fn to_action(&self) -> Action {
        Action {
            kind: self.kind,
            payload: self.payload.clone(),
            reason: format!("directive from {} (priority {})", self.source, self.priority),
        }
    }
}
