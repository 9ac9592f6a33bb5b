//! Error types for constructing agent definitions and engine configuration.
//!
//! The decision engine itself never fails; these errors only surface while
//! building inputs (trait dials, preset lookups, tuning files).

use crate::traits::TraitKind;

/// A trait dial was outside `0.0..=1.0` (or not a number).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("trait {kind} must be within 0.0..=1.0, got {value}")]
pub struct TraitError {
    pub kind: TraitKind,
    pub value: f32,
}

/// A preset name did not match any known preset.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset `{name}` (expected one of: {expected})")]
pub struct PresetError {
    pub name: String,
    pub expected: &'static str,
}

/// Engine tuning values that would make the decision tree misbehave.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be at least 1")]
    ZeroWindow { field: &'static str },

    #[error("{field} must be a probability within 0.0..=1.0, got {value}")]
    InvalidProbability { field: &'static str, value: f32 },

    #[error("{field} must be a ratio within 0.0..=1.0, got {value}")]
    InvalidRatio { field: &'static str, value: f32 },

    #[error("rival threshold must be non-negative, got {0}")]
    NegativeThreshold(f32),
}
