//! Personality dials that modulate how an agent uses its capabilities.
//!
//! Capabilities decide *whether* a behavior may fire; traits decide *how
//! eagerly*. Each dial is a float in `0.0..=1.0` and feeds directly into the
//! thresholds and probabilities of the decision nodes (caution shifts the
//! heal threshold, mysticism scales the oracle roll, and so on).

/// The five independent personality dials.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TraitKind {
    /// Willingness to open with capabilities and press fights.
    Aggression,
    /// Appetite for the unknown.
    Curiosity,
    /// Raises heal thresholds and enables flight at low health.
    Caution,
    /// Drives trading, upgrades and browsing.
    Resourcefulness,
    /// Scales the chance of consulting oracles.
    Mysticism,
}

/// An agent's personality, one value per [`TraitKind`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraitProfile {
    pub aggression: f32,
    pub curiosity: f32,
    pub caution: f32,
    pub resourcefulness: f32,
    pub mysticism: f32,
}

impl Default for TraitProfile {
    /// Every dial at the midpoint.
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

impl TraitProfile {
    /// Builds a validated profile.
    ///
    /// Returns [`TraitError`] for the first dial outside `0.0..=1.0`.
    pub fn new(
        aggression: f32,
        curiosity: f32,
        caution: f32,
        resourcefulness: f32,
        mysticism: f32,
    ) -> Result<Self, crate::TraitError> {
        let profile = Self {
            aggression,
            curiosity,
            caution,
            resourcefulness,
            mysticism,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Builds a profile, saturating each dial into `0.0..=1.0`.
    ///
    /// NaN becomes `0.0`.
    pub fn clamped(
        aggression: f32,
        curiosity: f32,
        caution: f32,
        resourcefulness: f32,
        mysticism: f32,
    ) -> Self {
        let clamp = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            aggression: clamp(aggression),
            curiosity: clamp(curiosity),
            caution: clamp(caution),
            resourcefulness: clamp(resourcefulness),
            mysticism: clamp(mysticism),
        }
    }

    /// Every dial set to `value` (saturated).
    pub fn uniform(value: f32) -> Self {
        Self::clamped(value, value, value, value, value)
    }

    /// Reads a single dial.
    pub fn get(&self, kind: TraitKind) -> f32 {
        match kind {
            TraitKind::Aggression => self.aggression,
            TraitKind::Curiosity => self.curiosity,
            TraitKind::Caution => self.caution,
            TraitKind::Resourcefulness => self.resourcefulness,
            TraitKind::Mysticism => self.mysticism,
        }
    }

    /// Returns a copy with one dial replaced (saturated).
    #[must_use]
    pub fn with(mut self, kind: TraitKind, value: f32) -> Self {
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        match kind {
            TraitKind::Aggression => self.aggression = value,
            TraitKind::Curiosity => self.curiosity = value,
            TraitKind::Caution => self.caution = value,
            TraitKind::Resourcefulness => self.resourcefulness = value,
            TraitKind::Mysticism => self.mysticism = value,
        }
        self
    }

    /// Checks every dial, e.g. after deserializing a hand-written file.
    pub fn validate(&self) -> Result<(), crate::TraitError> {
        use strum::IntoEnumIterator;

        for kind in TraitKind::iter() {
            let value = self.get(kind);
            if !(0.0..=1.0).contains(&value) {
                return Err(crate::TraitError { kind, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range_dial() {
        let err = TraitProfile::new(0.5, 0.5, 1.5, 0.5, 0.5).unwrap_err();
        assert_eq!(err.kind, TraitKind::Caution);
        assert_eq!(err.to_string(), "trait caution must be within 0.0..=1.0, got 1.5");
    }

    #[test]
    fn new_rejects_nan() {
        assert!(TraitProfile::new(f32::NAN, 0.5, 0.5, 0.5, 0.5).is_err());
    }

    #[test]
    fn clamped_saturates() {
        let profile = TraitProfile::clamped(-1.0, 2.0, f32::NAN, 0.25, 1.0);
        assert_eq!(profile.aggression, 0.0);
        assert_eq!(profile.curiosity, 1.0);
        assert_eq!(profile.caution, 0.0);
        assert_eq!(profile.resourcefulness, 0.25);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn with_replaces_single_dial() {
        let profile = TraitProfile::default().with(TraitKind::Mysticism, 0.9);
        assert_eq!(profile.get(TraitKind::Mysticism), 0.9);
        assert_eq!(profile.get(TraitKind::Aggression), 0.5);
    }

    #[test]
    fn trait_kind_parses_case_insensitively() {
        assert_eq!("Resourcefulness".parse::<TraitKind>(), Ok(TraitKind::Resourcefulness));
    }
}
