//! Engine tuning constants.
//!
//! Defaults reproduce the canonical decision thresholds. Deployments can
//! override individual values from a TOML file (see `agent-content`); every
//! field is optional there.

use crate::{ActionKind, ConfigError};

/// Minimum spacing, in prior actions, before an action kind may repeat.
///
/// A spacing of `n` means the kind is throttled while it appears anywhere in
/// the last `n` history entries. Kinds not listed here are unthrottled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CooldownTable {
    pub buy: usize,
    pub sell: usize,
    pub scan: usize,
    pub inquire: usize,
    pub commune: usize,
    pub loot: usize,
}

impl Default for CooldownTable {
    fn default() -> Self {
        Self {
            buy: 3,
            sell: 3,
            scan: 2,
            inquire: 5,
            commune: 5,
            loot: 1,
        }
    }
}

impl CooldownTable {
    /// Spacing for `kind`; 0 means unthrottled.
    pub const fn spacing(&self, kind: ActionKind) -> usize {
        match kind {
            ActionKind::Buy => self.buy,
            ActionKind::Sell => self.sell,
            ActionKind::Scan => self.scan,
            ActionKind::Inquire => self.inquire,
            ActionKind::Commune => self.commune,
            ActionKind::Loot => self.loot,
            _ => 0,
        }
    }
}

/// Tunable parameters of the decision engine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    // ===== history reconstruction =====
    /// Log lines scanned when classifying past actions from narration.
    pub log_scan_window: usize,
    /// Log lines scanned for combat and damage keywords.
    pub combat_log_window: usize,
    /// Log lines scanned for resurrection keywords.
    pub respawn_log_window: usize,

    // ===== survival =====
    /// Health ratio below which exits are filtered for safety.
    pub compromised_hp_ratio: f32,

    // ===== throttling =====
    pub cooldowns: CooldownTable,
    /// Identical consecutive actions that count as a loop.
    pub loop_max_repeats: usize,

    // ===== stochastic nodes =====
    /// Rival score a target must exceed before the rival node overrides combat.
    pub rival_threshold: f32,
    /// Chance to open with a capability when aggressive enough.
    pub cast_chance: f32,
    /// Oracle consultation chance per point of mysticism.
    pub inquiry_factor: f32,
    /// Browsing chance per point of resourcefulness.
    pub browse_factor: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_scan_window: 20,
            combat_log_window: 8,
            respawn_log_window: 3,
            compromised_hp_ratio: 0.5,
            cooldowns: CooldownTable::default(),
            loop_max_repeats: 3,
            rival_threshold: 20.0,
            cast_chance: 0.6,
            inquiry_factor: 0.28,
            browse_factor: 0.3,
        }
    }
}

impl EngineConfig {
    /// Rejects values that would disable or break a node outright.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("log_scan_window", self.log_scan_window),
            ("combat_log_window", self.combat_log_window),
            ("respawn_log_window", self.respawn_log_window),
            ("loop_max_repeats", self.loop_max_repeats),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroWindow { field });
            }
        }

        for (field, value) in [
            ("cast_chance", self.cast_chance),
            ("inquiry_factor", self.inquiry_factor),
            ("browse_factor", self.browse_factor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.compromised_hp_ratio) {
            return Err(ConfigError::InvalidRatio {
                field: "compromised_hp_ratio",
                value: self.compromised_hp_ratio,
            });
        }

        if self.rival_threshold.is_nan() || self.rival_threshold < 0.0 {
            return Err(ConfigError::NegativeThreshold(self.rival_threshold));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn spacing_defaults() {
        let table = CooldownTable::default();
        assert_eq!(table.spacing(ActionKind::Buy), 3);
        assert_eq!(table.spacing(ActionKind::Commune), 5);
        assert_eq!(table.spacing(ActionKind::Move), 0);
        assert_eq!(table.spacing(ActionKind::Engage), 0);
    }

    #[test]
    fn validate_rejects_zero_loop_window() {
        let config = EngineConfig {
            loop_max_repeats: 0,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroWindow {
                field: "loop_max_repeats"
            })
        );
    }

    #[test]
    fn validate_rejects_probability_above_one() {
        let config = EngineConfig {
            cast_chance: 1.2,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProbability {
                field: "cast_chance",
                ..
            })
        ));
    }
}
