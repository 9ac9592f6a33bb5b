//! Target scoring for rival agents.
//!
//! Rivals compete with the player for kills. They prefer wounded prey and
//! boss-class hostiles, discounted by distance.

use crate::awareness::HostileView;

/// Tag fragments marking a high-value target.
const HIGH_VALUE_FRAGMENTS: &[&str] = &[
    "boss", "lord", "king", "queen", "alpha", "elder", "ancient", "warden", "overseer",
];

const WOUNDED_RATIO: f32 = 0.3;
const WOUNDED_BONUS: f32 = 50.0;
const HIGH_VALUE_BONUS: f32 = 100.0;
const DISTANCE_PENALTY: f32 = 0.5;

fn is_high_value(tag: &str) -> bool {
    let lowered = tag.to_ascii_lowercase();
    HIGH_VALUE_FRAGMENTS.iter().any(|fragment| lowered.contains(fragment))
}

/// Attractiveness of `target`. Never negative.
///
/// `distance_hint` is the separation in location-local units.
pub fn score_target(target: &HostileView, distance_hint: f32) -> f32 {
    let mut score = 0.0;
    if target.hp_ratio() < WOUNDED_RATIO {
        score += WOUNDED_BONUS;
    }
    if is_high_value(&target.tag) {
        score += HIGH_VALUE_BONUS;
    }
    score -= DISTANCE_PENALTY * distance_hint.max(0.0);
    score.max(0.0)
}

/// Highest-scoring live hostile. Earlier hostiles win ties.
pub fn best_target(hostiles: &[HostileView]) -> Option<(&HostileView, f32)> {
    hostiles
        .iter()
        .filter(|hostile| hostile.hp > 0)
        .map(|hostile| (hostile, score_target(hostile, hostile.distance as f32)))
        .fold(None, |best, (hostile, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((hostile, score)),
        })
}

#[cfg(test)]
mod tests {
    use agent_core::EntityId;

    use super::*;

    fn hostile(id: u32, tag: &str, hp: i32, distance: u32) -> HostileView {
        HostileView {
            id: EntityId(id),
            tag: tag.to_owned(),
            hp,
            max_hp: 100,
            distance,
        }
    }

    #[test]
    fn wounded_boss_stacks_bonuses() {
        assert_eq!(score_target(&hostile(1, "Bone Lord", 10, 0), 0.0), 150.0);
        assert_eq!(score_target(&hostile(1, "ghoul", 25, 0), 0.0), 50.0);
        assert_eq!(score_target(&hostile(1, "ghoul", 80, 0), 0.0), 0.0);
    }

    #[test]
    fn distance_discounts_but_never_below_zero() {
        assert_eq!(score_target(&hostile(1, "ghoul", 25, 0), 10.0), 45.0);
        assert_eq!(score_target(&hostile(1, "ghoul", 25, 0), 500.0), 0.0);
    }

    #[test]
    fn best_target_skips_dead_and_keeps_first_on_ties() {
        let hostiles = vec![
            hostile(1, "alpha wolf", 0, 0),
            hostile(2, "ghoul", 20, 0),
            hostile(3, "rat", 20, 0),
        ];
        let (target, score) = best_target(&hostiles).map(|(h, s)| (h.id, s)).unwrap_or_default();
        assert_eq!(target, EntityId(2));
        assert_eq!(score, 50.0);
        assert!(best_target(&[]).is_none());
    }
}
