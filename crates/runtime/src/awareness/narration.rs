//! Keyword reading of the narrative log.
//!
//! The structured [`ActionHistory`](agent_core::ActionHistory) is the
//! authoritative record of what the agent did. The log is only consulted for
//! signals the world does not surface structurally (combat chatter, damage
//! taken) and as a fallback history source when the structured record is
//! empty. Matching is case-insensitive substring search, so it is
//! deliberately conservative.

use agent_core::{ActionKind, LogEntry};

const COMBAT_KEYWORDS: &[&str] = &[
    "strike", "attack", "damage", "neutralized", "hits", "slash", "wound", "parry",
];

const DAMAGE_KEYWORDS: &[&str] = &[
    "you take",
    "hits you",
    "strikes you",
    "you are hit",
    "you suffer",
    "wounds you",
];

const RESPAWN_KEYWORDS: &[&str] = &[
    "respawn",
    "resurrect",
    "revived",
    "reconstitut",
    "return to life",
];

/// Ordered classification table. First match wins, so the more specific
/// phrases sit above the generic ones.
const ACTION_KEYWORDS: &[(ActionKind, &[&str])] = &[
    (ActionKind::Respawn, RESPAWN_KEYWORDS),
    (ActionKind::Harvest, &["harvest"]),
    (ActionKind::Craft, &["you craft", "crafted", "you assemble"]),
    (ActionKind::ReduceStress, &["calm", "steady your nerves"]),
    (ActionKind::Heal, &["you heal", "healed", "bandage", "you drink"]),
    (ActionKind::EquipWeapon, &["you wield", "weapon equipped"]),
    (ActionKind::EquipArmor, &["you don", "armor equipped", "you strap on"]),
    (ActionKind::CastCapability, &["you cast", "you channel", "you invoke"]),
    (ActionKind::Loot, &["you loot", "you pick up", "you collect"]),
    (ActionKind::Sell, &["you sell", "sold"]),
    (ActionKind::Buy, &["you buy", "bought", "you purchase"]),
    (ActionKind::Scan, &["you scan", "scanning", "you survey"]),
    (ActionKind::Inquire, &["you inquire", "you ask the oracle"]),
    (ActionKind::Commune, &["you commune"]),
    (ActionKind::Engage, &["you attack", "you strike", "you engage", "you swing"]),
    (ActionKind::Move, &["you move", "you travel", "you head", "you enter"]),
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_ascii_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// Last `window` entries of the log, oldest first.
pub(super) fn tail(log: &[LogEntry], window: usize) -> &[LogEntry] {
    &log[log.len().saturating_sub(window)..]
}

pub(super) fn mentions_combat(entry: &LogEntry) -> bool {
    contains_any(&entry.text, COMBAT_KEYWORDS)
}

pub(super) fn mentions_damage(entry: &LogEntry) -> bool {
    contains_any(&entry.text, DAMAGE_KEYWORDS)
}

pub(super) fn mentions_respawn(entry: &LogEntry) -> bool {
    contains_any(&entry.text, RESPAWN_KEYWORDS)
}

/// Action type a log line narrates, if it narrates one of the agent's own.
pub(super) fn classify(entry: &LogEntry) -> Option<ActionKind> {
    let lowered = entry.text.to_ascii_lowercase();
    ACTION_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(kind, _)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> LogEntry {
        LogEntry::new(0, text)
    }

    #[test]
    fn classification_prefers_specific_phrases() {
        assert_eq!(classify(&line("You respawn at the camp.")), Some(ActionKind::Respawn));
        assert_eq!(classify(&line("You scan the corridor.")), Some(ActionKind::Scan));
        assert_eq!(classify(&line("You move north.")), Some(ActionKind::Move));
        assert_eq!(classify(&line("You sell a rusty knife.")), Some(ActionKind::Sell));
        assert_eq!(classify(&line("A cold wind blows.")), None);
    }

    #[test]
    fn damage_and_combat_are_separate_signals() {
        let hit = line("The ghoul hits you for 4.");
        assert!(mentions_damage(&hit));
        assert!(mentions_combat(&hit));

        let chatter = line("Steel rings as you attack.");
        assert!(mentions_combat(&chatter));
        assert!(!mentions_damage(&chatter));
    }

    #[test]
    fn tail_clamps_to_log_length() {
        let log = vec![line("a"), line("b"), line("c")];
        assert_eq!(tail(&log, 2).len(), 2);
        assert_eq!(tail(&log, 10).len(), 3);
        assert!(tail(&[], 4).is_empty());
    }
}
