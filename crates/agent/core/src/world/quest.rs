//! Active quests.

/// Identifier of a quest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QuestId(pub u32);

/// What a quest asks for.
///
/// Declaration order is the tie-break priority when two quests are equally
/// advanced: reconnaissance first, rescue last.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum QuestKind {
    /// Survey locations.
    #[default]
    Reconnaissance,
    /// Defeat hostiles.
    Hostiles,
    /// Trade with vendors.
    Vendor,
    /// Find someone.
    Rescue,
}

impl QuestKind {
    /// Tie-break rank, lower wins.
    pub const fn priority(self) -> u8 {
        match self {
            QuestKind::Reconnaissance => 0,
            QuestKind::Hostiles => 1,
            QuestKind::Vendor => 2,
            QuestKind::Rescue => 3,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Quest {
    pub id: QuestId,
    pub kind: QuestKind,
    pub progress: u32,
    pub target: u32,
    pub complete: bool,
}

impl Quest {
    pub fn new(id: u32, kind: QuestKind, progress: u32, target: u32) -> Self {
        Self {
            id: QuestId(id),
            kind,
            progress,
            target,
            complete: false,
        }
    }

    /// `progress / target`, or `0.0` for a zero target.
    pub fn ratio(&self) -> f32 {
        if self.target == 0 {
            0.0
        } else {
            self.progress as f32 / self.target as f32
        }
    }
}
