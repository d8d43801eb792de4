//! Skills: the special actions a player may spend charges on

pub mod ledger;

use serde::{Deserialize, Serialize};

pub use ledger::{SkillLedger, STARTING_CHARGES};

/// Kind of skill a player can activate.
///
/// Each kind says whether it needs a board target before it resolves.
/// New kinds slot in here without touching the mode state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    /// Remove one opposing stone, then take an extra turn
    RemoveStone,
    /// Take an extra turn immediately
    ExtraTurn,
}

impl SkillKind {
    pub const ALL: [SkillKind; 2] = [SkillKind::RemoveStone, SkillKind::ExtraTurn];

    /// Whether activation enters targeting mode instead of resolving at once
    #[inline]
    pub fn requires_target(self) -> bool {
        match self {
            SkillKind::RemoveStone => true,
            SkillKind::ExtraTurn => false,
        }
    }

    /// Whether resolution leaves the acting player to move again
    #[inline]
    pub fn grants_extra_turn(self) -> bool {
        match self {
            SkillKind::RemoveStone | SkillKind::ExtraTurn => true,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SkillKind::RemoveStone => "Flying Sand",
            SkillKind::ExtraTurn => "Extra Turn",
        }
    }
}

impl std::fmt::Display for SkillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
