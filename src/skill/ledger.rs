//! Per-player skill charges

use serde::{Deserialize, Serialize};

use crate::board::Player;

/// Charges each player starts a game with
pub const STARTING_CHARGES: u8 = 2;

/// Remaining skill charges for both players.
///
/// Spending is saturating: the ledger never goes negative and never errors.
/// Refusing a skill at zero charges is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLedger {
    charges: [u8; 2],
}

impl SkillLedger {
    pub fn new() -> Self {
        Self {
            charges: [STARTING_CHARGES; 2],
        }
    }

    #[inline]
    pub fn charges(&self, player: Player) -> u8 {
        self.charges[player.index()]
    }

    #[inline]
    pub fn can_spend(&self, player: Player) -> bool {
        self.charges(player) > 0
    }

    /// Spend one charge, floored at zero
    #[inline]
    pub fn spend(&mut self, player: Player) {
        let slot = &mut self.charges[player.index()];
        *slot = slot.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for SkillLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starting_allowance() {
        let ledger = SkillLedger::new();
        assert_eq!(ledger.charges(Player::First), 2);
        assert_eq!(ledger.charges(Player::Second), 2);
    }

    #[test]
    fn test_spend_is_per_player_and_floored() {
        let mut ledger = SkillLedger::new();
        ledger.spend(Player::First);
        assert_eq!(ledger.charges(Player::First), 1);
        assert_eq!(ledger.charges(Player::Second), 2);

        ledger.spend(Player::First);
        ledger.spend(Player::First);
        assert_eq!(ledger.charges(Player::First), 0);
        assert!(!ledger.can_spend(Player::First));
    }

    #[test]
    fn test_reset_restores_both() {
        let mut ledger = SkillLedger::new();
        ledger.spend(Player::First);
        ledger.spend(Player::Second);
        ledger.spend(Player::Second);
        ledger.reset();
        assert_eq!(ledger, SkillLedger::new());
    }

    proptest! {
        #[test]
        fn prop_never_negative(spends in proptest::collection::vec(any::<bool>(), 0..32)) {
            let mut ledger = SkillLedger::new();
            let mut expected = [STARTING_CHARGES as i32; 2];
            for first in spends {
                let player = if first { Player::First } else { Player::Second };
                ledger.spend(player);
                expected[player.index()] = (expected[player.index()] - 1).max(0);
            }
            for player in Player::ALL {
                prop_assert_eq!(ledger.charges(player) as i32, expected[player.index()]);
                prop_assert!(ledger.charges(player) <= STARTING_CHARGES);
            }
        }
    }
}
