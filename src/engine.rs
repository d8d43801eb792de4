//! Game engine: the owner of the live game
//!
//! The engine holds one [`GameState`] and replaces it only when an intent
//! succeeds, so every operation is all-or-nothing. Operations are
//! synchronous; there are no timers or background work. The presentation
//! layer calls in with intents, reads [`GameEngine::snapshot`] (or the
//! returned events) and schedules its own effects.
//!
//! # Example
//!
//! ```
//! use skill_gomoku::{GameEngine, GameEvent, Player, SkillKind};
//!
//! let mut engine = GameEngine::new();
//! engine.place_stone(7, 7).unwrap();
//! engine.place_stone(7, 8).unwrap();
//!
//! // First removes Second's stone and keeps the move
//! engine.activate_skill(SkillKind::RemoveStone).unwrap();
//! let events = engine.resolve_skill_target(7, 8).unwrap();
//! assert!(matches!(events[0], GameEvent::StoneRemoved { .. }));
//! assert_eq!(engine.snapshot().current_player(), Player::First);
//! ```

use tracing::{debug, info, instrument};

use crate::error::Rejection;
use crate::game::{GameEvent, GameState, Intent, InteractionMode, Transition};
use crate::skill::SkillKind;

/// Mutable front for [`GameState`] transitions.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Borrow the current state
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Independent value copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Place the current player's stone. Only accepted in normal mode.
    pub fn place_stone(&mut self, row: i32, col: i32) -> Result<Vec<GameEvent>, Rejection> {
        self.dispatch(Intent::PlaceStone { row, col })
    }

    /// Activate a skill for the current player.
    ///
    /// Targeting skills switch to targeting mode and spend their charge on
    /// resolution; the rest resolve here.
    pub fn activate_skill(&mut self, kind: SkillKind) -> Result<Vec<GameEvent>, Rejection> {
        self.dispatch(Intent::ActivateSkill(kind))
    }

    pub fn resolve_skill_target(&mut self, row: i32, col: i32) -> Result<Vec<GameEvent>, Rejection> {
        self.dispatch(Intent::ResolveTarget { row, col })
    }

    pub fn cancel_skill(&mut self) -> Result<Vec<GameEvent>, Rejection> {
        self.dispatch(Intent::CancelSkill)
    }

    /// Clear the advisory effect once the collaborator has shown it
    pub fn dismiss_effect(&mut self) -> Result<Vec<GameEvent>, Rejection> {
        self.dispatch(Intent::DismissEffect)
    }

    pub fn reset(&mut self) -> Result<Vec<GameEvent>, Rejection> {
        self.dispatch(Intent::Reset)
    }

    /// Board click: place in normal mode, pick a target while targeting
    pub fn select_cell(&mut self, row: i32, col: i32) -> Result<Vec<GameEvent>, Rejection> {
        match self.state.mode() {
            InteractionMode::Normal => self.place_stone(row, col),
            InteractionMode::SkillTargeting(_) => self.resolve_skill_target(row, col),
        }
    }

    /// Apply any intent
    #[instrument(skip(self), level = "debug")]
    pub fn dispatch(&mut self, intent: Intent) -> Result<Vec<GameEvent>, Rejection> {
        match self.state.apply(intent) {
            Ok(Transition { state, events }) => {
                self.state = state;
                for event in &events {
                    log_event(event);
                }
                Ok(events)
            }
            Err(rejection) => {
                debug!(%rejection, "intent rejected");
                Err(rejection)
            }
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::GameWon { winner, line } => {
            info!(%winner, length = line.len(), "game won")
        }
        GameEvent::GameDrawn => info!("game drawn"),
        GameEvent::GameReset => info!("game reset"),
        other => debug!(event = ?other, "applied"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Player, Pos};
    use crate::game::GamePhase;
    use crate::skill::STARTING_CHARGES;
    use proptest::prelude::*;

    #[test]
    fn test_rejection_leaves_state_unchanged() {
        let mut engine = GameEngine::new();
        engine.place_stone(7, 7).unwrap();
        let before = engine.snapshot();

        assert_eq!(
            engine.place_stone(7, 7),
            Err(Rejection::CellOccupied(Pos::new(7, 7)))
        );
        assert_eq!(
            engine.place_stone(-3, 2),
            Err(Rejection::OutOfBounds { row: -3, col: 2 })
        );
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_select_cell_routes_by_mode() {
        let mut engine = GameEngine::new();
        engine.select_cell(7, 7).unwrap();
        engine.select_cell(6, 6).unwrap();
        engine.activate_skill(SkillKind::RemoveStone).unwrap();

        // Own stone is not a target
        assert_eq!(
            engine.select_cell(7, 7),
            Err(Rejection::InvalidTarget(Pos::new(7, 7)))
        );
        let events = engine.select_cell(6, 6).unwrap();
        assert_eq!(
            events[0],
            GameEvent::StoneRemoved {
                by: Player::First,
                owner: Player::Second,
                pos: Pos::new(6, 6)
            }
        );
        assert_eq!(engine.state().mode(), InteractionMode::Normal);
        assert_eq!(engine.state().cell(Pos::new(6, 6)), None);
    }

    #[test]
    fn test_snapshot_is_a_value_copy() {
        let mut engine = GameEngine::new();
        let snapshot = engine.snapshot();
        engine.place_stone(0, 0).unwrap();
        assert!(snapshot.board().is_board_empty());
        assert_eq!(engine.state().move_count(), 1);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut engine = GameEngine::new();
        engine.place_stone(1, 1).unwrap();
        engine.place_stone(2, 2).unwrap();
        engine.activate_skill(SkillKind::RemoveStone).unwrap();
        assert_eq!(engine.reset(), Ok(vec![GameEvent::GameReset]));
        assert_eq!(engine.snapshot(), GameState::new());
    }

    #[test]
    fn test_two_player_skill_exchange() {
        let mut engine = GameEngine::new();
        engine.place_stone(7, 7).unwrap(); // First
        engine.place_stone(7, 8).unwrap(); // Second
        engine.activate_skill(SkillKind::ExtraTurn).unwrap();
        engine.place_stone(8, 8).unwrap(); // First, keeps move
        engine.place_stone(9, 9).unwrap(); // First, passes
        assert_eq!(engine.state().current_player(), Player::Second);

        engine.activate_skill(SkillKind::RemoveStone).unwrap();
        engine.resolve_skill_target(9, 9).unwrap();
        assert_eq!(engine.state().charges(Player::First), 1);
        assert_eq!(engine.state().charges(Player::Second), 1);
        assert_eq!(engine.state().current_player(), Player::Second);
        assert!(engine.state().pending_effect().is_some());
        engine.dismiss_effect().unwrap();
        assert!(engine.state().pending_effect().is_none());
    }

    fn arb_intent() -> impl Strategy<Value = Intent> {
        let coord = -1i32..16;
        prop_oneof![
            4 => (coord.clone(), coord.clone()).prop_map(|(row, col)| Intent::PlaceStone { row, col }),
            1 => Just(Intent::ActivateSkill(SkillKind::RemoveStone)),
            1 => Just(Intent::ActivateSkill(SkillKind::ExtraTurn)),
            2 => (coord.clone(), coord).prop_map(|(row, col)| Intent::ResolveTarget { row, col }),
            1 => Just(Intent::CancelSkill),
            1 => Just(Intent::DismissEffect),
        ]
    }

    proptest! {
        #[test]
        fn prop_intents_preserve_invariants(intents in proptest::collection::vec(arb_intent(), 0..200)) {
            let mut engine = GameEngine::new();
            for intent in intents {
                let before = engine.snapshot();
                let result = engine.dispatch(intent);
                let after = engine.state();

                // Nothing but reset gets through once the game is over
                if before.phase().is_terminal() {
                    prop_assert_eq!(result, Err(Rejection::WrongPhase(before.phase())));
                    prop_assert_eq!(&before, after);
                    continue;
                }
                if result.is_err() {
                    prop_assert_eq!(&before, after);
                    continue;
                }

                for player in Player::ALL {
                    prop_assert!(after.charges(player) <= STARTING_CHARGES);
                    prop_assert!(after.charges(player) <= before.charges(player));
                }

                let removed = matches!(intent, Intent::ResolveTarget { .. });
                for pos in Pos::all() {
                    match (before.cell(pos), after.cell(pos)) {
                        (Some(owner), None) => {
                            prop_assert!(removed && owner != before.current_player());
                        }
                        (Some(a), Some(b)) => {
                            prop_assert_eq!(a, b);
                        }
                        _ => {}
                    }
                }

                if after.phase() == GamePhase::Playing {
                    prop_assert!(after.winning_line().is_none());
                }
            }
        }
    }
}
