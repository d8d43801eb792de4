//! Full game state and the transition function

use serde::{Deserialize, Serialize};

use super::{GameEvent, GamePhase, Intent, InteractionMode, PendingEffect, Transition};
use super::{TurnController, TurnOutcome};
use crate::board::{Board, Cell, Player, Pos};
use crate::error::Rejection;
use crate::rules::find_five_line_at_pos;
use crate::skill::{SkillKind, SkillLedger};

/// Everything the engine knows about one game.
///
/// Cloning yields an independent value snapshot; it can be handed to another
/// thread or serialized without touching the live game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: TurnController,
    phase: GamePhase,
    mode: InteractionMode,
    ledger: SkillLedger,
    pending_effect: Option<PendingEffect>,
    last_move: Option<Pos>,
    move_count: u32,
    winning_line: Option<Vec<Pos>>,
}

impl GameState {
    /// Empty board, first player to move, full charges
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: TurnController::new(),
            phase: GamePhase::Playing,
            mode: InteractionMode::Normal,
            ledger: SkillLedger::new(),
            pending_effect: None,
            last_move: None,
            move_count: 0,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, pos: Pos) -> Cell {
        self.board.get(pos)
    }

    pub fn current_player(&self) -> Player {
        self.turn.current()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn charges(&self, player: Player) -> u8 {
        self.ledger.charges(player)
    }

    pub fn current_player_charges(&self) -> u8 {
        self.ledger.charges(self.turn.current())
    }

    pub fn can_use_skill(&self) -> bool {
        self.ledger.can_spend(self.turn.current())
    }

    /// Whether `ActivateSkill(kind)` would be accepted right now
    pub fn can_activate_skill(&self, kind: SkillKind) -> bool {
        self.check_activation(kind).is_ok()
    }

    pub fn has_extra_turn(&self) -> bool {
        self.turn.has_extra_turn()
    }

    pub fn pending_effect(&self) -> Option<PendingEffect> {
        self.pending_effect
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// One-line status for display
    pub fn status_line(&self) -> String {
        match (self.phase, self.mode) {
            (GamePhase::Won(winner), _) => format!("{} wins!", winner.symbol()),
            (GamePhase::Draw, _) => "Draw".to_string(),
            (GamePhase::Playing, InteractionMode::SkillTargeting(_)) => {
                "Select an opponent stone".to_string()
            }
            (GamePhase::Playing, InteractionMode::Normal) => {
                let player = self.turn.current();
                if self.turn.has_extra_turn() {
                    format!("{} to move (extra turn)", player.symbol())
                } else {
                    format!("{} to move", player.symbol())
                }
            }
        }
    }

    /// Apply an intent without mutating `self`.
    ///
    /// On rejection nothing observable has changed; the working copy is
    /// dropped.
    pub fn apply(&self, intent: Intent) -> Result<Transition, Rejection> {
        let mut next = self.clone();
        let events = match intent {
            Intent::PlaceStone { row, col } => next.place_stone(row, col)?,
            Intent::ActivateSkill(kind) => next.activate_skill(kind)?,
            Intent::ResolveTarget { row, col } => next.resolve_target(row, col)?,
            Intent::CancelSkill => next.cancel_skill()?,
            Intent::DismissEffect => next.dismiss_effect()?,
            Intent::Reset => {
                next = GameState::new();
                vec![GameEvent::GameReset]
            }
        };
        Ok(Transition {
            state: next,
            events,
        })
    }

    fn ensure_playing(&self) -> Result<(), Rejection> {
        if self.phase.is_terminal() {
            return Err(Rejection::WrongPhase(self.phase));
        }
        Ok(())
    }

    fn ensure_normal(&self) -> Result<(), Rejection> {
        if self.mode != InteractionMode::Normal {
            return Err(Rejection::WrongMode(self.mode));
        }
        Ok(())
    }

    fn place_stone(&mut self, row: i32, col: i32) -> Result<Vec<GameEvent>, Rejection> {
        self.ensure_playing()?;
        self.ensure_normal()?;
        let pos = Pos::try_new(row, col).ok_or(Rejection::OutOfBounds { row, col })?;
        let player = self.turn.current();
        self.board.place_stone(pos, player)?;

        self.pending_effect = None;
        self.last_move = Some(pos);
        self.move_count += 1;
        let mut events = vec![GameEvent::StonePlaced { player, pos }];

        // Terminal phases take priority over extra-turn bookkeeping
        if let Some(line) = find_five_line_at_pos(&self.board, pos, player) {
            self.phase = GamePhase::Won(player);
            self.winning_line = Some(line.clone());
            events.push(GameEvent::GameWon {
                winner: player,
                line,
            });
        } else if self.board.is_full() {
            self.phase = GamePhase::Draw;
            events.push(GameEvent::GameDrawn);
        } else if let TurnOutcome::Passed(to) = self.turn.complete_turn() {
            events.push(GameEvent::TurnPassed { to });
        }
        Ok(events)
    }

    fn check_activation(&self, kind: SkillKind) -> Result<(), Rejection> {
        self.ensure_playing()?;
        self.ensure_normal()?;
        let player = self.turn.current();
        if kind.grants_extra_turn() && self.turn.has_extra_turn() {
            return Err(Rejection::ExtraTurnPending(player));
        }
        if !self.ledger.can_spend(player) {
            return Err(Rejection::InsufficientCharges(player));
        }
        Ok(())
    }

    fn activate_skill(&mut self, kind: SkillKind) -> Result<Vec<GameEvent>, Rejection> {
        self.check_activation(kind)?;
        let player = self.turn.current();

        self.pending_effect = None;
        if kind.requires_target() {
            // Charge is spent on resolution, not here
            self.mode = InteractionMode::SkillTargeting(kind);
            return Ok(vec![GameEvent::SkillActivated { player, kind }]);
        }

        self.ledger.spend(player);
        let mut events = Vec::with_capacity(1);
        if kind.grants_extra_turn() {
            self.turn.grant_extra_turn();
            events.push(GameEvent::ExtraTurnGranted { player, kind });
        }
        Ok(events)
    }

    fn resolve_target(&mut self, row: i32, col: i32) -> Result<Vec<GameEvent>, Rejection> {
        self.ensure_playing()?;
        let kind = match self.mode {
            InteractionMode::SkillTargeting(kind) => kind,
            InteractionMode::Normal => return Err(Rejection::WrongMode(self.mode)),
        };
        let pos = Pos::try_new(row, col).ok_or(Rejection::OutOfBounds { row, col })?;
        let player = self.turn.current();

        let mut events = Vec::with_capacity(2);
        match kind {
            SkillKind::RemoveStone => {
                let opponent = player.opponent();
                if self.board.get(pos) != Some(opponent) {
                    return Err(Rejection::InvalidTarget(pos));
                }
                self.board.remove_stone(pos);
                events.push(GameEvent::StoneRemoved {
                    by: player,
                    owner: opponent,
                    pos,
                });
            }
            // Resolves on activation, never reaches targeting
            SkillKind::ExtraTurn => return Err(Rejection::WrongMode(self.mode)),
        }

        self.ledger.spend(player);
        if kind.grants_extra_turn() {
            self.turn.grant_extra_turn();
            events.push(GameEvent::ExtraTurnGranted { player, kind });
        }
        self.pending_effect = Some(PendingEffect { kind, target: pos });
        self.mode = InteractionMode::Normal;
        Ok(events)
    }

    fn cancel_skill(&mut self) -> Result<Vec<GameEvent>, Rejection> {
        let kind = match self.mode {
            InteractionMode::SkillTargeting(kind) => kind,
            InteractionMode::Normal => return Err(Rejection::WrongMode(self.mode)),
        };
        self.mode = InteractionMode::Normal;
        Ok(vec![GameEvent::SkillCancelled {
            player: self.turn.current(),
            kind,
        }])
    }

    fn dismiss_effect(&mut self) -> Result<Vec<GameEvent>, Rejection> {
        self.ensure_playing()?;
        Ok(match self.pending_effect.take() {
            Some(_) => vec![GameEvent::EffectDismissed],
            None => Vec::new(),
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
