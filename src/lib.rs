//! Skill Gomoku engine
//!
//! Five-in-a-row on a 15x15 board where each player also holds two skill
//! charges:
//! - **Flying Sand** ([`SkillKind::RemoveStone`]): remove one opponent stone, then move again
//! - **Extra Turn** ([`SkillKind::ExtraTurn`]): move twice in a row
//!
//! Five or more in a line wins; a full board without a line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Bitboard-backed board, players and positions
//! - [`rules`]: Win detection anchored at the last placed stone
//! - [`skill`]: Skill kinds and the per-player charge ledger
//! - [`game`]: State machine: phase, interaction mode, turns, intents and events
//! - [`engine`]: [`GameEngine`], the mutable owner that commits transitions
//! - [`ui`]: egui front-end that renders snapshots and sends intents
//!
//! # Quick Start
//!
//! ```
//! use skill_gomoku::{GameEngine, GamePhase, Player, Rejection, SkillKind};
//!
//! let mut engine = GameEngine::new();
//! engine.place_stone(7, 7).unwrap();
//!
//! // Occupied cells are rejected and nothing changes
//! assert!(matches!(engine.place_stone(7, 7), Err(Rejection::CellOccupied(_))));
//!
//! // Second spends a charge to move twice
//! engine.activate_skill(SkillKind::ExtraTurn).unwrap();
//! engine.place_stone(0, 0).unwrap();
//! assert_eq!(engine.state().current_player(), Player::Second);
//! assert_eq!(engine.state().phase(), GamePhase::Playing);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod skill;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use engine::GameEngine;
pub use error::Rejection;
pub use game::{GameEvent, GamePhase, GameState, Intent, InteractionMode, PendingEffect};
pub use skill::{SkillKind, SkillLedger};
