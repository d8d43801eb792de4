//! Board structure: one bitboard per player

use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::Rejection;

/// Game board
///
/// A non-empty cell only changes owner through [`Board::remove_stone`];
/// [`Board::place_stone`] refuses occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// First player's stones
    first: Bitboard,
    /// Second player's stones
    second: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            first: Bitboard::new(),
            second: Bitboard::new(),
        }
    }

    /// Get occupant at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.first.get(pos) {
            Some(Player::First)
        } else if self.second.get(pos) {
            Some(Player::Second)
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.first.get(pos) && !self.second.get(pos)
    }

    /// Place a stone on an empty cell
    pub fn place_stone(&mut self, pos: Pos, player: Player) -> Result<(), Rejection> {
        if !self.is_empty(pos) {
            return Err(Rejection::CellOccupied(pos));
        }
        self.stones_mut(player).set(pos);
        Ok(())
    }

    /// Remove whatever stands on `pos`. Idempotent on empty cells.
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) -> Cell {
        let previous = self.get(pos);
        self.first.clear(pos);
        self.second.clear(pos);
        previous
    }

    /// Get bitboard for a player
    #[inline]
    pub fn stones(&self, player: Player) -> &Bitboard {
        match player {
            Player::First => &self.first,
            Player::Second => &self.second,
        }
    }

    #[inline]
    fn stones_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::First => &mut self.first,
            Player::Second => &mut self.second,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.first.count() + self.second.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }

    /// Row-major occupancy grid
    pub fn grid(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        for pos in self.first.union(&self.second).iter_ones() {
            grid[pos.row as usize][pos.col as usize] = self.get(pos);
        }
        grid
    }
}
