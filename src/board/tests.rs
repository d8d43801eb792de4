use super::*;
use crate::error::Rejection;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::First.opponent(), Player::Second);
    assert_eq!(Player::Second.opponent(), Player::First);
}

#[test]
fn test_player_symbols() {
    assert_eq!(Player::First.symbol(), "●");
    assert_eq!(Player::Second.symbol(), "○");
    assert_eq!(Player::First.to_string(), "● Black");
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(Pos::try_new(15, 3), None);
    assert_eq!(Pos::try_new(3, 4), Some(Pos::new(3, 4)));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
    assert_eq!(Pos::all().count(), TOTAL_CELLS);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 14) < Pos::new(1, 0));
}

#[test]
fn test_place_on_occupied_fails() {
    let mut board = Board::new();
    let pos = Pos::new(3, 3);
    assert!(board.place_stone(pos, Player::First).is_ok());
    assert_eq!(
        board.place_stone(pos, Player::Second),
        Err(Rejection::CellOccupied(pos))
    );
    assert_eq!(board.get(pos), Some(Player::First));
}

#[test]
fn test_remove_is_idempotent() {
    let mut board = Board::new();
    let pos = Pos::new(0, 14);
    board.place_stone(pos, Player::Second).unwrap();
    assert_eq!(board.remove_stone(pos), Some(Player::Second));
    assert_eq!(board.remove_stone(pos), None);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for pos in Pos::all() {
        assert!(!board.is_full());
        let player = if pos.to_index() % 2 == 0 { Player::First } else { Player::Second };
        board.place_stone(pos, player).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.stone_count(), 225);
}

#[test]
fn test_grid_matches_get() {
    let mut board = Board::new();
    board.place_stone(Pos::new(2, 5), Player::First).unwrap();
    board.place_stone(Pos::new(14, 0), Player::Second).unwrap();
    let grid = board.grid();
    assert_eq!(grid[2][5], Some(Player::First));
    assert_eq!(grid[14][0], Some(Player::Second));
    assert_eq!(grid[0][0], None);
}
