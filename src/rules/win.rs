//! Win condition checking
//!
//! Five or more stones of one player in a contiguous line wins. Overlines
//! count. Only the stone just placed can complete a new line, so every check
//! is anchored at that position instead of scanning the whole board.

use crate::board::{Board, Player, Pos, BOARD_SIZE};

/// Stones needed in a line to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i8, i8); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count `player`'s contiguous stones from `pos` (exclusive) stepping by (dr, dc).
#[inline]
fn run_length(board: &Board, pos: Pos, player: Player, dr: i8, dc: i8) -> usize {
    let sz = BOARD_SIZE as i8;
    let mut count = 0;
    let mut r = pos.row as i8 + dr;
    let mut c = pos.col as i8 + dc;
    while r >= 0 && r < sz && c >= 0 && c < sz {
        if board.get(Pos::new(r as u8, c as u8)) != Some(player) {
            break;
        }
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks 4 directions from the given position. No allocation.
/// The origin counts as `player`'s stone whether or not it is set on the board.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, player, dr, dc) + run_length(board, pos, player, -dr, -dc)
            >= WIN_LENGTH
    })
}

/// Find the full winning run through `pos`, ordered from one end to the other.
///
/// Returns `None` when no axis through `pos` reaches [`WIN_LENGTH`]. An
/// overline is returned whole.
pub fn find_five_line_at_pos(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, player, -dr, -dc);
        let forward = run_length(board, pos, player, dr, dc);
        if 1 + back + forward < WIN_LENGTH {
            continue;
        }

        let start_r = pos.row as i32 - dr as i32 * back as i32;
        let start_c = pos.col as i32 - dc as i32 * back as i32;
        let line = (0..=(back + forward) as i32)
            .map(|i| {
                Pos::new(
                    (start_r + dr as i32 * i) as u8,
                    (start_c + dc as i32 * i) as u8,
                )
            })
            .collect();
        return Some(line);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8)], player: Player) -> Board {
        let mut board = Board::new();
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), player).unwrap();
        }
        board
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(&[(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)], Player::First);
        assert!(has_five_at_pos(&board, Pos::new(7, 4), Player::First));
        assert!(has_five_at_pos(&board, Pos::new(7, 2), Player::First));
        assert!(!has_five_at_pos(&board, Pos::new(7, 4), Player::Second));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(&[(0, 9), (1, 9), (2, 9), (3, 9), (4, 9)], Player::Second);
        assert!(has_five_at_pos(&board, Pos::new(0, 9), Player::Second));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let board = board_with(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Player::First);
        assert!(has_five_at_pos(&board, Pos::new(2, 2), Player::First));
    }

    #[test]
    fn test_diagonal_sw_five() {
        // Diagonal from (4, 8) to (8, 4)
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (4 + i, 8 - i)).collect();
        let board = board_with(&stones, Player::Second);
        assert!(has_five_at_pos(&board, Pos::new(6, 6), Player::Second));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_with(&[(7, 0), (7, 1), (7, 2), (7, 3)], Player::First);
        assert!(!has_five_at_pos(&board, Pos::new(7, 3), Player::First));
    }

    #[test]
    fn test_gap_breaks_line() {
        let board = board_with(&[(7, 0), (7, 1), (7, 3), (7, 4), (7, 5)], Player::First);
        assert!(!has_five_at_pos(&board, Pos::new(7, 3), Player::First));
    }

    #[test]
    fn test_opponent_stone_breaks_line() {
        let mut board = board_with(&[(7, 0), (7, 1), (7, 3), (7, 4)], Player::First);
        board.place_stone(Pos::new(7, 2), Player::Second).unwrap();
        assert!(!has_five_at_pos(&board, Pos::new(7, 1), Player::First));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let stones: Vec<(u8, u8)> = (0..6).map(|c| (9, c)).collect();
        let board = board_with(&stones, Player::First);
        assert!(has_five_at_pos(&board, Pos::new(9, 5), Player::First));
        let line = find_five_line_at_pos(&board, Pos::new(9, 5), Player::First).unwrap();
        assert_eq!(line.len(), 6);
        assert_eq!(line[0], Pos::new(9, 0));
        assert_eq!(line[5], Pos::new(9, 5));
    }

    #[test]
    fn test_five_at_corner() {
        // Diagonal from (10, 10) to (14, 14)
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (10 + i, 10 + i)).collect();
        let board = board_with(&stones, Player::Second);
        assert!(has_five_at_pos(&board, Pos::new(14, 14), Player::Second));
    }

    #[test]
    fn test_line_is_ordered_from_anchor_in_middle() {
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (2 + i, 12 - i)).collect();
        let board = board_with(&stones, Player::First);
        let line = find_five_line_at_pos(&board, Pos::new(4, 10), Player::First).unwrap();
        assert_eq!(
            line,
            vec![
                Pos::new(2, 12),
                Pos::new(3, 11),
                Pos::new(4, 10),
                Pos::new(5, 9),
                Pos::new(6, 8)
            ]
        );
    }

    #[test]
    fn test_empty_not_five() {
        let board = Board::new();
        assert!(!has_five_at_pos(&board, Pos::new(7, 7), Player::First));
        assert!(find_five_line_at_pos(&board, Pos::new(7, 7), Player::Second).is_none());
    }
}
