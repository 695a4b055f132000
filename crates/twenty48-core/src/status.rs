//! Terminal-state detection.

use crate::board::{Board, Tile, EMPTY};
use serde::{Deserialize, Serialize};

/// Tile value that wins a standard game
pub const DEFAULT_WIN_TILE: Tile = 2048;

/// Classification of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and the win tile has not been reached
    Playing,
    /// The win tile is on the board
    Won,
    /// No empty cell and no adjacent equal pair
    Lost,
}

/// Whether any cell holds the win tile
pub fn has_won(board: &Board, win_tile: Tile) -> bool {
    board.contains(win_tile)
}

/// Whether at least one direction would change the board
pub fn can_move(board: &Board) -> bool {
    let rows = board.rows();
    let size = board.size();

    if rows.iter().flatten().any(|&v| v == EMPTY) {
        return true;
    }

    let horizontal = rows
        .iter()
        .any(|row| row.windows(2).any(|pair| pair[0] == pair[1]));
    if horizontal {
        return true;
    }

    (0..size.saturating_sub(1)).any(|r| (0..size).any(|c| rows[r][c] == rows[r + 1][c]))
}

/// Classify a board. A winning tile takes precedence over a stuck board.
pub fn status(board: &Board, win_tile: Tile) -> GameStatus {
    if has_won(board, win_tile) {
        GameStatus::Won
    } else if !can_move(board) {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}
