//! Move engine: sliding and merging tiles.
//!
//! Every direction is reduced to the canonical LEFT slide through two
//! structural transforms:
//!
//! | direction | transform                                  |
//! |-----------|--------------------------------------------|
//! | Left      | slide each row                             |
//! | Right     | reverse rows, slide, reverse back          |
//! | Up        | transpose, slide Left, transpose back      |
//! | Down      | transpose, slide Right, transpose back     |
//!
//! The engine is pure: the input board is never modified and the same input
//! always gives the same outcome.

use crate::board::{Board, Score, Tile, EMPTY};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of travel for a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Result of applying a move to a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Board after sliding and merging (no tile spawned yet)
    pub board: Board,
    /// Sum of the values created by merges
    pub score_delta: Score,
    /// Whether any cell differs from the input board
    pub changed: bool,
}

/// Slide one row towards index 0, merging equal neighbours.
///
/// Empty cells are dropped, then the compressed values are scanned left to
/// right; an equal pair becomes one doubled tile and the scan skips past both,
/// so a merged tile never merges again in the same pass. The result is padded
/// with empty cells back to the input length.
///
/// ```
/// use twenty48_core::slide_row;
///
/// assert_eq!(slide_row(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
/// ```
pub fn slide_row(row: &[Tile]) -> (Vec<Tile>, Score) {
    let compressed: Vec<Tile> = row.iter().copied().filter(|&v| v != EMPTY).collect();

    let mut merged = Vec::with_capacity(row.len());
    let mut score: Score = 0;
    let mut i = 0;
    while i < compressed.len() {
        let current = compressed[i];
        let doubled = compressed
            .get(i + 1)
            .filter(|&&next| next == current)
            .and_then(|_| current.checked_mul(2));

        match doubled {
            Some(value) => {
                merged.push(value);
                score = score.saturating_add(value);
                i += 2;
            }
            // No partner, or the tile is already at the integer ceiling
            None => {
                merged.push(current);
                i += 1;
            }
        }
    }

    merged.resize(row.len(), EMPTY);
    (merged, score)
}

/// Apply a move to a board.
///
/// Never fails: a move that cannot shift anything comes back with
/// `changed == false` and an identical board.
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    let (moved, score_delta) = shift(board, direction);
    let changed = moved != *board;
    MoveOutcome {
        board: moved,
        score_delta,
        changed,
    }
}

fn shift(board: &Board, direction: Direction) -> (Board, Score) {
    match direction {
        Direction::Left => slide_rows(board),
        Direction::Right => {
            let (moved, score) = slide_rows(&board.reverse_rows());
            (moved.reverse_rows(), score)
        }
        Direction::Up => {
            let (moved, score) = shift(&board.transpose(), Direction::Left);
            (moved.transpose(), score)
        }
        Direction::Down => {
            let (moved, score) = shift(&board.transpose(), Direction::Right);
            (moved.transpose(), score)
        }
    }
}

fn slide_rows(board: &Board) -> (Board, Score) {
    let mut total: Score = 0;
    let rows = board
        .rows()
        .iter()
        .map(|row| {
            let (slid, score) = slide_row(row);
            total = total.saturating_add(score);
            slid
        })
        .collect();
    (Board::from_rows_unchecked(rows), total)
}
