//! Board representation for the sliding-tile puzzle.
//!
//! This module contains:
//! - Tile and score types
//! - The validated square grid (`Board`)
//! - Structural transforms (transpose, row reversal) used by the move engine
//! - Read-only queries (empty cells, max tile, tile sum)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value held by a single cell. `EMPTY` (0) marks an empty cell, anything
/// else is a power of two >= 2.
pub type Tile = u64;

/// Points awarded by merges
pub type Score = u64;

/// The empty cell value
pub const EMPTY: Tile = 0;

/// Errors raised when a board is built from malformed input
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("Board size must be at least 1, got {0}")]
    InvalidSize(usize),

    #[error("Row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Cell ({row}, {col}) holds {value}, which is not a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: Tile },
}

/// Check whether a value may sit in a non-empty cell
pub fn is_valid_tile(value: Tile) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// An N x N grid of tiles, stored row-major.
///
/// A `Board` is never mutated by the engine: every transform returns a fresh
/// value, so a caller holding an old board can compare it against the new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Board {
    rows: Vec<Vec<Tile>>,
}

impl Board {
    /// Create an all-empty board of the given size
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            rows: vec![vec![EMPTY; size]; size],
        })
    }

    /// Build a board from explicit rows, rejecting anything that is not a
    /// square grid of empty cells and powers of two.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }

        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(BoardError::NotSquare {
                    row: r,
                    expected: size,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value != EMPTY && !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile {
                        row: r,
                        col: c,
                        value,
                    });
                }
            }
        }

        Ok(Self { rows })
    }

    /// Wrap rows that are already known to be well-formed
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<Tile>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));
        Self { rows }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Borrow the rows, top to bottom
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// Get a cell value, `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Return a copy of this board with one cell replaced
    pub(crate) fn with_tile(&self, row: usize, col: usize, value: Tile) -> Self {
        let mut rows = self.rows.clone();
        rows[row][col] = value;
        Self { rows }
    }

    /// Swap rows and columns. Applying it twice yields the original board.
    pub fn transpose(&self) -> Self {
        let size = self.size();
        let rows = (0..size)
            .map(|c| (0..size).map(|r| self.rows[r][c]).collect())
            .collect();
        Self { rows }
    }

    /// Mirror every row left-to-right
    pub fn reverse_rows(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        Self { rows }
    }

    /// Coordinates of every empty cell in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &value)| value == EMPTY)
                    .map(move |(c, _)| (r, c))
            })
            .collect()
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells().filter(|&value| value == EMPTY).count()
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> Tile {
        self.cells().max().unwrap_or(EMPTY)
    }

    /// Sum of every tile value, widened so ceiling tiles cannot overflow
    pub fn tile_sum(&self) -> u128 {
        self.cells().map(u128::from).sum()
    }

    /// Whether any cell holds exactly `value`
    pub fn contains(&self, value: Tile) -> bool {
        self.cells().any(|v| v == value)
    }

    fn cells(&self) -> impl Iterator<Item = Tile> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Tile>> {
    fn from(board: Board) -> Self {
        board.rows
    }
}
