//! Tile spawning.
//!
//! Randomness is always supplied by the caller as an `Rng`, so a seeded
//! `StdRng` makes every spawn reproducible.

use crate::board::{Board, BoardError, Tile};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Chance that a new tile is a 2 rather than a 4
pub const TWO_PROBABILITY: f64 = 0.9;

/// Where a spawned tile landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Draw the value of a new tile: 2 with 90% probability, otherwise 4
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_bool(TWO_PROBABILITY) {
        2
    } else {
        4
    }
}

/// Place a new tile in a uniformly chosen empty cell.
///
/// Returns the new board together with the placement, or an unchanged copy
/// and `None` when the board is full.
pub fn place_random_tile<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> (Board, Option<SpawnedTile>) {
    let empty = board.empty_cells();
    let Some(&(row, col)) = empty.choose(rng) else {
        return (board.clone(), None);
    };

    let value = random_tile_value(rng);
    (
        board.with_tile(row, col, value),
        Some(SpawnedTile { row, col, value }),
    )
}

/// Place a new tile in a uniformly chosen empty cell, if any
pub fn spawn_tile<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Board {
    place_random_tile(board, rng).0
}

/// Create an empty board of `size` and spawn the two starting tiles
pub fn initialize_board<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Board, BoardError> {
    let board = Board::empty(size)?;
    let board = spawn_tile(&board, rng);
    Ok(spawn_tile(&board, rng))
}
