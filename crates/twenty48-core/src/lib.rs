//! twenty48 - rule engine for the 2048 sliding-tile puzzle
//!
//! This crate provides the deterministic board-transition core of the game:
//! - A validated square board of power-of-two tiles
//! - The move engine (slide, merge, score)
//! - A tile spawner driven by a caller-supplied RNG
//! - Win/loss detection
//!
//! # Architecture
//!
//! The engine functions are pure and stateless. [`GameSession`] is the
//! orchestrator a front end owns: it holds the live board, score, best score
//! and move count, and sequences move -> spawn -> classify for each turn.
//! With the `wasm` feature the session is also exposed to JavaScript.
//!
//! # Modules
//!
//! - [`board`]: Board representation and structural transforms
//! - [`moves`]: Directions and the move engine
//! - [`spawn`]: Random tile placement and board initialisation
//! - [`status`]: Terminal-state detection
//! - [`config`]: Session configuration
//! - [`game`]: Session orchestrator

pub mod board;
pub mod config;
pub mod game;
pub mod moves;
pub mod spawn;
pub mod status;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, BoardError, Score, Tile, EMPTY};
pub use config::{ConfigError, GameConfig, DEFAULT_SIZE, SUPPORTED_SIZES};
pub use game::{GameError, GameEvent, GameSession};
pub use moves::{apply_move, slide_row, Direction, MoveOutcome};
pub use spawn::{initialize_board, place_random_tile, spawn_tile, SpawnedTile};
pub use status::{can_move, has_won, status, GameStatus, DEFAULT_WIN_TILE};
