//! Game session orchestrator.
//!
//! The engine functions in `moves`, `spawn` and `status` are stateless. A
//! `GameSession` owns the live board and the per-session accumulators (score,
//! best score, move count, win latch) and sequences each turn:
//! move, then spawn if the board changed, then classify.

use crate::board::{Board, BoardError, Score, Tile};
use crate::config::{ConfigError, GameConfig};
use crate::moves::{apply_move, Direction};
use crate::spawn::{initialize_board, place_random_tile};
use crate::status::{can_move, status, GameStatus};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::{debug, info, trace};

/// Errors that can occur when driving a session
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Game is over")]
    GameOver,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Invalid board: {0}")]
    InvalidBoard(#[from] BoardError),

    #[error("Board is {found}x{found} but the config asks for {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },
}

/// Something that happened while applying a move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The move would not change the board; nothing was applied
    MoveRejected { direction: Direction },
    /// Tiles slid and merged
    Moved {
        direction: Direction,
        score_delta: Score,
        score: Score,
    },
    /// A new tile was placed after the move
    TileSpawned { row: usize, col: usize, value: Tile },
    /// The win tile appeared for the first time this game
    GameWon { score: Score },
    /// No move can change the board any more
    GameLost { score: Score },
}

fn fresh_rng() -> StdRng {
    StdRng::from_entropy()
}

fn rng_for(config: &GameConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => fresh_rng(),
    }
}

/// A single player's game.
///
/// Snapshots round-trip through serde. Deserialization validates the config
/// and board like [`GameSession::from_board`]; the RNG is not persisted.
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    score: Score,
    best_score: Score,
    moves: u32,
    /// Set once the win tile is reached; play may continue afterwards
    won: bool,
    game_over: bool,
    #[serde(skip)]
    rng: StdRng,
}

/// Wire form of a session snapshot before the board is checked
#[derive(Deserialize)]
struct UncheckedSession {
    config: GameConfig,
    board: Board,
    score: Score,
    best_score: Score,
    moves: u32,
    won: bool,
    game_over: bool,
}

impl<'de> Deserialize<'de> for GameSession {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = UncheckedSession::deserialize(deserializer)?;
        let mut session =
            Self::from_board(raw.config, raw.board).map_err(serde::de::Error::custom)?;

        session.score = raw.score;
        session.best_score = raw.best_score.max(raw.score);
        session.moves = raw.moves;
        session.won |= raw.won;
        session.game_over |= raw.game_over;
        Ok(session)
    }
}

impl GameSession {
    /// Start a new game with a freshly spawned board
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = rng_for(&config);
        let board = initialize_board(config.size, &mut rng)?;

        info!(size = config.size, win_tile = config.win_tile, "New game");

        Ok(Self {
            config,
            board,
            score: 0,
            best_score: 0,
            moves: 0,
            won: false,
            game_over: false,
            rng,
        })
    }

    /// Resume play from an existing board
    pub fn from_board(config: GameConfig, board: Board) -> Result<Self, GameError> {
        config.validate()?;
        if board.size() != config.size {
            return Err(GameError::SizeMismatch {
                expected: config.size,
                found: board.size(),
            });
        }

        let won = status(&board, config.win_tile) == GameStatus::Won;
        let game_over = !can_move(&board);
        let rng = rng_for(&config);

        Ok(Self {
            config,
            board,
            score: 0,
            best_score: 0,
            moves: 0,
            won,
            game_over,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The live board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Highest score seen by this session, kept across resets
    pub fn best_score(&self) -> Score {
        self.best_score
    }

    /// Number of accepted moves in the current game
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether the win tile has been reached during this game
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Whether no further move is possible
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Current classification of the live board
    pub fn status(&self) -> GameStatus {
        status(&self.board, self.config.win_tile)
    }

    pub fn max_tile(&self) -> Tile {
        self.board.max_tile()
    }

    pub fn count_empty(&self) -> usize {
        self.board.count_empty()
    }

    /// Apply a move to the live board.
    ///
    /// A move that changes nothing yields a single `MoveRejected` event and
    /// leaves the session untouched.
    pub fn apply_move(&mut self, direction: Direction) -> Result<Vec<GameEvent>, GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }

        let outcome = apply_move(&self.board, direction);
        if !outcome.changed {
            trace!(%direction, "Move rejected");
            return Ok(vec![GameEvent::MoveRejected { direction }]);
        }

        let mut events = Vec::new();

        let (board, spawned) = place_random_tile(&outcome.board, &mut self.rng);
        self.board = board;
        self.score = self.score.saturating_add(outcome.score_delta);
        self.moves += 1;
        self.best_score = self.best_score.max(self.score);

        debug!(
            %direction,
            score_delta = outcome.score_delta,
            score = self.score,
            moves = self.moves,
            "Move applied"
        );

        events.push(GameEvent::Moved {
            direction,
            score_delta: outcome.score_delta,
            score: self.score,
        });

        if let Some(tile) = spawned {
            events.push(GameEvent::TileSpawned {
                row: tile.row,
                col: tile.col,
                value: tile.value,
            });
        }

        events.extend(self.check_end_conditions());

        Ok(events)
    }

    /// Start over on the current board size. The best score survives.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.board = initialize_board(self.config.size, &mut self.rng)?;
        self.score = 0;
        self.moves = 0;
        self.won = false;
        self.game_over = false;

        info!(size = self.config.size, "Game reset");
        Ok(())
    }

    /// Switch to a new board size and start over
    pub fn resize(&mut self, size: usize) -> Result<(), GameError> {
        GameConfig::validate_size(size)?;
        self.config.size = size;
        self.reset()
    }

    fn check_end_conditions(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if !self.won && self.status() == GameStatus::Won {
            self.won = true;
            info!(score = self.score, moves = self.moves, "Game won");
            events.push(GameEvent::GameWon { score: self.score });
        }

        // A winning board can still be stuck, so this is checked separately
        if !can_move(&self.board) {
            self.game_over = true;
            info!(score = self.score, moves = self.moves, "Game lost");
            events.push(GameEvent::GameLost { score: self.score });
        }

        events
    }
}
