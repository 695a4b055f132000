//! WebAssembly bindings for the twenty48 engine.
//!
//! This module exposes a game session to JavaScript through wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::GameSession;
use crate::moves::Direction;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn parse_direction(direction: &str) -> Option<Direction> {
    match direction.to_ascii_lowercase().as_str() {
        "up" | "arrowup" => Some(Direction::Up),
        "down" | "arrowdown" => Some(Direction::Down),
        "left" | "arrowleft" => Some(Direction::Left),
        "right" | "arrowright" => Some(Direction::Right),
        _ => None,
    }
}

/// WASM-exposed session wrapper
#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game on a `size` x `size` board
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize, win_tile: u32) -> Result<WasmGame, JsValue> {
        let config = GameConfig {
            size,
            win_tile: u64::from(win_tile),
            seed: None,
        };
        let session = GameSession::new(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid game: {}", e)))?;
        Ok(WasmGame { session })
    }

    /// Get the whole session as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.session).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the board as a JSON array of rows
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        serde_json::to_string(self.session.board()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the current status ("Playing", "Won" or "Lost") as JSON
    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> String {
        serde_json::to_string(&self.session.status())
            .unwrap_or_else(|_| "\"Unknown\"".to_string())
    }

    #[wasm_bindgen(js_name = getScore)]
    pub fn get_score(&self) -> f64 {
        self.session.score() as f64
    }

    #[wasm_bindgen(js_name = getBestScore)]
    pub fn get_best_score(&self) -> f64 {
        self.session.best_score() as f64
    }

    #[wasm_bindgen(js_name = getMoves)]
    pub fn get_moves(&self) -> u32 {
        self.session.moves()
    }

    #[wasm_bindgen(js_name = getMaxTile)]
    pub fn get_max_tile(&self) -> f64 {
        self.session.max_tile() as f64
    }

    /// Check if no further move is possible
    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// Apply a move ("up", "down", "left", "right"), returns events JSON or error
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, direction: &str) -> Result<String, JsValue> {
        let direction = parse_direction(direction)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown direction: {}", direction)))?;

        match self.session.apply_move(direction) {
            Ok(events) => {
                Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string()))
            }
            Err(e) => Err(JsValue::from_str(&format!("Move failed: {}", e))),
        }
    }

    /// Start a new game on the same board size
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.session
            .reset()
            .map_err(|e| JsValue::from_str(&format!("Reset failed: {}", e)))
    }

    /// Start a new game on a different board size
    pub fn resize(&mut self, size: usize) -> Result<(), JsValue> {
        self.session
            .resize(size)
            .map_err(|e| JsValue::from_str(&format!("Resize failed: {}", e)))
    }
}
