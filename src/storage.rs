//! Saved games as pretty-printed JSON
//!
//! The on-disk record keeps the wire form of every value: cells and players
//! are the integers `0` (empty), `1` (Black) and `2` (White), history
//! entries are `[x, y, player]` triples. Every key is optional on load so
//! that partial files only override what they contain.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Move, Stone, WIN_LENGTH};
use crate::config::MAX_BOARD_SIZE;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed save file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid cell value {value} at ({x}, {y})")]
    InvalidCell { x: usize, y: usize, value: u8 },

    #[error(
        "grid must be square with {min}..={max} rows, got {rows} rows and a row of {cols} cells",
        min = WIN_LENGTH,
        max = MAX_BOARD_SIZE
    )]
    InvalidGridShape { rows: usize, cols: usize },

    #[error("invalid player value {value} in {field}")]
    InvalidPlayer { field: &'static str, value: u8 },
}

/// Persisted session record.
///
/// `None` fields were absent from the file (or `null`) and leave the
/// corresponding session value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedGame {
    pub grid: Option<Vec<Vec<u8>>>,
    pub history: Option<Vec<(usize, usize, u8)>>,
    pub current_player: Option<u8>,
    pub vs_ai: Option<bool>,
    pub ai_player: Option<u8>,
    pub ai_depth: Option<u32>,
    pub game_over: Option<bool>,
}

impl SavedGame {
    /// Complete record of a session
    #[must_use]
    pub fn capture(
        board: &Board,
        current_player: Stone,
        vs_ai: bool,
        ai_player: Stone,
        ai_depth: u32,
        game_over: bool,
    ) -> Self {
        let grid = board
            .grid()
            .into_iter()
            .map(|row| row.into_iter().map(Stone::to_u8).collect())
            .collect();
        let history = board
            .history()
            .iter()
            .map(|m| (m.pos.x, m.pos.y, m.stone.to_u8()))
            .collect();
        Self {
            grid: Some(grid),
            history: Some(history),
            current_player: Some(current_player.to_u8()),
            vs_ai: Some(vs_ai),
            ai_player: Some(ai_player.to_u8()),
            ai_depth: Some(ai_depth),
            game_over: Some(game_over),
        }
    }

    /// Decoded grid, if present.
    ///
    /// The grid must be square with a side the session accepts.
    pub fn decode_grid(&self) -> Result<Option<Vec<Vec<Stone>>>, StorageError> {
        let Some(grid) = &self.grid else {
            return Ok(None);
        };
        let rows = grid.len();
        let ragged = grid.iter().find(|row| row.len() != rows);
        if !(WIN_LENGTH..=MAX_BOARD_SIZE).contains(&rows) || ragged.is_some() {
            let cols = ragged.map_or(rows, Vec::len);
            return Err(StorageError::InvalidGridShape { rows, cols });
        }
        grid.iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, &value)| {
                        Stone::from_u8(value).ok_or(StorageError::InvalidCell { x, y, value })
                    })
                    .collect::<Result<Vec<Stone>, StorageError>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Decoded move history, if present
    pub fn decode_history(&self) -> Result<Option<Vec<Move>>, StorageError> {
        let Some(history) = &self.history else {
            return Ok(None);
        };
        history
            .iter()
            .map(|&(x, y, value)| Ok(Move::new(x, y, decode_player("history", value)?)))
            .collect::<Result<Vec<Move>, StorageError>>()
            .map(Some)
    }

    pub fn decode_current_player(&self) -> Result<Option<Stone>, StorageError> {
        self.current_player
            .map(|v| decode_player("current_player", v))
            .transpose()
    }

    pub fn decode_ai_player(&self) -> Result<Option<Stone>, StorageError> {
        self.ai_player.map(|v| decode_player("ai_player", v)).transpose()
    }
}

fn decode_player(field: &'static str, value: u8) -> Result<Stone, StorageError> {
    Stone::from_u8(value)
        .filter(|s| s.is_player())
        .ok_or(StorageError::InvalidPlayer { field, value })
}

/// Write a record with 2-space indentation
pub fn save_game(path: impl AsRef<Path>, game: &SavedGame) -> Result<(), StorageError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(game)?;
    fs::write(path, json)?;
    info!("game saved to {}", path.display());
    Ok(())
}

pub fn load_game(path: impl AsRef<Path>) -> Result<SavedGame, StorageError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let game = serde_json::from_str(&text)?;
    info!("game loaded from {}", path.display());
    Ok(game)
}
