//! Session settings shared by the GUI and the self-play demo

use std::path::PathBuf;

use thiserror::Error;

use crate::board::{Stone, DEFAULT_BOARD_SIZE, WIN_LENGTH};

/// Largest supported board side
pub const MAX_BOARD_SIZE: usize = 64;

/// Search depth limits accepted by the session
pub const MIN_AI_DEPTH: u32 = 1;
pub const MAX_AI_DEPTH: u32 = 8;

/// Default depth used for AI turns
pub const DEFAULT_AI_DEPTH: u32 = 3;

/// Default save file, relative to the working directory
pub const DEFAULT_SAVE_PATH: &str = "savegame.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {0} is out of range ({min}..={max})", min = WIN_LENGTH, max = MAX_BOARD_SIZE)]
    BoardSize(usize),

    #[error("AI depth {0} is out of range ({min}..={max})", min = MIN_AI_DEPTH, max = MAX_AI_DEPTH)]
    Depth(u32),

    #[error("AI player must be black or white, got {0:?}")]
    AiPlayer(Stone),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub ai_depth: u32,
    pub vs_ai: bool,
    pub ai_player: Stone,
    pub save_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            ai_depth: DEFAULT_AI_DEPTH,
            vs_ai: false,
            ai_player: Stone::White,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

impl GameConfig {
    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(WIN_LENGTH..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if !(MIN_AI_DEPTH..=MAX_AI_DEPTH).contains(&self.ai_depth) {
            return Err(ConfigError::Depth(self.ai_depth));
        }
        if !self.ai_player.is_player() {
            return Err(ConfigError::AiPlayer(self.ai_player));
        }
        Ok(())
    }
}

/// Clamp a requested depth into the accepted range
#[inline]
#[must_use]
pub fn clamp_depth(depth: u32) -> u32 {
    depth.clamp(MIN_AI_DEPTH, MAX_AI_DEPTH)
}
