//! Connect-five game engine with a minimax AI
//!
//! Five in a row on an N x N board (15 x 15 by default):
//! - Black moves first, players alternate
//! - A run of five or more stones of one color wins (overlines count)
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board state, move history with undo/redo, win detection
//! - [`eval`]: Pattern-based position evaluation with a cache
//! - [`search`]: Candidate generation and alpha-beta minimax with its caches
//! - [`engine`]: Move selection on top of the search, with random fallback
//! - [`storage`]: Saved games as JSON
//! - [`config`]: Session settings
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone};
//!
//! let mut board = Board::new(15);
//! let mut engine = AIEngine::with_seed(1);
//!
//! board.place_move(7, 7, Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.choose_move(&board, Stone::White, 2) {
//!     board.place_move(pos.x, pos.y, Stone::White);
//!     println!("AI plays at ({}, {})", pos.x, pos.y);
//! }
//! ```
//!
//! # Caches
//!
//! The transposition table, evaluation cache, killer moves and history
//! table belong to one [`AIEngine`] and outlive single searches. Call
//! [`AIEngine::reset`] between unrelated games.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod search;
pub mod storage;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Stone, WinResult, DEFAULT_BOARD_SIZE, WIN_LENGTH};
pub use config::{ConfigError, GameConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use storage::{SavedGame, StorageError};
