//! Main AI Engine wrapping the minimax searcher
//!
//! The engine answers "where should `player` play" for any position:
//!
//! 1. **Terminal**: the last move already won the game, nothing to search
//! 2. **Exhausted**: no empty cell is left, the game is a draw
//! 3. **Alpha-Beta**: minimax with alpha-beta pruning on a copy of the board
//! 4. **Random fallback**: the search produced no move, pick any empty cell
//!
//! Caches live in the engine's [`Searcher`] and are reused by every call
//! until [`AIEngine::reset`].
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut engine = AIEngine::with_seed(7);
//! let mut board = Board::new(15);
//! board.place_move(7, 7, Stone::Black);
//!
//! let result = engine.choose_move_with_stats(&board, Stone::White, 2);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::board::{Board, Pos, Stone};
use crate::search::{SearchResult, Searcher, TTStats};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// The position was already won; no move
    Terminal,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// The search found nothing and a random empty cell was picked
    RandomFallback,
    /// No empty cell left; no move
    Exhausted,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the position for the mover
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn no_move(search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Main AI Engine.
///
/// Owns the searcher (and through it every search cache) and the random
/// generator used when the search yields no move.
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
    rng: StdRng,
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AIEngine {
    /// Create a new AI engine with an OS-seeded random fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an engine whose random fallback is reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            searcher: Searcher::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get the best move for `player`.
    ///
    /// Returns `None` when the game is already decided or the board is full.
    /// Otherwise the returned cell is always empty.
    #[must_use]
    pub fn choose_move(&mut self, board: &Board, player: Stone, depth: u32) -> Option<Pos> {
        self.choose_move_with_stats(board, player, depth).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// The search runs on a copy of `board`, so its history and redo buffer
    /// are left as they were.
    #[must_use]
    pub fn choose_move_with_stats(&mut self, board: &Board, player: Stone, depth: u32) -> MoveResult {
        let start = Instant::now();
        let elapsed = || start.elapsed().as_millis() as u64;

        if board.check_win(None).is_some() {
            return MoveResult::no_move(SearchType::Terminal, elapsed());
        }

        let empties = board.empty_cells();
        if empties.is_empty() {
            return MoveResult::no_move(SearchType::Exhausted, elapsed());
        }

        let mut work = board.clone();
        let searched = self.searcher.search(&mut work, player, depth);

        let mut result = MoveResult::from_alphabeta(searched, elapsed());
        if result.best_move.is_none() {
            result.best_move = empties.choose(&mut self.rng).copied();
            result.search_type = SearchType::RandomFallback;
        }

        let tt = self.searcher.tt_stats();
        debug!(
            "{:?} depth {} -> {:?} ({:?}) score {} nodes {} in {}ms, tt {} entries ({:.1}% hits), eval cache {}",
            player,
            depth,
            result.best_move,
            result.search_type,
            result.score,
            result.nodes,
            result.time_ms,
            tt.used,
            tt.hit_rate(),
            self.searcher.evaluator().len(),
        );
        result
    }

    /// Drop every search cache.
    ///
    /// Consecutive games sharing one engine reuse cached results until this
    /// is called.
    pub fn reset(&mut self) {
        self.searcher.reset();
        debug!("engine caches cleared");
    }

    /// Get statistics about the transposition table.
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }

    /// Sizes of the evaluation cache, killer table and history table
    #[must_use]
    pub fn cache_sizes(&self) -> (usize, usize, usize) {
        (
            self.searcher.evaluator().len(),
            self.searcher.killers().len(),
            self.searcher.history().len(),
        )
    }

    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_empty_board() {
        let mut engine = AIEngine::with_seed(1);
        let board = Board::new(15);

        let result = engine.choose_move_with_stats(&board, Stone::Black, 1);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.search_type, SearchType::AlphaBeta);
    }

    #[test]
    fn test_engine_no_move_after_win() {
        let mut engine = AIEngine::with_seed(1);
        let mut board = Board::new(15);
        for x in 3..8 {
            board.place_move(x, 7, Stone::Black);
        }

        for player in [Stone::Black, Stone::White] {
            let result = engine.choose_move_with_stats(&board, player, 2);
            assert_eq!(result.best_move, None);
            assert_eq!(result.search_type, SearchType::Terminal);
        }
    }

    #[test]
    fn test_engine_full_board_is_exhausted() {
        let mut board = Board::new(2);
        board.place_move(0, 0, Stone::Black);
        board.place_move(1, 0, Stone::White);
        board.place_move(0, 1, Stone::White);
        board.place_move(1, 1, Stone::Black);

        let mut engine = AIEngine::with_seed(1);
        let result = engine.choose_move_with_stats(&board, Stone::White, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.search_type, SearchType::Exhausted);
    }

    #[test]
    fn test_engine_never_returns_occupied_cell() {
        let mut engine = AIEngine::with_seed(3);
        let mut board = Board::new(9);
        let mut player = Stone::Black;

        for _ in 0..12 {
            let Some(mov) = engine.choose_move(&board, player, 2) else {
                break;
            };
            assert!(board.is_empty(mov), "{mov:?} already occupied");
            assert!(board.place_move(mov.x, mov.y, player));
            player = player.opponent();
        }
    }

    #[test]
    fn test_engine_leaves_caller_board_untouched() {
        let mut engine = AIEngine::with_seed(1);
        let mut board = Board::new(9);
        board.place_move(4, 4, Stone::Black);
        board.place_move(5, 5, Stone::White);
        board.undo();
        let before = board.clone();

        let _ = engine.choose_move(&board, Stone::White, 2);
        assert_eq!(board, before);
        assert_eq!(board.redo_stack().len(), 1);
    }

    #[test]
    fn test_engine_random_fallback() {
        let mut board = Board::new(5);
        board.place_move(2, 2, Stone::Black);

        // Depth 0 never proposes a move, so the fallback kicks in
        let mut a = AIEngine::with_seed(42);
        let mut b = AIEngine::with_seed(42);
        let ra = a.choose_move_with_stats(&board, Stone::White, 0);
        let rb = b.choose_move_with_stats(&board, Stone::White, 0);

        assert_eq!(ra.search_type, SearchType::RandomFallback);
        let mov = ra.best_move.expect("fallback picks a cell");
        assert!(board.is_empty(mov));
        assert_eq!(ra.best_move, rb.best_move);
    }

    #[test]
    fn test_engine_deterministic() {
        let mut board = Board::new(11);
        board.place_move(5, 5, Stone::Black);
        board.place_move(6, 5, Stone::White);
        board.place_move(5, 6, Stone::Black);

        let a = AIEngine::with_seed(1).choose_move(&board, Stone::White, 2);
        let b = AIEngine::with_seed(2).choose_move(&board, Stone::White, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_engine_reset_clears_caches() {
        let mut engine = AIEngine::with_seed(1);
        let mut board = Board::new(9);
        board.place_move(4, 4, Stone::Black);

        let _ = engine.choose_move(&board, Stone::White, 2);
        assert!(engine.tt_stats().used > 0);
        assert!(engine.cache_sizes().0 > 0);

        engine.reset();
        assert_eq!(engine.tt_stats().used, 0);
        assert_eq!(engine.cache_sizes(), (0, 0, 0));
    }

    #[test]
    fn test_engine_caches_persist_between_calls() {
        let mut engine = AIEngine::with_seed(1);
        let mut board = Board::new(9);
        board.place_move(4, 4, Stone::Black);

        let first = engine.choose_move_with_stats(&board, Stone::White, 2);
        let second = engine.choose_move_with_stats(&board, Stone::White, 2);
        assert_eq!(second.best_move, first.best_move);
        assert_eq!(second.nodes, 1);
    }
}
