//! Transposition Table for caching search results
//!
//! Entries are keyed by the exact grid signature together with the search
//! parameters that produced them, so a hit is only ever returned for the
//! same position searched the same way.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::{TTKey, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new();
//! let board = Board::new(15);
//!
//! let key = TTKey::new(&board, 3, true, Stone::Black);
//! tt.store(key.clone(), 120, Some(Pos::new(7, 7)));
//!
//! assert_eq!(tt.probe(&key), Some((120, Some(Pos::new(7, 7)))));
//! ```

use std::collections::HashMap;

use crate::board::{Board, Pos, Stone};

/// Lookup key: position plus the search parameters of the node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TTKey {
    /// Canonical encoding of every cell
    pub signature: Box<[u8]>,
    /// Remaining depth
    pub depth: u32,
    /// Whether the node maximizes for `player`
    pub maximizing: bool,
    /// Root player the node is scored for
    pub player: Stone,
}

impl TTKey {
    #[must_use]
    pub fn new(board: &Board, depth: u32, maximizing: bool, player: Stone) -> Self {
        Self {
            signature: board.signature(),
            depth,
            maximizing,
            player,
        }
    }
}

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    /// Score of the node
    pub score: i32,
    /// Best move found for this node
    pub best_move: Option<Pos>,
}

/// Transposition table for caching search results.
///
/// Grows without bound until [`TranspositionTable::clear`] is called;
/// entries survive across searches.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<TTKey, TTEntry>,
    probes: u64,
    hits: u64,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe the table for a node.
    ///
    /// Returns `Some((score, best_move))` when this exact node was stored.
    pub fn probe(&mut self, key: &TTKey) -> Option<(i32, Option<Pos>)> {
        self.probes += 1;
        let entry = self.entries.get(key)?;
        self.hits += 1;
        Some((entry.score, entry.best_move))
    }

    /// Store a node result, replacing any previous entry for the key
    pub fn store(&mut self, key: TTKey, score: i32, best_move: Option<Pos>) {
        self.entries.insert(key, TTEntry { score, best_move });
    }

    /// Clear all entries in the table.
    ///
    /// This should be called when starting a new game or when the
    /// table becomes stale.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.probes = 0;
        self.hits = 0;
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        TTStats {
            used: self.entries.len(),
            probes: self.probes,
            hits: self.hits,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTStats {
    /// Number of stored nodes
    pub used: usize,
    /// Lookups since the last clear
    pub probes: u64,
    /// Lookups that found an entry
    pub hits: u64,
}

impl TTStats {
    /// Hit rate in percent
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tt_store_probe() {
        let mut tt = TranspositionTable::new();
        let board = Board::new(9);
        let key = TTKey::new(&board, 2, true, Stone::Black);

        tt.store(key.clone(), 100, Some(Pos::new(4, 4)));

        let (score, best_move) = tt.probe(&key).expect("stored entry");
        assert_eq!(score, 100);
        assert_eq!(best_move, Some(Pos::new(4, 4)));
    }

    #[test]
    fn test_tt_key_includes_search_parameters() {
        let mut tt = TranspositionTable::new();
        let board = Board::new(9);
        tt.store(TTKey::new(&board, 2, true, Stone::Black), 100, None);

        assert_eq!(tt.probe(&TTKey::new(&board, 3, true, Stone::Black)), None);
        assert_eq!(tt.probe(&TTKey::new(&board, 2, false, Stone::Black)), None);
        assert_eq!(tt.probe(&TTKey::new(&board, 2, true, Stone::White)), None);
    }

    #[test]
    fn test_tt_key_includes_grid() {
        let mut tt = TranspositionTable::new();
        let mut board = Board::new(9);
        tt.store(TTKey::new(&board, 1, true, Stone::Black), 7, None);

        board.place_move(0, 0, Stone::Black);
        assert_eq!(tt.probe(&TTKey::new(&board, 1, true, Stone::Black)), None);

        board.undo();
        assert_eq!(tt.probe(&TTKey::new(&board, 1, true, Stone::Black)), Some((7, None)));
    }

    #[test]
    fn test_tt_replace_same_key() {
        let mut tt = TranspositionTable::new();
        let board = Board::new(9);
        let key = TTKey::new(&board, 1, false, Stone::White);
        tt.store(key.clone(), 1, None);
        tt.store(key.clone(), 2, Some(Pos::new(1, 1)));
        assert_eq!(tt.probe(&key), Some((2, Some(Pos::new(1, 1)))));
        assert_eq!(tt.stats().used, 1);
    }

    #[test]
    fn test_tt_clear_and_stats() {
        let mut tt = TranspositionTable::new();
        let board = Board::new(9);
        let key = TTKey::new(&board, 1, true, Stone::Black);
        tt.store(key.clone(), 5, None);
        let _ = tt.probe(&key);
        let _ = tt.probe(&TTKey::new(&board, 4, true, Stone::Black));

        let stats = tt.stats();
        assert_eq!(stats.used, 1);
        assert_eq!(stats.probes, 2);
        assert_eq!(stats.hits, 1);
        assert!((stats.hit_rate() - 50.0).abs() < f64::EPSILON);

        tt.clear();
        assert_eq!(tt.stats(), TTStats { used: 0, probes: 0, hits: 0 });
    }
}
