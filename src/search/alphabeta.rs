//! Minimax search with alpha-beta pruning
//!
//! The searcher owns every cache the search touches: a transposition table,
//! an evaluation cache, killer moves and the history table. All of them live
//! as long as the [`Searcher`] and are shared by consecutive searches, so two
//! unrelated games using one searcher will see each other's entries until
//! [`Searcher::reset`] is called.
//!
//! Leaves are always scored from the root player's point of view, also at
//! minimizing nodes.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let mut board = Board::new(15);
//!
//! let result = searcher.search(&mut board, Stone::Black, 1);
//! assert_eq!(result.best_move, Some(Pos::new(7, 7)));
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::LineEvaluator;

use super::candidates::CandidateGenerator;
use super::ordering::{adjacency_score, HistoryTable, KillerTable, KILLER_BONUS};
use super::tt::{TTKey, TTStats, TranspositionTable};

/// Bound used for the initial alpha-beta window
pub const INF: i32 = 9_999_999;

/// Score of a decided position
pub const WIN_SCORE: i32 = 10_000;

/// Search result for one root search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value from the root player's perspective
    pub score: i32,
    /// Nodes visited, transposition hits included
    pub nodes: u64,
}

/// Depth-limited minimax searcher with persistent caches
#[derive(Debug)]
pub struct Searcher {
    tt: TranspositionTable,
    evaluator: LineEvaluator,
    killers: KillerTable,
    history: HistoryTable,
    generator: CandidateGenerator,
    nodes: u64,
    pruning: bool,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_pruning(true)
    }

    /// Searcher with alpha-beta cutoffs switched on or off.
    ///
    /// Without pruning every candidate of every node is expanded and killer
    /// and history tables are never updated. The returned value is the same
    /// either way.
    #[must_use]
    pub fn with_pruning(pruning: bool) -> Self {
        Self {
            tt: TranspositionTable::new(),
            evaluator: LineEvaluator::new(),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            generator: CandidateGenerator,
            nodes: 0,
            pruning,
        }
    }

    /// Search `depth` plies from the root with a full window, `player` to move.
    ///
    /// The board is mutated during the search and restored before returning,
    /// except that its redo buffer is cleared by the first trial placement.
    pub fn search(&mut self, board: &mut Board, player: Stone, depth: u32) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) = self.minimax(board, depth, -INF, INF, true, player);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    /// Minimax value and best move of the node at `board`.
    ///
    /// `player` is the root player: it moves at maximizing nodes and every
    /// leaf is scored for it. The result is stored in the transposition
    /// table under (grid, depth, maximizing, player) before returning.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        player: Stone,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        let key = TTKey::new(board, depth, maximizing, player);
        if let Some(hit) = self.tt.probe(&key) {
            return hit;
        }

        if let Some(win) = board.check_win(None) {
            let score = if win.winner == player { WIN_SCORE } else { -WIN_SCORE };
            self.tt.store(key, score, None);
            return (score, None);
        }

        if depth == 0 {
            let score = self.evaluator.evaluate_signed(board, key.signature.clone(), player);
            self.tt.store(key, score, None);
            return (score, None);
        }

        let moves = self.generator.candidates(board, depth);
        if moves.is_empty() {
            let score = self.evaluator.evaluate_signed(board, key.signature.clone(), player);
            let center = Some(board.center());
            self.tt.store(key, score, center);
            return (score, center);
        }

        let acting = if maximizing { player } else { player.opponent() };
        let ordered = self.order_moves(board, moves, depth, acting, maximizing);

        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in ordered {
            if !board.place_move(mov.x, mov.y, acting) {
                continue;
            }
            let (score, _) = self.minimax(board, depth - 1, alpha, beta, !maximizing, player);
            board.undo();

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }

            if self.pruning && beta <= alpha {
                self.killers.record(depth - 1, mov);
                self.history.reward(acting, mov, depth);
                break;
            }
        }

        self.tt.store(key, best_score, best_move);
        (best_score, best_move)
    }

    /// Order candidates by adjacency, history and killer bonus.
    ///
    /// Highest first when maximizing, lowest first when minimizing. The sort
    /// is stable so equal scores keep generator order.
    fn order_moves(
        &self,
        board: &Board,
        moves: Vec<Pos>,
        depth: u32,
        acting: Stone,
        maximizing: bool,
    ) -> Vec<Pos> {
        let mut scored: Vec<(i64, Pos)> = moves
            .into_iter()
            .map(|mov| {
                let mut score = adjacency_score(board, mov, acting);
                score = score.saturating_add(self.history.get(acting, mov));
                if self.killers.contains(depth, mov) {
                    score = score.saturating_add(KILLER_BONUS);
                }
                (score, mov)
            })
            .collect();

        if maximizing {
            scored.sort_by(|a, b| b.0.cmp(&a.0));
        } else {
            scored.sort_by(|a, b| a.0.cmp(&b.0));
        }
        scored.into_iter().map(|(_, mov)| mov).collect()
    }

    /// Drop every cache: transposition table, evaluation cache, killers and history
    pub fn reset(&mut self) {
        self.tt.clear();
        self.evaluator.clear();
        self.killers.clear();
        self.history.clear();
        self.nodes = 0;
    }

    /// Nodes visited by the last search
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    #[must_use]
    pub fn evaluator(&self) -> &LineEvaluator {
        &self.evaluator
    }

    #[must_use]
    pub fn killers(&self) -> &KillerTable {
        &self.killers
    }

    #[must_use]
    pub fn history(&self) -> &HistoryTable {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn pruning(&self) -> bool {
        self.pruning
    }
}
