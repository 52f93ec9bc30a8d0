//! Search module for the connect-five AI
//!
//! Contains:
//! - Candidate generation around existing stones
//! - Transposition table for caching search results
//! - Killer and history tables for move ordering
//! - Minimax with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;
pub mod ordering;
pub mod tt;

pub use alphabeta::{SearchResult, Searcher, INF, WIN_SCORE};
pub use candidates::{max_candidates, CandidateGenerator, NEIGHBOR_RADIUS};
pub use ordering::{adjacency_score, HistoryTable, KillerTable, KILLER_BONUS};
pub use tt::{TTEntry, TTKey, TTStats, TranspositionTable};
