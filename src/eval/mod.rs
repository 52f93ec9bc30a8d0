//! Evaluation module
//!
//! Contains:
//! - Pattern weights and single-line scoring
//! - Whole-board evaluation, plain and cached

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_for, LineEvaluator};
pub use patterns::{score_line, PatternScore};
