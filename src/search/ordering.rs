//! Move-ordering heuristics: killer moves and history
//!
//! Both tables persist across searches and are only emptied by an explicit
//! clear.

use std::collections::HashMap;

use crate::board::{Board, Pos, Stone};

/// Killer moves kept per depth
pub const KILLERS_PER_DEPTH: usize = 2;

/// Ordering bonus for a killer move at the current depth
pub const KILLER_BONUS: i64 = 200_000;

/// Adjacency radius used by [`adjacency_score`]
const ADJACENCY_RADIUS: isize = 2;

/// Moves that caused a beta cutoff, per depth, most recent first
#[derive(Debug, Default, Clone)]
pub struct KillerTable {
    slots: HashMap<u32, Vec<Pos>>,
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Killer moves stored for `depth`, most recent first
    #[must_use]
    pub fn get(&self, depth: u32) -> &[Pos] {
        self.slots.get(&depth).map_or(&[], Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, depth: u32, mov: Pos) -> bool {
        self.get(depth).contains(&mov)
    }

    /// Record a cutoff move at the front; known moves are left in place
    pub fn record(&mut self, depth: u32, mov: Pos) {
        let killers = self.slots.entry(depth).or_default();
        if killers.contains(&mov) {
            return;
        }
        killers.insert(0, mov);
        killers.truncate(KILLERS_PER_DEPTH);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

/// Accumulated cutoff weight per (player, cell)
#[derive(Debug, Default, Clone)]
pub struct HistoryTable {
    scores: HashMap<(Stone, Pos), i64>,
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, player: Stone, mov: Pos) -> i64 {
        self.scores.get(&(player, mov)).copied().unwrap_or(0)
    }

    /// Add `2^depth` for a move that caused a cutoff `depth` plies from the leaves
    pub fn reward(&mut self, player: Stone, mov: Pos, depth: u32) {
        let bonus = 1i64.checked_shl(depth).filter(|b| *b > 0).unwrap_or(i64::MAX);
        let score = self.scores.entry((player, mov)).or_insert(0);
        *score = score.saturating_add(bonus);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }
}

/// Cheap local ordering score for placing `player` at `pos`: +10 for each
/// own stone and +1 for each empty cell in the surrounding 5x5 square.
#[must_use]
pub fn adjacency_score(board: &Board, pos: Pos, player: Stone) -> i64 {
    let mut score = 0;
    for dy in -ADJACENCY_RADIUS..=ADJACENCY_RADIUS {
        for dx in -ADJACENCY_RADIUS..=ADJACENCY_RADIUS {
            if dx == 0 && dy == 0 {
                continue;
            }
            let Some(n) = pos.offset(dx, dy, 1, board.size()) else {
                continue;
            };
            let stone = board.get(n);
            if stone == player {
                score += 10;
            } else if stone == Stone::Empty {
                score += 1;
            }
        }
    }
    score
}
