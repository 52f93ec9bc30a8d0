//! Static evaluation of board positions
//!
//! The score of a position for a player is the pattern score of all of
//! that player's lines minus the pattern score of the opponent's lines.
//! It only depends on the grid and the queried player, never on whose
//! turn it is.

use std::collections::HashMap;

use crate::board::{Board, Pos, Stone};

use super::patterns::score_line;

/// Evaluate the board from the perspective of `player`.
///
/// Positive values favour `player`. An empty board scores 0.
#[must_use]
pub fn evaluate(board: &Board, player: Stone) -> i32 {
    let opponent = player.opponent();
    let mut mine = 0;
    let mut theirs = 0;
    for_each_line(board, |padded| {
        mine += score_line(padded, player);
        theirs += score_line(padded, opponent);
    });
    mine - theirs
}

/// Pattern score of every line for a single player
#[must_use]
pub fn score_for(board: &Board, player: Stone) -> i32 {
    let mut score = 0;
    for_each_line(board, |padded| score += score_line(padded, player));
    score
}

/// Visit every row, column, diagonal and anti-diagonal, each padded with
/// one empty sentinel at both ends.
///
/// Diagonals of length 1 in the corners are visited as well.
fn for_each_line(board: &Board, mut f: impl FnMut(&[Stone])) {
    let size = board.size();
    let mut buf: Vec<Stone> = Vec::with_capacity(size + 2);

    let mut emit = |buf: &mut Vec<Stone>, cells: &mut dyn Iterator<Item = Pos>| {
        buf.clear();
        buf.push(Stone::Empty);
        buf.extend(cells.map(|p| board.get(p)));
        buf.push(Stone::Empty);
        f(buf.as_slice());
    };

    // Rows
    for y in 0..size {
        emit(&mut buf, &mut (0..size).map(|x| Pos::new(x, y)));
    }

    // Columns
    for x in 0..size {
        emit(&mut buf, &mut (0..size).map(|y| Pos::new(x, y)));
    }

    // Diagonals: x - y is constant, walked by increasing y
    for k in -(size as isize - 1)..(size as isize) {
        emit(
            &mut buf,
            &mut (0..size).filter_map(|y| {
                let x = y as isize - k;
                (x >= 0 && (x as usize) < size).then(|| Pos::new(x as usize, y))
            }),
        );
    }

    // Anti-diagonals: x + y is constant, walked by increasing y
    for k in 0..(2 * size).saturating_sub(1) {
        emit(
            &mut buf,
            &mut (0..size).filter_map(|y| {
                let x = k as isize - y as isize;
                (x >= 0 && (x as usize) < size).then(|| Pos::new(x as usize, y))
            }),
        );
    }
}

/// Evaluator with a cache keyed by grid signature and player.
///
/// The cache is never invalidated on its own; call [`LineEvaluator::clear`]
/// between unrelated games to bound its size.
#[derive(Debug, Default)]
pub struct LineEvaluator {
    cache: HashMap<(Box<[u8]>, Stone), i32>,
    hits: u64,
    misses: u64,
}

impl LineEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached [`evaluate`]
    pub fn evaluate(&mut self, board: &Board, player: Stone) -> i32 {
        self.evaluate_signed(board, board.signature(), player)
    }

    /// Cached [`evaluate`] when the caller already holds the grid signature
    pub fn evaluate_signed(&mut self, board: &Board, signature: Box<[u8]>, player: Stone) -> i32 {
        let key = (signature, player);
        if let Some(&score) = self.cache.get(&key) {
            self.hits += 1;
            return score;
        }
        self.misses += 1;
        let score = evaluate(board, player);
        self.cache.insert(key, score);
        score
    }

    /// Number of cached positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Cache hits and misses since the last clear
    #[must_use]
    pub fn hit_stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
