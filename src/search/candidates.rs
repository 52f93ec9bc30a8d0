//! Candidate move generation
//!
//! Only empty cells near existing stones are worth searching. Candidates
//! are weighted by how many stones lie within Chebyshev distance 2, then
//! capped by remaining depth so deeper plies branch less.

use crate::board::{Board, Pos};

/// Neighbourhood radius around each stone
pub const NEIGHBOR_RADIUS: isize = 2;

/// Maximum number of candidates for a given remaining depth
#[inline]
pub fn max_candidates(depth: u32) -> usize {
    match depth {
        0..=2 => 30,
        3 => 18,
        4 => 10,
        _ => 6,
    }
}

/// Proposes ordered, capped candidate moves for a position
#[derive(Debug, Default, Clone, Copy)]
pub struct CandidateGenerator;

impl CandidateGenerator {
    /// Ordered candidate cells for a node with `depth` plies remaining.
    ///
    /// A board without stones yields only the center, a full board yields
    /// nothing. Otherwise every empty cell within distance 2 of a stone is
    /// weighted by the number of stones that reach it, sorted by weight
    /// (descending) and then by Manhattan distance to the center
    /// (ascending). Remaining ties keep discovery order: stones row-major,
    /// then their neighbourhood row-major.
    #[must_use]
    pub fn candidates(&self, board: &Board, depth: u32) -> Vec<Pos> {
        let size = board.size();
        let center = board.center();
        if board.is_board_empty() {
            return vec![center];
        }

        // Discovery-ordered (pos, weight) with a per-cell index into it
        let mut found: Vec<(Pos, u32)> = Vec::new();
        let mut slot: Vec<Option<usize>> = vec![None; size * size];

        for stone in board.occupied() {
            for dy in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                for dx in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let Some(pos) = stone.offset(dx, dy, 1, size) else {
                        continue;
                    };
                    if !board.is_empty(pos) {
                        continue;
                    }
                    let idx = pos.y * size + pos.x;
                    let existing = slot[idx];
                    match existing {
                        Some(i) => found[i].1 += 1,
                        None => {
                            slot[idx] = Some(found.len());
                            found.push((pos, 1));
                        }
                    }
                }
            }
        }

        // Stable sort keeps discovery order among equal keys
        found.sort_by_key(|&(pos, weight)| (std::cmp::Reverse(weight), pos.manhattan(center)));
        found
            .into_iter()
            .take(max_candidates(depth))
            .map(|(pos, _)| pos)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_empty_board_yields_center() {
        let board = Board::new(15);
        let moves = CandidateGenerator.candidates(&board, 1);
        assert_eq!(moves, vec![Pos::new(7, 7)]);
    }

    #[test]
    fn test_even_board_center() {
        let board = Board::new(10);
        assert_eq!(CandidateGenerator.candidates(&board, 3), vec![Pos::new(5, 5)]);
    }

    #[test]
    fn test_single_stone_neighbourhood() {
        let mut board = Board::new(15);
        board.place_move(7, 7, Stone::Black);

        let moves = CandidateGenerator.candidates(&board, 2);
        // 5x5 square minus the stone itself
        assert_eq!(moves.len(), 24);
        assert!(moves.iter().all(|p| board.is_empty(*p)));
        assert!(moves
            .iter()
            .all(|p| p.x.abs_diff(7) <= 2 && p.y.abs_diff(7) <= 2));

        // All weights equal: closest to center first, discovery order on ties
        assert_eq!(moves[0], Pos::new(7, 6));
        assert_eq!(moves[1], Pos::new(6, 7));
        assert_eq!(moves[2], Pos::new(8, 7));
        assert_eq!(moves[3], Pos::new(7, 8));
    }

    #[test]
    fn test_weight_orders_before_distance() {
        let mut board = Board::new(15);
        board.place_move(0, 0, Stone::Black);
        board.place_move(4, 0, Stone::White);

        let moves = CandidateGenerator.candidates(&board, 1);
        // (2, 0), (2, 1), (2, 2) are reached by both stones
        let top: Vec<Pos> = moves[..3].to_vec();
        assert!(top.contains(&Pos::new(2, 0)));
        assert!(top.contains(&Pos::new(2, 1)));
        assert!(top.contains(&Pos::new(2, 2)));
        // Among them the one nearest the center comes first
        assert_eq!(moves[0], Pos::new(2, 2));
    }

    #[test]
    fn test_depth_caps() {
        assert_eq!(max_candidates(0), 30);
        assert_eq!(max_candidates(2), 30);
        assert_eq!(max_candidates(3), 18);
        assert_eq!(max_candidates(4), 10);
        assert_eq!(max_candidates(5), 6);
        assert_eq!(max_candidates(9), 6);

        let mut board = Board::new(15);
        board.place_move(3, 3, Stone::Black);
        board.place_move(11, 11, Stone::White);
        assert_eq!(CandidateGenerator.candidates(&board, 2).len(), 30);
        assert_eq!(CandidateGenerator.candidates(&board, 3).len(), 18);
        assert_eq!(CandidateGenerator.candidates(&board, 4).len(), 10);
        assert_eq!(CandidateGenerator.candidates(&board, 7).len(), 6);
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let mut board = Board::new(2);
        board.place_move(0, 0, Stone::Black);
        board.place_move(1, 0, Stone::White);
        board.place_move(0, 1, Stone::Black);
        board.place_move(1, 1, Stone::White);
        assert!(CandidateGenerator.candidates(&board, 1).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let mut board = Board::new(15);
        board.place_move(7, 7, Stone::Black);
        board.place_move(8, 8, Stone::White);
        board.place_move(6, 8, Stone::Black);
        let a = CandidateGenerator.candidates(&board, 3);
        let b = CandidateGenerator.candidates(&board, 3);
        assert_eq!(a, b);
    }
}
