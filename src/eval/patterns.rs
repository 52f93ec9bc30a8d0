//! Pattern weights and single-line scoring
//!
//! A line is a row, column, diagonal or anti-diagonal read as a 1-D
//! sequence. Every window that matches a pattern contributes its weight;
//! overlapping windows are all counted.

use crate::board::Stone;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row: `PPPPP`
    pub const FIVE: i32 = 100_000;
    /// Open four: `_PPPP_`
    pub const OPEN_FOUR: i32 = 10_000;
    /// Any five-window holding exactly four stones
    pub const FOUR: i32 = 1_000;
    /// Open three: `_PPP_`
    pub const OPEN_THREE: i32 = 500;
    /// Any four-window holding exactly three stones, not open on both ends
    pub const THREE: i32 = 100;
    /// Open two: `_PP_`
    pub const OPEN_TWO: i32 = 10;
}

/// Score one padded line for `player`.
///
/// `padded` must already carry one empty sentinel at each end.
pub fn score_line(padded: &[Stone], player: Stone) -> i32 {
    let mut score = 0;
    let count = |window: &[Stone]| window.iter().filter(|&&s| s == player).count();
    let all = |window: &[Stone]| window.iter().all(|&s| s == player);

    for w in padded.windows(6) {
        if w[0] == Stone::Empty && all(&w[1..5]) && w[5] == Stone::Empty {
            score += PatternScore::OPEN_FOUR;
        }
    }

    for w in padded.windows(5) {
        let n = count(w);
        if n == 5 {
            score += PatternScore::FIVE;
        } else if n == 4 {
            score += PatternScore::FOUR;
        }
        if w[0] == Stone::Empty && w[4] == Stone::Empty && all(&w[1..4]) {
            score += PatternScore::OPEN_THREE;
        }
    }

    for w in padded.windows(4) {
        let open = w[0] == Stone::Empty && w[3] == Stone::Empty;
        if count(w) == 3 && !open {
            score += PatternScore::THREE;
        }
        if open && all(&w[1..3]) {
            score += PatternScore::OPEN_TWO;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Stone = Stone::Empty;
    const B: Stone = Stone::Black;
    const W: Stone = Stone::White;

    fn padded(line: &[Stone]) -> Vec<Stone> {
        let mut v = vec![E];
        v.extend_from_slice(line);
        v.push(E);
        v
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::FOUR);
        assert!(PatternScore::FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::THREE);
        assert!(PatternScore::THREE > PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_empty_line_scores_zero() {
        assert_eq!(score_line(&padded(&[E; 9]), B), 0);
    }

    #[test]
    fn test_short_lines() {
        assert_eq!(score_line(&padded(&[B]), B), 0);
        // padded: _ B B _  -> the sentinels make it an open two
        assert_eq!(score_line(&padded(&[B, B]), B), PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_lone_open_two() {
        // _ _ B B _ _  -> one open two, nothing else
        assert_eq!(score_line(&padded(&[E, B, B, E]), B), PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_open_three_in_short_line() {
        // padded: _ B B B _  (five cells)
        // open three once; four-windows `_BBB` and `BBB_` are closed threes
        let expected = PatternScore::OPEN_THREE + 2 * PatternScore::THREE;
        assert_eq!(score_line(&padded(&[B, B, B]), B), expected);
    }

    #[test]
    fn test_blocked_three() {
        // padded: _ W B B B _
        // 4-windows: _WBB (2), WBBB (3, closed), BBB_ (3, closed)
        // 5-windows: _WBBB (3), WBBB_ (3): no four, no open three
        let expected = 2 * PatternScore::THREE;
        assert_eq!(score_line(&padded(&[W, B, B, B]), B), expected);
    }

    #[test]
    fn test_open_four_in_short_line() {
        // padded: _ B B B B _
        // open four once, two five-windows with four stones,
        // 4-windows: _BBB and BBB_ count as closed threes, BBBB has four
        let expected = PatternScore::OPEN_FOUR + 2 * PatternScore::FOUR + 2 * PatternScore::THREE;
        assert_eq!(score_line(&padded(&[B, B, B, B]), B), expected);
    }

    #[test]
    fn test_exact_five() {
        // padded: _ B B B B B _
        // one five, two fours (_BBBB, BBBB_), two closed threes (_BBB, BBB_)
        let expected = PatternScore::FIVE + 2 * PatternScore::FOUR + 2 * PatternScore::THREE;
        assert_eq!(score_line(&padded(&[B; 5]), B), expected);
    }

    #[test]
    fn test_opponent_stones_do_not_count() {
        assert_eq!(score_line(&padded(&[W, W, W, W]), B), 0);
    }
}
