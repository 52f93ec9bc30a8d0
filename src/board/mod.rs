//! Board representation for connect-five

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Run length needed to win
pub const WIN_LENGTH: usize = 5;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Axis directions as (dx, dy): horizontal, vertical, diagonal, anti-diagonal
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Stone colors
///
/// The discriminants are the wire values used by saved games:
/// `0` empty, `1` the first player (Black), `2` the second player (White).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Stone {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Wire value of this stone
    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Parse a wire value, `None` for anything outside {0, 1, 2}
    #[inline]
    pub fn from_u8(value: u8) -> Option<Stone> {
        match value {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Black),
            2 => Some(Stone::White),
            _ => None,
        }
    }

    /// True for Black and White
    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }
}

/// Position on the board, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step `n` cells along `(dx, dy)`, `None` when the result leaves `0..size`
    #[inline]
    pub fn offset(self, dx: isize, dy: isize, n: isize, size: usize) -> Option<Pos> {
        let x = self.x as isize + dx * n;
        let y = self.y as isize + dy * n;
        if x >= 0 && y >= 0 && (x as usize) < size && (y as usize) < size {
            Some(Pos::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan(self, other: Pos) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    /// Row-major order
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// One played stone, as recorded in the move history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

impl Move {
    #[inline]
    pub fn new(x: usize, y: usize, stone: Stone) -> Self {
        Self {
            pos: Pos::new(x, y),
            stone,
        }
    }
}

/// A completed run: the winner and every stone of the run, ordered along
/// the direction of travel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinResult {
    pub winner: Stone,
    pub line: Vec<Pos>,
}
