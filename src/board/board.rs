//! Board structure with undo/redo tracking

use std::fmt;

use super::{Move, Pos, Stone, WinResult, DEFAULT_BOARD_SIZE, DIRECTIONS, WIN_LENGTH};

/// Game board with move history and redo buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells, `cells[y * size + x]`
    cells: Vec<Stone>,
    /// Played moves in order
    history: Vec<Move>,
    /// Moves popped by undo, replayable by redo
    redo_stack: Vec<Move>,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            history: Vec::with_capacity(size * size),
            redo_stack: Vec::new(),
        }
    }

    /// Rebuild a board from a row-major grid and a move history.
    ///
    /// Nothing is replayed or validated: the grid is taken as-is and the
    /// history is trusted. The board size is the number of rows; short rows
    /// are padded with empty cells and extra columns are dropped.
    pub fn from_parts(grid: Vec<Vec<Stone>>, history: Vec<Move>) -> Self {
        let size = grid.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in &grid {
            for x in 0..size {
                cells.push(row.get(x).copied().unwrap_or(Stone::Empty));
            }
        }
        Self {
            size,
            cells,
            history,
            redo_stack: Vec::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Get stone at position (out of bounds reads as empty)
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.in_bounds(pos.x, pos.y) {
            self.cells[pos.y * self.size + pos.x]
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Row-major copy of the grid
    pub fn grid(&self) -> Vec<Vec<Stone>> {
        self.cells.chunks(self.size.max(1)).map(<[Stone]>::to_vec).collect()
    }

    /// Played moves, oldest first
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Undone moves, the next one to redo last
    #[inline]
    pub fn redo_stack(&self) -> &[Move] {
        &self.redo_stack
    }

    /// Most recent move, if any
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// True iff (x, y) is on the board and empty
    #[inline]
    pub fn is_valid_move(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && self.cells[y * self.size + x] == Stone::Empty
    }

    /// Place a stone for `player`.
    ///
    /// Returns `false` and leaves the board untouched when the cell is out of
    /// bounds, occupied, or `player` is `Stone::Empty`. A successful placement
    /// clears the redo buffer.
    pub fn place_move(&mut self, x: usize, y: usize, player: Stone) -> bool {
        if !player.is_player() || !self.is_valid_move(x, y) {
            return false;
        }
        self.cells[y * self.size + x] = player;
        self.history.push(Move::new(x, y, player));
        self.redo_stack.clear();
        true
    }

    /// Take back the last move and push it onto the redo buffer
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.set(mv.pos, Stone::Empty);
        self.redo_stack.push(mv);
        Some(mv)
    }

    /// Replay the most recently undone move
    pub fn redo(&mut self) -> Option<Move> {
        let mv = self.redo_stack.pop()?;
        self.set(mv.pos, mv.stone);
        self.history.push(mv);
        Some(mv)
    }

    /// Check whether `last_move` (or the latest history entry) completed a run.
    ///
    /// Only the four rays through the move are scanned. The returned line is
    /// the whole contiguous run, starting from its far end in the negative
    /// direction.
    pub fn check_win(&self, last_move: Option<Move>) -> Option<WinResult> {
        let mv = last_move.or_else(|| self.last_move())?;
        if !mv.stone.is_player() {
            return None;
        }

        for (dx, dy) in DIRECTIONS {
            let back = self.count_dir(mv.pos, -dx, -dy, mv.stone);
            let ahead = self.count_dir(mv.pos, dx, dy, mv.stone);
            let total = back + 1 + ahead;
            if total >= WIN_LENGTH {
                let start_x = mv.pos.x as isize - dx * back as isize;
                let start_y = mv.pos.y as isize - dy * back as isize;
                let line = (0..total as isize)
                    .map(|i| Pos::new((start_x + dx * i) as usize, (start_y + dy * i) as usize))
                    .collect();
                return Some(WinResult {
                    winner: mv.stone,
                    line,
                });
            }
        }
        None
    }

    /// Canonical byte encoding of every cell, row-major
    pub fn signature(&self) -> Box<[u8]> {
        self.cells.iter().map(|s| s.to_u8()).collect()
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Stone::Empty)
            .map(|(i, _)| Pos::new(i % self.size, i / self.size))
            .collect()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|s| s.is_player())
    }

    /// Center cell, `(size / 2, size / 2)`
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// Positions of all stones, row-major
    pub fn occupied(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_player())
            .map(|(i, _)| Pos::new(i % self.size, i / self.size))
    }

    #[inline]
    fn set(&mut self, pos: Pos, stone: Stone) {
        if self.in_bounds(pos.x, pos.y) {
            self.cells[pos.y * self.size + pos.x] = stone;
        }
    }

    /// Consecutive `player` stones from `pos` (exclusive) along `(dx, dy)`
    fn count_dir(&self, pos: Pos, dx: isize, dy: isize, player: Stone) -> usize {
        let mut count = 0;
        while let Some(next) = pos.offset(dx, dy, count as isize + 1, self.size) {
            if self.get(next) != player {
                break;
            }
            count += 1;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    /// `.` empty, `X` black, `O` white, one row per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for stone in row {
                let c = match stone {
                    Stone::Empty => '.',
                    Stone::Black => 'X',
                    Stone::White => 'O',
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
