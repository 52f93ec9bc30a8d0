//! Game state management for the connect-five GUI

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::board::{Board, Move, Pos, Stone, WinResult};
use crate::config::{clamp_depth, GameConfig};
use crate::engine::{AIEngine, MoveResult};
use crate::storage::{self, SavedGame, StorageError};

/// AI computation state
pub enum AiState {
    Idle,
    /// A worker thread owns the engine and sends it back with its result
    Thinking {
        receiver: Receiver<(AIEngine, MoveResult)>,
        start_time: Instant,
        generation: u64,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub current_player: Stone,
    pub vs_ai: bool,
    pub ai_player: Stone,
    pub game_over: bool,
    pub winner: Option<WinResult>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,

    ai_depth: u32,
    save_path: PathBuf,
    /// `None` while a worker thread holds it
    engine: Option<AIEngine>,
    /// Bumped whenever the position changes under a running search
    generation: u64,
    /// Caches to drop as soon as the engine comes back
    reset_pending: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            current_player: Stone::Black,
            vs_ai: config.vs_ai,
            ai_player: config.ai_player,
            game_over: false,
            winner: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            ai_depth: clamp_depth(config.ai_depth),
            save_path: config.save_path.clone(),
            engine: Some(AIEngine::new()),
            generation: 0,
            reset_pending: false,
        }
    }

    /// Replace the engine, e.g. with a seeded one
    pub fn with_engine(mut self, engine: AIEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    #[inline]
    pub fn ai_depth(&self) -> u32 {
        self.ai_depth
    }

    pub fn set_ai_depth(&mut self, depth: u32) {
        self.ai_depth = clamp_depth(depth);
    }

    pub fn increase_depth(&mut self) {
        self.set_ai_depth(self.ai_depth + 1);
    }

    pub fn decrease_depth(&mut self) {
        self.set_ai_depth(self.ai_depth.saturating_sub(1));
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Engine, unless a search currently holds it
    pub fn engine(&self) -> Option<&AIEngine> {
        self.engine.as_ref()
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winner.as_ref().map(|w| w.line.as_slice())
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.vs_ai && !self.game_over && self.current_player == self.ai_player
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the current player's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over {
            return Err("Game is over".to_string());
        }

        if self.is_ai_turn() {
            return Err("Not your turn".to_string());
        }

        if !self.board.is_valid_move(pos.x, pos.y) {
            return Err("Cell is occupied".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Place a stone for the current player, then either end the game or
    /// pass the turn
    fn execute_move(&mut self, pos: Pos) {
        let player = self.current_player;
        if !self.board.place_move(pos.x, pos.y, player) {
            return;
        }

        if let Some(win) = self.board.check_win(Some(Move { pos, stone: player })) {
            info!("{:?} wins with {} stones in a row", win.winner, win.line.len());
            self.game_over = true;
            self.winner = Some(win);
            return;
        }

        self.current_player = player.opponent();
        self.message = None;
    }

    fn clear_result(&mut self) {
        self.game_over = false;
        self.winner = None;
    }

    /// Recompute the winner from the last move on the board
    fn refresh_winner(&mut self) {
        self.winner = self.board.check_win(None);
        self.game_over = self.winner.is_some();
    }

    /// Undo the last move.
    ///
    /// Against the AI, an AI move is taken back together with the human
    /// move before it so the human is to move again.
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        if self.vs_ai {
            let Some(last) = self.board.last_move() else {
                return;
            };
            self.board.undo();
            if last.stone == self.ai_player {
                self.board.undo();
            }
            self.clear_result();
            self.current_player = self.ai_player.opponent();
        } else if self.board.undo().is_some() {
            self.clear_result();
            self.current_player = self.current_player.opponent();
        }
    }

    /// Redo undone moves; against the AI a human and AI pair when possible
    pub fn redo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        if self.vs_ai {
            let Some(first) = self.board.redo() else {
                return;
            };
            self.current_player = match self.board.redo() {
                Some(_) => self.ai_player.opponent(),
                None => first.stone.opponent(),
            };
        } else if self.board.redo().is_some() {
            self.current_player = self.current_player.opponent();
        } else {
            return;
        }
        self.refresh_winner();
    }

    /// Start a fresh game on a board of the same size and drop engine caches
    pub fn new_game(&mut self) {
        self.board = Board::new(self.board.size());
        self.current_player = Stone::Black;
        self.clear_result();
        self.last_ai_result = None;
        self.message = None;
        self.invalidate_search();

        match self.engine.as_mut() {
            Some(engine) => engine.reset(),
            None => self.reset_pending = true,
        }
        info!("new game on a {0}x{0} board", self.board.size());
    }

    pub fn toggle_ai(&mut self) {
        self.vs_ai = !self.vs_ai;
        self.invalidate_search();
    }

    /// Switch which player the AI controls
    pub fn switch_ai_player(&mut self) {
        self.ai_player = self.ai_player.opponent();
        self.invalidate_search();
    }

    /// Any result of a running search no longer applies
    fn invalidate_search(&mut self) {
        self.generation += 1;
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }
        let Some(mut engine) = self.engine.take() else {
            return;
        };

        let board = self.board.clone();
        let player = self.current_player;
        let depth = self.ai_depth;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.choose_move_with_stats(&board, player, depth);
            let _ = tx.send((engine, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            generation: self.generation,
        };
    }

    /// Check if AI has finished thinking and apply its move
    pub fn check_ai_result(&mut self) {
        let AiState::Thinking { receiver, generation, .. } = &self.ai_state else {
            return;
        };
        let generation = *generation;
        let (engine, result) = match receiver.try_recv() {
            Ok(answer) => answer,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                warn!("AI worker stopped without a result");
                self.ai_state = AiState::Idle;
                self.engine = Some(AIEngine::new());
                self.reset_pending = false;
                self.message = Some("AI error".to_string());
                return;
            }
        };

        self.ai_state = AiState::Idle;
        self.restore_engine(engine);

        if generation != self.generation {
            warn!("discarding AI result for a position that changed: {:?}", result.best_move);
            return;
        }

        let best_move = result.best_move;
        self.last_ai_result = Some(result);
        match best_move {
            Some(pos) => self.execute_move(pos),
            None => self.message = Some("AI found no move".to_string()),
        }
    }

    fn restore_engine(&mut self, mut engine: AIEngine) {
        if self.reset_pending {
            engine.reset();
            self.reset_pending = false;
        }
        self.engine = Some(engine);
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Current session as a save record
    pub fn snapshot(&self) -> SavedGame {
        SavedGame::capture(
            &self.board,
            self.current_player,
            self.vs_ai,
            self.ai_player,
            self.ai_depth,
            self.game_over,
        )
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        storage::save_game(path, &self.snapshot())
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let saved = storage::load_game(path)?;
        self.apply_saved(&saved)
    }

    /// Overwrite the session with every field present in `saved`.
    ///
    /// All fields are decoded before anything is changed, so a rejected
    /// record leaves the session as it was.
    pub fn apply_saved(&mut self, saved: &SavedGame) -> Result<(), StorageError> {
        let grid = saved.decode_grid()?;
        let history = saved.decode_history()?;
        let current_player = saved.decode_current_player()?;
        let ai_player = saved.decode_ai_player()?;

        let grid = grid.unwrap_or_else(|| self.board.grid());
        let history = history.unwrap_or_else(|| self.board.history().to_vec());
        self.board = Board::from_parts(grid, history);

        if let Some(player) = current_player {
            self.current_player = player;
        }
        if let Some(vs_ai) = saved.vs_ai {
            self.vs_ai = vs_ai;
        }
        if let Some(player) = ai_player {
            self.ai_player = player;
        }
        if let Some(depth) = saved.ai_depth {
            self.set_ai_depth(depth);
        }
        if let Some(game_over) = saved.game_over {
            self.game_over = game_over;
        }

        self.winner = self.board.check_win(None);
        if self.winner.is_some() {
            self.game_over = true;
        }
        self.last_ai_result = None;
        self.message = None;
        self.invalidate_search();
        Ok(())
    }

    /// Save to the configured path, reporting the outcome as a message
    pub fn quick_save(&mut self) {
        let path = self.save_path.clone();
        self.message = Some(match self.save(&path) {
            Ok(()) => format!("Saved to {}", path.display()),
            Err(err) => {
                warn!("failed to save game: {err}");
                format!("Save failed: {err}")
            }
        });
    }

    /// Load from the configured path, reporting the outcome as a message
    pub fn quick_load(&mut self) {
        let path = self.save_path.clone();
        match self.load(&path) {
            Ok(()) => self.message = Some(format!("Loaded {}", path.display())),
            Err(err) => {
                warn!("failed to load game: {err}");
                self.message = Some(format!("Load failed: {err}"));
            }
        }
    }
}
