//! Game state management for the Caro GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{info, warn};

use crate::board::{Board, Mark, Pos};
use crate::config::{AiLevel, EngineConfig};
use crate::{AIEngine, MoveResult};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two players sharing the board
    #[default]
    PvP,
    /// Player vs AI
    PvE { human: Mark },
}

/// Why a click was not turned into a move
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,
    #[error("AI is thinking")]
    AiThinking,
    #[error("not your turn")]
    NotYourTurn,
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },
    #[error("{0} is already marked")]
    Occupied(Pos),
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for a draw
    pub winner: Option<Mark>,
    pub winning_line: Option<[Pos; 5]>,
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Mark,
    /// Moves played by both sides
    pub turn_count: u32,
    /// Moves played by human players
    pub human_moves: u32,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    /// Side the human takes when playing the AI
    human_piece: Mark,
    config: EngineConfig,
    /// Seed for reproducible AI games; entropy when unset
    seed: Option<u64>,
}

impl GameState {
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        let human_piece = match mode {
            GameMode::PvE { human } => human,
            GameMode::PvP => Mark::Cross,
        };
        Self {
            board: Board::new(),
            mode,
            current_turn: Mark::Cross,
            turn_count: 0,
            human_moves: 0,
            game_over: None,
            last_move: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            suggested_move: None,
            message: None,
            human_piece,
            config,
            seed: None,
        }
    }

    /// Make every AI decision of this game reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Mark::Cross;
        self.turn_count = 0;
        self.human_moves = 0;
        self.game_over = None;
        self.last_move = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.suggested_move = None;
        self.message = None;
        info!(mode = ?self.mode, level = ?self.config.level, "new game");
    }

    /// Start over with the human on `mark`; the AI takes the other side.
    pub fn set_human_piece(&mut self, mark: Mark) {
        self.human_piece = mark;
        if let GameMode::PvE { .. } = self.mode {
            self.mode = GameMode::PvE { human: mark };
        }
        self.reset();
    }

    pub fn human_piece(&self) -> Mark {
        self.human_piece
    }

    /// Switch between PvP and PvE without touching the board.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            GameMode::PvP => GameMode::PvE { human: self.human_piece },
            GameMode::PvE { .. } => GameMode::PvP,
        };
        // A pending AI answer belongs to the old mode
        self.ai_state = AiState::Idle;
        self.suggested_move = None;
        info!(mode = ?self.mode, "mode changed");
    }

    pub fn set_level(&mut self, level: AiLevel) {
        self.config.level = level;
        info!(level = level.name(), "AI level changed");
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn != human,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to mark `pos` for the side to move
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.game_over.is_some() {
            return Err(MoveError::GameOver);
        }

        if self.is_ai_thinking() {
            return Err(MoveError::AiThinking);
        }

        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }

        if !Pos::is_valid(i32::from(pos.row), i32::from(pos.col)) {
            return Err(MoveError::OutOfBounds { row: pos.row, col: pos.col });
        }

        if !self.board.is_empty_cell(pos) {
            return Err(MoveError::Occupied(pos));
        }

        self.execute_move(pos, true);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos, by_human: bool) {
        let mark = self.current_turn;

        self.board.mark_cell(pos, mark);
        self.turn_count += 1;
        if by_human {
            self.human_moves += 1;
        }
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;

        if let Some(line) = self.board.winning_line() {
            info!(winner = ?line.mark, turns = self.turn_count, "game over");
            self.game_over = Some(GameResult {
                winner: Some(line.mark),
                winning_line: Some(line.cells),
            });
            return;
        }

        if self.board.is_full() {
            info!(turns = self.turn_count, "game over: draw");
            self.game_over = Some(GameResult { winner: None, winning_line: None });
            return;
        }

        self.current_turn = mark.opponent();
    }

    fn engine(&self) -> AIEngine {
        match self.seed {
            Some(seed) => {
                AIEngine::with_seed(self.config, seed.wrapping_add(u64::from(self.turn_count)))
            }
            None => AIEngine::with_config(self.config),
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board;
        let ai = self.current_turn;
        let depth = self.config.max_depth;
        let mut engine = self.engine();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, ai, ai.opponent(), depth);
            // The receiver is gone if the game was reset meanwhile
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.apply_ai_result(result);
    }

    /// Play the engine's move, or a random legal one if it is unusable.
    fn apply_ai_result(&mut self, result: MoveResult) {
        self.last_ai_result = Some(result);

        let (pos, replaced) = match result.best_move {
            Some(pos) if self.board.is_empty_cell(pos) => (Some(pos), false),
            other => {
                warn!(returned = ?other, "invalid AI move, playing random");
                let random = self.board.empty_cells().choose(&mut rand::thread_rng()).copied();
                (random, true)
            }
        };

        if let Some(pos) = pos {
            self.execute_move(pos, false);
        }
        if replaced {
            self.message = Some("AI move was invalid; played a random cell".to_string());
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the engine for a move suggestion (PvP only)
    pub fn request_hint(&mut self) {
        if self.game_over.is_some() {
            return;
        }
        if self.mode != GameMode::PvP {
            self.message = Some("Hints are available in PvP mode".to_string());
            return;
        }

        let mark = self.current_turn;
        let depth = self.config.max_depth;
        let result = self.engine().get_move_with_stats(&self.board, mark, mark.opponent(), depth);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchType;

    fn pvp() -> GameState {
        GameState::new(GameMode::PvP, EngineConfig::default()).with_seed(11)
    }

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() {
            assert!(Instant::now() < deadline, "AI did not answer");
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
    }

    #[test]
    fn test_new_game() {
        let state = pvp();
        assert_eq!(state.current_turn, Mark::Cross);
        assert_eq!(state.turn_count, 0);
        assert!(state.board.is_board_empty());
        assert!(state.is_human_turn());
        assert!(!state.is_ai_turn());
    }

    #[test]
    fn test_pvp_alternates() {
        let mut state = pvp();
        state.try_place_mark(Pos::new(4, 4)).unwrap();
        assert_eq!(state.current_turn, Mark::Circle);
        state.try_place_mark(Pos::new(4, 5)).unwrap();
        assert_eq!(state.current_turn, Mark::Cross);

        assert_eq!(state.board.get(Pos::new(4, 4)), Mark::Cross);
        assert_eq!(state.board.get(Pos::new(4, 5)), Mark::Circle);
        assert_eq!(state.turn_count, 2);
        assert_eq!(state.human_moves, 2);
        assert_eq!(state.last_move, Some(Pos::new(4, 5)));
    }

    #[test]
    fn test_rejected_moves() {
        let mut state = pvp();
        state.try_place_mark(Pos::new(4, 4)).unwrap();

        assert_eq!(
            state.try_place_mark(Pos::new(4, 4)),
            Err(MoveError::Occupied(Pos::new(4, 4)))
        );
        assert_eq!(
            state.try_place_mark(Pos { row: 10, col: 2 }),
            Err(MoveError::OutOfBounds { row: 10, col: 2 })
        );
        assert_eq!(state.turn_count, 1);
        assert_eq!(state.current_turn, Mark::Circle);
    }

    #[test]
    fn test_not_your_turn_against_ai() {
        let mut state = GameState::new(GameMode::PvE { human: Mark::Circle }, EngineConfig::default());
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place_mark(Pos::new(0, 0)), Err(MoveError::NotYourTurn));
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = pvp();
        for col in 0..4 {
            state.try_place_mark(Pos::new(5, col)).unwrap();
            state.try_place_mark(Pos::new(9, col)).unwrap();
        }
        state.try_place_mark(Pos::new(5, 4)).unwrap();

        let result = state.game_over.unwrap();
        assert_eq!(result.winner, Some(Mark::Cross));
        assert_eq!(
            result.winning_line,
            Some([Pos::new(5, 0), Pos::new(5, 1), Pos::new(5, 2), Pos::new(5, 3), Pos::new(5, 4)])
        );
        assert_eq!(state.try_place_mark(Pos::new(0, 0)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut crosses = Vec::new();
        let mut circles = Vec::new();
        for row in 0..10u8 {
            for col in 0..10u8 {
                if ((col + 2 * row) / 2) % 2 == 0 {
                    crosses.push(Pos::new(row, col));
                } else {
                    circles.push(Pos::new(row, col));
                }
            }
        }
        assert_eq!(crosses.len(), circles.len());

        let mut state = pvp();
        for (x, o) in crosses.into_iter().zip(circles) {
            state.try_place_mark(x).unwrap();
            state.try_place_mark(o).unwrap();
        }

        assert!(state.board.is_full());
        assert_eq!(state.game_over, Some(GameResult { winner: None, winning_line: None }));
        assert_eq!(state.turn_count, 100);
    }

    #[test]
    fn test_set_human_piece_resets() {
        let mut state = GameState::new(GameMode::PvE { human: Mark::Cross }, EngineConfig::default());
        state.try_place_mark(Pos::new(4, 4)).unwrap();

        state.set_human_piece(Mark::Circle);
        assert!(state.board.is_board_empty());
        assert_eq!(state.mode, GameMode::PvE { human: Mark::Circle });
        assert_eq!(state.current_turn, Mark::Cross);
        assert!(state.is_ai_turn());
    }

    #[test]
    fn test_toggle_mode_keeps_board() {
        let mut state = pvp();
        state.set_human_piece(Mark::Circle);
        state.try_place_mark(Pos::new(4, 4)).unwrap();

        state.toggle_mode();
        assert_eq!(state.mode, GameMode::PvE { human: Mark::Circle });
        assert_eq!(state.board.get(Pos::new(4, 4)), Mark::Cross);
        // Circle to move, and the human is Circle
        assert!(state.is_human_turn());

        state.toggle_mode();
        assert_eq!(state.mode, GameMode::PvP);
    }

    #[test]
    fn test_ai_opens_in_center() {
        let mut state =
            GameState::new(GameMode::PvE { human: Mark::Circle }, EngineConfig::default())
                .with_seed(3);
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        assert_eq!(state.try_place_mark(Pos::new(0, 0)), Err(MoveError::AiThinking));

        wait_for_ai(&mut state);

        let pos = state.last_move.unwrap();
        assert!(pos.is_central());
        assert_eq!(state.board.get(pos), Mark::Cross);
        assert_eq!(state.current_turn, Mark::Circle);
        assert_eq!(state.turn_count, 1);
        assert_eq!(state.human_moves, 0);
        assert_eq!(state.last_ai_result.unwrap().search_type, SearchType::Opening);
    }

    #[test]
    fn test_ai_blocks_human_four() {
        let mut state =
            GameState::new(GameMode::PvE { human: Mark::Cross }, EngineConfig::default())
                .with_seed(5);
        for col in 0..4 {
            state.board.mark_cell(Pos::new(5, col), Mark::Cross);
        }
        for row in 0..3 {
            state.board.mark_cell(Pos::new(row, 9), Mark::Circle);
        }
        state.current_turn = Mark::Circle;

        state.start_ai_thinking();
        wait_for_ai(&mut state);

        assert_eq!(state.last_move, Some(Pos::new(5, 4)));
        assert_eq!(state.last_ai_result.unwrap().search_type, SearchType::Block);
        assert!(state.game_over.is_none());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_invalid_ai_move_replaced() {
        let mut state =
            GameState::new(GameMode::PvE { human: Mark::Cross }, EngineConfig::default());
        state.try_place_mark(Pos::new(4, 4)).unwrap();

        state.apply_ai_result(MoveResult {
            best_move: Some(Pos::new(4, 4)),
            score: 0,
            search_type: SearchType::Minimax,
            time_ms: 0,
            nodes: 0,
        });

        assert_eq!(state.board.marked_count(), 2);
        assert_eq!(state.board.get(Pos::new(4, 4)), Mark::Cross);
        assert_ne!(state.last_move, Some(Pos::new(4, 4)));
        assert_eq!(state.current_turn, Mark::Cross);
        assert!(state.message.is_some());
    }

    #[test]
    fn test_hint_only_in_pvp() {
        let mut state = pvp();
        state.try_place_mark(Pos::new(4, 4)).unwrap();
        state.request_hint();
        let hint = state.suggested_move.unwrap();
        assert!(state.board.is_empty_cell(hint));

        // Playing clears it
        state.try_place_mark(hint).unwrap();
        assert_eq!(state.suggested_move, None);

        let mut pve = GameState::new(GameMode::PvE { human: Mark::Cross }, EngineConfig::default());
        pve.request_hint();
        assert_eq!(pve.suggested_move, None);
        assert!(pve.message.is_some());
    }

    #[test]
    fn test_set_level() {
        let mut state = pvp();
        state.set_level(AiLevel::Random);
        assert_eq!(state.config().level, AiLevel::Random);
    }
}
