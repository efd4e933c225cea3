//! Game state management
//!
//! [`GameState`] is the single owner of the board. The UI only mutates it
//! through [`GameState::make_move`] and [`GameState::reset`]; everything else
//! is read-only.

use tracing::{debug, info};

use super::{GameStatus, MoveOutcome};
use crate::board::{Board, Player, Pos};
use crate::error::MoveError;
use crate::rules::find_winning_line;

/// Main game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
    winning_cells: Vec<Pos>,
    last_move: Option<Pos>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            game_over: false,
            winner: None,
            winning_cells: Vec::new(),
            last_move: None,
        }
    }

    /// Put every field back to its starting value, keeping this instance
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.game_over = false;
        self.winner = None;
        self.winning_cells.clear();
        self.last_move = None;
        info!("new game started");
    }

    /// Attempt to place the current player's mark at `(row, col)`.
    ///
    /// Returns `false` and leaves the state untouched when the game is over,
    /// the coordinates are off the board, or the cell is taken.
    pub fn make_move(&mut self, row: i32, col: i32) -> bool {
        self.try_move(row, col).is_ok()
    }

    /// Same as [`make_move`](Self::make_move), reporting why a move was refused
    pub fn try_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        let pos = self
            .validate_move(row, col)
            .inspect_err(|err| debug!(row, col, %err, "move rejected"))?;
        Ok(self.execute_move(pos))
    }

    fn validate_move(&self, row: i32, col: i32) -> Result<Pos, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }

        let pos = Pos::checked(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { row, col });
        }

        Ok(pos)
    }

    /// Place the mark and settle win/draw/turn
    fn execute_move(&mut self, pos: Pos) -> MoveOutcome {
        let player = self.current_player;

        self.board.set(pos, player.mark());
        self.last_move = Some(pos);
        debug!(row = pos.row, col = pos.col, %player, "mark placed");

        if self.check_win(pos) {
            self.game_over = true;
            self.winner = Some(player);
            info!(%player, cells = ?self.winning_cells, "game won");
            return MoveOutcome::Win(player);
        }

        if self.board.is_full() {
            self.game_over = true;
            info!("game drawn");
            return MoveOutcome::Draw;
        }

        self.current_player = player.opponent();
        MoveOutcome::Continue
    }

    /// Run win detection from the just-placed cell, recording the line
    fn check_win(&mut self, pos: Pos) -> bool {
        match find_winning_line(&self.board, pos, self.current_player) {
            Some(line) => {
                self.winning_cells = line;
                true
            }
            None => {
                self.winning_cells.clear();
                false
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is, or who made the final move once the game is over
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Cells of the winning line, empty unless someone won
    pub fn winning_cells(&self) -> &[Pos] {
        &self.winning_cells
    }

    pub fn is_winning_cell(&self, pos: Pos) -> bool {
        self.winning_cells.contains(&pos)
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.board.stone_count()
    }

    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner) {
            (false, _) => GameStatus::InProgress {
                to_move: self.current_player,
            },
            (true, Some(player)) => GameStatus::Won(player),
            (true, None) => GameStatus::Draw,
        }
    }
}
