mod board;
mod capture;
mod sgf_conversion;

pub use board::{BoardState, DEFAULT_BOARD_SIZE};
pub use capture::resolve_captures;

use crate::error::{BoardError, MoveError};
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GoPlayer {
    Black,
    White,
}

impl GoPlayer {
    pub fn flip(self) -> GoPlayer {
        match self {
            GoPlayer::Black => GoPlayer::White,
            GoPlayer::White => GoPlayer::Black,
        }
    }

    pub fn both() -> &'static [GoPlayer] {
        &[GoPlayer::Black, GoPlayer::White]
    }

    pub fn name(self) -> &'static str {
        match self {
            GoPlayer::Black => "Black",
            GoPlayer::White => "White",
        }
    }
}

impl Display for GoPlayer {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoardCell {
    Empty,
    Occupied(GoPlayer),
}

impl BoardCell {
    pub fn symbol(self) -> char {
        match self {
            BoardCell::Empty => '.',
            BoardCell::Occupied(GoPlayer::Black) => 'X',
            BoardCell::Occupied(GoPlayer::White) => 'O',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardPosition {
    pub row: usize,
    pub col: usize,
}

impl BoardPosition {
    pub fn new(row: usize, col: usize) -> BoardPosition {
        BoardPosition { row, col }
    }
}

impl Display for BoardPosition {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a UI needs to redraw after a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub accepted: bool,
    pub captured: Vec<BoardPosition>,
    pub next_player: GoPlayer,
}

/// A single game. Owns its board, so any number of games can run side by side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoGame {
    board: BoardState,
}

impl GoGame {
    pub fn new(size: usize) -> Result<GoGame, BoardError> {
        Ok(GoGame::from_board(BoardState::new(size)?))
    }

    pub fn from_board(board: BoardState) -> GoGame {
        GoGame { board }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut BoardState {
        &mut self.board
    }

    pub fn current_player(&self) -> GoPlayer {
        self.board.active_player()
    }

    pub fn cell_state(&self, row: usize, col: usize) -> Result<BoardCell, BoardError> {
        self.board.get(BoardPosition::new(row, col))
    }

    /// Places a stone for the side to move, resolves captures and passes the turn.
    ///
    /// Returns the captured positions. On error nothing has changed.
    pub fn try_place_stone(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<Vec<BoardPosition>, BoardError> {
        let position = BoardPosition::new(row, col);
        let player = self.current_player();

        self.board.place(position, player)?;
        let captured = resolve_captures(&mut self.board, position, player)?;
        self.board.toggle_player();

        debug!(%player, %position, captured = captured.len(), "placed stone");

        Ok(captured)
    }

    pub fn place_stone(&mut self, row: usize, col: usize) -> Placement {
        match self.try_place_stone(row, col) {
            Ok(captured) => Placement {
                accepted: true,
                captured,
                next_player: self.current_player(),
            },
            Err(err) => {
                debug!(%err, "rejected placement");

                Placement {
                    accepted: false,
                    captured: Vec::new(),
                    next_player: self.current_player(),
                }
            }
        }
    }

    pub fn play_move_for_player(
        &mut self,
        position: BoardPosition,
        player: GoPlayer,
    ) -> Result<Vec<BoardPosition>, MoveError> {
        if self.current_player() != player {
            return Err(MoveError::OutOfTurn {
                expected: self.current_player(),
                attempted: player,
            });
        }

        Ok(self.try_place_stone(position.row, position.col)?)
    }

    pub fn reset_game(&mut self) {
        self.board.clear();
        debug!(size = self.board.size(), "reset game");
    }
}

impl Default for GoGame {
    fn default() -> Self {
        GoGame::from_board(BoardState::default())
    }
}
