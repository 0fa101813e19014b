use super::{BoardCell, BoardPosition, GoPlayer};
use crate::error::BoardError;
use std::fmt;
use std::fmt::{Display, Formatter};

pub const DEFAULT_BOARD_SIZE: usize = 9;

/// A square grid of cells together with the side to move.
///
/// Cells are stored row-major. The size is fixed until [`BoardState::reset`]
/// replaces the grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoardState {
    size: usize,
    cells: Vec<BoardCell>,
    active_player: GoPlayer,
}

impl BoardState {
    pub fn new(size: usize) -> Result<BoardState, BoardError> {
        let cell_count = match size.checked_mul(size) {
            Some(count) if size > 0 => count,
            _ => return Err(BoardError::InvalidSize(size)),
        };

        Ok(BoardState {
            size,
            cells: vec![BoardCell::Empty; cell_count],
            active_player: GoPlayer::Black,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, position: BoardPosition) -> bool {
        position.row < self.size && position.col < self.size
    }

    fn index(&self, position: BoardPosition) -> Result<usize, BoardError> {
        if self.contains(position) {
            Ok(position.row * self.size + position.col)
        } else {
            Err(BoardError::OutOfBounds {
                position,
                size: self.size,
            })
        }
    }

    pub fn get(&self, position: BoardPosition) -> Result<BoardCell, BoardError> {
        Ok(self.cells[self.index(position)?])
    }

    pub fn place(&mut self, position: BoardPosition, player: GoPlayer) -> Result<(), BoardError> {
        let index = self.index(position)?;

        if self.cells[index] != BoardCell::Empty {
            return Err(BoardError::OccupiedCell(position));
        }

        self.cells[index] = BoardCell::Occupied(player);

        Ok(())
    }

    pub fn remove(&mut self, position: BoardPosition) -> Result<(), BoardError> {
        let index = self.index(position)?;
        self.cells[index] = BoardCell::Empty;

        Ok(())
    }

    /// Empties every cell and hands the move back to black, keeping the size.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = BoardCell::Empty);
        self.active_player = GoPlayer::Black;
    }

    /// Replaces the grid with an empty one of `size`. On error the board is left as it was.
    pub fn reset(&mut self, size: usize) -> Result<(), BoardError> {
        *self = BoardState::new(size)?;

        Ok(())
    }

    pub fn active_player(&self) -> GoPlayer {
        self.active_player
    }

    pub fn set_active_player(&mut self, player: GoPlayer) {
        self.active_player = player;
    }

    pub fn toggle_player(&mut self) {
        self.active_player = self.active_player.flip();
    }

    pub fn positions(&self) -> impl Iterator<Item = BoardPosition> {
        let size = self.size;

        (0..size).flat_map(move |row| (0..size).map(move |col| BoardPosition::new(row, col)))
    }

    pub fn empty_positions(&self) -> impl Iterator<Item = BoardPosition> + '_ {
        self.positions()
            .filter(move |&position| self.get(position) == Ok(BoardCell::Empty))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[BoardCell]> {
        self.cells.chunks(self.size)
    }

    /// The in-bounds orthogonal neighbours of `position`, ordered right, down, left, up.
    pub fn neighbours(&self, position: BoardPosition) -> impl Iterator<Item = BoardPosition> + '_ {
        let BoardPosition { row, col } = position;

        [
            col.checked_add(1).map(|col| BoardPosition::new(row, col)),
            row.checked_add(1).map(|row| BoardPosition::new(row, col)),
            col.checked_sub(1).map(|col| BoardPosition::new(row, col)),
            row.checked_sub(1).map(|row| BoardPosition::new(row, col)),
        ]
        .into_iter()
        .flatten()
        .filter(move |&neighbour| self.contains(neighbour))
    }

    pub fn stone_count(&self, player: GoPlayer) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == BoardCell::Occupied(player))
            .count()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![BoardCell::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
            active_player: GoPlayer::Black,
        }
    }
}

impl Display for BoardState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }

            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            f.write_str(&line.join(" "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn pos(row: usize, col: usize) -> BoardPosition {
        BoardPosition::new(row, col)
    }

    #[test]
    fn new_board_is_empty() {
        let board = BoardState::new(9).unwrap();

        assert_eq!(board.size(), 9);
        assert!(board
            .positions()
            .all(|position| board.get(position) == Ok(BoardCell::Empty)));
        assert_eq!(board.positions().count(), 81);
    }

    #[test]
    fn black_moves_first() {
        assert_eq!(BoardState::new(5).unwrap().active_player(), GoPlayer::Black);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(BoardState::new(0), Err(BoardError::InvalidSize(0)));
    }

    #[test]
    fn overflowing_size_is_rejected() {
        let size = usize::MAX / 2;

        assert_eq!(BoardState::new(size), Err(BoardError::InvalidSize(size)));
        assert_eq!(
            BoardState::new(usize::MAX),
            Err(BoardError::InvalidSize(usize::MAX))
        );
    }

    #[test]
    fn can_place_stone() {
        let mut board = BoardState::new(9).unwrap();
        board.place(pos(2, 3), GoPlayer::White).unwrap();

        assert_eq!(board.get(pos(2, 3)), Ok(BoardCell::Occupied(GoPlayer::White)));
        assert_eq!(board.get(pos(3, 2)), Ok(BoardCell::Empty));
    }

    #[test]
    fn cannot_place_in_occupied_cell() {
        let mut board = BoardState::new(9).unwrap();
        board.place(pos(0, 0), GoPlayer::Black).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(pos(0, 0), GoPlayer::White),
            Err(BoardError::OccupiedCell(pos(0, 0)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut board = BoardState::new(9).unwrap();
        let expected = Err(BoardError::OutOfBounds {
            position: pos(9, 0),
            size: 9,
        });

        assert_eq!(board.get(pos(9, 0)), expected.map(|()| BoardCell::Empty));
        assert_eq!(board.place(pos(9, 0), GoPlayer::Black), expected);
        assert_eq!(board.remove(pos(9, 0)), expected);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut board = BoardState::new(3).unwrap();
        board.place(pos(1, 1), GoPlayer::Black).unwrap();

        board.remove(pos(1, 1)).unwrap();
        board.remove(pos(1, 1)).unwrap();

        assert_eq!(board.get(pos(1, 1)), Ok(BoardCell::Empty));
    }

    #[test]
    fn toggling_alternates_players() {
        let mut board = BoardState::new(9).unwrap();
        board.toggle_player();
        assert_eq!(board.active_player(), GoPlayer::White);

        board.toggle_player();
        assert_eq!(board.active_player(), GoPlayer::Black);

        board.set_active_player(GoPlayer::White);
        assert_eq!(board.active_player(), GoPlayer::White);
    }

    #[test]
    fn reset_changes_size_and_clears() {
        let mut board = BoardState::new(9).unwrap();
        board.place(pos(4, 4), GoPlayer::Black).unwrap();
        board.toggle_player();

        board.reset(13).unwrap();

        assert_eq!(board, BoardState::new(13).unwrap());
    }

    #[test]
    fn failed_reset_leaves_board_untouched() {
        let mut board = BoardState::new(9).unwrap();
        board.place(pos(4, 4), GoPlayer::Black).unwrap();
        let before = board.clone();

        assert_eq!(board.reset(0), Err(BoardError::InvalidSize(0)));
        assert_eq!(board.reset(usize::MAX), Err(BoardError::InvalidSize(usize::MAX)));
        assert_eq!(board, before);
        assert_eq!(board.get(pos(4, 4)), Ok(BoardCell::Occupied(GoPlayer::Black)));
    }

    #[test]
    fn clear_keeps_size() {
        let mut board = BoardState::new(5).unwrap();
        board.place(pos(0, 4), GoPlayer::White).unwrap();
        board.toggle_player();

        board.clear();

        assert_eq!(board, BoardState::new(5).unwrap());
    }

    #[test]
    fn neighbours_are_ordered_right_down_left_up() {
        let board = BoardState::new(9).unwrap();
        let neighbours: Vec<_> = board.neighbours(pos(4, 4)).collect();

        assert_eq!(neighbours, vec![pos(4, 5), pos(5, 4), pos(4, 3), pos(3, 4)]);
    }

    #[test]
    fn corner_has_two_neighbours() {
        let board = BoardState::new(9).unwrap();

        assert_eq!(
            board.neighbours(pos(0, 0)).collect::<Vec<_>>(),
            vec![pos(0, 1), pos(1, 0)]
        );
        assert_eq!(
            board.neighbours(pos(8, 8)).collect::<Vec<_>>(),
            vec![pos(8, 7), pos(7, 8)]
        );
    }

    #[test]
    fn single_cell_board_has_no_neighbours() {
        let board = BoardState::new(1).unwrap();

        assert_eq!(board.neighbours(pos(0, 0)).count(), 0);
    }

    #[test]
    fn counts_stones() {
        let mut board = BoardState::new(9).unwrap();
        board.place(pos(0, 0), GoPlayer::Black).unwrap();
        board.place(pos(0, 1), GoPlayer::Black).unwrap();
        board.place(pos(1, 0), GoPlayer::White).unwrap();

        assert_eq!(board.stone_count(GoPlayer::Black), 2);
        assert_eq!(board.stone_count(GoPlayer::White), 1);
        assert_eq!(board.empty_positions().count(), 78);
    }

    #[test]
    fn display() {
        let mut board = BoardState::new(4).unwrap();
        board.place(pos(0, 0), GoPlayer::Black).unwrap();
        board.place(pos(1, 2), GoPlayer::White).unwrap();
        board.place(pos(3, 3), GoPlayer::Black).unwrap();

        assert_snapshot!(board.to_string(), @r"
        X . . .
        . . O .
        . . . .
        . . . X
        ");
    }
}
