use super::{BoardCell, BoardPosition, BoardState, GoGame, GoPlayer};
use crate::error::SgfError;
use sgf_parser::{Action, Color, GameNode, GameTree, SgfToken};

/// Largest board SGF coordinates can express.
const MAX_SGF_SIZE: usize = 52;

impl From<Color> for GoPlayer {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => GoPlayer::Black,
            Color::White => GoPlayer::White,
        }
    }
}

impl From<GoPlayer> for Color {
    fn from(player: GoPlayer) -> Self {
        match player {
            GoPlayer::Black => Color::Black,
            GoPlayer::White => Color::White,
        }
    }
}

// SGF coordinates are 1-based column, row pairs.
fn position_from_sgf((i, j): (u8, u8)) -> Result<BoardPosition, SgfError> {
    match (i.checked_sub(1), j.checked_sub(1)) {
        (Some(col), Some(row)) => Ok(BoardPosition::new(row.into(), col.into())),
        _ => Err(SgfError::Coordinate(i, j)),
    }
}

fn position_to_sgf(position: BoardPosition) -> Result<(u8, u8), SgfError> {
    let col = u8::try_from(position.col + 1);
    let row = u8::try_from(position.row + 1);

    match (col, row) {
        (Ok(col), Ok(row)) => Ok((col, row)),
        _ => Err(SgfError::BoardTooLarge(position.row.max(position.col) + 1)),
    }
}

// The board size a record declares in its root node, if any.
fn declared_size(sgf: &GameTree) -> Result<Option<usize>, SgfError> {
    let root = match sgf.nodes.first() {
        Some(root) => root,
        None => return Ok(None),
    };

    for token in root.tokens.iter() {
        if let SgfToken::Size(width, height) = *token {
            if width != height {
                return Err(SgfError::NonSquareBoard(width, height));
            }

            let size = usize::try_from(width).unwrap_or(usize::MAX);
            if size > MAX_SGF_SIZE {
                return Err(SgfError::BoardTooLarge(size));
            }

            return Ok(Some(size));
        }
    }

    Ok(None)
}

impl GoGame {
    /// Replays an SGF record.
    ///
    /// The board size is taken from the record's `SZ` property, or is
    /// `default_size` when the record has none. Setup stones (`AB`/`AW`) are put
    /// down without resolving captures. Moves go through the normal rules with
    /// turn order enforced, starting with black.
    pub fn from_sgf(sgf_string: &str, default_size: usize) -> Result<GoGame, SgfError> {
        let sgf = sgf_parser::parse(sgf_string).map_err(|e| SgfError::Parse(format!("{:?}", e)))?;

        if sgf.count_variations() != 0 {
            return Err(SgfError::Variations);
        }

        let size = declared_size(&sgf)?.unwrap_or(default_size);
        let mut game = GoGame::new(size)?;

        for node in sgf.iter() {
            for token in node.tokens.iter() {
                match token {
                    SgfToken::Add { color, coordinate } => {
                        let position = position_from_sgf(*coordinate)?;
                        game.board_mut().place(position, (*color).into())?;
                    }
                    SgfToken::Move { color, action } => match action {
                        Action::Move(i, j) => {
                            let position = position_from_sgf((*i, *j))?;
                            game.play_move_for_player(position, (*color).into())?;
                        }
                        _ => return Err(SgfError::Pass),
                    },
                    _ => {}
                }
            }
        }

        Ok(game)
    }
}

impl BoardState {
    /// Writes the position as a single node holding the board size and the setup stones.
    pub fn to_sgf(&self) -> Result<String, SgfError> {
        let size = match u32::try_from(self.size()) {
            Ok(size) if self.size() <= MAX_SGF_SIZE => size,
            _ => return Err(SgfError::BoardTooLarge(self.size())),
        };

        let mut tokens = vec![SgfToken::Size(size, size)];

        for &player in GoPlayer::both() {
            for position in self.positions() {
                if self.get(position)? == BoardCell::Occupied(player) {
                    tokens.push(SgfToken::Add {
                        color: player.into(),
                        coordinate: position_to_sgf(position)?,
                    });
                }
            }
        }

        let node = GameNode { tokens };

        let tree = GameTree {
            nodes: vec![node],
            variations: Vec::new(),
        };

        Ok(tree.into())
    }
}
