use super::{BoardCell, BoardPosition, BoardState, GoPlayer};
use crate::error::BoardError;
use std::collections::HashSet;
use tracing::trace;

/// Removes every opposing group next to `position` that has no liberties left.
///
/// Call this right after `just_played_by` has placed a stone at `position`.
/// Neighbours are examined right, down, left, up and the removed positions are
/// returned in that order, each group in depth-first discovery order. Groups
/// that still have a liberty are not touched.
///
/// The stone's own group is never checked, so a suicidal placement stays on the board.
pub fn resolve_captures(
    board: &mut BoardState,
    position: BoardPosition,
    just_played_by: GoPlayer,
) -> Result<Vec<BoardPosition>, BoardError> {
    board.get(position)?;

    let target = BoardCell::Occupied(just_played_by.flip());
    let neighbours: Vec<_> = board.neighbours(position).collect();
    let mut captured = Vec::new();

    for neighbour in neighbours {
        // An earlier neighbour may have belonged to the same group, which is gone by now.
        if board.get(neighbour)? != target {
            continue;
        }

        if let Some(group) = captured_group(board, neighbour, target) {
            for &stone in &group {
                board.remove(stone)?;
            }

            captured.extend(group);
        }
    }

    Ok(captured)
}

/// Runs a liberty search from `root` and returns the group if it has none.
///
/// The board is only read. Cells outside the grid and cells of any colour
/// other than `target` act as walls; the first empty cell reached ends the search.
pub(crate) fn captured_group(
    board: &BoardState,
    root: BoardPosition,
    target: BoardCell,
) -> Option<Vec<BoardPosition>> {
    let mut visited = HashSet::new();
    let mut group = Vec::new();
    let mut pending = vec![root];

    while let Some(position) = pending.pop() {
        match board.get(position) {
            Ok(BoardCell::Empty) => {
                trace!(%root, liberty = %position, "group has a liberty");
                return None;
            }
            Ok(cell) if cell == target => {
                if !visited.insert(position) {
                    continue;
                }

                group.push(position);

                // Reversed so that neighbours pop in right, down, left, up order.
                let neighbours: Vec<_> = board.neighbours(position).collect();
                pending.extend(neighbours.into_iter().rev());
            }
            _ => {}
        }
    }

    trace!(%root, stones = group.len(), "group has no liberties");

    Some(group)
}
