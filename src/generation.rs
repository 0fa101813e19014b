use crate::go::GoGame;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Playout {
    pub moves_played: usize,
    pub stones_captured: usize,
}

/// Plays up to `moves` placements on uniformly chosen empty cells.
///
/// Stops early once the board has no empty cell left.
pub fn play_random_moves<R: Rng + ?Sized>(game: &mut GoGame, moves: usize, rng: &mut R) -> Playout {
    let mut playout = Playout::default();

    for _ in 0..moves {
        let empty: Vec<_> = game.board().empty_positions().collect();

        let position = match empty.choose(rng) {
            Some(&position) => position,
            None => break,
        };

        let placement = game.place_stone(position.row, position.col);
        debug_assert!(placement.accepted);

        playout.moves_played += 1;
        playout.stones_captured += placement.captured.len();
    }

    playout
}
