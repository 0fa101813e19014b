use go_rules::error::SgfError;
use go_rules::generation::play_random_moves;
use go_rules::go::GoGame;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

pub fn run(mut game: GoGame, moves: usize, seed: u64, sgf: bool) -> Result<(), SgfError> {
    let mut rng = StdRng::seed_from_u64(seed);

    let playout = play_random_moves(&mut game, moves, &mut rng);

    info!(seed, moves = playout.moves_played, "finished random playout");

    if sgf {
        println!("{}", game.board().to_sgf()?);
        return Ok(());
    }

    println!("{}\n", game.board());
    println!(
        "{} moves played, {} stones captured, {} to play",
        playout.moves_played,
        playout.stones_captured,
        game.current_player()
    );

    Ok(())
}
