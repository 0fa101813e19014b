use go_rules::config::GameConfig;
use go_rules::go::{GoGame, GoPlayer};
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run(file: &Path, config: &GameConfig) -> Result<(), Box<dyn Error>> {
    config.validate()?;

    let sgf_file = fs::read_to_string(file)?;
    let game = GoGame::from_sgf(&sgf_file, config.board_size)?;

    info!(file = %file.display(), "replayed record");

    println!("{}\n", game.board());
    for &player in GoPlayer::both() {
        println!("{}: {} stones", player, game.board().stone_count(player));
    }
    println!("{} to play", game.current_player());

    Ok(())
}
