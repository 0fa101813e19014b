mod play;
mod random;
mod replay;

use clap::{Parser, Subcommand};
use go_rules::config::GameConfig;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "go-rules", about = "Place stones and capture groups on a Go board")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, default_value = "go-rules.toml")]
    config: PathBuf,

    /// Board size, overriding the configuration file
    #[arg(long, global = true)]
    size: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play on an interactive terminal board
    Play {
        /// Where to write logs while the board is on screen
        #[arg(long, default_value = "go-rules.log")]
        log_file: PathBuf,
    },
    /// Replay an SGF record and print the final position
    Replay { file: PathBuf },
    /// Play random moves and print the final position
    Random {
        #[arg(long, default_value_t = 100)]
        moves: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Print the final position as SGF instead of a diagram
        #[arg(long)]
        sgf: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(command: &Command) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match command {
        // The terminal belongs to the board while playing.
        Command::Play { log_file } => {
            let log_file = File::create(log_file)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .try_init();
        }
        _ => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }

    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    init_logging(&cli.command)?;

    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(size) = cli.size {
        config.board_size = size;
    }

    match cli.command {
        Command::Play { .. } => play::run(config.new_game()?),
        Command::Replay { file } => replay::run(&file, &config)?,
        Command::Random { moves, seed, sgf } => {
            random::run(config.new_game()?, moves, seed, sgf)?
        }
    }

    Ok(())
}
