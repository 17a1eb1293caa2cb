use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use wrapsnake::config::GameConfig;
use wrapsnake::game::{play, Game};
use wrapsnake::input::TerminalKeys;

fn main() -> Result<()> {
    // stdout belongs to the board
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut rng = rand::thread_rng();
    let mut game = Game::new(&GameConfig::default(), &mut rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = play(&mut game, &mut TerminalKeys, &mut out, &mut rng) {
        tracing::error!(?err, "game aborted");
        return Err(err);
    }

    Ok(())
}
