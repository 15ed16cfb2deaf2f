use std::{env, fs};

use anyhow::{bail, Context, Result};
use checkers_engine::{utils::replay, Color, Game};

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        bail!("Usage: replay <TRANSCRIPT> [BLACK_NAME WHITE_NAME]");
    };
    let black = args.get(2).map(String::as_str).unwrap_or("Black");
    let white = args.get(3).map(String::as_str).unwrap_or("White");
    let transcript =
        fs::read_to_string(path).with_context(|| format!("Failed to read transcript '{path}'"))?;

    let mut game = Game::default();
    game.create_player(black, Color::Black);
    game.create_player(white, Color::White);
    let result = replay(&mut game, &transcript);
    println!("{}", game.board());
    let stats = result.with_context(|| format!("Replay of '{path}' stopped"))?;
    println!(" stats: {stats}");
    match game.winner() {
        Some(winner) => println!(" winner: {} ({})", winner.name(), winner.color()),
        None => println!(" winner: Game has not ended, {} to move", game.current_turn()),
    }
    Ok(())
}
