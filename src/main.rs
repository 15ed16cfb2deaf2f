use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{ensure, Context, Result};
use checkers_engine::{utils::parse_move_line, Color, Game};
use log::{info, warn};

fn prompt(game: &Game) -> Result<()> {
    let up = game.current_turn();
    let name = game
        .find_player_by_color(up)
        .map(|player| player.name().to_string())
        .unwrap_or_default();
    println!("\n{}", game.board());
    if game.jump_just_occurred() {
        let jumper = game
            .find_player_by_color(up.opposite())
            .map(|player| player.name().to_string())
            .unwrap_or_default();
        println!("{jumper} may keep jumping.");
    }
    print!("{name} ({up}) to move [name row,col row,col]: ");
    io::stdout().flush().context("Failed to flush stdout")
}

fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let args: Vec<String> = env::args().collect();
    let black = args.get(1).cloned().unwrap_or_else(|| "Black".to_string());
    let white = args.get(2).cloned().unwrap_or_else(|| "White".to_string());
    ensure!(black != white, "Players need different names, both are '{black}'");

    let mut game = Game::default();
    game.create_player(black, Color::Black);
    game.create_player(white, Color::White);
    info!("New game started");

    prompt(&game)?;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read move from stdin")?;
        if line.trim().is_empty() {
            prompt(&game)?;
            continue;
        }
        match parse_move_line(&line) {
            Ok(parsed) => match game.submit_move(&parsed.player, parsed.start, parsed.end) {
                Ok(0) => (),
                Ok(captured) => println!("{} captured {captured} piece(s)!", parsed.player),
                Err(err) => {
                    warn!("Move '{}' rejected: {err:?}", line.trim());
                    println!("{err}. Try again.");
                }
            },
            Err(reason) => println!("{reason}"),
        }
        if let Some(winner) = game.winner() {
            println!("\n{}", game.board());
            println!("{} ({}) wins!", winner.name(), winner.color());
            return Ok(());
        }
        prompt(&game)?;
    }
    println!("\nGame has not ended.");
    Ok(())
}
