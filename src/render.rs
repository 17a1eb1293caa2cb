use std::io::{self, Write};

use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, queue};

use crate::game::Game;
use crate::grid::Point;

const EMPTY_CHAR: char = '.';
const APPLE_CHAR: char = '$';
const SNAKE_HEAD_CHAR: char = '@';
const SNAKE_BODY_CHAR: char = 'o';

const CONTROLS_HINT: &str = "wasd or hjkl to move, q to quit";

/// The board as `height` newline-terminated rows of `width` cells.
pub fn frame(game: &Game) -> String {
    let (w, h) = (game.width() as usize, game.height() as usize);
    let head = game.snake().head();
    let apple = game.apple();

    let mut buf = Vec::with_capacity(h * (w + 1));
    for y in 0..h {
        for x in 0..w {
            let pos = Point::new(x as i32, y as i32);
            let ch = if pos == head {
                SNAKE_HEAD_CHAR
            } else if pos == apple {
                APPLE_CHAR
            } else {
                EMPTY_CHAR
            };
            buf.push(ch);
        }
        buf.push('\n');
    }

    // Each row is w cells plus its newline
    for pos in &game.snake().body()[1..] {
        buf[pos.y as usize * (w + 1) + pos.x as usize] = SNAKE_BODY_CHAR;
    }

    buf.into_iter().collect()
}

pub fn draw<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;
    writeln!(out, "Score: {}", game.score())?;
    out.write_all(frame(game).as_bytes())?;
    writeln!(out, "{}", CONTROLS_HINT)?;
    out.flush()
}

pub fn draw_game_over<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    queue!(out, cursor::Show)?;
    writeln!(out, "Game Over! Score: {}", game.score())?;
    out.flush()
}
