use std::io::Write;

use anyhow::{ensure, Context, Result};
use rand::Rng;

use crate::config::GameConfig;
use crate::grid::Point;
use crate::input::{Command, KeySource};
use crate::render;
use crate::snake::{Direction, Snake};

#[derive(Debug, Clone)]
pub struct Game {
    apple: Point,
    width: i32,
    height: i32,
    over: bool,
    score: u32,
    snake: Snake,
    heading: Option<Direction>,
}

impl Game {
    /// Starts a game with the snake's head and the apple at random cells.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let head = random_point(rng, config.width, config.height);
        let apple = random_point(rng, config.width, config.height);
        Game::from_parts(config, Snake::new(head), apple)
    }

    pub fn from_parts(config: &GameConfig, snake: Snake, apple: Point) -> Result<Self> {
        config.validate()?;
        let (width, height) = (config.width, config.height);

        ensure!(apple.in_bounds(width, height), "apple {:?} is off the board", apple);
        ensure!(
            snake.body().iter().all(|p| p.in_bounds(width, height)),
            "snake leaves the {}x{} board",
            width,
            height
        );

        Ok(Game { apple, width, height, over: false, score: 0, snake, heading: None })
    }

    pub fn apple(&self) -> Point {
        self.apple
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    /// Plays one turn for `key`: apply it, move along the heading, update.
    /// Quitting skips the move and the update.
    pub fn turn<R: Rng>(&mut self, key: char, rng: &mut R) {
        let command = Command::from_key(key);
        tracing::debug!(?key, ?command, "turn");

        self.apply(command);
        if self.over {
            return;
        }

        if let Some(dir) = self.heading {
            self.snake.step(dir);
        }
        self.update(rng);
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Turn(dir) => self.heading = Some(dir),
            Command::Quit => {
                tracing::info!(score = self.score, "player quit");
                self.over = true;
            }
            Command::Ignore => {}
        }
    }

    /// Eat, then check for a bite, then wrap the head. The checks see the
    /// head before it wraps.
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        let head = self.snake.head();
        let len_before = self.snake.len();

        if head == self.apple {
            self.score += 1;
            self.snake.grow();
            self.apple = random_point(rng, self.width, self.height);
            tracing::debug!(score = self.score, apple = ?self.apple, "apple eaten");
        }

        // The segment grown this turn sits on the tail and is not a collision
        if self.snake.body()[1..len_before].contains(&head) {
            tracing::info!(score = self.score, ?head, "snake bit itself");
            self.over = true;
        }

        self.snake.set_head(head.wrapped(self.width, self.height));
    }
}

/// Runs the turn loop until the game ends, then prints the final score.
pub fn play<K, W, R>(game: &mut Game, keys: &mut K, out: &mut W, rng: &mut R) -> Result<()>
where
    K: KeySource,
    W: Write,
    R: Rng,
{
    while !game.is_over() {
        render::draw(game, out).context("Failed to draw frame")?;
        let key = keys.next_key()?;
        game.turn(key, rng);
    }

    render::draw_game_over(game, out).context("Failed to print final score")?;
    Ok(())
}

///////////////////////////////////////////////////////////////////////////

fn random_point<R: Rng>(rng: &mut R, width: i32, height: i32) -> Point {
    Point::new(rng.gen_range(0..width), rng.gen_range(0..height))
}
