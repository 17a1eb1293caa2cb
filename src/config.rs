use anyhow::{ensure, Result};

const BOARD_WIDTH: i32 = 20;
const BOARD_HEIGHT: i32 = 10;

/// Board dimensions. Fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { width: BOARD_WIDTH, height: BOARD_HEIGHT }
    }
}

impl GameConfig {
    pub fn new(width: i32, height: i32) -> Self {
        GameConfig { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "board must be at least 1x1, got {}x{}",
            self.width,
            self.height
        );
        Ok(())
    }
}
