//! Turn-based snake on a wrapping board. One keypress per turn.

pub mod config;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;
