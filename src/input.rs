use std::collections::VecDeque;

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::snake::Direction;

/// Stands in for keys that have no character, like F-keys or Tab. Maps to
/// `Command::Ignore`.
pub const NO_CHAR: char = '\0';

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
    Ignore,
}

impl Command {
    pub fn from_key(key: char) -> Self {
        match key {
            'w' | 'k' => Command::Turn(Direction::Up),
            'a' | 'h' => Command::Turn(Direction::Left),
            's' | 'j' => Command::Turn(Direction::Down),
            'd' | 'l' => Command::Turn(Direction::Right),
            'q' => Command::Quit,
            _ => Command::Ignore,
        }
    }
}

/// Yields one key per call, blocking until one is available.
pub trait KeySource {
    fn next_key(&mut self) -> Result<char>;
}

/// Reads keys from the controlling terminal. Raw mode is held only for the
/// duration of a single read.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<char> {
        let _raw = RawMode::enable()?;

        loop {
            match event::read().context("Failed to read from terminal")? {
                Event::Key(ev) if ev.kind == KeyEventKind::Press => return Ok(key_char(&ev)),
                _ => {}
            }
        }
    }
}

/// A fixed sequence of keys. Errors once the script runs out.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<char>,
}

impl ScriptedKeys {
    pub fn new(keys: &str) -> Self {
        ScriptedKeys { keys: keys.chars().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<char> {
        match self.keys.pop_front() {
            Some(key) => Ok(key),
            None => bail!("Key script exhausted"),
        }
    }
}

///////////////////////////////////////////////////////////////////////////

struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
    }
}

fn key_char(ev: &KeyEvent) -> char {
    // Raw mode swallows SIGINT, so Ctrl+C has to quit by hand
    if ev.modifiers.contains(KeyModifiers::CONTROL) && ev.code == KeyCode::Char('c') {
        return 'q';
    }

    match ev.code {
        KeyCode::Char(c) => c,
        KeyCode::Up => 'w',
        KeyCode::Left => 'a',
        KeyCode::Down => 's',
        KeyCode::Right => 'd',
        KeyCode::Esc => 'q',
        _ => NO_CHAR,
    }
}
