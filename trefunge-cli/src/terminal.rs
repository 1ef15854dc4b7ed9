//! Unbuffered keyboard input for interactive runs.
//!
//! The terminal is put in raw mode only while a key is awaited, so program
//! output keeps normal line handling. Keys are not echoed.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::trace;
use trefunge_vm::CharInput;

/// Reads one keypress per request straight from the terminal.
#[derive(Debug, Default)]
pub struct TerminalInput {
    _private: (),
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Leaves raw mode when dropped, including on early return.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl CharInput for TerminalInput {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let _raw = RawMode::enable()?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            trace!(code = ?key.code, modifiers = ?key.modifiers, "key");
            match translate_key(key) {
                Key::Char(c) => return Ok(Some(c)),
                Key::EndOfInput => return Ok(None),
                Key::Interrupt => {
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"))
                }
                Key::Ignored => {}
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Char(char),
    EndOfInput,
    Interrupt,
    Ignored,
}

fn translate_key(key: KeyEvent) -> Key {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Key::Interrupt,
        KeyCode::Char('d') if ctrl => Key::EndOfInput,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Char('\r'),
        KeyCode::Tab => Key::Char('\t'),
        KeyCode::Backspace => Key::Char('\x7f'),
        KeyCode::Esc => Key::Char('\x1b'),
        _ => Key::Ignored,
    }
}
