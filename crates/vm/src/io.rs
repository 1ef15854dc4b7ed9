//! Input devices for `&` and `~`.
//!
//! The engine asks for exactly one character per request and blocks until it
//! arrives. Output needs no special trait: any [`std::io::Write`] works.

use std::collections::VecDeque;
use std::io::{self, Read};

/// A source of single characters.
pub trait CharInput {
    /// Block until one character is available. `Ok(None)` means the source
    /// is closed and will never produce another character.
    fn read_char(&mut self) -> io::Result<Option<char>>;
}

impl<T: CharInput + ?Sized> CharInput for &mut T {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }
}

impl<T: CharInput + ?Sized> CharInput for Box<T> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }
}

/// Input fixed in advance.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    chars: VecDeque<char>,
}

impl ScriptedInput {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Characters not yet consumed.
    pub fn remaining(&self) -> usize {
        self.chars.len()
    }
}

impl CharInput for ScriptedInput {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.pop_front())
    }
}

/// UTF-8 characters decoded one at a time from a byte reader.
///
/// Reads only the bytes of the character being decoded, so no input is
/// buffered past the current request.
#[derive(Debug)]
pub struct ReaderInput<R> {
    reader: R,
}

impl<R: Read> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> CharInput for ReaderInput<R> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };
        let width = match first {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Err(invalid_utf8()),
        };
        let mut buf = [first, 0, 0, 0];
        self.reader.read_exact(&mut buf[1..width])?;
        let text = std::str::from_utf8(&buf[..width]).map_err(|_| invalid_utf8())?;
        Ok(text.chars().next())
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "input is not valid UTF-8")
}
