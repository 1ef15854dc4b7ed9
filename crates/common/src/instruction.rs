//! Instruction set: one character, one operation.
//!
//! Decoding is a single exhaustive match over the cell character. Characters
//! with no entry are not instructions; the engine reports them as fatal when
//! it meets them outside string mode.

use crate::direction::Direction;

/// Every character that decodes to an instruction.
pub const SYMBOLS: &str = " +-*/%!`><^vzn?_|\":\\$.,#gp&~@0123456789";

/// A decoded grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// ` `: do nothing.
    Nop,
    /// `+`: pop a, pop b, push b + a.
    Add,
    /// `-`: pop a, pop b, push b - a.
    Subtract,
    /// `*`: pop a, pop b, push b * a.
    Multiply,
    /// `/`: pop a, pop b, push b * a.
    ///
    /// Existing programs and their recorded outputs depend on this symbol
    /// multiplying. It is a known defect kept for compatibility.
    Divide,
    /// `%`: pop a, pop b, push the truncating remainder of b / a.
    Modulo,
    /// `!`: pop x, push 1 if x is 0, else 0.
    Not,
    /// `` ` ``: pop a, pop b, push 1 if b > a, else 0.
    Greater,
    /// `> < ^ v z n`: set the direction.
    Go(Direction),
    /// `?`: set a uniformly random direction.
    Random,
    /// `_`: pop x, go +x if x is 0, else -x.
    HorizontalIf,
    /// `|`: pop x, go +y if x is 0, else -y.
    VerticalIf,
    /// `"`: toggle string mode.
    ToggleString,
    /// `:`: duplicate the top value.
    Duplicate,
    /// `\`: swap the top two values.
    Swap,
    /// `$`: pop and drop.
    Discard,
    /// `.`: pop and print as a decimal integer.
    OutputInt,
    /// `,`: pop and print as a character.
    OutputChar,
    /// `#`: skip the next cell.
    Bridge,
    /// `g`: pop y, pop x, push the cell's character code (0 if outside).
    Get,
    /// `p`: pop y, pop x, pop v, store v at the cell.
    Put,
    /// `&`: read one decimal digit.
    InputInt,
    /// `~`: read one character.
    InputChar,
    /// `@`: halt.
    Halt,
    /// `0`-`9`: push the digit.
    Digit(u8),
}

impl Instruction {
    /// Decode a grid character. Returns `None` for characters that are not
    /// part of the instruction set.
    pub fn decode(symbol: char) -> Option<Instruction> {
        let instr = match symbol {
            ' ' => Instruction::Nop,
            '+' => Instruction::Add,
            '-' => Instruction::Subtract,
            '*' => Instruction::Multiply,
            '/' => Instruction::Divide,
            '%' => Instruction::Modulo,
            '!' => Instruction::Not,
            '`' => Instruction::Greater,
            '>' => Instruction::Go(Direction::Right),
            '<' => Instruction::Go(Direction::Left),
            '^' => Instruction::Go(Direction::Up),
            'v' => Instruction::Go(Direction::Down),
            'z' => Instruction::Go(Direction::Zenith),
            'n' => Instruction::Go(Direction::Nadir),
            '?' => Instruction::Random,
            '_' => Instruction::HorizontalIf,
            '|' => Instruction::VerticalIf,
            '"' => Instruction::ToggleString,
            ':' => Instruction::Duplicate,
            '\\' => Instruction::Swap,
            '$' => Instruction::Discard,
            '.' => Instruction::OutputInt,
            ',' => Instruction::OutputChar,
            '#' => Instruction::Bridge,
            'g' => Instruction::Get,
            'p' => Instruction::Put,
            '&' => Instruction::InputInt,
            '~' => Instruction::InputChar,
            '@' => Instruction::Halt,
            '0'..='9' => Instruction::Digit(symbol as u8 - b'0'),
            _ => return None,
        };
        Some(instr)
    }

    /// The grid character this instruction decodes from.
    pub fn symbol(&self) -> char {
        match self {
            Instruction::Nop => ' ',
            Instruction::Add => '+',
            Instruction::Subtract => '-',
            Instruction::Multiply => '*',
            Instruction::Divide => '/',
            Instruction::Modulo => '%',
            Instruction::Not => '!',
            Instruction::Greater => '`',
            Instruction::Go(Direction::Right) => '>',
            Instruction::Go(Direction::Left) => '<',
            Instruction::Go(Direction::Up) => '^',
            Instruction::Go(Direction::Down) => 'v',
            Instruction::Go(Direction::Zenith) => 'z',
            Instruction::Go(Direction::Nadir) => 'n',
            Instruction::Random => '?',
            Instruction::HorizontalIf => '_',
            Instruction::VerticalIf => '|',
            Instruction::ToggleString => '"',
            Instruction::Duplicate => ':',
            Instruction::Swap => '\\',
            Instruction::Discard => '$',
            Instruction::OutputInt => '.',
            Instruction::OutputChar => ',',
            Instruction::Bridge => '#',
            Instruction::Get => 'g',
            Instruction::Put => 'p',
            Instruction::InputInt => '&',
            Instruction::InputChar => '~',
            Instruction::Halt => '@',
            Instruction::Digit(d) => char::from(b'0' + d),
        }
    }
}
