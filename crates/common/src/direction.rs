//! Movement directions for the instruction pointer.

use std::fmt;

/// One of the six axis-aligned unit vectors the instruction pointer can
/// travel along.
///
/// `Up` and `Down` follow screen convention: `Up` decreases `y`. `Zenith`
/// moves to the next layer (`z + 1`), `Nadir` to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// `>`: +x
    #[default]
    Right,
    /// `<`: -x
    Left,
    /// `^`: -y
    Up,
    /// `v`: +y
    Down,
    /// `z`: +z
    Zenith,
    /// `n`: -z
    Nadir,
}

/// All six directions, in the order the random-direction instruction
/// indexes them.
pub const ALL_DIRECTIONS: [Direction; 6] = [
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::Down,
    Direction::Zenith,
    Direction::Nadir,
];

impl Direction {
    /// The unit vector `(dx, dy, dz)` for this direction.
    pub fn delta(self) -> (i64, i64, i64) {
        match self {
            Direction::Right => (1, 0, 0),
            Direction::Left => (-1, 0, 0),
            Direction::Up => (0, -1, 0),
            Direction::Down => (0, 1, 0),
            Direction::Zenith => (0, 0, 1),
            Direction::Nadir => (0, 0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "+x",
            Direction::Left => "-x",
            Direction::Up => "-y",
            Direction::Down => "+y",
            Direction::Zenith => "+z",
            Direction::Nadir => "-z",
        };
        f.write_str(name)
    }
}
