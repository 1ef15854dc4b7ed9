//! Program representation: layers of character cells stacked along z.
//!
//! Each [`Layer`] keeps its own width and height; layers are never padded to
//! match one another. A [`Volume`] is the ordered stack of layers plus the
//! index of the entry layer.

use std::fmt;

use crate::direction::Direction;
use crate::error::GridError;

/// A cell coordinate inside a volume.
///
/// `z` is a depth index into the volume's layer list, not the layer number
/// encoded in a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Position {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A rectangular grid of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Layer {
    /// Parse layer text.
    ///
    /// Lines are split on `\n`, so text ending in a newline gets a final
    /// blank row. A `\r` left at the end of a line is dropped. Every row is
    /// right-padded with spaces to the length of the longest line.
    pub fn from_text(text: &str) -> Self {
        let mut rows: Vec<Vec<char>> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Self { rows, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The character at `(x, y)`, or `None` when the coordinate lies outside
    /// the layer.
    pub fn get(&self, x: i64, y: i64) -> Option<char> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    /// Overwrite the character at `(x, y)`. Returns `false`, leaving the
    /// layer untouched, when the coordinate lies outside the layer.
    pub fn set(&mut self, x: i64, y: i64, value: char) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return false;
        };
        match self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Row `y` as text, including padding.
    pub fn row(&self, y: usize) -> Option<String> {
        self.rows.get(y).map(|row| row.iter().collect())
    }
}

/// The full program: layers ordered by depth, plus the entry layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    layers: Vec<Layer>,
    entry: usize,
}

impl Volume {
    /// Build a volume from layers ordered by depth.
    ///
    /// Zero-width layers are accepted; only moving onto one fails.
    pub fn new(layers: Vec<Layer>, entry: usize) -> Result<Self, GridError> {
        if layers.is_empty() {
            return Err(GridError::NoLayers);
        }
        if entry >= layers.len() {
            return Err(GridError::EntryOutOfRange {
                entry,
                depth: layers.len(),
            });
        }
        Ok(Self { layers, entry })
    }

    /// A one-layer volume from text. Convenient for tests and embedding.
    pub fn single(text: &str) -> Result<Self, GridError> {
        Self::new(vec![Layer::from_text(text)], 0)
    }

    /// Number of layers.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Depth index of the layer execution starts on.
    pub fn entry(&self) -> usize {
        self.entry
    }

    pub fn layer(&self, z: usize) -> Option<&Layer> {
        self.layers.get(z)
    }

    pub fn layer_mut(&mut self, z: usize) -> Option<&mut Layer> {
        self.layers.get_mut(z)
    }

    /// The character under `pos`, or `None` if `pos` is outside the volume.
    pub fn cell(&self, pos: Position) -> Option<char> {
        self.layers.get(pos.z)?.rows.get(pos.y)?.get(pos.x).copied()
    }

    /// Move one cell from `pos` along `dir`, wrapping each axis.
    ///
    /// z wraps first; x and y then wrap against the extent of the layer the
    /// pointer lands on, so the result is a valid cell even when the new
    /// layer is smaller than the old one. `None` when that layer is empty.
    pub fn advance(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dx, dy, dz) = dir.delta();
        let z = wrap(pos.z, dz, self.layers.len())?;
        let layer = self.layers.get(z)?;
        Some(Position {
            x: wrap(pos.x, dx, layer.width())?,
            y: wrap(pos.y, dy, layer.height())?,
            z,
        })
    }
}

/// `None` for a zero extent.
fn wrap(coord: usize, delta: i64, extent: usize) -> Option<usize> {
    let extent = i64::try_from(extent).ok()?;
    (coord as i64 + delta)
        .checked_rem_euclid(extent)
        .map(|v| v as usize)
}
