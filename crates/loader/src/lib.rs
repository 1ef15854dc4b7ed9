//! Trefunge loader: program directory to [`Volume`].
//!
//! A program is a directory of layer files. Each file named `<n>.3f` (with
//! `_<n>.3f` for negative `n`) holds one layer; layers are stacked in
//! ascending order of `n` and execution starts on layer 0. Other files in
//! the directory are ignored.
//!
//! # Usage
//!
//! ```
//! use trefunge_loader::load_layers;
//!
//! let volume = load_layers(&[(-1, "@"), (0, "1.@")]).unwrap();
//! assert_eq!(volume.depth(), 2);
//! assert_eq!(volume.entry(), 1);
//! ```

pub mod error;
pub mod naming;

pub use error::LoadError;
pub use naming::{parse_layer_name, LAYER_EXTENSION, NEGATIVE_MARKER};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use trefunge_common::{Layer, Volume};

/// A layer file found in a program directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerFile {
    /// Layer number encoded in the file name.
    pub number: i64,
    pub path: PathBuf,
}

/// List the layer files in `dir`, sorted by layer number.
///
/// Fails if two files encode the same number.
pub fn discover(dir: &Path) -> Result<Vec<LayerFile>, LoadError> {
    let read_dir_err = |source: std::io::Error| LoadError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let name = entry.file_name();
        let Some(number) = name.to_str().and_then(parse_layer_name) else {
            continue;
        };
        files.push(LayerFile {
            number,
            path: entry.path(),
        });
    }

    files.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.path.cmp(&b.path)));
    check_unique(files.iter().map(|f| (f.number, display_name(&f.path))))?;

    debug!(dir = %dir.display(), layers = files.len(), "discovered layer files");
    Ok(files)
}

/// Load every layer in `dir` into a volume whose entry is layer 0.
pub fn load_dir(dir: &Path) -> Result<Volume, LoadError> {
    let files = discover(dir)?;
    let entry = files
        .iter()
        .position(|f| f.number == 0)
        .ok_or_else(|| LoadError::NoEntryLayer {
            dir: dir.to_path_buf(),
        })?;

    let mut layers = Vec::with_capacity(files.len());
    for file in &files {
        let text = fs::read_to_string(&file.path).map_err(|source| LoadError::ReadLayer {
            path: file.path.clone(),
            source,
        })?;
        let layer = Layer::from_text(&text);
        debug!(
            number = file.number,
            width = layer.width(),
            height = layer.height(),
            "loaded layer"
        );
        layers.push(layer);
    }

    Ok(Volume::new(layers, entry)?)
}

/// Build a volume from in-memory `(layer number, text)` pairs.
///
/// Pairs may come in any order; they are stacked by layer number exactly as
/// files would be.
pub fn load_layers(sources: &[(i64, &str)]) -> Result<Volume, LoadError> {
    let mut sorted: Vec<(i64, &str)> = sources.to_vec();
    sorted.sort_by_key(|&(number, _)| number);
    check_unique(sorted.iter().map(|&(number, _)| (number, layer_file_name(number))))?;

    let entry = sorted
        .iter()
        .position(|&(number, _)| number == 0)
        .ok_or_else(|| LoadError::NoEntryLayer {
            dir: PathBuf::from("<memory>"),
        })?;
    let layers = sorted.iter().map(|&(_, text)| Layer::from_text(text)).collect();

    Ok(Volume::new(layers, entry)?)
}

/// The canonical file name for a layer number: `0.3f`, `_2.3f`, ...
pub fn layer_file_name(number: i64) -> String {
    if number < 0 {
        format!("{NEGATIVE_MARKER}{}.{LAYER_EXTENSION}", number.unsigned_abs())
    } else {
        format!("{number}.{LAYER_EXTENSION}")
    }
}

/// Reject adjacent equal numbers in an already-sorted sequence.
fn check_unique(sorted: impl Iterator<Item = (i64, String)>) -> Result<(), LoadError> {
    let mut prev: Option<(i64, String)> = None;
    for (number, name) in sorted {
        if let Some((prev_number, prev_name)) = prev.take() {
            if prev_number == number {
                return Err(LoadError::DuplicateLayer {
                    number,
                    first: prev_name,
                    second: name,
                });
            }
        }
        prev = Some((number, name));
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trefunge_common::Position;

    #[test]
    fn load_layers_orders_by_number() {
        let volume = load_layers(&[(2, "c"), (-3, "a"), (0, "b")]).unwrap();
        assert_eq!(volume.depth(), 3);
        assert_eq!(volume.entry(), 1);
        assert_eq!(volume.cell(Position::new(0, 0, 0)), Some('a'));
        assert_eq!(volume.cell(Position::new(0, 0, 1)), Some('b'));
        assert_eq!(volume.cell(Position::new(0, 0, 2)), Some('c'));
    }

    #[test]
    fn load_layers_requires_zero() {
        let err = load_layers(&[(1, "@")]).unwrap_err();
        assert!(matches!(err, LoadError::NoEntryLayer { .. }));
    }

    #[test]
    fn load_layers_rejects_duplicates() {
        let err = load_layers(&[(0, "@"), (1, "a"), (1, "b")]).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateLayer { number: 1, .. }));
    }

    #[test]
    fn load_layers_accepts_empty_layer() {
        let volume = load_layers(&[(0, "1.@"), (1, ""), (2, "\n\n")]).unwrap();
        assert_eq!(volume.depth(), 3);
        assert_eq!(volume.layer(1).map(|l| l.width()), Some(0));
        assert_eq!(volume.layer(2).map(|l| l.height()), Some(3));
    }

    #[test]
    fn layers_keep_their_own_dimensions() {
        let volume = load_layers(&[(0, "abcdef"), (1, "a\nb\nc")]).unwrap();
        let bottom = volume.layer(0).unwrap();
        let top = volume.layer(1).unwrap();
        assert_eq!((bottom.width(), bottom.height()), (6, 1));
        assert_eq!((top.width(), top.height()), (1, 3));
    }

    #[test]
    fn canonical_file_names() {
        assert_eq!(layer_file_name(0), "0.3f");
        assert_eq!(layer_file_name(5), "5.3f");
        assert_eq!(layer_file_name(-2), "_2.3f");
        for n in [-10, -1, 0, 1, 42] {
            assert_eq!(parse_layer_name(&layer_file_name(n)), Some(n));
        }
    }
}
