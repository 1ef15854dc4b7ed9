//! Error types for the Trefunge loader.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use trefunge_common::GridError;

/// Errors produced while turning a program directory into a volume.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The program directory could not be listed.
    #[error("cannot read program directory '{}': {source}", dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A layer file could not be read as text.
    #[error("cannot read layer file '{}': {source}", path.display())]
    ReadLayer {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No layer file encodes layer number 0.
    #[error("no entry layer (0.3f) in '{}'", dir.display())]
    NoEntryLayer { dir: PathBuf },

    /// Two files encode the same layer number.
    #[error("layer {number} defined twice: '{first}' and '{second}'")]
    DuplicateLayer {
        number: i64,
        first: String,
        second: String,
    },

    /// The layers could not form a runnable volume.
    #[error(transparent)]
    Grid(#[from] GridError),
}
