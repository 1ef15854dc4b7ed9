//! Errors raised while assembling layers into a volume.

use thiserror::Error;

/// A set of layers that cannot form a runnable volume.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No layers were supplied.
    #[error("program has no layers")]
    NoLayers,

    /// The entry layer index does not name a layer.
    #[error("entry layer {entry} out of range (depth {depth})")]
    EntryOutOfRange { entry: usize, depth: usize },
}
