//! Layer filename convention.
//!
//! A layer file is named `<number>.3f`, where `<number>` is one or more ASCII
//! digits with an optional leading `_` for negative numbers: `_2.3f` is
//! layer -2. Files that do not match are not layers.

use std::path::Path;

/// File extension of layer files.
pub const LAYER_EXTENSION: &str = "3f";

/// Prefix marking a negative layer number.
pub const NEGATIVE_MARKER: char = '_';

/// Parse the layer number out of a file name, or `None` if the name does
/// not follow the layer convention.
pub fn parse_layer_name(file_name: &str) -> Option<i64> {
    let path = Path::new(file_name);
    if path.extension()?.to_str()? != LAYER_EXTENSION {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let (negative, digits) = match stem.strip_prefix(NEGATIVE_MARKER) {
        Some(rest) => (true, rest),
        None => (false, stem),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
