// gridstore-tools - core/export.rs
//
// Store-path index export.
// Core layer: writes to any Write trait object.

use std::collections::BTreeSet;
use std::io::{self, Write};

/// Write the store paths in lexicographic order, one per line.
///
/// Each path is followed by `\n`; an empty set writes nothing.
/// Returns the number of paths written.
pub fn write_index<W: Write>(paths: &BTreeSet<String>, mut writer: W) -> io::Result<usize> {
    for path in paths {
        writer.write_all(path.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(paths.len())
}
