// gridstore-tools - platform/fs.rs
//
// Filesystem helpers shared by both tools. The core layer only sees the
// BufRead / Write handles returned here.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

/// Open a file for buffered line reading.
pub fn open_buffered(path: &Path) -> io::Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Create (or truncate) a file for buffered writing.
pub fn create_truncated(path: &Path) -> io::Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

/// Create `dir` and any missing parents. Existing directories are fine.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    tracing::debug!(dir = %dir.display(), "Creating directory");
    fs::create_dir_all(dir)
}
