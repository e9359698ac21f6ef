use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Raw whole-file read/write helpers.
///
/// An unopenable path is a reported condition, not a fatal one: a
/// diagnostic goes to stderr and the error is returned explicitly. No read
/// or write is attempted after a failed open, and nothing here panics.

/// Reads an entire file into a freshly allocated buffer.
pub fn read_file(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| {
        eprintln!("diagkit: cannot open file {}: {}", path.display(), e);
        e
    })?;

    let size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
    let mut buf = Vec::with_capacity(size);
    file.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Writes exactly `buf.len()` bytes to `path`, creating or truncating it.
pub fn write_file(path: impl AsRef<Path>, buf: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|e| {
        eprintln!("diagkit: cannot open file {}: {}", path.display(), e);
        e
    })?;
    file.write_all(buf)
}
