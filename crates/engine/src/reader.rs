// crates/engine/src/reader.rs
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Whole-input reads; counting never starts before the input is in memory.
pub struct FileReader;

impl FileReader {
    /// Read the file at `path` in full.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        Self::read_all(BufReader::new(File::open(path)?))
    }

    pub fn read_all<R: Read>(mut reader: R) -> std::io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
