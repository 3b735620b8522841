use crate::config::Config;
use crate::reader::FileReader;
use crate::stats::{FileTally, Tally};
use std::io::Read;
use std::path::Path;
use tally_shared_kernel::{InfrastructureError, Result};
use tracing::debug;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

impl Tally {
    /// Fold one line (delimiter already stripped) into the tally.
    pub fn record_line(&mut self, line: &str) {
        self.lines += 1usize;
        self.words += line.split_whitespace().count();
        self.chars += bytecount::num_chars(line.as_bytes());
    }

    /// Count `text` split on every `\n`.
    ///
    /// A trailing newline yields a final empty line, so the line count is
    /// always one more than the number of `\n` bytes.
    pub fn from_text(text: &str) -> Self {
        let mut tally = Self::default();
        for line in text.split('\n') {
            tally.record_line(line);
        }
        tally
    }
}

/// Count one configured input, reading stdin for [`STDIN_PATH`].
///
/// # Errors
///
/// Fails when the input cannot be read or is not valid UTF-8 (unless
/// `config.lossy` is set).
pub fn process_input(path: &Path, config: &Config) -> Result<FileTally> {
    if path == Path::new(STDIN_PATH) {
        count_reader(std::io::stdin().lock(), path, config)
    } else {
        count_file(path, config)
    }
}

/// Read `path` in full and count it.
///
/// # Errors
///
/// A missing file surfaces as [`InfrastructureError::FileRead`] with
/// `io::ErrorKind::NotFound`; it never degrades to an empty tally.
pub fn count_file(path: &Path, config: &Config) -> Result<FileTally> {
    let bytes = FileReader::read_to_end(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    count_bytes(path, bytes, config)
}

/// Drain `reader` and count it, reporting it under `label`.
///
/// # Errors
///
/// Same conditions as [`count_file`].
pub fn count_reader<R: Read>(reader: R, label: &Path, config: &Config) -> Result<FileTally> {
    let bytes = FileReader::read_all(reader).map_err(|source| InfrastructureError::FileRead {
        path: label.to_path_buf(),
        source,
    })?;
    count_bytes(label, bytes, config)
}

fn count_bytes(path: &Path, bytes: Vec<u8>, config: &Config) -> Result<FileTally> {
    let size = bytes.len() as u64;
    let tally = match String::from_utf8(bytes) {
        Ok(text) => Tally::from_text(&text),
        Err(err) if config.lossy => Tally::from_text(&String::from_utf8_lossy(err.as_bytes())),
        Err(err) => {
            return Err(InfrastructureError::Decode {
                path: path.to_path_buf(),
                details: err.utf8_error().to_string(),
            }
            .into());
        }
    };

    debug!(
        path = %path.display(),
        size,
        lines = tally.lines.value(),
        words = tally.words.value(),
        chars = tally.chars.value(),
        "counted input"
    );

    Ok(FileTally::new(path, size, tally))
}
