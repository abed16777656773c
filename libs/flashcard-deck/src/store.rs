//! Line-oriented record files.
//!
//! A record file holds one entry per line, newline-terminated. Questions and
//! answers live in two such files, paired by line number.

use crate::error::{DeckError, Result};
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Outcome of reading a record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Load {
    /// The file exists; its lines in file order.
    Found(Vec<String>),
    /// The file does not exist and reads as empty.
    Missing(PathBuf),
}

impl Load {
    /// The `FileMissing` condition, if the file was absent.
    pub fn condition(&self) -> Option<DeckError> {
        match self {
            Self::Found(_) => None,
            Self::Missing(path) => Some(DeckError::FileMissing { path: path.clone() }),
        }
    }

    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::Found(lines) => lines,
            Self::Missing(_) => Vec::new(),
        }
    }
}

/// Read a record file, stripping trailing whitespace from every line.
///
/// A missing file is not an error; it is logged and reported as [`Load::Missing`].
pub fn load(path: &Path) -> Result<Load> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Error: File '{}' not found.", path.display());
            return Ok(Load::Missing(path.to_path_buf()));
        }
        Err(source) => {
            return Err(DeckError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let lines: Vec<String> = content.lines().map(|l| l.trim_end().to_string()).collect();
    tracing::debug!(path = %path.display(), count = lines.len(), "loaded records");
    Ok(Load::Found(lines))
}

/// Overwrite a record file with one line per entry.
pub fn save(path: &Path, lines: &[String]) -> Result<()> {
    let write_error = |source| DeckError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    tracing::debug!(path = %path.display(), count = lines.len(), "saved records");
    Ok(())
}
